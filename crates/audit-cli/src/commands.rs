//! Command implementations for the orchestrator binary

use anyhow::{Context, bail};
use audit_engine::{AuditEngine, EngineConfig, HttpLinkChecker};
use audit_scaffold::{Language, ScaffoldGenerator};
use audit_utils::Settings;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Arguments for the evaluate command
pub struct EvaluateArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub validate_only: bool,
    pub schema_dir: Option<PathBuf>,
    pub live_links: bool,
}

/// Run the audit pipeline on an input file
pub async fn evaluate(args: EvaluateArgs) -> anyhow::Result<()> {
    let mut config_builder = EngineConfig::builder();
    if let Some(dir) = &args.schema_dir {
        debug!("Loading schemas from: {}", dir.display());
        config_builder = config_builder.schema_dir(dir);
    } else {
        debug!("Using bundled schemas");
    }
    let config = config_builder.build()?;

    let mut engine_builder = AuditEngine::builder().config(config.clone());
    if args.live_links {
        engine_builder = engine_builder.link_checker(Arc::new(HttpLinkChecker::new(&config)?));
    }
    let engine = engine_builder.build()?;

    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Error loading input file: {}", args.input.display()))?;
    let input_json: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Error loading input file: {}", args.input.display()))?;

    if args.validate_only {
        engine.validate(&input_json)?;
        debug!("Input validation passed");
        println!("Validation complete - input is valid");
        return Ok(());
    }

    debug!("Starting content evaluation...");
    let report = engine.run(&input_json).await?;
    info!("{}", report.summary());

    let rendered = serde_json::to_string_pretty(&report)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Error writing output file: {}", path.display()))?;
            debug!("Results written to: {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Generate the shared project package
pub fn scaffold(root: Option<PathBuf>, lang: Option<String>) -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    let root = root.unwrap_or_else(|| settings.project.root.clone());

    let mut generator = ScaffoldGenerator::new(&root).with_settings(settings);
    if let Some(lang) = lang {
        generator = generator.with_language(Language::from_code(&lang));
    }

    info!("Generating project package under {}", root.display());
    generator.generate_all()?;

    let mut all_exist = true;
    for report in generator.verify() {
        if report.exists {
            println!("✅ {} ({} bytes)", report.path.display(), report.bytes);
        } else {
            println!("❌ {} - file not found", report.path.display());
            all_exist = false;
        }
    }

    if !all_exist {
        bail!("Some files failed to generate");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_sample_input(dir: &std::path::Path) -> PathBuf {
        let input = json!({
            "content": {
                "title": "Best Gaming Laptops 2024",
                "body": "Gaming laptops have evolved significantly in recent years. ".repeat(40),
                "meta": {
                    "target_keyword": "gaming laptops 2024",
                    "product_category": "electronics",
                    "asp_provider": "amazon"
                }
            },
            "asp_links": [
                {
                    "url": "https://example.com/affiliate/laptop1",
                    "product_name": "Gaming Laptop Pro",
                    "commission_rate": 5.5,
                    "priority": 1
                }
            ],
            "evaluation_config": {
                "strict_mode": false,
                "target_score": 114,
                "check_link_validity": true
            }
        });
        let path = dir.join("input.json");
        std::fs::write(&path, serde_json::to_string_pretty(&input).unwrap()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_evaluate_writes_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_sample_input(dir.path());
        let output = dir.path().join("report.json");

        evaluate(EvaluateArgs {
            input,
            output: Some(output.clone()),
            validate_only: false,
            schema_dir: None,
            live_links: false,
        })
        .await
        .unwrap();

        let raw = std::fs::read_to_string(&output).unwrap();
        let report: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(
            report["audit_id"]
                .as_str()
                .unwrap()
                .starts_with("audit_")
        );
        assert_eq!(report["overall_score"]["grade"], "GOOD");
    }

    #[tokio::test]
    async fn test_evaluate_validate_only() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_sample_input(dir.path());

        let result = evaluate(EvaluateArgs {
            input,
            output: None,
            validate_only: true,
            schema_dir: None,
            live_links: false,
        })
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_evaluate_missing_input_file() {
        let result = evaluate(EvaluateArgs {
            input: PathBuf::from("/nonexistent/file.json"),
            output: None,
            validate_only: false,
            schema_dir: None,
            live_links: false,
        })
        .await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Error loading input file"));
    }

    #[tokio::test]
    async fn test_evaluate_rejects_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        std::fs::write(
            &path,
            serde_json::to_string(&json!({
                "content": {"title": "t", "body": "b"},
                "asp_links": []
            }))
            .unwrap(),
        )
        .unwrap();

        let result = evaluate(EvaluateArgs {
            input: path,
            output: None,
            validate_only: true,
            schema_dir: None,
            live_links: false,
        })
        .await;
        assert!(result.is_err());
    }

    #[test]
    fn test_scaffold_generates_package() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(Some(dir.path().to_path_buf()), Some("ja".to_string())).unwrap();

        assert!(
            dir.path()
                .join("generated/README_STOCK_PROJECT.md")
                .is_file()
        );
        assert!(
            dir.path()
                .join("generated/n8n_workflow_template.json")
                .is_file()
        );
    }
}
