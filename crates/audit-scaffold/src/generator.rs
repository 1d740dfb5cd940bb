//! Scaffold generator
//!
//! Creates the project directory layout and renders the four shared
//! documents under `generated/`, then verifies what was written.

use crate::docs;
use crate::error::Result;
use crate::language::Language;
use crate::template::DocTemplate;
use crate::workflow::stock_analysis_workflow;
use audit_utils::Settings;
use chrono::Local;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directories created for a project checkout
pub const DIRECTORIES: [&str; 7] = [
    "generated",
    "output",
    "output/reports",
    "tmp",
    "backup",
    "logs",
    "tests/test_data",
];

/// Files produced under the project root
pub const GENERATED_FILES: [&str; 4] = [
    "generated/README_STOCK_PROJECT.md",
    "generated/architecture_diagram.md",
    "generated/n8n_workflow_template.json",
    "generated/env_example.txt",
];

/// A file written by the generator
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Existence/size check of one expected file
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub exists: bool,
    pub bytes: u64,
}

/// Renders the shared project package into a directory
pub struct ScaffoldGenerator {
    root: PathBuf,
    language: Language,
    settings: Settings,
}

impl ScaffoldGenerator {
    /// Create a generator rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            language: Language::default(),
            settings: Settings::default(),
        }
    }

    /// Set the document language (falls back to Japanese where unavailable)
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Use specific settings when rendering the environment example
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Create the project directory layout
    pub fn create_directories(&self) -> Result<()> {
        for dir in DIRECTORIES {
            let path = self.root.join(dir);
            std::fs::create_dir_all(&path)?;
            debug!(dir = %path.display(), "Created directory");
        }
        Ok(())
    }

    /// Generate directories and all four documents
    pub fn generate_all(&self) -> Result<Vec<GeneratedFile>> {
        self.create_directories()?;

        let date = Local::now().format("%Y-%m-%d").to_string();

        let mut written = Vec::new();
        written.push(self.write_readme(&date)?);
        written.push(self.write_architecture_diagram(&date)?);
        written.push(self.write_workflow_template()?);
        written.push(self.write_env_example()?);

        Ok(written)
    }

    /// Verify that every expected file exists, with its size
    pub fn verify(&self) -> Vec<FileReport> {
        GENERATED_FILES
            .iter()
            .map(|rel| {
                let path = self.root.join(rel);
                let bytes = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
                FileReport {
                    exists: path.exists(),
                    path,
                    bytes,
                }
            })
            .collect()
    }

    fn write_readme(&self, date: &str) -> Result<GeneratedFile> {
        let template = docs::readme_template()?;
        let content = template.render_with_fallback(
            &self.language,
            &json!({ "date": date, "version": self.settings.project.version }),
        )?;
        self.write_file("generated/README_STOCK_PROJECT.md", &content)
    }

    fn write_architecture_diagram(&self, date: &str) -> Result<GeneratedFile> {
        let template = docs::architecture_template()?;
        let content = template.render_with_fallback(&self.language, &json!({ "date": date }))?;
        self.write_file("generated/architecture_diagram.md", &content)
    }

    fn write_workflow_template(&self) -> Result<GeneratedFile> {
        let workflow = stock_analysis_workflow();
        let content = serde_json::to_string_pretty(&workflow)?;
        self.write_file("generated/n8n_workflow_template.json", &content)
    }

    fn write_env_example(&self) -> Result<GeneratedFile> {
        let template = docs::env_example_template()?;
        let s = &self.settings;
        let content = template.render_with_fallback(
            &self.language,
            &json!({
                "project_root": s.project.root.display().to_string(),
                "project_name": s.project.name,
                "version": s.project.version,
                "screener_output": s.outputs.screener_output.display().to_string(),
                "analysis_result": s.outputs.analysis_result.display().to_string(),
                "report_output": s.outputs.report_dir.display().to_string(),
                "n8n_base_url": s.n8n.base_url,
                "slack_channel": s.notify.slack_channel,
                "trading_mode": s.broker.trading_mode,
                "min_dividend_yield": s.screening.min_dividend_yield,
                "max_per_ratio": s.screening.max_per_ratio,
                "min_market_cap": s.screening.min_market_cap,
                "max_daily_trades": s.risk.max_daily_trades,
                "max_total_exposure": s.risk.max_total_exposure,
                "risk_tolerance": s.risk.tolerance,
            }),
        )?;
        self.write_file("generated/env_example.txt", &content)
    }

    fn write_file(&self, rel: impl AsRef<Path>, content: &str) -> Result<GeneratedFile> {
        let path = self.root.join(rel);
        std::fs::write(&path, content)?;
        debug!(file = %path.display(), bytes = content.len(), "Wrote file");
        Ok(GeneratedFile {
            bytes: content.len() as u64,
            path,
        })
    }
}
