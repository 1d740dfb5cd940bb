//! Audit engine - the schema-validated evaluation pipeline

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::evaluator::HeuristicEvaluator;
use crate::links::{LinkChecker, OfflineLinkChecker};
use audit_core::{AuditContext, AuditInput, AuditReport, Evaluator, LinkStatus};
use audit_schema::SchemaSet;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// The audit pipeline: validate input, evaluate, check links, validate output
pub struct AuditEngine {
    schemas: SchemaSet,
    evaluator: Arc<dyn Evaluator>,
    link_checker: Arc<dyn LinkChecker>,
    config: EngineConfig,
}

impl AuditEngine {
    /// Create a new engine builder
    pub fn builder() -> AuditEngineBuilder {
        AuditEngineBuilder::new()
    }

    /// Validate a request against the input schema without evaluating it
    pub fn validate(&self, input: &Value) -> Result<()> {
        self.schemas.input().validate(input)?;
        Ok(())
    }

    /// Run the full audit pipeline on a request
    ///
    /// The produced report is validated against the output schema before it
    /// is returned; a violation there is an engine bug, not a user error.
    pub async fn run(&self, input_json: &Value) -> Result<AuditReport> {
        let started = Instant::now();

        self.validate(input_json)?;
        debug!("Input validation passed");

        let input: AuditInput = serde_json::from_value(input_json.clone())?;
        let config = input.config();

        let mut context = AuditContext::new()
            .with_session_id(Uuid::new_v4().to_string())
            .with_strict_mode(config.strict_mode)
            .with_target_score(config.target_score);

        let mut report = self
            .evaluator
            .evaluate(&input, &mut context)
            .await
            .map_err(EngineError::from)?;

        if config.check_link_validity && !input.asp_links.is_empty() {
            let results = self.link_checker.check_all(&input.asp_links).await;

            if config.strict_mode && results.iter().any(|r| r.status != LinkStatus::Valid) {
                debug!("Strict mode: invalid link found, withdrawing auto-publish eligibility");
                report.overall_score.auto_publish_eligible = false;
            }

            report.link_validation_results = results;
        }

        report.metadata.processing_time_seconds = started.elapsed().as_secs_f64();

        let report_json = serde_json::to_value(&report)?;
        self.schemas.output().validate(&report_json)?;
        debug!("Output validation passed");

        info!(
            audit_id = %report.audit_id,
            total = report.overall_score.total,
            grade = %report.overall_score.grade,
            auto_publish = report.overall_score.auto_publish_eligible,
            "Audit complete"
        );

        Ok(report)
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Builder for AuditEngine
pub struct AuditEngineBuilder {
    schemas: Option<SchemaSet>,
    evaluator: Option<Arc<dyn Evaluator>>,
    link_checker: Option<Arc<dyn LinkChecker>>,
    config: EngineConfig,
}

impl AuditEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            schemas: None,
            evaluator: None,
            link_checker: None,
            config: EngineConfig::default(),
        }
    }

    /// Use pre-loaded schemas instead of loading from the config
    pub fn schemas(mut self, schemas: SchemaSet) -> Self {
        self.schemas = Some(schemas);
        self
    }

    /// Set the evaluator (default: `HeuristicEvaluator`)
    pub fn evaluator(mut self, evaluator: Arc<dyn Evaluator>) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    /// Set the link checker (default: `OfflineLinkChecker`)
    pub fn link_checker(mut self, checker: Arc<dyn LinkChecker>) -> Self {
        self.link_checker = Some(checker);
        self
    }

    /// Set the full configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the engine
    ///
    /// Schemas are resolved in order: explicitly provided, loaded from the
    /// configured schema directory, or the bundled copies.
    pub fn build(self) -> Result<AuditEngine> {
        self.config.validate()?;

        let schemas = match self.schemas {
            Some(schemas) => schemas,
            None => match &self.config.schema_dir {
                Some(dir) => SchemaSet::load(dir)?,
                None => SchemaSet::bundled()?,
            },
        };

        let evaluator = self.evaluator.unwrap_or_else(|| {
            Arc::new(HeuristicEvaluator::new().with_version(self.config.evaluator_version.clone()))
        });

        Ok(AuditEngine {
            schemas,
            evaluator,
            link_checker: self.link_checker.unwrap_or_else(|| Arc::new(OfflineLinkChecker)),
            config: self.config,
        })
    }
}

impl Default for AuditEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
