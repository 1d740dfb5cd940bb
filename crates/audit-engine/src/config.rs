//! Configuration for the audit engine

use crate::error::{EngineError, Result};
use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the audit engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Directory holding the audit schemas (None uses the bundled copies)
    pub schema_dir: Option<PathBuf>,

    /// Version string stamped into report metadata
    pub evaluator_version: String,

    /// Request timeout for link checking
    pub request_timeout: Duration,

    /// Link-check requests allowed per minute
    pub link_rate_limit: u32,

    /// Maximum redirects to follow per link
    pub max_redirects: u32,

    /// Maximum number of attempts for transient failures
    pub max_retries: u32,

    /// Initial backoff duration for retries
    pub retry_backoff_base: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            schema_dir: None,
            evaluator_version: env!("CARGO_PKG_VERSION").to_string(),
            request_timeout: Duration::from_secs(30),
            link_rate_limit: 60, // per minute
            max_redirects: 5,
            max_retries: 3,
            retry_backoff_base: Duration::from_millis(100),
        }
    }
}

impl EngineConfig {
    /// Create a new configuration builder
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_retries == 0 {
            return Err(EngineError::ConfigError(
                "max_retries must be greater than 0".to_string(),
            ));
        }

        if self.link_rate_limit == 0 {
            return Err(EngineError::ConfigError(
                "link_rate_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Retry policy derived from the retry knobs
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_retries,
            self.retry_backoff_base,
            Duration::from_secs(10),
            2.0,
        )
    }
}

/// Builder for EngineConfig
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    schema_dir: Option<PathBuf>,
    evaluator_version: Option<String>,
    request_timeout: Option<Duration>,
    link_rate_limit: Option<u32>,
    max_redirects: Option<u32>,
    max_retries: Option<u32>,
    retry_backoff_base: Option<Duration>,
}

impl EngineConfigBuilder {
    /// Set the schema directory
    pub fn schema_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.schema_dir = Some(dir.into());
        self
    }

    /// Set the evaluator version string
    pub fn evaluator_version(mut self, version: impl Into<String>) -> Self {
        self.evaluator_version = Some(version.into());
        self
    }

    /// Set the link-check request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the link-check rate limit (requests per minute)
    pub fn link_rate_limit(mut self, limit: u32) -> Self {
        self.link_rate_limit = Some(limit);
        self
    }

    /// Set the maximum redirects per link
    pub fn max_redirects(mut self, redirects: u32) -> Self {
        self.max_redirects = Some(redirects);
        self
    }

    /// Set maximum retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set retry backoff base duration
    pub fn retry_backoff_base(mut self, duration: Duration) -> Self {
        self.retry_backoff_base = Some(duration);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig> {
        let defaults = EngineConfig::default();

        let config = EngineConfig {
            schema_dir: self.schema_dir,
            evaluator_version: self
                .evaluator_version
                .unwrap_or(defaults.evaluator_version),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            link_rate_limit: self.link_rate_limit.unwrap_or(defaults.link_rate_limit),
            max_redirects: self.max_redirects.unwrap_or(defaults.max_redirects),
            max_retries: self.max_retries.unwrap_or(defaults.max_retries),
            retry_backoff_base: self
                .retry_backoff_base
                .unwrap_or(defaults.retry_backoff_base),
        };

        config.validate()?;
        Ok(config)
    }
}
