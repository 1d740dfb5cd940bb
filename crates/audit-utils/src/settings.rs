//! Platform settings loaded from the environment
//!
//! Every variable here corresponds to one entry of the project's
//! `env_example.txt`. Values absent from the environment fall back to the
//! documented defaults; secrets default to `None`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Result type alias for settings loading
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An environment variable held a value that does not parse
    #[error("Invalid value for {key}: '{value}' ({expected})")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },

    /// A setting failed validation
    #[error("Invalid settings: {0}")]
    Validation(String),
}

/// Order routing mode for the broker integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TradingMode {
    /// Paper trading against the broker's demo endpoint
    #[default]
    Demo,
    /// Live order routing
    Live,
}

impl FromStr for TradingMode {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "demo" => Ok(Self::Demo),
            "live" => Ok(Self::Live),
            other => Err(SettingsError::InvalidValue {
                key: "TRADING_MODE".to_string(),
                value: other.to_string(),
                expected: "demo or live".to_string(),
            }),
        }
    }
}

/// Risk appetite bucket used by the risk limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for RiskTolerance {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(SettingsError::InvalidValue {
                key: "RISK_TOLERANCE".to_string(),
                value: other.to_string(),
                expected: "low, medium or high".to_string(),
            }),
        }
    }
}

/// Project identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSettings {
    pub root: PathBuf,
    pub name: String,
    pub version: String,
}

/// Output locations for pipeline artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    pub screener_output: PathBuf,
    pub analysis_result: PathBuf,
    pub report_dir: PathBuf,
}

/// AI provider credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiSettings {
    pub claude_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
}

/// Workflow automation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct N8nSettings {
    pub base_url: String,
    pub webhook_url: Option<String>,
}

/// Notification channels (Slack, LINE)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub slack_bot_token: Option<String>,
    pub slack_channel: String,
    pub line_channel_access_token: Option<String>,
}

/// Broker API access
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrokerSettings {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub trading_mode: TradingMode,
}

/// Screening thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningSettings {
    pub min_dividend_yield: f64,
    pub max_per_ratio: f64,
    pub min_market_cap: u64,
}

/// Risk limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSettings {
    pub max_daily_trades: u32,
    pub max_total_exposure: u64,
    pub tolerance: RiskTolerance,
}

/// Typed view over the platform environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub project: ProjectSettings,
    pub outputs: OutputSettings,
    pub ai: AiSettings,
    pub n8n: N8nSettings,
    pub notify: NotificationSettings,
    pub broker: BrokerSettings,
    pub screening: ScreeningSettings,
    pub risk: RiskSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project: ProjectSettings {
                root: PathBuf::from("."),
                name: "ai_stock_analysis".to_string(),
                version: "1.0.0".to_string(),
            },
            outputs: OutputSettings {
                screener_output: PathBuf::from("output/high_dividend.json"),
                analysis_result: PathBuf::from("output/analysis_result.json"),
                report_dir: PathBuf::from("output/reports/"),
            },
            ai: AiSettings::default(),
            n8n: N8nSettings {
                base_url: "http://localhost:5679".to_string(),
                webhook_url: None,
            },
            notify: NotificationSettings {
                slack_bot_token: None,
                slack_channel: "#stock-analysis".to_string(),
                line_channel_access_token: None,
            },
            broker: BrokerSettings::default(),
            screening: ScreeningSettings {
                min_dividend_yield: 3.0,
                max_per_ratio: 20.0,
                min_market_cap: 10_000_000_000,
            },
            risk: RiskSettings {
                max_daily_trades: 10,
                max_total_exposure: 1_000_000,
                tolerance: RiskTolerance::Medium,
            },
        }
    }
}

impl Settings {
    /// Load settings from the process environment, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let settings = Self {
            project: ProjectSettings {
                root: env_path("PROJECT_ROOT", defaults.project.root),
                name: env_string("PROJECT_NAME", defaults.project.name),
                version: env_string("VERSION", defaults.project.version),
            },
            outputs: OutputSettings {
                screener_output: env_path("SCREENER_OUTPUT", defaults.outputs.screener_output),
                analysis_result: env_path("ANALYSIS_RESULT", defaults.outputs.analysis_result),
                report_dir: env_path("REPORT_OUTPUT", defaults.outputs.report_dir),
            },
            ai: AiSettings {
                claude_api_key: env_opt("CLAUDE_API_KEY"),
                openai_api_key: env_opt("OPENAI_API_KEY"),
                gemini_api_key: env_opt("GEMINI_API_KEY"),
            },
            n8n: N8nSettings {
                base_url: env_string("N8N_BASE_URL", defaults.n8n.base_url),
                webhook_url: env_opt("WEBHOOK_URL"),
            },
            notify: NotificationSettings {
                slack_bot_token: env_opt("SLACK_BOT_TOKEN"),
                slack_channel: env_string("SLACK_CHANNEL", defaults.notify.slack_channel),
                line_channel_access_token: env_opt("LINE_CHANNEL_ACCESS_TOKEN"),
            },
            broker: BrokerSettings {
                api_key: env_opt("BROKER_API_KEY"),
                endpoint: env_opt("BROKER_API_ENDPOINT"),
                trading_mode: env_parse("TRADING_MODE", defaults.broker.trading_mode)?,
            },
            screening: ScreeningSettings {
                min_dividend_yield: env_number(
                    "MIN_DIVIDEND_YIELD",
                    defaults.screening.min_dividend_yield,
                )?,
                max_per_ratio: env_number("MAX_PER_RATIO", defaults.screening.max_per_ratio)?,
                min_market_cap: env_number("MIN_MARKET_CAP", defaults.screening.min_market_cap)?,
            },
            risk: RiskSettings {
                max_daily_trades: env_number("MAX_DAILY_TRADES", defaults.risk.max_daily_trades)?,
                max_total_exposure: env_number(
                    "MAX_TOTAL_EXPOSURE",
                    defaults.risk.max_total_exposure,
                )?,
                tolerance: env_parse("RISK_TOLERANCE", defaults.risk.tolerance)?,
            },
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Validate the loaded settings
    pub fn validate(&self) -> Result<()> {
        if self.screening.min_dividend_yield < 0.0 {
            return Err(SettingsError::Validation(
                "MIN_DIVIDEND_YIELD must not be negative".to_string(),
            ));
        }
        if self.screening.max_per_ratio <= 0.0 {
            return Err(SettingsError::Validation(
                "MAX_PER_RATIO must be positive".to_string(),
            ));
        }
        if self.risk.max_daily_trades == 0 {
            return Err(SettingsError::Validation(
                "MAX_DAILY_TRADES must be greater than 0".to_string(),
            ));
        }
        if self.risk.max_total_exposure == 0 {
            return Err(SettingsError::Validation(
                "MAX_TOTAL_EXPOSURE must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn env_string(key: &str, default: String) -> String {
    env_opt(key).unwrap_or(default)
}

fn env_path(key: &str, default: PathBuf) -> PathBuf {
    env_opt(key).map_or(default, PathBuf::from)
}

fn env_number<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
{
    match env_opt(key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| SettingsError::InvalidValue {
            key: key.to_string(),
            value: raw,
            expected: "a number".to_string(),
        }),
    }
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr<Err = SettingsError>,
{
    match env_opt(key) {
        None => Ok(default),
        Some(raw) => raw.parse(),
    }
}
