//! Shared utilities for audit-rs
//!
//! Logging initialization and environment-derived platform settings used by
//! the evaluation engine, scaffold generator, and CLI.

pub mod logging;
pub mod settings;

pub use logging::{init_tracing, init_tracing_verbose};
pub use settings::{RiskTolerance, Settings, SettingsError, TradingMode};
