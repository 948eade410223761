//! Shared errors, configuration and telemetry for Coinage.
//!
//! This crate provides the ambient pieces used by the other crates:
//! - Error taxonomy for money operations
//! - Configuration management
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::AppConfig;
pub use error::{MoneyError, MoneyResult};
