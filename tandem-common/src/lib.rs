//! Tandem Common - Shared configuration, validation, and plumbing for the Tandem services.
//!
//! This crate provides:
//! - Configuration types and loading (`~/.tandem/config.json` plus `TANDEM_*` overrides)
//! - Configuration and input validation
//! - Error types and handling utilities
//! - Logging setup

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod logging;
pub mod validation;

pub use config::{
    Config, DisplayConfig, HoldingConfig, InputDefaults, InputLimits, ObservabilityConfig,
    ServerConfig,
};
pub use error::{Error, Result, ResultExt};
pub use validation::{Validate, ValidationError, ValidationResult};

