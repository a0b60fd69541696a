//! Configuration and input validation for Tandem services.
//!
//! The allocation engine does not clamp or check its inputs; every value a
//! front-end hands to it must pass through one of these checks first.

use thiserror::Error;

use crate::config::{
    Config, HoldingConfig, InputDefaults, InputLimits, ObservabilityConfig, ServerConfig,
};

/// Validation error.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port {port} for {field}: must be between 1 and 65535")]
    InvalidPort { port: u16, field: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Multiple validation errors: {0:?}")]
    Multiple(Vec<ValidationError>),
}

impl ValidationError {
    /// Field names referenced by this error (flattened for `Multiple`).
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Self::InvalidPort { field, .. }
            | Self::MissingField { field }
            | Self::OutOfRange { field, .. }
            | Self::InvalidValue { field, .. } => vec![field.as_str()],
            Self::Multiple(errors) => errors.iter().flat_map(|e| e.fields()).collect(),
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Trait for validatable values.
pub trait Validate {
    /// Validate this value.
    fn validate(&self) -> ValidationResult<()>;
}

/// Check that `value` lies within `[min, max]` and is finite.
pub fn ensure_in_range(field: &str, value: f64, min: f64, max: f64) -> ValidationResult<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        })
    }
}

/// Fold a list of errors into a single result.
pub fn collect_errors(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    if errors.is_empty() {
        Ok(())
    } else if errors.len() == 1 {
        Err(errors.remove(0))
    } else {
        Err(ValidationError::Multiple(errors))
    }
}

impl Config {
    /// Validate the entire configuration.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.observability.validate() {
            errors.push(e);
        }

        if let Err(e) = self.server.validate() {
            errors.push(e);
        }

        if let Err(e) = self.limits.validate() {
            errors.push(e);
        }

        if let Err(e) = self.defaults.validate_against(&self.limits) {
            errors.push(e);
        }

        if let Some(ref holdings) = self.holdings {
            if let Err(e) = validate_holdings(holdings) {
                errors.push(e);
            }
        }

        collect_errors(errors)
    }

    /// Load from the default location, apply env overrides, and validate.
    pub fn load_and_validate(path: Option<&std::path::Path>) -> anyhow::Result<Self> {
        let config = Self::load_with_env(path)?;
        config.validate().map_err(|e| anyhow::anyhow!("{}", e))?;
        Ok(config)
    }
}

impl Validate for ObservabilityConfig {
    fn validate(&self) -> ValidationResult<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_level".into(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            });
        }

        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.log_format.to_lowercase().as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_format".into(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            });
        }

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> ValidationResult<()> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort {
                port: self.port,
                field: "server.port".into(),
            });
        }

        if self.host.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "server.host".into(),
            });
        }

        Ok(())
    }
}

impl Validate for InputLimits {
    fn validate(&self) -> ValidationResult<()> {
        if !(self.min_total_capital.is_finite() && self.min_total_capital > 0.0) {
            return Err(ValidationError::InvalidValue {
                field: "limits.min_total_capital".into(),
                reason: "must be a positive number".into(),
            });
        }

        Ok(())
    }
}

impl InputDefaults {
    /// Validate the defaults against the configured input limits.
    pub fn validate_against(&self, limits: &InputLimits) -> ValidationResult<()> {
        let errors: Vec<_> = [
            ensure_in_range(
                "defaults.total_capital",
                self.total_capital,
                limits.min_total_capital,
                f64::MAX,
            ),
            ensure_in_range(
                "defaults.tactical_strength",
                f64::from(self.tactical_strength),
                0.0,
                100.0,
            ),
            ensure_in_range(
                "defaults.sentiment_index",
                f64::from(self.sentiment_index),
                0.0,
                100.0,
            ),
            ensure_in_range(
                "defaults.analyst_consensus",
                f64::from(self.analyst_consensus),
                1.0,
                5.0,
            ),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        collect_errors(errors)
    }
}

/// Validate a configured holding table.
pub fn validate_holdings(holdings: &[HoldingConfig]) -> ValidationResult<()> {
    if holdings.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "holdings".into(),
            reason: "must contain at least one holding".into(),
        });
    }

    let mut errors = Vec::new();
    for (i, holding) in holdings.iter().enumerate() {
        if holding.name.trim().is_empty() {
            errors.push(ValidationError::MissingField {
                field: format!("holdings[{}].name", i),
            });
        }
        if !(holding.weight.is_finite() && holding.weight > 0.0 && holding.weight <= 1.0) {
            errors.push(ValidationError::InvalidValue {
                field: format!("holdings[{}].weight", i),
                reason: "must be in (0, 1]".into(),
            });
        }
    }

    collect_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = Config::default();
        config.observability.log_level = "verbose".into();
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ValidationError::InvalidValue { ref field, .. }) if field == "observability.log_level"
        ));
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPort { port: 0, .. })
        ));
    }

    #[test]
    fn test_defaults_checked_against_limits() {
        let mut config = Config::default();
        config.defaults.total_capital = 500_000.0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.fields(), vec!["defaults.total_capital"]);
    }

    #[test]
    fn test_multiple_errors_aggregate() {
        let mut config = Config::default();
        config.defaults.analyst_consensus = 0;
        config.defaults.sentiment_index = 101;
        config.observability.log_format = "xml".into();

        let err = config.validate().unwrap_err();
        let fields = err.fields();
        assert!(matches!(err, ValidationError::Multiple(_)));
        assert!(fields.contains(&"observability.log_format"));
        assert!(fields.contains(&"defaults.sentiment_index"));
        assert!(fields.contains(&"defaults.analyst_consensus"));
    }

    #[test]
    fn test_holding_weights_must_be_in_unit_interval() {
        let holdings = vec![
            HoldingConfig {
                name: "Broad Index".into(),
                weight: 0.6,
                rationale: String::new(),
            },
            HoldingConfig {
                name: "Leverage".into(),
                weight: 1.5,
                rationale: String::new(),
            },
            HoldingConfig {
                name: " ".into(),
                weight: 0.0,
                rationale: String::new(),
            },
        ];

        let err = validate_holdings(&holdings).unwrap_err();
        assert_eq!(
            err.fields(),
            vec!["holdings[1].weight", "holdings[2].name", "holdings[2].weight"]
        );
    }

    #[test]
    fn test_empty_holdings_rejected() {
        assert!(validate_holdings(&[]).is_err());
    }

    #[test]
    fn test_ensure_in_range_rejects_nan() {
        assert!(ensure_in_range("x", f64::NAN, 0.0, 1.0).is_err());
        assert!(ensure_in_range("x", 1.0, 0.0, 1.0).is_ok());
        assert!(ensure_in_range("x", 0.0, 0.0, 1.0).is_ok());
    }
}
