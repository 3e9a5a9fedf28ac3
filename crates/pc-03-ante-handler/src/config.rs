//! Configuration types for the admission gate

use serde::Deserialize;
use shared_types::MAX_TX_OUTPUTS;
use thiserror::Error;

/// Default maximum number of inputs per spend (plasma MVP shape).
pub const DEFAULT_MAX_INPUTS: usize = 2;

/// Default maximum number of outputs per spend (plasma MVP shape).
pub const DEFAULT_MAX_OUTPUTS: usize = 2;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Runtime configuration for the ante handler
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnteConfig {
    /// Structural limits applied before any ledger lookup
    pub limits: TxLimits,
}

/// Structural limits of a spend message
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TxLimits {
    /// Maximum number of inputs
    pub max_inputs: usize,

    /// Maximum number of outputs
    pub max_outputs: usize,
}

impl Default for TxLimits {
    fn default() -> Self {
        Self {
            max_inputs: DEFAULT_MAX_INPUTS,
            max_outputs: DEFAULT_MAX_OUTPUTS,
        }
    }
}

impl AnteConfig {
    /// Parse configuration from a TOML document.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject limits that would make every spend invalid, or admit spends
    /// whose outputs cannot all be given a position.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_inputs == 0 {
            return Err(ConfigError::Invalid("max_inputs must be at least 1".into()));
        }
        if self.limits.max_outputs == 0 {
            return Err(ConfigError::Invalid("max_outputs must be at least 1".into()));
        }
        if self.limits.max_outputs > MAX_TX_OUTPUTS {
            return Err(ConfigError::Invalid(format!(
                "max_outputs must be at most {MAX_TX_OUTPUTS}, got {}",
                self.limits.max_outputs
            )));
        }
        Ok(())
    }
}
