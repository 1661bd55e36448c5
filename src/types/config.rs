//! Monitor configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{SpmError, SpmResult};
use crate::{DEFAULT_ACCELERATION_THRESHOLD, DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_ETHOS_THRESHOLD};

/// Fixed configuration of a `MonitorAgent`.
///
/// Missing fields in JSON take their defaults; unknown fields are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    /// Mass weight for centrality (α). Default: 1.0.
    pub alpha: f64,
    /// Mass weight for stability (β). Default: 1.0.
    pub beta: f64,
    /// Alert when acceleration exceeds this. Default: 10.0.
    pub acceleration_threshold: f64,
    /// Circuit breaker threshold for the ethos coefficient. Default: 0.3.
    pub ethos_threshold: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            acceleration_threshold: DEFAULT_ACCELERATION_THRESHOLD,
            ethos_threshold: DEFAULT_ETHOS_THRESHOLD,
        }
    }
}

impl MonitorConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> SpmResult<()> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SpmError::Config(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        if !self.acceleration_threshold.is_finite() || self.acceleration_threshold < 0.0 {
            return Err(SpmError::Config(format!(
                "acceleration_threshold must be finite and >= 0, got {}",
                self.acceleration_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.ethos_threshold) {
            return Err(SpmError::Config(format!(
                "ethos_threshold must be in [0, 1], got {}",
                self.ethos_threshold
            )));
        }
        Ok(())
    }

    /// Parse and validate from a JSON string.
    pub fn from_json(json: &str) -> SpmResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> SpmResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
