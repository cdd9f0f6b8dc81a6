//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! Validation uses Stillwater's `Validation` to report every problem in
//! one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use bucketviz::config::VisualizerConfig;
//! use bucketviz::core::Mode;
//!
//! let config = VisualizerConfig::from_json_str(r#"{ "capacity": 4, "initial_mode": "queue" }"#)
//!     .unwrap();
//! assert_eq!(config.capacity, 4);
//! assert_eq!(config.initial_mode, Mode::Queue);
//! assert_eq!(config.settle_delay_ms, 600);
//! ```

use crate::core::{Mode, DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Problems found in a [`VisualizerConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("capacity must be at least 1")]
    ZeroCapacity,

    #[error("{field} must be greater than zero")]
    ZeroDelay { field: &'static str },

    #[error("history_limit must be at least 1")]
    ZeroHistoryLimit,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Transitions retained by default: the last 32 add/remove cycles.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Tunables for the bucket and its animation timing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizerConfig {
    /// Maximum number of tokens in the bucket.
    pub capacity: usize,
    /// Mode the session starts in.
    pub initial_mode: Mode,
    /// Delay between accepting an add/remove and settling it.
    pub settle_delay_ms: u64,
    /// How long a peeked token stays highlighted.
    pub peek_highlight_ms: u64,
    /// How long an error notice keeps its error styling.
    pub error_notice_ms: u64,
    /// Most recent phase transitions kept in the coordinator's history.
    pub history_limit: usize,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            initial_mode: Mode::Stack,
            settle_delay_ms: 600,
            peek_highlight_ms: 800,
            error_notice_ms: 3000,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl VisualizerConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Check every rule, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.capacity == 0 {
            Validation::fail(ConfigViolation::ZeroCapacity)
        } else {
            Validation::success(())
        });

        for (field, value) in [
            ("settle_delay_ms", self.settle_delay_ms),
            ("peek_highlight_ms", self.peek_highlight_ms),
            ("error_notice_ms", self.error_notice_ms),
        ] {
            checks.push(if value == 0 {
                Validation::fail(ConfigViolation::ZeroDelay { field })
            } else {
                Validation::success(())
            });
        }

        checks.push(if self.history_limit == 0 {
            Validation::fail(ConfigViolation::ZeroHistoryLimit)
        } else {
            Validation::success(())
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// Return `self` if valid, otherwise every violation.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn peek_highlight(&self) -> Duration {
        Duration::from_millis(self.peek_highlight_ms)
    }

    pub fn error_notice(&self) -> Duration {
        Duration::from_millis(self.error_notice_ms)
    }
}
