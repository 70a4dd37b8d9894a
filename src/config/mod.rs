use std::env;

use serde::{Deserialize, Serialize};

/// Relative weight of each scoring factor in the composite donor score.
///
/// The six weights must sum to 1.0 so the composite stays on the same 0-100
/// scale as the sub-scores. Each is independently tunable through the
/// `MATCH_WEIGHT_*` environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub distance: f64,
    pub reliability: f64,
    pub eligibility: f64,
    pub response_history: f64,
    pub blood_match: f64,
    pub availability: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            distance: 0.25,
            reliability: 0.20,
            eligibility: 0.20,
            response_history: 0.15,
            blood_match: 0.10,
            availability: 0.10,
        }
    }
}

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.distance
            + self.reliability
            + self.eligibility
            + self.response_history
            + self.blood_match
            + self.availability
    }

    /// Reject weight sets that would silently rescale the composite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum { sum });
        }
        Ok(())
    }
}

/// Top-level configuration for the decision core.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub weights: ScoringWeights,
    pub telemetry: TelemetryConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
        }
    }
}

impl MatchConfig {
    /// Load configuration from the environment, falling back to the
    /// documented defaults for anything unset.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = ScoringWeights::default();
        let weights = ScoringWeights {
            distance: weight_var("MATCH_WEIGHT_DISTANCE", defaults.distance)?,
            reliability: weight_var("MATCH_WEIGHT_RELIABILITY", defaults.reliability)?,
            eligibility: weight_var("MATCH_WEIGHT_ELIGIBILITY", defaults.eligibility)?,
            response_history: weight_var(
                "MATCH_WEIGHT_RESPONSE_HISTORY",
                defaults.response_history,
            )?,
            blood_match: weight_var("MATCH_WEIGHT_BLOOD_MATCH", defaults.blood_match)?,
            availability: weight_var("MATCH_WEIGHT_AVAILABILITY", defaults.availability)?,
        };
        weights.validate()?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            weights,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn weight_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidWeight { name })?;
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name });
            }
            Ok(value)
        }
        Err(_) => Ok(default),
    }
}

/// Tracing controls handed to [`crate::telemetry::init`].
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Error raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a non-negative finite number")]
    InvalidWeight { name: &'static str },
    #[error("scoring weights must sum to 1.0, got {sum}")]
    WeightSum { sum: f64 },
}
