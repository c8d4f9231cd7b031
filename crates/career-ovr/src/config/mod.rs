use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::clock;
use crate::profile::ValidationError;
use crate::rating::{FactorWeights, RatingConfig};

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub rating: RatingConfig,
    /// Pinned "now" for reproducible runs; wall-clock time when absent.
    pub now: Option<DateTime<Utc>>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let weights = match env::var("OVR_WEIGHTS_FILE") {
            Ok(path) if !path.trim().is_empty() => load_weights(Path::new(path.trim()))?,
            _ => FactorWeights::default(),
        };

        let now = match env::var("OVR_NOW") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                clock::parse_instant(&raw)
                    .map_err(|reason| ConfigError::InvalidNow { value: raw, reason })?,
            ),
            _ => None,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            rating: RatingConfig { weights },
            now,
        })
    }
}

/// Read and validate a JSON weights document. Missing factors keep their defaults.
pub fn load_weights(path: &Path) -> Result<FactorWeights, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidWeightsFile {
        path: path.to_path_buf(),
        reason,
    };

    let raw = fs::read_to_string(path).map_err(|err| invalid(err.to_string()))?;
    let weights: FactorWeights =
        serde_json::from_str(&raw).map_err(|err| invalid(err.to_string()))?;
    weights.validate()?;
    Ok(weights)
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidWeightsFile { path: PathBuf, reason: String },
    InvalidNow { value: String, reason: String },
    Weights(ValidationError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeightsFile { path, reason } => {
                write!(
                    f,
                    "OVR_WEIGHTS_FILE {} is not a readable weights document: {reason}",
                    path.display()
                )
            }
            ConfigError::InvalidNow { value, reason } => {
                write!(f, "OVR_NOW '{value}' is not a valid instant: {reason}")
            }
            ConfigError::Weights(err) => write!(f, "configured weights are invalid: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidWeightsFile { .. } | ConfigError::InvalidNow { .. } => None,
            ConfigError::Weights(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ConfigError {
    fn from(value: ValidationError) -> Self {
        Self::Weights(value)
    }
}
