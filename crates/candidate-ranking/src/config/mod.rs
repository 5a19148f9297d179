use std::env;
use std::fmt;
use std::num::ParseFloatError;

use crate::ranking::{DEFAULT_CONFIDENCE_WEIGHT, DEFAULT_RELEVANCE_WEIGHT};

const RELEVANCE_WEIGHT_VAR: &str = "RANKER_RELEVANCE_WEIGHT";
const CONFIDENCE_WEIGHT_VAR: &str = "RANKER_CONFIDENCE_WEIGHT";

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

/// Top-level configuration for the ranking tool.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub ranking: RankingConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let ranking = RankingConfig {
            relevance_weight: weight_from_env(RELEVANCE_WEIGHT_VAR, DEFAULT_RELEVANCE_WEIGHT)?,
            confidence_weight: weight_from_env(CONFIDENCE_WEIGHT_VAR, DEFAULT_CONFIDENCE_WEIGHT)?,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            ranking,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn weight_from_env(variable: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(variable) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|source| ConfigError::InvalidWeight {
                variable,
                value: raw,
                source,
            }),
        Err(_) => Ok(default),
    }
}

/// Raw ranking weights. They are validated and normalized when the ranker is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingConfig {
    pub relevance_weight: f64,
    pub confidence_weight: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            relevance_weight: DEFAULT_RELEVANCE_WEIGHT,
            confidence_weight: DEFAULT_CONFIDENCE_WEIGHT,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidWeight {
        variable: &'static str,
        value: String,
        source: ParseFloatError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeight {
                variable, value, ..
            } => write!(f, "{variable} must be a number, got '{value}'"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidWeight { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var(RELEVANCE_WEIGHT_VAR);
        env::remove_var(CONFIDENCE_WEIGHT_VAR);
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.ranking, RankingConfig::default());
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn load_reads_weights_and_environment() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "CI");
        env::set_var(RELEVANCE_WEIGHT_VAR, " 0.8 ");
        env::set_var(CONFIDENCE_WEIGHT_VAR, "0.2");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.ranking.relevance_weight, 0.8);
        assert_eq!(config.ranking.confidence_weight, 0.2);
    }

    #[test]
    fn rejects_non_numeric_weight() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var(CONFIDENCE_WEIGHT_VAR, "heavy");
        let err = AppConfig::load().expect_err("non-numeric weight rejected");
        reset_env();

        assert!(err.to_string().contains(CONFIDENCE_WEIGHT_VAR));
        assert!(matches!(
            err,
            ConfigError::InvalidWeight {
                variable: CONFIDENCE_WEIGHT_VAR,
                ..
            }
        ));
    }
}
