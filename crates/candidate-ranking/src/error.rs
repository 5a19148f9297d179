use crate::config::ConfigError;
use crate::import::CandidateImportError;
use crate::ranking::RankingError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Ranking(RankingError),
    Import(CandidateImportError),
    Output(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Ranking(err) => write!(f, "invalid ranking configuration: {}", err),
            AppError::Import(err) => write!(f, "candidate import error: {}", err),
            AppError::Output(err) => write!(f, "failed to encode output: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Ranking(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Output(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<RankingError> for AppError {
    fn from(value: RankingError) -> Self {
        Self::Ranking(value)
    }
}

impl From<CandidateImportError> for AppError {
    fn from(value: CandidateImportError) -> Self {
        Self::Import(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::CandidateRanker;
    use std::error::Error;

    #[test]
    fn ranking_errors_convert_and_keep_their_source() {
        let err: AppError = CandidateRanker::new(0.0, 0.0)
            .expect_err("zero weights rejected")
            .into();

        assert!(err.to_string().starts_with("invalid ranking configuration"));
        assert!(err.source().is_some());
    }
}
