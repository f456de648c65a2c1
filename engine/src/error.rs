use thiserror::Error;

/// Failures outside the evaluation pipeline itself (configuration, files, batch input).
/// Rejected inputs are not errors here: they come back as `Evaluation::Error`.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
