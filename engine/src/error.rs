use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    // Raised when a consumer asks for the locale before a provider installed
    // one. This is a wiring bug, never a data problem.
    #[error("Locale context is unavailable: acquire it from an initialised LocaleProvider")]
    LocaleUnavailable,

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

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    // Bad page name, status or date coming from the command line.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Serialization error: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    // Wraps errors from helpers that use anyhow for line-numbered context.
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

impl EngineError {
    /// Short machine-readable kind, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::LocaleUnavailable => "locale_unavailable",
            EngineError::ConfigError(_) => "config",
            EngineError::CsvSystemError { .. } => "csv_system",
            EngineError::IoError { .. } => "io",
            EngineError::CsvDataFormatError(_) => "csv_format",
            EngineError::CatalogError(_) => "catalog",
            EngineError::InvalidRequest(_) => "invalid_request",
            EngineError::SerializationError { .. } => "serialization",
            EngineError::AnyhowError(_) => "internal",
        }
    }
}
