use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Primary station source error: {0}")]
    PrimarySource(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid schema version: {0} (expected 178 or 180)")]
    InvalidSchemaVersion(String),

    #[error("Invalid UTC offset: {0} hours")]
    InvalidUtcOffset(i32),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}
