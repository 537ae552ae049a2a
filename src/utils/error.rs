use thiserror::Error;

#[derive(Error, Debug)]
pub enum FightError {
    #[error("{service} service unavailable: {reason}")]
    DownstreamUnavailable { service: String, reason: String },

    #[error("operation timed out after {0}ms")]
    Timeout(u64),

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FightError>;
