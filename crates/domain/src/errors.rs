use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Record type {0} does not match the record payload")]
    RecordTypeMismatch(u16),

    #[error("Unknown access log token: {0}")]
    UnknownToken(String),

    #[error("Invalid access log format: {0}")]
    InvalidLogFormat(String),

    #[error("Invalid DNS exchange: {0}")]
    InvalidExchange(String),

    #[error("Access log sink error: {0}")]
    SinkError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
