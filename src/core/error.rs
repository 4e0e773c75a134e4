use thiserror::Error;

#[derive(Error, Debug)]
pub enum TopologyError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Lock error: {0}")]
    LockError(String),
}

pub type Result<T> = std::result::Result<T, TopologyError>;


impl<T> From<std::sync::PoisonError<T>> for TopologyError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::LockError(err.to_string())
    }
}
