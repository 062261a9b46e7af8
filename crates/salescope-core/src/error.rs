use thiserror::Error;

/// Top-level error type for the salescope system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for
/// SalescopeError` so that the `?` operator works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SalescopeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for SalescopeError {
    fn from(err: toml::de::Error) -> Self {
        SalescopeError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SalescopeError {
    fn from(err: toml::ser::Error) -> Self {
        SalescopeError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for SalescopeError {
    fn from(err: serde_json::Error) -> Self {
        SalescopeError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for salescope operations.
pub type Result<T> = std::result::Result<T, SalescopeError>;
