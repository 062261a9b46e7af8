//! Error types for the responder family.

use salescope_core::error::SalescopeError;

/// Errors from responder processing.
///
/// These never reach an HTTP client: the dispatch boundary collapses them
/// into an apologetic plain-text reply.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("chart error: {0}")]
    Chart(String),
}

impl From<SalescopeError> for AgentError {
    fn from(err: SalescopeError) -> Self {
        AgentError::Storage(err.to_string())
    }
}

impl From<AgentError> for SalescopeError {
    fn from(err: AgentError) -> Self {
        SalescopeError::Agent(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AgentError::Storage("no such table".to_string());
        assert_eq!(err.to_string(), "storage error: no such table");

        let err = AgentError::Chart("encode failed".to_string());
        assert_eq!(err.to_string(), "chart error: encode failed");
    }

    #[test]
    fn test_from_core_error() {
        let core = SalescopeError::Storage("locked".to_string());
        let err: AgentError = core.into();
        assert!(matches!(err, AgentError::Storage(_)));
        assert!(err.to_string().contains("locked"));
    }

    #[test]
    fn test_into_core_error() {
        let err: SalescopeError = AgentError::Chart("bad".to_string()).into();
        assert!(matches!(err, SalescopeError::Agent(_)));
    }
}
