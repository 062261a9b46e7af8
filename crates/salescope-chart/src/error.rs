//! Error types for chart rendering.

use salescope_core::error::SalescopeError;

/// Errors from the chart renderer.
///
/// Callers treat every variant as a soft failure: log it and omit the
/// chart. A render error must never surface to an HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },
    #[error("render error: {0}")]
    Render(String),
}

impl From<ChartError> for SalescopeError {
    fn from(err: ChartError) -> Self {
        SalescopeError::Chart(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let err = ChartError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "insufficient data: need at least 2 points, got 1"
        );
    }

    #[test]
    fn test_render_display() {
        let err = ChartError::Render("encoder failed".to_string());
        assert_eq!(err.to_string(), "render error: encoder failed");
    }

    #[test]
    fn test_conversion_to_core_error() {
        let err: SalescopeError = ChartError::Render("boom".to_string()).into();
        assert!(matches!(err, SalescopeError::Chart(_)));
        assert!(err.to_string().contains("boom"));
    }
}
