//! Result and error types for apretar.

use thiserror::Error;

/// Result type for apretar operations
pub type GestureResult<T> = Result<T, GestureError>;

/// Errors that can occur while building gesture fixtures
#[derive(Debug, Error)]
pub enum GestureError {
    /// Handler name matches no (modality, phase) in the registry
    #[error("Unknown handler name: {name}")]
    UnknownHandlerName {
        /// The name that failed to resolve
        name: String,
    },

    /// Event name matches no (modality, phase) in the registry
    #[error("Unknown event name: {name}")]
    UnknownEventName {
        /// The name that failed to resolve
        name: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GestureError::UnknownHandlerName {
            name: "onWheel".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown handler name: onWheel");

        let err = GestureError::UnknownEventName {
            name: "wheel".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown event name: wheel");
    }
}
