//! Error types for the desktop
//!
//! Window operations never fail: invalid gestures are silent no-ops. Errors
//! only surface at the configuration and serialization boundaries.

use crate::window::WindowId;

/// Errors that can occur at the desktop's configuration boundaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// Window with the given ID was not found
    WindowNotFound(WindowId),

    /// No app is registered under the given ID
    UnknownApp(String),

    /// Settings were parsed but hold values the desktop cannot use
    InvalidSettings {
        /// The offending field
        field: &'static str,
        /// Why the value is rejected
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::UnknownApp(id) => write!(f, "unknown app: {}", id),
            Self::InvalidSettings { field, reason } => {
                write!(f, "invalid setting '{}': {}", field, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DesktopError::WindowNotFound(42);
        assert_eq!(err.to_string(), "window not found: 42");

        let err = DesktopError::UnknownApp("paint".to_string());
        assert_eq!(err.to_string(), "unknown app: paint");

        let err = DesktopError::InvalidSettings {
            field: "mobile_breakpoint",
            reason: "must be positive",
        };
        assert_eq!(
            err.to_string(),
            "invalid setting 'mobile_breakpoint': must be positive"
        );
    }

    #[test]
    fn test_error_from_json() {
        let parse: Result<u32, _> = serde_json::from_str("not json");
        let err: DesktopError = parse.unwrap_err().into();
        assert!(matches!(err, DesktopError::SerializationError(_)));
    }
}
