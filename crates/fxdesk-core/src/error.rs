//! Error types for the fxdesk application.

use thiserror::Error;

/// A shared error type for the entire fxdesk application.
///
/// Failures coming back from the backend keep their HTTP status and body so
/// that callers further up (the interceptor layer, the fault reporter) see
/// them unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FxError {
    /// The backend answered with a non-success status
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// No response was received (connection refused, DNS, reset, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The user-facing notification could not be shown
    #[error("Notification error: {0}")]
    Notification(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FxError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an Http error
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Notification error
    pub fn notification(message: impl Into<String>) -> Self {
        Self::Notification(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Returns the HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is an authentication failure (HTTP 401)
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Check if this is an HTTP error response
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    /// Check if this is a transport failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for FxError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for FxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FxError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for FxError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::http(status.as_u16(), err.to_string()),
            None => Self::Transport(err.to_string()),
        }
    }
}

/// Conversion from anyhow::Error (used at the binary edge)
impl From<anyhow::Error> for FxError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Conversion from String (for error messages)
impl From<String> for FxError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, FxError>`.
pub type Result<T> = std::result::Result<T, FxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_detection() {
        assert!(FxError::http(401, "Unauthorized").is_unauthorized());
        assert!(!FxError::http(403, "Forbidden").is_unauthorized());
        assert!(!FxError::transport("connection refused").is_unauthorized());
    }

    #[test]
    fn test_status_only_for_http() {
        assert_eq!(FxError::http(500, "boom").status(), Some(500));
        assert_eq!(FxError::config("bad url").status(), None);
    }

    #[test]
    fn test_json_error_conversion() {
        let err: FxError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(err.is_serialization());
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn test_io_error_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: FxError = io.into();
        assert!(err.to_string().contains("NotFound"));
    }
}
