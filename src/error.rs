// src/error.rs - Error handling for API, storage and form validation failures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Classifies every failure the client can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Transport-level failure: the request never produced an HTTP response.
    Network { endpoint: Option<String> },
    /// The backend answered with a non-success status other than 401.
    Api { status: u16, endpoint: Option<String> },
    /// A 401 was observed and the session has been invalidated.
    SessionExpired,
    /// Client-side validation rejected a value before any request was made.
    Validation { field: Option<String> },
    /// Persisted key-value storage failed.
    Storage { key: Option<String> },
    Serialization,
    /// A file was rejected or failed while uploading.
    Upload { file_name: Option<String> },
    Config { key: Option<String> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Creates a transport error for the given endpoint.
    pub fn network(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Network {
                endpoint: Some(endpoint.into()),
            },
            message,
        )
    }

    /// Creates an API error carrying the backend's `detail` message when present.
    pub fn api(status: u16, endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Api {
                status,
                endpoint: Some(endpoint.into()),
            },
            message,
        )
    }

    pub fn session_expired() -> Self {
        Self::new(ErrorKind::SessionExpired, "Session expired")
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Validation {
                field: Some(field.into()),
            },
            message,
        )
    }

    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Storage {
                key: Some(key.into()),
            },
            message,
        )
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    pub fn upload(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Upload {
                file_name: Some(file_name.into()),
            },
            message,
        )
    }

    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Config {
                key: Some(key.into()),
            },
            message,
        )
    }

    /// HTTP status code, when this error came from an HTTP response.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Api { status, .. } => Some(*status),
            ErrorKind::SessionExpired => Some(401),
            _ => None,
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self.kind, ErrorKind::SessionExpired)
    }

    /// Message suitable for direct display in the UI.
    pub fn user_message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Network { endpoint: Some(e) } => {
                write!(f, "network error ({}): {}", e, self.message)
            }
            ErrorKind::Api {
                status,
                endpoint: Some(e),
            } => write!(f, "HTTP {} ({}): {}", status, e, self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Storage { key: None }, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status() {
        let err = Error::api(422, "/products", "price must be positive");
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.user_message(), "price must be positive");
        assert!(!err.is_session_expired());
    }

    #[test]
    fn test_session_expired_maps_to_401() {
        let err = Error::session_expired();
        assert_eq!(err.status(), Some(401));
        assert!(err.is_session_expired());
    }

    #[test]
    fn test_display_includes_endpoint() {
        let err = Error::network("/collections/active", "connection refused");
        let rendered = err.to_string();
        assert!(rendered.contains("/collections/active"));
        assert!(rendered.contains("connection refused"));
    }

    #[test]
    fn test_validation_error_names_field() {
        let err = Error::validation("sku", "SKU is required");
        assert_eq!(
            err.kind,
            ErrorKind::Validation {
                field: Some("sku".to_string())
            }
        );
    }
}
