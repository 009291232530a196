use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single problem found while validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Unified error type for qbit-client.
#[derive(Error, Debug)]
pub enum QbitError {
    /// Login was attempted but the server did not hand out a session cookie
    #[error("unable to get session id")]
    SessionUnavailable,

    /// The server answered with anything other than 200 OK
    #[error("{status} {body}")]
    Api {
        status: u16,
        body: String,
        url: String,
    },

    /// Transport failure (connection refused, timeout, DNS...)
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Base URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation error with messages
    #[error("Validation error: {}", .0.iter().map(|i| i.to_string()).collect::<Vec<_>>().join("; "))]
    ValidationError(Vec<ValidationIssue>),
}

impl QbitError {
    /// HTTP status code for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            QbitError::Api { status, .. } => Some(*status),
            QbitError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Request URL for errors produced by a server response.
    pub fn url(&self) -> Option<&str> {
        match self {
            QbitError::Api { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Whether the server rejected the session or credentials.
    ///
    /// The client never clears its token on its own; callers seeing this
    /// should log in again before retrying.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, QbitError::SessionUnavailable)
            || matches!(self.status(), Some(401) | Some(403))
    }
}

// === Conversion Implementations ===

macro_rules! impl_from_error {
    ($err_type:ty, $arm:pat => $body:expr) => {
        impl From<$err_type> for QbitError {
            fn from(err: $err_type) -> Self {
                match err {
                    $arm => $body,
                }
            }
        }
    };
}

impl_from_error!(std::io::Error, e => match e.kind() {
    std::io::ErrorKind::InvalidInput => QbitError::InvalidArgument(e.to_string()),
    _ => QbitError::Io(e.to_string()),
});

impl_from_error!(serde_json::Error, e => QbitError::Parse(e.to_string()));
impl_from_error!(toml::de::Error, e => QbitError::Parse(e.to_string()));

/// Result type alias for operations that can fail with QbitError.
pub type QbitResult<T> = Result<T, QbitError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> QbitError {
        QbitError::Api {
            status,
            body: "Forbidden".to_string(),
            url: "http://localhost:8080/api/v2/torrents/info".to_string(),
        }
    }

    #[test]
    fn test_api_error_accessors() {
        let err = api_error(403);
        assert_eq!(err.status(), Some(403));
        assert_eq!(
            err.url(),
            Some("http://localhost:8080/api/v2/torrents/info")
        );
    }

    #[test]
    fn test_is_auth_failure() {
        assert!(api_error(403).is_auth_failure());
        assert!(api_error(401).is_auth_failure());
        assert!(QbitError::SessionUnavailable.is_auth_failure());

        assert!(!api_error(404).is_auth_failure());
        assert!(!api_error(500).is_auth_failure());
        assert!(!QbitError::Parse("bad".to_string()).is_auth_failure());
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", api_error(403)), "403 Forbidden");
        assert_eq!(
            format!("{}", QbitError::SessionUnavailable),
            "unable to get session id"
        );
        let err = QbitError::ValidationError(vec![
            ValidationIssue {
                field: "api.url".to_string(),
                message: "URL cannot be empty".to_string(),
            },
            ValidationIssue {
                field: "logging.level".to_string(),
                message: "bad level".to_string(),
            },
        ]);
        assert_eq!(
            format!("{}", err),
            "Validation error: api.url: URL cannot be empty; logging.level: bad level"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let err: QbitError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, QbitError::Io(_)));

        let err: QbitError =
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "nope").into();
        assert!(matches!(err, QbitError::InvalidArgument(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: QbitError = parse_err.into();
        assert!(matches!(err, QbitError::Parse(_)));
    }
}
