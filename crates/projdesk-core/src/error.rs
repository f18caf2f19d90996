//! Error types for projdesk.

/// Errors that can occur while talking to the projects service.
///
/// The variants keep apart the failure kinds that the user-facing layer
/// collapses into one message per operation: session resolution, transport,
/// authorization, missing resources, other HTTP statuses, and local
/// validation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The current session could not be resolved to a user.
    #[error("Session error: {message}")]
    Session {
        /// What went wrong
        message: String,
    },

    /// The backend could not be reached (connect, DNS, timeout, ...).
    #[error("Backend unreachable: {message}")]
    Unreachable {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend rejected the caller (HTTP 401 or 403).
    #[error("Unauthorized: HTTP {status} from {url}")]
    Unauthorized {
        /// Response status code
        status: u16,
        /// Request URL
        url: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("Not found: {url}")]
    NotFound {
        /// Request URL
        url: String,
    },

    /// Any other non-success HTTP status.
    #[error("HTTP {status} from {url}")]
    Http {
        /// Response status code
        status: u16,
        /// Request URL
        url: String,
    },

    /// A response body could not be decoded.
    #[error("Decode error: {message}")]
    Decode {
        /// What could not be decoded
        message: String,
    },

    /// The signed-in user's role does not allow the action.
    #[error("Not permitted: {action}")]
    Forbidden {
        /// Action that was refused
        action: String,
    },

    /// An update was requested with no project selected for editing.
    #[error("No project selected for editing")]
    NoEditTarget,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for projdesk operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error is transient.
    ///
    /// Nothing in projdesk retries on its own; this only classifies the
    /// failure for callers and logs.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Unreachable { .. } => true,
            Error::Http { status, .. } => *status >= 500,
            Error::Session { .. } => false,
            Error::Unauthorized { .. } => false,
            Error::NotFound { .. } => false,
            Error::Decode { .. } => false,
            Error::Forbidden { .. } => false,
            Error::NoEditTarget => false,
            Error::Config { .. } => false,
        }
    }

    /// Maps a non-success HTTP status to the matching variant.
    pub fn from_status<U: Into<String>>(status: u16, url: U) -> Self {
        let url = url.into();
        match status {
            401 | 403 => Error::Unauthorized { status, url },
            404 => Error::NotFound { url },
            _ => Error::Http { status, url },
        }
    }

    /// Creates a new session error.
    pub fn session<S: Into<String>>(message: S) -> Self {
        Error::Session {
            message: message.into(),
        }
    }

    /// Creates a new unreachable-backend error.
    pub fn unreachable<S: Into<String>>(message: S) -> Self {
        Error::Unreachable {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new unreachable-backend error with a source error.
    pub fn unreachable_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Unreachable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new decode error.
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Error::Decode {
            message: message.into(),
        }
    }

    /// Creates a new permission error.
    pub fn forbidden<S: Into<String>>(action: S) -> Self {
        Error::Forbidden {
            action: action.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::session("token expired");
        assert_eq!(err.to_string(), "Session error: token expired");
    }

    #[test]
    fn test_from_status_unauthorized() {
        let err = Error::from_status(401, "http://localhost:8080/api/projects");
        assert!(matches!(err, Error::Unauthorized { status: 401, .. }));

        let err = Error::from_status(403, "http://localhost:8080/api/projects");
        assert!(matches!(err, Error::Unauthorized { status: 403, .. }));
    }

    #[test]
    fn test_from_status_not_found() {
        let err = Error::from_status(404, "http://localhost:8080/api/projects/9");
        let Error::NotFound { url } = err else {
            unreachable!("Expected NotFound error variant");
        };
        assert_eq!(url, "http://localhost:8080/api/projects/9");
    }

    #[test]
    fn test_from_status_other() {
        let err = Error::from_status(500, "http://x/api/projects");
        assert_eq!(err.to_string(), "HTTP 500 from http://x/api/projects");
        assert!(err.is_retryable());

        let err = Error::from_status(422, "http://x/api/projects");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_retryable_classification() {
        assert!(Error::unreachable("connection refused").is_retryable());
        assert!(!Error::session("no user").is_retryable());
        assert!(!Error::NoEditTarget.is_retryable());
        assert!(!Error::decode("bad json").is_retryable());
    }

    #[test]
    fn test_unreachable_with_source() {
        let io_error = std::io::Error::other("connection reset");
        let err = Error::unreachable_with_source("GET /api/projects failed", io_error);
        assert!(err.to_string().contains("GET /api/projects failed"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_forbidden_display() {
        let err = Error::forbidden("delete project 3");
        assert_eq!(err.to_string(), "Not permitted: delete project 3");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }

}
