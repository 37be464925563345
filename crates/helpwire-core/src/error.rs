//! Helpwire API client errors.

use thiserror::Error;

/// Error returned by every API operation.
///
/// Failures come in two classes: transport (the HTTP call itself failed,
/// was canceled, or the server answered with a non-success status) and
/// decode (the response body did not match the expected JSON shape).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("{method} {path}: {message}")]
    Transport {
        method: &'static str,
        path: String,
        message: String,
    },

    #[error("{method} {path}: API returned {status}: {message}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
        message: String,
    },

    #[error("{path}: failed to decode response: {message}")]
    Decode { path: String, message: String },
}

impl ApiError {
    /// Build a decode error from a serde failure on the given path's response.
    pub fn decode(path: &str, err: serde_json::Error) -> Self {
        Self::Decode {
            path: path.to_string(),
            message: err.to_string(),
        }
    }

    /// HTTP status of the failed call, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for network failures, cancellations and non-success statuses.
    pub fn is_transport(&self) -> bool {
        !self.is_decode()
    }

    /// True when the response body did not parse as the expected shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let err = ApiError::Transport {
            method: "GET",
            path: "/webhooks".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("GET /webhooks"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            method: "DELETE",
            path: "/webhooks/42".to_string(),
            status: 404,
            message: "Not Found".to_string(),
        };
        assert!(err.to_string().contains("DELETE /webhooks/42"));
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not Found"));
    }

    #[test]
    fn test_decode_error_display() {
        let err = ApiError::Decode {
            path: "/webhooks".to_string(),
            message: "missing field `webhooks`".to_string(),
        };
        assert!(err.to_string().contains("failed to decode"));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Status {
            method: "GET",
            path: "/webhooks/1".to_string(),
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.status(), Some(500));

        let err = ApiError::Transport {
            method: "GET",
            path: "/webhooks/1".to_string(),
            message: "timeout".to_string(),
        };
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_error_classification() {
        let transport = ApiError::Transport {
            method: "PUT",
            path: "/webhooks/1".to_string(),
            message: "reset".to_string(),
        };
        assert!(transport.is_transport());
        assert!(!transport.is_decode());

        let status = ApiError::Status {
            method: "GET",
            path: "/webhooks".to_string(),
            status: 429,
            message: "slow down".to_string(),
        };
        assert!(status.is_transport());

        let decode = ApiError::decode(
            "/webhooks",
            serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        );
        assert!(decode.is_decode());
        assert!(!decode.is_transport());
    }

    #[test]
    fn test_invalid_url_display() {
        let err = ApiError::InvalidUrl("relative URL without a base".to_string());
        assert!(err.to_string().contains("Invalid URL"));
        assert!(err.is_transport());
    }
}
