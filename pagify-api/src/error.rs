use serde::{Deserialize, Serialize};

/// Unified error type for all Pagify API operations.
///
/// Variants are serializable for structured error reporting. Server-side
/// rejections keep the backend's own message (`raw_message`) so that the UI can
/// surface it verbatim.
///
/// None of these errors are retried: every request is a single round trip and
/// a failure is terminal for the action that issued it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The bearer token was missing, invalid or rejected (HTTP 401/403).
    Unauthorized {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The requested resource does not exist (HTTP 404).
    NotFound {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// Any other non-success HTTP status.
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to build or serialize a request.
    InvalidRequest {
        /// Description of what's wrong.
        detail: String,
    },
}

impl ApiError {
    /// 是否为预期行为（凭证失效、资源不存在、服务端拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Unauthorized { .. } | Self::NotFound { .. } => true,
            Self::ServerError { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// The message the backend put in its error body, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { raw_message }
            | Self::NotFound { raw_message }
            | Self::ServerError { raw_message, .. } => raw_message.as_deref(),
            _ => None,
        }
    }

    /// Whether the failure means the stored credential is no longer accepted.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timed out: {detail}"),
            Self::Unauthorized { raw_message } => match raw_message {
                Some(msg) => write!(f, "Unauthorized: {msg}"),
                None => write!(f, "Unauthorized"),
            },
            Self::NotFound { raw_message } => match raw_message {
                Some(msg) => write!(f, "Not found: {msg}"),
                None => write!(f, "Not found"),
            },
            Self::ServerError {
                status,
                raw_message,
            } => match raw_message {
                Some(msg) => write!(f, "Server error (HTTP {status}): {msg}"),
                None => write!(f, "Server error (HTTP {status})"),
            },
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::InvalidRequest { detail } => write!(f, "Invalid request: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_expected() {
        let e = ApiError::Unauthorized { raw_message: None };
        assert!(e.is_expected());
        assert!(e.is_unauthorized());
    }

    #[test]
    fn client_side_status_is_expected_server_side_is_not() {
        let bad_request = ApiError::ServerError {
            status: 422,
            raw_message: Some("Email already taken".into()),
        };
        let crash = ApiError::ServerError {
            status: 500,
            raw_message: None,
        };
        assert!(bad_request.is_expected());
        assert!(!crash.is_expected());
    }

    #[test]
    fn network_error_is_not_expected() {
        let e = ApiError::NetworkError {
            detail: "connection refused".into(),
        };
        assert!(!e.is_expected());
        assert_eq!(e.server_message(), None);
    }

    #[test]
    fn server_message_is_exposed() {
        let e = ApiError::NotFound {
            raw_message: Some("Product not found".into()),
        };
        assert_eq!(e.server_message(), Some("Product not found"));
    }

    #[test]
    fn display_includes_status_and_message() {
        let e = ApiError::ServerError {
            status: 409,
            raw_message: Some("Conflict".into()),
        };
        assert_eq!(e.to_string(), "Server error (HTTP 409): Conflict");
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ApiError::Timeout {
            detail: "30s".into(),
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "Timeout");
        assert_eq!(json["detail"], "30s");
    }
}
