//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use pagify_api::ApiError;

use crate::form::ValidationErrors;

/// 无法给出更具体提示时展示给用户的默认文案
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Form input failed validation (no request was sent)
    #[error("{0}")]
    Validation(ValidationErrors),

    /// No session token, or the token was rejected
    #[error("Not authenticated")]
    NotAuthenticated,

    /// List entry not found
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Destructive action attempted without confirmation
    #[error("Confirmation required: {0}")]
    ConfirmationRequired(String),

    /// Action not applicable in the current state or on this path
    #[error("{0}")]
    InvalidAction(String),

    /// Token / config storage error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// API error (converting from library)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_)
            | Self::NotAuthenticated
            | Self::ItemNotFound(_)
            | Self::ConfirmationRequired(_)
            | Self::InvalidAction(_) => true,
            Self::Api(e) => e.is_expected(),
            Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }

    /// 面向用户的提示文案
    ///
    /// - 校验失败：第一条字段错误
    /// - 后端返回了 message：原样展示
    /// - 其他情况：通用兜底文案
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => errors
                .first_message()
                .unwrap_or(GENERIC_FAILURE_MESSAGE)
                .to_string(),
            Self::NotAuthenticated => "Please log in to continue.".to_string(),
            Self::InvalidAction(msg) => msg.clone(),
            Self::Api(e) => e
                .server_message()
                .unwrap_or(GENERIC_FAILURE_MESSAGE)
                .to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldError, ValidationErrors};

    #[test]
    fn server_message_is_surfaced_verbatim() {
        let err = CoreError::from(ApiError::ServerError {
            status: 400,
            raw_message: Some("Invalid email or password".into()),
        });
        assert_eq!(err.user_message(), "Invalid email or password");
        assert!(err.is_expected());
    }

    #[test]
    fn missing_server_message_falls_back() {
        let err = CoreError::from(ApiError::NetworkError {
            detail: "connection refused".into(),
        });
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert!(!err.is_expected());
    }

    #[test]
    fn validation_shows_first_field_error() {
        let err = CoreError::Validation(ValidationErrors::new(vec![
            FieldError::new("email", "Please enter a valid email address"),
            FieldError::new("password", "Password is required"),
        ]));
        assert_eq!(err.user_message(), "Please enter a valid email address");
    }
}
