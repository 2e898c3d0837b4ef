//! Generic HTTP client tools
//!
//! Shared request processing for every endpoint of [`RestStorefront`](crate::RestStorefront):
//! sending, logging, status classification and JSON parsing.
//!
//! # design principles
//! - **One round trip per call** - no retry, no backoff; a failure is terminal for the action
//! - **Server messages are preserved** - the `message` field of an error body is kept verbatim
//! - **Bodies are truncated in logs** - catalogs can be large and tokens must not leak

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - status code and body, whatever the status
    /// * `Err(ApiError::NetworkError | ApiError::Timeout)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Classify a non-success status into an [`ApiError`]
    ///
    /// - 2xx passes through
    /// - 401 / 403 become `Unauthorized`
    /// - 404 becomes `NotFound`
    /// - anything else becomes `ServerError`
    ///
    /// The backend's own message is extracted from the body when present.
    pub fn check_status(status_code: u16, response_text: &str) -> Result<(), ApiError> {
        if (200..300).contains(&status_code) {
            return Ok(());
        }

        let raw_message = extract_server_message(response_text);
        let err = match status_code {
            401 | 403 => ApiError::Unauthorized { raw_message },
            404 => ApiError::NotFound { raw_message },
            _ => ApiError::ServerError {
                status: status_code,
                raw_message,
            },
        };

        if err.is_expected() {
            log::warn!("API rejected request: {err}");
        } else {
            log::error!("API request failed: {err}");
        }
        Err(err)
    }

    /// Parse JSON response
    ///
    /// # Type Parameters
    /// * `T` - target type
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ApiError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ApiError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

/// Pull the human readable message out of an error body.
///
/// Accepts `{"message": "..."}` and `{"error": "..."}`; anything else
/// (HTML error pages, empty bodies) yields `None`.
pub(crate) fn extract_server_message(response_text: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(response_text).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map(ToString::to_string)
}
