//! reqwest-backed implementation of [`StorefrontApi`]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::traits::StorefrontApi;
use crate::types::{
    AuthToken, Credentials, Envelope, Portal, Product, ProductScope, ProfilePicture,
    ProfileUpdate, UploadedPicture, UserProfile,
};

/// Versioned path prefix of every endpoint.
pub const API_PREFIX: &str = "/api/v1";
/// Default backend host.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Multipart field name expected by the upload endpoint.
const PROFILE_PICTURE_FIELD: &str = "profilePicture";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`RestStorefront`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme + host (+ port) of the backend, without the `/api/v1` prefix.
    pub base_url: String,
    /// Whole-request timeout.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Pagify REST client
pub struct RestStorefront {
    client: Client,
    base_url: String,
}

impl RestStorefront {
    /// Build a client for the given backend.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::InvalidRequest {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&config.base_url),
        })
    }

    /// Full URL of an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    /// Send a request and parse its (possibly enveloped) JSON body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<T> {
        let (status, text) = HttpUtils::execute_request(request, method_name, url).await?;
        HttpUtils::check_status(status, &text)?;
        let envelope: Envelope<T> = HttpUtils::parse_json(&text)?;
        Ok(envelope.into_inner())
    }

    /// Send a request whose body is irrelevant on success.
    async fn send_empty(&self, request: RequestBuilder, method_name: &str, url: &str) -> Result<()> {
        let (status, text) = HttpUtils::execute_request(request, method_name, url).await?;
        HttpUtils::check_status(status, &text)
    }
}

#[async_trait]
impl StorefrontApi for RestStorefront {
    async fn login(&self, portal: Portal, credentials: &Credentials) -> Result<AuthToken> {
        let url = self.endpoint(portal.login_path());
        let request = self.client.post(&url).json(credentials);
        self.send_json(request, "POST", &url).await
    }

    async fn current_user(&self, token: &str) -> Result<UserProfile> {
        let url = self.endpoint("/users/me");
        let request = self.client.get(&url).bearer_auth(token);
        self.send_json(request, "GET", &url).await
    }

    async fn update_current_user(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<UserProfile> {
        let url = self.endpoint("/users/me");
        let request = self.client.patch(&url).bearer_auth(token).json(update);
        self.send_json(request, "PATCH", &url).await
    }

    async fn upload_profile_picture(
        &self,
        token: &str,
        picture: ProfilePicture,
    ) -> Result<UploadedPicture> {
        let url = self.endpoint("/users/upload-profile-picture");
        log::debug!("Uploading {picture:?}");

        let part = Part::bytes(picture.bytes)
            .file_name(picture.file_name)
            .mime_str(&picture.content_type)
            .map_err(|e| ApiError::InvalidRequest {
                detail: format!("Invalid content type: {e}"),
            })?;
        let form = Form::new().part(PROFILE_PICTURE_FIELD, part);
        let request = self.client.post(&url).bearer_auth(token).multipart(form);

        let (status, text) = HttpUtils::execute_request(request, "POST", &url).await?;
        HttpUtils::check_status(status, &text)?;
        Ok(parse_upload_response(&text))
    }

    async fn list_products(
        &self,
        token: Option<&str>,
        scope: ProductScope,
    ) -> Result<Vec<Product>> {
        let url = self.endpoint(scope.path());
        let mut request = self.client.get(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.send_json(request, "GET", &url).await
    }

    async fn delete_product(&self, token: &str, product_id: &str) -> Result<()> {
        let url = self.endpoint(&format!("/products/{}", urlencoding::encode(product_id)));
        let request = self.client.delete(&url).bearer_auth(token);
        self.send_empty(request, "DELETE", &url).await
    }
}

/// Strip trailing slashes and an accidentally included `/api/v1` prefix.
fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    trimmed
        .strip_suffix(API_PREFIX)
        .unwrap_or(trimmed)
        .to_string()
}

/// The upload endpoint answers with the picture URL in one of several shapes;
/// an unparseable body still counts as a successful upload.
fn parse_upload_response(text: &str) -> UploadedPicture {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(text) else {
        return UploadedPicture::default();
    };

    let candidates = [
        Some(&value),
        value.get("data"),
        value.get("user"),
        value.get("data").and_then(|d| d.get("user")),
    ];
    let url = candidates.into_iter().flatten().find_map(|v| {
        ["profilePicture", "avatarUrl", "url"]
            .iter()
            .find_map(|key| v.get(key).and_then(serde_json::Value::as_str))
            .map(ToString::to_string)
    });

    UploadedPicture { url }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> RestStorefront {
        RestStorefront::new(&ClientConfig {
            base_url: base_url.to_string(),
            request_timeout: Duration::from_secs(2),
        })
        .unwrap()
    }

    #[test]
    fn endpoint_joins_prefix() {
        let api = client("https://api.pagify.io/");
        assert_eq!(
            api.endpoint("/products/all"),
            "https://api.pagify.io/api/v1/products/all"
        );
    }

    #[test]
    fn base_url_with_prefix_is_normalized() {
        assert_eq!(
            normalize_base_url("http://localhost:8080/api/v1/"),
            "http://localhost:8080"
        );
    }

    #[test]
    fn upload_response_shapes() {
        assert_eq!(
            parse_upload_response(r#"{"profilePicture":"https://cdn/p.png"}"#).url,
            Some("https://cdn/p.png".into())
        );
        assert_eq!(
            parse_upload_response(r#"{"data":{"user":{"avatarUrl":"https://cdn/a.png"}}}"#).url,
            Some("https://cdn/a.png".into())
        );
        assert_eq!(parse_upload_response("OK").url, None);
    }

    #[tokio::test]
    async fn closed_port_is_network_error() {
        // 端口 1 上不会有服务监听
        let api = client("http://127.0.0.1:1");
        let result = api.list_products(None, ProductScope::Public).await;
        assert!(
            matches!(
                result,
                Err(ApiError::NetworkError { .. } | ApiError::Timeout { .. })
            ),
            "unexpected result: {result:?}"
        );
    }
}
