//! Authenticated HTTP transport
//!
//! One call in, one raw response out. The transport attaches the Basic
//! authentication and `User-Agent` headers, serializes bodies to JSON and
//! reads the response body to the end, which releases the connection on
//! every path. It never interprets status codes or bodies; that is left to
//! the operations in [`crate::client`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::credentials::Credentials;
use crate::error::{ClientError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// A request relative to the API base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path plus optional query string, e.g. `/domains/1/dns?type=A`.
    pub path: String,
    /// Serialized JSON body.
    pub body: Option<Vec<u8>>,
    /// Overrides the client-wide request timeout for this call.
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            timeout: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self> {
        Self::new(Method::POST, path).with_json(body)
    }

    pub fn put<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self> {
        Self::new(Method::PUT, path).with_json(body)
    }

    fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        let payload = serde_json::to_vec(body).map_err(|e| ClientError::Serialization {
            detail: e.to_string(),
        })?;
        self.body = Some(payload);
        Ok(self)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Status, headers and fully-read body of a response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body as `T`, logging the raw body on failure.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            log::error!("[domeneshop] JSON parse failed: {e}");
            log::error!("[domeneshop] Raw response: {}", truncate_for_log(&self.body));
            ClientError::decode(e)
        })
    }
}

/// Issues one authenticated call against the API.
///
/// Implemented by [`HttpTransport`]; other implementations can stand in for
/// it in tests or behind a proxy.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse>;
}

/// reqwest-backed [`Transport`].
pub struct HttpTransport {
    client: Client,
    base_url: String,
    authorization: HeaderValue,
    user_agent: HeaderValue,
}

impl HttpTransport {
    /// Encodes the credentials once; the cleartext pair is dropped here.
    pub fn new(
        client: Client,
        base_url: &str,
        credentials: Credentials,
        user_agent: &str,
    ) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&credentials.basic_auth_header())
            .map_err(|e| ClientError::config(format!("invalid credentials header: {e}")))?;
        authorization.set_sensitive(true);

        let user_agent = HeaderValue::from_str(user_agent)
            .map_err(|e| ClientError::config(format!("invalid user agent: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization,
            user_agent,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        log::debug!("[domeneshop] {} {url}", request.method);

        let mut builder = self
            .client
            .request(request.method, &url)
            .header(AUTHORIZATION, self.authorization.clone())
            .header(USER_AGENT, self.user_agent.clone());

        if let Some(body) = request.body {
            log::debug!(
                "[domeneshop] Request Body: {}",
                truncate_for_log(&String::from_utf8_lossy(&body))
            );
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| {
            log::warn!("[domeneshop] Request failed: {e}");
            ClientError::from(e)
        })?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        log::debug!("[domeneshop] Response Status: {status}");

        let body = response.text().await.map_err(|e| ClientError::Transport {
            timeout: e.is_timeout(),
            detail: format!("Failed to read response body: {e}"),
        })?;
        log::debug!("[domeneshop] Response Body: {}", truncate_for_log(&body));

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
