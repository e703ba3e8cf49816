//! Domeneshop API client

mod domains;
mod records;
mod status;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::credentials::Credentials;
use crate::error::{ClientError, Result};
use crate::http_client::{ApiRequest, HttpTransport, RawResponse, Transport};
use crate::utils::log_sanitizer::mask_token;

pub const DEFAULT_BASE_URL: &str = "https://api.domeneshop.no/v0";
pub const DEFAULT_USER_AGENT: &str = concat!("domeneshop-client/", env!("CARGO_PKG_VERSION"));

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the Domeneshop REST API.
///
/// Holds no mutable state after construction, so a single instance (or its
/// clones, which share the transport) can serve concurrent calls.
#[derive(Clone)]
pub struct DomeneshopClient {
    transport: Arc<dyn Transport>,
    call_timeout: Option<Duration>,
}

/// Builder for [`DomeneshopClient`].
pub struct DomeneshopClientBuilder {
    credentials: Credentials,
    base_url: String,
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
    http_client: Option<Client>,
}

impl DomeneshopClientBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            http_client: None,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses a preconfigured reqwest client. The timeout settings of this
    /// builder are then ignored.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<DomeneshopClient> {
        let client = match self.http_client {
            Some(client) => client,
            None => Client::builder()
                .connect_timeout(self.connect_timeout)
                .timeout(self.timeout)
                .build()
                .map_err(ClientError::from)?,
        };

        log::debug!(
            "[domeneshop] Client for token {} at {}",
            mask_token(self.credentials.token()),
            self.base_url
        );

        let transport = HttpTransport::new(
            client,
            &self.base_url,
            self.credentials,
            &self.user_agent,
        )?;
        Ok(DomeneshopClient::with_transport(Arc::new(transport)))
    }
}

impl DomeneshopClient {
    /// Client against the public API with default settings.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> DomeneshopClientBuilder {
        DomeneshopClientBuilder::new(credentials)
    }

    /// Client over a custom transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            call_timeout: None,
        }
    }

    /// Clone of this client whose calls time out after `timeout`.
    ///
    /// Cancelling a call is dropping its future.
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            call_timeout: Some(timeout),
        }
    }

    pub(crate) async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        self.transport
            .execute(request.with_timeout(self.call_timeout))
            .await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! In-memory transport that records requests and replays canned responses.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use reqwest::header::HeaderMap;

    use super::*;

    #[derive(Default)]
    pub struct ScriptedTransport {
        pub requests: Mutex<Vec<ApiRequest>>,
        responses: Mutex<VecDeque<Result<RawResponse>>>,
    }

    impl ScriptedTransport {
        pub fn replying(status: u16, body: &str) -> Arc<Self> {
            let transport = Self::default();
            transport.push(status, body);
            Arc::new(transport)
        }

        pub fn failing(error: ClientError) -> Arc<Self> {
            let transport = Self::default();
            transport.responses.lock().unwrap().push_back(Err(error));
            Arc::new(transport)
        }

        pub fn push(&self, status: u16, body: &str) {
            self.responses.lock().unwrap().push_back(Ok(RawResponse {
                status,
                headers: HeaderMap::new(),
                body: body.to_string(),
            }));
        }

        pub fn sent(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::decode("no scripted response left")))
        }
    }

    pub fn client(transport: &Arc<ScriptedTransport>) -> DomeneshopClient {
        DomeneshopClient::with_transport(Arc::clone(transport) as Arc<dyn Transport>)
    }
}
