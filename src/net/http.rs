//! HTTP plumbing for the backend REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport reports a network error since the
//! backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! The [`Transport`] boundary only fails for network-level problems; any
//! HTTP response, success or not, comes back as an [`ApiResponse`] so the
//! caller can apply the retry-once policy before converting a bad status
//! into an error.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;

/// Errors surfaced by the HTTP layer and the session operations built on it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No response received at all.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: serde_json::Value },

    /// The response body did not match the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// A refresh was requested with no refresh token in the store.
    #[error("no refresh token in session store")]
    MissingRefreshToken,
}

impl ApiError {
    /// True when this error carries the 401 status.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

/// Where the backend lives. The `/auth/*` paths are fixed; only the host
/// portion is deployment-specific.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Join an endpoint path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    /// Same-origin API prefix, matching the production reverse-proxy layout.
    fn default() -> Self {
        Self::new("/api/v1")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outbound request. The bearer slot is filled by the session layer,
/// never by page code.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            bearer: None,
            body: None,
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            bearer: None,
            body: None,
        }
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Retry wrapper around an in-flight request. `retried` is the guard that
/// keeps an expired-token failure from looping: once marked, the next
/// authorization failure propagates to the caller untouched.
#[derive(Clone, Debug)]
pub struct Envelope {
    pub request: ApiRequest,
    pub retried: bool,
}

impl Envelope {
    pub fn new(request: ApiRequest) -> Self {
        Self { request, retried: false }
    }
}

/// A received HTTP response, any status.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Convert a non-success response into [`ApiError::Status`].
    pub fn into_result(self) -> Result<ApiResponse, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status { status: self.status, body: self.body })
        }
    }

    /// Decode the body into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(self.body.clone()).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Executes requests against the backend. Mocked in tests to script
/// response sequences.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

impl<T: Transport> Transport for std::rc::Rc<T> {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        (**self).execute(request).await
    }
}

/// Real transport over `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for GlooTransport {
    #[allow(clippy::unused_async)]
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&request.url),
                Method::Post => gloo_net::http::Request::post(&request.url),
            };
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let response = match &request.body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status();
            // Error bodies are JSON too; anything unparseable becomes null.
            let body = response
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}
