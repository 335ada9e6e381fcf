//! # CoinGate Client
//!
//! The client and its single request dispatcher. Every API call goes
//! through [`CoinGateClient::request`], which owns URL building, headers,
//! auth, timeout and response classification.

use crate::config::{ClientOption, CoinGateConfig};
use coingate_core::{CoinGateError, CoinGateResult, ErrorResponse};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, instrument};

/// CoinGate API client
///
/// Cheap to share: the configuration is read-only and reqwest's client is
/// internally reference counted, so a single instance can serve concurrent
/// calls from many tasks.
#[derive(Debug, Clone)]
pub struct CoinGateClient {
    config: CoinGateConfig,
    http: Client,
}

impl CoinGateClient {
    /// Create a new client from a validated configuration
    pub fn new(config: CoinGateConfig) -> CoinGateResult<Self> {
        let http = Client::builder().build().map_err(|e| {
            CoinGateError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { config, http })
    }

    /// Create a client from identity plus ordered overrides.
    ///
    /// ```rust,ignore
    /// let client = CoinGateClient::with_options(
    ///     1234,
    ///     "app-token",
    ///     [ClientOption::Sandbox(true), ClientOption::Timeout(Duration::from_secs(5))],
    /// )?;
    /// ```
    pub fn with_options(
        app_id: i64,
        token: impl Into<String>,
        options: impl IntoIterator<Item = ClientOption>,
    ) -> CoinGateResult<Self> {
        let config = CoinGateConfig::new(app_id, token)?.with_options(options);
        Self::new(config)
    }

    /// Create from environment variables
    pub fn from_env() -> CoinGateResult<Self> {
        Self::new(CoinGateConfig::from_env()?)
    }

    pub fn config(&self) -> &CoinGateConfig {
        &self.config
    }

    /// Join the base URL and a relative path without doubling separators
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base_url, path.trim_matches('/'))
    }

    /// Perform one API call and return the raw JSON body of a 200 response.
    ///
    /// GET payloads become query parameters, POST payloads a form body.
    /// Any status other than 200 is turned into [`CoinGateError::Api`]
    /// using whatever the error body provides.
    #[instrument(skip(self, payload))]
    pub(crate) async fn request<P>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&P>,
    ) -> CoinGateResult<String>
    where
        P: Serialize + ?Sized,
    {
        let url = self.url(path);

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Authorization", self.config.auth_header())
            .timeout(self.config.timeout);

        if let Some(payload) = payload {
            if method == Method::POST {
                builder = builder.form(payload);
            } else if method == Method::GET {
                builder = builder.query(payload);
            }
        }

        debug!("Calling CoinGate: {} {}", method, url);

        let response = builder.send().await.map_err(|e| {
            error!("CoinGate request failed: {}", e);
            CoinGateError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CoinGateError::Network(e.to_string()))?;

        if status != StatusCode::OK {
            error!("CoinGate API error: status={}, body={}", status, body);
            return Err(ErrorResponse::from_body(&body).into_error(status.as_u16()));
        }

        Ok(body)
    }
}

/// Decode a 200 response body into its typed record
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> CoinGateResult<T> {
    serde_json::from_str(body).map_err(|e| {
        CoinGateError::Serialization(format!("Failed to parse CoinGate response: {}", e))
    })
}
