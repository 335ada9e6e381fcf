//! # CoinGate Configuration
//!
//! Credentials, endpoint and timeout for the CoinGate client.
//! The configuration is built once and never changes after the client
//! is constructed.

use coingate_core::{CoinGateError, CoinGateResult};
use std::env;
use std::fmt;
use std::time::Duration;

/// Production API endpoint
pub const API_LIVE_URL: &str = "https://api.coingate.com/v2";

/// Sandbox API endpoint (no real funds move)
pub const API_SANDBOX_URL: &str = "https://api-sandbox.coingate.com/v2";

/// Per-call timeout unless overridden
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// CoinGate API configuration
#[derive(Clone)]
pub struct CoinGateConfig {
    /// Merchant app ID
    pub app_id: i64,

    /// App auth token, sent as a bearer credential
    pub token: String,

    /// API base URL, including the `/v2` prefix
    pub api_base_url: String,

    /// Timeout applied to each call
    pub timeout: Duration,
}

/// A single configuration override.
///
/// Options are applied in the order given, so a later option wins over an
/// earlier one that touches the same field. `Sandbox(false)` selects the
/// production endpoint, replacing any custom base URL set before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientOption {
    AppId(i64),
    Token(String),
    Sandbox(bool),
    Timeout(Duration),
    ApiBaseUrl(String),
}

impl CoinGateConfig {
    /// Create config with production defaults.
    ///
    /// Fails if `app_id` is zero or `token` is empty.
    pub fn new(app_id: i64, token: impl Into<String>) -> CoinGateResult<Self> {
        let token = token.into();
        if app_id == 0 || token.is_empty() {
            return Err(CoinGateError::Configuration(
                "app id and token are required to create a client".to_string(),
            ));
        }

        Ok(Self {
            app_id,
            token,
            api_base_url: API_LIVE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `COINGATE_APP_ID`
    /// - `COINGATE_API_TOKEN`
    ///
    /// Optional:
    /// - `COINGATE_SANDBOX` (`true`/`false`, default `false`)
    /// - `COINGATE_TIMEOUT_SECS` (default 15)
    /// - `COINGATE_API_BASE_URL` (applied last, overrides `COINGATE_SANDBOX`)
    pub fn from_env() -> CoinGateResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let app_id = env::var("COINGATE_APP_ID")
            .map_err(|_| CoinGateError::Configuration("COINGATE_APP_ID not set".to_string()))?
            .parse::<i64>()
            .map_err(|_| {
                CoinGateError::Configuration("COINGATE_APP_ID must be an integer".to_string())
            })?;

        let token = env::var("COINGATE_API_TOKEN").map_err(|_| {
            CoinGateError::Configuration("COINGATE_API_TOKEN not set".to_string())
        })?;

        let mut config = Self::new(app_id, token)?;

        if let Ok(sandbox) = env::var("COINGATE_SANDBOX") {
            let sandbox = sandbox.parse::<bool>().map_err(|_| {
                CoinGateError::Configuration("COINGATE_SANDBOX must be true or false".to_string())
            })?;
            config = config.with_sandbox(sandbox);
        }

        if let Ok(secs) = env::var("COINGATE_TIMEOUT_SECS") {
            let secs = secs.parse::<u64>().map_err(|_| {
                CoinGateError::Configuration(
                    "COINGATE_TIMEOUT_SECS must be a whole number of seconds".to_string(),
                )
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        if let Ok(url) = env::var("COINGATE_API_BASE_URL") {
            config = config.with_api_base_url(url);
        }

        Ok(config)
    }

    /// Check if the sandbox endpoint is configured
    pub fn is_sandbox(&self) -> bool {
        self.api_base_url == API_SANDBOX_URL
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Builder: replace the app ID
    pub fn with_app_id(mut self, app_id: i64) -> Self {
        self.app_id = app_id;
        self
    }

    /// Builder: replace the auth token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Builder: select the sandbox or production endpoint
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.api_base_url = if sandbox { API_SANDBOX_URL } else { API_LIVE_URL }.to_string();
        self
    }

    /// Builder: set the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Apply a single option
    pub fn apply(self, option: ClientOption) -> Self {
        match option {
            ClientOption::AppId(id) => self.with_app_id(id),
            ClientOption::Token(token) => self.with_token(token),
            ClientOption::Sandbox(sandbox) => self.with_sandbox(sandbox),
            ClientOption::Timeout(timeout) => self.with_timeout(timeout),
            ClientOption::ApiBaseUrl(url) => self.with_api_base_url(url),
        }
    }

    /// Apply options in order
    pub fn with_options(self, options: impl IntoIterator<Item = ClientOption>) -> Self {
        options.into_iter().fold(self, Self::apply)
    }
}

impl fmt::Debug for CoinGateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoinGateConfig")
            .field("app_id", &self.app_id)
            .field("token", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
