//! # coingate-client
//!
//! HTTP client for the CoinGate cryptocurrency payment gateway.
//!
//! Operations:
//!
//! | Method | Call | Path |
//! |--------|------|------|
//! | `create_order` | POST | `/orders` |
//! | `checkout` | POST | `/orders/{id}/checkout` |
//! | `get_order` | GET | `/orders/{id}` |
//! | `list_orders` | GET | `/orders` |
//! | `process_callback` | (inbound) | your `callback_url` |
//!
//! POST payloads are sent form-encoded; responses are JSON. The client does
//! not retry, rate limit or cache.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coingate_client::{ClientOption, CoinGateClient};
//! use coingate_core::CreateOrderRequest;
//!
//! let client = CoinGateClient::with_options(1234, "app-token", [ClientOption::Sandbox(true)])?;
//!
//! let order = client
//!     .create_order(
//!         CreateOrderRequest::new("abc123", "100.01", "USD", "BTC")
//!             .with_callback_url("https://example.com/coingate/callback"),
//!     )
//!     .await?;
//!
//! // Redirect the shopper to order.payment_url
//! ```

pub mod callback;
pub mod client;
pub mod config;
pub mod orders;

// Re-exports
pub use client::CoinGateClient;
pub use config::{ClientOption, CoinGateConfig, API_LIVE_URL, API_SANDBOX_URL, DEFAULT_TIMEOUT};
pub use coingate_core::{
    CallbackData, CheckoutRequest, CheckoutResponse, CoinGateError, CoinGateResult,
    CreateOrderRequest, ListOrdersRequest, Order, OrderStatus, Orders,
};
