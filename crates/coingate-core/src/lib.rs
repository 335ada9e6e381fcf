//! # coingate-core
//!
//! Core types for the CoinGate payment gateway API.
//!
//! This crate provides:
//! - `Order`, `Orders` and `CheckoutResponse` mirroring the API's JSON responses
//! - `CreateOrderRequest`, `CheckoutRequest` and `ListOrdersRequest` payloads
//! - `OrderStatus` for the order lifecycle
//! - `CallbackData` for parsing form-encoded order callbacks
//! - `CoinGateError` for typed error handling
//!
//! It performs no I/O; see `coingate-client` for the HTTP client.
//!
//! ## Example
//!
//! ```rust
//! use coingate_core::{CallbackData, OrderStatus};
//!
//! let body = b"id=343&order_id=abc123&status=paid&is_refundable=true";
//! let data = CallbackData::from_form(body).unwrap();
//!
//! assert_eq!(data.status, OrderStatus::Paid);
//! ```

pub mod callback;
pub mod error;
pub mod order;
pub mod request;
pub mod status;

// Re-exports for convenience
pub use callback::CallbackData;
pub use error::{CoinGateError, CoinGateResult, ErrorResponse};
pub use order::{
    CheckoutResponse, Currency, Fee, LedgerAccount, Order, Orders, Platform, Refund,
    RefundCurrency, RefundOrder,
};
pub use request::{
    CheckoutRequest, CreateOrderRequest, ListOrdersRequest, DEFAULT_PER_PAGE, DEFAULT_SORT,
};
pub use status::OrderStatus;
