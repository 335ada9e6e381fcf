//! # Request Types
//!
//! Payloads sent to the CoinGate orders API. POST payloads travel as
//! `application/x-www-form-urlencoded` bodies, GET payloads as query
//! parameters, so every field here is a flat scalar. Unset optional fields
//! are left out of the encoded form entirely.

use serde::{Deserialize, Serialize};

/// Sort order applied when a listing does not specify one
pub const DEFAULT_SORT: &str = "created_at_desc";

/// Page size applied when a listing asks for zero or fewer orders
pub const DEFAULT_PER_PAGE: i32 = 10;

/// Payload for `POST /orders`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Merchant's own order reference
    pub order_id: String,

    /// Decimal amount, sent exactly as given (e.g. `"100.01"`)
    pub price_amount: String,

    pub price_currency: String,

    pub receive_currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Where CoinGate posts status change notifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,

    /// Echoed back in callbacks so the merchant can authenticate them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchaser_email: Option<String>,
}

impl CreateOrderRequest {
    /// Create a request with the four required fields
    pub fn new(
        order_id: impl Into<String>,
        price_amount: impl Into<String>,
        price_currency: impl Into<String>,
        receive_currency: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            price_amount: price_amount.into(),
            price_currency: price_currency.into(),
            receive_currency: receive_currency.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = Some(url.into());
        self
    }

    pub fn with_success_url(mut self, url: impl Into<String>) -> Self {
        self.success_url = Some(url.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_purchaser_email(mut self, email: impl Into<String>) -> Self {
        self.purchaser_email = Some(email.into());
        self
    }
}

/// Payload for `POST /orders/{id}/checkout`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Currency the shopper will pay in
    pub pay_currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightning_network: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchaser_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<i32>,
}

impl CheckoutRequest {
    pub fn new(pay_currency: impl Into<String>) -> Self {
        Self {
            pay_currency: pay_currency.into(),
            ..Default::default()
        }
    }
}

/// Query for `GET /orders`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListOrdersRequest {
    pub per_page: i32,

    pub page: i32,

    /// One of `created_at_asc`, `created_at_desc`, `id_asc`, `id_desc`
    pub sort: String,

    /// Lower bound on creation time, `YYYY-MM-DD` or RFC 3339
    #[serde(
        rename = "created_at[from]",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_from: Option<String>,

    /// Upper bound on creation time
    #[serde(
        rename = "created_at[to]",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_to: Option<String>,
}

impl ListOrdersRequest {
    pub fn new(per_page: i32, page: i32) -> Self {
        Self {
            per_page,
            page,
            ..Default::default()
        }
    }

    /// Fill in the listing defaults.
    ///
    /// A page size of zero or less becomes 10, a page of one or less
    /// becomes 1 and an empty sort becomes `created_at_desc`. Everything
    /// else is left as given.
    pub fn with_defaults(mut self) -> Self {
        if self.per_page <= 0 {
            self.per_page = DEFAULT_PER_PAGE;
        }
        if self.page <= 1 {
            self.page = 1;
        }
        if self.sort.is_empty() {
            self.sort = DEFAULT_SORT.to_string();
        }
        self
    }
}
