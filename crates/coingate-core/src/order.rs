//! # Order Types
//!
//! Response records returned by the CoinGate orders API.
//!
//! Amounts are decimal strings exactly as the API sends them and are never
//! converted to floating point. Fields that the API sends as `null`, or
//! omits, decode to their default value.

use crate::status::OrderStatus;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// A CoinGate payment order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// CoinGate order ID
    #[serde(deserialize_with = "nullable")]
    pub id: i64,

    #[serde(deserialize_with = "nullable")]
    pub status: OrderStatus,

    #[serde(deserialize_with = "nullable")]
    pub title: String,

    #[serde(deserialize_with = "nullable")]
    pub do_not_convert: bool,

    #[serde(deserialize_with = "nullable")]
    pub orderable_type: String,

    #[serde(deserialize_with = "nullable")]
    pub orderable_id: i64,

    /// Currency the merchant priced the order in
    #[serde(deserialize_with = "nullable")]
    pub price_currency: String,

    #[serde(deserialize_with = "nullable")]
    pub price_amount: String,

    /// Currency the shopper pays in (set at checkout)
    #[serde(deserialize_with = "nullable")]
    pub pay_currency: String,

    #[serde(deserialize_with = "nullable")]
    pub pay_amount: String,

    #[serde(deserialize_with = "nullable")]
    pub lightning_network: bool,

    /// Currency the merchant settles in
    #[serde(deserialize_with = "nullable")]
    pub receive_currency: String,

    #[serde(deserialize_with = "nullable")]
    pub receive_amount: String,

    pub created_at: Option<DateTime<FixedOffset>>,

    pub expire_at: Option<DateTime<FixedOffset>>,

    pub paid_at: Option<DateTime<FixedOffset>>,

    #[serde(deserialize_with = "nullable")]
    pub payment_address: String,

    /// Merchant's own order reference
    #[serde(deserialize_with = "nullable")]
    pub order_id: String,

    /// Hosted invoice page to redirect the shopper to
    #[serde(deserialize_with = "nullable")]
    pub payment_url: String,

    #[serde(deserialize_with = "nullable")]
    pub underpaid_amount: String,

    #[serde(deserialize_with = "nullable")]
    pub overpaid_amount: String,

    #[serde(deserialize_with = "nullable")]
    pub is_refundable: bool,

    #[serde(deserialize_with = "nullable")]
    pub conversion_rate: String,

    #[serde(deserialize_with = "nullable")]
    pub refunds: Vec<Refund>,

    #[serde(deserialize_with = "nullable")]
    pub voids: Vec<serde_json::Value>,

    #[serde(deserialize_with = "nullable")]
    pub fees: Vec<Fee>,
}

/// One page of orders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Orders {
    #[serde(deserialize_with = "nullable")]
    pub current_page: u32,

    #[serde(deserialize_with = "nullable")]
    pub per_page: u32,

    #[serde(deserialize_with = "nullable")]
    pub total_orders: u64,

    #[serde(deserialize_with = "nullable")]
    pub total_pages: u32,

    #[serde(deserialize_with = "nullable")]
    pub orders: Vec<Order>,
}

impl Orders {
    /// Check if another page follows this one
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Result of `POST /orders/{id}/checkout`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutResponse {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,

    #[serde(deserialize_with = "nullable")]
    pub status: OrderStatus,

    #[serde(deserialize_with = "nullable")]
    pub do_not_convert: bool,

    #[serde(deserialize_with = "nullable")]
    pub price_currency: String,

    #[serde(deserialize_with = "nullable")]
    pub price_amount: String,

    #[serde(deserialize_with = "nullable")]
    pub pay_currency: String,

    #[serde(deserialize_with = "nullable")]
    pub pay_amount: String,

    #[serde(deserialize_with = "nullable")]
    pub lightning_network: bool,

    #[serde(deserialize_with = "nullable")]
    pub receive_currency: String,

    #[serde(deserialize_with = "nullable")]
    pub receive_amount: String,

    pub created_at: Option<DateTime<FixedOffset>>,

    pub expire_at: Option<DateTime<FixedOffset>>,

    #[serde(deserialize_with = "nullable")]
    pub payment_address: String,

    #[serde(deserialize_with = "nullable")]
    pub order_id: String,

    #[serde(deserialize_with = "nullable")]
    pub payment_url: String,

    #[serde(deserialize_with = "nullable")]
    pub underpaid_amount: String,

    #[serde(deserialize_with = "nullable")]
    pub overpaid_amount: String,

    #[serde(deserialize_with = "nullable")]
    pub is_refundable: bool,

    #[serde(deserialize_with = "nullable")]
    pub platform: Platform,
}

/// Blockchain platform a currency is transferred on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,

    #[serde(deserialize_with = "nullable")]
    pub title: String,

    #[serde(deserialize_with = "nullable")]
    pub id_name: String,
}

/// A refund issued against an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Refund {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,

    #[serde(deserialize_with = "nullable")]
    pub request_amount: String,

    #[serde(deserialize_with = "nullable")]
    pub refund_amount: String,

    #[serde(deserialize_with = "nullable")]
    pub address: String,

    #[serde(deserialize_with = "nullable")]
    pub status: String,

    pub memo: serde_json::Value,

    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(deserialize_with = "nullable")]
    pub order: RefundOrder,

    #[serde(deserialize_with = "nullable")]
    pub refund_currency: RefundCurrency,

    #[serde(deserialize_with = "nullable")]
    pub transactions: Vec<serde_json::Value>,

    #[serde(deserialize_with = "nullable")]
    pub ledger_account: LedgerAccount,
}

/// Order reference embedded in a refund
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundOrder {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundCurrency {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,

    #[serde(deserialize_with = "nullable")]
    pub title: String,

    #[serde(deserialize_with = "nullable")]
    pub symbol: String,

    #[serde(deserialize_with = "nullable")]
    pub platform: Platform,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerAccount {
    #[serde(deserialize_with = "nullable")]
    pub id: String,

    #[serde(deserialize_with = "nullable")]
    pub currency: Currency,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,

    #[serde(deserialize_with = "nullable")]
    pub title: String,

    #[serde(deserialize_with = "nullable")]
    pub symbol: String,
}

/// A fee charged on an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fee {
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub fee_type: String,

    #[serde(deserialize_with = "nullable")]
    pub amount: String,

    #[serde(deserialize_with = "nullable")]
    pub currency: Currency,
}

/// Decode `null` as the type's default value.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
