//! # Order Status
//!
//! Lifecycle states a CoinGate order moves through.
//! See <https://developer.coingate.com/reference/order-statuses>.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status as reported by CoinGate.
///
/// Values outside the documented set are kept verbatim in `Unknown`
/// so that decoding never fails on a new upstream status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// Newly created invoice, shopper has not selected a currency yet
    New,
    /// Shopper selected a currency, awaiting payment
    Pending,
    /// Payment received, awaiting blockchain confirmations
    Confirming,
    /// Payment confirmed
    Paid,
    /// Payment rejected by the network or not confirmed in time
    Invalid,
    /// Shopper did not pay within the payment window
    Expired,
    /// Shopper canceled the invoice
    Canceled,
    /// Payment returned to the shopper
    Refunded,
    /// Part of the payment returned to the shopper
    PartiallyRefunded,
    /// Any status string not listed above
    Unknown(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Pending => "pending",
            OrderStatus::Confirming => "confirming",
            OrderStatus::Paid => "paid",
            OrderStatus::Invalid => "invalid",
            OrderStatus::Expired => "expired",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Refunded => "refunded",
            OrderStatus::PartiallyRefunded => "partially_refunded",
            OrderStatus::Unknown(s) => s,
        }
    }

    /// Check if the order can no longer change state on its own
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            OrderStatus::Paid
                | OrderStatus::Invalid
                | OrderStatus::Expired
                | OrderStatus::Canceled
                | OrderStatus::Refunded
                | OrderStatus::PartiallyRefunded
        )
    }

    /// Check if funds were received (possibly later refunded in part)
    pub fn is_paid(&self) -> bool {
        matches!(self, OrderStatus::Paid | OrderStatus::PartiallyRefunded)
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Unknown(String::new())
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "new" => OrderStatus::New,
            "pending" => OrderStatus::Pending,
            "confirming" => OrderStatus::Confirming,
            "paid" => OrderStatus::Paid,
            "invalid" => OrderStatus::Invalid,
            "expired" => OrderStatus::Expired,
            "canceled" => OrderStatus::Canceled,
            "refunded" => OrderStatus::Refunded,
            "partially_refunded" => OrderStatus::PartiallyRefunded,
            _ => OrderStatus::Unknown(s),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        OrderStatus::from(s.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Unknown(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
