//! # Callback Parsing
//!
//! CoinGate notifies the merchant's `callback_url` of order state changes
//! with a form-encoded POST. This module turns that body into a
//! [`CallbackData`].
//!
//! Parsing is lenient per field: an `id` that is not an integer, an
//! `is_refundable` that is not a boolean or a `created_at` that does not
//! match `YYYY-MM-DDTHH:MM:SS±HH:MM` is left at its zero value rather than
//! failing the whole callback. Only a body that is not a valid form at all
//! is rejected. Callers must not treat a zero `id` or a missing
//! `created_at` as proof that the field was absent.
//!
//! No signature or token verification is performed here; compare
//! [`CallbackData::token`] against the token sent at order creation.

use crate::error::{CoinGateError, CoinGateResult};
use crate::status::OrderStatus;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Timestamp layout CoinGate uses in callbacks
const CALLBACK_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// A parsed order callback
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallbackData {
    /// CoinGate order ID, 0 if missing or not an integer
    pub id: i64,
    pub order_id: String,
    pub status: OrderStatus,
    pub price_amount: String,
    pub price_currency: String,
    pub receive_currency: String,
    pub receive_amount: String,
    pub pay_amount: String,
    pub pay_currency: String,
    pub underpaid_amount: String,
    pub overpaid_amount: String,
    /// False if missing or not a recognised boolean
    pub is_refundable: bool,
    /// None if missing or not in the callback timestamp layout
    pub created_at: Option<DateTime<FixedOffset>>,
    pub token: String,
}

impl CallbackData {
    /// Parse a form-encoded callback body.
    ///
    /// Fails only when the body is not a valid form (a malformed percent
    /// escape or a `;` separator). Invalid UTF-8 is decoded lossily. When a
    /// key repeats, the first value wins.
    pub fn from_form(body: &[u8]) -> CoinGateResult<Self> {
        validate_form(body)?;

        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(body)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let get = |key: &str| -> String {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        };

        let id = get("id");
        let is_refundable = get("is_refundable");
        let created_at = get("created_at");

        Ok(Self {
            id: id.parse().unwrap_or_else(|_| {
                debug!(value = %id, "callback id is not an integer, using 0");
                0
            }),
            order_id: get("order_id"),
            status: OrderStatus::from(get("status")),
            price_amount: get("price_amount"),
            price_currency: get("price_currency"),
            receive_currency: get("receive_currency"),
            receive_amount: get("receive_amount"),
            pay_amount: get("pay_amount"),
            pay_currency: get("pay_currency"),
            underpaid_amount: get("underpaid_amount"),
            overpaid_amount: get("overpaid_amount"),
            is_refundable: parse_bool(&is_refundable).unwrap_or_else(|| {
                debug!(value = %is_refundable, "callback is_refundable is not a boolean, using false");
                false
            }),
            created_at: parse_timestamp(&created_at),
            token: get("token"),
        })
    }

    /// Check if the notified status means the order is paid
    pub fn is_paid(&self) -> bool {
        self.status.is_paid()
    }
}

/// Parse `YYYY-MM-DDTHH:MM:SS±HH:MM`. The offset must carry its colon;
/// chrono's `%:z` alone would also take `+0000`.
fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let bytes = s.as_bytes();
    let offset_ok = bytes.len() >= 6
        && matches!(bytes[bytes.len() - 6], b'+' | b'-')
        && bytes[bytes.len() - 3] == b':';
    if !offset_ok {
        debug!(value = %s, "callback created_at has no ±HH:MM offset");
        return None;
    }

    DateTime::parse_from_str(s, CALLBACK_TIME_FORMAT)
        .map_err(|e| debug!(value = %s, error = %e, "callback created_at unparsable"))
        .ok()
}

/// Accepts the same spellings as the gateway's own form encoder emits:
/// `1 t T TRUE true True` and `0 f F FALSE false False`.
fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn validate_form(body: &[u8]) -> CoinGateResult<()> {
    let mut i = 0;
    while i < body.len() {
        match body[i] {
            b'%' => {
                let valid = body.len() > i + 2
                    && body[i + 1].is_ascii_hexdigit()
                    && body[i + 2].is_ascii_hexdigit();
                if !valid {
                    let end = (i + 3).min(body.len());
                    return Err(CoinGateError::CallbackParse(format!(
                        "invalid URL escape {:?}",
                        String::from_utf8_lossy(&body[i..end])
                    )));
                }
                i += 3;
            }
            b';' => {
                return Err(CoinGateError::CallbackParse(
                    "invalid semicolon separator in form".to_string(),
                ));
            }
            _ => i += 1,
        }
    }
    Ok(())
}
