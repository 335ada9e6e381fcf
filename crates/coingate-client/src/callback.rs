//! # CoinGate Callbacks
//!
//! Parsing of the form-encoded notifications CoinGate posts to an order's
//! `callback_url`. This is a parser, not a webhook server: hand it the raw
//! request body from whatever HTTP framework receives the callback.
//!
//! ```rust,ignore
//! // In your callback endpoint:
//! let data = client.process_callback(&body)?;
//! if data.token != expected_token {
//!     return Err(...);
//! }
//! if data.is_paid() {
//!     fulfil(&data.order_id);
//! }
//! ```

use crate::client::CoinGateClient;
use coingate_core::{CallbackData, CoinGateResult};
use tracing::{info, instrument};

impl CoinGateClient {
    /// Parse a callback body into [`CallbackData`].
    ///
    /// Fails only when the body is not a valid form. Individual fields that
    /// do not parse (`id`, `is_refundable`, `created_at`) are left at their
    /// zero value without an error.
    #[instrument(skip(self, body), fields(len = body.len()))]
    pub fn process_callback(&self, body: &[u8]) -> CoinGateResult<CallbackData> {
        let data = CallbackData::from_form(body)?;

        info!(
            "CoinGate callback: id={}, order_id={}, status={}",
            data.id, data.order_id, data.status
        );

        Ok(data)
    }
}
