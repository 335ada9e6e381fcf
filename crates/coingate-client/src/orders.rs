//! # CoinGate Orders
//!
//! Order operations: create, checkout, fetch and list.
//! Each one shapes its request, delegates to the dispatcher and decodes
//! the JSON body into the matching record.

use crate::client::{decode, CoinGateClient};
use coingate_core::{
    CheckoutRequest, CheckoutResponse, CoinGateResult, CreateOrderRequest, ListOrdersRequest,
    Order, Orders,
};
use reqwest::Method;
use tracing::{info, instrument};

impl CoinGateClient {
    /// Create a new order.
    ///
    /// `POST /orders`
    #[instrument(skip(self, request), fields(order_id = %request.order_id))]
    pub async fn create_order(&self, request: CreateOrderRequest) -> CoinGateResult<Order> {
        let body = self.request(Method::POST, "/orders", Some(&request)).await?;
        let order: Order = decode(&body)?;

        info!(
            "Created CoinGate order: id={}, status={}, url={}",
            order.id, order.status, order.payment_url
        );

        Ok(order)
    }

    /// Fix the currency the shopper pays an existing order in.
    ///
    /// `POST /orders/{id}/checkout`
    #[instrument(skip(self, request), fields(pay_currency = %request.pay_currency))]
    pub async fn checkout(
        &self,
        order_id: i64,
        request: CheckoutRequest,
    ) -> CoinGateResult<CheckoutResponse> {
        let path = format!("/orders/{}/checkout", order_id);
        let body = self.request(Method::POST, &path, Some(&request)).await?;
        let checkout: CheckoutResponse = decode(&body)?;

        info!(
            "Checked out CoinGate order: id={}, pay_amount={} {}",
            checkout.id, checkout.pay_amount, checkout.pay_currency
        );

        Ok(checkout)
    }

    /// Fetch a single order.
    ///
    /// `GET /orders/{id}`
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: i64) -> CoinGateResult<Order> {
        let path = format!("/orders/{}", order_id);
        let body = self.request::<()>(Method::GET, &path, None).await?;
        decode(&body)
    }

    /// List orders, one page at a time.
    ///
    /// `GET /orders`. A page size of zero or less is sent as 10, a page of
    /// one or less as 1 and an empty sort as `created_at_desc`.
    #[instrument(skip(self, request))]
    pub async fn list_orders(&self, request: ListOrdersRequest) -> CoinGateResult<Orders> {
        let request = request.with_defaults();
        let body = self.request(Method::GET, "/orders", Some(&request)).await?;
        let orders: Orders = decode(&body)?;

        info!(
            "Listed CoinGate orders: page={}/{}, count={}",
            orders.current_page,
            orders.total_pages,
            orders.orders.len()
        );

        Ok(orders)
    }
}
