//! Order operations against a stubbed CoinGate API.

use coingate_client::{
    CheckoutRequest, ClientOption, CoinGateClient, CoinGateError, CreateOrderRequest,
    ListOrdersRequest, Order, OrderStatus,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-app-token";

async fn setup() -> (MockServer, CoinGateClient) {
    let server = MockServer::start().await;
    let client = CoinGateClient::with_options(
        1,
        TOKEN,
        [ClientOption::ApiBaseUrl(format!("{}/v2", server.uri()))],
    )
    .unwrap();
    (server, client)
}

fn order_body(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "status": status,
        "title": "test order",
        "do_not_convert": false,
        "price_currency": "USD",
        "price_amount": "100.01",
        "pay_currency": null,
        "pay_amount": null,
        "lightning_network": false,
        "receive_currency": "BTC",
        "receive_amount": "",
        "created_at": "2024-05-01T10:00:00+00:00",
        "expire_at": "2024-05-01T10:20:00+00:00",
        "paid_at": null,
        "payment_address": null,
        "order_id": "abc123",
        "payment_url": "https://pay-sandbox.coingate.com/invoice/7294cf0a",
        "underpaid_amount": "0",
        "overpaid_amount": "0",
        "is_refundable": false,
        "refunds": [],
        "voids": [],
        "fees": []
    })
}

#[tokio::test]
async fn test_create_order_end_to_end() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v2/orders"))
        .and(header("authorization", "Bearer test-app-token"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "order_id=abc123&price_amount=100.01&price_currency=USD&receive_currency=BTC",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body(58739, "new")))
        .expect(1)
        .mount(&server)
        .await;

    let order = client
        .create_order(CreateOrderRequest::new("abc123", "100.01", "USD", "BTC"))
        .await
        .unwrap();

    assert_eq!(order.id, 58739);
    assert_eq!(order.status, OrderStatus::New);
    assert_eq!(order.order_id, "abc123");
    assert_eq!(order.price_amount, "100.01");
    assert_eq!(order.pay_currency, "");
    assert!(order.paid_at.is_none());
}

#[tokio::test]
async fn test_create_order_sends_optional_fields_as_form() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v2/orders"))
        .and(body_string(
            "order_id=abc123&price_amount=100.01&price_currency=USD&receive_currency=BTC\
             &title=test+order&callback_url=https%3A%2F%2Fexample.com%2Fcb",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body(1, "new")))
        .expect(1)
        .mount(&server)
        .await;

    client
        .create_order(
            CreateOrderRequest::new("abc123", "100.01", "USD", "BTC")
                .with_title("test order")
                .with_callback_url("https://example.com/cb"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_checkout_posts_form_to_order_path() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v2/orders/58743/checkout"))
        .and(header("authorization", "Bearer test-app-token"))
        .and(body_string("pay_currency=BTC&lightning_network=true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 58743,
            "status": "pending",
            "price_currency": "USD",
            "price_amount": "100.01",
            "pay_currency": "BTC",
            "pay_amount": "0.00163",
            "lightning_network": true,
            "payment_address": "lnbc16300n1p",
            "platform": { "id": 12, "title": "Lightning Network", "id_name": "lightning" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CheckoutRequest {
        lightning_network: Some(true),
        ..CheckoutRequest::new("BTC")
    };
    let checkout = client.checkout(58743, request).await.unwrap();

    assert_eq!(checkout.id, 58743);
    assert_eq!(checkout.status, OrderStatus::Pending);
    assert_eq!(checkout.pay_amount, "0.00163");
    assert_eq!(checkout.platform.id_name, "lightning");
}

#[tokio::test]
async fn test_get_order_sends_no_payload() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/orders/58739"))
        .and(header("authorization", "Bearer test-app-token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body(58739, "paid")))
        .expect(1)
        .mount(&server)
        .await;

    let order = client.get_order(58739).await.unwrap();
    assert_eq!(order.status, OrderStatus::Paid);

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].url.query().is_none());
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn test_list_orders_applies_defaults() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/orders"))
        .and(query_param("per_page", "10"))
        .and(query_param("page", "1"))
        .and(query_param("sort", "created_at_desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_page": 1,
            "per_page": 10,
            "total_orders": 1,
            "total_pages": 1,
            "orders": [order_body(58739, "expired")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let orders = client
        .list_orders(ListOrdersRequest::default())
        .await
        .unwrap();

    assert_eq!(orders.orders.len(), 1);
    assert_eq!(orders.orders[0].status, OrderStatus::Expired);
    assert!(!orders.has_next_page());

    let received = server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn test_list_orders_passes_explicit_values() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/orders"))
        .and(query_param("per_page", "25"))
        .and(query_param("page", "3"))
        .and(query_param("sort", "id_asc"))
        .and(query_param("created_at[from]", "2024-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_page": 3,
            "per_page": 25,
            "total_orders": 80,
            "total_pages": 4,
            "orders": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ListOrdersRequest {
        per_page: 25,
        page: 3,
        sort: "id_asc".to_string(),
        created_from: Some("2024-01-01".to_string()),
        created_to: None,
    };
    let orders = client.list_orders(request).await.unwrap();

    assert_eq!(orders.current_page, 3);
    assert!(orders.has_next_page());
}

#[tokio::test]
async fn test_non_200_becomes_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/orders/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "message": "Not found",
            "reason": "not_found"
        })))
        .mount(&server)
        .await;

    let err = client.get_order(404).await.unwrap_err();
    match &err {
        CoinGateError::Api {
            status,
            reason,
            message,
        } => {
            assert_eq!(*status, 404);
            assert_eq!(reason, "not_found");
            assert_eq!(message, "Not found");
        }
        other => panic!("expected API error, got {:?}", other),
    }

    let text = err.to_string();
    assert!(text.contains("404"));
    assert!(text.contains("not_found"));
    assert!(text.contains("Not found"));

    // The zero-value record callers fall back to
    let order = client.get_order(404).await.unwrap_or_default();
    assert_eq!(order, Order::default());
}

#[tokio::test]
async fn test_non_200_with_unparsable_body_keeps_status() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v2/orders"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client
        .create_order(CreateOrderRequest::new("abc123", "1", "USD", "BTC"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(502));
    assert!(err.is_retryable());
    assert!(matches!(
        err,
        CoinGateError::Api { ref reason, ref message, .. } if reason.is_empty() && message.is_empty()
    ));
}

#[tokio::test]
async fn test_non_200_success_status_is_still_an_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v2/orders"))
        .respond_with(ResponseTemplate::new(201).set_body_json(order_body(1, "new")))
        .mount(&server)
        .await;

    let err = client
        .create_order(CreateOrderRequest::new("abc123", "1", "USD", "BTC"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(201));
}

#[tokio::test]
async fn test_malformed_200_body_is_serialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/orders/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\": \"one\""))
        .mount(&server)
        .await;

    let err = client.get_order(1).await.unwrap_err();
    assert!(matches!(err, CoinGateError::Serialization(_)));
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;
    let client = CoinGateClient::with_options(
        1,
        TOKEN,
        [
            ClientOption::ApiBaseUrl(server.uri()),
            ClientOption::Timeout(Duration::from_millis(100)),
        ],
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/orders/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(order_body(1, "new"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client.get_order(1).await.unwrap_err();
    assert!(matches!(err, CoinGateError::Network(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Grab a free port, then close the listener so nothing is listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = CoinGateClient::with_options(
        1,
        TOKEN,
        [ClientOption::ApiBaseUrl(format!("http://127.0.0.1:{}/v2", port))],
    )
    .unwrap();

    let err = client.get_order(1).await.unwrap_err();
    assert!(matches!(err, CoinGateError::Network(_)));
}

#[tokio::test]
async fn test_client_is_shareable_across_tasks() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/orders/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body(7, "confirming")))
        .expect(4)
        .mount(&server)
        .await;

    let client = std::sync::Arc::new(client);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get_order(7).await })
        })
        .collect();

    for handle in handles {
        let order = handle.await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Confirming);
    }
}
