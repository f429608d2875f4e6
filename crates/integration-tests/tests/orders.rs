//! Integration tests for order placement and lookup.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::{Value, json};

use mercato_api::models::{Order, Product};
use mercato_core::{OrderStatus, Price};
use mercato_integration_tests::TestContext;

async fn place(ctx: &TestContext, user_id: &str, items: Value) -> Order {
    let response = ctx
        .post_json("/orders", &json!({ "user_id": user_id, "items": items }))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.json()
}

// ============================================================================
// Placement
// ============================================================================

#[tokio::test]
async fn test_order_total_is_priced_from_catalog() {
    let ctx = TestContext::new();

    let response = ctx
        .post_json(
            "/orders",
            &json!({
                "user_id": "u1",
                "items": [{ "product_id": "1", "quantity": 2 }]
            }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["total"].as_f64(), Some(259.98));
    assert_eq!(body["status"], "pending");
    assert_eq!(body["user_id"], "u1");

    let order: Order = response.json();
    assert_eq!(order.total, Price::from_cents(25998));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].product_id.as_str(), "1");
    assert_eq!(order.items[0].quantity.get(), 2);
    assert_eq!(order.items[0].price, Price::from_cents(12999));
}

#[tokio::test]
async fn test_order_with_several_lines() {
    let ctx = TestContext::new();

    let order = place(
        &ctx,
        "u1",
        json!([
            { "product_id": "4", "quantity": 3 },
            { "product_id": "5", "quantity": 1 },
            { "product_id": "8", "quantity": 2 }
        ]),
    )
    .await;

    // 3 * 24.99 + 19.99 + 2 * 29.99
    assert_eq!(order.total, Price::from_cents(15494));
    let item_ids: Vec<_> = order.items.iter().map(|i| &i.id).collect();
    assert_ne!(item_ids[0], item_ids[1]);
    assert_ne!(item_ids[1], item_ids[2]);
}

#[tokio::test]
async fn test_order_for_unregistered_user_is_accepted() {
    let ctx = TestContext::new();

    let order = place(
        &ctx,
        "nobody-registered-this",
        json!([{ "product_id": "3", "quantity": 1 }]),
    )
    .await;

    assert_eq!(order.user_id.as_str(), "nobody-registered-this");
    assert!(ctx.state.accounts().is_empty().unwrap());
}

#[tokio::test]
async fn test_order_can_use_newly_created_product() {
    let ctx = TestContext::new();

    let product: Product = ctx
        .post_json(
            "/products",
            &json!({
                "name": "Linen Napkins",
                "description": "Set of four.",
                "price": 15.25,
                "image": "",
                "category": "Kitchen"
            }),
        )
        .await
        .json();

    let order = place(
        &ctx,
        "u1",
        json!([{ "product_id": product.id.as_str(), "quantity": 4 }]),
    )
    .await;
    assert_eq!(order.total, Price::from_cents(6100));
}

// ============================================================================
// Rejection
// ============================================================================

#[tokio::test]
async fn test_unknown_product_rejects_whole_order() {
    let ctx = TestContext::new();

    let response = ctx
        .post_json(
            "/orders",
            &json!({
                "user_id": "u1",
                "items": [
                    { "product_id": "1", "quantity": 1 },
                    { "product_id": "999", "quantity": 1 }
                ]
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "Product with id 999 not found");
    assert!(ctx.state.orders().is_empty().unwrap());

    let orders: Vec<Order> = ctx.get("/users/u1/orders").await.json();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_zero_quantity_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .post_json(
            "/orders",
            &json!({
                "user_id": "u1",
                "items": [{ "product_id": "1", "quantity": 0 }]
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(ctx.state.orders().is_empty().unwrap());
}

#[tokio::test]
async fn test_missing_user_id_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .post_json("/orders", &json!({ "items": [] }))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.detail().contains("user_id"));
}

#[tokio::test]
async fn test_empty_order_has_zero_total() {
    let ctx = TestContext::new();

    let order = place(&ctx, "u1", json!([])).await;

    assert!(order.items.is_empty());
    assert_eq!(order.total, Price::ZERO);
}

// ============================================================================
// Lookup
// ============================================================================

#[tokio::test]
async fn test_get_order_round_trip() {
    let ctx = TestContext::new();

    let placed = place(&ctx, "u1", json!([{ "product_id": "6", "quantity": 1 }])).await;

    let response = ctx.get(&format!("/orders/{}", placed.id)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<Order>(), placed);
}

#[tokio::test]
async fn test_get_missing_order_is_404() {
    let ctx = TestContext::new();

    let response = ctx.get("/orders/does-not-exist").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "Order not found");
}

#[tokio::test]
async fn test_list_orders_for_user_in_placement_order() {
    let ctx = TestContext::new();

    let first = place(&ctx, "u1", json!([{ "product_id": "1", "quantity": 1 }])).await;
    place(&ctx, "u2", json!([{ "product_id": "2", "quantity": 1 }])).await;
    let second = place(&ctx, "u1", json!([{ "product_id": "3", "quantity": 1 }])).await;
    let third = place(&ctx, "u1", json!([{ "product_id": "7", "quantity": 5 }])).await;

    let response = ctx.get("/users/u1/orders").await;
    assert_eq!(response.status, StatusCode::OK);

    let orders: Vec<Order> = response.json();
    assert_eq!(orders, [first, second, third]);
}

#[tokio::test]
async fn test_list_orders_for_user_without_orders_is_empty() {
    let ctx = TestContext::new();

    place(&ctx, "u1", json!([{ "product_id": "1", "quantity": 1 }])).await;

    let response = ctx.get("/users/someone-else/orders").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json::<Vec<Order>>().is_empty());
}
