//! Order types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mercato_core::{OrderId, OrderItemId, OrderStatus, Price, ProductId, Quantity, UserId};

/// One requested line of a new order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemInput {
    pub product_id: ProductId,
    pub quantity: Quantity,
}

/// Request body for placing an order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderInput {
    /// Opaque customer reference; not checked against registered users.
    pub user_id: UserId,
    pub items: Vec<OrderItemInput>,
}

/// A stored order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub product_id: ProductId,
    pub quantity: Quantity,
    /// Unit price copied from the catalog when the order was placed.
    pub price: Price,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    /// Sum of `price * quantity` over all items, fixed at creation.
    pub total: Price,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}
