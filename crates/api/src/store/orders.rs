//! Order store: placed orders.

use std::sync::RwLock;

use chrono::Utc;
use tracing::{info, instrument};

use mercato_core::{OrderId, OrderItemId, OrderStatus, Price, UserId};

use super::{CatalogStore, StoreError, read_lock, write_lock};
use crate::models::{Order, OrderInput, OrderItem};

const STORE: &str = "order";

/// Placed orders, in placement order.
#[derive(Default)]
pub struct OrderStore {
    orders: RwLock<Vec<Order>>,
}

impl OrderStore {
    /// Create an empty order store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            orders: RwLock::new(Vec::new()),
        }
    }

    /// Place an order, pricing each line from `catalog`.
    ///
    /// Lines are resolved in request order against one consistent catalog
    /// view. Each line snapshots the product's current unit price. The order
    /// is stored only after every line resolves, so a failed request leaves
    /// the store untouched. `user_id` is not checked against registered
    /// accounts.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` naming the first unknown product ID.
    /// Returns `StoreError::Invalid` if the total overflows.
    #[instrument(skip(self, catalog, input), fields(user_id = %input.user_id, lines = input.items.len()))]
    pub fn create(&self, catalog: &CatalogStore, input: OrderInput) -> Result<Order, StoreError> {
        let mut total = Price::ZERO;
        let mut items = Vec::with_capacity(input.items.len());

        {
            let view = catalog.view()?;
            for line in input.items {
                let unit_price = view
                    .find(&line.product_id)
                    .map(|product| product.price)
                    .ok_or_else(|| {
                        StoreError::NotFound(format!(
                            "Product with id {} not found",
                            line.product_id
                        ))
                    })?;

                total = unit_price
                    .checked_mul_quantity(line.quantity)
                    .and_then(|subtotal| total.checked_add(subtotal))
                    .ok_or_else(|| StoreError::Invalid("Order total is too large".to_owned()))?;

                items.push(OrderItem {
                    id: OrderItemId::generate(),
                    product_id: line.product_id,
                    quantity: line.quantity,
                    price: unit_price,
                });
            }
        }

        let order = Order {
            id: OrderId::generate(),
            user_id: input.user_id,
            items,
            total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        write_lock(&self.orders, STORE)?.push(order.clone());

        info!(order_id = %order.id, total = %order.total, "Placed order");
        Ok(order)
    }

    /// Get an order by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no order has this ID.
    pub fn get(&self, id: &OrderId) -> Result<Order, StoreError> {
        read_lock(&self.orders, STORE)?
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("Order not found".to_owned()))
    }

    /// All orders placed for `user_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store lock is poisoned.
    pub fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, StoreError> {
        Ok(read_lock(&self.orders, STORE)?
            .iter()
            .filter(|o| &o.user_id == user_id)
            .cloned()
            .collect())
    }

    /// Number of stored orders.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(read_lock(&self.orders, STORE)?.len())
    }

    /// Whether no orders have been placed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
