//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Welcome message
//! GET  /health                  - Liveness check
//!
//! # Products
//! GET  /products                - Product listing (?category=&search=)
//! POST /products                - Create product
//! GET  /products/{product_id}   - Product detail
//!
//! # Users
//! POST /users                   - Register user
//! GET  /users/{user_id}/orders  - Orders placed by a user
//!
//! # Orders
//! POST /orders                  - Place order
//! GET  /orders/{order_id}       - Order detail
//! ```

pub mod home;
pub mod orders;
pub mod products;
pub mod users;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::middleware::{request_id_middleware, trace_layer};
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/{product_id}", get(products::show))
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create))
        .route("/{user_id}/orders", get(orders::list_for_user))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create))
        .route("/{order_id}", get(orders::show))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::welcome))
        .route("/health", get(home::health))
        .nest("/products", product_routes())
        .nest("/users", user_routes())
        .nest("/orders", order_routes())
}

/// Build the complete application: routes, middleware, and state.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer())
        .with_state(state)
}
