//! Order route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use mercato_core::{OrderId, UserId};

use crate::error::Result;
use crate::extract::{ApiJson, ApiPath};
use crate::models::{Order, OrderInput};
use crate::state::AppState;

/// Place an order priced from the current catalog.
#[instrument(skip(state, input), fields(user_id = %input.user_id))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<OrderInput>,
) -> Result<Json<Order>> {
    Ok(Json(state.orders().create(state.catalog(), input)?))
}

/// Show a single order.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    ApiPath(order_id): ApiPath<String>,
) -> Result<Json<Order>> {
    Ok(Json(state.orders().get(&OrderId::from(order_id))?))
}

/// List every order placed for a user, oldest first.
#[instrument(skip(state))]
pub async fn list_for_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.orders().list_by_user(&UserId::from(user_id))?))
}
