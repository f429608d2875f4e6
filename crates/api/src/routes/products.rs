//! Product route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use mercato_core::ProductId;

use crate::error::Result;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::models::{Product, ProductFilter, ProductInput};
use crate::state::AppState;

/// List products, optionally filtered by `category` and `search`.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<ProductFilter>,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.catalog().list(&filter)?))
}

/// Show a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    ApiPath(product_id): ApiPath<String>,
) -> Result<Json<Product>> {
    Ok(Json(state.catalog().get(&ProductId::from(product_id))?))
}

/// Add a product to the catalog.
#[instrument(skip(state, input))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ProductInput>,
) -> Result<Json<Product>> {
    Ok(Json(state.catalog().create(input)?))
}
