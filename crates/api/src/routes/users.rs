//! User route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::models::{User, UserInput};
use crate::state::AppState;

/// Register a user. The response never includes the password.
///
/// Password hashing is CPU-bound, so registration runs on the blocking pool.
#[instrument(skip(state, input), fields(email = %input.email))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<UserInput>,
) -> Result<Json<User>> {
    let user = tokio::task::spawn_blocking(move || state.accounts().create(input))
        .await
        .map_err(|e| AppError::Internal(format!("registration task failed: {e}")))??;

    Ok(Json(user))
}
