use axum::extract::State;
use axum::{Json, Router, routing};
use std::sync::Arc;

use crate::error::AppError;
use crate::models::user::User;
use crate::routes::{AppState, CreatedResponse};

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = User,
    responses(
        (status = 200, description = "User created", body = CreatedResponse),
        (status = 422, description = "Invalid payload"),
        (status = 500, description = "Database not configured")
    )
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(user): Json<User>,
) -> Result<Json<CreatedResponse>, AppError> {
    user.validate()?;
    let id = state.users()?.create(user).await?;
    Ok(Json(CreatedResponse { id }))
}

pub fn user_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/users", routing::post(create_user))
        .with_state(state)
}
