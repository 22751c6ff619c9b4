use axum::extract::{Query, State};
use axum::{Json, Router, routing};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::error::AppError;
use crate::models::step_log::{LeaderboardRow, StepEntryOut, StepLog};
use crate::routes::{AppState, CreatedResponse};

fn default_list_limit() -> i64 {
    50
}

fn default_leaderboard_limit() -> i64 {
    10
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListStepsParams {
    pub user: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_list_limit")]
    pub limit: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_leaderboard_limit")]
    pub limit: i64,
}

#[utoipa::path(
    post,
    path = "/api/steps",
    request_body = StepLog,
    responses(
        (status = 200, description = "Step log created", body = CreatedResponse),
        (status = 422, description = "Invalid payload"),
        (status = 500, description = "Database not configured")
    )
)]
pub async fn add_steps(
    State(state): State<Arc<AppState>>,
    Json(log): Json<StepLog>,
) -> Result<Json<CreatedResponse>, AppError> {
    log.validate()?;
    let id = state.steps()?.create(log).await?;
    Ok(Json(CreatedResponse { id }))
}

#[utoipa::path(
    get,
    path = "/api/steps",
    params(ListStepsParams),
    responses(
        (status = 200, description = "Matching step logs", body = [StepEntryOut]),
        (status = 500, description = "Database not configured")
    )
)]
pub async fn list_steps(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListStepsParams>,
) -> Result<Json<Vec<StepEntryOut>>, AppError> {
    // An empty user parameter means no user filter.
    let user = params.user.as_deref().filter(|u| !u.is_empty());
    let entries = state
        .steps()?
        .list(user, params.start_date, params.end_date, params.limit)
        .await?;
    Ok(Json(entries))
}

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    params(LeaderboardParams),
    responses(
        (status = 200, description = "Total steps per user, descending", body = [LeaderboardRow]),
        (status = 500, description = "Database not configured")
    )
)]
pub async fn leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardParams>,
) -> Result<Json<Vec<LeaderboardRow>>, AppError> {
    let rows = state
        .steps()?
        .leaderboard(params.start_date, params.end_date, params.limit)
        .await?;
    Ok(Json(rows))
}

pub fn step_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/steps", routing::post(add_steps).get(list_steps))
        .route("/api/leaderboard", routing::get(leaderboard))
        .with_state(state)
}
