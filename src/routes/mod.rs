use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::Config;
use crate::db::Store;
use crate::error::AppError;
use crate::services::step_service::StepService;
use crate::services::user_service::UserService;

pub mod steps;
pub mod users;

/// Per-process state: the optional store handle (absent when the database
/// settings are missing or the connection failed at startup) and the services
/// built over it. Handlers reach the services through the accessors, which
/// turn an absent store into a typed error.
pub struct AppState {
    store: Option<Arc<Store>>,
    steps: Option<StepService>,
    users: Option<UserService>,
    pub database_url_set: bool,
    pub database_name_set: bool,
}

impl AppState {
    pub fn new(store: Option<Arc<Store>>, config: &Config) -> Self {
        AppState {
            steps: store.clone().map(StepService::new),
            users: store.clone().map(UserService::new),
            database_url_set: config.database_url.is_some(),
            database_name_set: config.database_name.is_some(),
            store,
        }
    }

    pub fn steps(&self) -> Result<&StepService, AppError> {
        self.steps.as_ref().ok_or(AppError::StoreNotConfigured)
    }

    pub fn users(&self) -> Result<&UserService, AppError> {
        self.users.as_ref().ok_or(AppError::StoreNotConfigured)
    }

    pub fn store(&self) -> Option<&Store> {
        self.store.as_deref()
    }
}

#[derive(Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Serialize, ToSchema)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running")
    )
)]
pub async fn read_root() -> Json<Value> {
    Json(json!({ "message": "Step Tracker Backend is running" }))
}

/// Best-effort store introspection. Every failure is rendered into the
/// response body; this endpoint never fails the request itself.
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Diagnostics report", body = DiagnosticsResponse)
    )
)]
pub async fn test_database(State(state): State<Arc<AppState>>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "running".to_string(),
        database: "not available".to_string(),
        database_url: flag(state.database_url_set),
        database_name: flag(state.database_name_set),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    if let Some(store) = state.store() {
        response.connection_status = "connected".to_string();
        match store.collection_names().await {
            Ok(names) => {
                response.collections = names.into_iter().take(10).collect();
                response.database = "connected".to_string();
            }
            Err(e) => {
                response.database =
                    format!("connected but error: {}", truncate(&e.to_string(), 50));
            }
        }
    }

    Json(response)
}

fn flag(set: bool) -> String {
    let s = if set { "set" } else { "not set" };
    s.to_string()
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

pub fn init_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/test", get(test_database))
        .with_state(state.clone())
        .merge(steps::step_routes(state.clone()))
        .merge(users::user_routes(state))
}
