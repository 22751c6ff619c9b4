use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::db::Store;
use crate::routes::{AppState, init_routes};

mod config;
mod db;
mod error;
mod models;
mod routes;
mod services;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::read_root,
        routes::test_database,
        routes::steps::add_steps,
        routes::steps::list_steps,
        routes::steps::leaderboard,
        routes::users::create_user,
    ),
    components(
        schemas(
            models::step_log::StepLog,
            models::step_log::StepEntryOut,
            models::step_log::LeaderboardRow,
            models::user::User,
            routes::CreatedResponse,
            routes::DiagnosticsResponse,
        )
    )
)]
struct ApiDoc;

/// Builds the store handle once at startup. Missing settings or a failed
/// connection leave it absent; the server still runs and data endpoints
/// report the store as not configured.
async fn init_store(config: &Config) -> Option<Arc<Store>> {
    let (Some(uri), Some(name)) = (&config.database_url, &config.database_name) else {
        warn!("DATABASE_URL or DATABASE_NAME not set, starting without a store");
        return None;
    };

    match Store::connect(uri, name).await {
        Ok(store) => {
            info!(database = store.name(), "connected to MongoDB");
            Some(Arc::new(store))
        }
        Err(e) => {
            warn!("failed to connect to MongoDB: {e}");
            None
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let store = init_store(&config).await;
    let state = Arc::new(AppState::new(store, &config));

    let app = Router::new()
        .merge(init_routes(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind port");
    axum::serve(listener, app).await.expect("server error");
}

#[cfg(test)]
mod tests;
