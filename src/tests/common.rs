use axum::Router;
use axum::body::Body;
use axum::http::{self, Request};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::routes::{AppState, init_routes};

pub struct TestContext {
    pub app: Router,
    pub store: Arc<Store>,
}

/// Builds an app backed by the MongoDB at MONGODB_TEST_URI, using a database
/// named after the test so concurrent tests do not clobber each other. The
/// collections the app touches are dropped first. Returns None (the caller
/// skips the test) when the variable is not set.
pub async fn setup(test_db: &str) -> Option<TestContext> {
    dotenv::dotenv().ok();

    let Ok(uri) = std::env::var("MONGODB_TEST_URI") else {
        eprintln!("MONGODB_TEST_URI not set, skipping store-backed test");
        return None;
    };

    let db_name = format!("step_tracker_{test_db}");
    let store = Arc::new(
        Store::connect(&uri, &db_name)
            .await
            .expect("failed to connect to test MongoDB"),
    );

    for collection in ["steplog", "user"] {
        store
            .drop_collection(collection)
            .await
            .unwrap_or_else(|e| panic!("failed to drop collection {collection}: {e}"));
    }

    let config = Config {
        database_url: Some(uri),
        database_name: Some(db_name),
        port: 8001,
    };
    let state = Arc::new(AppState::new(Some(store.clone()), &config));

    Some(TestContext {
        app: init_routes(state),
        store,
    })
}

/// App with no store handle, as when the database settings are missing.
pub fn app_without_store() -> Router {
    let config = Config {
        database_url: None,
        database_name: None,
        port: 8001,
    };
    init_routes(Arc::new(AppState::new(None, &config)))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, json: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

pub async fn response_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
