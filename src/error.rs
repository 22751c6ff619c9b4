use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database not configured")]
    StoreNotConfigured,

    #[error("{0}")]
    Validation(String),

    #[error("database error: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("malformed document: {0}")]
    Document(#[from] bson::de::Error),

    #[error("store returned a non-ObjectId document id")]
    UnexpectedId,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::StoreNotConfigured
            | AppError::Store(_)
            | AppError::Document(_)
            | AppError::UnexpectedId => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
