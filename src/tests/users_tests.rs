#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    use super::super::common::{app_without_store, post_json, response_json, setup};

    #[tokio::test]
    async fn test_create_user_returns_id() {
        let Some(ctx) = setup("users_create").await else {
            return;
        };

        let body = json!({ "username": "alice", "email": "alice@example.com" });
        let response = ctx
            .app
            .clone()
            .oneshot(post_json("/api/users", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let created = response_json(response).await;
        let id = created["id"].as_str().expect("id must be a string");
        assert!(!id.is_empty());

        let response = ctx
            .app
            .clone()
            .oneshot(post_json("/api/users", &json!({ "username": "bob" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let second = response_json(response).await;
        assert_ne!(second["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_rejects_empty_username() {
        let app = app_without_store();
        let response = app
            .oneshot(post_json("/api/users", &json!({ "username": "" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let detail = response_json(response).await;
        assert_eq!(detail["detail"], "username must not be empty");
    }

    #[tokio::test]
    async fn test_create_user_requires_store() {
        let app = app_without_store();
        let response = app
            .oneshot(post_json("/api/users", &json!({ "username": "alice" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let detail = response_json(response).await;
        assert_eq!(detail["detail"], "Database not configured");
    }
}
