#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use tower::ServiceExt;

    use super::super::common::{app_without_store, get, response_json, setup};

    #[tokio::test]
    async fn test_root_reports_running() {
        let app = app_without_store();
        let response = app.oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["message"], "Step Tracker Backend is running");
    }

    #[tokio::test]
    async fn test_diagnostics_without_store() {
        let app = app_without_store();
        let response = app.oneshot(get("/test")).await.unwrap();

        // Diagnostics never fail, even with nothing configured.
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["backend"], "running");
        assert_eq!(body["database"], "not available");
        assert_eq!(body["database_url"], "not set");
        assert_eq!(body["database_name"], "not set");
        assert_eq!(body["connection_status"], "not connected");
        assert_eq!(body["collections"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_diagnostics_with_store() {
        let Some(ctx) = setup("diagnostics").await else {
            return;
        };

        let response = ctx.app.clone().oneshot(get("/test")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["backend"], "running");
        assert_eq!(body["database"], "connected");
        assert_eq!(body["database_url"], "set");
        assert_eq!(body["database_name"], "set");
        assert_eq!(body["connection_status"], "connected");
        assert!(body["collections"].as_array().unwrap().len() <= 10);
    }
}
