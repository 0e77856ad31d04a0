use std::time::Duration;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        capture::capture,
        health::{healthz, livez},
        requests::list_requests,
    },
    state::AppState,
};

/// Prefix reserved for operator endpoints. Every other path is captured.
pub const OPERATOR_PREFIX: &str = "/_blackhole";

/// Create the application router with all routes and middleware.
///
/// The operator routes answer `GET` only. Other methods on those three paths
/// get `405 Method Not Allowed` and are not captured; any other path under
/// the prefix is captured like the rest.
///
/// Only the operator routes carry a timeout. Captures run until the storage
/// engine answers, so a slow write is never reported as failed after it
/// has been committed.
pub fn create_app(state: AppState) -> Router {
    let operator_routes = Router::new()
        .route("/requests", get(list_requests))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            OPERATOR_TIMEOUT,
        ));

    Router::new()
        .nest(OPERATOR_PREFIX, operator_routes)
        .fallback(capture)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

const OPERATOR_TIMEOUT: Duration = Duration::from_secs(10);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use blackhole_core::request::{CapturedRequest, RequestRecord};
    use blackhole_core::storage::{RequestRepository, Result, SchemaStatus, StoreError};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::handlers::capture::CAPTURE_ACK;
    use crate::storage::SqliteRepository;

    /// Store whose every operation fails with the given error.
    struct FailingRepository(StoreError);

    #[async_trait]
    impl RequestRepository for FailingRepository {
        async fn initialize(&self) -> Result<SchemaStatus> {
            Err(self.0.clone())
        }

        async fn append_record(&self, _request: &CapturedRequest) -> Result<Uuid> {
            Err(self.0.clone())
        }

        async fn list_records(&self) -> Result<Vec<RequestRecord>> {
            Err(self.0.clone())
        }

        async fn server_version(&self) -> Result<String> {
            Err(self.0.clone())
        }

        fn backend_name(&self) -> &'static str {
            "failing"
        }
    }

    /// SQLite store whose appends take longer than the operator timeout.
    struct SlowRepository {
        inner: SqliteRepository,
        delay: std::time::Duration,
        appended: AtomicBool,
    }

    #[async_trait]
    impl RequestRepository for SlowRepository {
        async fn initialize(&self) -> Result<SchemaStatus> {
            self.inner.initialize().await
        }

        async fn append_record(&self, request: &CapturedRequest) -> Result<Uuid> {
            tokio::time::sleep(self.delay).await;
            let id = self.inner.append_record(request).await?;
            self.appended.store(true, Ordering::SeqCst);
            Ok(id)
        }

        async fn list_records(&self) -> Result<Vec<RequestRecord>> {
            self.inner.list_records().await
        }

        async fn server_version(&self) -> Result<String> {
            self.inner.server_version().await
        }

        fn backend_name(&self) -> &'static str {
            "slow"
        }
    }

    async fn sqlite_state() -> AppState {
        let repo = SqliteRepository::open_in_memory().await.unwrap();
        repo.initialize().await.unwrap();
        AppState::new(Arc::new(repo))
    }

    fn failing_state(err: StoreError) -> AppState {
        AppState::new(Arc::new(FailingRepository(err)))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn list(app: Router) -> Vec<Value> {
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/_blackhole/requests")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_any_path_is_captured() {
        let app = create_app(sqlite_state().await);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/hooks/stripe?attempt=2&tag=a&tag=b")
                    .header("host", "hooks.example.com")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"type":"charge.succeeded"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, CAPTURE_ACK);

        let records = list(app).await;
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record["method"], "POST");
        assert_eq!(record["path"], "/hooks/stripe?attempt=2&tag=a&tag=b");
        assert_eq!(record["host"], "hooks.example.com");
        assert!(record["capturedAt"].is_string());
        assert!(Uuid::parse_str(record["id"].as_str().unwrap()).is_ok());

        let query: Value = serde_json::from_str(record["query"].as_str().unwrap()).unwrap();
        assert_eq!(query, json!({"attempt": "2", "tag": ["a", "b"]}));

        let headers: Value = serde_json::from_str(record["headers"].as_str().unwrap()).unwrap();
        assert_eq!(headers["content-type"], "application/json");

        let body: Value = serde_json::from_str(record["body"].as_str().unwrap()).unwrap();
        assert_eq!(body, json!(r#"{"type":"charge.succeeded"}"#));
    }

    #[tokio::test]
    async fn test_root_and_other_methods_are_captured() {
        let app = create_app(sqlite_state().await);

        for (method, uri) in [("GET", "/"), ("DELETE", "/things/1"), ("PATCH", "/_other")] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let records = list(app).await;
        let methods: Vec<&str> = records.iter().map(|r| r["method"].as_str().unwrap()).collect();
        assert_eq!(methods, vec!["GET", "DELETE", "PATCH"]);
    }

    #[tokio::test]
    async fn test_list_is_empty_on_fresh_store() {
        let app = create_app(sqlite_state().await);
        assert!(list(app).await.is_empty());
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(failing_state(StoreError::ConnectionFailed("down".into())));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/_blackhole/livez")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_reports_backend() {
        let app = create_app(sqlite_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/_blackhole/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["backend"], "sqlite");
        assert!(json["version"].is_string());
    }

    #[tokio::test]
    async fn test_healthz_unavailable_when_store_fails() {
        let app = create_app(failing_state(StoreError::ConnectionFailed("down".into())));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/_blackhole/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_capture_write_failure_is_generic_500() {
        let app = create_app(failing_state(StoreError::WriteFailed(
            "no such table: requests".into(),
        )));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/hooks")
                    .body(Body::from("payload"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body_text(response).await.contains("no such table"));
    }

    #[tokio::test]
    async fn test_capture_connection_failure_is_503() {
        let app = create_app(failing_state(StoreError::ConnectionFailed("refused".into())));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_list_read_failure_is_500() {
        let app = create_app(failing_state(StoreError::ReadFailed("boom".into())));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/_blackhole/requests")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_store_still_acknowledges_capture() {
        let inner = SqliteRepository::open_in_memory().await.unwrap();
        inner.initialize().await.unwrap();
        let repo = Arc::new(SlowRepository {
            inner,
            delay: OPERATOR_TIMEOUT + std::time::Duration::from_secs(1),
            appended: AtomicBool::new(false),
        });
        let app = create_app(AppState::new(repo.clone()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/hook")
                    .body(Body::from("slow"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(repo.appended.load(Ordering::SeqCst));
        assert_eq!(repo.list_records().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_operator_paths_reject_other_methods_without_capturing() {
        let app = create_app(sqlite_state().await);

        for path in ["/_blackhole/requests", "/_blackhole/livez", "/_blackhole/healthz"] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri(path)
                        .body(Body::from("payload"))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        }

        assert!(list(app).await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_path_under_operator_prefix_is_captured() {
        let app = create_app(sqlite_state().await);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/_blackhole/other")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let records = list(app).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["path"], "/_blackhole/other");
    }

    #[tokio::test]
    async fn test_large_body_is_not_rejected() {
        let app = create_app(sqlite_state().await);
        let payload = "x".repeat(4 * 1024 * 1024);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/upload")
                    .body(Body::from(payload.clone()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let records = list(app).await;
        let body: Value = serde_json::from_str(records[0]["body"].as_str().unwrap()).unwrap();
        assert_eq!(body.as_str().unwrap().len(), payload.len());
    }
}
