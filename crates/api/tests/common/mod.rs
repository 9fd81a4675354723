use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use vigil_api::config::ServerConfig;
use vigil_api::routes;
use vigil_api::state::AppState;
use vigil_core::threshold::ThresholdEvaluator;
use vigil_db::DbPool;
use vigil_notifier::dispatch::AlertDispatcher;
use vigil_pipeline::IngestPipeline;

/// Threshold used by every test pipeline (the production default).
pub const TEST_THRESHOLD: f64 = 30.0;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Create an in-memory SQLite pool with migrations applied.
///
/// A single connection keeps the in-memory database alive for the
/// whole test.
pub async fn setup_pool() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory pool");
    vigil_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Build the application with the log-only dispatcher.
pub fn build_test_app(pool: DbPool) -> Router {
    build_test_app_with_dispatcher(pool, AlertDispatcher::log_only())
}

/// Build the full application router with all middleware layers,
/// mirroring the construction in `main.rs`, with an injectable
/// dispatcher so tests can exercise delivery failure paths.
pub fn build_test_app_with_dispatcher(pool: DbPool, dispatcher: AlertDispatcher) -> Router {
    let config = test_config();
    let evaluator = ThresholdEvaluator::new(TEST_THRESHOLD);
    let pipeline = Arc::new(IngestPipeline::new(
        pool.clone(),
        evaluator,
        Arc::new(dispatcher),
    ));

    let state = AppState {
        pool,
        config: Arc::new(config),
        pipeline,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}
