#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use sqlx::PgPool;
use tower::ServiceExt;

use grocery_api::config::{LogFormat, ServerConfig};
use grocery_api::router::build_app_router;
use grocery_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router, with all middleware, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a POST request with a raw body.
pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    post_raw(app, uri, serde_json::to_vec(&json).unwrap()).await
}

/// Call a procedure over POST.
pub async fn call(app: Router, procedure: &str, input: serde_json::Value) -> Response {
    post_json(app, &format!("/rpc/{procedure}"), input).await
}

/// Call a query procedure over GET, URL-encoding `input` into the query string.
pub async fn query(app: Router, procedure: &str, input: Option<serde_json::Value>) -> Response {
    let uri = match input {
        Some(input) => {
            let input = input.to_string();
            let encoded = utf8_percent_encode(&input, NON_ALPHANUMERIC);
            format!("/rpc/{procedure}?input={encoded}")
        }
        None => format!("/rpc/{procedure}"),
    };
    get(app, &uri).await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
