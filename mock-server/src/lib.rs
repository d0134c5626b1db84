//! Fixture HTTP server emitting the response shapes the adapter's
//! validation policy distinguishes.
//!
//! Stateless by construction: every route returns a canned response, so the
//! server needs no storage and tests need no setup beyond binding a port.
//!
//! Routes:
//! - `GET /json` — 200, `application/json` body
//! - `GET /missing` — 404, `application/json` body
//! - `GET /page` — 200, `text/html` body
//! - `GET /plain` — 200, body with no content-type header
//! - `GET /empty` — 204, no body
//! - `POST /echo` — 200, `application/json`, echoes the request body

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub fn app() -> Router {
    Router::new()
        .route("/json", get(fixture_json))
        .route("/missing", get(fixture_missing))
        .route("/page", get(fixture_page))
        .route("/plain", get(fixture_plain))
        .route("/empty", get(fixture_empty))
        .route("/echo", post(echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn fixture_json() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn fixture_missing() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "no such resource" })),
    )
}

async fn fixture_page() -> Html<&'static str> {
    Html("<html><body>not an api</body></html>")
}

/// 200 with a body but no content-type header at all.
async fn fixture_plain() -> Response {
    let mut response = "no content type here".into_response();
    response.headers_mut().remove(header::CONTENT_TYPE);
    response
}

async fn fixture_empty() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn echo(body: Bytes) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}
