//! HTTP server assembly.
//!
//! Builds the axum router over the shared application state and serves it.
//! The handlers are thin transport adapters: all write-path logic lives in
//! the service layer.

mod handlers;

use crate::services::ContactService;
use crate::store::DocumentStore;
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::{from_fn, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared state handed to every handler.
///
/// The store handle is `None` when no connection string was configured; the
/// server still serves the read-only endpoints in that case.
#[derive(Clone)]
pub struct AppState {
    /// Contact submission service
    pub service: Arc<dyn ContactService>,

    /// Document store gateway, if configured
    pub store: Option<Arc<dyn DocumentStore>>,
}

impl AppState {
    /// Create application state over a contact service and optional store.
    pub fn new(service: Arc<dyn ContactService>, store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self { service, store }
    }
}

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::read_root))
        .route("/api/hello", get(handlers::api_hello))
        .route("/test", get(handlers::test_database))
        .route("/services", get(handlers::get_services))
        .route("/contact", post(handlers::submit_contact))
        .layer(from_fn(cors_middleware))
        .with_state(state)
}

/// Serve the router on the given listener until the task is cancelled.
pub async fn run_server(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, build_router(state)).await
}

// The website is served from a different origin than this API, so every
// response is stamped with permissive CORS headers and preflights are
// answered directly.
async fn cors_middleware(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(req).await;
    apply_cors_headers(response.headers_mut());
    response
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
    headers.insert("access-control-allow-methods", HeaderValue::from_static("*"));
    headers.insert("access-control-allow-headers", HeaderValue::from_static("*"));
}
