use super::AppState;
use crate::error::SubmitError;
use crate::models::service_catalog;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use std::env;

/// Cap on error detail length in write-path responses.
const ERROR_DETAIL_MAX: usize = 200;

/// Cap on error detail length in the diagnostic endpoint.
const DIAGNOSTIC_ERROR_MAX: usize = 50;

/// At most this many collection names are reported by `/test`.
const MAX_LISTED_COLLECTIONS: usize = 10;

/// `GET /` - static greeting.
pub(crate) async fn read_root() -> Json<Value> {
    Json(json!({"message": "Hello from the Nieuwe Vloer backend!"}))
}

/// `GET /api/hello` - static greeting.
pub(crate) async fn api_hello() -> Json<Value> {
    Json(json!({"message": "Hello from the backend API!"}))
}

/// `GET /services` - static ordered service catalog.
pub(crate) async fn get_services() -> Json<Value> {
    Json(json!(service_catalog()))
}

/// `GET /test` - backend liveness and best-effort store connectivity.
///
/// Every failure in this path is rendered as a descriptive string; the
/// endpoint always answers 200. Observability only, never correctness.
pub(crate) async fn test_database(State(state): State<AppState>) -> Json<Value> {
    let mut response = json!({
        "backend": "✅ Running",
        "database": "❌ Not Available",
        "database_url": Value::Null,
        "database_name": Value::Null,
        "connection_status": "Not Connected",
        "collections": [],
    });

    if let Some(store) = &state.store {
        response["database"] = json!("✅ Available");
        response["connection_status"] = json!("Connected");

        match store.list_collections().await {
            Ok(collections) => {
                let listed: Vec<&String> =
                    collections.iter().take(MAX_LISTED_COLLECTIONS).collect();
                response["collections"] = json!(listed);
                response["database"] = json!("✅ Connected & Working");
            }
            Err(e) => {
                response["database"] = json!(format!(
                    "⚠️  Connected but Error: {}",
                    truncated(&e.to_string(), DIAGNOSTIC_ERROR_MAX)
                ));
            }
        }
    }

    // The env flags win over whatever the probe wrote above.
    response["database_url"] = json!(env_flag("DATABASE_URL"));
    response["database_name"] = json!(env_flag("DATABASE_NAME"));

    Json(response)
}

/// `POST /contact` - validate and persist one contact submission.
pub(crate) async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Response {
    match state.service.submit(payload).await {
        Ok(id) => Json(json!({"status": "ok", "id": id})).into_response(),
        Err(SubmitError::Validation(e)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": e.to_string()})),
        )
            .into_response(),
        Err(SubmitError::Persistence(e)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": truncated(&e.to_string(), ERROR_DETAIL_MAX)})),
        )
            .into_response(),
    }
}

fn env_flag(name: &str) -> &'static str {
    let set = env::var(name).map(|v| !v.is_empty()).unwrap_or(false);
    if set {
        "✅ Set"
    } else {
        "❌ Not Set"
    }
}

fn truncated(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
