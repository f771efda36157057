use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};

/// Liveness probe for the hosting environment.
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "fitplan",
        })),
    )
}
