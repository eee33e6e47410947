use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Service banner kept for clients of the original upload API.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Resume Processing API" }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "ranker-api"
    }))
}
