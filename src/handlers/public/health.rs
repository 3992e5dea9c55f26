// handlers/public/health.rs - GET /healthz

use axum::Json;
use serde_json::{json, Value};

/// Liveness only. Pools are lazy, so this never touches a database.
pub async fn healthz() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
