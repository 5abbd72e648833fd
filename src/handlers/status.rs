//! Liveness.

use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// Handler for `GET /`
pub(crate) async fn status() -> Json<Value> {
    Json(json!({
        "message": "Server is running smoothly",
        "timestamp": Utc::now(),
    }))
}
