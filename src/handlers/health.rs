use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::app::AppState;

/// GET /health - liveness plus the current record count
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "coasters": state.coasters.len(),
        "timestamp": chrono::Utc::now(),
    }))
}
