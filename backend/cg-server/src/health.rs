use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let store = match state.users.all().await {
        Ok(_) => "operational",
        Err(e) => {
            log::warn!("Health check: users store unavailable: {}", e);
            "unavailable"
        }
    };

    let health = json!({
        "status": if store == "operational" { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "users_store": store,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can the users store answer?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match state.users.all().await {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
        }
    }
}
