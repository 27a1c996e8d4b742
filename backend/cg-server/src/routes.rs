use crate::api::fallback;
use crate::{AppState, USERS_PATH, create_user, delete_user, get_user, health, list_users};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let user_path = format!("{}/{{id}}", USERS_PATH);

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Users resource
        .route(USERS_PATH, get(list_users).post(create_user))
        .route(&user_path, get(get_user).delete(delete_user))
        // Unroutable requests still get a JSON error body
        .fallback(fallback::route_not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
