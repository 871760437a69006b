//! API router configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the main router.
///
/// - `/`, `/agents` → page shell
/// - `/health`      → health-check probe
/// - `/api/...`     → JSON API
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/agents", get(handlers::list_agents))
        .route(
            "/agents/{uuid}",
            get(handlers::get_agent).patch(handlers::update_agent),
        )
        .route(
            "/admin/maintenance_mode/info",
            get(handlers::maintenance_mode_info),
        )
        .route(
            "/admin/maintenance_mode/enable",
            post(handlers::enable_maintenance_mode),
        )
        .route(
            "/admin/maintenance_mode/disable",
            post(handlers::disable_maintenance_mode),
        );

    Router::new()
        .route("/", get(handlers::agents_page))
        .route("/agents", get(handlers::agents_page))
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
