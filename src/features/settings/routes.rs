use crate::features::settings::handlers;
use crate::features::settings::services::SettingsService;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Admin settings routes, nested under /api/admin
pub fn admin_routes(service: Arc<SettingsService>) -> Router {
    Router::new()
        .route(
            "/settings",
            get(handlers::get_settings).put(handlers::update_settings),
        )
        .with_state(service)
}
