use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Protected dashboard routes (require JWT authentication)
pub fn routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/dashboard/stats", get(handlers::get_stats))
        .with_state(service)
}
