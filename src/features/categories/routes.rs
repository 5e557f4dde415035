use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;
use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

/// Public category routes (no authentication required)
pub fn public_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .route(
            "/api/categories/{id}/subcategories",
            get(handlers::list_subcategories),
        )
        .with_state(service)
}

/// Admin category routes, nested under /api/admin
pub fn admin_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/categories", post(handlers::create_category))
        .route("/categories/{id}", patch(handlers::update_category))
        .route(
            "/categories/{id}/subcategories",
            post(handlers::create_subcategory),
        )
        .route("/subcategories/{id}", patch(handlers::update_subcategory))
        .with_state(service)
}
