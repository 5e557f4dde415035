use crate::features::users::handlers;
use crate::features::users::services::UserService;
use axum::{
    routing::{get, patch},
    Router,
};
use std::sync::Arc;

/// Admin user routes, nested under /api/admin
pub fn admin_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/users", get(handlers::list_users))
        .route("/users/{id}", patch(handlers::update_user))
        .with_state(service)
}
