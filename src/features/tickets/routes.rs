use crate::features::tickets::handlers;
use crate::features::tickets::services::TicketService;
use axum::{
    routing::{get, patch},
    Router,
};
use std::sync::Arc;

/// Protected ticket routes (require JWT authentication)
pub fn routes(service: Arc<TicketService>) -> Router {
    Router::new()
        .route(
            "/api/tickets",
            get(handlers::list_tickets).post(handlers::create_ticket),
        )
        .route("/api/tickets/{id}", get(handlers::get_ticket))
        .route(
            "/api/tickets/number/{ticket_number}",
            get(handlers::get_ticket_by_number),
        )
        .route(
            "/api/tickets/{id}/status",
            patch(handlers::update_ticket_status),
        )
        .route(
            "/api/tickets/{id}/priority",
            patch(handlers::update_ticket_priority),
        )
        .route("/api/tickets/{id}/assign", patch(handlers::assign_ticket))
        .with_state(service)
}
