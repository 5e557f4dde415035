use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::tickets::dtos::{
    AssignTicketDto, CreateTicketDto, TicketListParams, TicketResponseDto, UpdateTicketPriorityDto,
    UpdateTicketStatusDto,
};
use crate::features::tickets::services::TicketService;
use crate::shared::types::{ApiResponse, Meta};

/// List tickets visible to the current user
#[utoipa::path(
    get,
    path = "/api/tickets",
    params(TicketListParams),
    responses(
        (status = 200, description = "Role-scoped ticket list", body = ApiResponse<Vec<TicketResponseDto>>),
    ),
    security(("bearer_auth" = [])),
    tag = "tickets"
)]
pub async fn list_tickets(
    user: AuthenticatedUser,
    State(service): State<Arc<TicketService>>,
    Query(params): Query<TicketListParams>,
) -> Result<Json<ApiResponse<Vec<TicketResponseDto>>>> {
    let tickets = service.list(&user, &params).await?;
    let total = tickets.len() as i64;
    let tickets: Vec<TicketResponseDto> = tickets.into_iter().map(|t| t.into()).collect();

    Ok(Json(ApiResponse::success(
        Some(tickets),
        None,
        Some(Meta { total }),
    )))
}

/// Create a new ticket
#[utoipa::path(
    post,
    path = "/api/tickets",
    request_body = CreateTicketDto,
    responses(
        (status = 200, description = "Ticket created", body = ApiResponse<TicketResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category or subcategory not found")
    ),
    security(("bearer_auth" = [])),
    tag = "tickets"
)]
pub async fn create_ticket(
    user: AuthenticatedUser,
    State(service): State<Arc<TicketService>>,
    AppJson(dto): AppJson<CreateTicketDto>,
) -> Result<Json<ApiResponse<TicketResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ticket = service.create(&user, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(ticket.into()),
        Some("Ticket created".to_string()),
        None,
    )))
}

/// Get ticket by ID
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket found", body = ApiResponse<TicketResponseDto>),
        (status = 403, description = "Ticket belongs to another client"),
        (status = 404, description = "Ticket not found")
    ),
    security(("bearer_auth" = [])),
    tag = "tickets"
)]
pub async fn get_ticket(
    user: AuthenticatedUser,
    State(service): State<Arc<TicketService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TicketResponseDto>>> {
    let ticket = service.get_by_id(&user, id).await?;
    Ok(Json(ApiResponse::success(Some(ticket.into()), None, None)))
}

/// Get ticket by ticket number
#[utoipa::path(
    get,
    path = "/api/tickets/number/{ticket_number}",
    params(
        ("ticket_number" = String, Path, description = "Ticket number (e.g., TKT-2026-0000001)")
    ),
    responses(
        (status = 200, description = "Ticket found", body = ApiResponse<TicketResponseDto>),
        (status = 403, description = "Ticket belongs to another client"),
        (status = 404, description = "Ticket not found")
    ),
    security(("bearer_auth" = [])),
    tag = "tickets"
)]
pub async fn get_ticket_by_number(
    user: AuthenticatedUser,
    State(service): State<Arc<TicketService>>,
    Path(ticket_number): Path<String>,
) -> Result<Json<ApiResponse<TicketResponseDto>>> {
    let ticket = service.get_by_number(&user, &ticket_number).await?;
    Ok(Json(ApiResponse::success(Some(ticket.into()), None, None)))
}

/// Update a ticket's status (admin only)
#[utoipa::path(
    patch,
    path = "/api/tickets/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    request_body = UpdateTicketStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<TicketResponseDto>),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Ticket not found")
    ),
    security(("bearer_auth" = [])),
    tag = "tickets"
)]
pub async fn update_ticket_status(
    user: AuthenticatedUser,
    State(service): State<Arc<TicketService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateTicketStatusDto>,
) -> Result<Json<ApiResponse<TicketResponseDto>>> {
    let ticket = service.update_status(&user, id, dto.status).await?;
    Ok(Json(ApiResponse::success(Some(ticket.into()), None, None)))
}

/// Update a ticket's priority (admin only)
#[utoipa::path(
    patch,
    path = "/api/tickets/{id}/priority",
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    request_body = UpdateTicketPriorityDto,
    responses(
        (status = 200, description = "Priority updated", body = ApiResponse<TicketResponseDto>),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Ticket not found")
    ),
    security(("bearer_auth" = [])),
    tag = "tickets"
)]
pub async fn update_ticket_priority(
    user: AuthenticatedUser,
    State(service): State<Arc<TicketService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateTicketPriorityDto>,
) -> Result<Json<ApiResponse<TicketResponseDto>>> {
    let ticket = service.update_priority(&user, id, dto.priority).await?;
    Ok(Json(ApiResponse::success(Some(ticket.into()), None, None)))
}

/// Assign a ticket to an admin, or clear the assignment (admin only)
#[utoipa::path(
    patch,
    path = "/api/tickets/{id}/assign",
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    request_body = AssignTicketDto,
    responses(
        (status = 200, description = "Assignment updated", body = ApiResponse<TicketResponseDto>),
        (status = 400, description = "Assignee is not an active admin"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Ticket or assignee not found")
    ),
    security(("bearer_auth" = [])),
    tag = "tickets"
)]
pub async fn assign_ticket(
    user: AuthenticatedUser,
    State(service): State<Arc<TicketService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<AssignTicketDto>,
) -> Result<Json<ApiResponse<TicketResponseDto>>> {
    let ticket = service.assign(&user, id, dto.assigned_to).await?;
    Ok(Json(ApiResponse::success(Some(ticket.into()), None, None)))
}
