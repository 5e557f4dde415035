use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::tickets::models::{Ticket, TicketPriority, TicketStatus};
use crate::shared::validation::not_blank;

/// Request DTO for creating a ticket
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTicketDto {
    #[validate(custom(function = not_blank, message = "Title must not be blank"))]
    pub title: String,

    #[validate(custom(function = not_blank, message = "Description must not be blank"))]
    pub description: String,

    /// Defaults to `medium` when omitted
    #[serde(default)]
    pub priority: Option<TicketPriority>,

    pub category_id: Uuid,

    #[serde(default)]
    pub subcategory_id: Option<Uuid>,
}

/// Request DTO for updating a ticket's status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateTicketStatusDto {
    pub status: TicketStatus,
}

/// Request DTO for updating a ticket's priority
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateTicketPriorityDto {
    pub priority: TicketPriority,
}

/// Request DTO for assigning a ticket to an agent.
/// `null` clears the assignment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignTicketDto {
    pub assigned_to: Option<Uuid>,
}

/// Response DTO for ticket
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketResponseDto {
    pub id: Uuid,
    pub ticket_number: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub category_id: Uuid,
    pub subcategory_id: Option<Uuid>,
    pub client_id: Uuid,
    pub assigned_to: Option<Uuid>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ticket> for TicketResponseDto {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id,
            ticket_number: t.ticket_number,
            title: t.title,
            description: t.description,
            status: t.status,
            priority: t.priority,
            category_id: t.category_id,
            subcategory_id: t.subcategory_id,
            client_id: t.client_id,
            assigned_to: t.assigned_to,
            resolved_at: t.resolved_at,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Status filter accepted by the ticket list endpoint.
/// `all` disables the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    InProgress,
    Pending,
    Resolved,
    Closed,
}

impl StatusFilter {
    pub fn matches(&self, status: TicketStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Open => status == TicketStatus::Open,
            StatusFilter::InProgress => status == TicketStatus::InProgress,
            StatusFilter::Pending => status == TicketStatus::Pending,
            StatusFilter::Resolved => status == TicketStatus::Resolved,
            StatusFilter::Closed => status == TicketStatus::Closed,
        }
    }
}

/// Priority filter accepted by the ticket list endpoint.
/// `all` disables the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
    Urgent,
}

impl PriorityFilter {
    pub fn matches(&self, priority: TicketPriority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Low => priority == TicketPriority::Low,
            PriorityFilter::Medium => priority == TicketPriority::Medium,
            PriorityFilter::High => priority == TicketPriority::High,
            PriorityFilter::Urgent => priority == TicketPriority::Urgent,
        }
    }
}

/// Query parameters for listing tickets
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct TicketListParams {
    /// Case-insensitive substring match on title or description
    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub status: StatusFilter,

    #[serde(default)]
    pub priority: PriorityFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, description: &str) -> CreateTicketDto {
        CreateTicketDto {
            title: title.to_string(),
            description: description.to_string(),
            priority: None,
            category_id: Uuid::new_v4(),
            subcategory_id: None,
        }
    }

    #[test]
    fn accepts_a_complete_draft() {
        assert!(draft("Printer jammed", "It eats every second page").validate().is_ok());
    }

    #[test]
    fn rejects_empty_or_whitespace_only_title() {
        assert!(draft("", "Something broke").validate().is_err());
        assert!(draft("   ", "Something broke").validate().is_err());
        assert!(draft("\t\n", "Something broke").validate().is_err());
    }

    #[test]
    fn rejects_empty_or_whitespace_only_description() {
        assert!(draft("Printer jammed", "").validate().is_err());
        assert!(draft("Printer jammed", "   ").validate().is_err());
    }
}
