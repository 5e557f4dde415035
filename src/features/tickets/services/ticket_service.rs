use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthenticatedUser, UserRole};
use crate::features::tickets::dtos::{CreateTicketDto, TicketListParams};
use crate::features::tickets::models::{Ticket, TicketPriority, TicketStatus};
use crate::features::tickets::services::search;
use crate::features::users::models::UserStatus;

const TICKET_COLUMNS: &str = "id, ticket_number, title, description, status, priority, \
     category_id, subcategory_id, client_id, assigned_to, resolved_at, created_at, updated_at";

/// Computes the `resolved_at` value a status change produces.
///
/// Entering `resolved` stamps the current time; a resolved ticket that is
/// resolved again keeps its original stamp. Any other target status clears
/// the stamp.
pub fn next_resolved_at(
    current_status: TicketStatus,
    current_resolved_at: Option<DateTime<Utc>>,
    new_status: TicketStatus,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if new_status == TicketStatus::Resolved {
        if current_status == TicketStatus::Resolved {
            current_resolved_at
        } else {
            Some(now)
        }
    } else {
        None
    }
}

/// Checks that a draft's subcategory, when present, belongs to the draft's
/// category.
pub fn check_subcategory_pairing(category_id: Uuid, subcategory_parent: Option<Uuid>) -> Result<()> {
    match subcategory_parent {
        Some(parent) if parent != category_id => Err(AppError::Validation(
            "subcategory_id does not belong to the selected category".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Service for ticket operations
pub struct TicketService {
    pool: PgPool,
}

impl TicketService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Generate a ticket number in format: TKT-YYYY-NNNNNNN
    async fn generate_ticket_number(&self) -> Result<String> {
        let year = Utc::now().format("%Y").to_string();

        let seq: i64 = sqlx::query_scalar("SELECT nextval('ticket_number_seq')")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get next sequence value: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(format!("TKT-{}-{:07}", year, seq))
    }

    /// Create a ticket owned by the acting user
    pub async fn create(&self, actor: &AuthenticatedUser, dto: CreateTicketDto) -> Result<Ticket> {
        let category_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(dto.category_id)
                .fetch_one(&self.pool)
                .await?;

        if !category_exists {
            return Err(AppError::NotFound(format!(
                "Category '{}' not found",
                dto.category_id
            )));
        }

        if let Some(subcategory_id) = dto.subcategory_id {
            let parent: Option<Uuid> =
                sqlx::query_scalar("SELECT category_id FROM subcategories WHERE id = $1")
                    .bind(subcategory_id)
                    .fetch_optional(&self.pool)
                    .await?;

            let parent = parent.ok_or_else(|| {
                AppError::NotFound(format!("Subcategory '{}' not found", subcategory_id))
            })?;

            check_subcategory_pairing(dto.category_id, Some(parent))?;
        }

        let ticket_number = self.generate_ticket_number().await?;
        let priority = dto.priority.unwrap_or(TicketPriority::Medium);

        let ticket = sqlx::query_as::<_, Ticket>(&format!(
            "INSERT INTO tickets \
                (ticket_number, title, description, status, priority, category_id, subcategory_id, client_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {TICKET_COLUMNS}"
        ))
        .bind(&ticket_number)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(TicketStatus::Open)
        .bind(priority)
        .bind(dto.category_id)
        .bind(dto.subcategory_id)
        .bind(actor.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create ticket: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Ticket created: id={}, number={}, client={}",
            ticket.id,
            ticket.ticket_number,
            actor.id
        );

        Ok(ticket)
    }

    /// List tickets visible to the actor, filtered by the query parameters.
    ///
    /// Admins see every ticket, clients only their own. Results come back
    /// newest first.
    pub async fn list(
        &self,
        actor: &AuthenticatedUser,
        params: &TicketListParams,
    ) -> Result<Vec<Ticket>> {
        let tickets = self.fetch_for_actor(actor).await?;
        Ok(search::search(tickets, actor, params))
    }

    /// Fetch the actor's role-scoped ticket set, newest first
    pub async fn fetch_for_actor(&self, actor: &AuthenticatedUser) -> Result<Vec<Ticket>> {
        let tickets = if actor.is_admin() {
            sqlx::query_as::<_, Ticket>(&format!(
                "SELECT {TICKET_COLUMNS} FROM tickets ORDER BY created_at DESC"
            ))
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, Ticket>(&format!(
                "SELECT {TICKET_COLUMNS} FROM tickets WHERE client_id = $1 ORDER BY created_at DESC"
            ))
            .bind(actor.id)
            .fetch_all(&self.pool)
            .await?
        };

        Ok(tickets)
    }

    /// Get ticket by ID
    pub async fn get_by_id(&self, actor: &AuthenticatedUser, id: Uuid) -> Result<Ticket> {
        let ticket = sqlx::query_as::<_, Ticket>(&format!(
            "SELECT {TICKET_COLUMNS} FROM tickets WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ticket '{}' not found", id)))?;

        if !actor.can_view_ticket(ticket.client_id) {
            return Err(AppError::Forbidden(
                "You do not have access to this ticket".to_string(),
            ));
        }

        Ok(ticket)
    }

    /// Get ticket by ticket number
    pub async fn get_by_number(
        &self,
        actor: &AuthenticatedUser,
        ticket_number: &str,
    ) -> Result<Ticket> {
        let ticket = sqlx::query_as::<_, Ticket>(&format!(
            "SELECT {TICKET_COLUMNS} FROM tickets WHERE ticket_number = $1"
        ))
        .bind(ticket_number)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ticket '{}' not found", ticket_number)))?;

        if !actor.can_view_ticket(ticket.client_id) {
            return Err(AppError::Forbidden(
                "You do not have access to this ticket".to_string(),
            ));
        }

        Ok(ticket)
    }

    /// Change a ticket's status, maintaining the `resolved_at` stamp
    pub async fn update_status(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
        new_status: TicketStatus,
    ) -> Result<Ticket> {
        if !actor.can_mutate_status() {
            return Err(AppError::Forbidden(
                "Only admins can change ticket status".to_string(),
            ));
        }

        let ticket = sqlx::query_as::<_, Ticket>(&format!(
            "SELECT {TICKET_COLUMNS} FROM tickets WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ticket '{}' not found", id)))?;

        let resolved_at =
            next_resolved_at(ticket.status, ticket.resolved_at, new_status, Utc::now());

        let updated = sqlx::query_as::<_, Ticket>(&format!(
            "UPDATE tickets SET status = $1, resolved_at = $2, updated_at = now() \
             WHERE id = $3 RETURNING {TICKET_COLUMNS}"
        ))
        .bind(new_status)
        .bind(resolved_at)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            "Ticket status changed: id={}, {} -> {}",
            id,
            ticket.status,
            new_status
        );

        Ok(updated)
    }

    /// Change a ticket's priority
    pub async fn update_priority(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
        priority: TicketPriority,
    ) -> Result<Ticket> {
        if !actor.can_edit_priority() {
            return Err(AppError::Forbidden(
                "Only admins can change ticket priority".to_string(),
            ));
        }

        let updated = sqlx::query_as::<_, Ticket>(&format!(
            "UPDATE tickets SET priority = $1, updated_at = now() \
             WHERE id = $2 RETURNING {TICKET_COLUMNS}"
        ))
        .bind(priority)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ticket '{}' not found", id)))?;

        Ok(updated)
    }

    /// Assign a ticket to an admin, or clear the assignment
    pub async fn assign(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
        assigned_to: Option<Uuid>,
    ) -> Result<Ticket> {
        if !actor.can_assign() {
            return Err(AppError::Forbidden(
                "Only admins can assign tickets".to_string(),
            ));
        }

        if let Some(assignee_id) = assigned_to {
            let assignee: Option<(UserRole, UserStatus)> =
                sqlx::query_as("SELECT role, status FROM profiles WHERE id = $1")
                    .bind(assignee_id)
                    .fetch_optional(&self.pool)
                    .await?;

            let (role, status) = assignee.ok_or_else(|| {
                AppError::NotFound(format!("User '{}' not found", assignee_id))
            })?;

            if role != UserRole::Admin || status != UserStatus::Active {
                return Err(AppError::Validation(
                    "assigned_to must reference an active admin".to_string(),
                ));
            }
        }

        let updated = sqlx::query_as::<_, Ticket>(&format!(
            "UPDATE tickets SET assigned_to = $1, updated_at = now() \
             WHERE id = $2 RETURNING {TICKET_COLUMNS}"
        ))
        .bind(assigned_to)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ticket '{}' not found", id)))?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolving_stamps_the_current_time() {
        let now = Utc::now();
        let stamp = next_resolved_at(TicketStatus::Open, None, TicketStatus::Resolved, now);
        assert_eq!(stamp, Some(now));
    }

    #[test]
    fn resolving_an_already_resolved_ticket_keeps_the_original_stamp() {
        let original = Utc::now() - chrono::Duration::hours(3);
        let now = Utc::now();
        let stamp = next_resolved_at(
            TicketStatus::Resolved,
            Some(original),
            TicketStatus::Resolved,
            now,
        );
        assert_eq!(stamp, Some(original));
    }

    #[test]
    fn reopening_a_resolved_ticket_clears_the_stamp() {
        let original = Utc::now() - chrono::Duration::hours(3);
        let stamp = next_resolved_at(
            TicketStatus::Resolved,
            Some(original),
            TicketStatus::Open,
            Utc::now(),
        );
        assert_eq!(stamp, None);
    }

    #[test]
    fn non_resolved_transitions_carry_no_stamp() {
        let stamp = next_resolved_at(
            TicketStatus::Open,
            None,
            TicketStatus::InProgress,
            Utc::now(),
        );
        assert_eq!(stamp, None);
    }

    #[test]
    fn subcategory_pairing_accepts_matching_parent() {
        let category = Uuid::new_v4();
        assert!(check_subcategory_pairing(category, Some(category)).is_ok());
        assert!(check_subcategory_pairing(category, None).is_ok());
    }

    #[test]
    fn subcategory_pairing_rejects_foreign_parent() {
        let result = check_subcategory_pairing(Uuid::new_v4(), Some(Uuid::new_v4()));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    // Capability checks run before any query, so a lazy pool that never
    // connects is enough to prove these mutations are rejected up front.
    fn disconnected_service() -> TicketService {
        let pool = PgPool::connect_lazy("postgres://localhost:1/unreachable")
            .expect("lazy pool options should parse");
        TicketService::new(pool)
    }

    #[tokio::test]
    async fn client_cannot_change_ticket_status() {
        let service = disconnected_service();
        let actor = crate::shared::test_helpers::create_client_user(Uuid::new_v4());

        let result = service
            .update_status(&actor, Uuid::new_v4(), TicketStatus::Resolved)
            .await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn client_cannot_change_ticket_priority() {
        let service = disconnected_service();
        let actor = crate::shared::test_helpers::create_client_user(Uuid::new_v4());

        let result = service
            .update_priority(&actor, Uuid::new_v4(), TicketPriority::Urgent)
            .await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn client_cannot_assign_tickets() {
        let service = disconnected_service();
        let actor = crate::shared::test_helpers::create_client_user(Uuid::new_v4());

        let result = service
            .assign(&actor, Uuid::new_v4(), Some(Uuid::new_v4()))
            .await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }
}
