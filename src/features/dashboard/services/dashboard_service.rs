use std::sync::Arc;

use sqlx::PgPool;

use crate::core::error::Result;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::categories::models::Category;
use crate::features::dashboard::dtos::DashboardStatsDto;
use crate::features::dashboard::services::stats;
use crate::features::tickets::TicketService;
use crate::shared::constants::RECENT_TICKETS_LIMIT;

/// Service for role-scoped dashboard statistics
pub struct DashboardService {
    pool: PgPool,
    tickets: Arc<TicketService>,
}

impl DashboardService {
    pub fn new(pool: PgPool, tickets: Arc<TicketService>) -> Self {
        Self { pool, tickets }
    }

    /// Compute dashboard statistics over the actor's visible tickets.
    ///
    /// Admins get numbers for the whole system, clients only for their own
    /// tickets. Recent activity is the newest handful of the same set.
    pub async fn stats(&self, actor: &AuthenticatedUser) -> Result<DashboardStatsDto> {
        let tickets = self.tickets.fetch_for_actor(actor).await?;

        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description, color, is_active, created_at, updated_at \
             FROM categories WHERE is_active = TRUE ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        let ticket_stats = stats::compute_stats(&tickets);
        let categories = stats::category_breakdown(&tickets, &categories);

        let recent_tickets = tickets
            .into_iter()
            .take(RECENT_TICKETS_LIMIT)
            .map(|t| t.into())
            .collect();

        Ok(DashboardStatsDto {
            stats: ticket_stats,
            categories,
            recent_tickets,
        })
    }
}
