use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::dashboard::services::stats::{CategoryCount, TicketStats};
use crate::features::tickets::dtos::TicketResponseDto;

/// Response DTO for dashboard statistics
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    #[serde(flatten)]
    pub stats: TicketStats,
    pub categories: Vec<CategoryCount>,
    pub recent_tickets: Vec<TicketResponseDto>,
}
