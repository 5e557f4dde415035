use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{handlers as auth_handlers, model as auth_model};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::dashboard::services::stats as dashboard_stats;
use crate::features::settings::{
    dtos as settings_dtos, handlers as settings_handlers, models as settings_models,
};
use crate::features::tickets::{
    dtos as tickets_dtos, handlers as tickets_handlers, models as tickets_models,
};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::get_me,
        // Categories (public)
        categories_handlers::list_categories,
        categories_handlers::list_subcategories,
        // Tickets (protected)
        tickets_handlers::list_tickets,
        tickets_handlers::create_ticket,
        tickets_handlers::get_ticket,
        tickets_handlers::get_ticket_by_number,
        tickets_handlers::update_ticket_status,
        tickets_handlers::update_ticket_priority,
        tickets_handlers::assign_ticket,
        // Dashboard (protected)
        dashboard_handlers::get_stats,
        // Admin
        users_handlers::list_users,
        users_handlers::update_user,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::create_subcategory,
        categories_handlers::update_subcategory,
        settings_handlers::get_settings,
        settings_handlers::update_settings,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_model::UserRole,
            auth_model::AuthenticatedUser,
            ApiResponse<auth_model::AuthenticatedUser>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::SubcategoryResponseDto,
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CreateSubcategoryDto,
            categories_dtos::UpdateSubcategoryDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::SubcategoryResponseDto>>,
            ApiResponse<categories_dtos::SubcategoryResponseDto>,
            // Tickets
            tickets_models::TicketStatus,
            tickets_models::TicketPriority,
            tickets_dtos::StatusFilter,
            tickets_dtos::PriorityFilter,
            tickets_dtos::CreateTicketDto,
            tickets_dtos::UpdateTicketStatusDto,
            tickets_dtos::UpdateTicketPriorityDto,
            tickets_dtos::AssignTicketDto,
            tickets_dtos::TicketResponseDto,
            ApiResponse<Vec<tickets_dtos::TicketResponseDto>>,
            ApiResponse<tickets_dtos::TicketResponseDto>,
            // Dashboard
            dashboard_stats::TicketStats,
            dashboard_stats::PriorityCount,
            dashboard_stats::CategoryCount,
            dashboard_dtos::DashboardStatsDto,
            ApiResponse<dashboard_dtos::DashboardStatsDto>,
            // Users
            users_dtos::ProfileResponseDto,
            users_dtos::UpdateUserDto,
            ApiResponse<Vec<users_dtos::ProfileResponseDto>>,
            ApiResponse<users_dtos::ProfileResponseDto>,
            // Settings
            settings_models::SystemSettings,
            settings_dtos::UpdateSettingsDto,
            ApiResponse<settings_models::SystemSettings>,
        )
    ),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "categories", description = "Ticket categories (public)"),
        (name = "tickets", description = "Help-desk tickets"),
        (name = "dashboard", description = "Role-scoped statistics"),
        (name = "admin", description = "Admin endpoints (admin role required)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Helpdesk API",
        version = "0.1.0",
        description = "API documentation for the helpdesk service",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
