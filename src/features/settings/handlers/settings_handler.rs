use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::settings::dtos::UpdateSettingsDto;
use crate::features::settings::models::SystemSettings;
use crate::features::settings::services::SettingsService;
use crate::shared::types::ApiResponse;

/// Get the system settings (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/settings",
    responses(
        (status = 200, description = "Current system settings", body = ApiResponse<SystemSettings>),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn get_settings(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<SettingsService>>,
) -> Result<Json<ApiResponse<SystemSettings>>> {
    let settings = service.get().await?;
    Ok(Json(ApiResponse::success(Some(settings), None, None)))
}

/// Update the system settings (admin only)
#[utoipa::path(
    put,
    path = "/api/admin/settings",
    request_body = UpdateSettingsDto,
    responses(
        (status = 200, description = "Settings updated", body = ApiResponse<SystemSettings>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn update_settings(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<SettingsService>>,
    AppJson(dto): AppJson<UpdateSettingsDto>,
) -> Result<Json<ApiResponse<SystemSettings>>> {
    // Validate the merged document before it is persisted
    let preview = dto.clone().merge(service.get().await?);
    preview
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let settings = service.update(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(settings),
        Some("Settings updated".to_string()),
        None,
    )))
}
