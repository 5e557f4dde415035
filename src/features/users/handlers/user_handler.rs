use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::users::dtos::{ProfileResponseDto, UpdateUserDto, UserListParams};
use crate::features::users::services::UserService;
use crate::shared::types::{ApiResponse, Meta};

/// List user profiles (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    params(UserListParams),
    responses(
        (status = 200, description = "List of user profiles", body = ApiResponse<Vec<ProfileResponseDto>>),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn list_users(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<UserService>>,
    Query(params): Query<UserListParams>,
) -> Result<Json<ApiResponse<Vec<ProfileResponseDto>>>> {
    let profiles = service.list(params.search.as_deref()).await?;
    let total = profiles.len() as i64;
    let profiles: Vec<ProfileResponseDto> = profiles.into_iter().map(|p| p.into()).collect();

    Ok(Json(ApiResponse::success(
        Some(profiles),
        None,
        Some(Meta { total }),
    )))
}

/// Update a user's role or status (admin only)
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<ProfileResponseDto>),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn update_user(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<UserService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    let profile = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(profile.into()), None, None)))
}
