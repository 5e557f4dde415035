use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, CreateSubcategoryDto, SubcategoryResponseDto,
    UpdateCategoryDto, UpdateSubcategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// List active categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of active categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list().await?;
    let categories: Vec<CategoryResponseDto> = categories.into_iter().map(|c| c.into()).collect();
    Ok(Json(ApiResponse::success(Some(categories), None, None)))
}

/// List a category's active subcategories
#[utoipa::path(
    get,
    path = "/api/categories/{id}/subcategories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "List of active subcategories", body = ApiResponse<Vec<SubcategoryResponseDto>>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn list_subcategories(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<SubcategoryResponseDto>>>> {
    let subcategories = service.list_subcategories(id).await?;
    let subcategories: Vec<SubcategoryResponseDto> =
        subcategories.into_iter().map(|s| s.into()).collect();
    Ok(Json(ApiResponse::success(Some(subcategories), None, None)))
}

/// Create a category (admin only)
#[utoipa::path(
    post,
    path = "/api/admin/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 200, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn create_category(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(category.into()),
        Some("Category created".to_string()),
        None,
    )))
}

/// Update a category (admin only)
#[utoipa::path(
    patch,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Category not found")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn update_category(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(category.into()), None, None)))
}

/// Create a subcategory under a category (admin only)
#[utoipa::path(
    post,
    path = "/api/admin/categories/{id}/subcategories",
    params(
        ("id" = Uuid, Path, description = "Parent category ID")
    ),
    request_body = CreateSubcategoryDto,
    responses(
        (status = 200, description = "Subcategory created", body = ApiResponse<SubcategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Category not found")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn create_subcategory(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<CreateSubcategoryDto>,
) -> Result<Json<ApiResponse<SubcategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let subcategory = service.create_subcategory(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(subcategory.into()),
        Some("Subcategory created".to_string()),
        None,
    )))
}

/// Update a subcategory (admin only)
#[utoipa::path(
    patch,
    path = "/api/admin/subcategories/{id}",
    params(
        ("id" = Uuid, Path, description = "Subcategory ID")
    ),
    request_body = UpdateSubcategoryDto,
    responses(
        (status = 200, description = "Subcategory updated", body = ApiResponse<SubcategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Subcategory not found")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn update_subcategory(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateSubcategoryDto>,
) -> Result<Json<ApiResponse<SubcategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let subcategory = service.update_subcategory(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(subcategory.into()),
        None,
        None,
    )))
}
