use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CreateCategoryDto, CreateSubcategoryDto, UpdateCategoryDto, UpdateSubcategoryDto,
};
use crate::features::categories::models::{Category, Subcategory};

const CATEGORY_COLUMNS: &str = "id, name, description, color, is_active, created_at, updated_at";
const SUBCATEGORY_COLUMNS: &str = "id, category_id, name, is_active, created_at, updated_at";

/// Service for category and subcategory operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all active categories
    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE is_active = TRUE ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories)
    }

    /// List a category's active subcategories
    pub async fn list_subcategories(&self, category_id: Uuid) -> Result<Vec<Subcategory>> {
        let category_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(category_id)
                .fetch_one(&self.pool)
                .await?;

        if !category_exists {
            return Err(AppError::NotFound(format!(
                "Category '{}' not found",
                category_id
            )));
        }

        let subcategories = sqlx::query_as::<_, Subcategory>(&format!(
            "SELECT {SUBCATEGORY_COLUMNS} FROM subcategories \
             WHERE category_id = $1 AND is_active = TRUE ORDER BY name"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(subcategories)
    }

    /// Create a category (admin)
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "INSERT INTO categories (name, description, color) VALUES ($1, $2, $3) \
             RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(&dto.color)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Category created: id={}, name={}", category.id, category.name);

        Ok(category)
    }

    /// Update a category; omitted fields stay unchanged (admin)
    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "UPDATE categories SET \
                name = COALESCE($1, name), \
                description = COALESCE($2, description), \
                color = COALESCE($3, color), \
                is_active = COALESCE($4, is_active), \
                updated_at = now() \
             WHERE id = $5 RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(dto.name)
        .bind(dto.description)
        .bind(dto.color)
        .bind(dto.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))?;

        Ok(category)
    }

    /// Create a subcategory under an existing category (admin)
    pub async fn create_subcategory(
        &self,
        category_id: Uuid,
        dto: CreateSubcategoryDto,
    ) -> Result<Subcategory> {
        let category_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(category_id)
                .fetch_one(&self.pool)
                .await?;

        if !category_exists {
            return Err(AppError::NotFound(format!(
                "Category '{}' not found",
                category_id
            )));
        }

        let subcategory = sqlx::query_as::<_, Subcategory>(&format!(
            "INSERT INTO subcategories (category_id, name) VALUES ($1, $2) \
             RETURNING {SUBCATEGORY_COLUMNS}"
        ))
        .bind(category_id)
        .bind(&dto.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(subcategory)
    }

    /// Update a subcategory; omitted fields stay unchanged (admin)
    pub async fn update_subcategory(
        &self,
        id: Uuid,
        dto: UpdateSubcategoryDto,
    ) -> Result<Subcategory> {
        let subcategory = sqlx::query_as::<_, Subcategory>(&format!(
            "UPDATE subcategories SET \
                name = COALESCE($1, name), \
                is_active = COALESCE($2, is_active), \
                updated_at = now() \
             WHERE id = $3 RETURNING {SUBCATEGORY_COLUMNS}"
        ))
        .bind(dto.name)
        .bind(dto.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Subcategory '{}' not found", id)))?;

        Ok(subcategory)
    }
}
