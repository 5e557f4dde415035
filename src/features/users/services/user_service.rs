use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::UpdateUserDto;
use crate::features::users::models::Profile;

const PROFILE_COLUMNS: &str =
    "id, full_name, email, role, status, last_login_at, created_at, updated_at";

/// Service for user profile administration
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List user profiles, optionally narrowed by a name/email search
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Profile>> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        let profiles = match search {
            Some(term) => {
                let pattern = format!("%{}%", term);
                sqlx::query_as::<_, Profile>(&format!(
                    "SELECT {PROFILE_COLUMNS} FROM profiles \
                     WHERE full_name ILIKE $1 OR email ILIKE $1 \
                     ORDER BY created_at DESC"
                ))
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Profile>(&format!(
                    "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(profiles)
    }

    /// Update a user's role or status; omitted fields stay unchanged
    pub async fn update(&self, id: Uuid, dto: UpdateUserDto) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            "UPDATE profiles SET \
                role = COALESCE($1, role), \
                status = COALESCE($2, status), \
                updated_at = now() \
             WHERE id = $3 RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(dto.role)
        .bind(dto.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))?;

        tracing::info!(
            "User updated: id={}, role={}, status={}",
            profile.id,
            profile.role,
            profile.status
        );

        Ok(profile)
    }
}
