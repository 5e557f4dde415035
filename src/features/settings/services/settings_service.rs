use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::settings::dtos::UpdateSettingsDto;
use crate::features::settings::models::SystemSettings;

/// Service for the single-document system settings store.
///
/// The settings live in one row as a JSON string; a missing row means a
/// fresh installation and yields the defaults.
pub struct SettingsService {
    pool: PgPool,
}

impl SettingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the current settings, falling back to defaults when unset
    pub async fn get(&self) -> Result<SystemSettings> {
        let document: Option<String> =
            sqlx::query_scalar("SELECT document FROM system_settings WHERE id = 1")
                .fetch_optional(&self.pool)
                .await?;

        match document {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                tracing::error!("Stored settings document is corrupt: {:?}", e);
                AppError::Internal("Stored settings document is corrupt".to_string())
            }),
            None => Ok(SystemSettings::default()),
        }
    }

    /// Merge an update into the stored settings and persist the result
    pub async fn update(&self, dto: UpdateSettingsDto) -> Result<SystemSettings> {
        let current = self.get().await?;
        let merged = dto.merge(current);

        let json = serde_json::to_string(&merged).map_err(|e| {
            tracing::error!("Failed to serialize settings: {:?}", e);
            AppError::Internal("Failed to serialize settings".to_string())
        })?;

        sqlx::query(
            "INSERT INTO system_settings (id, document, updated_at) VALUES (1, $1, now()) \
             ON CONFLICT (id) DO UPDATE SET document = $1, updated_at = now()",
        )
        .bind(&json)
        .execute(&self.pool)
        .await?;

        tracing::info!("System settings updated");

        Ok(merged)
    }
}
