use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::auth::model::UserRole;
use crate::features::users::models::{Profile, UserStatus};

/// Response DTO for user profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponseDto {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponseDto {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            full_name: p.full_name,
            email: p.email,
            role: p.role,
            status: p.status,
            last_login_at: p.last_login_at,
            created_at: p.created_at,
        }
    }
}

/// Request DTO for updating a user's role or status; omitted fields stay
/// unchanged
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    #[serde(default)]
    pub role: Option<UserRole>,

    #[serde(default)]
    pub status: Option<UserStatus>,
}

/// Query parameters for listing users
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct UserListParams {
    /// Case-insensitive substring match on full name or email
    #[serde(default)]
    pub search: Option<String>,
}
