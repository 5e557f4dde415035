use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::core::error::AppError;

/// User role enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Client,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Client => write!(f, "client"),
        }
    }
}

/// The authenticated actor performing a request.
///
/// All role checks in the application go through the capability methods
/// below rather than ad-hoc comparisons scattered across handlers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Whether this actor may see a ticket owned by `client_id`.
    ///
    /// Admins see every ticket; clients only their own.
    pub fn can_view_ticket(&self, client_id: Uuid) -> bool {
        self.is_admin() || self.id == client_id
    }

    /// Whether this actor may change a ticket's status
    pub fn can_mutate_status(&self) -> bool {
        self.is_admin()
    }

    /// Whether this actor may change a ticket's priority
    pub fn can_edit_priority(&self) -> bool {
        self.is_admin()
    }

    /// Whether this actor may assign a ticket to an agent
    pub fn can_assign(&self) -> bool {
        self.is_admin()
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    // The auth middleware stores the validated user in request extensions;
    // this extractor only surfaces it to handlers.
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            email: None,
            role: UserRole::Admin,
        }
    }

    fn client(id: Uuid) -> AuthenticatedUser {
        AuthenticatedUser {
            id,
            email: None,
            role: UserRole::Client,
        }
    }

    #[test]
    fn admin_can_view_any_ticket() {
        let actor = admin();
        assert!(actor.can_view_ticket(Uuid::new_v4()));
        assert!(actor.can_view_ticket(actor.id));
    }

    #[test]
    fn client_can_view_only_own_tickets() {
        let own_id = Uuid::new_v4();
        let actor = client(own_id);
        assert!(actor.can_view_ticket(own_id));
        assert!(!actor.can_view_ticket(Uuid::new_v4()));
    }

    #[test]
    fn only_admin_can_mutate_status_priority_or_assignment() {
        let actor = admin();
        assert!(actor.can_mutate_status());
        assert!(actor.can_edit_priority());
        assert!(actor.can_assign());

        let actor = client(Uuid::new_v4());
        assert!(!actor.can_mutate_status());
        assert!(!actor.can_edit_priority());
        assert!(!actor.can_assign());
    }
}
