use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::tickets::models::TicketPriority;

/// System-wide configuration, persisted as a single JSON document.
///
/// Defaults apply both to a fresh installation and to fields missing from
/// a stored document after an upgrade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct SystemSettings {
    // General
    #[validate(length(min = 1, message = "Site name must not be empty"))]
    pub site_name: String,
    pub site_description: String,
    #[validate(email(message = "Admin email must be a valid email address"))]
    pub admin_email: String,
    pub default_language: String,

    // Tickets
    pub auto_assignment: bool,
    pub allow_client_creation: bool,
    pub require_approval: bool,
    #[validate(range(min = 1, max = 100, message = "Attachment size must be 1-100 MB"))]
    pub max_attachment_size_mb: u32,
    pub default_priority: TicketPriority,

    // Notifications
    pub email_notifications: bool,
    pub client_notifications: bool,
    pub admin_notifications: bool,
    #[validate(range(min = 1, message = "Escalation time must be at least 1 hour"))]
    pub escalation_time_hours: u32,

    // Security
    #[validate(range(min = 1, message = "Session timeout must be at least 1 minute"))]
    pub session_timeout_minutes: u32,
    #[validate(range(min = 6, max = 128, message = "Password minimum length must be 6-128"))]
    pub password_min_length: u32,
    pub require_two_factor: bool,
    pub allow_guest_tickets: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            site_name: "HelpDesk Pro".to_string(),
            site_description: "Sistema de Gestión de Tickets".to_string(),
            admin_email: "admin@helpdesk.com".to_string(),
            default_language: "es".to_string(),
            auto_assignment: true,
            allow_client_creation: true,
            require_approval: false,
            max_attachment_size_mb: 10,
            default_priority: TicketPriority::Medium,
            email_notifications: true,
            client_notifications: true,
            admin_notifications: true,
            escalation_time_hours: 24,
            session_timeout_minutes: 30,
            password_min_length: 8,
            require_two_factor: false,
            allow_guest_tickets: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SystemSettings::default().validate().is_ok());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: SystemSettings =
            serde_json::from_str(r#"{"site_name": "Acme Support"}"#).unwrap();

        assert_eq!(settings.site_name, "Acme Support");
        assert_eq!(settings.escalation_time_hours, 24);
        assert_eq!(settings.default_priority, TicketPriority::Medium);
    }

    #[test]
    fn serialization_round_trips() {
        let mut settings = SystemSettings::default();
        settings.require_two_factor = true;
        settings.session_timeout_minutes = 60;

        let json = serde_json::to_string(&settings).unwrap();
        let back: SystemSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(back, settings);
    }

    #[test]
    fn rejects_invalid_admin_email() {
        let settings = SystemSettings {
            admin_email: "not-an-email".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
