use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::settings::models::SystemSettings;
use crate::features::tickets::models::TicketPriority;

/// Partial settings update; omitted fields keep their stored values
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateSettingsDto {
    pub site_name: Option<String>,
    pub site_description: Option<String>,
    pub admin_email: Option<String>,
    pub default_language: Option<String>,

    pub auto_assignment: Option<bool>,
    pub allow_client_creation: Option<bool>,
    pub require_approval: Option<bool>,
    pub max_attachment_size_mb: Option<u32>,
    pub default_priority: Option<TicketPriority>,

    pub email_notifications: Option<bool>,
    pub client_notifications: Option<bool>,
    pub admin_notifications: Option<bool>,
    pub escalation_time_hours: Option<u32>,

    pub session_timeout_minutes: Option<u32>,
    pub password_min_length: Option<u32>,
    pub require_two_factor: Option<bool>,
    pub allow_guest_tickets: Option<bool>,
}

impl UpdateSettingsDto {
    /// Fold this update into `current`, field by field
    pub fn merge(self, current: SystemSettings) -> SystemSettings {
        SystemSettings {
            site_name: self.site_name.unwrap_or(current.site_name),
            site_description: self.site_description.unwrap_or(current.site_description),
            admin_email: self.admin_email.unwrap_or(current.admin_email),
            default_language: self.default_language.unwrap_or(current.default_language),
            auto_assignment: self.auto_assignment.unwrap_or(current.auto_assignment),
            allow_client_creation: self
                .allow_client_creation
                .unwrap_or(current.allow_client_creation),
            require_approval: self.require_approval.unwrap_or(current.require_approval),
            max_attachment_size_mb: self
                .max_attachment_size_mb
                .unwrap_or(current.max_attachment_size_mb),
            default_priority: self.default_priority.unwrap_or(current.default_priority),
            email_notifications: self
                .email_notifications
                .unwrap_or(current.email_notifications),
            client_notifications: self
                .client_notifications
                .unwrap_or(current.client_notifications),
            admin_notifications: self
                .admin_notifications
                .unwrap_or(current.admin_notifications),
            escalation_time_hours: self
                .escalation_time_hours
                .unwrap_or(current.escalation_time_hours),
            session_timeout_minutes: self
                .session_timeout_minutes
                .unwrap_or(current.session_timeout_minutes),
            password_min_length: self
                .password_min_length
                .unwrap_or(current.password_min_length),
            require_two_factor: self.require_two_factor.unwrap_or(current.require_two_factor),
            allow_guest_tickets: self
                .allow_guest_tickets
                .unwrap_or(current.allow_guest_tickets),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_keeps_everything() {
        let current = SystemSettings::default();
        let merged = UpdateSettingsDto::default().merge(current.clone());
        assert_eq!(merged, current);
    }

    #[test]
    fn merge_overrides_only_supplied_fields() {
        let update = UpdateSettingsDto {
            site_name: Some("Acme Support".to_string()),
            require_two_factor: Some(true),
            ..Default::default()
        };

        let merged = update.merge(SystemSettings::default());

        assert_eq!(merged.site_name, "Acme Support");
        assert!(merged.require_two_factor);
        assert_eq!(merged.escalation_time_hours, 24);
        assert_eq!(merged.default_priority, TicketPriority::Medium);
    }
}
