//! Pure filter engine for ticket lists.
//!
//! The database hands over the role-scoped set; this module narrows it by
//! text, status and priority without touching I/O, so every rule is unit
//! testable.

use crate::features::auth::model::AuthenticatedUser;
use crate::features::tickets::dtos::TicketListParams;
use crate::features::tickets::models::Ticket;

/// Filter `tickets` down to what `actor` may see and what `params` asks for.
///
/// Visibility is applied first and unconditionally, then the text match
/// (case-insensitive substring on title or description, empty matches all),
/// then the status and priority filters. Input order is preserved.
pub fn search(
    tickets: Vec<Ticket>,
    actor: &AuthenticatedUser,
    params: &TicketListParams,
) -> Vec<Ticket> {
    let needle = params.search.trim().to_lowercase();

    tickets
        .into_iter()
        .filter(|t| actor.can_view_ticket(t.client_id))
        .filter(|t| {
            needle.is_empty()
                || t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .filter(|t| params.status.matches(t.status))
        .filter(|t| params.priority.matches(t.priority))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tickets::dtos::{PriorityFilter, StatusFilter};
    use crate::features::tickets::models::{TicketPriority, TicketStatus};
    use crate::shared::test_helpers::{create_admin_user, create_client_user};
    use chrono::Utc;
    use uuid::Uuid;

    fn make_ticket(
        title: &str,
        status: TicketStatus,
        priority: TicketPriority,
        client_id: Uuid,
    ) -> Ticket {
        Ticket {
            id: Uuid::new_v4(),
            ticket_number: "TKT-2026-0000001".to_string(),
            title: title.to_string(),
            description: format!("{} description", title),
            status,
            priority,
            category_id: Uuid::new_v4(),
            subcategory_id: None,
            client_id,
            assigned_to: None,
            resolved_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_query_returns_the_role_scoped_subset_in_order() {
        let client_id = Uuid::new_v4();
        let other_id = Uuid::new_v4();
        let tickets = vec![
            make_ticket("Printer jam", TicketStatus::Open, TicketPriority::High, client_id),
            make_ticket("VPN down", TicketStatus::Resolved, TicketPriority::Low, other_id),
            make_ticket("Slow laptop", TicketStatus::Pending, TicketPriority::Medium, client_id),
        ];

        let actor = create_client_user(client_id);
        let result = search(tickets, &actor, &TicketListParams::default());

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "Printer jam");
        assert_eq!(result[1].title, "Slow laptop");
    }

    #[test]
    fn admin_sees_every_ticket() {
        let tickets = vec![
            make_ticket("A", TicketStatus::Open, TicketPriority::Low, Uuid::new_v4()),
            make_ticket("B", TicketStatus::Closed, TicketPriority::Urgent, Uuid::new_v4()),
        ];

        let result = search(tickets, &create_admin_user(), &TicketListParams::default());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn client_only_sees_own_tickets() {
        let own = Uuid::new_v4();
        let tickets = vec![
            make_ticket("Mine", TicketStatus::Open, TicketPriority::High, own),
            make_ticket("Theirs", TicketStatus::Resolved, TicketPriority::Low, Uuid::new_v4()),
        ];

        let result = search(tickets, &create_client_user(own), &TicketListParams::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Mine");
    }

    #[test]
    fn text_match_is_case_insensitive_on_title_and_description() {
        let client_id = Uuid::new_v4();
        let mut with_desc_hit = make_ticket(
            "Unrelated",
            TicketStatus::Open,
            TicketPriority::Low,
            client_id,
        );
        with_desc_hit.description = "The PRINTER smokes".to_string();

        let tickets = vec![
            make_ticket("Printer jam", TicketStatus::Open, TicketPriority::High, client_id),
            with_desc_hit,
            make_ticket("VPN down", TicketStatus::Open, TicketPriority::Low, client_id),
        ];

        let params = TicketListParams {
            search: "printer".to_string(),
            ..Default::default()
        };
        let result = search(tickets, &create_client_user(client_id), &params);

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn status_and_priority_filters_narrow_the_set() {
        let admin = create_admin_user();
        let tickets = vec![
            make_ticket("A", TicketStatus::Open, TicketPriority::High, Uuid::new_v4()),
            make_ticket("B", TicketStatus::Open, TicketPriority::Low, Uuid::new_v4()),
            make_ticket("C", TicketStatus::Resolved, TicketPriority::High, Uuid::new_v4()),
        ];

        let params = TicketListParams {
            status: StatusFilter::Open,
            priority: PriorityFilter::High,
            ..Default::default()
        };
        let result = search(tickets, &admin, &params);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "A");
    }

    #[test]
    fn search_is_idempotent() {
        let admin = create_admin_user();
        let tickets = vec![
            make_ticket("Printer jam", TicketStatus::Open, TicketPriority::High, Uuid::new_v4()),
            make_ticket("VPN down", TicketStatus::Resolved, TicketPriority::Low, Uuid::new_v4()),
        ];

        let params = TicketListParams {
            search: "printer".to_string(),
            status: StatusFilter::Open,
            priority: PriorityFilter::All,
        };

        let once = search(tickets, &admin, &params);
        let ids: Vec<_> = once.iter().map(|t| t.id).collect();
        let twice = search(once, &admin, &params);

        assert_eq!(twice.iter().map(|t| t.id).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn client_with_all_filters_gets_only_their_ticket() {
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();
        let tickets = vec![
            make_ticket("First", TicketStatus::Open, TicketPriority::High, u1),
            make_ticket("Second", TicketStatus::Resolved, TicketPriority::Low, u2),
        ];
        let expected_id = tickets[0].id;

        let params = TicketListParams {
            search: String::new(),
            status: StatusFilter::All,
            priority: PriorityFilter::All,
        };
        let result = search(tickets, &create_client_user(u1), &params);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, expected_id);
    }
}
