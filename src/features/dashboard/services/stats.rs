//! Pure aggregate statistics over ticket sets.
//!
//! Works on whatever slice the caller scoped; the service layer decides
//! whose tickets go in, these functions only count.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::categories::models::Category;
use crate::features::tickets::models::{Ticket, TicketPriority, TicketStatus};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketStats {
    pub total: i64,
    pub open: i64,
    pub in_progress: i64,
    pub pending: i64,
    pub resolved: i64,
    pub closed: i64,
    /// Percentage of resolved tickets, rounded; 0 for an empty set
    pub resolution_rate: i64,
    pub priorities: Vec<PriorityCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PriorityCount {
    pub priority: TicketPriority,
    pub count: i64,
    pub percentage: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryCount {
    pub category_id: Uuid,
    pub name: String,
    pub count: i64,
    pub percentage: i64,
}

fn percentage(count: i64, total: i64) -> i64 {
    if total == 0 {
        0
    } else {
        ((count as f64 / total as f64) * 100.0).round() as i64
    }
}

/// Count tickets per status and priority over the given set
pub fn compute_stats(tickets: &[Ticket]) -> TicketStats {
    let total = tickets.len() as i64;
    let count_status =
        |status: TicketStatus| tickets.iter().filter(|t| t.status == status).count() as i64;

    let resolved = count_status(TicketStatus::Resolved);

    let priorities = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Urgent,
    ]
    .into_iter()
    .map(|priority| {
        let count = tickets.iter().filter(|t| t.priority == priority).count() as i64;
        PriorityCount {
            priority,
            count,
            percentage: percentage(count, total),
        }
    })
    .collect();

    TicketStats {
        total,
        open: count_status(TicketStatus::Open),
        in_progress: count_status(TicketStatus::InProgress),
        pending: count_status(TicketStatus::Pending),
        resolved,
        closed: count_status(TicketStatus::Closed),
        resolution_rate: percentage(resolved, total),
        priorities,
    }
}

/// Count tickets per category, in the order the categories were supplied
pub fn category_breakdown(tickets: &[Ticket], categories: &[Category]) -> Vec<CategoryCount> {
    let total = tickets.len() as i64;

    categories
        .iter()
        .map(|category| {
            let count = tickets
                .iter()
                .filter(|t| t.category_id == category.id)
                .count() as i64;
            CategoryCount {
                category_id: category.id,
                name: category.name.clone(),
                count,
                percentage: percentage(count, total),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_ticket(status: TicketStatus, priority: TicketPriority, category_id: Uuid) -> Ticket {
        Ticket {
            id: Uuid::new_v4(),
            ticket_number: "TKT-2026-0000001".to_string(),
            title: "Printer jam".to_string(),
            description: "It is jammed".to_string(),
            status,
            priority,
            category_id,
            subcategory_id: None,
            client_id: Uuid::new_v4(),
            assigned_to: None,
            resolved_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn make_category(name: &str) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            color: "#3b82f6".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_set_yields_zero_counts_and_zero_rate() {
        let stats = compute_stats(&[]);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.open, 0);
        assert_eq!(stats.in_progress, 0);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.resolved, 0);
        assert_eq!(stats.closed, 0);
        assert_eq!(stats.resolution_rate, 0);
        assert!(stats.priorities.iter().all(|p| p.count == 0 && p.percentage == 0));
    }

    #[test]
    fn one_resolved_of_two_gives_fifty_percent() {
        let category = Uuid::new_v4();
        let tickets = vec![
            make_ticket(TicketStatus::Resolved, TicketPriority::Low, category),
            make_ticket(TicketStatus::Open, TicketPriority::High, category),
        ];

        let stats = compute_stats(&tickets);

        assert_eq!(stats.total, 2);
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.open, 1);
        assert_eq!(stats.resolution_rate, 50);
    }

    #[test]
    fn resolution_rate_is_rounded() {
        let category = Uuid::new_v4();
        let tickets = vec![
            make_ticket(TicketStatus::Resolved, TicketPriority::Low, category),
            make_ticket(TicketStatus::Open, TicketPriority::Low, category),
            make_ticket(TicketStatus::Closed, TicketPriority::Low, category),
        ];

        // 1/3 = 33.33..., rounds down to 33
        assert_eq!(compute_stats(&tickets).resolution_rate, 33);
    }

    #[test]
    fn counts_every_status_separately() {
        let category = Uuid::new_v4();
        let tickets = vec![
            make_ticket(TicketStatus::Open, TicketPriority::Low, category),
            make_ticket(TicketStatus::InProgress, TicketPriority::Low, category),
            make_ticket(TicketStatus::Pending, TicketPriority::Low, category),
            make_ticket(TicketStatus::Resolved, TicketPriority::Low, category),
            make_ticket(TicketStatus::Closed, TicketPriority::Low, category),
        ];

        let stats = compute_stats(&tickets);

        assert_eq!(stats.open, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.closed, 1);
    }

    #[test]
    fn priority_breakdown_counts_and_percentages() {
        let category = Uuid::new_v4();
        let tickets = vec![
            make_ticket(TicketStatus::Open, TicketPriority::High, category),
            make_ticket(TicketStatus::Open, TicketPriority::High, category),
            make_ticket(TicketStatus::Open, TicketPriority::Low, category),
            make_ticket(TicketStatus::Open, TicketPriority::Urgent, category),
        ];

        let stats = compute_stats(&tickets);
        let high = stats
            .priorities
            .iter()
            .find(|p| p.priority == TicketPriority::High)
            .unwrap();

        assert_eq!(high.count, 2);
        assert_eq!(high.percentage, 50);
    }

    #[test]
    fn category_breakdown_follows_supplied_order() {
        let hardware = make_category("Hardware");
        let software = make_category("Software");
        let tickets = vec![
            make_ticket(TicketStatus::Open, TicketPriority::Low, hardware.id),
            make_ticket(TicketStatus::Open, TicketPriority::Low, hardware.id),
            make_ticket(TicketStatus::Open, TicketPriority::Low, software.id),
            make_ticket(TicketStatus::Open, TicketPriority::Low, software.id),
        ];

        let breakdown = category_breakdown(&tickets, &[hardware.clone(), software.clone()]);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].name, "Hardware");
        assert_eq!(breakdown[0].count, 2);
        assert_eq!(breakdown[0].percentage, 50);
        assert_eq!(breakdown[1].name, "Software");
        assert_eq!(breakdown[1].count, 2);
    }

    #[test]
    fn category_breakdown_of_empty_set_has_zero_percentages() {
        let breakdown = category_breakdown(&[], &[make_category("Hardware")]);

        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].count, 0);
        assert_eq!(breakdown[0].percentage, 0);
    }
}
