/// How many tickets the dashboard "recent activity" panel shows
pub const RECENT_TICKETS_LIMIT: usize = 5;
