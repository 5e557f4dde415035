pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod settings;
pub mod tickets;
pub mod users;
