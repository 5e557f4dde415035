pub mod search;
mod ticket_service;

pub use ticket_service::TicketService;
