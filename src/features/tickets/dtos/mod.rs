mod ticket_dto;

pub use ticket_dto::{
    AssignTicketDto, CreateTicketDto, PriorityFilter, StatusFilter, TicketListParams,
    TicketResponseDto, UpdateTicketPriorityDto, UpdateTicketStatusDto,
};
