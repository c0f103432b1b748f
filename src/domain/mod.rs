pub mod event;
pub mod ticket;
pub mod transition;
