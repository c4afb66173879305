pub mod event;
pub mod handler_response;

pub use event::parse_event;
pub use handler_response::HandlerResponse;
