mod routing_request;
mod routing_response;
mod transportation_mode;

pub use routing_request::RoutingRequest;
pub use routing_response::{Journey, RouteElement, RoutingResponse};
pub use transportation_mode::TransportationMode;
