pub mod api_gateway;
pub mod error;
pub mod greeting;

pub use api_gateway::ApiGatewayResponse;
pub use error::AppError;
pub use greeting::{GreetingRequest, GreetingResponse};
