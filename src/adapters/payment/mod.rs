//! Payment gateway adapters.

mod mock_payment_gateway;
mod portone_gateway;

pub use mock_payment_gateway::MockPaymentGateway;
pub use portone_gateway::PortOneGateway;
