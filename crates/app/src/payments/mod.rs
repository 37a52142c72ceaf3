//! Payments
//!
//! Payment-intent creation against an external gateway, fed by the cart
//! pricer. The gateway protocol itself stays behind [`PaymentGateway`].

pub mod errors;
pub mod gateway;
pub mod service;

pub use errors::{PaymentGatewayError, PaymentsServiceError};
pub use gateway::*;
pub use service::*;
