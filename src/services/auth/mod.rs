pub mod credential;
pub mod decision;
pub mod factory;
pub mod inbound;

pub use decision::{Admission, AuthDecision, Rejection};
pub use factory::build_inbound_auth;
pub use inbound::InboundAuth;
