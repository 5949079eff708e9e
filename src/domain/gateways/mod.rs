//! Gateway trait definitions for the domain layer.
//!
//! Gateways abstract the remote Shlink API the same way repositories abstract
//! storage: the trait lives here, implementations live in
//! `crate::infrastructure::http`, and `mockall` generates test doubles.

pub mod short_url_gateway;

pub use short_url_gateway::ShortUrlGateway;

#[cfg(test)]
pub use short_url_gateway::MockShortUrlGateway;
