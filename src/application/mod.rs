//! Application layer services.
//!
//! Services consume domain entities and gateway traits and expose the two
//! operations the plugin is built around.
//!
//! # Available Services
//!
//! - [`services::interpreter::QueryInterpreter`] - Query parsing and per-instance fan-out
//! - [`services::dispatcher::ShorteningDispatcher`] - Single short URL creation request

pub mod services;
