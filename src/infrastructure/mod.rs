//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Shlink REST client built on `reqwest`
//! - [`terminal`] - Clipboard and notifier collaborators for the terminal host

pub mod http;
pub mod terminal;
