//! Domain layer containing entities and gateway contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Query, settings, instance and wire data structures
//! - [`gateways`] - Remote API trait definitions
//!
//! The domain layer has no dependency on the HTTP client or the plugin host;
//! behavior lives in [`crate::application::services`].

pub mod entities;
pub mod gateways;
