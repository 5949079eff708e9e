//! Core domain entities.
//!
//! Entities are plain data structures rebuilt on every query from the current
//! settings and query text; nothing is persisted.
//!
//! # Entity Types
//!
//! - [`BackendInstance`] - A Shlink host paired with its API key
//! - [`Settings`] - Raw newline-delimited hosts, keys and tags
//! - [`Query`] / [`QueryTerms`] - Host query and its parsed `url [shortcode] [title]`
//! - [`ShortenRequest`] / [`ShortenResult`] - Wire payloads of the creation endpoint
//! - [`ShortenJob`] - A deferred shortening bound to one instance

pub mod instance;
pub mod job;
pub mod query;
pub mod settings;
pub mod shorten;

pub use instance::{BackendInstance, SHORT_URLS_PATH, pair_instances};
pub use job::ShortenJob;
pub use query::{Query, QueryTerms};
pub use settings::Settings;
pub use shorten::{ShortenRequest, ShortenResult};
