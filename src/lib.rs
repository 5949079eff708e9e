//! # Shlink Launcher
//!
//! Launcher plugin core for creating short URLs on one or more
//! [Shlink](https://shlink.io) instances, plus a terminal host to drive it.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the remote gateway trait
//! - **Application Layer** ([`application`]) - Query interpreter and shortening dispatcher
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` Shlink client, terminal collaborators
//! - **Plugin Layer** ([`plugin`]) - Host-facing capabilities, result rows, theme lifecycle
//!
//! ## Flow
//!
//! 1. The host passes a [`Query`](domain::entities::Query) to [`plugin::QueryProvider::query`]
//! 2. The interpreter returns one row per configured instance (or a hint/error row)
//! 3. The user picks a row; the host calls its [`plugin::ResultAction::invoke`]
//! 4. The dispatcher POSTs to `{host}/rest/v3/short-urls`; the short URL is copied
//!
//! ## Query grammar
//!
//! ```text
//! url [shortcode] [title]
//! ```
//!
//! A title can only be given together with a shortcode.
//!
//! ## Configuration
//!
//! The terminal host reads its settings from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod plugin;
pub mod utils;

pub use error::ShlinkError;
pub use plugin::ShlinkPlugin;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{QueryInterpreter, ShorteningDispatcher};
    pub use crate::domain::entities::{BackendInstance, Query, Settings, ShortenJob};
    pub use crate::error::ShlinkError;
    pub use crate::infrastructure::http::ShlinkHttpClient;
    pub use crate::plugin::{
        ActionKind, Clipboard, ContextMenuProvider, Disposable, HostActionExecutor, Notifier,
        QueryProvider, SelectableResult, SettingsProvider, ShlinkPlugin, Theme, ThemeEvents,
    };
}
