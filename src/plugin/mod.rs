//! Host-facing plugin surface.
//!
//! - [`ShlinkPlugin`] - the plugin object, composed of small capability traits
//! - [`SelectableResult`] / [`ResultAction`] - result rows and their deferred actions
//! - [`HostActionExecutor`] - runs actions against Shlink and the host collaborators
//! - [`ThemeEvents`] / [`Subscription`] - theme notifications with explicit detach
//! - [`Clipboard`] / [`Notifier`] - collaborators the host provides

mod capabilities;
mod executor;
mod host;
mod lifecycle;
mod result;
mod shlink_plugin;

pub use capabilities::{ContextMenuProvider, Disposable, QueryProvider, SettingsProvider};
pub use executor::HostActionExecutor;
pub use host::{Clipboard, Notifier};
pub use lifecycle::{Subscription, Theme, ThemeEvents, ThemeObserver, ThemeState};
pub use result::{ActionExecutor, ActionKind, ResultAction, SelectableResult};
pub use shlink_plugin::ShlinkPlugin;

#[cfg(test)]
pub use host::{MockClipboard, MockNotifier};
#[cfg(test)]
pub use result::MockActionExecutor;
