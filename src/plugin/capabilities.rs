//! Capability traits a host can require from a plugin.

use crate::domain::entities::{Query, Settings};

use super::result::SelectableResult;

/// Answers search queries.
pub trait QueryProvider {
    fn query(&self, query: &Query) -> Vec<SelectableResult>;
}

/// Supplies secondary actions for a selected row.
pub trait ContextMenuProvider {
    fn context_menu(&self, selected: &SelectableResult) -> Vec<SelectableResult>;
}

/// Exposes editable settings.
pub trait SettingsProvider {
    fn settings(&self) -> Settings;

    fn update_settings(&self, settings: Settings);
}

/// Releases host subscriptions. Calling it more than once is harmless.
pub trait Disposable {
    fn dispose(&mut self);
}
