//! The plugin object handed to the host.

use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

use crate::application::services::QueryInterpreter;
use crate::domain::entities::{Query, Settings};

use super::capabilities::{ContextMenuProvider, Disposable, QueryProvider, SettingsProvider};
use super::lifecycle::{Subscription, Theme, ThemeEvents, ThemeState};
use super::result::{ActionExecutor, ActionKind, ResultAction, SelectableResult};

/// Shlink plugin: one instance serves one host session.
pub struct ShlinkPlugin {
    interpreter: QueryInterpreter,
    executor: Arc<dyn ActionExecutor>,
    settings: RwLock<Settings>,
    theme: Arc<ThemeState>,
    subscription: Option<Subscription>,
}

impl ShlinkPlugin {
    /// Creates a plugin whose actions run on `executor`.
    pub fn new(settings: Settings, executor: Arc<dyn ActionExecutor>) -> Self {
        Self {
            interpreter: QueryInterpreter::new(executor.clone()),
            executor,
            settings: RwLock::new(settings),
            theme: Arc::new(ThemeState::default()),
            subscription: None,
        }
    }

    /// Follows the host's theme to pick the result icon.
    ///
    /// Replaces (and detaches) any previous subscription.
    pub fn attach_theme_events(&mut self, events: &Arc<ThemeEvents>) {
        if let Some(mut previous) = self.subscription.take() {
            previous.detach();
        }
        self.subscription = Some(events.attach(self.theme.clone()));
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    fn with_icon(&self, mut results: Vec<SelectableResult>) -> Vec<SelectableResult> {
        let icon = self.theme.icon();
        for result in &mut results {
            result.icon = icon.to_string();
        }
        results
    }
}

impl QueryProvider for ShlinkPlugin {
    fn query(&self, query: &Query) -> Vec<SelectableResult> {
        let settings = self
            .settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let results = self.interpreter.interpret(query, &settings);
        debug!(count = results.len(), "Query interpreted");
        self.with_icon(results)
    }
}

impl ContextMenuProvider for ShlinkPlugin {
    fn context_menu(&self, selected: &SelectableResult) -> Vec<SelectableResult> {
        let Some(job) = selected.action.as_ref().and_then(ResultAction::job) else {
            return Vec::new();
        };

        let mut entries = vec![SelectableResult::actionable(
            "Copy long URL",
            job.long_url.clone(),
            ResultAction::new(
                ActionKind::CopyText(job.long_url.clone()),
                self.executor.clone(),
            ),
        )];

        if !job.tags.is_empty() {
            entries.push(SelectableResult::actionable(
                "Shorten without tags",
                format!("Skip tags: {}", job.tags.join(", ")),
                ResultAction::new(
                    ActionKind::Shorten(job.without_tags()),
                    self.executor.clone(),
                ),
            ));
        }

        self.with_icon(entries)
    }
}

impl SettingsProvider for ShlinkPlugin {
    fn settings(&self) -> Settings {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update_settings(&self, settings: Settings) {
        info!(hosts = settings.host_lines().len(), "Settings updated");
        *self.settings.write().unwrap_or_else(PoisonError::into_inner) = settings;
    }
}

impl Disposable for ShlinkPlugin {
    fn dispose(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.detach();
            debug!("Plugin disposed");
        }
    }
}

impl Drop for ShlinkPlugin {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::MockActionExecutor;

    fn plugin(settings: Settings) -> ShlinkPlugin {
        ShlinkPlugin::new(settings, Arc::new(MockActionExecutor::new()))
    }

    fn tagged_settings() -> Settings {
        Settings::new("https://s.io", "K", "work")
    }

    #[test]
    fn test_query_uses_theme_icon() {
        let mut plugin = plugin(tagged_settings());
        let events = ThemeEvents::new(Theme::Dark);
        plugin.attach_theme_events(&events);

        let results = plugin.query(&Query::with_keyword("https://example.com"));
        assert_eq!(results[0].icon, Theme::Dark.icon());

        events.notify(Theme::Light);
        let results = plugin.query(&Query::with_keyword("https://example.com"));
        assert_eq!(results[0].icon, Theme::Light.icon());
    }

    #[test]
    fn test_update_settings_applies_to_next_query() {
        let plugin = plugin(Settings::default());
        let query = Query::with_keyword("https://example.com");

        assert!(!plugin.query(&query)[0].is_actionable());

        plugin.update_settings(Settings::new("https://a.io\nhttps://b.io", "KA\nKB", ""));
        assert_eq!(plugin.query(&query).len(), 2);
        assert_eq!(plugin.settings().keys, "KA\nKB");
    }

    #[test]
    fn test_context_menu_for_shorten_row() {
        let plugin = plugin(tagged_settings());
        let results = plugin.query(&Query::with_keyword("https://example.com code"));

        let menu = plugin.context_menu(&results[0]);
        assert_eq!(menu.len(), 2);
        assert_eq!(
            menu[0].action.as_ref().map(ResultAction::kind),
            Some(&ActionKind::CopyText("https://example.com".to_string()))
        );

        let untagged = menu[1].action.as_ref().and_then(ResultAction::job).unwrap();
        assert!(untagged.tags.is_empty());
        assert_eq!(untagged.shortcode.as_deref(), Some("code"));
    }

    #[test]
    fn test_context_menu_without_tags() {
        let plugin = plugin(Settings::new("https://s.io", "K", ""));
        let results = plugin.query(&Query::with_keyword("https://example.com"));
        assert_eq!(plugin.context_menu(&results[0]).len(), 1);
    }

    #[test]
    fn test_context_menu_for_info_row_is_empty() {
        let plugin = plugin(tagged_settings());
        let results = plugin.query(&Query::with_keyword(""));
        assert!(plugin.context_menu(&results[0]).is_empty());
    }

    #[test]
    fn test_dispose_detaches_once() {
        let mut plugin = plugin(tagged_settings());
        let events = ThemeEvents::new(Theme::Light);
        plugin.attach_theme_events(&events);
        assert_eq!(events.observer_count(), 1);

        plugin.dispose();
        plugin.dispose();
        assert_eq!(events.observer_count(), 0);

        events.notify(Theme::Dark);
        assert_eq!(plugin.theme(), Theme::Light);
    }

    #[test]
    fn test_reattach_replaces_subscription() {
        let mut plugin = plugin(tagged_settings());
        let events = ThemeEvents::new(Theme::Light);

        plugin.attach_theme_events(&events);
        plugin.attach_theme_events(&events);

        assert_eq!(events.observer_count(), 1);
    }

    #[test]
    fn test_drop_detaches() {
        let events = ThemeEvents::new(Theme::Light);
        {
            let mut plugin = plugin(tagged_settings());
            plugin.attach_theme_events(&events);
        }
        assert_eq!(events.observer_count(), 0);
    }
}
