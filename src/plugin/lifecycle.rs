//! Theme notifications with an explicit attach/detach lifecycle.
//!
//! The host owns a [`ThemeEvents`] per session. Observers attach and get a
//! [`Subscription`]; detaching happens at most once, whether through
//! [`Subscription::detach`] or on drop.

use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};
use tracing::debug;

const ICON_FOR_LIGHT_THEME: &str = "images/shlink-dark.png";
const ICON_FOR_DARK_THEME: &str = "images/shlink-light.png";

/// Host color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Icon asset contrasting with this theme.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => ICON_FOR_LIGHT_THEME,
            Theme::Dark => ICON_FOR_DARK_THEME,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}', expected 'light' or 'dark'")),
        }
    }
}

/// Receives theme changes.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeObserver: Send + Sync {
    fn on_theme_changed(&self, theme: Theme);
}

/// Current theme as seen by the plugin.
#[derive(Debug, Default)]
pub struct ThemeState {
    theme: RwLock<Theme>,
}

impl ThemeState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: RwLock::new(theme),
        }
    }

    pub fn current(&self) -> Theme {
        *self.theme.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn icon(&self) -> &'static str {
        self.current().icon()
    }
}

impl ThemeObserver for ThemeState {
    fn on_theme_changed(&self, theme: Theme) {
        *self.theme.write().unwrap_or_else(PoisonError::into_inner) = theme;
    }
}

/// Host-side theme event source for one session.
#[derive(Default)]
pub struct ThemeEvents {
    current: RwLock<Theme>,
    observers: Mutex<Vec<(u64, Arc<dyn ThemeObserver>)>>,
    next_id: AtomicU64,
}

impl ThemeEvents {
    pub fn new(theme: Theme) -> Arc<Self> {
        Arc::new(Self {
            current: RwLock::new(theme),
            ..Self::default()
        })
    }

    /// Registers `observer` and immediately reports the current theme to it.
    pub fn attach(self: &Arc<Self>, observer: Arc<dyn ThemeObserver>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        observer.on_theme_changed(self.current());

        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, observer));
        debug!(id, "Theme observer attached");

        Subscription {
            id,
            events: Arc::downgrade(self),
            detached: false,
        }
    }

    /// Removes the observer registered under `id`. Unknown ids are ignored.
    fn detach(&self, id: u64) {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(observer_id, _)| *observer_id != id);
        debug!(id, "Theme observer detached");
    }

    pub fn current(&self) -> Theme {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records the new theme and notifies every attached observer.
    pub fn notify(&self, theme: Theme) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = theme;

        // Observers are called outside the lock so they may attach or detach.
        let observers: Vec<_> = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        for observer in observers {
            observer.on_theme_changed(theme);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Handle to an attached observer.
#[must_use = "dropping a Subscription detaches the observer"]
pub struct Subscription {
    id: u64,
    events: Weak<ThemeEvents>,
    detached: bool,
}

impl Subscription {
    /// Detaches the observer. Later calls do nothing.
    pub fn detach(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;

        if let Some(events) = self.events.upgrade() {
            events.detach(self.id);
        }
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}
