//! Collaborators provided by the host environment.

use crate::error::ShlinkError;

/// Writes text to the user's clipboard.
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ShlinkError::Clipboard`] if the host could not take the text.
    fn set_text(&self, text: &str) -> Result<(), ShlinkError>;
}

/// Shows messages outside the result list (dialogs, toasts, stderr).
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn show_message(&self, title: &str, message: &str);

    fn show_error(&self, title: &str, message: &str);
}
