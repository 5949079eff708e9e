//! Runs result actions against the dispatcher and host collaborators.

use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::application::services::ShorteningDispatcher;
use crate::domain::entities::ShortenJob;
use crate::domain::gateways::ShortUrlGateway;
use crate::error::ShlinkError;

use super::host::{Clipboard, Notifier};
use super::result::{ActionExecutor, ActionKind};

/// Executes actions: shortens through the dispatcher, then copies the result.
///
/// On failure the error goes to the [`Notifier`] and nothing is copied. Each
/// invocation brings its own cancellation token, so aborting one request never
/// affects later selections.
pub struct HostActionExecutor<G: ShortUrlGateway> {
    dispatcher: Arc<ShorteningDispatcher<G>>,
    clipboard: Arc<dyn Clipboard>,
    notifier: Arc<dyn Notifier>,
}

impl<G: ShortUrlGateway> HostActionExecutor<G> {
    pub fn new(
        dispatcher: Arc<ShorteningDispatcher<G>>,
        clipboard: Arc<dyn Clipboard>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            dispatcher,
            clipboard,
            notifier,
        }
    }

    async fn shorten(&self, job: &ShortenJob, cancel: &CancellationToken) -> bool {
        let short_url = match self.dispatcher.shorten_cancellable(job, cancel).await {
            Ok(short_url) => short_url,
            Err(e) => {
                self.report(&e, &e.detail());
                return false;
            }
        };

        match self.clipboard.set_text(&short_url) {
            Ok(()) => {
                self.notifier
                    .show_message("Short URL copied to clipboard", &short_url);
                true
            }
            Err(e) => {
                // The short URL exists on Shlink now; it must still reach the user.
                self.report(&e, &format!("{}: {short_url}", e.detail()));
                false
            }
        }
    }

    fn report(&self, error: &ShlinkError, detail: &str) {
        // Request failures are already logged by the dispatcher.
        if error.is_request_failure() {
            debug!(code = error.code(), "Shortening action failed");
        } else {
            warn!(code = error.code(), error = %error, "Action failed");
        }
        self.notifier.show_error(error.title(), detail);
    }
}

#[async_trait]
impl<G: ShortUrlGateway + 'static> ActionExecutor for HostActionExecutor<G> {
    async fn execute(&self, action: &ActionKind, cancel: &CancellationToken) -> bool {
        match action {
            ActionKind::Shorten(job) => self.shorten(job, cancel).await,
            ActionKind::CopyText(text) => match self.clipboard.set_text(text) {
                Ok(()) => true,
                Err(e) => {
                    self.report(&e, &e.detail());
                    false
                }
            },
        }
    }
}
