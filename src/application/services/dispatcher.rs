//! Shortening dispatcher: one request against one Shlink instance.

use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::domain::entities::ShortenJob;
use crate::domain::gateways::ShortUrlGateway;
use crate::error::ShlinkError;

/// Executes [`ShortenJob`]s through a [`ShortUrlGateway`].
///
/// Each call is a single request with exactly two outcomes; there is no retry.
pub struct ShorteningDispatcher<G: ShortUrlGateway> {
    gateway: Arc<G>,
}

impl<G: ShortUrlGateway> ShorteningDispatcher<G> {
    /// Creates a new dispatcher.
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Creates a short URL for `job` and returns it.
    ///
    /// The request carries `tags` always, `customSlug` only with a shortcode, and
    /// `title` only when both shortcode and title are present.
    ///
    /// # Errors
    ///
    /// Returns [`ShlinkError::InvalidUrl`] if the long URL is not absolute, and
    /// [`ShlinkError::InvalidRequest`] for an empty shortcode or title.
    /// Propagates gateway errors unchanged ([`ShlinkError::Backend`],
    /// [`ShlinkError::MalformedResponse`], [`ShlinkError::Transport`]).
    pub async fn shorten(&self, job: &ShortenJob) -> Result<String, ShlinkError> {
        let request = job.to_request();
        request.validate().map_err(|errors| {
            if errors.field_errors().contains_key("long_url") {
                ShlinkError::InvalidUrl(job.long_url.clone())
            } else {
                ShlinkError::InvalidRequest(errors.to_string())
            }
        })?;

        info!(
            host = %job.instance.host,
            slug = request.custom_slug.as_deref().unwrap_or("<generated>"),
            "Creating short URL"
        );
        debug!(?request, "Short URL payload");

        match self
            .gateway
            .create_short_url(&job.instance, &request)
            .await
        {
            Ok(result) => {
                info!(short_url = %result.short_url, "Short URL created");
                Ok(result.short_url)
            }
            Err(e) => {
                warn!(code = e.code(), error = %e, "Short URL creation failed");
                Err(e)
            }
        }
    }

    /// Like [`Self::shorten`], but aborts the in-flight request when `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns [`ShlinkError::Cancelled`] if cancelled before Shlink answered,
    /// otherwise the errors of [`Self::shorten`].
    pub async fn shorten_cancellable(
        &self,
        job: &ShortenJob,
        cancel: &CancellationToken,
    ) -> Result<String, ShlinkError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!(host = %job.instance.host, "Short URL request cancelled");
                Err(ShlinkError::Cancelled)
            }
            result = self.shorten(job) => result,
        }
    }
}
