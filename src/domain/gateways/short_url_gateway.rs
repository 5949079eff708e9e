//! Gateway trait for creating short URLs on a Shlink instance.

use crate::domain::entities::{BackendInstance, ShortenRequest, ShortenResult};
use crate::error::ShlinkError;
use async_trait::async_trait;

/// Remote interface of a Shlink instance.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ShlinkHttpClient`] - REST API v3 over HTTP
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/http_client.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlGateway: Send + Sync {
    /// Creates a short URL on `instance`.
    ///
    /// # Errors
    ///
    /// Returns [`ShlinkError::Backend`] with the raw body on a non-2xx status.
    /// Returns [`ShlinkError::MalformedResponse`] if a 2xx body has no usable `shortUrl`.
    /// Returns [`ShlinkError::Transport`] if the instance could not be reached.
    async fn create_short_url(
        &self,
        instance: &BackendInstance,
        request: &ShortenRequest,
    ) -> Result<ShortenResult, ShlinkError>;
}
