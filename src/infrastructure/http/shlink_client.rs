//! HTTP implementation of the short URL gateway (Shlink REST API v3).

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::entities::{BackendInstance, ShortenRequest, ShortenResult};
use crate::domain::gateways::ShortUrlGateway;
use crate::error::ShlinkError;

/// Header carrying the instance API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Shlink client backed by a shared `reqwest` connection pool.
///
/// The timeout covers the whole request, from connect to the end of the body.
#[derive(Clone)]
pub struct ShlinkHttpClient {
    client: Client,
}

impl ShlinkHttpClient {
    /// Creates a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ShlinkError::Transport`] if the TLS backend fails to initialize.
    pub fn new(timeout: Duration) -> Result<Self, ShlinkError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("shlink-launcher/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ShlinkError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ShortUrlGateway for ShlinkHttpClient {
    async fn create_short_url(
        &self,
        instance: &BackendInstance,
        request: &ShortenRequest,
    ) -> Result<ShortenResult, ShlinkError> {
        let endpoint = instance.short_urls_endpoint();
        debug!(%endpoint, "POST short URL");

        let response = self
            .client
            .post(&endpoint)
            .header(API_KEY_HEADER, &instance.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            // The status is the error; an unreadable body must not replace it.
            let body = response.text().await.unwrap_or_else(|e| {
                debug!(error = %e, "Could not read error response body");
                String::new()
            });
            warn!(%endpoint, status = status.as_u16(), "Shlink rejected short URL request");
            return Err(ShlinkError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        parse_short_url_body(&body)
    }
}

/// Parses a 2xx response body.
fn parse_short_url_body(body: &str) -> Result<ShortenResult, ShlinkError> {
    let result: ShortenResult = serde_json::from_str(body)
        .map_err(|e| ShlinkError::MalformedResponse(format!("invalid JSON body: {e}")))?;

    if result.short_url.trim().is_empty() {
        return Err(ShlinkError::MalformedResponse(
            "shortUrl is empty".to_string(),
        ));
    }

    Ok(result)
}
