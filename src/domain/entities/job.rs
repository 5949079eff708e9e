//! A pending shortening: everything the dispatcher needs for one instance.

use super::instance::BackendInstance;
use super::shorten::ShortenRequest;

/// One deferred call to a Shlink instance, bound to a result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenJob {
    pub long_url: String,
    pub instance: BackendInstance,
    pub tags: Vec<String>,
    pub shortcode: Option<String>,
    pub title: Option<String>,
}

impl ShortenJob {
    /// Wire request for this job.
    pub fn to_request(&self) -> ShortenRequest {
        ShortenRequest::new(
            self.long_url.clone(),
            self.tags.clone(),
            self.shortcode.clone(),
            self.title.clone(),
        )
    }

    /// Same job with no tags attached.
    pub fn without_tags(&self) -> Self {
        Self {
            tags: Vec::new(),
            ..self.clone()
        }
    }
}
