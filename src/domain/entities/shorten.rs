//! Wire entities for the Shlink short URL creation endpoint.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

/// Body of `POST /rest/v3/short-urls`.
///
/// Optional fields are left out of the JSON entirely when absent; Shlink treats
/// an explicit `null` differently from a missing key.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[validate(url(message = "Invalid URL format"))]
    pub long_url: String,

    pub tags: Vec<String>,

    #[validate(length(min = 1, message = "Shortcode must not be empty"))]
    pub custom_slug: Option<String>,

    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
}

impl ShortenRequest {
    /// Builds a request from query terms.
    ///
    /// `title` is only sent together with a slug: the query grammar has no way
    /// to supply a title on its own, and a lone title is dropped here as well.
    pub fn new(
        long_url: impl Into<String>,
        tags: Vec<String>,
        shortcode: Option<String>,
        title: Option<String>,
    ) -> Self {
        let title = if shortcode.is_some() { title } else { None };

        Self {
            long_url: long_url.into(),
            tags,
            custom_slug: shortcode,
            title,
        }
    }
}

/// The part of Shlink's response we consume.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResult {
    pub short_url: String,
}
