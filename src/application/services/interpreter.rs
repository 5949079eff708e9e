//! Query interpreter: turns host queries into result rows.

use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::{Query, QueryTerms, Settings, ShortenJob};
use crate::error::ShlinkError;
use crate::plugin::{ActionExecutor, ActionKind, ResultAction, SelectableResult};
use crate::utils::url_shape::{capture_implicit_url, is_absolute_url};

/// Title of the usage hint row.
pub const USAGE_TITLE: &str = "Shorten a URL with Shlink";

/// Expected query shape, shown in the usage hint.
pub const USAGE_HINT: &str = "url [shortcode] [title]";

/// Parses queries and offers one shortening action per configured instance.
pub struct QueryInterpreter {
    executor: Arc<dyn ActionExecutor>,
}

impl QueryInterpreter {
    /// Creates an interpreter whose actions run on `executor`.
    pub fn new(executor: Arc<dyn ActionExecutor>) -> Self {
        Self { executor }
    }

    /// Interprets `query` against `settings`.
    ///
    /// # Decision order
    ///
    /// 1. Without the action keyword, the search text must look like
    ///    `scheme://rest`; otherwise nothing is returned.
    /// 2. No terms: a single usage hint with no action.
    /// 3. First term not an absolute URL: a single error row.
    /// 4. Shortcode is the second term; title the third, only with exactly three terms.
    /// 5. No hosts, host/key counts differ, or a host or key line is blank:
    ///    a single error row.
    /// 6. Otherwise one actionable row per instance.
    pub fn interpret(&self, query: &Query, settings: &Settings) -> Vec<SelectableResult> {
        let mut terms = query.terms.clone();

        if !query.has_explicit_keyword {
            let Some(captured) = capture_implicit_url(&query.search) else {
                return Vec::new();
            };
            if terms.is_empty() {
                terms.push(captured.to_string());
            }
        }

        let Some(parsed) = QueryTerms::from_terms(&terms) else {
            return vec![SelectableResult::info(USAGE_TITLE, USAGE_HINT)];
        };

        if terms.len() > 3 {
            debug!(count = terms.len(), "Ignoring terms beyond the shortcode");
        }

        if !is_absolute_url(&parsed.url) {
            return vec![SelectableResult::error(&ShlinkError::InvalidUrl(parsed.url))];
        }

        let instances = match settings.instances() {
            Ok(instances) => instances,
            Err(e) => {
                debug!(code = e.code(), "Settings do not yield usable instances");
                return vec![SelectableResult::error(&e)];
            }
        };

        let tags = settings.tag_list();
        let subtitle = describe_terms(&parsed);

        instances
            .into_iter()
            .map(|instance| {
                let title = format!("Shorten with {}", instance.domain());
                let job = ShortenJob {
                    long_url: parsed.url.clone(),
                    instance,
                    tags: tags.clone(),
                    shortcode: parsed.shortcode.clone(),
                    title: parsed.title.clone(),
                };
                let action = ResultAction::new(ActionKind::Shorten(job), self.executor.clone());
                SelectableResult::actionable(title, subtitle.clone(), action)
            })
            .collect()
    }
}

/// Subtitle stating which optional terms were supplied.
fn describe_terms(terms: &QueryTerms) -> String {
    match (&terms.shortcode, &terms.title) {
        (Some(code), Some(title)) => {
            format!("{} with shortcode '{code}' and title '{title}'", terms.url)
        }
        (Some(code), None) => format!("{} with shortcode '{code}'", terms.url),
        _ => format!("{} with a generated shortcode", terms.url),
    }
}
