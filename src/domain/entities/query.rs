//! Query entities: what the host hands us, and the terms parsed from it.

/// A query as delivered by the host.
///
/// `terms` excludes the action keyword when one was typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub search: String,
    pub has_explicit_keyword: bool,
    pub terms: Vec<String>,
}

impl Query {
    /// Query typed after the plugin's action keyword.
    pub fn with_keyword(search: impl Into<String>) -> Self {
        Self::tokenize(search.into(), true)
    }

    /// Query reaching the plugin through global matching.
    pub fn implicit(search: impl Into<String>) -> Self {
        Self::tokenize(search.into(), false)
    }

    fn tokenize(search: String, has_explicit_keyword: bool) -> Self {
        let terms = search.split_whitespace().map(str::to_string).collect();
        Self {
            search,
            has_explicit_keyword,
            terms,
        }
    }
}

/// `url [shortcode] [title]` as parsed from query terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerms {
    pub url: String,
    pub shortcode: Option<String>,
    pub title: Option<String>,
}

impl QueryTerms {
    /// Parses terms positionally. Returns `None` for an empty slice.
    ///
    /// Two terms are always `[url, shortcode]`. A title is recognised only when
    /// exactly three terms are given; a title without a shortcode cannot be
    /// expressed.
    pub fn from_terms(terms: &[String]) -> Option<Self> {
        let url = terms.first()?.clone();
        let shortcode = terms.get(1).cloned();
        let title = if terms.len() == 3 {
            terms.get(2).cloned()
        } else {
            None
        };

        Some(Self {
            url,
            shortcode,
            title,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_with_keyword_tokenizes() {
        let query = Query::with_keyword("https://example.com  code\ttitle");
        assert!(query.has_explicit_keyword);
        assert_eq!(query.terms, terms(&["https://example.com", "code", "title"]));
    }

    #[test]
    fn test_implicit_keeps_search_text() {
        let query = Query::implicit("https://example.com");
        assert!(!query.has_explicit_keyword);
        assert_eq!(query.search, "https://example.com");
        assert_eq!(query.terms, terms(&["https://example.com"]));
    }

    #[test]
    fn test_terms_empty() {
        assert_eq!(QueryTerms::from_terms(&[]), None);
    }

    #[test]
    fn test_terms_url_only() {
        let parsed = QueryTerms::from_terms(&terms(&["https://example.com"])).unwrap();
        assert_eq!(parsed.url, "https://example.com");
        assert!(parsed.shortcode.is_none());
        assert!(parsed.title.is_none());
    }

    #[test]
    fn test_two_terms_are_url_and_shortcode() {
        let parsed = QueryTerms::from_terms(&terms(&["https://example.com", "code"])).unwrap();
        assert_eq!(parsed.shortcode.as_deref(), Some("code"));
        assert!(parsed.title.is_none());
    }

    #[test]
    fn test_three_terms_include_title() {
        let parsed =
            QueryTerms::from_terms(&terms(&["https://example.com", "code", "title"])).unwrap();
        assert_eq!(parsed.shortcode.as_deref(), Some("code"));
        assert_eq!(parsed.title.as_deref(), Some("title"));
    }

    #[test]
    fn test_four_terms_drop_title() {
        let parsed =
            QueryTerms::from_terms(&terms(&["https://example.com", "code", "a", "b"])).unwrap();
        assert_eq!(parsed.shortcode.as_deref(), Some("code"));
        assert!(parsed.title.is_none());
    }
}
