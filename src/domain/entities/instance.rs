//! Backend instance entity: one Shlink endpoint and its API key.

use crate::error::ShlinkError;
use crate::utils::extract_domain::extract_domain;

/// Path of the short URL creation endpoint, relative to the instance host.
pub const SHORT_URLS_PATH: &str = "/rest/v3/short-urls";

/// A configured Shlink instance.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendInstance {
    pub host: String,
    pub api_key: String,
}

impl BackendInstance {
    /// Creates a new backend instance.
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_key: api_key.into(),
        }
    }

    /// Domain shown to the user when choosing between instances.
    pub fn domain(&self) -> String {
        extract_domain(&self.host)
    }

    /// Full URL of the short URL creation endpoint.
    pub fn short_urls_endpoint(&self) -> String {
        format!("{}{}", self.host.trim_end_matches('/'), SHORT_URLS_PATH)
    }
}

// API keys must never reach logs.
impl std::fmt::Debug for BackendInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendInstance")
            .field("host", &self.host)
            .field("api_key", &"***")
            .finish()
    }
}

/// Pairs hosts with API keys by line position.
///
/// # Errors
///
/// Returns [`ShlinkError::NoInstancesConfigured`] if `hosts` is empty.
/// Returns [`ShlinkError::MismatchedHostsAndKeys`] if the counts differ; no
/// partial pairing is attempted.
/// Returns [`ShlinkError::IncompleteInstance`] for the first line whose host or
/// key is blank.
pub fn pair_instances(
    hosts: &[String],
    keys: &[String],
) -> Result<Vec<BackendInstance>, ShlinkError> {
    if hosts.is_empty() {
        return Err(ShlinkError::NoInstancesConfigured);
    }

    if hosts.len() != keys.len() {
        return Err(ShlinkError::MismatchedHostsAndKeys {
            hosts: hosts.len(),
            keys: keys.len(),
        });
    }

    if let Some(index) = hosts
        .iter()
        .zip(keys)
        .position(|(host, key)| host.is_empty() || key.is_empty())
    {
        return Err(ShlinkError::IncompleteInstance { line: index + 1 });
    }

    Ok(hosts
        .iter()
        .zip(keys)
        .map(|(host, key)| BackendInstance::new(host.clone(), key.clone()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_endpoint_joins_path() {
        let instance = BackendInstance::new("https://s.io", "K");
        assert_eq!(
            instance.short_urls_endpoint(),
            "https://s.io/rest/v3/short-urls"
        );
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let instance = BackendInstance::new("https://s.io/", "K");
        assert_eq!(
            instance.short_urls_endpoint(),
            "https://s.io/rest/v3/short-urls"
        );
    }

    #[test]
    fn test_domain() {
        let instance = BackendInstance::new("https://links.example.com/", "K");
        assert_eq!(instance.domain(), "links.example.com");
    }

    #[test]
    fn test_debug_masks_api_key() {
        let instance = BackendInstance::new("https://s.io", "super-secret");
        let debug = format!("{instance:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("https://s.io"));
    }

    #[test]
    fn test_pair_instances_by_position() {
        let instances = pair_instances(
            &strings(&["https://a.io", "https://b.io"]),
            &strings(&["KA", "KB"]),
        )
        .unwrap();

        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0], BackendInstance::new("https://a.io", "KA"));
        assert_eq!(instances[1], BackendInstance::new("https://b.io", "KB"));
    }

    #[test]
    fn test_pair_instances_empty_hosts() {
        let result = pair_instances(&[], &strings(&["K"]));
        assert_eq!(result, Err(ShlinkError::NoInstancesConfigured));
    }

    #[test]
    fn test_pair_instances_mismatched() {
        let result = pair_instances(&strings(&["https://a.io", "https://b.io"]), &strings(&["K"]));
        assert_eq!(
            result,
            Err(ShlinkError::MismatchedHostsAndKeys { hosts: 2, keys: 1 })
        );
    }

    #[test]
    fn test_pair_instances_blank_host_line() {
        let result = pair_instances(
            &strings(&["https://a.io", "", "https://c.io"]),
            &strings(&["KA", "KB", "KC"]),
        );
        assert_eq!(result, Err(ShlinkError::IncompleteInstance { line: 2 }));
    }

    #[test]
    fn test_pair_instances_blank_key_line() {
        let result = pair_instances(
            &strings(&["https://a.io", "https://b.io"]),
            &strings(&["", "KB"]),
        );
        assert_eq!(result, Err(ShlinkError::IncompleteInstance { line: 1 }));
    }
}
