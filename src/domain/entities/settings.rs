//! Plugin settings as edited by the user.

use super::instance::{BackendInstance, pair_instances};
use crate::error::ShlinkError;
use crate::utils::config_lines::split_config_lines;

/// Raw settings: three independently edited, newline-delimited text values.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub hosts: String,
    pub keys: String,
    pub tags: String,
}

impl Settings {
    /// Creates settings from raw multi-line values.
    pub fn new(
        hosts: impl Into<String>,
        keys: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            hosts: hosts.into(),
            keys: keys.into(),
            tags: tags.into(),
        }
    }

    pub fn host_lines(&self) -> Vec<String> {
        split_config_lines(&self.hosts)
    }

    pub fn key_lines(&self) -> Vec<String> {
        split_config_lines(&self.keys)
    }

    /// Tags attached to every created short URL, blank lines removed.
    pub fn tag_list(&self) -> Vec<String> {
        split_config_lines(&self.tags)
            .into_iter()
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// Resolves configured instances.
    ///
    /// # Errors
    ///
    /// See [`pair_instances`].
    pub fn instances(&self) -> Result<Vec<BackendInstance>, ShlinkError> {
        pair_instances(&self.host_lines(), &self.key_lines())
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys = format!("<{} keys>", self.key_lines().len());
        f.debug_struct("Settings")
            .field("hosts", &self.host_lines())
            .field("keys", &keys)
            .field("tags", &self.tag_list())
            .finish()
    }
}
