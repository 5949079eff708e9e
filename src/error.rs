//! Error taxonomy shared by the interpreter, dispatcher and action layer.
//!
//! Interpreter errors are rendered as inline result rows; dispatcher and
//! action errors are handed to the host's [`Notifier`](crate::plugin::Notifier).
//! Nothing here is retried.

use thiserror::Error;

/// Every failure the plugin can report to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShlinkError {
    /// The URL term is not an absolute URI.
    #[error("Please enter a valid URL")]
    InvalidUrl(String),

    #[error("No Shlink instances configured")]
    NoInstancesConfigured,

    /// Hosts and API keys are paired by line; the counts must agree.
    #[error("Mismatched hosts and API keys ({hosts} hosts, {keys} keys)")]
    MismatchedHostsAndKeys { hosts: usize, keys: usize },

    /// A host or API key line is blank. `line` is 1-based.
    #[error("Blank host or API key on line {line}")]
    IncompleteInstance { line: usize },

    /// Request fields other than the URL failed validation.
    #[error("Invalid short URL request: {0}")]
    InvalidRequest(String),

    /// Non-2xx response. `body` is the raw response text.
    #[error("Shlink returned HTTP {status}: {body}")]
    Backend { status: u16, body: String },

    /// 2xx response without a usable `shortUrl`.
    #[error("Malformed response from Shlink: {0}")]
    MalformedResponse(String),

    #[error("Request to Shlink failed: {0}")]
    Transport(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Failed to write to clipboard: {0}")]
    Clipboard(String),
}

impl ShlinkError {
    /// Stable machine-readable code, used in logs and JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            ShlinkError::InvalidUrl(_) => "invalid_url",
            ShlinkError::NoInstancesConfigured => "no_instances",
            ShlinkError::MismatchedHostsAndKeys { .. } => "mismatched_hosts_and_keys",
            ShlinkError::IncompleteInstance { .. } => "incomplete_instance",
            ShlinkError::InvalidRequest(_) => "invalid_request",
            ShlinkError::Backend { .. } => "backend_error",
            ShlinkError::MalformedResponse(_) => "malformed_response",
            ShlinkError::Transport(_) => "transport_error",
            ShlinkError::Cancelled => "cancelled",
            ShlinkError::Clipboard(_) => "clipboard_error",
        }
    }

    /// Short headline for a result row or dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            ShlinkError::InvalidUrl(_) => "Please enter a valid URL",
            ShlinkError::NoInstancesConfigured => "No Shlink instances configured",
            ShlinkError::MismatchedHostsAndKeys { .. } => "Mismatched hosts and API keys",
            ShlinkError::IncompleteInstance { .. } => "Incomplete Shlink instance",
            ShlinkError::InvalidRequest(_) => "Invalid short URL request",
            ShlinkError::Backend { .. } => "Shlink rejected the request",
            ShlinkError::MalformedResponse(_) => "Unexpected response from Shlink",
            ShlinkError::Transport(_) => "Could not reach Shlink",
            ShlinkError::Cancelled => "Request cancelled",
            ShlinkError::Clipboard(_) => "Could not copy to clipboard",
        }
    }

    /// Detail line shown below [`Self::title`].
    pub fn detail(&self) -> String {
        match self {
            ShlinkError::InvalidUrl(input) => format!("'{input}' is not an absolute URL"),
            ShlinkError::NoInstancesConfigured => {
                "Add at least one host and API key in the plugin settings".to_string()
            }
            ShlinkError::MismatchedHostsAndKeys { hosts, keys } => format!(
                "Each host needs an API key on the same line ({hosts} hosts, {keys} keys)"
            ),
            ShlinkError::IncompleteInstance { line } => {
                format!("Line {line} needs both a host and an API key")
            }
            ShlinkError::Backend { body, .. } => body.clone(),
            ShlinkError::InvalidRequest(reason)
            | ShlinkError::MalformedResponse(reason)
            | ShlinkError::Transport(reason)
            | ShlinkError::Clipboard(reason) => reason.clone(),
            ShlinkError::Cancelled => "The request was aborted before Shlink answered".to_string(),
        }
    }

    /// Errors raised by the remote call, as opposed to local input or settings problems.
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            ShlinkError::Backend { .. }
                | ShlinkError::MalformedResponse(_)
                | ShlinkError::Transport(_)
                | ShlinkError::Cancelled
        )
    }
}

impl From<reqwest::Error> for ShlinkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ShlinkError::Transport("request timed out".to_string())
        } else if e.is_connect() {
            ShlinkError::Transport(format!("connection failed: {e}"))
        } else {
            ShlinkError::Transport(e.to_string())
        }
    }
}
