//! Result rows returned to the host and the actions bound to them.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::domain::entities::ShortenJob;
use crate::error::ShlinkError;

use super::lifecycle::Theme;

/// What a result row does when selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    /// Create a short URL and copy it.
    Shorten(ShortenJob),
    /// Copy a fixed text.
    CopyText(String),
}

/// Runs [`ActionKind`]s on behalf of result rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    /// Runs `action`, aborting its request if `cancel` fires.
    ///
    /// Returns `true` if the host should close the result list.
    async fn execute(&self, action: &ActionKind, cancel: &CancellationToken) -> bool;
}

/// A zero-argument deferred action attached to a result row.
#[derive(Clone)]
pub struct ResultAction {
    kind: ActionKind,
    executor: Arc<dyn ActionExecutor>,
}

impl ResultAction {
    pub fn new(kind: ActionKind, executor: Arc<dyn ActionExecutor>) -> Self {
        Self { kind, executor }
    }

    #[cfg(test)]
    pub(crate) fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// The bound shortening job, if this is a shortening action.
    pub fn job(&self) -> Option<&ShortenJob> {
        match &self.kind {
            ActionKind::Shorten(job) => Some(job),
            ActionKind::CopyText(_) => None,
        }
    }

    /// Runs the action. Returns `true` if the host should close the result list.
    pub async fn invoke(&self) -> bool {
        self.invoke_with(&CancellationToken::new()).await
    }

    /// Runs the action; `cancel` aborts only this invocation.
    pub async fn invoke_with(&self, cancel: &CancellationToken) -> bool {
        self.executor.execute(&self.kind, cancel).await
    }
}

impl fmt::Debug for ResultAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultAction")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// One row in the host's result list.
#[derive(Debug, Clone)]
pub struct SelectableResult {
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub action: Option<ResultAction>,
}

impl SelectableResult {
    /// Informational row with no action.
    pub fn info(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            icon: Theme::default().icon().to_string(),
            action: None,
        }
    }

    /// Non-actionable row describing an error.
    pub fn error(error: &ShlinkError) -> Self {
        Self::info(error.title(), error.detail())
    }

    /// Row bound to `action`.
    pub fn actionable(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        action: ResultAction,
    ) -> Self {
        Self {
            action: Some(action),
            ..Self::info(title, subtitle)
        }
    }

    pub fn is_actionable(&self) -> bool {
        self.action.is_some()
    }

    /// Runs the bound action. Rows without one leave the list open.
    pub async fn invoke(&self) -> bool {
        self.invoke_with(&CancellationToken::new()).await
    }

    /// Like [`Self::invoke`], with a token that aborts this invocation only.
    pub async fn invoke_with(&self, cancel: &CancellationToken) -> bool {
        match &self.action {
            Some(action) => action.invoke_with(cancel).await,
            None => false,
        }
    }
}
