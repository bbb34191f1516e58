//! Errors raised by [`TabCollection`](crate::TabCollection) mutations.

use crate::collection::TabId;

/// Why a tab mutation was rejected.
///
/// None of these are fatal: a rejected mutation leaves the collection as it
/// was and the caller decides how to surface it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TabError {
    /// The candidate name is empty after trimming.
    #[error("tab name must not be empty")]
    EmptyName,
    /// Another tab already uses this name (compared case-insensitively).
    #[error("a tab named \"{0}\" already exists")]
    DuplicateName(String),
    /// Two seed tabs share an id.
    #[error("duplicate tab id {0}")]
    DuplicateId(TabId),
    /// A collection must hold at least one tab.
    #[error("tab collection must not be empty")]
    Empty,
    /// Removing the tab would leave the collection empty.
    #[error("the last remaining tab cannot be removed")]
    LastTab,
    /// Every tab id has already been handed out.
    #[error("no tab ids left")]
    IdsExhausted,
    /// The symbolic icon name is not part of the icon set.
    #[error("unknown icon name \"{0}\"")]
    UnknownIcon(String),
}
