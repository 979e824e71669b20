//! Article lifecycle states and transition rules.
//!
//! An article moves along exactly one forward path:
//! `not_selected` -> `pending` -> `completed`. Selection is idempotent,
//! only the rewrite engine completes an article, and `completed` is
//! terminal. There is no path back to `not_selected`: re-queueing an
//! article means resetting its row by hand.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical status string for an article awaiting selection.
pub const STATUS_NOT_SELECTED: &str = "not_selected";

/// Canonical status string for an article selected for rewriting.
pub const STATUS_PENDING: &str = "pending";

/// Canonical status string for an article whose rewrite is committed.
pub const STATUS_COMPLETED: &str = "completed";

/// Legacy spelling of [`STATUS_PENDING`] found in older databases.
pub const LEGACY_SELECTED_FOR_REWRITING: &str = "selected_for_rewriting";

/// Legacy spelling of [`STATUS_COMPLETED`] found in older databases.
pub const LEGACY_REWRITTEN: &str = "rewritten";

/// Lifecycle status of an article.
///
/// Stored as TEXT in the `articles.status` column. Parsing accepts the two
/// legacy spellings; only canonical values are ever written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewriteStatus {
    NotSelected,
    #[serde(alias = "selected_for_rewriting")]
    Pending,
    #[serde(alias = "rewritten")]
    Completed,
}

impl RewriteStatus {
    /// The canonical status string stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            RewriteStatus::NotSelected => STATUS_NOT_SELECTED,
            RewriteStatus::Pending => STATUS_PENDING,
            RewriteStatus::Completed => STATUS_COMPLETED,
        }
    }

    /// Whether no further automated transition occurs from this state.
    pub fn is_terminal(self) -> bool {
        matches!(self, RewriteStatus::Completed)
    }

    /// Whether a transition from `self` to `next` is permitted.
    ///
    /// Re-selecting a `pending` article is permitted and has no effect
    /// (selection is idempotent). Only the rewrite engine moves an article
    /// to `completed`, and only after the rewritten content is committed.
    pub fn can_transition_to(self, next: RewriteStatus) -> bool {
        use RewriteStatus::*;
        matches!(
            (self, next),
            (NotSelected, Pending) | (Pending, Pending) | (Pending, Completed)
        )
    }
}

impl fmt::Display for RewriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string matches no known vocabulary.
#[derive(Debug, thiserror::Error)]
#[error("Unknown article status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for RewriteStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_NOT_SELECTED => Ok(RewriteStatus::NotSelected),
            STATUS_PENDING | LEGACY_SELECTED_FOR_REWRITING => Ok(RewriteStatus::Pending),
            STATUS_COMPLETED | LEGACY_REWRITTEN => Ok(RewriteStatus::Completed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_round_trip() {
        for status in [
            RewriteStatus::NotSelected,
            RewriteStatus::Pending,
            RewriteStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<RewriteStatus>().unwrap(), status);
        }
    }

    #[test]
    fn legacy_spellings_parse_as_aliases() {
        assert_eq!(
            LEGACY_SELECTED_FOR_REWRITING.parse::<RewriteStatus>().unwrap(),
            RewriteStatus::Pending
        );
        assert_eq!(
            LEGACY_REWRITTEN.parse::<RewriteStatus>().unwrap(),
            RewriteStatus::Completed
        );
    }

    #[test]
    fn unknown_status_is_an_error() {
        let err = "queued".parse::<RewriteStatus>().unwrap_err();
        assert!(err.to_string().contains("queued"));
    }

    #[test]
    fn selection_is_permitted_from_not_selected_and_pending() {
        assert!(RewriteStatus::NotSelected.can_transition_to(RewriteStatus::Pending));
        assert!(RewriteStatus::Pending.can_transition_to(RewriteStatus::Pending));
        assert!(!RewriteStatus::Completed.can_transition_to(RewriteStatus::Pending));
    }

    #[test]
    fn only_pending_articles_complete() {
        assert!(RewriteStatus::Pending.can_transition_to(RewriteStatus::Completed));
        assert!(!RewriteStatus::NotSelected.can_transition_to(RewriteStatus::Completed));
        assert!(!RewriteStatus::Completed.can_transition_to(RewriteStatus::Completed));
    }

    #[test]
    fn no_path_back_to_not_selected() {
        assert!(!RewriteStatus::Pending.can_transition_to(RewriteStatus::NotSelected));
        assert!(!RewriteStatus::Completed.can_transition_to(RewriteStatus::NotSelected));
        assert!(!RewriteStatus::NotSelected.can_transition_to(RewriteStatus::NotSelected));
    }

    #[test]
    fn completed_is_terminal() {
        assert!(RewriteStatus::Completed.is_terminal());
        assert!(!RewriteStatus::NotSelected.is_terminal());
        assert!(!RewriteStatus::Pending.is_terminal());
    }
}
