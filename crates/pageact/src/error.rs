// Error types for pageact

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::locator::TargetKind;

/// Result type alias for pageact operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when performing page actions.
///
/// The synchronizer distinguishes two classes of failure: transient errors
/// (`NotFound`, `Ambiguous`, `Stale`) are retried until the deadline, while
/// everything else is surfaced immediately. Backends signal which class a
/// failure belongs to by choosing the variant; any variant not explicitly
/// classified transient is fatal, so a misbehaving driver cannot disguise a
/// real bug as a timing issue.
#[derive(Debug, Error)]
pub enum Error {
    /// No element matched the locator
    ///
    /// Transient: the element may not have rendered yet. Retried until the
    /// wait deadline, after which it surfaces wrapped in [`Error::Timeout`].
    #[error("no element matched {kind} '{value}'")]
    NotFound { kind: TargetKind, value: String },

    /// More than one element matched the locator
    ///
    /// Transient: duplicate matches can be an artifact of a page mid-render
    /// (e.g. the old and new copy of a re-rendered node both present), so a
    /// retry may disambiguate once rendering settles.
    #[error("ambiguous match: {count} elements matched {kind} '{value}'")]
    Ambiguous {
        kind: TargetKind,
        value: String,
        count: usize,
    },

    /// The element is no longer attached to the document
    ///
    /// Transient: the handle was obtained before a re-render detached it.
    /// The locate step runs again on the next attempt, so the retry acts on
    /// the current element rather than the stale handle.
    #[error("element is no longer attached to the document")]
    Stale,

    /// Invalid argument provided to an action
    ///
    /// Fatal: caller input is malformed (e.g. `fill_in` without a value).
    /// Surfaced before the retry loop starts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A file path passed to `attach_file` does not exist
    ///
    /// Fatal precondition: checked eagerly before any element lookup, since
    /// waiting cannot make a file appear on disk.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The locator itself is malformed and can never match
    #[error("invalid locator: {0}")]
    InvalidLocator(String),

    /// Timed out waiting for an action to succeed
    ///
    /// Raised when the wait deadline elapses while only transient errors
    /// were observed. Wraps the last transient error for diagnostics.
    #[error("timed out after {elapsed:?}: {source}")]
    Timeout {
        elapsed: Duration,
        #[source]
        source: Box<Error>,
    },

    /// Any other failure reported by the backend driver
    #[error("backend error: {0}")]
    Backend(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if this failure is tied to page timing and eligible for
    /// retry within the wait deadline.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::NotFound { .. } | Error::Ambiguous { .. } | Error::Stale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        let not_found = Error::NotFound {
            kind: TargetKind::Button,
            value: "Save".to_string(),
        };
        let ambiguous = Error::Ambiguous {
            kind: TargetKind::Link,
            value: "Home".to_string(),
            count: 2,
        };
        assert!(not_found.is_transient());
        assert!(ambiguous.is_transient());
        assert!(Error::Stale.is_transient());

        assert!(!Error::InvalidArgument("missing value".to_string()).is_transient());
        assert!(!Error::FileNotFound(PathBuf::from("/tmp/missing.png")).is_transient());
        assert!(!Error::InvalidLocator("empty selector".to_string()).is_transient());
        assert!(!Error::Backend("session closed".to_string()).is_transient());
    }

    #[test]
    fn timeout_is_not_transient() {
        let err = Error::Timeout {
            elapsed: Duration::from_secs(2),
            source: Box::new(Error::Stale),
        };
        assert!(!err.is_transient());
    }

    #[test]
    fn timeout_carries_last_transient_error() {
        let err = Error::Timeout {
            elapsed: Duration::from_millis(2000),
            source: Box::new(Error::NotFound {
                kind: TargetKind::Checkbox,
                value: "Terms".to_string(),
            }),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("timed out"));
        assert!(rendered.contains("Terms"));
    }
}
