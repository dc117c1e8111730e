// Backend contracts - the seams between this crate and a real driver
//
// The synchronization core is driver-agnostic: it only needs a way to
// resolve a Locator into an element handle and a small set of mutations on
// that handle. A concrete driver (CDP, WebDriver, an in-memory DOM for
// tests) implements these two traits and reports failures through the
// shared Error taxonomy so the synchronizer can classify them.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::Result;
use crate::locator::Locator;

/// Resolves locators against the current document.
///
/// `find` must match exactly one element: implementations raise
/// [`Error::NotFound`](crate::Error::NotFound) for zero matches and
/// [`Error::Ambiguous`](crate::Error::Ambiguous) for more than one, both of
/// which the synchronizer retries. A locator the driver cannot interpret at
/// all is [`Error::InvalidLocator`](crate::Error::InvalidLocator), which is
/// never retried.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Resolves the locator against the current document, returning a handle
    /// to the single matching element.
    async fn find(&self, locator: &Locator) -> Result<Box<dyn Element>>;
}

/// A handle to one live page element, valid for exactly one attempt.
///
/// Handles are never cached across retries: every attempt re-runs
/// [`Backend::find`], so a handle detached by a re-render is simply dropped
/// and replaced. Mutations on a detached handle raise
/// [`Error::Stale`](crate::Error::Stale), which the synchronizer retries
/// against a freshly resolved element.
#[async_trait]
pub trait Element: Send {
    /// Clicks the element.
    async fn click(&self) -> Result<()>;

    /// Replaces the element's value with the given text.
    async fn set_value(&self, value: &str) -> Result<()>;

    /// Sets a checkbox or radio button to an absolute state.
    ///
    /// This is not a toggle: setting an already-checked box to `true` is a
    /// no-op that succeeds.
    async fn set_checked(&self, checked: bool) -> Result<()>;

    /// Selects this option within its enclosing select box.
    async fn select_option(&self) -> Result<()>;

    /// Deselects this option within its enclosing select box.
    async fn unselect_option(&self) -> Result<()>;

    /// Sets the file path(s) on a file input element.
    async fn set_input_files(&self, paths: &[PathBuf]) -> Result<()>;

    /// Resolves a locator within this element's subtree.
    ///
    /// Used by the two-step `select`/`unselect` lookup to find an option
    /// inside an already-resolved select box. Same match-exactly-one
    /// contract as [`Backend::find`].
    async fn find_within(&self, locator: &Locator) -> Result<Box<dyn Element>>;
}
