// Session - high-level page actions with auto-waiting
//
// One method per user intent. Each method shapes its arguments into a
// Locator plus a mutation, then hands the combined "locate, then act"
// closure to the Synchronizer. No method carries retry logic of its own, so
// timeout and backoff behavior is uniform across every action.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::backend::Backend;
use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::locator::{Filters, Locator, TargetKind};
use crate::options::{AttachOptions, CheckOptions, ClickOptions, FillOptions, SelectOptions};
use crate::sync::Synchronizer;

/// A session drives page actions against one backend.
///
/// Every action locates its target fresh on each retry attempt and tolerates
/// transient page states (element not rendered yet, detached mid-action,
/// momentarily ambiguous) up to the configured wait. Validation failures and
/// missing-file preconditions surface immediately and are never retried.
///
/// # Example
///
/// ```ignore
/// use pageact::{Session, SessionConfig, FillOptions, SelectOptions};
/// use std::sync::Arc;
///
/// # async fn demo(backend: Arc<dyn pageact::Backend>) -> pageact::Result<()> {
/// let session = Session::new(backend);
///
/// session.fill_in("Email", FillOptions::with_value("user@example.com")).await?;
/// session.check("I agree", Default::default()).await?;
/// session.select("March", SelectOptions::builder().from("Month").build()).await?;
/// session.click_button("Sign up", Default::default()).await?;
/// # Ok(())
/// # }
/// ```
pub struct Session {
    backend: Arc<dyn Backend>,
    config: SessionConfig,
    sync: Synchronizer,
}

impl Session {
    /// Creates a session with default configuration.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self::with_config(backend, SessionConfig::default())
    }

    /// Creates a session with the given configuration.
    pub fn with_config(backend: Arc<dyn Backend>, config: SessionConfig) -> Self {
        let sync = Synchronizer::new().with_poll_interval(config.poll_interval);
        Self {
            backend,
            config,
            sync,
        }
    }

    /// Returns the session's configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn resolve_wait(&self, wait: Option<Duration>) -> Duration {
        wait.unwrap_or(self.config.default_wait)
    }

    async fn click(&self, kind: TargetKind, value: &str, options: ClickOptions) -> Result<()> {
        let wait = self.resolve_wait(options.wait);
        let locator = Locator::with_filters(
            kind,
            value,
            Filters {
                href: options.href,
                exact: options.exact,
            },
        );
        let locator = &locator;
        self.sync
            .synchronize(wait, || async move {
                self.backend.find(locator).await?.click().await
            })
            .await
    }

    /// Clicks the link or button matching `value`.
    pub async fn click_on(&self, value: &str, options: ClickOptions) -> Result<()> {
        self.click(TargetKind::LinkOrButton, value, options).await
    }

    /// Clicks the link matching `value`, optionally constrained by an
    /// `href` filter.
    pub async fn click_link(&self, value: &str, options: ClickOptions) -> Result<()> {
        self.click(TargetKind::Link, value, options).await
    }

    /// Clicks the button matching `value`.
    pub async fn click_button(&self, value: &str, options: ClickOptions) -> Result<()> {
        self.click(TargetKind::Button, value, options).await
    }

    /// Fills the field matching `value` with `options.with`.
    ///
    /// Raises [`Error::InvalidArgument`] immediately when `options.with` is
    /// absent; the backend is never consulted in that case.
    pub async fn fill_in(&self, value: &str, options: FillOptions) -> Result<()> {
        let Some(text) = options.with else {
            return Err(Error::InvalidArgument(format!(
                "fill_in '{value}' requires a `with` value"
            )));
        };
        let wait = self.resolve_wait(options.wait);
        let locator = Locator::with_filters(
            TargetKind::FillableField,
            value,
            Filters {
                exact: options.exact,
                ..Filters::default()
            },
        );
        let locator = &locator;
        let text = text.as_str();
        self.sync
            .synchronize(wait, || async move {
                self.backend.find(locator).await?.set_value(text).await
            })
            .await
    }

    async fn set_checked(
        &self,
        kind: TargetKind,
        value: &str,
        checked: bool,
        options: CheckOptions,
    ) -> Result<()> {
        let wait = self.resolve_wait(options.wait);
        let locator = Locator::with_filters(
            kind,
            value,
            Filters {
                exact: options.exact,
                ..Filters::default()
            },
        );
        let locator = &locator;
        self.sync
            .synchronize(wait, || async move {
                self.backend.find(locator).await?.set_checked(checked).await
            })
            .await
    }

    /// Selects the radio button matching `value`.
    pub async fn choose(&self, value: &str, options: CheckOptions) -> Result<()> {
        self.set_checked(TargetKind::RadioButton, value, true, options)
            .await
    }

    /// Checks the checkbox matching `value`.
    ///
    /// Sets an absolute state, not a toggle: checking an already-checked box
    /// succeeds and leaves it checked.
    pub async fn check(&self, value: &str, options: CheckOptions) -> Result<()> {
        self.set_checked(TargetKind::Checkbox, value, true, options)
            .await
    }

    /// Unchecks the checkbox matching `value`.
    pub async fn uncheck(&self, value: &str, options: CheckOptions) -> Result<()> {
        self.set_checked(TargetKind::Checkbox, value, false, options)
            .await
    }

    async fn select_or_unselect(
        &self,
        value: &str,
        options: SelectOptions,
        select: bool,
    ) -> Result<()> {
        let wait = self.resolve_wait(options.wait);

        // `from` names the select box to search within. It is consumed here
        // and must not reappear as a filter on the option lookup, where the
        // backend would misread it as an option constraint.
        let from = options.from;
        let option_locator = Locator::with_filters(
            TargetKind::Option,
            value,
            Filters {
                exact: options.exact,
                ..Filters::default()
            },
        );
        let box_locator = from
            .as_deref()
            .map(|name| Locator::new(TargetKind::Select, name));

        let option_locator = &option_locator;
        let box_locator = box_locator.as_ref();
        self.sync
            .synchronize(wait, || async move {
                let option = match box_locator {
                    Some(select_box) => {
                        let select_box = self.backend.find(select_box).await?;
                        select_box.find_within(option_locator).await?
                    }
                    None => self.backend.find(option_locator).await?,
                };
                if select {
                    option.select_option().await
                } else {
                    option.unselect_option().await
                }
            })
            .await
    }

    /// Selects the option matching `value`, searching within the select box
    /// named by `options.from` when given.
    pub async fn select(&self, value: &str, options: SelectOptions) -> Result<()> {
        self.select_or_unselect(value, options, true).await
    }

    /// Deselects the option matching `value`, searching within the select
    /// box named by `options.from` when given.
    pub async fn unselect(&self, value: &str, options: SelectOptions) -> Result<()> {
        self.select_or_unselect(value, options, false).await
    }

    /// Attaches one or more files to the file field matching `value`.
    ///
    /// Every path must reference an existing file, checked eagerly before
    /// any element lookup: a missing file raises [`Error::FileNotFound`]
    /// immediately and is never retried, since waiting cannot make a file
    /// appear.
    pub async fn attach_file(
        &self,
        value: &str,
        paths: &[PathBuf],
        options: AttachOptions,
    ) -> Result<()> {
        if paths.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "attach_file '{value}' requires at least one path"
            )));
        }
        for path in paths {
            if !tokio::fs::try_exists(path).await.unwrap_or(false) {
                return Err(Error::FileNotFound(path.clone()));
            }
        }

        let wait = self.resolve_wait(options.wait);
        let locator = Locator::with_filters(
            TargetKind::FileField,
            value,
            Filters {
                exact: options.exact,
                ..Filters::default()
            },
        );
        let locator = &locator;
        self.sync
            .synchronize(wait, || async move {
                self.backend
                    .find(locator)
                    .await?
                    .set_input_files(paths)
                    .await
            })
            .await
    }
}
