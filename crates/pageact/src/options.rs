// Action options for Session methods
//
// Provides per-call configuration for click, fill, check, select, and attach
// actions. Every options struct carries a `wait` override; when unset, the
// session's configured default wait applies.

use std::time::Duration;

/// Click options
///
/// Configuration for `click_on()`, `click_link()`, and `click_button()`.
#[derive(Debug, Clone, Default)]
pub struct ClickOptions {
    /// Require the matched link's href to equal this value (links only)
    pub href: Option<String>,
    /// Match the locator value exactly rather than by substring
    pub exact: Option<bool>,
    /// Maximum time to wait for the element
    pub wait: Option<Duration>,
}

impl ClickOptions {
    /// Create a new builder for ClickOptions
    pub fn builder() -> ClickOptionsBuilder {
        ClickOptionsBuilder::default()
    }
}

/// Builder for ClickOptions
#[derive(Debug, Clone, Default)]
pub struct ClickOptionsBuilder {
    href: Option<String>,
    exact: Option<bool>,
    wait: Option<Duration>,
}

impl ClickOptionsBuilder {
    /// Require the matched link's href to equal this value
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Match the locator value exactly
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = Some(exact);
        self
    }

    /// Override the default wait for this call
    pub fn wait(mut self, wait: Duration) -> Self {
        self.wait = Some(wait);
        self
    }

    /// Build the ClickOptions
    pub fn build(self) -> ClickOptions {
        ClickOptions {
            href: self.href,
            exact: self.exact,
            wait: self.wait,
        }
    }
}

/// Fill options
///
/// Configuration for `fill_in()`. The `with` value is required; `fill_in`
/// raises [`Error::InvalidArgument`](crate::Error::InvalidArgument)
/// immediately when it is absent.
#[derive(Debug, Clone, Default)]
pub struct FillOptions {
    /// The value to write into the field
    pub with: Option<String>,
    /// Match the locator value exactly rather than by substring
    pub exact: Option<bool>,
    /// Maximum time to wait for the element
    pub wait: Option<Duration>,
}

impl FillOptions {
    /// Create a new builder for FillOptions
    pub fn builder() -> FillOptionsBuilder {
        FillOptionsBuilder::default()
    }

    /// Shorthand for options carrying only the value to fill in
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            with: Some(value.into()),
            ..Self::default()
        }
    }
}

/// Builder for FillOptions
#[derive(Debug, Clone, Default)]
pub struct FillOptionsBuilder {
    with: Option<String>,
    exact: Option<bool>,
    wait: Option<Duration>,
}

impl FillOptionsBuilder {
    /// Set the value to write into the field
    pub fn with(mut self, value: impl Into<String>) -> Self {
        self.with = Some(value.into());
        self
    }

    /// Match the locator value exactly
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = Some(exact);
        self
    }

    /// Override the default wait for this call
    pub fn wait(mut self, wait: Duration) -> Self {
        self.wait = Some(wait);
        self
    }

    /// Build the FillOptions
    pub fn build(self) -> FillOptions {
        FillOptions {
            with: self.with,
            exact: self.exact,
            wait: self.wait,
        }
    }
}

/// Check options
///
/// Configuration for `choose()`, `check()`, and `uncheck()`.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Match the locator value exactly rather than by substring
    pub exact: Option<bool>,
    /// Maximum time to wait for the element
    pub wait: Option<Duration>,
}

impl CheckOptions {
    /// Create a new builder for CheckOptions
    pub fn builder() -> CheckOptionsBuilder {
        CheckOptionsBuilder::default()
    }
}

/// Builder for CheckOptions
#[derive(Debug, Clone, Default)]
pub struct CheckOptionsBuilder {
    exact: Option<bool>,
    wait: Option<Duration>,
}

impl CheckOptionsBuilder {
    /// Match the locator value exactly
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = Some(exact);
        self
    }

    /// Override the default wait for this call
    pub fn wait(mut self, wait: Duration) -> Self {
        self.wait = Some(wait);
        self
    }

    /// Build the CheckOptions
    pub fn build(self) -> CheckOptions {
        CheckOptions {
            exact: self.exact,
            wait: self.wait,
        }
    }
}

/// Select options
///
/// Configuration for `select()` and `unselect()`. The `from` key names the
/// enclosing select box; it selects which collection to search and is never
/// forwarded as a filter on the option lookup itself.
#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    /// Locator value of the enclosing select box
    pub from: Option<String>,
    /// Match the option value exactly rather than by substring
    pub exact: Option<bool>,
    /// Maximum time to wait for the elements
    pub wait: Option<Duration>,
}

impl SelectOptions {
    /// Create a new builder for SelectOptions
    pub fn builder() -> SelectOptionsBuilder {
        SelectOptionsBuilder::default()
    }
}

/// Builder for SelectOptions
#[derive(Debug, Clone, Default)]
pub struct SelectOptionsBuilder {
    from: Option<String>,
    exact: Option<bool>,
    wait: Option<Duration>,
}

impl SelectOptionsBuilder {
    /// Name the enclosing select box
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Match the option value exactly
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = Some(exact);
        self
    }

    /// Override the default wait for this call
    pub fn wait(mut self, wait: Duration) -> Self {
        self.wait = Some(wait);
        self
    }

    /// Build the SelectOptions
    pub fn build(self) -> SelectOptions {
        SelectOptions {
            from: self.from,
            exact: self.exact,
            wait: self.wait,
        }
    }
}

/// Attach options
///
/// Configuration for `attach_file()`.
#[derive(Debug, Clone, Default)]
pub struct AttachOptions {
    /// Match the locator value exactly rather than by substring
    pub exact: Option<bool>,
    /// Maximum time to wait for the element
    pub wait: Option<Duration>,
}

impl AttachOptions {
    /// Create a new builder for AttachOptions
    pub fn builder() -> AttachOptionsBuilder {
        AttachOptionsBuilder::default()
    }
}

/// Builder for AttachOptions
#[derive(Debug, Clone, Default)]
pub struct AttachOptionsBuilder {
    exact: Option<bool>,
    wait: Option<Duration>,
}

impl AttachOptionsBuilder {
    /// Match the locator value exactly
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = Some(exact);
        self
    }

    /// Override the default wait for this call
    pub fn wait(mut self, wait: Duration) -> Self {
        self.wait = Some(wait);
        self
    }

    /// Build the AttachOptions
    pub fn build(self) -> AttachOptions {
        AttachOptions {
            exact: self.exact,
            wait: self.wait,
        }
    }
}
