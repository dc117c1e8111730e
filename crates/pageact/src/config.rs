// Session configuration
//
// Process-wide defaults are reduced to this one read-only value bundle,
// resolved once per action call. The retry loop itself never consults
// mutable global state.

use std::time::Duration;

/// Default maximum wait for an element to become actionable (2 seconds).
pub const DEFAULT_WAIT: Duration = Duration::from_secs(2);

/// Configuration for a [`Session`](crate::Session).
///
/// `default_wait` applies to every action whose options do not carry an
/// explicit `wait`; a configured default of zero still attempts each action
/// exactly once. `poll_interval` is the pause between retry attempts.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Wait applied when an action's options carry no explicit `wait`
    pub default_wait: Duration,
    /// Pause between retry attempts
    pub poll_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_wait: DEFAULT_WAIT,
            poll_interval: crate::sync::DEFAULT_POLL_INTERVAL,
        }
    }
}

impl SessionConfig {
    /// Create a new builder for SessionConfig
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }
}

/// Builder for SessionConfig
#[derive(Debug, Clone, Default)]
pub struct SessionConfigBuilder {
    default_wait: Option<Duration>,
    poll_interval: Option<Duration>,
}

impl SessionConfigBuilder {
    /// Set the default wait applied when no per-call wait is given
    pub fn default_wait(mut self, wait: Duration) -> Self {
        self.default_wait = Some(wait);
        self
    }

    /// Set the pause between retry attempts
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    /// Build the SessionConfig
    pub fn build(self) -> SessionConfig {
        let defaults = SessionConfig::default();
        SessionConfig {
            default_wait: self.default_wait.unwrap_or(defaults.default_wait),
            poll_interval: self.poll_interval.unwrap_or(defaults.poll_interval),
        }
    }
}
