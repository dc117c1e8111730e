// Synchronizer - deadline-bounded polling retry loop
//
// Every facade action funnels its "locate element, then mutate it" closure
// through synchronize(), which owns all waiting in this crate. The loop is
// driven by a pure decision function (next_step) so the timeout-vs-fatal
// classification can be tested without a clock or a page.

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Default polling interval between retry attempts (50ms).
///
/// The interval is a free implementation choice, bounded and short relative
/// to typical waits; override it with [`Synchronizer::with_poll_interval`].
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What the retry loop does after observing one attempt's outcome.
#[derive(Debug)]
enum Step<T> {
    /// The attempt succeeded; return its value
    Return(T),
    /// Transient failure with time remaining; sleep this long and re-attempt
    Sleep(Duration, Error),
    /// Fatal failure or deadline exhausted; raise this error
    Raise(Error),
}

/// Decides the next step from one attempt's outcome.
///
/// A transient error past the deadline becomes [`Error::Timeout`] wrapping
/// that error; within the deadline it schedules a sleep capped at the
/// remaining window, so the final attempt lands at roughly the deadline
/// rather than a full interval past it. Any non-transient error raises
/// unchanged, regardless of remaining time.
fn next_step<T>(
    outcome: Result<T>,
    now: Instant,
    start: Instant,
    deadline: Instant,
    poll_interval: Duration,
) -> Step<T> {
    match outcome {
        Ok(value) => Step::Return(value),
        Err(err) if err.is_transient() => {
            if now >= deadline {
                Step::Raise(Error::Timeout {
                    elapsed: now.duration_since(start),
                    source: Box::new(err),
                })
            } else {
                let remaining = deadline.duration_since(now);
                Step::Sleep(poll_interval.min(remaining), err)
            }
        }
        Err(err) => Step::Raise(err),
    }
}

/// Retries a fallible async operation until it succeeds or a deadline
/// elapses.
///
/// The closure is invoked at least once even with a zero timeout. Transient
/// errors (see [`Error::is_transient`]) are retried with a bounded pause
/// between attempts; any other error is raised immediately. When the
/// deadline passes while only transient errors were observed, the result is
/// [`Error::Timeout`] wrapping the last of them.
#[derive(Debug, Clone)]
pub struct Synchronizer {
    poll_interval: Duration,
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Synchronizer {
    /// Creates a synchronizer with the default polling interval.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pause between retry attempts.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Invokes `attempt` until it succeeds or `timeout` elapses.
    ///
    /// A timeout of zero means exactly one attempt with no retry window.
    /// The element lookup belongs *inside* the closure: each retry must
    /// re-resolve its locator so it acts on the current document rather than
    /// a handle detached by a re-render.
    pub async fn synchronize<T, F, Fut>(&self, timeout: Duration, mut attempt: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let start = Instant::now();
        let deadline = start + timeout;
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            let outcome = attempt().await;
            match next_step(outcome, Instant::now(), start, deadline, self.poll_interval) {
                Step::Return(value) => {
                    debug!(attempts, "action succeeded");
                    return Ok(value);
                }
                Step::Sleep(pause, err) => {
                    debug!(attempts, error = %err, pause_ms = pause.as_millis() as u64, "retrying after transient error");
                    tokio::time::sleep(pause).await;
                }
                Step::Raise(err) => {
                    if matches!(err, Error::Timeout { .. }) {
                        warn!(attempts, error = %err, "gave up waiting");
                    }
                    return Err(err);
                }
            }
        }
    }
}
