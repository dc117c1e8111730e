//! pageact: Auto-waiting page actions for browser automation
//!
//! This crate is the synchronization core for a browser-driven interaction
//! DSL: high-level actions (click, fill, check, select, attach) that
//! tolerate the eventually-consistent nature of a live page. Each action
//! locates its target fresh on every attempt and retries transient failures
//! (element not rendered yet, detached mid-action, momentarily ambiguous)
//! until a deadline, so callers never write manual wait loops.
//!
//! The crate is driver-agnostic: a concrete driver implements the
//! [`Backend`] and [`Element`] traits and reports failures through the
//! shared [`Error`] taxonomy. Anything the driver does not explicitly
//! classify as transient is treated as fatal and surfaced immediately.
//!
//! # Example
//!
//! ```ignore
//! use pageact::{Session, SessionConfig, FillOptions, SelectOptions};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // `MyDriver` implements pageact::Backend against a real browser.
//!     let backend = Arc::new(MyDriver::connect().await?);
//!     let config = SessionConfig::builder()
//!         .default_wait(Duration::from_secs(5))
//!         .build();
//!     let session = Session::with_config(backend, config);
//!
//!     session.fill_in("Email", FillOptions::with_value("user@example.com")).await?;
//!     session.check("I agree to the terms", Default::default()).await?;
//!     session.select("March", SelectOptions::builder().from("Month").build()).await?;
//!     session.click_button("Sign up", Default::default()).await?;
//!     Ok(())
//! }
//! ```

mod backend;
mod config;
mod error;
mod locator;
mod options;
mod session;
mod sync;

// Re-export error types
pub use error::{Error, Result};

// Re-export the backend contracts implemented by drivers
pub use backend::{Backend, Element};

// Re-export locator types
pub use locator::{Filters, Locator, TargetKind};

// Re-export the session facade and its configuration
pub use config::{SessionConfig, SessionConfigBuilder, DEFAULT_WAIT};
pub use session::Session;

// Re-export action options
pub use options::{
    AttachOptions, AttachOptionsBuilder, CheckOptions, CheckOptionsBuilder, ClickOptions,
    ClickOptionsBuilder, FillOptions, FillOptionsBuilder, SelectOptions, SelectOptionsBuilder,
};

// Re-export the synchronizer for callers that wrap their own operations
pub use sync::{Synchronizer, DEFAULT_POLL_INTERVAL};
