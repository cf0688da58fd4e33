//! # Logger
//!
//! Tracing setup for the bkit tools.
//!
//! Console output goes to **stderr**, so `bkit fmt` and `bkit demo` can be
//! piped while still logging. A rolling log file can be added with
//! [`LoggerBuilder::path`].
//!
//! ```rust
//! use bkit_logger::Logger;
//!
//! let _logger = Logger::builder().name("bkit").verbosity(2).ansi(false).init().unwrap();
//! tracing::debug!("visible at -vv");
//! ```

mod builder;
mod error;
mod layers;

pub use crate::builder::{LogFormat, LoggerBuilder, Named, Unnamed, WithFile, WithoutFile};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use tracing_appender::non_blocking::WorkerGuard;

/// Handle returned by [`LoggerBuilder::init`].
///
/// With file output enabled it owns the writer's [`WorkerGuard`]; buffered
/// lines are flushed when the handle is dropped, so keep it in `main`.
#[must_use = "dropping the handle flushes and stops file logging"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber. A name is required before
    /// [`LoggerBuilder::init`] becomes available.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// The file writer guard, when file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log file");
        }
    }
}
