//! Logging taps for outcome chains.
//!
//! The `log*` combinators describe an outcome on a [`DiagnosticSink`] and
//! return it unchanged, so they can sit anywhere in a chain:
//!
//! ```rust
//! use probable::core::Outcome;
//! use log::Level;
//!
//! let total = Outcome::value(20)
//!     .log_message("loaded quantity")
//!     .map(|qty| qty * 3)
//!     .log_at(Level::Debug);
//! assert_eq!(total, 60);
//! ```

mod sink;

pub use sink::{DiagnosticSink, LogSink, DEFAULT_TARGET};

use crate::core::{contain, Outcome};
use log::Level;
use std::fmt::Debug;

/// Prefix used when a logging combinator is given none.
pub const DEFAULT_PREFIX: &str = "Outcome processed";

impl<T: Debug> Outcome<T> {
    /// Log on [`Level::Info`] with the default prefix.
    pub fn log(self) -> Self {
        self.log_with(Level::Info, DEFAULT_PREFIX)
    }

    /// Log on [`Level::Info`] with `prefix`.
    pub fn log_message(self, prefix: &str) -> Self {
        self.log_with(Level::Info, prefix)
    }

    /// Log on `level` with the default prefix.
    pub fn log_at(self, level: Level) -> Self {
        self.log_with(level, DEFAULT_PREFIX)
    }

    /// Log through the default [`LogSink`].
    pub fn log_with(self, level: Level, prefix: &str) -> Self {
        self.log_to(&LogSink::default(), level, prefix)
    }

    /// Describe this outcome on `sink` and return it unchanged.
    ///
    /// The fault, when present, is handed to the sink next to the line. A
    /// sink that panics anyway is reported on the crate target at debug level.
    pub fn log_to<S>(self, sink: &S, level: Level, prefix: &str) -> Self
    where
        S: DiagnosticSink + ?Sized,
    {
        let line = self.diagnostic_line(prefix);
        if let Err(fault) = contain(|| sink.record(level, &line, self.fault())) {
            log::debug!(target: DEFAULT_TARGET, "diagnostic sink panicked: {}", fault);
        }
        self
    }

    /// The line the logging combinators emit.
    pub fn diagnostic_line(&self, prefix: &str) -> String {
        let contents = match self.get() {
            Some(contents) => format!("{contents:?}"),
            None => "none".to_string(),
        };
        format!(
            "{} | Outcome was: {}, contents: {}, message: {}",
            prefix,
            self.state(),
            contents,
            self.message()
        )
    }
}
