//! Destinations for diagnostic lines.

use crate::core::Fault;
use log::Level;
use std::borrow::Cow;

/// Target used by [`LogSink`] unless another is configured.
pub const DEFAULT_TARGET: &str = "probable";

/// Receives diagnostic lines produced by the logging combinators.
///
/// Implementations are best effort and must not panic back into the caller.
/// Any `Fn(Level, &str, Option<&Fault>)` closure is a sink.
pub trait DiagnosticSink {
    /// Record `line` on `level`, with the fault of the outcome if it has one.
    fn record(&self, level: Level, line: &str, fault: Option<&Fault>);
}

impl<F> DiagnosticSink for F
where
    F: Fn(Level, &str, Option<&Fault>),
{
    fn record(&self, level: Level, line: &str, fault: Option<&Fault>) {
        self(level, line, fault)
    }
}

/// Sink forwarding to the [`log`] facade.
///
/// # Example
///
/// ```rust
/// use probable::core::Outcome;
/// use probable::diagnostics::LogSink;
/// use log::Level;
///
/// let sink = LogSink::with_target("billing");
/// let outcome = Outcome::value(3).log_to(&sink, Level::Debug, "invoice lines");
/// assert_eq!(outcome, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogSink {
    target: Cow<'static, str>,
}

impl LogSink {
    /// Sink logging under [`DEFAULT_TARGET`].
    pub fn new() -> Self {
        Self {
            target: Cow::Borrowed(DEFAULT_TARGET),
        }
    }

    /// Sink logging under `target` instead of [`DEFAULT_TARGET`].
    pub fn with_target(target: impl Into<Cow<'static, str>>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The `log` target lines are emitted under.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for LogSink {
    fn record(&self, level: Level, line: &str, fault: Option<&Fault>) {
        match fault {
            Some(fault) => log::log!(target: self.target(), level, "{}; fault: {}", line, fault),
            None => log::log!(target: self.target(), level, "{}", line),
        }
    }
}
