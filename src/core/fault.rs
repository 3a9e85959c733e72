//! Captured faults and the catch-and-convert helper.
//!
//! Every factory and combinator that runs caller code goes through
//! [`contain`] or [`contain_fallible`], so a panic or an `Err` raised by that
//! code becomes a [`Fault`] value instead of unwinding through the chain.

use std::any::Any;
use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use thiserror::Error;

/// Boxed error accepted from fallible caller code.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// An error captured while evaluating caller-supplied code.
#[derive(Debug, Clone, Error)]
pub enum Fault {
    /// Caller code returned an error
    #[error(transparent)]
    Raised(Arc<dyn StdError + Send + Sync>),

    /// Caller code panicked; holds the panic message
    #[error("{0}")]
    Panicked(String),
}

impl Fault {
    /// Capture an error returned by caller code.
    ///
    /// A `Fault` passed back in (for example from a nested chain) is kept as is
    /// rather than wrapped a second time.
    pub fn raised<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        let boxed: BoxError = error.into();
        match boxed.downcast::<Fault>() {
            Ok(fault) => *fault,
            Err(other) => Fault::Raised(Arc::from(other)),
        }
    }

    /// Build a fault from a caught panic payload.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "panicked with a non-string payload".to_string(),
            },
        };
        Fault::Panicked(message)
    }

    /// Text used as the failure message when this fault is captured.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether this fault came from a caught panic.
    pub fn is_panic(&self) -> bool {
        matches!(self, Fault::Panicked(_))
    }
}

/// Run `f`, converting a panic into a [`Fault`].
pub(crate) fn contain<R>(f: impl FnOnce() -> R) -> Result<R, Fault> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(Fault::from_panic)
}

/// Run a fallible `f`, converting both a panic and an `Err` into a [`Fault`].
pub(crate) fn contain_fallible<R, E>(f: impl FnOnce() -> Result<R, E>) -> Result<R, Fault>
where
    E: Into<BoxError>,
{
    contain(f)?.map_err(Fault::raised)
}
