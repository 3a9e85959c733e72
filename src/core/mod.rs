//! The outcome type and its combinator algebra.
//!
//! This module contains the pure core of the crate:
//! - The `State` discriminant and its default messages
//! - The `Outcome` value with its factories and accessors
//! - Combinators that map, validate and re-type outcomes
//! - `Fault`, the captured error, and the helper that contains caller code
//!
//! Nothing here performs I/O; the only side-effecting combinator lives in
//! [`crate::diagnostics`].

mod combinators;
mod fault;
mod outcome;
mod state;

pub use combinators::transform;
pub use fault::{BoxError, Fault};
pub use outcome::Outcome;
pub use state::State;

pub(crate) use fault::contain;
