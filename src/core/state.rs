//! The discriminant of an outcome.
//!
//! Every outcome is in exactly one of three states. The state never changes
//! once an outcome is built; combinators produce new outcomes instead.

use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) const VALUE_MESSAGE: &str = "value present";
pub(crate) const EMPTY_MESSAGE: &str = "empty";
pub(crate) const FAILURE_MESSAGE: &str = "failure";

/// State of an [`Outcome`](super::Outcome), ordered from most to least successful.
///
/// # Example
///
/// ```rust
/// use probable::core::State;
///
/// assert!(State::Value.is_successful());
/// assert!(!State::Empty.is_successful());
/// assert_eq!(State::Failure.default_message(), "failure");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    /// The computation succeeded. Contents may still be absent.
    Value,
    /// No value is available, which is not an error.
    Empty,
    /// An error occurred.
    Failure,
}

impl State {
    /// Canonical name, as used in diagnostic lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Value => "VALUE",
            Self::Empty => "EMPTY",
            Self::Failure => "FAILURE",
        }
    }

    /// Message an outcome carries when none was given at construction.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Value => VALUE_MESSAGE,
            Self::Empty => EMPTY_MESSAGE,
            Self::Failure => FAILURE_MESSAGE,
        }
    }

    /// True only for `Value`.
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Value)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
