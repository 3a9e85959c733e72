//! The outcome value: construction, accessors and identity.
//!
//! An [`Outcome`] wraps at most one value together with a [`State`], a
//! message and an optional captured [`Fault`]. Fields are private, so the only
//! way to build one is through the factories below or a combinator.

use super::fault::{contain, contain_fallible, BoxError, Fault};
use super::state::State;
use crate::message;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A value, a deliberate absence, or a failure.
///
/// Equality, hashing and `Display` look only at the *visible* contents
/// (see [`Outcome::get`]); state, message and fault are ignored.
///
/// # Example
///
/// ```rust
/// use probable::core::{Outcome, State};
///
/// let parsed = Outcome::of_fallible(|| "42".parse::<u32>());
/// assert_eq!(parsed, 42);
///
/// let broken = Outcome::of_fallible(|| "forty-two".parse::<u32>());
/// assert_eq!(broken.state(), State::Failure);
/// assert_eq!(broken.message(), "invalid digit found in string");
///
/// let absent: Outcome<u32> = Outcome::of(None);
/// assert_eq!(absent.state(), State::Empty);
/// ```
#[derive(Clone, Debug)]
pub struct Outcome<T> {
    state: State,
    contents: Option<T>,
    message: String,
    fault: Option<Fault>,
}

impl<T> Outcome<T> {
    pub(crate) fn from_parts(
        state: State,
        contents: Option<T>,
        message: String,
        fault: Option<Fault>,
    ) -> Self {
        Self {
            state,
            contents,
            message,
            fault,
        }
    }

    pub(crate) fn into_parts(self) -> (State, Option<T>, String, Option<Fault>) {
        (self.state, self.contents, self.message, self.fault)
    }

    fn with_default_message(state: State, contents: Option<T>) -> Self {
        Self::from_parts(state, contents, state.default_message().to_string(), None)
    }

    /// An outcome with no value, which is not an error.
    pub fn empty() -> Self {
        Self::with_default_message(State::Empty, None)
    }

    /// A successful outcome holding `value`.
    pub fn value(value: T) -> Self {
        Self::with_default_message(State::Value, Some(value))
    }

    /// A successful outcome without a payload.
    ///
    /// It reports `is_successful()` but `has_contents()` is false.
    pub fn success() -> Self {
        Self::with_default_message(State::Value, None)
    }

    /// A failure with `message` as is and no fault.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::from_parts(State::Failure, None, message.into(), None)
    }

    /// A failure whose message is `template` with `args` filled in.
    pub fn failure_fmt<S: AsRef<str>>(template: &str, args: &[S]) -> Self {
        Self::failure(message::format(template, args))
    }

    /// A failure carrying a captured fault.
    pub fn failure_with(fault: Fault, message: impl Into<String>) -> Self {
        Self::from_parts(State::Failure, None, message.into(), Some(fault))
    }

    /// A failure carrying `fault`, with `template` filled from `args`.
    pub fn failure_with_fmt<S: AsRef<str>>(fault: Fault, template: &str, args: &[S]) -> Self {
        Self::failure_with(fault, message::format(template, args))
    }

    /// A failure whose message is the fault's own message.
    pub(crate) fn captured(fault: Fault) -> Self {
        let message = fault.message();
        Self::failure_with(fault, message)
    }

    /// `Empty` for `None`, `Value` otherwise.
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::value(value),
            None => Self::empty(),
        }
    }

    /// Apply `operator` to a fresh empty outcome.
    ///
    /// Whatever the operator returns is passed through unchanged; a panic
    /// becomes a failure.
    pub fn of_operator<F>(operator: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        contain(|| operator(Self::empty())).unwrap_or_else(Self::captured)
    }

    /// Wrap the value produced by `supplier`; a panic becomes a failure.
    pub fn of_supplier<F>(supplier: F) -> Self
    where
        F: FnOnce() -> T,
    {
        contain(supplier).map_or_else(Self::captured, Self::value)
    }

    /// Wrap the result of a fallible `supplier`.
    ///
    /// `Err` and panics both become a failure whose message is the error's.
    pub fn of_fallible<F, E>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        contain_fallible(supplier).map_or_else(Self::captured, Self::value)
    }

    /// Adopt the outcome produced by `supplier`; a panic becomes a failure.
    pub fn of_nested<F>(supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        contain(supplier).unwrap_or_else(Self::captured)
    }

    /// `value(value)` validated by `predicate`; see [`Outcome::test`].
    pub fn of_predicate<P>(predicate: P, value: T) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self::value(value).test(predicate)
    }

    /// The state fixed at construction.
    pub fn state(&self) -> State {
        self.state
    }

    /// Human-readable description, defaulting per state.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The captured fault, set only on failures raised by caller code.
    pub fn fault(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }

    /// True only under `State::Value`, with or without contents.
    pub fn is_successful(&self) -> bool {
        self.state.is_successful()
    }

    /// True for both `Empty` and `Failure`; inspect [`Outcome::state`] to
    /// tell them apart.
    pub fn is_unsuccessful(&self) -> bool {
        !self.is_successful()
    }

    /// Visible contents: present only when the outcome is successful.
    pub fn get(&self) -> Option<&T> {
        if self.is_successful() {
            self.contents.as_ref()
        } else {
            None
        }
    }

    /// Owned form of [`Outcome::get`].
    pub fn into_inner(self) -> Option<T> {
        if self.is_successful() {
            self.contents
        } else {
            None
        }
    }

    /// Contents retained by the outcome regardless of state.
    ///
    /// A value rejected by [`Outcome::test`] stays here while `get` reports
    /// nothing.
    pub fn contents(&self) -> Option<&T> {
        self.contents.as_ref()
    }

    /// Visible contents, or `default` when there are none.
    pub fn get_or(self, default: T) -> T {
        self.into_inner().unwrap_or(default)
    }

    /// Visible contents, or the value computed by `default`.
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.into_inner().unwrap_or_else(default)
    }

    /// `self` if successful, otherwise `other`. Messages are not merged.
    pub fn or(self, other: Self) -> Self {
        if self.is_successful() {
            self
        } else {
            other
        }
    }

    /// Whether there are visible contents, whatever the state.
    pub fn has_contents(&self) -> bool {
        self.get().is_some()
    }

    /// Negation of [`Outcome::has_contents`].
    pub fn is_empty(&self) -> bool {
        !self.has_contents()
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<BoxError>,
{
    fn from(result: Result<T, E>) -> Self {
        result.map_or_else(|e| Self::captured(Fault::raised(e)), Self::value)
    }
}

impl<T: PartialEq> PartialEq for Outcome<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq> Eq for Outcome<T> {}

impl<T: PartialEq> PartialEq<T> for Outcome<T> {
    fn eq(&self, other: &T) -> bool {
        self.get() == Some(other)
    }
}

impl<T: PartialEq> PartialEq<Option<T>> for Outcome<T> {
    fn eq(&self, other: &Option<T>) -> bool {
        self.get() == other.as_ref()
    }
}

impl<T: Hash> Hash for Outcome<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(contents) => fmt::Display::fmt(contents, f),
            None => f.write_str("none"),
        }
    }
}

#[derive(Serialize)]
struct OutcomeRef<'a, T> {
    state: State,
    contents: Option<&'a T>,
    message: &'a str,
    fault: Option<String>,
}

#[derive(Deserialize)]
struct OutcomeRecord<T> {
    state: State,
    contents: Option<T>,
    message: String,
    #[serde(default)]
    fault: Option<String>,
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OutcomeRef {
            state: self.state,
            contents: self.contents.as_ref(),
            message: &self.message,
            fault: self.fault.as_ref().map(Fault::message),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = OutcomeRecord::deserialize(deserializer)?;
        if record.fault.is_some() && record.state != State::Failure {
            return Err(D::Error::custom(format!(
                "fault is only allowed on a FAILURE outcome, found {}",
                record.state
            )));
        }
        Ok(Self::from_parts(
            record.state,
            record.contents,
            record.message,
            record.fault.map(Fault::raised),
        ))
    }
}
