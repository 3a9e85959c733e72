//! Combinators over outcomes.
//!
//! Every combinator consumes an outcome and returns a new one. Once a chain is
//! unsuccessful, mapping steps are skipped but still re-type the chain, so
//! `Outcome<A> -> Outcome<B> -> Outcome<C>` composes without state checks at
//! each link.

use super::fault::{contain, contain_fallible, BoxError};
use super::outcome::Outcome;
use super::state::State;
use std::any::{self, Any};

impl<T> Outcome<T> {
    /// Split off visible contents, or carry state, message and fault over to
    /// an outcome of another type.
    fn split<R>(self) -> Result<T, Outcome<R>> {
        let (state, contents, message, fault) = self.into_parts();
        match contents {
            Some(contents) if state.is_successful() => Ok(contents),
            _ => Err(Outcome::from_parts(state, None, message, fault)),
        }
    }

    /// Apply `f` to visible contents.
    ///
    /// A panic in `f` becomes a failure. A successful outcome without
    /// contents stays a contents-less success; an unsuccessful one keeps its
    /// state, message and fault. In both cases `f` is not called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use probable::core::{Outcome, State};
    ///
    /// assert_eq!(Outcome::value(5).map(|x| x + 1), 6);
    ///
    /// let failed: Outcome<i32> = Outcome::failure("upstream down");
    /// let mapped = failed.map(|x| x.to_string());
    /// assert_eq!(mapped.state(), State::Failure);
    /// assert_eq!(mapped.message(), "upstream down");
    /// ```
    pub fn map<R, F>(self, f: F) -> Outcome<R>
    where
        F: FnOnce(T) -> R,
    {
        match self.split() {
            Ok(contents) => Outcome::of_supplier(|| f(contents)),
            Err(carried) => carried,
        }
    }

    /// Like [`Outcome::map`], with an `Err` from `f` becoming a failure.
    pub fn try_map<R, E, F>(self, f: F) -> Outcome<R>
    where
        F: FnOnce(T) -> Result<R, E>,
        E: Into<BoxError>,
    {
        match self.split() {
            Ok(contents) => Outcome::of_fallible(|| f(contents)),
            Err(carried) => carried,
        }
    }

    /// Apply `f` to visible contents and adopt the outcome it returns.
    pub fn flat_map<R, F>(self, f: F) -> Outcome<R>
    where
        F: FnOnce(T) -> Outcome<R>,
    {
        match self.split() {
            Ok(contents) => Outcome::of_nested(|| f(contents)),
            Err(carried) => carried,
        }
    }

    /// Validate visible contents with `predicate`.
    ///
    /// Fails closed: absent contents or a panic count as a failed predicate.
    /// On success `self` is returned untouched. Otherwise the result is
    /// `Empty`, names the predicate in its message, keeps the contents
    /// (reachable through [`Outcome::contents`]) and drops any fault.
    ///
    /// # Example
    ///
    /// ```rust
    /// use probable::core::{Outcome, State};
    ///
    /// let even = |x: &i32| x % 2 == 0;
    /// assert!(Outcome::value(4).test(even).is_successful());
    ///
    /// let odd = Outcome::value(3).test(even);
    /// assert_eq!(odd.state(), State::Empty);
    /// assert_eq!(odd.contents(), Some(&3));
    /// ```
    pub fn test<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let name = any::type_name::<P>();
        let holds = contain(|| self.get().is_some_and(predicate)).unwrap_or(false);
        self.settle(holds, name)
    }

    /// Validate with a predicate that also sees absent contents.
    ///
    /// If the predicate holds, the outcome is returned as is, even when it is
    /// unsuccessful.
    pub fn test_visible<P>(self, predicate: P) -> Self
    where
        P: FnOnce(Option<&T>) -> bool,
    {
        let name = any::type_name::<P>();
        let holds = contain(|| predicate(self.get())).unwrap_or(false);
        self.settle(holds, name)
    }

    /// Validate with a fallible predicate; an `Err` fails closed.
    pub fn try_test<P, E>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Result<bool, E>,
        E: Into<BoxError>,
    {
        let name = any::type_name::<P>();
        let holds = contain_fallible(|| self.get().map_or(Ok(false), predicate)).unwrap_or(false);
        self.settle(holds, name)
    }

    fn settle(self, holds: bool, predicate: &str) -> Self {
        if holds {
            return self;
        }
        let (_, contents, _, _) = self.into_parts();
        Outcome::from_parts(
            State::Empty,
            contents,
            format!("predicate {predicate} failed"),
            None,
        )
    }

    /// Re-type to `Outcome<R>`, keeping state, message and fault.
    ///
    /// Visible contents are carried across only if they are an `R`.
    /// Otherwise a successful outcome is downgraded to `Failure`, keeping the
    /// source message and fault. Unsuccessful outcomes keep their state,
    /// `Empty` included.
    ///
    /// # Example
    ///
    /// ```rust
    /// use probable::core::{Outcome, State};
    ///
    /// let same: Outcome<i32> = Outcome::value(7).transform();
    /// assert_eq!(same, 7);
    ///
    /// let other: Outcome<String> = Outcome::value(7).transform();
    /// assert_eq!(other.state(), State::Failure);
    /// ```
    pub fn transform<R>(self) -> Outcome<R>
    where
        T: 'static,
        R: 'static,
    {
        transform(self)
    }
}

/// Free-standing form of [`Outcome::transform`].
pub fn transform<T, R>(source: Outcome<T>) -> Outcome<R>
where
    T: 'static,
    R: 'static,
{
    let (state, contents, message, fault) = source.into_parts();
    if !state.is_successful() {
        return Outcome::from_parts(state, None, message, fault);
    }

    let retyped = contents
        .map(|contents| Box::new(contents) as Box<dyn Any>)
        .and_then(|boxed| boxed.downcast::<R>().ok());

    match retyped {
        Some(contents) => Outcome::from_parts(State::Value, Some(*contents), message, fault),
        None => Outcome::from_parts(State::Failure, None, message, fault),
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Remove one level of nesting.
    pub fn flatten(self) -> Outcome<T> {
        self.flat_map(|inner| inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Fault;
    use std::cell::Cell;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("not a number: {0}")]
    struct ParseError(String);

    #[test]
    fn map_applies_to_value() {
        assert_eq!(Outcome::value(5).map(|x| x + 1).get(), Some(&6));
    }

    #[test]
    fn map_skips_failures_and_keeps_diagnostics() {
        let called = Cell::new(false);
        let failed: Outcome<i32> = Outcome::failure_with(Fault::raised("socket closed"), "send failed");

        let mapped: Outcome<String> = failed.map(|x| {
            called.set(true);
            x.to_string()
        });

        assert!(!called.get());
        assert_eq!(mapped.state(), State::Failure);
        assert_eq!(mapped.message(), "send failed");
        assert_eq!(mapped.fault().map(Fault::message).as_deref(), Some("socket closed"));
    }

    #[test]
    fn map_keeps_empty_state() {
        let mapped = Outcome::<i32>::empty().map(|x| x * 2);
        assert_eq!(mapped.state(), State::Empty);
        assert_eq!(mapped.message(), "empty");
    }

    #[test]
    fn map_on_contentless_success_does_not_call_f() {
        let mapped = Outcome::<i32>::success().map(|_| -> i32 { panic!("not called") });
        assert!(mapped.is_successful());
        assert!(!mapped.has_contents());
    }

    #[test]
    fn map_contains_panics() {
        let mapped = Outcome::value(0).map(|x: i32| 10 / x);
        assert_eq!(mapped.state(), State::Failure);
        assert!(mapped.fault().is_some_and(Fault::is_panic));
        assert!(mapped.message().contains("divide by zero"));
    }

    #[test]
    fn try_map_captures_errors() {
        let parse = |s: &str| s.parse::<i32>().map_err(|_| ParseError(s.to_string()));

        assert_eq!(Outcome::value("12").try_map(parse), 12);

        let failed = Outcome::value("twelve").try_map(parse);
        assert_eq!(failed.state(), State::Failure);
        assert_eq!(failed.message(), "not a number: twelve");
    }

    #[test]
    fn map_chains_retype() {
        let length = Outcome::value("hello")
            .map(str::len)
            .map(|n| n * 2)
            .map(|n| n.to_string());
        assert_eq!(length, "10".to_string());
    }

    #[test]
    fn flat_map_adopts_returned_outcome() {
        let half = |x: i32| {
            if x % 2 == 0 {
                Outcome::value(x / 2)
            } else {
                Outcome::empty()
            }
        };

        assert_eq!(Outcome::value(8).flat_map(half), 4);
        assert_eq!(Outcome::value(7).flat_map(half).state(), State::Empty);
    }

    #[test]
    fn flat_map_skips_unsuccessful() {
        let called = Cell::new(false);
        let result: Outcome<i32> = Outcome::<i32>::failure("stopped").flat_map(|x| {
            called.set(true);
            Outcome::value(x)
        });
        assert!(!called.get());
        assert_eq!(result.message(), "stopped");
    }

    #[test]
    fn flat_map_contains_panics() {
        let result: Outcome<i32> = Outcome::value(1).flat_map(|_| panic!("lookup exploded"));
        assert_eq!(result.state(), State::Failure);
        assert_eq!(result.message(), "lookup exploded");
    }

    #[test]
    fn flatten_removes_one_level() {
        let nested = Outcome::value(Outcome::value(3));
        assert_eq!(nested.flatten(), 3);

        let nested_empty: Outcome<Outcome<i32>> = Outcome::value(Outcome::empty());
        assert_eq!(nested_empty.flatten().state(), State::Empty);
    }

    #[test]
    fn test_passes_matching_value_through() {
        let outcome = Outcome::value(4).test(|x| x % 2 == 0);
        assert_eq!(outcome.state(), State::Value);
        assert_eq!(outcome.message(), "value present");
        assert_eq!(outcome, 4);
    }

    #[test]
    fn test_rejects_with_empty_and_keeps_contents() {
        let outcome = Outcome::value(3).test(|x| x % 2 == 0);
        assert_eq!(outcome.state(), State::Empty);
        assert_eq!(outcome.contents(), Some(&3));
        assert!(outcome.message().starts_with("predicate "));
        assert!(outcome.message().ends_with(" failed"));
        assert!(outcome.message().contains("closure"));
    }

    #[test]
    fn test_fails_closed_on_panic() {
        let outcome = Outcome::value(1).test(|_| panic!("predicate exploded"));
        assert_eq!(outcome.state(), State::Empty);
        assert!(outcome.fault().is_none());
    }

    #[test]
    fn test_clears_fault_of_rejected_outcome() {
        let failed: Outcome<i32> = Outcome::failure_with(Fault::raised("io"), "read failed");
        let tested = failed.test(|_| true);
        assert_eq!(tested.state(), State::Empty);
        assert!(tested.fault().is_none());
    }

    #[test]
    fn test_after_parse_failure_yields_empty_and_drops_fault() {
        let tested = Outcome::of_fallible(|| "http".parse::<u16>()).test(|port| *port >= 1024);

        assert_eq!(tested.state(), State::Empty);
        assert!(tested.message().starts_with("predicate "));
        assert!(tested.message().ends_with(" failed"));
        assert!(tested.fault().is_none());
        assert_eq!(tested.contents(), None);
    }

    #[test]
    fn validation_inside_flat_map_keeps_parse_failure() {
        let address = |raw: &str| {
            Outcome::of_fallible(|| raw.parse::<u16>())
                .flat_map(|port| Outcome::of_predicate(|port: &u16| *port >= 1024, port))
                .map(|port| format!("0.0.0.0:{port}"))
        };

        let garbage = address("http");
        assert_eq!(garbage.state(), State::Failure);
        assert_eq!(garbage.message(), "invalid digit found in string");
        assert!(matches!(garbage.fault(), Some(Fault::Raised(_))));

        let privileged = address("80");
        assert_eq!(privileged.state(), State::Empty);

        assert_eq!(address("8080"), "0.0.0.0:8080".to_string());
    }

    #[test]
    fn test_visible_lets_failures_through_when_predicate_holds() {
        let failed: Outcome<i32> = Outcome::failure_with(Fault::raised("io"), "read failed");
        let tested = failed.test_visible(|contents| contents.is_none());
        assert_eq!(tested.state(), State::Failure);
        assert_eq!(tested.message(), "read failed");
        assert!(tested.fault().is_some());
    }

    #[test]
    fn try_test_fails_closed_on_error() {
        let outcome = Outcome::value("abc").try_test(|s| s.parse::<i32>().map(|n| n > 0));
        assert_eq!(outcome.state(), State::Empty);

        let outcome = Outcome::value("5").try_test(|s| s.parse::<i32>().map(|n| n > 0));
        assert_eq!(outcome.state(), State::Value);
    }

    #[test]
    fn transform_carries_matching_type() {
        let outcome: Outcome<i32> = transform(Outcome::value(7));
        assert_eq!(outcome, 7);
        assert_eq!(outcome.state(), State::Value);
    }

    #[test]
    fn transform_downgrades_incompatible_value_to_failure() {
        let outcome: Outcome<String> = Outcome::value(7).transform();
        assert_eq!(outcome.state(), State::Failure);
        assert_eq!(outcome.message(), "value present");
        assert!(outcome.fault().is_none());
    }

    #[test]
    fn transform_downgrades_contentless_success_to_failure() {
        let outcome: Outcome<String> = Outcome::<i32>::success().transform();
        assert_eq!(outcome.state(), State::Failure);
    }

    #[test]
    fn transform_preserves_unsuccessful_states() {
        let empty: Outcome<String> = Outcome::<i32>::empty().transform();
        assert_eq!(empty.state(), State::Empty);
        assert_eq!(empty.message(), "empty");

        let failed: Outcome<String> =
            Outcome::<i32>::failure_with(Fault::raised("io"), "read failed").transform();
        assert_eq!(failed.state(), State::Failure);
        assert_eq!(failed.message(), "read failed");
        assert!(failed.fault().is_some());
    }

    #[test]
    fn transform_drops_retained_contents_of_unsuccessful() {
        let rejected = Outcome::value(3).test(|x| *x > 5);
        let retyped: Outcome<i32> = rejected.transform();
        assert_eq!(retyped.contents(), None);
    }
}
