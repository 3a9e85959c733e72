//! Probable: one outcome type for values, absences and failures
//!
//! Rather than choosing between `Option` and `Result`, an [`Outcome`] carries
//! three disjoint states, a human-readable message and, when something went
//! wrong in caller code, the captured [`Fault`]. Chains of `map`, `flat_map`
//! and `test` propagate absence and failure without branching at every step.
//!
//! # Core Concepts
//!
//! - **State**: `Value`, `Empty` or `Failure`, fixed at construction
//! - **Visible contents**: what [`Outcome::get`] returns; only present under `Value`
//! - **Containment**: panics and errors raised by closures passed to factories
//!   and combinators become `Failure` outcomes, never unwinding through the chain
//! - **Diagnostics**: `log*` combinators tap a chain without changing it
//!
//! # Example
//!
//! Validation runs inside `flat_map`, so a parse failure skips it and keeps
//! its state, message and fault:
//!
//! ```rust
//! use probable::core::{Outcome, State};
//!
//! fn listen_address(raw: &str) -> Outcome<String> {
//!     Outcome::of_fallible(|| raw.parse::<u16>())
//!         .flat_map(|port| Outcome::of_predicate(|port: &u16| *port >= 1024, port))
//!         .map(|port| format!("0.0.0.0:{port}"))
//! }
//!
//! assert_eq!(listen_address("8080"), "0.0.0.0:8080".to_string());
//!
//! let privileged = listen_address("80");
//! assert_eq!(privileged.state(), State::Empty);
//! assert!(privileged.message().starts_with("predicate "));
//!
//! let garbage = listen_address("http");
//! assert_eq!(garbage.state(), State::Failure);
//! assert_eq!(garbage.message(), "invalid digit found in string");
//! ```
//!
//! `test` itself fails closed: applied directly to a failure, which has no
//! visible contents, it yields `Empty` and drops the fault.
//!
//! ```rust
//! use probable::core::{Outcome, State};
//!
//! let tested = Outcome::of_fallible(|| "http".parse::<u16>()).test(|port| *port >= 1024);
//! assert_eq!(tested.state(), State::Empty);
//! assert!(tested.fault().is_none());
//! ```

pub mod core;
pub mod diagnostics;
pub mod message;

// Re-export commonly used types
pub use self::core::{transform, Fault, Outcome, State};
pub use diagnostics::{DiagnosticSink, LogSink};
