//! Two-state outcomes of an operation: success or failure.
//!
//! This module provides two containers:
//!
//! - [`Outcome`]: success carries nothing, failure carries an [`Error`].
//! - [`ValueOutcome<T>`]: success carries a `T`, failure carries an [`Error`].
//!
//! Both are built once, at the point an operation concludes, and never
//! change afterwards. They are consumed through guarded accessors
//! ([`ValueOutcome::value`], [`Outcome::error`], ...), through `match_with`,
//! or chained with `if_success` / `if_failure`, which pass an outcome of the
//! opposite state through untouched.
//!
//! The `attempt` family bridges panicking and `Result`-returning code into
//! outcomes: whatever the operation returns or raises is absorbed into a
//! single outcome and never re-raised.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::outcome::{Outcome, ValueOutcome};
//!
//! fn parse(input: &str) -> ValueOutcome<i32> {
//!     ValueOutcome::attempt(|| input.parse::<i32>())
//! }
//!
//! let doubled = parse("21").if_success(|value| ValueOutcome::success(value * 2));
//! assert_eq!(doubled.value(), Ok(&42));
//!
//! let failed = parse("x").if_success(|value| ValueOutcome::success(value * 2));
//! assert!(failed.is_failure());
//!
//! let status: Outcome = failed.into();
//! assert_eq!(status.error().unwrap().message(), "invalid digit found in string");
//! ```
//!
//! [`Error`]: crate::error::Error

mod attempt;
mod unit;
mod value;

pub use unit::Outcome;
pub use value::ValueOutcome;

static_assertions::assert_impl_all!(Outcome: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(ValueOutcome<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(ValueOutcome<i32>: Default);
