//! Free-standing constructors for terse call sites.
//!
//! Importing these (or the [`prelude`](crate::prelude)) lets code read as
//! `some(20)` or `failure("bad")` instead of spelling out the type.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::helpers::{none, some, success, value_failure, value_success};
//! use outcomes::optional::Optional;
//!
//! let present: Optional<i32> = some(20);
//! let absent: Optional<i32> = none();
//! assert!(absent < present);
//!
//! assert!(success().is_success());
//! assert_eq!(value_success(3).value(), Ok(&3));
//! assert!(value_failure::<i32>("bad").is_failure());
//! ```

use crate::error::Error;
use crate::optional::Optional;
use crate::outcome::{Outcome, ValueOutcome};

/// Creates a present [`Optional`].
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::some(value)
}

/// Creates an absent [`Optional`].
#[inline]
pub const fn none<T>() -> Optional<T> {
    Optional::none()
}

/// Creates a successful [`Outcome`].
#[inline]
pub const fn success() -> Outcome {
    Outcome::success()
}

/// Creates a failed [`Outcome`].
#[inline]
pub fn failure(error: impl Into<Error>) -> Outcome {
    Outcome::failure(error)
}

/// Creates a successful [`ValueOutcome`] holding `value`.
#[inline]
pub const fn value_success<T>(value: T) -> ValueOutcome<T> {
    ValueOutcome::success(value)
}

/// Creates a failed [`ValueOutcome`].
#[inline]
pub fn value_failure<T>(error: impl Into<Error>) -> ValueOutcome<T> {
    ValueOutcome::failure(error)
}
