//! # outcomes
//!
//! Optional values, success/failure outcomes and error descriptors for
//! code that wants to say "value or absence" and "success or described
//! failure" without sentinels or panics for ordinary control flow.
//!
//! ## Overview
//!
//! - **[`Optional<T>`](optional::Optional)**: zero or one value, with
//!   guarded access, equality and a total order in which absent sorts first.
//! - **[`Error`](error::Error)**: an immutable message plus an optional
//!   originating cause.
//! - **[`Outcome`](outcome::Outcome)** and
//!   **[`ValueOutcome<T>`](outcome::ValueOutcome)**: success (optionally
//!   carrying a value) or failure (carrying an `Error`), with `match_with`,
//!   short-circuiting `if_success` / `if_failure`, and `attempt` to absorb
//!   failing operations.
//!
//! Misuse, such as reading the value of an absent `Optional` or the error
//! of a success, is reported as a [`ContractError`](contract::ContractError).
//!
//! ## Feature Flags
//!
//! - `async` (default): `match_async`, `if_success_async`,
//!   `if_failure_async` and `attempt_async`
//! - `serde`: serialization for `Optional<T>` and `Error`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcomes::prelude::*;
//!
//! fn divide(numerator: i32, denominator: i32) -> ValueOutcome<i32> {
//!     if denominator == 0 {
//!         value_failure("division by zero")
//!     } else {
//!         value_success(numerator / denominator)
//!     }
//! }
//!
//! assert_eq!(divide(10, 2).value_or(0), 5);
//! assert_eq!(divide(1, 0).error().map(Error::message), Ok("division by zero"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the error types and the helper constructors.
///
/// # Usage
///
/// ```rust
/// use outcomes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::contract::ContractError;
    pub use crate::error::{Cause, Error, Panicked};
    pub use crate::helpers::*;
    pub use crate::optional::Optional;
    pub use crate::outcome::{Outcome, ValueOutcome};
}

pub mod contract;
pub mod error;
pub mod helpers;
pub mod optional;
pub mod outcome;
