//! The value-carrying outcome.

use std::fmt;

use super::Outcome;
use crate::contract::ContractError;
use crate::error::Error;
use crate::optional::Optional;

/// The outcome of an operation that produces a `T` on success.
///
/// A success holds the payload, a failure holds an [`Error`]; exactly one
/// of the two slots is populated. There is no default state: a
/// `ValueOutcome` always comes from a value or from an error.
///
/// # Type Parameters
///
/// * `T` - The type of the success payload
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome::ValueOutcome;
///
/// let success = ValueOutcome::success(20);
/// assert_eq!(success.value(), Ok(&20));
/// assert!(success.error().unwrap_err().is_invalid_state());
///
/// let failure: ValueOutcome<i32> = ValueOutcome::failure("bad");
/// assert_eq!(failure.error().unwrap().message(), "bad");
/// assert_eq!(failure.value_or(-1), -1);
/// ```
#[derive(Clone, PartialEq)]
pub struct ValueOutcome<T> {
    is_success: bool,
    value: Optional<T>,
    error: Optional<Error>,
}

impl<T> ValueOutcome<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful outcome holding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self::success(value)
    }

    /// Creates a successful outcome holding `value`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self {
            is_success: true,
            value: Optional::some(value),
            error: Optional::none(),
        }
    }

    /// Creates a failed outcome carrying `error`.
    pub fn failure(error: impl Into<Error>) -> Self {
        Self::from_error(error.into())
    }

    /// Creates a failed outcome from a failure value.
    pub fn from_cause<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::from_error(Error::from_cause(cause))
    }

    pub(crate) const fn from_error(error: Error) -> Self {
        Self {
            is_success: false,
            value: Optional::none(),
            error: Optional::some(error),
        }
    }

    /// The no-argument constructor, which a value-carrying outcome cannot have.
    ///
    /// Always fails: a success needs a payload and a failure needs an error,
    /// so there is no state to default to.
    ///
    /// # Errors
    ///
    /// Always returns [`ContractError::InvalidState`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::ValueOutcome;
    ///
    /// let error = ValueOutcome::<String>::try_default().unwrap_err();
    /// assert_eq!(error.message(), "Using the default constructor is not valid.");
    /// ```
    pub const fn try_default() -> Result<Self, ContractError> {
        Err(ContractError::default_constructor())
    }

    /// Converts a standard `Result`, keeping the payload or the error.
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Into<Error>,
    {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }

    // =========================================================================
    // State and Access
    // =========================================================================

    /// Returns `true` for a successful outcome.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.is_success
    }

    /// Returns `true` for a failed outcome.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success
    }

    /// Returns the payload of a successful outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidState`] when the outcome is a failure.
    #[inline]
    pub fn value(&self) -> Result<&T, ContractError> {
        self.value.value()
    }

    /// Returns the error of a failed outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidState`] when the outcome is a success.
    #[inline]
    pub fn error(&self) -> Result<&Error, ContractError> {
        self.error.value()
    }

    /// Returns the payload, or `default` for a failure.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.value.value_or(default)
    }

    /// Returns the payload, or computes a replacement from the error.
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce(Error) -> T,
    {
        self.match_with(|value| value, default)
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<T, Error> {
        match (self.value.into_option(), self.error.into_option()) {
            (Some(value), None) => Ok(value),
            (None, Some(error)) => Err(error),
            // INVARIANT: every constructor populates exactly one slot.
            _ => unreachable!("ValueOutcome must hold exactly one of a value or an error"),
        }
    }

    fn as_result(&self) -> Result<&T, &Error> {
        match (self.value.as_option(), self.error.as_option()) {
            (Some(value), None) => Ok(value),
            (None, Some(error)) => Err(error),
            // INVARIANT: every constructor populates exactly one slot.
            _ => unreachable!("ValueOutcome must hold exactly one of a value or an error"),
        }
    }

    // =========================================================================
    // Matching and Chaining
    // =========================================================================

    /// Runs exactly one of the two branches and returns its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::ValueOutcome;
    ///
    /// let text = ValueOutcome::success("Valid Data".to_string())
    ///     .match_with(|value| value, |error| error.message().to_string());
    /// assert_eq!(text, "Valid Data");
    /// ```
    #[inline]
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        match self.into_result() {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    /// Asynchronous form of [`ValueOutcome::match_with`].
    #[cfg(feature = "async")]
    pub fn match_async<R, S, F, SuccessFuture, FailureFuture>(
        self,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SuccessFuture,
        F: FnOnce(Error) -> FailureFuture,
        SuccessFuture: Future<Output = R>,
        FailureFuture: Future<Output = R>,
    {
        use futures::future::Either;

        self.match_with(
            |value| Either::Left(on_success(value)),
            |error| Either::Right(on_failure(error)),
        )
    }

    /// Replaces a success with the outcome of `handler` applied to the payload.
    ///
    /// A failure is passed through with its error and `handler` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::ValueOutcome;
    ///
    /// let checked = ValueOutcome::success(7).if_success(|value| {
    ///     if value > 5 { ValueOutcome::failure("too large") } else { ValueOutcome::success(value) }
    /// });
    /// assert_eq!(checked.error().unwrap().message(), "too large");
    /// ```
    #[inline]
    #[must_use]
    pub fn if_success<F>(self, handler: F) -> Self
    where
        F: FnOnce(T) -> Self,
    {
        self.match_with(handler, Self::from_error)
    }

    /// Replaces a failure with the outcome of `handler` applied to the error.
    ///
    /// A success is passed through with its payload and `handler` is not called.
    #[inline]
    #[must_use]
    pub fn if_failure<F>(self, handler: F) -> Self
    where
        F: FnOnce(Error) -> Self,
    {
        self.match_with(Self::success, handler)
    }

    /// Asynchronous form of [`ValueOutcome::if_success`].
    #[cfg(feature = "async")]
    pub fn if_success_async<F, Fut>(self, handler: F) -> impl Future<Output = Self>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Self>,
    {
        use futures::future::{Either, ready};

        self.match_with(
            |value| Either::Left(handler(value)),
            |error| Either::Right(ready(Self::from_error(error))),
        )
    }

    /// Asynchronous form of [`ValueOutcome::if_failure`].
    #[cfg(feature = "async")]
    pub fn if_failure_async<F, Fut>(self, handler: F) -> impl Future<Output = Self>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Self>,
    {
        use futures::future::{Either, ready};

        self.match_with(
            |value| Either::Right(ready(Self::success(value))),
            |error| Either::Left(handler(error)),
        )
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for ValueOutcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_result() {
            Ok(value) => formatter.debug_tuple("Success").field(value).finish(),
            Err(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for ValueOutcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_result() {
            Ok(value) => write!(formatter, "Success({value})"),
            Err(error) => write!(formatter, "Failure({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<T> for ValueOutcome<T> {
    fn from(value: T) -> Self {
        Self::success(value)
    }
}

/// Drops the payload of a success and keeps the error of a failure.
impl<T> From<ValueOutcome<T>> for Outcome {
    fn from(source: ValueOutcome<T>) -> Self {
        source.match_with(|_| Self::success(), Self::from_error)
    }
}

impl<T> From<ValueOutcome<T>> for Result<T, Error> {
    fn from(outcome: ValueOutcome<T>) -> Self {
        outcome.into_result()
    }
}
