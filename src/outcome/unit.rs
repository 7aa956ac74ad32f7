//! The valueless outcome.

use std::fmt;

use crate::contract::ContractError;
use crate::error::Error;
use crate::optional::Optional;

/// The outcome of an operation that produces no value.
///
/// A success carries nothing; a failure carries an [`Error`].
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome::Outcome;
///
/// let done = Outcome::success();
/// assert!(done.is_success());
/// assert!(done.error().unwrap_err().is_invalid_state());
///
/// let broken = Outcome::failure("disk full");
/// assert!(broken.is_failure());
/// assert_eq!(broken.error().unwrap().message(), "disk full");
/// ```
#[derive(Clone, PartialEq)]
pub struct Outcome {
    is_success: bool,
    error: Optional<Error>,
}

impl Outcome {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful outcome.
    #[inline]
    pub const fn new() -> Self {
        Self::success()
    }

    /// Creates a successful outcome.
    #[inline]
    pub const fn success() -> Self {
        Self {
            is_success: true,
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
            error: Optional::some(error),
        }
    }

    /// Converts a standard `Result`, keeping the error on failure.
    pub fn from_result<E>(result: Result<(), E>) -> Self
    where
        E: Into<Error>,
    {
        match result {
            Ok(()) => Self::success(),
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

    /// Returns the error of a failed outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidState`] when the outcome is a success.
    #[inline]
    pub fn error(&self) -> Result<&Error, ContractError> {
        self.error.value()
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<(), Error> {
        match self.error.into_option() {
            Some(error) => Err(error),
            None => Ok(()),
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
    /// use outcomes::outcome::Outcome;
    ///
    /// let text = Outcome::failure("ERROR").match_with(
    ///     || "Valid Data".to_string(),
    ///     |error| error.message().to_string(),
    /// );
    /// assert_eq!(text, "ERROR");
    /// ```
    #[inline]
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce() -> R,
        F: FnOnce(Error) -> R,
    {
        match self.into_result() {
            Ok(()) => on_success(),
            Err(error) => on_failure(error),
        }
    }

    /// Asynchronous form of [`Outcome::match_with`].
    #[cfg(feature = "async")]
    pub fn match_async<R, S, F, SuccessFuture, FailureFuture>(
        self,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = R>
    where
        S: FnOnce() -> SuccessFuture,
        F: FnOnce(Error) -> FailureFuture,
        SuccessFuture: Future<Output = R>,
        FailureFuture: Future<Output = R>,
    {
        use futures::future::Either;

        self.match_with(
            || Either::Left(on_success()),
            |error| Either::Right(on_failure(error)),
        )
    }

    /// Replaces a success with the outcome of `handler`.
    ///
    /// A failure is returned unchanged and `handler` is not called.
    #[inline]
    #[must_use]
    pub fn if_success<F>(self, handler: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_success { handler() } else { self }
    }

    /// Replaces a failure with the outcome of `handler`.
    ///
    /// A success is returned unchanged and `handler` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    ///
    /// let recovered = Outcome::failure("timeout").if_failure(|_| Outcome::success());
    /// assert!(recovered.is_success());
    /// ```
    #[inline]
    #[must_use]
    pub fn if_failure<F>(self, handler: F) -> Self
    where
        F: FnOnce(Error) -> Self,
    {
        self.match_with(Self::success, handler)
    }

    /// Asynchronous form of [`Outcome::if_success`].
    #[cfg(feature = "async")]
    pub fn if_success_async<F, Fut>(self, handler: F) -> impl Future<Output = Self>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        use futures::future::{Either, ready};

        if self.is_success {
            Either::Left(handler())
        } else {
            Either::Right(ready(self))
        }
    }

    /// Asynchronous form of [`Outcome::if_failure`].
    #[cfg(feature = "async")]
    pub fn if_failure_async<F, Fut>(self, handler: F) -> impl Future<Output = Self>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Self>,
    {
        use futures::future::{Either, ready};

        self.match_with(
            || Either::Right(ready(Self::success())),
            |error| Either::Left(handler(error)),
        )
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::success()
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error.as_option() {
            Some(error) => formatter.debug_tuple("Failure").field(error).finish(),
            None => formatter.write_str("Success"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error.as_option() {
            Some(error) => write!(formatter, "Failure({error})"),
            None => formatter.write_str("Success"),
        }
    }
}

impl From<Outcome> for Result<(), Error> {
    fn from(outcome: Outcome) -> Self {
        outcome.into_result()
    }
}
