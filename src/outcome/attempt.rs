//! Absorbing failing operations into outcomes.
//!
//! An attempted operation returns `Result<T, E>` and may also panic. Both
//! an `Err` and a panic become a [`Cause`]; a panic's payload message is
//! recorded as a [`Panicked`]. The cause is then turned into a failed
//! outcome, either by a caller-supplied handler or by wrapping it in an
//! [`Error`] whose message is the cause's message.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use super::{Outcome, ValueOutcome};
use crate::error::{BoxedError, Cause, Error, Panicked};

fn into_cause<E>(error: E) -> Cause
where
    E: Into<BoxedError>,
{
    let boxed: BoxedError = error.into();
    Arc::from(boxed)
}

fn panic_cause(payload: &(dyn std::any::Any + Send)) -> Cause {
    Arc::new(Panicked::from_payload(payload))
}

/// Runs `operation`, turning an `Err` or a panic into a [`Cause`].
fn capture<T, E, F>(operation: F) -> Result<T, Cause>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxedError>,
{
    match catch_unwind(AssertUnwindSafe(operation)) {
        Ok(result) => result.map_err(into_cause),
        Err(payload) => Err(panic_cause(&*payload)),
    }
}

/// Runs `operation` and awaits its future, turning an `Err` or a panic
/// (while creating or polling the future) into a [`Cause`].
#[cfg(feature = "async")]
async fn capture_async<T, E, F, Fut>(operation: F) -> Result<T, Cause>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxedError>,
{
    use futures::FutureExt;

    let future = match catch_unwind(AssertUnwindSafe(operation)) {
        Ok(future) => future,
        Err(payload) => return Err(panic_cause(&*payload)),
    };
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(result) => result.map_err(into_cause),
        Err(payload) => Err(panic_cause(&*payload)),
    }
}

impl Outcome {
    /// Runs `operation`, absorbing its failure into the outcome.
    ///
    /// `Ok(())` yields a success. An `Err` or a panic yields a failure whose
    /// error carries the failure's message and the failure as its cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    ///
    /// let outcome = Outcome::attempt(|| Err::<(), _>("Bad Data"));
    /// assert_eq!(outcome.error().unwrap().message(), "Bad Data");
    ///
    /// assert!(Outcome::attempt(|| Ok::<(), String>(())).is_success());
    /// ```
    pub fn attempt<F, E>(operation: F) -> Self
    where
        F: FnOnce() -> Result<(), E>,
        E: Into<BoxedError>,
    {
        Self::attempt_with(operation, |cause| Self::from_error(Error::from_shared(cause)))
    }

    /// Runs `operation`, letting `handler` build the failure from the cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    ///
    /// let outcome = Outcome::attempt_with(
    ///     || Err::<(), _>("Bad Data"),
    ///     |cause| Outcome::failure(format!("Error: {cause}")),
    /// );
    /// assert_eq!(outcome.error().unwrap().message(), "Error: Bad Data");
    /// ```
    pub fn attempt_with<F, E, H>(operation: F, handler: H) -> Self
    where
        F: FnOnce() -> Result<(), E>,
        E: Into<BoxedError>,
        H: FnOnce(Cause) -> Self,
    {
        capture(operation).map_or_else(handler, |()| Self::success())
    }

    /// Asynchronous form of [`Outcome::attempt`].
    #[cfg(feature = "async")]
    pub async fn attempt_async<F, Fut, E>(operation: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Into<BoxedError>,
    {
        Self::attempt_async_with(operation, |cause| {
            Self::from_error(Error::from_shared(cause))
        })
        .await
    }

    /// Asynchronous form of [`Outcome::attempt_with`].
    #[cfg(feature = "async")]
    pub async fn attempt_async_with<F, Fut, E, H>(operation: F, handler: H) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Into<BoxedError>,
        H: FnOnce(Cause) -> Self,
    {
        capture_async(operation)
            .await
            .map_or_else(handler, |()| Self::success())
    }
}

impl<T> ValueOutcome<T> {
    /// Runs `operation`, keeping its value or absorbing its failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::ValueOutcome;
    ///
    /// let parsed = ValueOutcome::attempt(|| "42".parse::<i32>());
    /// assert_eq!(parsed.value(), Ok(&42));
    ///
    /// let panicked: ValueOutcome<i32> = ValueOutcome::attempt(|| -> Result<i32, String> {
    ///     panic!("Bad Data")
    /// });
    /// assert_eq!(panicked.error().unwrap().message(), "Bad Data");
    /// ```
    pub fn attempt<F, E>(operation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxedError>,
    {
        Self::attempt_with(operation, |cause| Self::from_error(Error::from_shared(cause)))
    }

    /// Runs `operation`, letting `handler` build the failure from the cause.
    pub fn attempt_with<F, E, H>(operation: F, handler: H) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxedError>,
        H: FnOnce(Cause) -> Self,
    {
        capture(operation).map_or_else(handler, Self::success)
    }

    /// Asynchronous form of [`ValueOutcome::attempt`].
    #[cfg(feature = "async")]
    pub async fn attempt_async<F, Fut, E>(operation: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<BoxedError>,
    {
        Self::attempt_async_with(operation, |cause| {
            Self::from_error(Error::from_shared(cause))
        })
        .await
    }

    /// Asynchronous form of [`ValueOutcome::attempt_with`].
    #[cfg(feature = "async")]
    pub async fn attempt_async_with<F, Fut, E, H>(operation: F, handler: H) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<BoxedError>,
        H: FnOnce(Cause) -> Self,
    {
        capture_async(operation)
            .await
            .map_or_else(handler, Self::success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_capture_ok() {
        let captured = capture(|| Ok::<_, String>(5));
        assert_eq!(captured.ok(), Some(5));
    }

    #[rstest]
    fn test_capture_err_keeps_message() {
        let captured = capture(|| Err::<(), _>(String::from("Bad Data")));
        assert_eq!(captured.unwrap_err().to_string(), "Bad Data");
    }

    #[rstest]
    fn test_capture_panic_records_panicked() {
        let captured = capture(|| -> Result<(), String> { panic!("exploded") });
        let cause = captured.unwrap_err();
        assert!(cause.is::<Panicked>());
        assert_eq!(cause.to_string(), "exploded");
    }

    #[rstest]
    fn test_default_failure_shares_cause() {
        let outcome = Outcome::attempt(|| Err::<(), _>(std::fmt::Error));
        let error = outcome.error().unwrap();
        assert!(error.cause().value().unwrap().is::<std::fmt::Error>());
    }
}
