//! Error descriptor carried by failed outcomes.
//!
//! An [`Error`] is an immutable pair of a human-readable message and an
//! optional originating cause. It is built either from a literal message
//! (no cause) or from a failure value implementing [`std::error::Error`],
//! in which case the message is taken from the cause's `Display` output.
//!
//! Causes are shared behind an [`Arc`] so descriptors stay cheap to clone
//! and can cross threads.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::error::Error;
//!
//! let plain = Error::new("msg");
//! assert_eq!(plain.message(), "msg");
//! assert!(plain.cause().is_none());
//!
//! let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
//! let wrapped = Error::from_cause(io);
//! assert_eq!(wrapped.message(), "missing file");
//! assert!(wrapped.cause().is_some());
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::optional::Optional;

/// The originating failure shared by an [`Error`].
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Any owned failure value; strings, `&str` and every
/// `std::error::Error + Send + Sync` convert into it.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An immutable failure description: a message and an optional cause.
#[derive(Clone)]
pub struct Error {
    message: String,
    cause: Optional<Cause>,
}

impl Error {
    /// Creates an error from a message, without a cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: Optional::none(),
        }
    }

    /// Creates an error from a failure value, copying its message.
    pub fn from_cause<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(cause))
    }

    /// Creates an error from an already shared cause.
    pub fn from_shared(cause: Cause) -> Self {
        Self {
            message: cause.to_string(),
            cause: Optional::some(cause),
        }
    }

    /// Returns the message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the originating cause, absent for message-only errors.
    #[inline]
    pub const fn cause(&self) -> &Optional<Cause> {
        &self.cause
    }
}

/// Two errors are equal when their messages match and they share the same
/// cause instance (or both have none).
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        let same_cause = match (self.cause.as_option(), other.cause.as_option()) {
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        };
        same_cause && self.message == other.message
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Error")
            .field("message", &self.message)
            .field("cause", &self.cause)
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_option()
            .map(|cause| &**cause as &(dyn std::error::Error + 'static))
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<BoxedError> for Error {
    fn from(cause: BoxedError) -> Self {
        Self::from_shared(Arc::from(cause))
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.message)
    }
}

// =============================================================================
// Panicked
// =============================================================================

/// The cause recorded when an attempted operation panics.
///
/// # Examples
///
/// ```rust
/// use outcomes::error::Panicked;
///
/// let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
/// let panicked = Panicked::from_payload(payload.as_ref());
/// assert_eq!(panicked.message(), "boom");
/// assert_eq!(format!("{panicked}"), "boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Extracts the panic message from a `catch_unwind` payload.
    ///
    /// Payloads that are neither `&str` nor `String` are reported as
    /// `"Unknown panic"`.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(string) = payload.downcast_ref::<&str>() {
            (*string).to_string()
        } else if let Some(string) = payload.downcast_ref::<String>() {
            string.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self { message }
    }

    /// Returns the panic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for Panicked {}
