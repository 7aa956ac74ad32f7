//! Contract violations reported by the containers.
//!
//! Every guarded accessor and every rejecting constructor in this crate
//! reports misuse through [`ContractError`]. The two variants mirror the two
//! kinds of misuse a caller can commit:
//!
//! - [`ContractError::InvalidArgument`]: a disallowed input was supplied
//!   (a missing value where a present one is required, or values that have
//!   no ordering relation).
//! - [`ContractError::InvalidState`]: a slot was read that is not populated
//!   (the value of an empty [`Optional`](crate::optional::Optional), the
//!   error of a successful outcome, and so on).
//!
//! Messages are fixed so callers can match on them deterministically.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::contract::ContractError;
//! use outcomes::optional::Optional;
//!
//! let empty: Optional<i32> = Optional::none();
//! let error = empty.value().unwrap_err();
//! assert!(error.is_invalid_state());
//! assert_eq!(error.message(), "The current Optional instance is empty.");
//! ```

use std::borrow::Cow;

/// Message used when a present value is required but a missing one is supplied.
pub const ABSENT_VALUE_MESSAGE: &str = "Value cannot be absent.";

/// Message used when an empty slot is read.
pub const EMPTY_INSTANCE_MESSAGE: &str = "The current Optional instance is empty.";

/// Message used when two values have no ordering relation.
pub const UNORDERED_VALUE_MESSAGE: &str = "Value type must support ordering.";

/// Message used when a value-carrying outcome is requested without a value.
pub const DEFAULT_CONSTRUCTOR_MESSAGE: &str = "Using the default constructor is not valid.";

/// A violation of a container's usage contract.
///
/// # Examples
///
/// ```rust
/// use outcomes::contract::ContractError;
///
/// let error = ContractError::invalid_argument("Value cannot be absent.");
/// assert_eq!(format!("{error}"), "invalid argument: Value cannot be absent.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContractError {
    /// A disallowed input was supplied.
    InvalidArgument(Cow<'static, str>),
    /// A slot that is not currently populated was read.
    InvalidState(Cow<'static, str>),
}

impl ContractError {
    /// Creates an [`ContractError::InvalidArgument`] with the given message.
    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates an [`ContractError::InvalidState`] with the given message.
    pub fn invalid_state(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Returns the fixed message describing the violation.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(message) | Self::InvalidState(message) => message,
        }
    }

    /// Returns `true` for [`ContractError::InvalidArgument`].
    #[inline]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` for [`ContractError::InvalidState`].
    #[inline]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }

    pub(crate) const fn absent_value() -> Self {
        Self::InvalidArgument(Cow::Borrowed(ABSENT_VALUE_MESSAGE))
    }

    pub(crate) const fn empty_instance() -> Self {
        Self::InvalidState(Cow::Borrowed(EMPTY_INSTANCE_MESSAGE))
    }

    pub(crate) const fn unordered_value() -> Self {
        Self::InvalidArgument(Cow::Borrowed(UNORDERED_VALUE_MESSAGE))
    }

    pub(crate) const fn default_constructor() -> Self {
        Self::InvalidState(Cow::Borrowed(DEFAULT_CONSTRUCTOR_MESSAGE))
    }
}

impl std::fmt::Display for ContractError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(formatter, "invalid argument: {message}"),
            Self::InvalidState(message) => write!(formatter, "invalid state: {message}"),
        }
    }
}

impl std::error::Error for ContractError {}
