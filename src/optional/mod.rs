//! Optional container - a value that may or may not be present.
//!
//! This module provides [`Optional<T>`], a container holding zero or one
//! value. Absence is a first-class state rather than a sentinel of `T`, and
//! reading an absent value is reported as a [`ContractError`] instead of
//! being silently coerced into a default.
//!
//! A present `Optional` can never be built from a missing value:
//! [`Optional::try_new`] and [`Optional::try_set`] accept anything that
//! converts into a `std::option::Option<T>` and reject `None` with
//! [`ContractError::InvalidArgument`]. Structural conversion from an
//! `Option<T>`, where `None` simply means absent, is spelled out separately
//! as [`Optional::from_option`].
//!
//! # Examples
//!
//! ```rust
//! use outcomes::optional::Optional;
//!
//! let mut name = Optional::some("Ada".to_string());
//! assert!(name.is_some());
//! assert_eq!(name.value().map(String::as_str), Ok("Ada"));
//!
//! name.unset();
//! assert!(name.is_none());
//! assert_eq!(name.value_or("anonymous".to_string()), "anonymous");
//! ```

mod compare;

use std::fmt;

use crate::contract::ContractError;

/// A container holding either one value or nothing.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use outcomes::optional::Optional;
///
/// let present: Optional<i32> = 20.into();
/// let absent: Optional<i32> = Optional::none();
///
/// assert_eq!(present.value(), Ok(&20));
/// assert!(absent.value().unwrap_err().is_invalid_state());
/// assert!(absent < present);
/// ```
#[derive(Clone, Copy)]
pub struct Optional<T> {
    slot: Option<T>,
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an absent `Optional`.
    #[inline]
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Creates an absent `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::optional::Optional;
    ///
    /// let absent: Optional<String> = Optional::none();
    /// assert!(absent.is_none());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self { slot: None }
    }

    /// Creates a present `Optional` holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self { slot: Some(value) }
    }

    /// Creates a present `Optional`, rejecting a missing value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidArgument`] when `value` converts to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::optional::Optional;
    ///
    /// assert_eq!(Optional::<i32>::try_new(7).unwrap().value(), Ok(&7));
    ///
    /// let missing: Option<i32> = None;
    /// let error = Optional::<i32>::try_new(missing).unwrap_err();
    /// assert_eq!(error.message(), "Value cannot be absent.");
    /// ```
    pub fn try_new(value: impl Into<Option<T>>) -> Result<Self, ContractError> {
        value
            .into()
            .map(Self::some)
            .ok_or_else(ContractError::absent_value)
    }

    /// Converts a standard `Option` structurally: `None` becomes absent.
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        Self { slot: option }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Makes this instance present with `value`, replacing any previous value.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.slot = Some(value);
    }

    /// Makes this instance present, rejecting a missing value.
    ///
    /// The instance is left untouched when the value is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidArgument`] when `value` converts to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::optional::Optional;
    ///
    /// let mut option = Optional::some("Hello");
    /// assert!(option.try_set(None).unwrap_err().is_invalid_argument());
    /// assert_eq!(option.value(), Ok(&"Hello"));
    /// ```
    pub fn try_set(&mut self, value: impl Into<Option<T>>) -> Result<(), ContractError> {
        let value = value.into().ok_or_else(ContractError::absent_value)?;
        self.slot = Some(value);
        Ok(())
    }

    /// Makes this instance absent.
    #[inline]
    pub fn unset(&mut self) {
        self.slot = None;
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.slot.is_none()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns a reference to the held value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidState`] when the instance is absent.
    #[inline]
    pub fn value(&self) -> Result<&T, ContractError> {
        self.slot.as_ref().ok_or_else(ContractError::empty_instance)
    }

    /// Returns a mutable reference to the held value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidState`] when the instance is absent.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, ContractError> {
        self.slot.as_mut().ok_or_else(ContractError::empty_instance)
    }

    /// Unwraps the held value, consuming the `Optional`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidState`] naming `T` when the instance
    /// is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::optional::Optional;
    ///
    /// let value: f32 = Optional::some(2.5_f32).into_value().unwrap();
    /// assert_eq!(value, 2.5);
    ///
    /// let error = Optional::<i32>::none().into_value().unwrap_err();
    /// assert_eq!(
    ///     error.message(),
    ///     "An empty Optional of i32 cannot be converted to a value of type i32."
    /// );
    /// ```
    pub fn into_value(self) -> Result<T, ContractError> {
        self.slot.ok_or_else(|| {
            let name = std::any::type_name::<T>();
            ContractError::invalid_state(format!(
                "An empty Optional of {name} cannot be converted to a value of type {name}."
            ))
        })
    }

    /// Returns the held value, or `default` when absent.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.slot.unwrap_or(default)
    }

    /// Returns the held value, or computes one when absent.
    #[inline]
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.slot.unwrap_or_else(default)
    }

    // =========================================================================
    // Borrowing and Conversion
    // =========================================================================

    /// Borrows the held value as an `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            slot: self.slot.as_ref(),
        }
    }

    /// Mutably borrows the held value as an `Optional<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        Optional {
            slot: self.slot.as_mut(),
        }
    }

    /// Borrows the held value as a standard `Option<&T>`.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Converts into a standard `Option<T>`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.slot
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Runs exactly one of the two branches and returns its result.
    ///
    /// `on_some` receives the held value; `on_none` runs when absent. With
    /// unit-returning branches this is the action-only form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::optional::Optional;
    ///
    /// let label = Optional::some("data").match_with(|text| text.len(), || 0);
    /// assert_eq!(label, 4);
    ///
    /// let label = Optional::<&str>::none().match_with(|text| text.len(), || 0);
    /// assert_eq!(label, 0);
    /// ```
    #[inline]
    pub fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self.slot {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    /// Asynchronous form of [`Optional::match_with`].
    ///
    /// Only the selected branch's future is created and awaited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::optional::Optional;
    /// # futures::executor::block_on(async {
    ///
    /// let length = Optional::some("data")
    ///     .match_async(|text| async move { text.len() }, || async { 0 })
    ///     .await;
    /// assert_eq!(length, 4);
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub fn match_async<R, S, N, SomeFuture, NoneFuture>(
        self,
        on_some: S,
        on_none: N,
    ) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SomeFuture,
        N: FnOnce() -> NoneFuture,
        SomeFuture: Future<Output = R>,
        NoneFuture: Future<Output = R>,
    {
        use futures::future::Either;

        self.match_with(
            |value| Either::Left(on_some(value)),
            || Either::Right(on_none()),
        )
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            None => formatter.write_str("None"),
        }
    }
}

/// Present values render as themselves; absent renders as an empty string.
impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(value) => fmt::Display::fmt(value, formatter),
            None => Ok(()),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.slot
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.slot.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from_option)
    }
}
