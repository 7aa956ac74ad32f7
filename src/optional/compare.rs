//! Equality, hashing and ordering for [`Optional`].
//!
//! Absent instances are equal to each other and never equal to a present
//! one. In the ordering, absent sorts before every present value; two
//! present values compare by delegating to `T`.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::Optional;
use crate::contract::ContractError;

impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.slot, &other.slot) {
            (Some(left), Some(right)) => left == right,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.slot {
            Some(value) => {
                state.write_u8(1);
                value.hash(state);
            }
            None => state.write_u8(0),
        }
    }
}

impl<T: PartialOrd> PartialOrd for Optional<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.slot, &other.slot) {
            (Some(left), Some(right)) => left.partial_cmp(right),
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(_), None) => Some(Ordering::Greater),
        }
    }
}

impl<T: Ord> Ord for Optional<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.slot, &other.slot) {
            (Some(left), Some(right)) => left.cmp(right),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        }
    }
}

impl<T: PartialOrd> Optional<T> {
    /// Compares two instances, failing when their values are unordered.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidArgument`] when both instances are
    /// present and `T` defines no ordering between the two values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use outcomes::optional::Optional;
    ///
    /// assert_eq!(Optional::none().compare_to(&Optional::some(1.5)), Ok(Ordering::Less));
    ///
    /// let error = Optional::some(f64::NAN)
    ///     .compare_to(&Optional::some(1.0))
    ///     .unwrap_err();
    /// assert_eq!(error.message(), "Value type must support ordering.");
    /// ```
    pub fn compare_to(&self, other: &Self) -> Result<Ordering, ContractError> {
        self.partial_cmp(other)
            .ok_or_else(ContractError::unordered_value)
    }
}
