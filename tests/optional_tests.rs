//! Unit tests for the `Optional<T>` container.
//!
//! `Optional` holds zero or one value:
//! - `some(value)`: present, reading returns the value
//! - `none()`: absent, reading reports an invalid state
//!
//! Missing values are rejected at construction, equality and ordering
//! treat absence as a first-class state, and absent renders as "".

use std::cell::RefCell;
use std::cmp::Ordering;

use outcomes::contract::ContractError;
use outcomes::helpers::{none, some};
use outcomes::optional::Optional;
use rstest::rstest;

fn assert_some<T: PartialEq + std::fmt::Debug + Copy>(option: Optional<T>, expected: T, fallback: T) {
    assert!(option.is_some());
    assert!(!option.is_none());
    assert_eq!(option.value(), Ok(&expected));
    assert_eq!(option.value_or(fallback), expected);
}

fn assert_none<T: PartialEq + std::fmt::Debug + Copy>(option: Optional<T>, fallback: T) {
    assert!(option.is_none());
    assert!(!option.is_some());
    let error = option.value().unwrap_err();
    assert!(error.is_invalid_state());
    assert_eq!(error.message(), "The current Optional instance is empty.");
    assert_eq!(option.value_or(fallback), fallback);
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn optional_some_holds_value() {
    assert_some(some(20), 20, -99);
    assert_some(Optional::some(1361), 1361, -99);
    assert_some(Optional::from(7), 7, -99);
}

#[rstest]
fn optional_none_is_absent() {
    assert_none(none::<i32>(), -99);
    assert_none(Optional::<i32>::new(), -99);
    assert_none(Optional::<i32>::default(), -99);
}

#[rstest]
fn optional_try_new_rejects_missing_value() {
    let missing: Option<String> = None;
    let error = Optional::<String>::try_new(missing).unwrap_err();
    assert!(error.is_invalid_argument());
    assert_eq!(error.message(), "Value cannot be absent.");
}

#[rstest]
fn optional_try_new_accepts_present_value() {
    let option = Optional::<String>::try_new(Some("Hello".to_string())).unwrap();
    assert_eq!(option.value().map(String::as_str), Ok("Hello"));
}

// =============================================================================
// Set / Unset
// =============================================================================

#[rstest]
fn optional_set_then_unset() {
    let mut option = Optional::some(1.5_f32);
    option.set(2.5);
    assert_some(option, 2.5, -99.0);

    option.unset();
    assert_none(option, -99.0);
}

#[rstest]
fn optional_unset_on_absent_stays_absent() {
    let mut option: Optional<u8> = none();
    option.unset();
    assert_none(option, 0);
}

#[rstest]
fn optional_try_set_rejects_missing_value() {
    let mut option = some("Hello");
    let error = option.try_set(None).unwrap_err();
    assert_eq!(error, ContractError::invalid_argument("Value cannot be absent."));
    assert_eq!(option.value(), Ok(&"Hello"));
}

// =============================================================================
// Matching
// =============================================================================

#[rstest]
#[case(some("Valid data".to_string()), "Valid data")]
#[case(none(), "ERROR")]
fn optional_match_runs_one_action(#[case] option: Optional<String>, #[case] expected: &str) {
    let buffer = RefCell::new(String::new());
    let calls = RefCell::new(0);
    option.match_with(
        |text| {
            *buffer.borrow_mut() = text;
            *calls.borrow_mut() += 1;
        },
        || {
            *buffer.borrow_mut() = "ERROR".to_string();
            *calls.borrow_mut() += 1;
        },
    );
    assert_eq!(buffer.into_inner(), expected);
    assert_eq!(calls.into_inner(), 1);
}

#[rstest]
#[case(some("Valid data"), "Valid data")]
#[case(none(), "ERROR")]
fn optional_match_returns_branch_value(#[case] option: Optional<&str>, #[case] expected: &str) {
    let buffer = option.match_with(|text| text, || "ERROR");
    assert_eq!(buffer, expected);
}

// =============================================================================
// Equality and Ordering
// =============================================================================

#[rstest]
fn optional_equality() {
    assert_eq!(none::<i32>(), none());
    assert_eq!(some(4), some(4));
    assert_ne!(some(4), some(5));
    assert_ne!(none(), some(0));
    assert_ne!(some(String::new()), none());
}

#[rstest]
fn optional_none_is_less_than_any_some() {
    assert!(none() < some(i64::MIN));
    assert!(some(i64::MIN) > none());
    assert!(none::<i64>() <= none());
    assert!(none::<i64>() >= none());
    assert!(!(none::<i64>() < none()));
}

#[rstest]
fn optional_some_values_compare_by_value() {
    assert!(some(1) < some(2));
    assert!(some("b") > some("a"));
    assert_eq!(some(3).cmp(&some(3)), Ordering::Equal);
}

#[rstest]
fn optional_sorting_puts_absent_first() {
    let mut values = vec![some(3), none(), some(1), none(), some(2)];
    values.sort();
    assert_eq!(values, vec![none(), none(), some(1), some(2), some(3)]);
}

#[rstest]
fn optional_compare_to_rejects_unordered_values() {
    let error = some(f64::NAN).compare_to(&some(f64::NAN)).unwrap_err();
    assert!(error.is_invalid_argument());
    assert_eq!(error.message(), "Value type must support ordering.");
}

#[rstest]
fn optional_compare_to_orders_absent_before_nan() {
    assert_eq!(none().compare_to(&some(f64::NAN)), Ok(Ordering::Less));
    assert_eq!(none::<f64>().compare_to(&none()), Ok(Ordering::Equal));
}

// =============================================================================
// Display and Conversion
// =============================================================================

#[rstest]
fn optional_display() {
    let mut option: Optional<f32> = 123.45.into();
    assert_eq!(option.to_string(), "123.45");

    option.unset();
    assert_eq!(option.to_string(), "");
}

#[rstest]
fn optional_into_value() {
    let value: f32 = Optional::some(2.5_f32).into_value().unwrap();
    assert!((value - 2.5).abs() < f32::EPSILON);

    let error = none::<i32>().into_value().unwrap_err();
    assert!(error.is_invalid_state());
    assert_eq!(
        error.message(),
        "An empty Optional of i32 cannot be converted to a value of type i32."
    );
}

#[rstest]
fn optional_std_option_bridge() {
    let present: Option<i32> = some(1).into();
    let absent: Option<i32> = none().into();
    assert_eq!(present, Some(1));
    assert_eq!(absent, None);
    assert_eq!(Optional::from_option(Some(2)), some(2));
}
