//! Tests for the asynchronous matching and chaining forms.
//!
//! `match_async`, `if_success_async` and `if_failure_async` select a branch
//! exactly like their synchronous counterparts, then await only the
//! selected branch's future.

#![cfg(feature = "async")]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use outcomes::helpers::{none, some};
use outcomes::optional::Optional;
use outcomes::outcome::{Outcome, ValueOutcome};
use rstest::rstest;
use tokio::sync::Mutex;

// =============================================================================
// Optional::match_async
// =============================================================================

#[rstest]
#[case(some("Valid data".to_string()), "Valid data")]
#[case(none(), "ERROR")]
#[tokio::test]
async fn optional_match_async_runs_one_action(
    #[case] option: Optional<String>,
    #[case] expected: &str,
) {
    let buffer = Arc::new(Mutex::new(String::new()));
    let on_some = Arc::clone(&buffer);
    let on_none = Arc::clone(&buffer);
    option
        .match_async(
            |text| async move {
                *on_some.lock().await = text;
            },
            || async move {
                *on_none.lock().await = "ERROR".to_string();
            },
        )
        .await;
    assert_eq!(*buffer.lock().await, expected);
}

#[tokio::test]
async fn optional_match_async_returns_branch_value() {
    let present = some("Valid data")
        .match_async(|text| async move { text.to_string() }, || async { "ERROR".to_string() })
        .await;
    assert_eq!(present, "Valid data");

    let absent = none::<&str>()
        .match_async(|text| async move { text.to_string() }, || async { "ERROR".to_string() })
        .await;
    assert_eq!(absent, "ERROR");
}

#[tokio::test]
async fn optional_match_async_does_not_create_other_branch() {
    let created = AtomicUsize::new(0);
    let length = some(vec![1, 2, 3])
        .match_async(
            |values| async move { values.len() },
            || {
                created.fetch_add(1, Ordering::SeqCst);
                async { 0 }
            },
        )
        .await;
    assert_eq!(length, 3);
    assert_eq!(created.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Outcome async forms
// =============================================================================

#[tokio::test]
async fn outcome_match_async_returns_branch_value() {
    let success = Outcome::success()
        .match_async(
            || async { "Valid Data".to_string() },
            |error| async move { error.message().to_string() },
        )
        .await;
    assert_eq!(success, "Valid Data");

    let failure = Outcome::failure("ERROR")
        .match_async(
            || async { "Valid Data".to_string() },
            |error| async move { error.message().to_string() },
        )
        .await;
    assert_eq!(failure, "ERROR");
}

#[tokio::test]
async fn outcome_if_success_async_chains() {
    let chained = Outcome::success()
        .if_success_async(|| async {
            tokio::task::yield_now().await;
            Outcome::failure("async step failed")
        })
        .await;
    assert_eq!(chained.error().unwrap().message(), "async step failed");
}

#[tokio::test]
async fn outcome_if_success_async_short_circuits() {
    let invoked = AtomicUsize::new(0);
    let chained = Outcome::failure("first")
        .if_success_async(|| {
            invoked.fetch_add(1, Ordering::SeqCst);
            async { Outcome::success() }
        })
        .await;
    assert_eq!(invoked.load(Ordering::SeqCst), 0);
    assert_eq!(chained.error().unwrap().message(), "first");
}

#[tokio::test]
async fn outcome_if_failure_async_recovers() {
    let chained = Outcome::failure("timeout")
        .if_failure_async(|error| async move {
            assert_eq!(error.message(), "timeout");
            Outcome::success()
        })
        .await;
    assert!(chained.is_success());
}

#[tokio::test]
async fn outcome_if_failure_async_short_circuits() {
    let chained = Outcome::success()
        .if_failure_async(|_| async { Outcome::failure("unexpected") })
        .await;
    assert!(chained.is_success());
}

// =============================================================================
// ValueOutcome async forms
// =============================================================================

#[rstest]
#[case(ValueOutcome::success("Valid Data".to_string()), "Valid Data")]
#[case(ValueOutcome::failure("ERROR"), "ERROR")]
#[tokio::test]
async fn value_outcome_match_async_returns_branch_value(
    #[case] outcome: ValueOutcome<String>,
    #[case] expected: &str,
) {
    let buffer = outcome
        .match_async(
            |text| async move { text },
            |error| async move { error.message().to_string() },
        )
        .await;
    assert_eq!(buffer, expected);
}

#[tokio::test]
async fn value_outcome_if_success_async_receives_payload() {
    let chained = ValueOutcome::success(20)
        .if_success_async(|value| async move { ValueOutcome::success(value * 2) })
        .await;
    assert_eq!(chained.value(), Ok(&40));
}

#[tokio::test]
async fn value_outcome_if_success_async_short_circuits() {
    let original: ValueOutcome<i32> = ValueOutcome::failure("bad");
    let chained = original
        .clone()
        .if_success_async(|_| async { ValueOutcome::success(0) })
        .await;
    assert_eq!(chained, original);
}

#[tokio::test]
async fn value_outcome_if_failure_async_receives_error() {
    let chained: ValueOutcome<i32> = ValueOutcome::failure("bad")
        .if_failure_async(|error| async move {
            ValueOutcome::failure(format!("Error: {}", error.message()))
        })
        .await;
    assert_eq!(chained.error().unwrap().message(), "Error: bad");
}

#[tokio::test]
async fn value_outcome_if_failure_async_short_circuits() {
    let chained = ValueOutcome::success(5)
        .if_failure_async(|_| async { ValueOutcome::success(0) })
        .await;
    assert_eq!(chained.value(), Ok(&5));
}
