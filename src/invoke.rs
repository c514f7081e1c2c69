//! Single-call invokers: run one fallible operation and settle its result.
//!
//! Synchronous invokers take a zero-argument closure returning `Result` and
//! run it exactly once on the caller's thread. Asynchronous invokers take the
//! operation's future and await it at a single suspension point, on whatever
//! execution context the caller already uses; nothing is spawned, and no
//! cancellation or timeout policy is layered on top of the host's.
//!
//! The raised error is transported verbatim into the outcome's error slot; it
//! is never inspected, wrapped, or re-raised.

use std::future::Future;

use crate::outcome::{OptionalOutcome, Outcome, OutcomePair};

/// Run a fallible operation and settle it into the triple form.
///
/// On success the error slot holds the shared sentinel: check `success` (or
/// `value`) before reading it.
///
/// ```
/// use settled::settle;
///
/// let outcome = settle(|| "17".parse::<i32>());
/// assert!(outcome.success);
/// assert_eq!(outcome.value, Some(17));
/// ```
pub fn settle<T, E, F>(op: F) -> Outcome<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    match op() {
        Ok(value) => Outcome::from_success(value),
        Err(error) => Outcome::from_failure(error),
    }
}

/// Run a fallible operation and settle it into the pair form.
///
/// Same contract as [`settle`] with the success flag dropped. The error slot
/// still carries the sentinel on success, so branch on the presence of
/// `value`, not on the error slot.
pub fn settle_pair<T, E, F>(op: F) -> OutcomePair<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    settle(op).into_pair()
}

/// Run a fallible operation whose result is itself optional.
///
/// An `Ok(None)` return is a legitimate success, not a failure, so the
/// resulting shape uses a plain optional error slot instead of the sentinel:
/// `error` is `None` exactly when nothing was raised.
///
/// ```
/// use settled::settle_optional;
///
/// let users = ["ada", "grace"];
/// let outcome = settle_optional(|| -> Result<Option<&str>, String> {
///     Ok(users.iter().copied().find(|u| *u == "linus"))
/// });
/// assert!(outcome.success);
/// assert!(outcome.value.is_none());
/// assert!(outcome.error.is_none());
/// ```
pub fn settle_optional<T, E, F>(op: F) -> OptionalOutcome<T, E>
where
    F: FnOnce() -> Result<Option<T>, E>,
{
    match op() {
        Ok(value) => OptionalOutcome::from_success(value),
        Err(error) => OptionalOutcome::from_failure(error),
    }
}

/// Await a fallible operation and settle it into the triple form.
///
/// The future is awaited to completion at this single suspension point;
/// cancellation of the enclosing context propagates exactly as the host
/// runtime defines it.
pub async fn settle_async<T, E, Fut>(op: Fut) -> Outcome<T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    match op.await {
        Ok(value) => Outcome::from_success(value),
        Err(error) => Outcome::from_failure(error),
    }
}

/// Await a fallible operation and settle it into the pair form.
pub async fn settle_pair_async<T, E, Fut>(op: Fut) -> OutcomePair<T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    settle_async(op).await.into_pair()
}

/// Await a fallible operation whose result is itself optional.
///
/// The asynchronous counterpart of [`settle_optional`]: `Ok(None)` settles as
/// a success with both `value` and `error` absent.
pub async fn settle_optional_async<T, E, Fut>(op: Fut) -> OptionalOutcome<T, E>
where
    Fut: Future<Output = Result<Option<T>, E>>,
{
    match op.await {
        Ok(value) => OptionalOutcome::from_success(value),
        Err(error) => OptionalOutcome::from_failure(error),
    }
}
