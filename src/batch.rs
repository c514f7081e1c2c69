//! Batched invokers with all-settled semantics.
//!
//! A batch runs its operations strictly in input order, one at a time, and
//! reports one triple-form outcome per operation at the same index. A failure
//! never stops, skips, or reorders later operations; the output vector is
//! returned only after every operation has been attempted.
//!
//! The asynchronous variant awaits each future to completion before polling
//! the next. Sequential execution is deliberate: it keeps the report
//! deterministic and order-preserving, and it means no state is shared across
//! operations beyond the output vector the batch owns exclusively.

use std::future::Future;
use std::pin::Pin;

use crate::invoke::{settle, settle_async};
use crate::outcome::Outcome;

/// Run every operation in order and report every outcome.
///
/// ```
/// use settled::{settle_all, Caught};
///
/// let outcomes = settle_all((1..=3).map(|n| {
///     move || {
///         if n == 2 {
///             Err(format!("op {n} failed"))
///         } else {
///             Ok(n * 10)
///         }
///     }
/// }));
///
/// assert_eq!(outcomes.len(), 3);
/// assert_eq!(outcomes[0].value, Some(10));
/// assert!(matches!(outcomes[1].error, Caught::Raised(_)));
/// assert_eq!(outcomes[2].value, Some(30));
/// ```
pub fn settle_all<T, E, F, I>(ops: I) -> Vec<Outcome<T, E>>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<T, E>,
{
    ops.into_iter().map(settle).collect()
}

/// Await every operation in order and report every outcome.
///
/// Each future is awaited to completion before the next is polled; there is
/// no concurrent fan-out. The outcomes are index-aligned 1:1 with the input.
pub async fn settle_all_async<T, E, Fut, I>(ops: I) -> Vec<Outcome<T, E>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<T, E>>,
{
    let ops = ops.into_iter();
    let mut outcomes = Vec::with_capacity(ops.size_hint().0);
    for op in ops {
        outcomes.push(settle_async(op).await);
    }
    outcomes
}

/// Erase a closure's concrete type so heterogeneous operations can share one
/// batch.
///
/// Closures of distinct types cannot populate a single `Vec`; boxing them to
/// a common `dyn FnOnce` can. The [`settle_all!`](crate::settle_all!) macro
/// does this for each entry.
pub fn boxed_op<'a, T, E, F>(op: F) -> Box<dyn FnOnce() -> Result<T, E> + 'a>
where
    F: FnOnce() -> Result<T, E> + 'a,
{
    Box::new(op)
}

/// Erase a future's concrete type so heterogeneous operations can share one
/// batch.
///
/// The asynchronous counterpart of [`boxed_op`], used by
/// [`settle_all_async!`](crate::settle_all_async!).
pub fn boxed_future<'a, T, E, Fut>(op: Fut) -> Pin<Box<dyn Future<Output = Result<T, E>> + 'a>>
where
    Fut: Future<Output = Result<T, E>> + 'a,
{
    Box::pin(op)
}
