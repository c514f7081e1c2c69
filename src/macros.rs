//! Macros for settling heterogeneous batches.
//!
//! - `settle_all!`: batch closures of distinct types
//! - `settle_all_async!`: batch futures of distinct types

/// Settle a batch of closures that may each have a distinct type.
///
/// [`settle_all`](fn@crate::settle_all) requires every operation in the batch
/// to share one concrete type; this macro boxes each entry through
/// [`boxed_op`](crate::batch::boxed_op) so any mix of closures returning the
/// same `Result<T, E>` can be settled together.
///
/// ```
/// use settled::settle_all;
///
/// fn third() -> Result<i32, String> {
///     Ok(3)
/// }
///
/// let outcomes = settle_all![
///     || Ok(1),
///     || Err("second failed".to_string()),
///     third,
/// ];
///
/// assert_eq!(outcomes.len(), 3);
/// assert!(outcomes[0].success);
/// assert!(!outcomes[1].success);
/// assert_eq!(outcomes[2].value, Some(3));
/// ```
#[macro_export]
macro_rules! settle_all {
    ($($op:expr),+ $(,)?) => {
        $crate::settle_all(::std::vec![
            $($crate::batch::boxed_op($op)),+
        ])
    };
}

/// Settle a batch of futures that may each have a distinct type.
///
/// The asynchronous counterpart of [`settle_all!`]: each entry is pinned and
/// boxed through [`boxed_future`](crate::batch::boxed_future), then awaited
/// strictly in order. The expansion is itself a future and must be awaited.
#[macro_export]
macro_rules! settle_all_async {
    ($($op:expr),+ $(,)?) => {
        $crate::settle_all_async(::std::vec![
            $($crate::batch::boxed_future($op)),+
        ])
    };
}
