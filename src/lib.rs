#![deny(missing_docs)]

//! Settled — explicit outcomes for operations that might fail.
//!
//! Instead of branching through `match`/`?` at every call site, wrap the
//! fallible operation once and receive a structured, inspectable outcome:
//!
//! - [`settle`] / [`settle_async`]: run one operation, get an [`Outcome`]
//!   carrying the error slot, the value, and a success flag
//! - [`settle_pair`] / [`settle_pair_async`]: the same without the flag
//! - [`settle_optional`] / [`settle_optional_async`]: for operations whose
//!   own return type is `Option<T>`, where an absent value is a success
//! - [`settle_all()`] / [`settle_all_async()`]: run a whole batch in order
//!   and report every outcome, never short-circuiting on failure
//!
//! # The sentinel convention
//!
//! A successful [`Outcome`] does not leave its error slot empty: it holds the
//! process-wide [`NotAnError`] placeholder, so the slot is never optional.
//! The deliberate consequence is that reading `error` without first checking
//! `success` (or `value`) on a successful call yields the sentinel, whose
//! message warns you about exactly this. Always branch on `success` or on
//! the presence of `value`:
//!
//! ```
//! use settled::settle;
//!
//! let outcome = settle(|| "41".parse::<i32>());
//! if outcome.success {
//!     assert_eq!(outcome.value, Some(41));
//! }
//! ```
//!
//! # All-settled batches
//!
//! ```
//! use settled::settle_all;
//!
//! let outcomes = settle_all![
//!     || Ok::<_, String>(1),
//!     || Err("second failed".to_string()),
//!     || Ok(3),
//! ];
//!
//! assert_eq!(outcomes.iter().filter(|o| o.success).count(), 2);
//! assert_eq!(outcomes[2].value, Some(3));
//! ```
//!
//! Errors pass through the library untouched: no wrapping, no
//! classification, no re-raising. Batches run strictly sequentially (the
//! async variants await each operation to completion before starting the
//! next), so outcomes are always index-aligned with their operations.

// Modules
pub mod batch;
pub mod invoke;
mod macros;
pub mod outcome;
pub mod sentinel;

// Re-exports for convenience
pub use batch::{boxed_future, boxed_op, settle_all, settle_all_async};
pub use invoke::{
    settle, settle_async, settle_optional, settle_optional_async, settle_pair, settle_pair_async,
};
pub use outcome::{Caught, OptionalOutcome, Outcome, OutcomePair};
pub use sentinel::NotAnError;

#[cfg(test)]
mod tests;
