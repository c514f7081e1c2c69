//! Tests for the settling invokers and outcome shapes.
//!
//! ## Test Organization
//!
//! - `common`: Shared error types and the vending-machine fixture
//! - `single`: Single-call invokers, sync and async, pair and triple forms
//! - `batch`: All-settled batches, ordering, and the heterogeneous macros
//! - `optional`: The nullable-error shape for `Option`-returning operations
//! - `roundtrip`: Serde round trips, including sentinel rehydration

mod common;

mod roundtrip;
