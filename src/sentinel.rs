//! The shared "not an error" placeholder.
//!
//! Successful outcomes in the sentinel-error shapes keep their error slot
//! populated so the slot never needs to be optional. The value that fills it
//! is a single process-wide [`NotAnError`] instance whose message warns
//! against reading it as a real failure.

/// The placeholder occupying the error slot of a successful outcome.
///
/// There is exactly one instance per process, reachable through
/// [`NotAnError::shared`]. It cannot be constructed by callers, and equality
/// is pointer identity, so the only meaningful check is "is this the shared
/// instance", which is precisely the check callers should *not* be relying
/// on to detect success. Branch on the outcome's `success` flag or on the
/// presence of its value; the sentinel exists so that forgetting to do so
/// produces a loud, self-describing value instead of a silent bug.
#[derive(thiserror::Error)]
#[error(
    "this is not an error: the operation succeeded. \
     Check the outcome's value (or its success flag) before inspecting the error slot"
)]
pub struct NotAnError {
    _private: (),
}

static SHARED: NotAnError = NotAnError { _private: () };

impl NotAnError {
    /// Get the process-wide shared instance.
    ///
    /// Every call returns the same `&'static` reference; successful outcomes
    /// all hold this one instance, never a copy.
    pub fn shared() -> &'static NotAnError {
        &SHARED
    }
}

impl PartialEq for NotAnError {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for NotAnError {}

impl std::fmt::Debug for NotAnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NotAnError")
    }
}
