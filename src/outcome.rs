//! Outcome shapes produced by settling a fallible operation.
//!
//! Three shapes cover the contracts in this crate:
//!
//! - [`Outcome`]: the full triple of error slot, optional value, and
//!   success flag.
//! - [`OutcomePair`]: the triple with the flag dropped; callers branch on the
//!   presence of `value` instead.
//! - [`OptionalOutcome`]: for operations whose own return type is
//!   `Option<T>`. Its error slot is a plain `Option<E>` rather than a
//!   sentinel-filled [`Caught`], so a successful-but-absent value is never
//!   confused with the sentinel convention.
//!
//! [`Outcome::from_success`] and [`Outcome::from_failure`] (and their
//! [`OptionalOutcome`] counterparts) are the only paths that populate an
//! outcome; the invokers in [`crate::invoke`] and [`crate::batch`] all funnel
//! through them.

use serde::{Deserialize, Serialize};

use crate::sentinel::NotAnError;

// ============================================================================
// Error Slot
// ============================================================================

/// The always-populated error slot of a sentinel-error outcome.
///
/// On failure it carries the raised error verbatim; on success it carries the
/// shared [`NotAnError`] placeholder so the slot never needs to be optional.
/// This is the documented foot-gun of the sentinel convention: inspecting the
/// slot without first checking the outcome's `success` flag (or `value`)
/// hands you the sentinel, whose message tells you exactly what you did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caught<E> {
    /// No failure occurred; holds the process-wide shared placeholder.
    NotAnError(&'static NotAnError),
    /// The failure raised by the operation, passed through unchanged.
    Raised(E),
}

impl<E> Caught<E> {
    /// The slot for a successful outcome: the shared placeholder.
    pub fn placeholder() -> Self {
        Self::NotAnError(NotAnError::shared())
    }

    /// Returns `true` if this slot holds the placeholder (no failure).
    pub fn is_not_an_error(&self) -> bool {
        matches!(self, Self::NotAnError(_))
    }

    /// Returns `true` if this slot holds a raised failure.
    pub fn is_raised(&self) -> bool {
        matches!(self, Self::Raised(_))
    }

    /// Get the raised failure, if any.
    pub fn raised(&self) -> Option<&E> {
        match self {
            Self::NotAnError(_) => None,
            Self::Raised(e) => Some(e),
        }
    }

    /// Consume the slot and return the raised failure, if any.
    pub fn into_raised(self) -> Option<E> {
        match self {
            Self::NotAnError(_) => None,
            Self::Raised(e) => Some(e),
        }
    }

    /// Get the sentinel reference, if this slot holds it.
    ///
    /// Useful for identity assertions: every successful outcome's slot holds
    /// the *same* `&'static` instance.
    pub fn sentinel(&self) -> Option<&'static NotAnError> {
        match self {
            Self::NotAnError(s) => Some(s),
            Self::Raised(_) => None,
        }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for Caught<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnError(s) => s.fmt(f),
            Self::Raised(e) => e.fmt(f),
        }
    }
}

// Serde representation: the placeholder variant carries no payload on the
// wire and rehydrates to the shared instance, so identity survives a
// round trip.

#[derive(Serialize)]
#[serde(rename = "Caught")]
enum CaughtSer<'a, E> {
    NotAnError,
    Raised(&'a E),
}

#[derive(Deserialize)]
#[serde(rename = "Caught")]
enum CaughtDe<E> {
    NotAnError,
    Raised(E),
}

impl<E: Serialize> Serialize for Caught<E> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NotAnError(_) => CaughtSer::<E>::NotAnError.serialize(serializer),
            Self::Raised(e) => CaughtSer::Raised(e).serialize(serializer),
        }
    }
}

impl<'de, E: Deserialize<'de>> Deserialize<'de> for Caught<E> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match CaughtDe::deserialize(deserializer)? {
            CaughtDe::NotAnError => Self::placeholder(),
            CaughtDe::Raised(e) => Self::Raised(e),
        })
    }
}

// ============================================================================
// Outcome (triple form)
// ============================================================================

/// The settled result of one fallible operation: error slot, value, flag.
///
/// Invariant (upheld by [`Outcome::from_success`] and
/// [`Outcome::from_failure`], the only constructors used by this crate):
/// `success == true` iff `error` holds the sentinel, and on failure `value`
/// is always `None`. Branch on `success` (or on `value`) before reading
/// `error`; on success the slot holds [`NotAnError`], not an absent error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome<T, E> {
    /// The sentinel on success, or the raised failure.
    pub error: Caught<E>,
    /// The operation's return value; `None` on failure.
    pub value: Option<T>,
    /// Whether the operation completed without raising.
    pub success: bool,
}

impl<T, E> Outcome<T, E> {
    /// Build the outcome of a successful operation.
    pub fn from_success(value: T) -> Self {
        Self {
            error: Caught::placeholder(),
            value: Some(value),
            success: true,
        }
    }

    /// Build the outcome of a failed operation.
    pub fn from_failure(error: E) -> Self {
        Self {
            error: Caught::Raised(error),
            value: None,
            success: false,
        }
    }

    /// Returns `true` if the operation completed without raising.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns `true` if the operation raised a failure.
    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// Get the raised failure, if any.
    pub fn raised(&self) -> Option<&E> {
        self.error.raised()
    }

    /// Drop the success flag, leaving the pair form.
    pub fn into_pair(self) -> OutcomePair<T, E> {
        OutcomePair {
            error: self.error,
            value: self.value,
        }
    }

    /// Destructure into `(error, value, success)`.
    pub fn into_parts(self) -> (Caught<E>, Option<T>, bool) {
        (self.error, self.value, self.success)
    }

    /// Convert back into a `Result`.
    ///
    /// Outcomes built by this crate's invokers always carry `Some(value)` on
    /// success, so the `Ok` arm's option is only ever `None` for outcomes
    /// assembled by hand.
    pub fn into_result(self) -> Result<Option<T>, E> {
        match self.error {
            Caught::NotAnError(_) => Ok(self.value),
            Caught::Raised(e) => Err(e),
        }
    }
}

// ============================================================================
// Outcome (pair form)
// ============================================================================

/// The two-field view of an [`Outcome`], without the success flag.
///
/// The error slot still carries the sentinel on success, so the presence of
/// `value`, not the error slot, is what distinguishes success from failure
/// in this form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomePair<T, E> {
    /// The sentinel on success, or the raised failure.
    pub error: Caught<E>,
    /// The operation's return value; `None` on failure.
    pub value: Option<T>,
}

impl<T, E> OutcomePair<T, E> {
    /// Destructure into `(error, value)`.
    pub fn into_parts(self) -> (Caught<E>, Option<T>) {
        (self.error, self.value)
    }
}

impl<T, E> From<Outcome<T, E>> for OutcomePair<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_pair()
    }
}

// ============================================================================
// Optional Outcome (nullable-error triple)
// ============================================================================

/// The settled result of an operation whose own return type is `Option<T>`.
///
/// An absent value is a legitimate successful result here, so this shape
/// deliberately avoids the sentinel: on success the error slot is `None`,
/// and `success` tracks only whether a failure was raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalOutcome<T, E> {
    /// The raised failure, or `None` when the operation succeeded.
    pub error: Option<E>,
    /// The operation's return value; may be `None` on success too.
    pub value: Option<T>,
    /// Whether the operation completed without raising.
    pub success: bool,
}

impl<T, E> OptionalOutcome<T, E> {
    /// Build the outcome of a successful operation, present or absent.
    pub fn from_success(value: Option<T>) -> Self {
        Self {
            error: None,
            value,
            success: true,
        }
    }

    /// Build the outcome of a failed operation.
    pub fn from_failure(error: E) -> Self {
        Self {
            error: Some(error),
            value: None,
            success: false,
        }
    }

    /// Returns `true` if the operation completed without raising.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns `true` if the operation raised a failure.
    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// Destructure into `(error, value, success)`.
    pub fn into_parts(self) -> (Option<E>, Option<T>, bool) {
        (self.error, self.value, self.success)
    }

    /// Convert back into a `Result`, keeping the value's own optionality.
    pub fn into_result(self) -> Result<Option<T>, E> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.value),
        }
    }
}
