//! Success-or-failure value produced by every upstream fetch.

use serde::{Deserialize, Serialize};

use crate::error::VidscopeError;

/// Result of a single upstream fetch.
///
/// Unlike `Result`, an `Outcome` is a plain value collected at a join point:
/// a `Failure` never short-circuits sibling fetches, it is recorded next to
/// them and interpreted later by whoever consumes the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum Outcome<T> {
    /// The fetch completed and produced a payload.
    Success(T),
    /// The fetch failed; carries the reason.
    Failure(VidscopeError),
}

impl<T> Outcome<T> {
    /// True for `Success`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Borrow the payload, if any.
    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Self::Success(v) => Some(v),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure reason, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&VidscopeError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(e) => Some(e),
        }
    }

    /// Map the success payload, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(v) => Outcome::Success(f(v)),
            Self::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Return the payload or the provided default on failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(v) => v,
            Self::Failure(_) => default,
        }
    }

    /// Return the payload or compute a typed default from the failure.
    pub fn unwrap_or_else(self, f: impl FnOnce(VidscopeError) -> T) -> T {
        match self {
            Self::Success(v) => v,
            Self::Failure(e) => f(e),
        }
    }

    /// Convert into a `Result` for `?`-style propagation.
    ///
    /// # Errors
    /// Returns the failure reason when this is `Failure`.
    pub fn into_result(self) -> Result<T, VidscopeError> {
        self.into()
    }
}

impl<T> From<Result<T, VidscopeError>> for Outcome<T> {
    fn from(r: Result<T, VidscopeError>) -> Self {
        match r {
            Ok(v) => Self::Success(v),
            Err(e) => Self::Failure(e),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, VidscopeError> {
    fn from(o: Outcome<T>) -> Self {
        match o {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(e) => Err(e),
        }
    }
}
