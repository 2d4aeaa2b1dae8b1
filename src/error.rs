//! Error type shared by every `StringSet` backend.

use std::collections::TryReserveError;

/// The error type for string-set operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// Memory could not be reserved for a node, an edge or a string.
    ///
    /// The set is left exactly as it was before the failing call.
    AllocationFailure,
    /// An argument that must be a non-empty string was empty.
    ///
    /// The payload names the offending parameter.
    InvalidArgument(&'static str),
}

impl core::fmt::Display for SetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SetError::AllocationFailure => f.write_str("memory allocation failed"),
            SetError::InvalidArgument(param) => write!(f, "`{param}` must be a non-empty string"),
        }
    }
}

impl std::error::Error for SetError {}

impl From<TryReserveError> for SetError {
    fn from(_: TryReserveError) -> Self {
        SetError::AllocationFailure
    }
}

/// Rejects empty strings for parameters that require at least one character.
pub(crate) fn require_non_empty(value: &str, param: &'static str) -> Result<(), SetError> {
    if value.is_empty() {
        Err(SetError::InvalidArgument(param))
    } else {
        Ok(())
    }
}
