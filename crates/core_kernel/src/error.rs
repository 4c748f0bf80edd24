//! Core error types used across the system

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::MoneyError;

/// The four failure categories every domain error maps onto
///
/// Callers branch on the category rather than on crate-specific variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed input: negative weight, empty name, unknown claim kind
    Validation,
    /// Identity collision on register or raise
    DuplicateId,
    /// Reference to an unregistered bag, passenger or claim
    NotFound,
    /// Illegal state transition, e.g. settling twice
    InvalidState,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "ValidationError",
            ErrorKind::DuplicateId => "DuplicateIdError",
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::InvalidState => "InvalidStateError",
        };
        f.write_str(name)
    }
}

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    /// Kernel failures are all bad input: blank keys, negative weights,
    /// out-of-range amounts
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Money(_) | CoreError::Validation(_) => ErrorKind::Validation,
        }
    }
}
