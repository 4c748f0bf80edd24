//! Claims domain errors

use thiserror::Error;

use core_kernel::{ClaimId, ErrorKind, MoneyError, PortError};
use crate::claim::{ClaimKind, ClaimStatus};

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    #[error("Duplicate claim: {0}")]
    DuplicateClaim(ClaimId),

    #[error("Unknown claim kind: {0:?}")]
    UnknownKind(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: ClaimStatus, to: ClaimStatus },

    #[error("No payout rate configured for {0} claims")]
    NoPayoutRate(ClaimKind),

    #[error("Invalid payout rate for {kind} claims: {reason}")]
    InvalidRate { kind: ClaimKind, reason: String },

    #[error("Claimant rejected claim: {0}")]
    Claimant(#[from] PortError),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl ClaimError {
    /// Classifies the error into the shared taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClaimError::ClaimNotFound(_) => ErrorKind::NotFound,
            ClaimError::DuplicateClaim(_) => ErrorKind::DuplicateId,
            ClaimError::InvalidStatusTransition { .. } => ErrorKind::InvalidState,
            ClaimError::UnknownKind(_)
            | ClaimError::NoPayoutRate(_)
            | ClaimError::InvalidRate { .. }
            | ClaimError::Money(_) => ErrorKind::Validation,
            ClaimError::Claimant(err) => err.kind(),
        }
    }
}
