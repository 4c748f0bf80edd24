//! Passenger domain errors

use thiserror::Error;

use core_kernel::{ClaimId, CoreError, ErrorKind, PaxId, PortError};

/// Errors that can occur in the passenger domain
#[derive(Debug, Error)]
pub enum PassengerError {
    /// Passenger with the given ID was not found
    #[error("Passenger not found: {0}")]
    PassengerNotFound(PaxId),

    /// Attempted to register a passenger that already exists
    #[error("Duplicate passenger: {0}")]
    DuplicatePassenger(PaxId),

    /// The claim is already on the passenger's filing history
    #[error("Claim {claim} already filed by passenger {pax}")]
    ClaimAlreadyAttached { pax: PaxId, claim: ClaimId },

    /// Passenger validation failed
    #[error("Passenger validation failed: {0}")]
    ValidationFailed(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PassengerError {
    /// Creates a ValidationFailed error from validation errors
    pub fn validation_failed(errors: Vec<String>) -> Self {
        PassengerError::ValidationFailed(errors.join("; "))
    }

    /// Classifies the error into the shared taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            PassengerError::PassengerNotFound(_) => ErrorKind::NotFound,
            PassengerError::DuplicatePassenger(_) | PassengerError::ClaimAlreadyAttached { .. } => {
                ErrorKind::DuplicateId
            }
            PassengerError::ValidationFailed(_) => ErrorKind::Validation,
            PassengerError::Core(err) => err.kind(),
        }
    }
}

impl From<PassengerError> for PortError {
    fn from(err: PassengerError) -> Self {
        let message = err.to_string();
        match err {
            PassengerError::PassengerNotFound(id) => PortError::not_found("Passenger", id),
            PassengerError::DuplicatePassenger(_) | PassengerError::ClaimAlreadyAttached { .. } => {
                PortError::conflict(message)
            }
            _ => PortError::validation(message),
        }
    }
}
