//! Baggage domain errors

use chrono::{DateTime, Utc};
use thiserror::Error;

use core_kernel::{BagTag, CheckpointId, CoreError, ErrorKind, MoneyError};

/// Errors that can occur in the baggage domain
#[derive(Debug, Error)]
pub enum BaggageError {
    #[error("Bag not found: {0}")]
    BagNotFound(BagTag),

    #[error("Bag tag already registered: {0}")]
    DuplicateTag(BagTag),

    #[error("Invalid bag weight: {0}")]
    InvalidWeight(#[from] MoneyError),

    #[error("Checkpoint name cannot be empty")]
    EmptyCheckpointName,

    #[error("Checkpoint {0} is already on the route")]
    DuplicateCheckpoint(CheckpointId),

    #[error("Checkpoint at {attempted} precedes last scan at {last}")]
    OutOfOrderCheckpoint {
        last: DateTime<Utc>,
        attempted: DateTime<Utc>,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl BaggageError {
    /// Classifies the error into the shared taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            BaggageError::BagNotFound(_) => ErrorKind::NotFound,
            BaggageError::DuplicateTag(_) | BaggageError::DuplicateCheckpoint(_) => {
                ErrorKind::DuplicateId
            }
            BaggageError::InvalidWeight(_)
            | BaggageError::EmptyCheckpointName
            | BaggageError::OutOfOrderCheckpoint { .. } => ErrorKind::Validation,
            BaggageError::Core(err) => err.kind(),
        }
    }
}
