//! Ports shared between domain crates
//!
//! A port is a trait owned by the kernel that one domain implements and
//! another consumes, so the consuming crate never depends on the
//! implementing one.
//!
//! ```text
//! domain_claims (ClaimEngine) ──uses──▶ ClaimantPort ◀──implements── domain_passenger
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! // In domain_passenger
//! impl ClaimantPort for PassengerDirectory { ... }
//!
//! // In domain_claims
//! engine.raise(claim_id, &bag, kind, description, &directory)?;
//! ```

use std::fmt;
use thiserror::Error;

use crate::error::ErrorKind;
use crate::identifiers::{ClaimId, PaxId};

/// Error type for port operations
///
/// Provides a unified error type that all port implementations must use.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PortError::NotFound { .. } => ErrorKind::NotFound,
            PortError::Validation { .. } => ErrorKind::Validation,
            PortError::Conflict { .. } => ErrorKind::DuplicateId,
        }
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so they can be shared across threads.
pub trait DomainPort: Send + Sync + 'static {}

/// Records which claims a passenger has filed
///
/// Implemented by the passenger directory; the claim engine calls it while
/// holding its claim-map lock so that a claim is only stored once the
/// claimant has accepted it.
pub trait ClaimantPort: DomainPort {
    /// Appends `claim` to the claimant's filing history
    fn attach_claim(&self, claimant: &PaxId, claim: &ClaimId) -> Result<(), PortError>;
}
