//! Service error handling

use thiserror::Error;

use core_kernel::{CoreError, ErrorKind};
use domain_baggage::BaggageError;
use domain_claims::ClaimError;
use domain_passenger::PassengerError;

/// Errors returned by the service facade
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Baggage(#[from] BaggageError),

    #[error(transparent)]
    Passenger(#[from] PassengerError),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServiceError {
    /// Classifies the error; configuration problems count as bad input
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Baggage(err) => err.kind(),
            ServiceError::Passenger(err) => err.kind(),
            ServiceError::Claim(err) => err.kind(),
            ServiceError::Core(err) => err.kind(),
            ServiceError::Config(_) => ErrorKind::Validation,
        }
    }
}

impl From<config::ConfigError> for ServiceError {
    fn from(err: config::ConfigError) -> Self {
        ServiceError::Config(err.to_string())
    }
}
