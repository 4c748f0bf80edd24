//! Passenger Domain
//!
//! This crate manages passenger records and the ordered list of claims each
//! passenger has filed.
//!
//! Passengers are created once at registration and afterwards only grow
//! their claim list. The directory implements [`core_kernel::ClaimantPort`],
//! which is how the claims domain files a claim against a passenger without
//! depending on this crate.
//!
//! # Examples
//!
//! ```rust
//! use core_kernel::{ClaimId, PaxId};
//! use domain_passenger::PassengerDirectory;
//!
//! let directory = PassengerDirectory::new();
//! let pax = PaxId::new("P001").unwrap();
//! directory
//!     .register(pax.clone(), "Seshanth", "AI101", "9876543210")
//!     .unwrap();
//!
//! directory.attach_claim(&pax, ClaimId::new("CL001").unwrap()).unwrap();
//! assert_eq!(directory.claims_of(&pax).unwrap().len(), 1);
//! ```

pub mod passenger;
pub mod directory;
pub mod error;
pub mod validation;

pub use passenger::{NewPassenger, Passenger};
pub use directory::PassengerDirectory;
pub use error::PassengerError;
pub use validation::{PassengerValidator, ValidationResult};
