//! Core Kernel - Foundational types shared by the baggage domains
//!
//! This crate provides the building blocks used across all domain modules:
//! - Strongly-typed identifiers for bags, passengers, claims and checkpoints
//! - Money and weight types with precise decimal arithmetic
//! - An injectable clock for checkpoint timestamps
//! - The shared error taxonomy and the claimant port

pub mod money;
pub mod clock;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{Money, Currency, MoneyError, Weight};
pub use clock::{Clock, SystemClock, ManualClock};
pub use identifiers::{BagTag, PaxId, ClaimId, CheckpointId};
pub use error::{CoreError, ErrorKind};
pub use ports::{ClaimantPort, PortError};
