//! Baggage Claims Domain
//!
//! This crate implements claims raised against a bag for loss or damage,
//! from filing through settlement.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Pending --settle()--> Settled(Loss | Damage)
//! ```
//!
//! Settlement is terminal: a settled claim cannot be settled again, and its
//! amount is fixed by the [`SettlementPolicy`] in force at settlement time.

pub mod claim;
pub mod settlement;
pub mod engine;
pub mod error;

pub use claim::{Claim, ClaimKind, ClaimStatus, ClaimedBag};
pub use settlement::SettlementPolicy;
pub use engine::ClaimEngine;
pub use error::ClaimError;
