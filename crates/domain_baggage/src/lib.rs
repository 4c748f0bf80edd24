//! Baggage Domain
//!
//! This crate owns bag records and their scan history, from registration at
//! check-in through every checkpoint the bag passes.
//!
//! # Bag Lifecycle
//!
//! ```text
//! Created -> <checkpoint 1> -> <checkpoint 2> -> ... -> <checkpoint N>
//! ```
//!
//! A bag's status is never stored independently: it is always the name of
//! the most recent checkpoint, or `Created` before the first scan.

pub mod baggage;
pub mod checkpoint;
pub mod registry;
pub mod error;

pub use baggage::{Baggage, STATUS_CREATED};
pub use checkpoint::{Checkpoint, CheckpointLog};
pub use registry::BaggageRegistry;
pub use error::BaggageError;
