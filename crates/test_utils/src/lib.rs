//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! baggage service test suite.
//!
//! # Modules
//!
//! - `fixtures`: The reference passenger journey and fixed timestamps
//! - `builders`: Builder for services pre-populated with passengers and bags
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
