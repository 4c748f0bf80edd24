//! Baggage Service
//!
//! This crate is the single entry point external callers use. It owns the
//! bag registry, the passenger directory and the claim engine, and
//! coordinates them so that every operation either completes or leaves all
//! three untouched.
//!
//! # Architecture
//!
//! - **Service**: the [`BaggageService`] facade
//! - **Reports**: read-only aggregations for presentation layers
//! - **Config**: settlement rates and logging, loaded from the environment
//! - **Error Handling**: one [`ServiceError`] classified into four kinds
//!
//! # Example
//!
//! ```rust
//! use baggage_service::BaggageService;
//! use rust_decimal_macros::dec;
//!
//! let service = BaggageService::default();
//! service.register_passenger("P001", "Seshanth", "AI101", "9876543210").unwrap();
//! service.register_bag("BAG101", dec!(20.5), "P001").unwrap();
//! service.record_movement("BAG101", "Check-in").unwrap();
//!
//! assert_eq!(service.locate_bag("BAG101").unwrap(), "Check-in");
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod service;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use report::{CheckpointLine, ClaimLine, ClaimsReport, RouteReport};
pub use service::BaggageService;
