//! Pre-built Test Fixtures
//!
//! The reference journey used across the suite: one passenger on AI101 with
//! a single 20.5 kg bag that passes three checkpoints and is then claimed as
//! lost.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{Currency, ManualClock, Money};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for the reference passenger journey
pub struct ScenarioFixtures;

impl ScenarioFixtures {
    pub const PAX_ID: &'static str = "P001";
    pub const NAME: &'static str = "Seshanth";
    pub const FLIGHT_NO: &'static str = "AI101";
    pub const CONTACT: &'static str = "9876543210";

    pub const BAG_TAG: &'static str = "BAG101";
    pub const CHECKPOINTS: [&'static str; 3] = ["Check-in", "Security", "Loading"];

    pub const CLAIM_ID: &'static str = "CL001";
    pub const CLAIM_KIND: &'static str = "loss";
    pub const CLAIM_DESCRIPTION: &'static str = "Bag not delivered";

    /// Checked weight of the reference bag
    pub fn weight() -> Decimal {
        dec!(20.5)
    }

    /// Payout for losing the reference bag under the standard policy
    pub fn loss_payout() -> Money {
        Money::new(dec!(20500.0), Currency::USD)
    }

    /// Payout for damage to the reference bag under the standard policy
    pub fn damage_payout() -> Money {
        Money::new(dec!(10250.0), Currency::USD)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Departure morning of the reference journey
    pub fn departure() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 6, 0, 0).unwrap()
    }

    /// A manual clock parked at departure
    pub fn manual_clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(Self::departure()))
    }
}
