//! Test Data Builders
//!
//! Builds services populated with just the passengers and bags a test
//! cares about.

use std::sync::Arc;

use baggage_service::BaggageService;
use core_kernel::Clock;
use domain_claims::SettlementPolicy;
use rust_decimal::Decimal;

use crate::fixtures::ScenarioFixtures;

/// Builder for a populated [`BaggageService`]
pub struct TestServiceBuilder {
    policy: SettlementPolicy,
    clock: Option<Arc<dyn Clock>>,
    passengers: Vec<(String, String, String, String)>,
    bags: Vec<(String, Decimal, String)>,
}

impl Default for TestServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestServiceBuilder {
    /// Creates an empty builder with the standard policy
    pub fn new() -> Self {
        Self {
            policy: SettlementPolicy::default(),
            clock: None,
            passengers: Vec::new(),
            bags: Vec::new(),
        }
    }

    /// Sets the settlement policy
    pub fn with_policy(mut self, policy: SettlementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Adds a passenger on the reference flight
    pub fn with_passenger(self, pax_id: &str, name: &str) -> Self {
        self.with_passenger_details(pax_id, name, ScenarioFixtures::FLIGHT_NO, ScenarioFixtures::CONTACT)
    }

    /// Adds a passenger with full details
    pub fn with_passenger_details(mut self, pax_id: &str, name: &str, flight_no: &str, contact: &str) -> Self {
        self.passengers.push((
            pax_id.to_string(),
            name.to_string(),
            flight_no.to_string(),
            contact.to_string(),
        ));
        self
    }

    /// Adds a bag; its owner must be added as a passenger too
    pub fn with_bag(mut self, bag_tag: &str, weight: Decimal, owner: &str) -> Self {
        self.bags.push((bag_tag.to_string(), weight, owner.to_string()));
        self
    }

    /// Adds the reference passenger and bag
    pub fn with_reference_journey(self) -> Self {
        self.with_passenger(ScenarioFixtures::PAX_ID, ScenarioFixtures::NAME).with_bag(
            ScenarioFixtures::BAG_TAG,
            ScenarioFixtures::weight(),
            ScenarioFixtures::PAX_ID,
        )
    }

    /// Builds the service
    ///
    /// # Panics
    ///
    /// Panics if any registration is rejected
    pub fn build(self) -> BaggageService {
        let service = match self.clock {
            Some(clock) => BaggageService::with_clock(self.policy, clock),
            None => BaggageService::new(self.policy),
        };
        for (pax_id, name, flight_no, contact) in &self.passengers {
            service
                .register_passenger(pax_id, name, flight_no, contact)
                .unwrap_or_else(|err| panic!("fixture passenger {pax_id} rejected: {err}"));
        }
        for (bag_tag, weight, owner) in &self.bags {
            service
                .register_bag(bag_tag, *weight, owner)
                .unwrap_or_else(|err| panic!("fixture bag {bag_tag} rejected: {err}"));
        }
        service
    }
}

/// Runs the reference journey up to and including the loss claim, unsettled
pub fn reference_journey(service: &BaggageService) {
    for checkpoint in ScenarioFixtures::CHECKPOINTS {
        service
            .record_movement(ScenarioFixtures::BAG_TAG, checkpoint)
            .unwrap_or_else(|err| panic!("scan at {checkpoint} rejected: {err}"));
    }
    service
        .raise_claim(
            ScenarioFixtures::CLAIM_ID,
            ScenarioFixtures::BAG_TAG,
            ScenarioFixtures::CLAIM_KIND,
            ScenarioFixtures::CLAIM_DESCRIPTION,
        )
        .unwrap_or_else(|err| panic!("reference claim rejected: {err}"));
}
