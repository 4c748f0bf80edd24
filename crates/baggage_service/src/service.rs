//! Baggage service facade
//!
//! The facade accepts raw identifiers from callers, parses them into the
//! kernel's typed keys and routes each operation to the component that owns
//! the data. Cross-component operations check every precondition that can
//! fail before the first mutation, so a rejected call leaves all components
//! as they were:
//!
//! - `register_bag` resolves the owner in the directory before touching the
//!   registry
//! - `raise_claim` parses the kind and snapshots the bag before the engine
//!   files the claim; the engine stores the claim only once the directory
//!   has accepted it

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::warn;

use core_kernel::{BagTag, ClaimId, Clock, Money, PaxId, SystemClock};
use domain_baggage::{Baggage, BaggageRegistry, Checkpoint};
use domain_claims::{Claim, ClaimEngine, ClaimKind, ClaimedBag, SettlementPolicy};
use domain_passenger::{Passenger, PassengerDirectory, PassengerError};
use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::report::{ClaimsReport, RouteReport};

/// Entry point for bag tracking and claims settlement
#[derive(Debug)]
pub struct BaggageService {
    passengers: PassengerDirectory,
    bags: BaggageRegistry,
    claims: ClaimEngine,
}

impl BaggageService {
    /// Creates a service with the given settlement policy and the system clock
    pub fn new(policy: SettlementPolicy) -> Self {
        Self::with_clock(policy, Arc::new(SystemClock))
    }

    /// Creates a service with an injected clock
    pub fn with_clock(policy: SettlementPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            passengers: PassengerDirectory::new(),
            bags: BaggageRegistry::with_clock(clock.clone()),
            claims: ClaimEngine::with_clock(policy, clock),
        }
    }

    /// Creates a service from configuration
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ServiceError> {
        Ok(Self::new(config.settlement_policy()?))
    }

    pub fn settlement_policy(&self) -> &SettlementPolicy {
        self.claims.policy()
    }

    // ------------------------------------------------------------------
    // Passengers
    // ------------------------------------------------------------------

    /// Registers a passenger
    pub fn register_passenger(
        &self,
        pax_id: &str,
        name: &str,
        flight_no: &str,
        contact: &str,
    ) -> Result<Passenger, ServiceError> {
        observe("register_passenger", || {
            let pax_id = PaxId::new(pax_id)?;
            Ok(self.passengers.register(pax_id, name, flight_no, contact)?)
        })
    }

    /// Claims filed by a passenger, in filing order
    pub fn claims_of(&self, pax_id: &str) -> Result<Vec<Claim>, ServiceError> {
        observe("claims_of", || {
            let pax_id = PaxId::new(pax_id)?;
            let ids = self.passengers.claims_of(&pax_id)?;
            Ok(self.claims.claims(&ids)?)
        })
    }

    /// Tags of the bags a passenger has checked, in registration order
    pub fn bags_of(&self, pax_id: &str) -> Result<Vec<BagTag>, ServiceError> {
        observe("bags_of", || {
            let pax_id = PaxId::new(pax_id)?;
            if !self.passengers.contains(&pax_id) {
                return Err(PassengerError::PassengerNotFound(pax_id).into());
            }
            Ok(self.bags.bags_of(&pax_id))
        })
    }

    // ------------------------------------------------------------------
    // Bags
    // ------------------------------------------------------------------

    /// Registers a bag for a registered passenger
    pub fn register_bag(&self, bag_tag: &str, weight: Decimal, owner: &str) -> Result<Baggage, ServiceError> {
        observe("register_bag", || {
            let bag_tag = BagTag::new(bag_tag)?;
            let owner = PaxId::new(owner)?;
            if !self.passengers.contains(&owner) {
                return Err(PassengerError::PassengerNotFound(owner).into());
            }
            Ok(self.bags.register(bag_tag, weight, owner)?)
        })
    }

    /// Records a scan of the bag at `checkpoint_name`
    pub fn record_movement(&self, bag_tag: &str, checkpoint_name: &str) -> Result<Checkpoint, ServiceError> {
        observe("record_movement", || {
            let bag_tag = BagTag::new(bag_tag)?;
            Ok(self.bags.record_movement(&bag_tag, checkpoint_name)?)
        })
    }

    /// Records a scan captured by an external system
    pub fn record_checkpoint(&self, bag_tag: &str, checkpoint: Checkpoint) -> Result<(), ServiceError> {
        observe("record_checkpoint", || {
            let bag_tag = BagTag::new(bag_tag)?;
            Ok(self.bags.record_checkpoint(&bag_tag, checkpoint)?)
        })
    }

    /// Current status of the bag
    pub fn locate_bag(&self, bag_tag: &str) -> Result<String, ServiceError> {
        observe("locate_bag", || {
            let bag_tag = BagTag::new(bag_tag)?;
            Ok(self.bags.locate(&bag_tag)?)
        })
    }

    /// Ordered scan history of the bag
    pub fn route_history(&self, bag_tag: &str) -> Result<Vec<Checkpoint>, ServiceError> {
        observe("route_history", || {
            let bag_tag = BagTag::new(bag_tag)?;
            Ok(self.bags.route_history(&bag_tag)?)
        })
    }

    // ------------------------------------------------------------------
    // Claims
    // ------------------------------------------------------------------

    /// Raises a claim of `kind` (`"loss"` or `"damage"`) against a bag
    pub fn raise_claim(
        &self,
        claim_id: &str,
        bag_tag: &str,
        kind: &str,
        description: &str,
    ) -> Result<Claim, ServiceError> {
        observe("raise_claim", || {
            let claim_id = ClaimId::new(claim_id)?;
            let bag_tag = BagTag::new(bag_tag)?;
            let kind: ClaimKind = kind.parse()?;

            let bag = self.bags.snapshot(&bag_tag)?;
            let claimed = ClaimedBag {
                tag: bag.tag,
                weight: bag.weight,
                owner: bag.owner,
            };
            Ok(self.claims.raise(claim_id, claimed, kind, description, &self.passengers)?)
        })
    }

    /// Settles a pending claim
    pub fn settle_claim(&self, claim_id: &str) -> Result<Claim, ServiceError> {
        observe("settle_claim", || {
            let claim_id = ClaimId::new(claim_id)?;
            Ok(self.claims.settle(&claim_id)?)
        })
    }

    /// Amount settling the claim would pay
    pub fn quote_claim(&self, claim_id: &str) -> Result<Money, ServiceError> {
        observe("quote_claim", || {
            let claim_id = ClaimId::new(claim_id)?;
            Ok(self.claims.quote(&claim_id)?)
        })
    }

    /// Current state of a claim
    pub fn claim(&self, claim_id: &str) -> Result<Claim, ServiceError> {
        observe("claim", || {
            let claim_id = ClaimId::new(claim_id)?;
            Ok(self.claims.get(&claim_id)?)
        })
    }

    // ------------------------------------------------------------------
    // Reports
    // ------------------------------------------------------------------

    /// Route of a bag for display
    pub fn report_route(&self, bag_tag: &str) -> Result<RouteReport, ServiceError> {
        observe("report_route", || {
            let bag_tag = BagTag::new(bag_tag)?;
            let bag = self.bags.snapshot(&bag_tag)?;
            Ok(RouteReport::from(&bag))
        })
    }

    /// Claims of a passenger with settlement totals
    pub fn report_claims(&self, pax_id: &str) -> Result<ClaimsReport, ServiceError> {
        observe("report_claims", || {
            let pax_id = PaxId::new(pax_id)?;
            let passenger = self.passengers.get(&pax_id)?;
            let claims = self.claims.claims(passenger.claims())?;
            let currency = self.claims.policy().currency();
            Ok(ClaimsReport::build(&passenger, &claims, currency).map_err(core_kernel::CoreError::from)?)
        })
    }
}

impl Default for BaggageService {
    fn default() -> Self {
        Self::new(SettlementPolicy::default())
    }
}

/// Runs an operation and logs it if rejected
fn observe<T>(
    operation: &'static str,
    run: impl FnOnce() -> Result<T, ServiceError>,
) -> Result<T, ServiceError> {
    let result = run();
    if let Err(err) = &result {
        warn!(operation, kind = %err.kind(), error = %err, "Operation rejected");
    }
    result
}
