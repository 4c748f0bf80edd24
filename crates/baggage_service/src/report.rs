//! Read models for presentation layers
//!
//! Reports are plain serializable snapshots; formatting them for a screen,
//! a printer or an API response is up to the caller.

use chrono::{DateTime, Utc};
use serde::Serialize;

use core_kernel::{BagTag, CheckpointId, ClaimId, Currency, Money, MoneyError, PaxId, Weight};
use domain_baggage::{Baggage, Checkpoint};
use domain_claims::{Claim, ClaimKind};
use domain_passenger::Passenger;

/// One scan on a bag's route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckpointLine {
    pub id: CheckpointId,
    pub name: String,
    pub recorded_at: DateTime<Utc>,
}

impl From<&Checkpoint> for CheckpointLine {
    fn from(checkpoint: &Checkpoint) -> Self {
        Self {
            id: checkpoint.id().clone(),
            name: checkpoint.name().to_string(),
            recorded_at: checkpoint.recorded_at(),
        }
    }
}

/// Where a bag is and how it got there
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    pub bag_tag: BagTag,
    pub owner: PaxId,
    pub weight: Weight,
    pub status: String,
    pub checkpoints: Vec<CheckpointLine>,
}

impl From<&Baggage> for RouteReport {
    fn from(bag: &Baggage) -> Self {
        Self {
            bag_tag: bag.tag.clone(),
            owner: bag.owner.clone(),
            weight: bag.weight,
            status: bag.status().to_string(),
            checkpoints: bag.route().iter().map(CheckpointLine::from).collect(),
        }
    }
}

/// One claim in a passenger's filing history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimLine {
    pub claim_id: ClaimId,
    pub bag_tag: BagTag,
    pub kind: ClaimKind,
    pub description: String,
    pub amount: Money,
    pub status: String,
}

impl From<&Claim> for ClaimLine {
    fn from(claim: &Claim) -> Self {
        Self {
            claim_id: claim.id.clone(),
            bag_tag: claim.bag.tag.clone(),
            kind: claim.kind,
            description: claim.description.clone(),
            amount: claim.amount,
            status: claim.status.to_string(),
        }
    }
}

/// A passenger's claims with settlement totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimsReport {
    pub pax_id: PaxId,
    pub name: String,
    pub flight_no: String,
    pub claims: Vec<ClaimLine>,
    /// Sum of settled amounts
    pub total_settled: Money,
    /// Number of claims still pending
    pub pending: usize,
}

impl ClaimsReport {
    /// Builds the report; `claims` must be in filing order
    pub fn build(passenger: &Passenger, claims: &[Claim], currency: Currency) -> Result<Self, MoneyError> {
        let settled: Vec<Money> = claims
            .iter()
            .filter(|c| c.is_settled())
            .map(|c| c.amount)
            .collect();

        Ok(Self {
            pax_id: passenger.pax_id.clone(),
            name: passenger.name.clone(),
            flight_no: passenger.flight_no.clone(),
            claims: claims.iter().map(ClaimLine::from).collect(),
            total_settled: Money::sum(currency, &settled)?,
            pending: claims.iter().filter(|c| !c.is_settled()).count(),
        })
    }
}
