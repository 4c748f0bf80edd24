//! Claim aggregate

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{BagTag, ClaimId, Currency, Money, PaxId, Weight};
use crate::error::ClaimError;
use crate::settlement::SettlementPolicy;

/// Kind of claim; selects the payout rate at settlement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimKind {
    /// Bag was never delivered
    Loss,
    /// Bag was delivered damaged
    Damage,
}

impl fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimKind::Loss => f.write_str("Loss"),
            ClaimKind::Damage => f.write_str("Damage"),
        }
    }
}

impl FromStr for ClaimKind {
    type Err = ClaimError;

    /// Case-insensitive; anything other than `loss` or `damage` is rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "loss" => Ok(ClaimKind::Loss),
            "damage" => Ok(ClaimKind::Damage),
            _ => Err(ClaimError::UnknownKind(s.to_string())),
        }
    }
}

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Filed, amount not yet fixed
    Pending,
    /// Paid out under the given kind's rate
    Settled(ClaimKind),
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimStatus::Pending => f.write_str("Pending"),
            ClaimStatus::Settled(kind) => write!(f, "Settled ({})", kind),
        }
    }
}

/// The bag a claim is raised against, as seen at filing time
///
/// Weight never changes after registration, so settlement can use this copy
/// without consulting the bag registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimedBag {
    pub tag: BagTag,
    pub weight: Weight,
    pub owner: PaxId,
}

/// A claim against a bag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Claimed bag
    pub bag: ClaimedBag,
    /// Loss or damage
    pub kind: ClaimKind,
    /// Free-form description from the claimant
    pub description: String,
    /// Settled amount; zero while pending
    pub amount: Money,
    /// Status
    pub status: ClaimStatus,
    /// Filing timestamp
    pub filed_at: DateTime<Utc>,
    /// Settlement timestamp
    pub settled_at: Option<DateTime<Utc>>,
}

impl Claim {
    /// Files a new pending claim
    pub fn file(
        id: ClaimId,
        bag: ClaimedBag,
        kind: ClaimKind,
        description: impl Into<String>,
        currency: Currency,
        filed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            bag,
            kind,
            description: description.into(),
            amount: Money::zero(currency),
            status: ClaimStatus::Pending,
            filed_at,
            settled_at: None,
        }
    }

    /// Passenger the claim is filed for
    pub fn claimant(&self) -> &PaxId {
        &self.bag.owner
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.status, ClaimStatus::Settled(_))
    }

    /// Amount the policy would pay for this claim
    pub fn quote(&self, policy: &SettlementPolicy) -> Result<Money, ClaimError> {
        policy.payout(self.kind, self.bag.weight)
    }

    /// Fixes the payout and moves the claim to `Settled`
    ///
    /// Fails without touching the claim if it is already settled, the policy
    /// has no rate for its kind, or the payout is out of range.
    pub fn settle(&mut self, policy: &SettlementPolicy, now: DateTime<Utc>) -> Result<Money, ClaimError> {
        let target = ClaimStatus::Settled(self.kind);
        if self.status != ClaimStatus::Pending {
            return Err(ClaimError::InvalidStatusTransition {
                from: self.status,
                to: target,
            });
        }

        let amount = self.quote(policy)?;
        self.amount = amount;
        self.status = target;
        self.settled_at = Some(now);
        Ok(amount)
    }
}
