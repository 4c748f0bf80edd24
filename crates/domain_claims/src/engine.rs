//! Claim engine
//!
//! Stores claims, files them with the claimant, and settles them under the
//! engine's [`SettlementPolicy`].
//!
//! Raising a claim holds the claim-map write lock across the duplicate check,
//! the claimant attachment and the insert, so a claim id is either fully
//! filed (stored and on the passenger's list) or not at all. Settlement only
//! locks the individual claim.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::info;

use core_kernel::{ClaimId, ClaimantPort, Clock, Money, SystemClock};
use crate::claim::{Claim, ClaimKind, ClaimedBag};
use crate::error::ClaimError;
use crate::settlement::SettlementPolicy;

type ClaimHandle = Arc<Mutex<Claim>>;

/// Thread-safe store and state machine for claims
pub struct ClaimEngine {
    claims: RwLock<HashMap<ClaimId, ClaimHandle>>,
    policy: SettlementPolicy,
    clock: Arc<dyn Clock>,
}

impl ClaimEngine {
    /// Creates an engine with the given policy and the system clock
    pub fn new(policy: SettlementPolicy) -> Self {
        Self::with_clock(policy, Arc::new(SystemClock))
    }

    pub fn with_clock(policy: SettlementPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            claims: RwLock::new(HashMap::new()),
            policy,
            clock,
        }
    }

    pub fn policy(&self) -> &SettlementPolicy {
        &self.policy
    }

    /// Raises a pending claim against `bag` and files it with the bag's owner
    ///
    /// # Errors
    ///
    /// * `DuplicateClaim` if `id` is already in use
    /// * `Claimant` if the owner rejects the filing (e.g. unknown passenger)
    pub fn raise(
        &self,
        id: ClaimId,
        bag: ClaimedBag,
        kind: ClaimKind,
        description: impl Into<String>,
        claimants: &dyn ClaimantPort,
    ) -> Result<Claim, ClaimError> {
        let mut claims = self.claims.write();
        if claims.contains_key(&id) {
            return Err(ClaimError::DuplicateClaim(id));
        }

        let claim = Claim::file(
            id,
            bag,
            kind,
            description,
            self.policy.currency(),
            self.clock.now(),
        );
        claimants.attach_claim(claim.claimant(), &claim.id)?;
        claims.insert(claim.id.clone(), Arc::new(Mutex::new(claim.clone())));

        info!(
            claim_id = %claim.id,
            bag_tag = %claim.bag.tag,
            pax_id = %claim.claimant(),
            kind = %claim.kind,
            "Claim raised"
        );
        Ok(claim)
    }

    /// Settles a pending claim and returns its final state
    pub fn settle(&self, id: &ClaimId) -> Result<Claim, ClaimError> {
        let handle = self.handle(id)?;
        let mut claim = handle.lock();
        let amount = claim.settle(&self.policy, self.clock.now())?;

        info!(claim_id = %id, amount = %amount, status = %claim.status, "Claim settled");
        Ok(claim.clone())
    }

    /// Amount settling the claim would pay, without settling it
    pub fn quote(&self, id: &ClaimId) -> Result<Money, ClaimError> {
        let handle = self.handle(id)?;
        let claim = handle.lock();
        claim.quote(&self.policy)
    }

    /// Point-in-time copy of a claim
    pub fn get(&self, id: &ClaimId) -> Result<Claim, ClaimError> {
        let handle = self.handle(id)?;
        let claim = handle.lock();
        Ok(claim.clone())
    }

    /// Resolves claim references, preserving their order
    pub fn claims(&self, ids: &[ClaimId]) -> Result<Vec<Claim>, ClaimError> {
        ids.iter().map(|id| self.get(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.claims.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn handle(&self, id: &ClaimId) -> Result<ClaimHandle, ClaimError> {
        self.claims
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| ClaimError::ClaimNotFound(id.clone()))
    }
}

impl Default for ClaimEngine {
    fn default() -> Self {
        Self::new(SettlementPolicy::default())
    }
}

impl std::fmt::Debug for ClaimEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimEngine")
            .field("claims", &self.len())
            .field("policy", &self.policy)
            .finish()
    }
}
