//! Settlement policy
//!
//! A lookup table from claim kind to a payout rate per kilogram of checked
//! weight. The payout for a claim is `weight × rate(kind)`.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, Weight};
use crate::claim::ClaimKind;
use crate::error::ClaimError;

/// Default payout per kilogram for a lost bag
pub const STANDARD_LOSS_RATE: Decimal = dec!(1000);

/// Default payout per kilogram for a damaged bag
pub const STANDARD_DAMAGE_RATE: Decimal = dec!(500);

/// Payout rates per claim kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementPolicy {
    currency: Currency,
    rates: HashMap<ClaimKind, Decimal>,
}

impl SettlementPolicy {
    /// Creates a policy with no rates; every kind must be added explicitly
    pub fn empty(currency: Currency) -> Self {
        Self {
            currency,
            rates: HashMap::new(),
        }
    }

    /// Standard rates: 1000 per kg for loss, 500 per kg for damage
    pub fn standard(currency: Currency) -> Self {
        let mut rates = HashMap::new();
        rates.insert(ClaimKind::Loss, STANDARD_LOSS_RATE);
        rates.insert(ClaimKind::Damage, STANDARD_DAMAGE_RATE);
        Self { currency, rates }
    }

    /// Sets the per-kilogram rate for `kind`
    ///
    /// # Errors
    ///
    /// `InvalidRate` if the rate is negative
    pub fn with_rate(mut self, kind: ClaimKind, rate_per_kg: Decimal) -> Result<Self, ClaimError> {
        if rate_per_kg.is_sign_negative() && !rate_per_kg.is_zero() {
            return Err(ClaimError::InvalidRate {
                kind,
                reason: format!("rate {} is negative", rate_per_kg),
            });
        }
        self.rates.insert(kind, rate_per_kg);
        Ok(self)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Per-kilogram rate for `kind`
    pub fn rate_for(&self, kind: ClaimKind) -> Result<Money, ClaimError> {
        self.rates
            .get(&kind)
            .map(|rate| Money::new(*rate, self.currency))
            .ok_or(ClaimError::NoPayoutRate(kind))
    }

    /// Payout for a claim of `kind` on a bag of `weight`
    ///
    /// Fails with `Money` if the product does not fit a decimal amount.
    pub fn payout(&self, kind: ClaimKind, weight: Weight) -> Result<Money, ClaimError> {
        Ok(self.rate_for(kind)?.checked_mul(weight.kilograms())?)
    }
}

impl Default for SettlementPolicy {
    fn default() -> Self {
        Self::standard(Currency::USD)
    }
}
