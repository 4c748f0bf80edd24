//! Service configuration

use config::builder::DefaultState;
use config::ConfigBuilder;
use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::Currency;
use domain_claims::settlement::{STANDARD_DAMAGE_RATE, STANDARD_LOSS_RATE};
use domain_claims::{ClaimKind, SettlementPolicy};
use crate::error::ServiceError;

/// Service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Currency settlements are paid in
    pub currency: Currency,
    /// Payout per kilogram for lost bags
    pub loss_rate_per_kg: Decimal,
    /// Payout per kilogram for damaged bags
    pub damage_rate_per_kg: Decimal,
    /// Log level
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            loss_rate_per_kg: STANDARD_LOSS_RATE,
            damage_rate_per_kg: STANDARD_DAMAGE_RATE,
            log_level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from `BAGGAGE_`-prefixed environment variables
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::load(
            config::Config::builder().add_source(config::Environment::with_prefix("BAGGAGE")),
        )
    }

    /// Loads configuration from a prepared builder
    pub fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self, ServiceError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.settlement_policy()?;
        Ok(config)
    }

    /// Builds the settlement policy described by this configuration
    pub fn settlement_policy(&self) -> Result<SettlementPolicy, ServiceError> {
        SettlementPolicy::empty(self.currency)
            .with_rate(ClaimKind::Loss, self.loss_rate_per_kg)
            .and_then(|p| p.with_rate(ClaimKind::Damage, self.damage_rate_per_kg))
            .map_err(|err| ServiceError::Config(err.to_string()))
    }
}
