//! Baggage Service - Scenario Runner
//!
//! Drives one passenger's journey through the service: registration, check-in
//! of a bag, three scans, a loss claim and its settlement. The resulting
//! route and claims reports are printed as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin baggage-sim
//!
//! # Settle in euros at a lower loss rate, with debug logging
//! BAGGAGE_CURRENCY=EUR BAGGAGE_LOSS_RATE_PER_KG=800 BAGGAGE_LOG_LEVEL=debug cargo run --bin baggage-sim
//! ```
//!
//! # Environment Variables
//!
//! * `BAGGAGE_CURRENCY` - Settlement currency (default: USD)
//! * `BAGGAGE_LOSS_RATE_PER_KG` - Payout per kg for lost bags (default: 1000)
//! * `BAGGAGE_DAMAGE_RATE_PER_KG` - Payout per kg for damaged bags (default: 500)
//! * `BAGGAGE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use anyhow::Context;
use baggage_service::{BaggageService, ServiceConfig};
use rust_decimal_macros::dec;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    tracing::info!(
        currency = %config.currency,
        loss_rate = %config.loss_rate_per_kg,
        damage_rate = %config.damage_rate_per_kg,
        "Starting baggage scenario"
    );

    let service = BaggageService::from_config(&config).context("invalid settlement configuration")?;

    service.register_passenger("P001", "Seshanth", "AI101", "9876543210")?;
    service.register_bag("BAG101", dec!(20.5), "P001")?;
    for checkpoint in ["Check-in", "Security", "Loading"] {
        service.record_movement("BAG101", checkpoint)?;
    }
    tracing::info!(status = %service.locate_bag("BAG101")?, "Bag located");

    service.raise_claim("CL001", "BAG101", "loss", "Bag not delivered")?;
    let settled = service.settle_claim("CL001")?;
    tracing::info!(claim_id = %settled.id, amount = %settled.amount, "Scenario complete");

    let route = service.report_route("BAG101")?;
    let claims = service.report_claims("P001")?;
    println!("{}", serde_json::to_string_pretty(&route)?);
    println!("{}", serde_json::to_string_pretty(&claims)?);

    Ok(())
}

/// Loads configuration from the environment, falling back to defaults
fn load_config() -> ServiceConfig {
    ServiceConfig::from_env().unwrap_or_else(|err| {
        eprintln!("Ignoring environment configuration: {err}");
        ServiceConfig::default()
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so the reports on stdout stay machine-readable.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
