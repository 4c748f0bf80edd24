//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::Currency;
use domain_claims::ClaimKind;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
        Just(Currency::CHF),
        Just(Currency::INR),
        Just(Currency::AUD),
        Just(Currency::CAD),
        Just(Currency::SGD),
        Just(Currency::HKD),
    ]
}

/// Strategy for generating bag tags
pub fn bag_tag_strategy() -> impl Strategy<Value = String> {
    "BAG[0-9]{3,6}"
}

/// Strategy for generating passenger ids
pub fn pax_id_strategy() -> impl Strategy<Value = String> {
    "P[0-9]{3,6}"
}

/// Strategy for generating checked weights, 0 to 50 kg in grams
pub fn weight_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=50_000i64).prop_map(|grams| Decimal::new(grams, 3))
}

/// Strategy for generating checkpoint names
pub fn checkpoint_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Check-in".to_string()),
        Just("Security".to_string()),
        Just("Loading".to_string()),
        Just("Transfer".to_string()),
        Just("Arrival".to_string()),
        "[A-Z][a-z]{2,10}( [A-Z][0-9])?",
    ]
}

/// Strategy for generating non-empty routes
pub fn route_strategy(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(checkpoint_name_strategy(), 1..=max_len)
}

/// Strategy for generating claim kinds
pub fn claim_kind_strategy() -> impl Strategy<Value = ClaimKind> {
    prop_oneof![Just(ClaimKind::Loss), Just(ClaimKind::Damage)]
}

/// Strategy for generating blank identifiers
pub fn blank_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,4}"
}
