//! Tests for the baggage service facade

use chrono::Duration;
use rust_decimal_macros::dec;

use baggage_service::{BaggageService, ServiceConfig, ServiceError};
use core_kernel::{CheckpointId, Currency, ErrorKind, Money};
use domain_baggage::Checkpoint;
use domain_claims::{ClaimKind, ClaimStatus, SettlementPolicy};
use domain_passenger::PassengerError;
use test_utils::{
    assert_error_kind, assert_money_eq, assert_route, assert_route_ordered, reference_journey,
    ScenarioFixtures as S, TemporalFixtures, TestServiceBuilder,
};

fn reference_service() -> BaggageService {
    TestServiceBuilder::new().with_reference_journey().build()
}

// ============================================================================
// Reference Journey
// ============================================================================

mod journey_tests {
    use super::*;

    #[test]
    fn test_reference_journey_end_to_end() {
        let service = BaggageService::default();
        service
            .register_passenger(S::PAX_ID, S::NAME, S::FLIGHT_NO, S::CONTACT)
            .unwrap();
        service.register_bag(S::BAG_TAG, S::weight(), S::PAX_ID).unwrap();
        assert_eq!(service.locate_bag(S::BAG_TAG).unwrap(), "Created");

        for checkpoint in S::CHECKPOINTS {
            service.record_movement(S::BAG_TAG, checkpoint).unwrap();
        }
        assert_eq!(service.locate_bag(S::BAG_TAG).unwrap(), "Loading");
        assert_route(&service.route_history(S::BAG_TAG).unwrap(), &S::CHECKPOINTS);

        let raised = service
            .raise_claim(S::CLAIM_ID, S::BAG_TAG, S::CLAIM_KIND, S::CLAIM_DESCRIPTION)
            .unwrap();
        assert_eq!(raised.status, ClaimStatus::Pending);
        assert!(raised.amount.is_zero());

        let settled = service.settle_claim(S::CLAIM_ID).unwrap();
        assert_money_eq(&settled.amount, &S::loss_payout());
        assert_eq!(settled.status, ClaimStatus::Settled(ClaimKind::Loss));
        assert_eq!(settled.status.to_string(), "Settled (Loss)");

        let claims = service.claims_of(S::PAX_ID).unwrap();
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].id.as_str(), S::CLAIM_ID);
        assert_eq!(claims[0].amount.amount(), dec!(20500.0));
    }

    #[test]
    fn test_damage_claim_pays_half_rate() {
        let service = reference_service();
        service
            .raise_claim(S::CLAIM_ID, S::BAG_TAG, "Damage", "Handle torn off")
            .unwrap();

        assert_money_eq(&service.quote_claim(S::CLAIM_ID).unwrap(), &S::damage_payout());
        let settled = service.settle_claim(S::CLAIM_ID).unwrap();
        assert_money_eq(&settled.amount, &S::damage_payout());
        assert_eq!(settled.status, ClaimStatus::Settled(ClaimKind::Damage));
    }

    #[test]
    fn test_claim_on_unscanned_bag() {
        let service = reference_service();
        service
            .raise_claim(S::CLAIM_ID, S::BAG_TAG, S::CLAIM_KIND, S::CLAIM_DESCRIPTION)
            .unwrap();
        assert_eq!(service.locate_bag(S::BAG_TAG).unwrap(), "Created");
    }

    #[test]
    fn test_multiple_claims_keep_filing_order() {
        let service = reference_service();
        service.raise_claim("CL001", S::BAG_TAG, "damage", "Wheel broken").unwrap();
        service.raise_claim("CL002", S::BAG_TAG, "loss", "Never arrived").unwrap();
        service.settle_claim("CL002").unwrap();

        let claims = service.claims_of(S::PAX_ID).unwrap();
        let ids: Vec<&str> = claims.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["CL001", "CL002"]);
        assert_eq!(claims[0].status, ClaimStatus::Pending);
        assert!(claims[1].is_settled());
    }

    #[test]
    fn test_zero_weight_bag_settles_to_zero() {
        let service = TestServiceBuilder::new()
            .with_passenger(S::PAX_ID, S::NAME)
            .with_bag("BAG000", dec!(0), S::PAX_ID)
            .build();
        service.raise_claim(S::CLAIM_ID, "BAG000", "loss", "").unwrap();

        let settled = service.settle_claim(S::CLAIM_ID).unwrap();
        assert!(settled.amount.is_zero());
        assert!(settled.is_settled());
    }
}

// ============================================================================
// Rejection Tests
// ============================================================================

mod rejection_tests {
    use super::*;

    #[test]
    fn test_duplicate_passenger_keeps_original() {
        let service = reference_service();
        assert_error_kind(
            service.register_passenger(S::PAX_ID, "Someone Else", "BA202", "other@example.com"),
            ErrorKind::DuplicateId,
        );

        let report = service.report_claims(S::PAX_ID).unwrap();
        assert_eq!(report.name, S::NAME);
        assert_eq!(report.flight_no, S::FLIGHT_NO);
    }

    #[test]
    fn test_duplicate_bag_keeps_original() {
        let service = reference_service();
        service.record_movement(S::BAG_TAG, "Check-in").unwrap();

        assert_error_kind(
            service.register_bag(S::BAG_TAG, dec!(3), S::PAX_ID),
            ErrorKind::DuplicateId,
        );
        let report = service.report_route(S::BAG_TAG).unwrap();
        assert_eq!(report.weight.kilograms(), S::weight());
        assert_eq!(report.status, "Check-in");
        assert_eq!(service.bags_of(S::PAX_ID).unwrap().len(), 1);
    }

    #[test]
    fn test_bag_for_unknown_owner_is_rejected() {
        let service = TestServiceBuilder::new().build();
        let err = assert_error_kind(service.register_bag(S::BAG_TAG, S::weight(), "P404"), ErrorKind::NotFound);
        assert!(matches!(err, ServiceError::Passenger(PassengerError::PassengerNotFound(_))));
        assert_error_kind(service.locate_bag(S::BAG_TAG), ErrorKind::NotFound);
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let service = TestServiceBuilder::new().with_passenger(S::PAX_ID, S::NAME).build();
        assert_error_kind(service.register_bag(S::BAG_TAG, dec!(-1), S::PAX_ID), ErrorKind::Validation);
        assert!(service.bags_of(S::PAX_ID).unwrap().is_empty());
    }

    #[test]
    fn test_blank_identifiers_are_rejected() {
        let service = reference_service();
        assert_error_kind(service.register_passenger("  ", S::NAME, S::FLIGHT_NO, S::CONTACT), ErrorKind::Validation);
        assert_error_kind(service.register_bag("", dec!(1), S::PAX_ID), ErrorKind::Validation);
        assert_error_kind(service.raise_claim("", S::BAG_TAG, "loss", ""), ErrorKind::Validation);
    }

    #[test]
    fn test_invalid_passenger_details() {
        let service = BaggageService::default();
        assert_error_kind(service.register_passenger(S::PAX_ID, "", S::FLIGHT_NO, S::CONTACT), ErrorKind::Validation);
        assert_error_kind(service.register_passenger(S::PAX_ID, S::NAME, "FLIGHT", S::CONTACT), ErrorKind::Validation);
        assert_error_kind(service.claims_of(S::PAX_ID), ErrorKind::NotFound);
    }

    #[test]
    fn test_movement_on_unknown_bag_changes_nothing() {
        let service = reference_service();
        assert_error_kind(service.record_movement("BAG404", "Check-in"), ErrorKind::NotFound);
        assert_error_kind(service.locate_bag("BAG404"), ErrorKind::NotFound);
        assert_error_kind(service.route_history("BAG404"), ErrorKind::NotFound);
        assert!(service.route_history(S::BAG_TAG).unwrap().is_empty());
    }

    #[test]
    fn test_blank_checkpoint_name() {
        let service = reference_service();
        assert_error_kind(service.record_movement(S::BAG_TAG, "   "), ErrorKind::Validation);
        assert_eq!(service.locate_bag(S::BAG_TAG).unwrap(), "Created");
    }

    #[test]
    fn test_unknown_claim_kind_files_nothing() {
        let service = reference_service();
        assert_error_kind(
            service.raise_claim(S::CLAIM_ID, S::BAG_TAG, "theft", "Stolen"),
            ErrorKind::Validation,
        );
        assert!(service.claims_of(S::PAX_ID).unwrap().is_empty());
        assert_error_kind(service.claim(S::CLAIM_ID), ErrorKind::NotFound);
    }

    #[test]
    fn test_claim_on_unknown_bag() {
        let service = reference_service();
        assert_error_kind(service.raise_claim(S::CLAIM_ID, "BAG404", "loss", ""), ErrorKind::NotFound);
        assert!(service.claims_of(S::PAX_ID).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_claim_id_keeps_original() {
        let service = reference_service();
        reference_journey(&service);

        assert_error_kind(
            service.raise_claim(S::CLAIM_ID, S::BAG_TAG, "damage", "Scratched"),
            ErrorKind::DuplicateId,
        );
        let claims = service.claims_of(S::PAX_ID).unwrap();
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].kind, ClaimKind::Loss);
    }

    #[test]
    fn test_settle_twice_is_invalid_state() {
        let service = reference_service();
        reference_journey(&service);
        let first = service.settle_claim(S::CLAIM_ID).unwrap();

        assert_error_kind(service.settle_claim(S::CLAIM_ID), ErrorKind::InvalidState);
        let current = service.claim(S::CLAIM_ID).unwrap();
        assert_eq!(current.amount, first.amount);
        assert_eq!(current.settled_at, first.settled_at);
    }

    #[test]
    fn test_out_of_range_payout_is_rejected() {
        let heavy = rust_decimal::Decimal::from_i128_with_scale(10i128.pow(26), 0);
        let service = TestServiceBuilder::new()
            .with_passenger(S::PAX_ID, S::NAME)
            .with_bag(S::BAG_TAG, heavy, S::PAX_ID)
            .build();
        service.raise_claim(S::CLAIM_ID, S::BAG_TAG, "loss", "").unwrap();

        assert_error_kind(service.quote_claim(S::CLAIM_ID), ErrorKind::Validation);
        assert_error_kind(service.settle_claim(S::CLAIM_ID), ErrorKind::Validation);
        assert_eq!(service.claim(S::CLAIM_ID).unwrap().status, ClaimStatus::Pending);
        assert_eq!(service.report_claims(S::PAX_ID).unwrap().pending, 1);
    }

    #[test]
    fn test_settled_total_out_of_range_is_rejected() {
        let heavy = rust_decimal::Decimal::from_i128_with_scale(5 * 10i128.pow(25), 0);
        let service = TestServiceBuilder::new()
            .with_passenger(S::PAX_ID, S::NAME)
            .with_bag(S::BAG_TAG, heavy, S::PAX_ID)
            .build();
        service.raise_claim("CL001", S::BAG_TAG, "loss", "").unwrap();
        service.raise_claim("CL002", S::BAG_TAG, "loss", "").unwrap();
        service.settle_claim("CL001").unwrap();
        service.settle_claim("CL002").unwrap();

        assert_error_kind(service.report_claims(S::PAX_ID), ErrorKind::Validation);
        assert_eq!(service.claims_of(S::PAX_ID).unwrap().len(), 2);
    }

    #[test]
    fn test_settle_unknown_claim() {
        let service = reference_service();
        assert_error_kind(service.settle_claim("CL404"), ErrorKind::NotFound);
    }
}

// ============================================================================
// Clock and Checkpoint Tests
// ============================================================================

mod clock_tests {
    use super::*;

    #[test]
    fn test_scans_use_injected_clock() {
        let clock = TemporalFixtures::manual_clock();
        let service = TestServiceBuilder::new()
            .with_clock(clock.clone())
            .with_reference_journey()
            .build();

        service.record_movement(S::BAG_TAG, "Check-in").unwrap();
        clock.advance(Duration::minutes(25));
        service.record_movement(S::BAG_TAG, "Security").unwrap();

        let route = service.route_history(S::BAG_TAG).unwrap();
        assert_eq!(route[0].recorded_at(), TemporalFixtures::departure());
        assert_eq!(route[1].recorded_at(), TemporalFixtures::departure() + Duration::minutes(25));
    }

    #[test]
    fn test_clock_going_backwards_keeps_route_ordered() {
        let clock = TemporalFixtures::manual_clock();
        let service = TestServiceBuilder::new()
            .with_clock(clock.clone())
            .with_reference_journey()
            .build();

        service.record_movement(S::BAG_TAG, "Check-in").unwrap();
        clock.advance(Duration::minutes(-10));
        service.record_movement(S::BAG_TAG, "Security").unwrap();

        let route = service.route_history(S::BAG_TAG).unwrap();
        assert_route(&route, &["Check-in", "Security"]);
        assert_route_ordered(&route);
    }

    #[test]
    fn test_external_checkpoint() {
        let service = reference_service();
        let scanned = Checkpoint::new("Transfer T2", TemporalFixtures::departure()).unwrap();
        service.record_checkpoint(S::BAG_TAG, scanned.clone()).unwrap();

        assert_eq!(service.locate_bag(S::BAG_TAG).unwrap(), "Transfer T2");
        assert_error_kind(service.record_checkpoint(S::BAG_TAG, scanned), ErrorKind::DuplicateId);

        let earlier = Checkpoint::new("Check-in", TemporalFixtures::departure() - Duration::hours(1)).unwrap();
        assert_error_kind(service.record_checkpoint(S::BAG_TAG, earlier), ErrorKind::Validation);
        assert_eq!(service.route_history(S::BAG_TAG).unwrap().len(), 1);
    }

    #[test]
    fn test_station_issued_checkpoint_ids() {
        let service = reference_service();
        let departure = TemporalFixtures::departure();
        for (id, name, minutes) in [("C01", "Check-in", 0), ("S01", "Security", 20), ("L01", "Loading", 45)] {
            let scan = Checkpoint::with_id(
                CheckpointId::new(id).unwrap(),
                name,
                departure + Duration::minutes(minutes),
            )
            .unwrap();
            service.record_checkpoint(S::BAG_TAG, scan).unwrap();
        }

        let route = service.route_history(S::BAG_TAG).unwrap();
        let ids: Vec<&str> = route.iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, vec!["C01", "S01", "L01"]);
        assert_eq!(service.locate_bag(S::BAG_TAG).unwrap(), "Loading");

        let rescan = Checkpoint::with_id(
            CheckpointId::new("S01").unwrap(),
            "Security",
            departure + Duration::hours(1),
        )
        .unwrap();
        assert_error_kind(service.record_checkpoint(S::BAG_TAG, rescan), ErrorKind::DuplicateId);
        assert_eq!(service.report_route(S::BAG_TAG).unwrap().checkpoints[1].id.as_str(), "S01");
    }
}

// ============================================================================
// Report Tests
// ============================================================================

mod report_tests {
    use super::*;

    #[test]
    fn test_route_report() {
        let service = reference_service();
        reference_journey(&service);

        let report = service.report_route(S::BAG_TAG).unwrap();
        assert_eq!(report.bag_tag.as_str(), S::BAG_TAG);
        assert_eq!(report.owner.as_str(), S::PAX_ID);
        assert_eq!(report.status, "Loading");
        let names: Vec<&str> = report.checkpoints.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, S::CHECKPOINTS);
    }

    #[test]
    fn test_claims_report_totals() {
        let service = reference_service();
        service.raise_claim("CL001", S::BAG_TAG, "loss", "Never arrived").unwrap();
        service.raise_claim("CL002", S::BAG_TAG, "damage", "Crushed").unwrap();
        service.settle_claim("CL001").unwrap();

        let report = service.report_claims(S::PAX_ID).unwrap();
        assert_eq!(report.claims.len(), 2);
        assert_eq!(report.pending, 1);
        assert_money_eq(&report.total_settled, &S::loss_payout());
        assert_eq!(report.claims[0].status, "Settled (Loss)");
        assert_eq!(report.claims[1].status, "Pending");
    }

    #[test]
    fn test_reports_serialize() {
        let service = reference_service();
        reference_journey(&service);
        service.settle_claim(S::CLAIM_ID).unwrap();

        let route = serde_json::to_value(service.report_route(S::BAG_TAG).unwrap()).unwrap();
        assert_eq!(route["bag_tag"], S::BAG_TAG);
        assert_eq!(route["checkpoints"].as_array().unwrap().len(), 3);

        let claims = serde_json::to_value(service.report_claims(S::PAX_ID).unwrap()).unwrap();
        assert_eq!(claims["pax_id"], S::PAX_ID);
        assert_eq!(claims["claims"][0]["kind"], "Loss");
    }

    #[test]
    fn test_report_for_unknown_passenger() {
        let service = reference_service();
        assert_error_kind(service.report_claims("P404"), ErrorKind::NotFound);
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod config_tests {
    use super::*;

    #[test]
    fn test_service_from_config() {
        let config = ServiceConfig {
            currency: Currency::EUR,
            loss_rate_per_kg: dec!(800),
            ..ServiceConfig::default()
        };
        let service = BaggageService::from_config(&config).unwrap();
        service.register_passenger(S::PAX_ID, S::NAME, S::FLIGHT_NO, S::CONTACT).unwrap();
        service.register_bag(S::BAG_TAG, dec!(10), S::PAX_ID).unwrap();
        service.raise_claim(S::CLAIM_ID, S::BAG_TAG, "loss", "").unwrap();

        let settled = service.settle_claim(S::CLAIM_ID).unwrap();
        assert_money_eq(&settled.amount, &Money::new(dec!(8000), Currency::EUR));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ServiceConfig {
            damage_rate_per_kg: dec!(-1),
            ..ServiceConfig::default()
        };
        assert!(matches!(BaggageService::from_config(&config), Err(ServiceError::Config(_))));
    }

    #[test]
    fn test_policy_without_damage_rate() {
        let policy = SettlementPolicy::empty(Currency::USD)
            .with_rate(ClaimKind::Loss, dec!(1000))
            .unwrap();
        let service = TestServiceBuilder::new()
            .with_policy(policy)
            .with_reference_journey()
            .build();
        service.raise_claim(S::CLAIM_ID, S::BAG_TAG, "damage", "").unwrap();

        assert_error_kind(service.settle_claim(S::CLAIM_ID), ErrorKind::Validation);
        assert_eq!(service.claim(S::CLAIM_ID).unwrap().status, ClaimStatus::Pending);
    }
}

// ============================================================================
// Concurrency Tests
// ============================================================================

mod concurrency_tests {
    use super::*;

    #[test]
    fn test_parallel_journeys() {
        let mut builder = TestServiceBuilder::new();
        for i in 0..8 {
            let pax = format!("P{i:03}");
            builder = builder
                .with_passenger(&pax, "Traveller")
                .with_bag(&format!("BAG{i:03}"), dec!(10), &pax);
        }
        let service = builder.build();

        std::thread::scope(|scope| {
            for i in 0..8 {
                let service = &service;
                scope.spawn(move || {
                    let tag = format!("BAG{i:03}");
                    for checkpoint in S::CHECKPOINTS {
                        service.record_movement(&tag, checkpoint).unwrap();
                    }
                    let claim = format!("CL{i:03}");
                    service.raise_claim(&claim, &tag, "loss", "").unwrap();
                    service.settle_claim(&claim).unwrap();
                });
            }
        });

        for i in 0..8 {
            let claims = service.claims_of(&format!("P{i:03}")).unwrap();
            assert_eq!(claims.len(), 1);
            assert_eq!(claims[0].amount.amount(), dec!(10000));
            assert_route(&service.route_history(&format!("BAG{i:03}")).unwrap(), &S::CHECKPOINTS);
        }
    }

    #[test]
    fn test_racing_claims_with_same_id() {
        let service = reference_service();

        let filed: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let service = &service;
                    let kind = if i % 2 == 0 { "loss" } else { "damage" };
                    scope.spawn(move || service.raise_claim(S::CLAIM_ID, S::BAG_TAG, kind, "").is_ok())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap() as usize).sum()
        });

        assert_eq!(filed, 1);
        assert_eq!(service.claims_of(S::PAX_ID).unwrap().len(), 1);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::{blank_strategy, claim_kind_strategy, route_strategy, weight_strategy};

    proptest! {
        #[test]
        fn locate_reports_last_scan(route in route_strategy(12)) {
            let service = reference_service();
            for name in &route {
                service.record_movement(S::BAG_TAG, name).unwrap();
            }

            let history = service.route_history(S::BAG_TAG).unwrap();
            prop_assert_eq!(history.len(), route.len());
            prop_assert_eq!(service.locate_bag(S::BAG_TAG).unwrap(), route.last().unwrap().trim());
        }

        #[test]
        fn settlement_matches_policy(weight in weight_strategy(), kind in claim_kind_strategy()) {
            let service = TestServiceBuilder::new()
                .with_passenger(S::PAX_ID, S::NAME)
                .with_bag(S::BAG_TAG, weight, S::PAX_ID)
                .build();
            service.raise_claim(S::CLAIM_ID, S::BAG_TAG, &kind.to_string(), "").unwrap();

            let expected = service.settlement_policy().payout(kind, core_kernel::Weight::from_kg(weight).unwrap()).unwrap();
            let settled = service.settle_claim(S::CLAIM_ID).unwrap();
            prop_assert_eq!(settled.amount, expected);
            prop_assert_eq!(settled.status, ClaimStatus::Settled(kind));
        }

        #[test]
        fn blank_bag_tags_never_register(tag in blank_strategy()) {
            let service = TestServiceBuilder::new().with_passenger(S::PAX_ID, S::NAME).build();
            let result = service.register_bag(&tag, dec!(1), S::PAX_ID);
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::Validation);
            prop_assert!(service.bags_of(S::PAX_ID).unwrap().is_empty());
        }
    }
}
