use std::sync::Arc;

use itertools::assert_equal;
use serde_json::json;

use model::base_types::{RefuelPointIdx, TripIdx, VehicleIdx};
use model::network::Network;
use model::test_utilities::{load_small_instance, TestInstance};
use solution::verify_duty;

use super::{PricingEngine, PricingStatus};
use crate::blocks::fuse_vehicles;
use crate::config::{FrontierKind, PricingConfig};
use crate::duals::{DualPrices, VehicleBounds, VehicleDuals};
use crate::error::PricingError;

/// A (08:00 - 08:30) and B (09:00 - 09:30) of different customers, only the fixed vehicle cost
/// and the trip costs count.
fn two_trips() -> Network {
    TestInstance::new(5.0, 0.0, 0.0, 0.0)
        .uniform_dead_head(600.0, 0.0)
        .customer("a")
        .customer("b")
        .vehicle("veh", 1.0, 25200.0)
        .trip("A", "a", 28800.0, 30600.0, 0.1, 1.0)
        .trip("B", "b", 32400.0, 34200.0, 0.1, 1.0)
        .build()
}

/// X1 and X2 are alternatives of customer x on different routes, Y lies in between.
fn alternatives() -> Network {
    TestInstance::new(0.0, 0.0, 0.0, 0.0)
        .customer_with_routes("x", &["x1", "x2"])
        .customer("y")
        .vehicle("veh", 1.0, 0.0)
        .trip("X1", "x1", 10.0, 20.0, 0.0, 1.0)
        .trip("Y", "y", 30.0, 40.0, 0.0, 1.0)
        .trip("X2", "x2", 50.0, 60.0, 0.0, 1.0)
        .build()
}

fn three_trips() -> Network {
    TestInstance::new(0.0, 0.0, 0.0, 0.0)
        .customer("a")
        .customer("b")
        .customer("c")
        .vehicle("veh", 1.0, 0.0)
        .trip("A", "a", 10.0, 20.0, 0.0, 1.0)
        .trip("B", "b", 30.0, 40.0, 0.0, 1.0)
        .trip("C", "c", 50.0, 60.0, 0.0, 1.0)
        .build()
}

fn duals(network: &Network, trip_dual: f64, convexity: f64) -> DualPrices {
    DualPrices::new(
        network
            .vehicles()
            .map(|_| VehicleDuals {
                trips: vec![trip_dual; network.number_of_trips()],
                convexity,
                ..VehicleDuals::zero(network.number_of_trips())
            })
            .collect(),
    )
}

fn bounds(network: &Network) -> Vec<VehicleBounds> {
    network
        .vehicles()
        .map(|_| VehicleBounds::unrestricted(network.number_of_trips()))
        .collect()
}

fn engine(network: Network, config: PricingConfig) -> PricingEngine {
    PricingEngine::new(Arc::new(network), config)
}

#[test]
fn two_trips_give_exactly_one_duty_test() {
    // ARRANGE
    let network = two_trips();
    let duals = duals(&network, 0.0, 10.0);
    let bounds: Vec<VehicleBounds> = bounds(&network)
        .into_iter()
        .map(|b| b.with_trip_count(Some(2), None))
        .collect();
    let engine = engine(network, PricingConfig::default());

    // ACT
    let result = engine.price(&duals, &bounds).unwrap();

    // ASSERT
    let pricing = result.vehicle(VehicleIdx(0));
    assert_eq!(pricing.status(), PricingStatus::Improving);
    assert_eq!(pricing.duties().len(), 1);
    let duty = pricing.best().unwrap();
    assert_equal(duty.trips().iter().copied(), [TripIdx(0), TripIdx(1)]);
    assert_eq!(duty.cost(), 7.0);
    assert_eq!(duty.reduced_cost(), -3.0);
    assert!(!result.is_optimal());
}

#[test]
fn without_bounds_empty_and_single_trip_duties_are_emitted_test() {
    // ARRANGE
    let network = two_trips();
    let duals = duals(&network, 0.0, 10.0);
    let bounds = bounds(&network);
    let engine = engine(network, PricingConfig::default());

    // ACT
    let result = engine.price(&duals, &bounds).unwrap();

    // ASSERT
    let reduced_costs: Vec<f64> = result
        .vehicle(VehicleIdx(0))
        .duties()
        .iter()
        .map(|d| d.reduced_cost())
        .collect();
    assert_equal(reduced_costs, [-10.0, -4.0, -3.0]);
    assert!(result.vehicle(VehicleIdx(0)).duties()[0].is_empty());
    assert_eq!(result.best_reduced_cost(), Some(-10.0));
    assert_eq!(result.number_of_duties(), 3);
}

#[test]
fn zero_duals_give_no_improving_duty_test() {
    // ARRANGE
    let network = two_trips();
    let duals = duals(&network, 0.0, 0.0);
    let bounds = bounds(&network);
    let engine = engine(network, PricingConfig::default());

    // ACT
    let result = engine.price(&duals, &bounds).unwrap();

    // ASSERT
    assert_eq!(
        result.vehicle(VehicleIdx(0)).status(),
        PricingStatus::NoImprovingDuty
    );
    assert!(result.is_optimal());
    assert_eq!(result.best_reduced_cost(), None);
}

#[test]
fn reduced_cost_of_exactly_minus_epsilon_is_not_improving_test() {
    // ARRANGE
    let network = Arc::new(two_trips());
    let bounds: Vec<VehicleBounds> = bounds(&network)
        .into_iter()
        .map(|b| b.with_trip_count(Some(2), None))
        .collect();
    let config = PricingConfig {
        epsilon: 0.5,
        ..PricingConfig::default()
    };
    let engine = PricingEngine::new(network.clone(), config);

    // ACT
    // the duty [A, B] costs 7
    let at_epsilon = engine.price(&duals(&network, 0.0, 7.5), &bounds).unwrap();
    let beyond_epsilon = engine.price(&duals(&network, 0.0, 7.75), &bounds).unwrap();

    // ASSERT
    assert!(at_epsilon.is_optimal());
    assert_eq!(beyond_epsilon.number_of_duties(), 1);
    assert_eq!(beyond_epsilon.best_reduced_cost(), Some(-0.75));
}

#[test]
fn trip_duals_enter_reduced_cost_test() {
    // ARRANGE
    let network = two_trips();
    let duals = duals(&network, -10.0, 0.0);
    let bounds = bounds(&network);
    let engine = engine(network, PricingConfig::default());

    // ACT
    let result = engine.price(&duals, &bounds).unwrap();

    // ASSERT
    // 7 - 2 * 10
    let best = result.vehicle(VehicleIdx(0)).best().unwrap();
    assert_eq!(best.reduced_cost(), -13.0);
    assert_eq!(best.len(), 2);
}

#[test]
fn used_dual_is_charged_once_per_non_empty_duty_test() {
    // ARRANGE
    let network = two_trips();
    let mut duals = duals(&network, -10.0, 0.0);
    duals = DualPrices::new(
        duals
            .iter()
            .map(|d| VehicleDuals {
                used: 2.5,
                ..d.clone()
            })
            .collect(),
    );
    let bounds = bounds(&network);
    let engine = engine(network, PricingConfig::default());

    // ACT
    let result = engine.price(&duals, &bounds).unwrap();

    // ASSERT
    let best = result.vehicle(VehicleIdx(0)).best().unwrap();
    assert_eq!(best.reduced_cost(), -10.5);
}

#[test]
fn heavy_trips_need_refuel_detour_test() {
    // ARRANGE
    let network = TestInstance::new(5.0, 0.001, 0.0001, 0.001)
        .uniform_dead_head(600.0, 1000.0)
        .customer("a")
        .customer("b")
        .vehicle("veh", 1.0, 25200.0)
        .trip("A", "a", 28800.0, 30600.0, 0.3, 1.0)
        .trip("B", "b", 32400.0, 34200.0, 0.95, 1.0)
        .refuel_point("R")
        .dead_head("R", "B", 600.0, 0.0)
        .pareto_refuel_points("A", "B", &["R"])
        .build();
    let duals = duals(&network, -10.0, 0.0);
    let bounds = bounds(&network);
    let engine = engine(network, PricingConfig::default());

    // ACT
    let result = engine.price(&duals, &bounds).unwrap();

    // ASSERT
    let both: Vec<_> = result.duties().filter(|d| d.len() == 2).collect();
    assert_eq!(both.len(), 1);
    assert_equal(
        both[0].refuel_points().iter().copied(),
        [None, Some(RefuelPointIdx(0))],
    );
}

#[test]
fn fuel_exactly_at_initial_fuel_is_feasible_test() {
    // ARRANGE
    let network = TestInstance::new(5.0, 0.0, 0.0, 0.0)
        .customer("a")
        .vehicle("full", 0.5, 0.0)
        .vehicle("short", 0.49, 0.0)
        .trip("A", "a", 10.0, 20.0, 0.5, 1.0)
        .build();
    let duals = duals(&network, 0.0, 10.0);
    let bounds: Vec<VehicleBounds> = bounds(&network)
        .into_iter()
        .map(|b| b.with_trip_count(Some(1), None))
        .collect();
    let engine = engine(network, PricingConfig::default());

    // ACT
    let result = engine.price(&duals, &bounds).unwrap();

    // ASSERT
    assert_eq!(result.vehicle(VehicleIdx(0)).duties().len(), 1);
    assert_eq!(
        result.vehicle(VehicleIdx(1)).status(),
        PricingStatus::NoImprovingDuty
    );
}

#[test]
fn fuel_exactly_at_capacity_is_feasible_test() {
    // ARRANGE
    let network = TestInstance::new(5.0, 0.0, 0.0, 0.0)
        .customer("a")
        .customer("b")
        .vehicle("veh", 1.0, 0.0)
        .trip("A", "a", 10.0, 20.0, 0.5, 1.0)
        .trip("B", "b", 30.0, 40.0, 0.5, 1.0)
        .build();
    let duals = duals(&network, 0.0, 10.0);
    let bounds: Vec<VehicleBounds> = bounds(&network)
        .into_iter()
        .map(|b| b.with_trip_count(Some(2), None))
        .collect();
    let engine = engine(network, PricingConfig::default());

    // ACT
    let result = engine.price(&duals, &bounds).unwrap();

    // ASSERT
    assert_eq!(result.number_of_duties(), 1);
}

#[test]
fn alternatives_are_never_served_together_test() {
    // ARRANGE
    let network = Arc::new(alternatives());
    let duals = duals(&network, -5.0, 0.0);
    let bounds = bounds(&network);
    let forbidding = PricingEngine::new(network.clone(), PricingConfig::default());
    let allowing = PricingEngine::new(
        network.clone(),
        PricingConfig {
            forbid_alternatives: false,
            ..PricingConfig::default()
        },
    );
    let x1 = TripIdx(0);
    let x2 = TripIdx(2);
    let serves_both = |trips: &[TripIdx]| trips.contains(&x1) && trips.contains(&x2);

    // ACT
    let forbidden = forbidding.price(&duals, &bounds).unwrap();
    let allowed = allowing.price(&duals, &bounds).unwrap();

    // ASSERT
    assert!(!network.arcs().contains(
        network.vertex_of_trip(x1),
        network.vertex_of_trip(x2)
    ));
    assert!(forbidden.number_of_duties() > 0);
    assert!(forbidden.duties().all(|d| !serves_both(d.trips())));
    assert_eq!(forbidden.best_reduced_cost(), Some(-8.0));
    assert!(allowed.duties().any(|d| serves_both(d.trips())));
    assert_eq!(allowed.best_reduced_cost(), Some(-12.0));
}

#[test]
fn keeping_unused_routes_gives_same_best_duty_test() {
    // ARRANGE
    let network = Arc::new(alternatives());
    let duals = duals(&network, -5.0, 0.0);
    let bounds = bounds(&network);
    let keeping = PricingEngine::new(
        network.clone(),
        PricingConfig {
            drop_unused_routes: false,
            ..PricingConfig::default()
        },
    );

    // ACT
    let result = keeping.price(&duals, &bounds).unwrap();

    // ASSERT
    assert_eq!(result.best_reduced_cost(), Some(-8.0));
}

#[test]
fn included_trip_is_in_every_duty_test() {
    // ARRANGE
    let network = three_trips();
    let duals = duals(&network, -5.0, 0.0);
    let bounds = vec![VehicleBounds::unrestricted(3).with_included(TripIdx(1))];
    let engine = engine(network, PricingConfig::default());

    // ACT
    let result = engine.price(&duals, &bounds).unwrap();

    // ASSERT
    assert!(result.number_of_duties() > 0);
    assert!(result.duties().all(|d| d.trips().contains(&TripIdx(1))));
    assert_eq!(result.best_reduced_cost(), Some(-12.0));
}

#[test]
fn excluded_trip_is_in_no_duty_test() {
    // ARRANGE
    let network = three_trips();
    let duals = duals(&network, -5.0, 0.0);
    let bounds = vec![VehicleBounds::unrestricted(3)
        .with_excluded(TripIdx(0))
        .with_excluded(TripIdx(2))];
    let engine = engine(network, PricingConfig::default());

    // ACT
    let result = engine.price(&duals, &bounds).unwrap();

    // ASSERT
    assert!(result.duties().all(|d| !d.trips().contains(&TripIdx(0))));
    assert!(result.duties().all(|d| !d.trips().contains(&TripIdx(2))));
    assert_eq!(result.best_reduced_cost(), Some(-4.0));
}

#[test]
fn maximal_trip_count_limits_duties_test() {
    // ARRANGE
    let network = three_trips();
    let duals = duals(&network, -5.0, 0.0);
    let bounds = vec![VehicleBounds::unrestricted(3).with_trip_count(None, Some(2))];
    let engine = engine(network, PricingConfig::default());

    // ACT
    let result = engine.price(&duals, &bounds).unwrap();

    // ASSERT
    assert!(result.duties().all(|d| d.len() <= 2));
    assert_eq!(result.best_reduced_cost(), Some(-8.0));
}

#[test]
fn fused_vehicles_keep_their_own_trip_counts_test() {
    // ARRANGE
    let network = TestInstance::new(0.0, 0.0, 0.0, 0.0)
        .customer("a")
        .customer("b")
        .customer("c")
        .vehicle("v0", 1.0, 0.0)
        .vehicle("v1", 1.0, 0.0)
        .trip("A", "a", 10.0, 20.0, 0.0, 1.0)
        .trip("B", "b", 30.0, 40.0, 0.0, 1.0)
        .trip("C", "c", 50.0, 60.0, 0.0, 1.0)
        .build();
    let duals = duals(&network, -5.0, 0.0);
    let bounds = vec![
        VehicleBounds::unrestricted(3).with_trip_count(None, Some(1)),
        VehicleBounds::unrestricted(3).with_trip_count(Some(3), None),
    ];

    // ACT
    let blocks = fuse_vehicles(&duals, &bounds, 1e-6);
    let result = engine(network, PricingConfig::default())
        .price(&duals, &bounds)
        .unwrap();

    // ASSERT
    assert_eq!(blocks.len(), 1);
    let v0 = result.vehicle(VehicleIdx(0));
    assert_eq!(v0.status(), PricingStatus::Improving);
    assert!(v0.duties().iter().all(|d| d.len() == 1));
    assert_eq!(v0.best().unwrap().reduced_cost(), -4.0);
    let v1 = result.vehicle(VehicleIdx(1));
    assert_eq!(v1.duties().len(), 1);
    assert_equal(
        v1.best().unwrap().trips().iter().copied(),
        [TripIdx(0), TripIdx(1), TripIdx(2)],
    );
    assert_eq!(v1.best().unwrap().reduced_cost(), -12.0);
}

#[test]
fn smallest_epsilon_prices_without_panic_test() {
    // ARRANGE
    let network = TestInstance::new(0.0, 0.0, 0.0, 0.0)
        .customer("a")
        .customer("b")
        .customer("c")
        .vehicle("veh", 1.0, 0.0)
        .trip("A", "a", 10.0, 20.0, 0.0, 0.1)
        .trip("B", "b", 30.0, 40.0, 0.0, 0.2)
        .trip("C", "c", 50.0, 60.0, 0.0, 0.3)
        .build();
    let duals = duals(&network, -5.0, 0.0);
    let bounds = bounds(&network);
    let config = PricingConfig::new(f64::MIN_POSITIVE, FrontierKind::Exact).unwrap();

    // ACT
    let result = engine(network, config).price(&duals, &bounds).unwrap();

    // ASSERT
    let best = result.vehicle(VehicleIdx(0)).best().unwrap();
    assert_equal(best.trips().iter().copied(), [TripIdx(0), TripIdx(1), TripIdx(2)]);
    assert!((best.cost() - 0.6).abs() < 1e-9);
    assert!((best.reduced_cost() + 14.4).abs() < 1e-9);
}

#[test]
fn vehicles_with_equal_duals_are_fused_test() {
    // ARRANGE
    let network = TestInstance::new(5.0, 0.0, 0.0, 0.0)
        .customer("a")
        .vehicle("v0", 1.0, 0.0)
        .vehicle("v1", 1.0, 0.0)
        .vehicle("v2", 1.0, 0.0)
        .trip("A", "a", 10.0, 20.0, 0.1, 1.0)
        .build();
    let mut per_vehicle = vec![VehicleDuals::zero(1); 3];
    per_vehicle[1].convexity = 10.0;
    per_vehicle[2].trips[0] = -1.0;
    let duals = DualPrices::new(per_vehicle);
    let bounds = bounds(&network);

    // ACT
    let blocks = fuse_vehicles(&duals, &bounds, 1e-6);
    let result = engine(network, PricingConfig::default())
        .price(&duals, &bounds)
        .unwrap();

    // ASSERT
    assert_eq!(blocks.len(), 2);
    assert_equal(blocks[0].vehicles().iter().copied(), [VehicleIdx(0), VehicleIdx(1)]);
    assert_equal(blocks[1].vehicles().iter().copied(), [VehicleIdx(2)]);
    // the fused vehicles keep their own convexity duals
    assert_eq!(
        result.vehicle(VehicleIdx(0)).status(),
        PricingStatus::NoImprovingDuty
    );
    assert_eq!(
        result.vehicle(VehicleIdx(1)).status(),
        PricingStatus::Improving
    );
    assert!(result
        .vehicle(VehicleIdx(1))
        .duties()
        .iter()
        .all(|d| d.vehicle() == VehicleIdx(1)));
}

#[test]
fn different_masks_are_not_fused_test() {
    // ARRANGE
    let network = TestInstance::new(5.0, 0.0, 0.0, 0.0)
        .customer("a")
        .vehicle("v0", 1.0, 0.0)
        .vehicle("v1", 1.0, 0.0)
        .trip("A", "a", 10.0, 20.0, 0.1, 1.0)
        .build();
    let duals = duals(&network, 0.0, 0.0);
    let bounds = vec![
        VehicleBounds::unrestricted(1),
        VehicleBounds::unrestricted(1).with_excluded(TripIdx(0)),
    ];

    // ACT
    let blocks = fuse_vehicles(&duals, &bounds, 1e-6);

    // ASSERT
    assert_eq!(blocks.len(), 2);
}

#[test]
fn pricing_is_idempotent_test() {
    // ARRANGE
    let network = load_small_instance();
    let duals = duals(&network, -3.0, 5.0);
    let bounds = bounds(&network);
    let engine = engine(network, PricingConfig::default());

    // ACT
    let first = engine.price(&duals, &bounds).unwrap();
    let second = engine.price(&duals, &bounds).unwrap();

    // ASSERT
    assert!(first.number_of_duties() > 0);
    assert_equal(first.duties(), second.duties());
}

#[test]
fn parallel_and_sequential_pricing_agree_test() {
    // ARRANGE
    let network = Arc::new(load_small_instance());
    let mut per_vehicle = vec![VehicleDuals::zero(network.number_of_trips()); 2];
    per_vehicle[0].trips = vec![-3.0; network.number_of_trips()];
    per_vehicle[1].trips = vec![-4.0; network.number_of_trips()];
    let duals = DualPrices::new(per_vehicle);
    let bounds = bounds(&network);
    let parallel = PricingEngine::new(network.clone(), PricingConfig::default());
    let sequential = PricingEngine::new(
        network.clone(),
        PricingConfig {
            parallel: false,
            ..PricingConfig::default()
        },
    );

    // ACT
    let a = parallel.price(&duals, &bounds).unwrap();
    let b = sequential.price(&duals, &bounds).unwrap();

    // ASSERT
    assert_equal(a.duties(), b.duties());
}

#[test]
fn all_duties_of_small_instance_are_feasible_test() {
    // ARRANGE
    let network = load_small_instance();
    let duals = duals(&network, -4.0, 10.0);
    let bounds = bounds(&network);
    let engine = engine(network, PricingConfig::default());

    // ACT
    let result = engine.price(&duals, &bounds).unwrap();

    // ASSERT
    assert!(result.number_of_duties() > 0);
    for duty in result.duties() {
        assert_eq!(verify_duty(engine.network(), duty, true, 1e-6), Ok(()));
        assert!(duty.reduced_cost() < -engine.config().epsilon);
    }
}

#[test]
fn discrete_frontier_finds_refuel_duty_test() {
    // ARRANGE
    let network = TestInstance::new(5.0, 0.001, 0.0001, 0.001)
        .uniform_dead_head(600.0, 1000.0)
        .customer("a")
        .customer("b")
        .vehicle("veh", 1.0, 25200.0)
        .trip("A", "a", 28800.0, 30600.0, 0.3, 1.0)
        .trip("B", "b", 32400.0, 34200.0, 0.95, 1.0)
        .refuel_point("R")
        .dead_head("R", "B", 600.0, 0.0)
        .pareto_refuel_points("A", "B", &["R"])
        .build();
    let duals = duals(&network, 0.0, 10.0);
    let bounds: Vec<VehicleBounds> = bounds(&network)
        .into_iter()
        .map(|b| b.with_trip_count(Some(2), None))
        .collect();
    let config = PricingConfig {
        frontier: FrontierKind::Discrete { levels: 20 },
        ..PricingConfig::default()
    };
    let engine = engine(network, config);

    // ACT
    let result = engine.price(&duals, &bounds).unwrap();

    // ASSERT
    assert_eq!(result.number_of_duties(), 1);
    let duty = result.vehicle(VehicleIdx(0)).best().unwrap();
    assert!((duty.reduced_cost() + 1.0).abs() < 1e-9);
}

#[test]
fn wrong_dual_dimension_is_rejected_test() {
    // ARRANGE
    let network = two_trips();
    let duals = DualPrices::new(vec![VehicleDuals::zero(3)]);
    let bounds = bounds(&network);
    let engine = engine(network, PricingConfig::default());

    // ACT
    let result = engine.price(&duals, &bounds);

    // ASSERT
    match result {
        Err(PricingError::DimensionMismatch {
            expected, found, ..
        }) => {
            assert_eq!(expected, 2);
            assert_eq!(found, 3);
        }
        other => panic!("unexpected result: {:?}", other.map(|r| r.number_of_duties())),
    }
}

#[test]
fn missing_vehicle_bounds_are_rejected_test() {
    // ARRANGE
    let network = two_trips();
    let duals = duals(&network, 0.0, 0.0);
    let engine = engine(network, PricingConfig::default());

    // ACT
    let result = engine.price(&duals, &[]);

    // ASSERT
    assert!(matches!(
        result,
        Err(PricingError::DimensionMismatch { .. })
    ));
}

#[test]
fn contradicting_trip_counts_are_rejected_test() {
    // ARRANGE
    let network = two_trips();
    let duals = duals(&network, 0.0, 0.0);
    let bounds = vec![VehicleBounds::unrestricted(2).with_trip_count(Some(3), Some(1))];
    let engine = engine(network, PricingConfig::default());

    // ACT
    let result = engine.price(&duals, &bounds);

    // ASSERT
    assert!(matches!(
        result,
        Err(PricingError::ContradictingTripCounts { min: 3, max: 1, .. })
    ));
}

#[test]
fn config_is_read_from_json_test() {
    // ARRANGE
    let input = json!({
        "epsilon": 1e-4,
        "frontier": { "kind": "discrete", "levels": 8 },
        "parallel": false,
    });

    // ACT
    let config = PricingConfig::from_json(input).unwrap();
    let defaults = PricingConfig::from_json(json!({})).unwrap();

    // ASSERT
    assert_eq!(config.epsilon, 1e-4);
    assert_eq!(config.frontier, FrontierKind::Discrete { levels: 8 });
    assert!(!config.parallel);
    assert!(config.forbid_alternatives);
    assert_eq!(defaults, PricingConfig::default());
}

#[test]
fn invalid_config_is_rejected_test() {
    // ACT
    let no_levels = PricingConfig::from_json(json!({
        "frontier": { "kind": "discrete", "levels": 0 }
    }));
    let negative_epsilon = PricingConfig::from_json(json!({ "epsilon": -1.0 }));
    let zero_epsilon = PricingConfig::from_json(json!({ "epsilon": 0.0 }));
    let zero_epsilon_new = PricingConfig::new(0.0, FrontierKind::Exact);
    let unknown_kind = PricingConfig::from_json(json!({ "frontier": { "kind": "fuzzy" } }));

    // ASSERT
    assert!(matches!(no_levels, Err(PricingError::InvalidConfig(_))));
    assert!(matches!(negative_epsilon, Err(PricingError::InvalidConfig(_))));
    assert!(matches!(zero_epsilon, Err(PricingError::InvalidConfig(_))));
    assert!(matches!(zero_epsilon_new, Err(PricingError::InvalidConfig(_))));
    assert!(matches!(unknown_kind, Err(PricingError::Json(_))));
}
