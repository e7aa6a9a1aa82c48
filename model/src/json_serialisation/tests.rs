// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::{fs::File, io::Read};

use crate::{
    base_types::{CustomerIdx, RefuelPointIdx, RouteIdx, TripIdx, VehicleIdx, VertexIdx},
    error::ModelError,
    json_serialisation::load_instance_from_json,
    network::alternatives::AlternativeType,
    test_utilities::{load_small_instance, TestInstance, SMALL_INSTANCE},
};

fn read_small_instance() -> serde_json::Value {
    let mut file = File::open(SMALL_INSTANCE).unwrap();
    let mut input_data = String::new();
    file.read_to_string(&mut input_data).unwrap();
    serde_json::from_str(&input_data).unwrap()
}

#[test]
fn test_load_small_instance() {
    // ACT
    let network = load_small_instance();

    // ASSERT
    assert_eq!(network.number_of_vehicles(), 2);
    assert_eq!(network.number_of_trips(), 4);
    assert_eq!(network.number_of_refuel_points(), 1);
    assert_eq!(network.number_of_customers(), 3);
    assert_eq!(network.number_of_routes(), 4);
    assert_eq!(network.number_of_vertices(), 7);

    // trips are ordered by start time
    itertools::assert_equal(
        network.trips().map(|t| network.trip(t).id().to_string()),
        vec!["A", "B1", "B2", "C"].into_iter().map(String::from),
    );

    assert_eq!(network.vehicle(VehicleIdx(1)).initial_fuel(), 0.5);
    assert_eq!(network.vehicle(VehicleIdx(0)).ready_time(), 25200.0);
    assert_eq!(network.trip(TripIdx(2)).route(), RouteIdx(2));
    assert_eq!(network.customer_of_trip(TripIdx(2)), CustomerIdx(1));
    assert_eq!(network.parameters().cost_per_vehicle, 5.0);
}

#[test]
fn test_dead_head_matrices_are_permuted_into_vertex_order() {
    // ACT
    let network = load_small_instance();
    let veh0 = VertexIdx(0);
    let trip_a = VertexIdx(2);
    let refuel = VertexIdx(6);

    // ASSERT
    assert_eq!(network.distance(veh0, trip_a), 2000.0);
    assert_eq!(network.distance(trip_a, veh0), 1000.0);
    assert_eq!(network.distance(trip_a, trip_a), 0.0);
    assert_eq!(network.travel_time(refuel, trip_a), 600.0);
}

#[test]
fn test_arcs_and_refuel_candidates() {
    // ACT
    let network = load_small_instance();
    let arcs = network.arcs();
    let (a, b1, b2, c) = (VertexIdx(2), VertexIdx(3), VertexIdx(4), VertexIdx(5));

    // ASSERT
    assert_eq!(arcs.numel(), 13);
    assert!(!arcs.contains(b1, b2));
    assert!(!arcs.contains(b2, b1));
    assert!(arcs.contains(b2, c));
    itertools::assert_equal(
        arcs.find(a, c).unwrap().refuel_points().iter().copied(),
        vec![RefuelPointIdx(0)],
    );
    assert!(arcs.find(b1, c).unwrap().refuel_points().is_empty());

    for customer in network.customers() {
        assert_eq!(network.alternative_type(customer), AlternativeType::Parallel);
    }
}

#[test]
fn test_unknown_route_is_rejected() {
    // ARRANGE
    let mut input_data = read_small_instance();
    input_data["trips"][0]["route"] = serde_json::json!("r42");

    // ACT
    let result = load_instance_from_json(input_data);

    // ASSERT
    match result {
        Err(ModelError::UnknownId { what, id }) => {
            assert_eq!(what, "route");
            assert_eq!(id, "r42");
        }
        _ => panic!("expected an unknown id error"),
    }
}

#[test]
fn test_duplicate_vertex_id_is_rejected() {
    // ARRANGE
    let mut input_data = read_small_instance();
    input_data["refuelPoints"][0]["id"] = serde_json::json!("A");

    // ACT
    let result = load_instance_from_json(input_data);

    // ASSERT
    assert!(matches!(result, Err(ModelError::DuplicateId { .. })));
}

#[test]
fn test_dead_head_matrix_of_wrong_size_is_rejected() {
    // ARRANGE
    let mut input_data = read_small_instance();
    input_data["deadHeadTrips"]["distancesInMeter"][3] = serde_json::json!([0.0, 1.0]);

    // ACT
    let result = load_instance_from_json(input_data);

    // ASSERT
    assert!(matches!(
        result,
        Err(ModelError::DimensionMismatch {
            what: "distance matrix",
            expected: 7,
            found: 2
        })
    ));
}

#[test]
fn test_invalid_initial_fuel_is_rejected() {
    // ARRANGE
    let instance = TestInstance::new(0.0, 0.0, 0.0, 0.0)
        .customer("c")
        .vehicle("veh", 1.5, 0.0)
        .trip("t", "c", 10.0, 20.0, 0.1, 1.0);

    // ACT
    let result = load_instance_from_json(instance.to_json());

    // ASSERT
    assert!(matches!(result, Err(ModelError::InvalidFuel { .. })));
}

#[test]
fn test_missing_parameters_is_a_json_error() {
    // ARRANGE
    let mut input_data = read_small_instance();
    input_data.as_object_mut().unwrap().remove("parameters");

    // ACT
    let result = load_instance_from_json(input_data);

    // ASSERT
    assert!(matches!(result, Err(ModelError::Json(_))));
}
