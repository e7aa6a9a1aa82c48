#[cfg(test)]
mod tests;

use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::prelude::*;

use crate::base_types::{
    Cost, CustomerIdx, Fuel, Idx, Meter, RefuelPointIdx, RouteIdx, Seconds, VertexIdx,
};
use crate::config::Parameters;
use crate::dead_head_trips::DeadHeadTrips;
use crate::error::ModelError;
use crate::network::vertices::{Customer, RefuelPoint, Route, Trip, Vehicle};
use crate::network::{Network, ParetoRefuelPoints};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonCustomer {
    id: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonRoute {
    id: String,
    customer: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonVehicle {
    id: String,
    initial_fuel: Fuel,
    ready_time: Seconds,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonTrip {
    id: String,
    route: String,
    start_time: Seconds,
    finish_time: Seconds,
    fuel: Fuel,
    cost: Cost,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonRefuelPoint {
    id: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonDeadHeadTrips {
    indices: Vec<String>,
    travel_times_in_seconds: Vec<Vec<Seconds>>,
    distances_in_meter: Vec<Vec<Meter>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonParetoRefuelPoints {
    from: String,
    to: String,
    refuel_points: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInput {
    parameters: Parameters,
    customers: Vec<JsonCustomer>,
    routes: Vec<JsonRoute>,
    vehicles: Vec<JsonVehicle>,
    trips: Vec<JsonTrip>,
    #[serde(default)]
    refuel_points: Vec<JsonRefuelPoint>,
    dead_head_trips: JsonDeadHeadTrips,
    pareto_refuel_points: Option<Vec<JsonParetoRefuelPoints>>,
}

pub fn load_instance_from_file(path: &str) -> Result<Network, ModelError> {
    let mut file = File::open(path)?;
    let mut data = String::new();
    file.read_to_string(&mut data)?;
    load_instance_from_json(serde_json::from_str(&data)?)
}

/// builds the network from the json format. Trips get their indices in order of
/// (start time, finish time).
pub fn load_instance_from_json(input_data: serde_json::Value) -> Result<Network, ModelError> {
    let mut json_input: JsonInput = serde_json::from_value(input_data)?;
    json_input.trips.sort_by(|a, b| {
        a.start_time
            .total_cmp(&b.start_time)
            .then(a.finish_time.total_cmp(&b.finish_time))
    });

    let customer_lookup = create_lookup(json_input.customers.iter().map(|c| &c.id), "customer")?;
    let route_lookup = create_lookup(json_input.routes.iter().map(|r| &r.id), "route")?;
    let refuel_point_lookup =
        create_lookup(json_input.refuel_points.iter().map(|r| &r.id), "refuel point")?;

    // vehicles first, then trips (sorted), then refuel points
    let vertex_lookup = create_lookup(
        json_input
            .vehicles
            .iter()
            .map(|v| &v.id)
            .chain(json_input.trips.iter().map(|t| &t.id))
            .chain(json_input.refuel_points.iter().map(|r| &r.id)),
        "vertex",
    )?;

    let customers = json_input
        .customers
        .iter()
        .map(|c| Customer::new(c.id.clone()))
        .collect();

    let routes = json_input
        .routes
        .iter()
        .map(|r| {
            let customer = CustomerIdx(lookup(&customer_lookup, &r.customer, "customer")?);
            Ok(Route::new(r.id.clone(), customer))
        })
        .collect::<Result<Vec<_>, ModelError>>()?;

    let vehicles = json_input
        .vehicles
        .iter()
        .map(|v| Vehicle::new(v.id.clone(), v.initial_fuel, v.ready_time))
        .collect();

    let trips = json_input
        .trips
        .iter()
        .map(|t| {
            let route = RouteIdx(lookup(&route_lookup, &t.route, "route")?);
            Ok(Trip::new(
                t.id.clone(),
                route,
                t.start_time,
                t.finish_time,
                t.fuel,
                t.cost,
            ))
        })
        .collect::<Result<Vec<_>, ModelError>>()?;

    let refuel_points = json_input
        .refuel_points
        .iter()
        .map(|r| RefuelPoint::new(r.id.clone()))
        .collect();

    let dead_head_trips = create_dead_head_trips(&json_input.dead_head_trips, &vertex_lookup)?;

    let pareto_refuel_points = json_input
        .pareto_refuel_points
        .as_ref()
        .map(|entries| {
            create_pareto_refuel_points(entries, &vertex_lookup, &refuel_point_lookup)
        })
        .transpose()?;

    Network::new(
        vehicles,
        trips,
        refuel_points,
        customers,
        routes,
        dead_head_trips,
        json_input.parameters,
        pareto_refuel_points,
    )
}

fn create_lookup<'a>(
    ids: impl Iterator<Item = &'a String>,
    what: &'static str,
) -> Result<HashMap<String, Idx>, ModelError> {
    let mut lookup = HashMap::new();
    for (idx, id) in ids.enumerate() {
        if lookup.insert(id.clone(), idx as Idx).is_some() {
            return Err(ModelError::DuplicateId {
                what,
                id: id.clone(),
            });
        }
    }
    Ok(lookup)
}

fn lookup(
    lookup: &HashMap<String, Idx>,
    id: &str,
    what: &'static str,
) -> Result<Idx, ModelError> {
    lookup.get(id).copied().ok_or_else(|| ModelError::UnknownId {
        what,
        id: id.to_string(),
    })
}

/// the matrices in the json can list the vertices in any order, they are permuted into
/// vertex index order.
fn create_dead_head_trips(
    json_dead_head_trips: &JsonDeadHeadTrips,
    vertex_lookup: &HashMap<String, Idx>,
) -> Result<DeadHeadTrips, ModelError> {
    let size = vertex_lookup.len();
    let indices = &json_dead_head_trips.indices;
    if indices.len() != size {
        return Err(ModelError::DimensionMismatch {
            what: "dead head trip indices",
            expected: size,
            found: indices.len(),
        });
    }
    for (what, matrix) in [
        ("travel time matrix", &json_dead_head_trips.travel_times_in_seconds),
        ("distance matrix", &json_dead_head_trips.distances_in_meter),
    ] {
        if let Some(row) = matrix.iter().find(|row| row.len() != size) {
            return Err(ModelError::DimensionMismatch {
                what,
                expected: size,
                found: row.len(),
            });
        }
        if matrix.len() != size {
            return Err(ModelError::DimensionMismatch {
                what,
                expected: size,
                found: matrix.len(),
            });
        }
    }

    // position[v] is the row/column of vertex v in the json matrices
    let mut position: Vec<usize> = vec![0; size];
    let mut seen = vec![false; size];
    for (i, id) in indices.iter().enumerate() {
        let v = lookup(vertex_lookup, id, "vertex")? as usize;
        if seen[v] {
            return Err(ModelError::DuplicateId {
                what: "dead head trip index",
                id: id.clone(),
            });
        }
        seen[v] = true;
        position[v] = i;
    }

    let permute = |matrix: &Vec<Vec<f64>>| -> Vec<Vec<f64>> {
        (0..size)
            .map(|a| (0..size).map(|b| matrix[position[a]][position[b]]).collect())
            .collect()
    };

    DeadHeadTrips::new(
        permute(&json_dead_head_trips.travel_times_in_seconds),
        permute(&json_dead_head_trips.distances_in_meter),
    )
}

fn create_pareto_refuel_points(
    entries: &[JsonParetoRefuelPoints],
    vertex_lookup: &HashMap<String, Idx>,
    refuel_point_lookup: &HashMap<String, Idx>,
) -> Result<ParetoRefuelPoints, ModelError> {
    let mut pareto_refuel_points = ParetoRefuelPoints::new();
    for entry in entries.iter() {
        let from = VertexIdx(lookup(vertex_lookup, &entry.from, "vertex")?);
        let to = VertexIdx(lookup(vertex_lookup, &entry.to, "vertex")?);
        let refuel_points = entry
            .refuel_points
            .iter()
            .map(|id| lookup(refuel_point_lookup, id, "refuel point").map(RefuelPointIdx))
            .collect::<Result<Vec<_>, ModelError>>()?;
        pareto_refuel_points
            .entry((from, to))
            .or_default()
            .extend(refuel_points);
    }
    Ok(pareto_refuel_points)
}
