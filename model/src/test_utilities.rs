use std::collections::HashMap;

use serde_json::{json, Value};

use crate::base_types::{Cost, Fuel, Meter, Seconds};
use crate::json_serialisation::{load_instance_from_file, load_instance_from_json};
use crate::network::Network;

pub const SMALL_INSTANCE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/small_instance.json");

pub fn load_small_instance() -> Network {
    load_instance_from_file(SMALL_INSTANCE).unwrap()
}

/// Assembles an instance in the json format so tests can state scenarios in a few lines.
/// Dead head trips between distinct vertices default to the uniform travel time and distance
/// unless overwritten (one direction at a time).
pub struct TestInstance {
    parameters: Value,
    customers: Vec<Value>,
    routes: Vec<Value>,
    vehicles: Vec<Value>,
    trips: Vec<Value>,
    refuel_points: Vec<Value>,
    vertex_ids: Vec<String>,
    travel_time: Seconds,
    distance: Meter,
    dead_head_overrides: HashMap<(String, String), (Seconds, Meter)>,
    pareto_refuel_points: Vec<Value>,
}

impl TestInstance {
    pub fn new(
        cost_per_vehicle: Cost,
        cost_per_meter: Cost,
        fuel_per_meter: Fuel,
        refuel_per_second: Fuel,
    ) -> TestInstance {
        TestInstance {
            parameters: json!({
                "costPerVehicle": cost_per_vehicle,
                "costPerMeter": cost_per_meter,
                "fuelPerMeter": fuel_per_meter,
                "refuelPerSecond": refuel_per_second,
            }),
            customers: Vec::new(),
            routes: Vec::new(),
            vehicles: Vec::new(),
            trips: Vec::new(),
            refuel_points: Vec::new(),
            vertex_ids: Vec::new(),
            travel_time: 0.0,
            distance: 0.0,
            dead_head_overrides: HashMap::new(),
            pareto_refuel_points: Vec::new(),
        }
    }

    pub fn uniform_dead_head(mut self, travel_time: Seconds, distance: Meter) -> TestInstance {
        self.travel_time = travel_time;
        self.distance = distance;
        self
    }

    /// adds a customer with a single route of the same id.
    pub fn customer(self, id: &str) -> TestInstance {
        self.customer_with_routes(id, &[id])
    }

    pub fn customer_with_routes(mut self, id: &str, routes: &[&str]) -> TestInstance {
        self.customers.push(json!({ "id": id }));
        for route in routes {
            self.routes.push(json!({ "id": route, "customer": id }));
        }
        self
    }

    pub fn vehicle(mut self, id: &str, initial_fuel: Fuel, ready_time: Seconds) -> TestInstance {
        self.vehicles.push(json!({
            "id": id,
            "initialFuel": initial_fuel,
            "readyTime": ready_time,
        }));
        self.vertex_ids.push(id.to_string());
        self
    }

    pub fn trip(
        mut self,
        id: &str,
        route: &str,
        start_time: Seconds,
        finish_time: Seconds,
        fuel: Fuel,
        cost: Cost,
    ) -> TestInstance {
        self.trips.push(json!({
            "id": id,
            "route": route,
            "startTime": start_time,
            "finishTime": finish_time,
            "fuel": fuel,
            "cost": cost,
        }));
        self.vertex_ids.push(id.to_string());
        self
    }

    pub fn refuel_point(mut self, id: &str) -> TestInstance {
        self.refuel_points.push(json!({ "id": id }));
        self.vertex_ids.push(id.to_string());
        self
    }

    pub fn dead_head(
        mut self,
        from: &str,
        to: &str,
        travel_time: Seconds,
        distance: Meter,
    ) -> TestInstance {
        self.dead_head_overrides
            .insert((from.to_string(), to.to_string()), (travel_time, distance));
        self
    }

    pub fn pareto_refuel_points(mut self, from: &str, to: &str, refuel_points: &[&str]) -> TestInstance {
        self.pareto_refuel_points.push(json!({
            "from": from,
            "to": to,
            "refuelPoints": refuel_points,
        }));
        self
    }

    pub fn to_json(&self) -> Value {
        let entry = |a: &String, b: &String| -> (Seconds, Meter) {
            if a == b {
                (0.0, 0.0)
            } else {
                self.dead_head_overrides
                    .get(&(a.clone(), b.clone()))
                    .copied()
                    .unwrap_or((self.travel_time, self.distance))
            }
        };
        let travel_times: Vec<Vec<Seconds>> = self
            .vertex_ids
            .iter()
            .map(|a| self.vertex_ids.iter().map(|b| entry(a, b).0).collect())
            .collect();
        let distances: Vec<Vec<Meter>> = self
            .vertex_ids
            .iter()
            .map(|a| self.vertex_ids.iter().map(|b| entry(a, b).1).collect())
            .collect();

        let mut instance = json!({
            "parameters": self.parameters,
            "customers": self.customers,
            "routes": self.routes,
            "vehicles": self.vehicles,
            "trips": self.trips,
            "refuelPoints": self.refuel_points,
            "deadHeadTrips": {
                "indices": self.vertex_ids,
                "travelTimesInSeconds": travel_times,
                "distancesInMeter": distances,
            },
        });
        if !self.pareto_refuel_points.is_empty() {
            instance["paretoRefuelPoints"] = json!(self.pareto_refuel_points);
        }
        instance
    }

    pub fn build(&self) -> Network {
        load_instance_from_json(self.to_json()).unwrap()
    }
}
