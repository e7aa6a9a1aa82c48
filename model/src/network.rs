pub mod alternatives;
pub mod arc_index;
pub mod vertices;


use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use tracing::{info, warn};

use alternatives::AlternativeType;
use arc_index::ArcIndex;
use vertices::{Customer, RefuelPoint, Route, Trip, Vehicle};

use crate::base_types::{
    Cost, CustomerIdx, Fuel, Idx, Meter, RefuelPointIdx, RouteIdx, Seconds, TripIdx, VehicleIdx,
    VertexIdx, VertexKind, TANK_CAPACITY,
};
use crate::config::Parameters;
use crate::dead_head_trips::DeadHeadTrips;
use crate::error::ModelError;

/// externally precomputed refuel points per arc (source, target), ordered.
pub type ParetoRefuelPoints = HashMap<(VertexIdx, VertexIdx), Vec<RefuelPointIdx>>;

/// Static data of one instance.
///
/// Vertices are laid out in one contiguous index space: vehicle-starts `[0, V)`, trips
/// `[V, V+J)` (ordered by start time, ties by finish time) and refuel points `[V+J, V+J+R)`.
/// The feasible arcs and their refuel candidates are computed once during construction.
pub struct Network {
    vehicles: Vec<Vehicle>,
    trips: Vec<Trip>,
    refuel_points: Vec<RefuelPoint>,
    customers: Vec<Customer>,
    routes: Vec<Route>,
    dead_head_trips: DeadHeadTrips,
    parameters: Parameters,

    // derived information
    trip_customers: Vec<CustomerIdx>,
    customer_trips: Vec<Vec<TripIdx>>,
    customer_routes: Vec<Vec<RouteIdx>>,
    route_trips: Vec<Vec<TripIdx>>,
    alternative_types: Vec<AlternativeType>,
    earliest_finish: Vec<Seconds>, // per customer, infinity if it has no trips
    arcs: ArcIndex,
}

/// Fuel and cost of travelling from s to t, optionally with a detour over a refuel point.
/// A direct leg has no fuel_before_refuel and no refill; all its fuel is burnt after the
/// (virtual) refuel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub fuel_before_refuel: Fuel,
    pub refill: Fuel,
    pub fuel_after_refuel: Fuel,
    pub vertex_fuel: Fuel, // burnt while serving t
    pub cost: Cost,
    pub idle_time: Seconds,
}

impl Leg {
    /// fuel needed when leaving the refuel point such that remaining is left after serving t.
    pub fn fuel_needed_after_refuel(&self, remaining: Fuel) -> Fuel {
        remaining + self.vertex_fuel + self.fuel_after_refuel
    }

    /// fuel needed when leaving s, given the fuel needed when leaving the refuel point.
    /// One cannot arrive at the refuel point with a negative level, hence the lower bound.
    pub fn fuel_needed_at_source(&self, needed_after_refuel: Fuel) -> Fuel {
        (needed_after_refuel - self.refill + self.fuel_before_refuel).max(self.fuel_before_refuel)
    }
}

// static functions
impl Network {
    /// validates the input, computes the feasible arcs with their refuel candidates and runs
    /// the alternative analysis.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        vehicles: Vec<Vehicle>,
        trips: Vec<Trip>,
        refuel_points: Vec<RefuelPoint>,
        customers: Vec<Customer>,
        routes: Vec<Route>,
        dead_head_trips: DeadHeadTrips,
        parameters: Parameters,
        pareto_refuel_points: Option<ParetoRefuelPoints>,
    ) -> Result<Network, ModelError> {
        let number_of_vertices = vehicles.len() + trips.len() + refuel_points.len();
        if dead_head_trips.size() != number_of_vertices {
            return Err(ModelError::DimensionMismatch {
                what: "dead head trips",
                expected: number_of_vertices,
                found: dead_head_trips.size(),
            });
        }

        for vehicle in vehicles.iter() {
            if !(0.0..=TANK_CAPACITY).contains(&vehicle.initial_fuel()) {
                return Err(ModelError::InvalidFuel {
                    what: format!("initial fuel of vehicle {}", vehicle.id()),
                    value: vehicle.initial_fuel(),
                });
            }
        }

        for route in routes.iter() {
            if route.customer().idx() >= customers.len() {
                return Err(ModelError::IndexOutOfRange {
                    what: "customer",
                    index: route.customer().idx(),
                    size: customers.len(),
                });
            }
        }

        for (j, trip) in trips.iter().enumerate() {
            let trip_idx = TripIdx(j as Idx);
            if trip.route().idx() >= routes.len() {
                return Err(ModelError::IndexOutOfRange {
                    what: "route",
                    index: trip.route().idx(),
                    size: routes.len(),
                });
            }
            if trip.finish_time() < trip.start_time() {
                return Err(ModelError::NegativeDuration(trip_idx));
            }
            if trip.fuel() < 0.0 {
                return Err(ModelError::InvalidFuel {
                    what: format!("trip {}", trip.id()),
                    value: trip.fuel(),
                });
            }
        }

        if let Some((_, (j, _))) = trips
            .iter()
            .map(|trip| (trip.start_time(), trip.finish_time()))
            .enumerate()
            .tuple_windows()
            .find(|((_, earlier), (_, later))| later < earlier)
        {
            return Err(ModelError::TripsNotSorted(TripIdx(j as Idx)));
        }

        let trip_customers: Vec<CustomerIdx> = trips
            .iter()
            .map(|trip| routes[trip.route().idx()].customer())
            .collect();

        let mut customer_trips: Vec<Vec<TripIdx>> = vec![Vec::new(); customers.len()];
        let mut route_trips: Vec<Vec<TripIdx>> = vec![Vec::new(); routes.len()];
        for (j, trip) in trips.iter().enumerate() {
            customer_trips[trip_customers[j].idx()].push(TripIdx(j as Idx));
            route_trips[trip.route().idx()].push(TripIdx(j as Idx));
        }

        let mut customer_routes: Vec<Vec<RouteIdx>> = vec![Vec::new(); customers.len()];
        for (r, route) in routes.iter().enumerate() {
            customer_routes[route.customer().idx()].push(RouteIdx(r as Idx));
        }

        let earliest_finish: Vec<Seconds> = customer_trips
            .iter()
            .map(|trips_of_customer| {
                trips_of_customer
                    .iter()
                    .map(|t| trips[t.idx()].finish_time())
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();

        let mut network = Network {
            vehicles,
            trips,
            refuel_points,
            customers,
            routes,
            dead_head_trips,
            parameters,
            trip_customers,
            customer_trips,
            customer_routes,
            route_trips,
            alternative_types: Vec::new(),
            earliest_finish,
            arcs: ArcIndex::from_rows(Vec::new()),
        };

        if let Some(table) = pareto_refuel_points.as_ref() {
            network.validate_pareto_refuel_points(table)?;
        }

        network.alternative_types = alternatives::classify_customers(
            &network.customer_trips,
            &network.trip_customers,
            |s, t| {
                network.is_time_feasible(network.vertex_of_trip(s), network.vertex_of_trip(t))
            },
        );
        network.arcs = network.build_arc_index(pareto_refuel_points.as_ref());

        info!(
            "network with {} vehicles, {} trips, {} refuel points, {} customers, {} routes and {} feasible arcs ({} refuel candidates)",
            network.number_of_vehicles(),
            network.number_of_trips(),
            network.number_of_refuel_points(),
            network.number_of_customers(),
            network.number_of_routes(),
            network.arcs.numel(),
            network.arcs.number_of_refuel_candidates()
        );
        let counts = network.alternative_types.iter().counts();
        info!(
            "alternative analysis: {} parallel, {} consecutive, {} intermittent, {} overlapping",
            counts.get(&AlternativeType::Parallel).unwrap_or(&0),
            counts.get(&AlternativeType::Consecutive).unwrap_or(&0),
            counts.get(&AlternativeType::Intermittent).unwrap_or(&0),
            counts.get(&AlternativeType::Overlapping).unwrap_or(&0)
        );

        Ok(network)
    }
}

// methods
impl Network {
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn arcs(&self) -> &ArcIndex {
        &self.arcs
    }

    pub fn number_of_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    pub fn number_of_trips(&self) -> usize {
        self.trips.len()
    }

    pub fn number_of_refuel_points(&self) -> usize {
        self.refuel_points.len()
    }

    pub fn number_of_customers(&self) -> usize {
        self.customers.len()
    }

    pub fn number_of_routes(&self) -> usize {
        self.routes.len()
    }

    /// number of vertices a duty can visit (vehicle-starts and trips).
    pub fn number_of_path_vertices(&self) -> usize {
        self.vehicles.len() + self.trips.len()
    }

    /// number of vertices including the refuel points.
    pub fn number_of_vertices(&self) -> usize {
        self.number_of_path_vertices() + self.refuel_points.len()
    }

    pub fn vehicles(&self) -> impl Iterator<Item = VehicleIdx> + '_ {
        (0..self.vehicles.len()).map(|v| VehicleIdx(v as Idx))
    }

    pub fn trips(&self) -> impl Iterator<Item = TripIdx> + '_ {
        (0..self.trips.len()).map(|j| TripIdx(j as Idx))
    }

    pub fn customers(&self) -> impl Iterator<Item = CustomerIdx> + '_ {
        (0..self.customers.len()).map(|c| CustomerIdx(c as Idx))
    }

    pub fn vehicle(&self, vehicle: VehicleIdx) -> &Vehicle {
        &self.vehicles[vehicle.idx()]
    }

    pub fn trip(&self, trip: TripIdx) -> &Trip {
        &self.trips[trip.idx()]
    }

    pub fn refuel_point(&self, refuel_point: RefuelPointIdx) -> &RefuelPoint {
        &self.refuel_points[refuel_point.idx()]
    }

    pub fn customer(&self, customer: CustomerIdx) -> &Customer {
        &self.customers[customer.idx()]
    }

    pub fn route(&self, route: RouteIdx) -> &Route {
        &self.routes[route.idx()]
    }

    /// the kind of a vertex follows from its index. Panics if the index is out of range.
    pub fn kind(&self, vertex: VertexIdx) -> VertexKind {
        let v = vertex.idx();
        let number_of_vehicles = self.vehicles.len();
        let number_of_path_vertices = self.number_of_path_vertices();
        if v < number_of_vehicles {
            VertexKind::VehicleStart(VehicleIdx(v as Idx))
        } else if v < number_of_path_vertices {
            VertexKind::Trip(TripIdx((v - number_of_vehicles) as Idx))
        } else if v < self.number_of_vertices() {
            VertexKind::RefuelPoint(RefuelPointIdx((v - number_of_path_vertices) as Idx))
        } else {
            panic!("{} is out of range", vertex);
        }
    }

    pub fn vertex_of_vehicle(&self, vehicle: VehicleIdx) -> VertexIdx {
        VertexIdx::from_usize(vehicle.idx())
    }

    pub fn vertex_of_trip(&self, trip: TripIdx) -> VertexIdx {
        VertexIdx::from_usize(self.vehicles.len() + trip.idx())
    }

    pub fn vertex_of_refuel_point(&self, refuel_point: RefuelPointIdx) -> VertexIdx {
        VertexIdx::from_usize(self.number_of_path_vertices() + refuel_point.idx())
    }

    /// start time of a trip or ready time of a vehicle.
    pub fn start_time(&self, vertex: VertexIdx) -> Seconds {
        match self.kind(vertex) {
            VertexKind::VehicleStart(v) => self.vehicles[v.idx()].ready_time(),
            VertexKind::Trip(t) => self.trips[t.idx()].start_time(),
            VertexKind::RefuelPoint(_) => panic!("refuel points have no time window"),
        }
    }

    /// finish time of a trip or ready time of a vehicle.
    pub fn finish_time(&self, vertex: VertexIdx) -> Seconds {
        match self.kind(vertex) {
            VertexKind::VehicleStart(v) => self.vehicles[v.idx()].ready_time(),
            VertexKind::Trip(t) => self.trips[t.idx()].finish_time(),
            VertexKind::RefuelPoint(_) => panic!("refuel points have no time window"),
        }
    }

    /// fuel burnt while serving the vertex (only trips burn fuel).
    pub fn vertex_fuel(&self, vertex: VertexIdx) -> Fuel {
        match self.kind(vertex) {
            VertexKind::Trip(t) => self.trips[t.idx()].fuel(),
            _ => 0.0,
        }
    }

    pub fn vertex_cost(&self, vertex: VertexIdx) -> Cost {
        match self.kind(vertex) {
            VertexKind::Trip(t) => self.trips[t.idx()].cost(),
            _ => 0.0,
        }
    }

    pub fn route_of(&self, vertex: VertexIdx) -> Option<RouteIdx> {
        match self.kind(vertex) {
            VertexKind::Trip(t) => Some(self.trips[t.idx()].route()),
            _ => None,
        }
    }

    pub fn customer_of(&self, vertex: VertexIdx) -> Option<CustomerIdx> {
        match self.kind(vertex) {
            VertexKind::Trip(t) => Some(self.trip_customers[t.idx()]),
            _ => None,
        }
    }

    pub fn customer_of_trip(&self, trip: TripIdx) -> CustomerIdx {
        self.trip_customers[trip.idx()]
    }

    pub fn customer_trips(&self, customer: CustomerIdx) -> &[TripIdx] {
        &self.customer_trips[customer.idx()]
    }

    pub fn customer_routes(&self, customer: CustomerIdx) -> &[RouteIdx] {
        &self.customer_routes[customer.idx()]
    }

    pub fn route_trips(&self, route: RouteIdx) -> &[TripIdx] {
        &self.route_trips[route.idx()]
    }

    pub fn alternative_type(&self, customer: CustomerIdx) -> AlternativeType {
        self.alternative_types[customer.idx()]
    }

    /// true iff the route commitment of the customer has to be tracked along a duty.
    pub fn is_tracked(&self, customer: CustomerIdx) -> bool {
        self.alternative_types[customer.idx()].requires_tracking()
    }

    /// earliest finish time over all trips of the customer (infinity without trips).
    pub fn earliest_finish(&self, customer: CustomerIdx) -> Seconds {
        self.earliest_finish[customer.idx()]
    }

    pub fn travel_time(&self, a: VertexIdx, b: VertexIdx) -> Seconds {
        self.dead_head_trips.travel_time(a, b)
    }

    pub fn distance(&self, a: VertexIdx, b: VertexIdx) -> Meter {
        self.dead_head_trips.distance(a, b)
    }

    /// true iff t can be reached from s in time (ignoring customers and routes).
    pub fn is_time_feasible(&self, s: VertexIdx, t: VertexIdx) -> bool {
        self.finish_time(s) + self.travel_time(s, t) <= self.start_time(t)
    }

    /// true iff (s, t) is a feasible arc: t is a trip, s is a vehicle-start or a trip of lower
    /// index, t can be reached in time and s and t are not alternatives on different routes.
    pub fn is_feasible_arc(&self, s: VertexIdx, t: VertexIdx) -> bool {
        let target_trip = match self.kind(t) {
            VertexKind::Trip(trip) => trip,
            _ => return false,
        };
        match self.kind(s) {
            VertexKind::VehicleStart(_) => self.is_time_feasible(s, t),
            VertexKind::Trip(source_trip) => {
                s < t
                    && self.is_time_feasible(s, t)
                    && (self.trip_customers[source_trip.idx()]
                        != self.trip_customers[target_trip.idx()]
                        || self.trips[source_trip.idx()].route()
                            == self.trips[target_trip.idx()].route())
            }
            VertexKind::RefuelPoint(_) => false,
        }
    }

    /// idle time at the refuel point of the detour s -> r -> t (may be negative).
    pub fn idle_time_at(&self, s: VertexIdx, refuel_point: RefuelPointIdx, t: VertexIdx) -> Seconds {
        let r = self.vertex_of_refuel_point(refuel_point);
        self.start_time(t) - self.finish_time(s) - self.travel_time(s, r) - self.travel_time(r, t)
    }

    /// fuel and cost of going from s to t and serving t, optionally over a refuel point.
    pub fn leg(&self, s: VertexIdx, t: VertexIdx, refuel_point: Option<RefuelPointIdx>) -> Leg {
        let vehicle_cost = if self.kind(s).is_vehicle_start() {
            self.parameters.cost_per_vehicle
        } else {
            0.0
        };
        let vertex_fuel = self.vertex_fuel(t);
        match refuel_point {
            None => {
                let distance = self.distance(s, t);
                Leg {
                    fuel_before_refuel: 0.0,
                    refill: 0.0,
                    fuel_after_refuel: self.parameters.fuel_for(distance),
                    vertex_fuel,
                    cost: self.parameters.cost_for(distance) + self.vertex_cost(t) + vehicle_cost,
                    idle_time: self.start_time(t) - self.finish_time(s) - self.travel_time(s, t),
                }
            }
            Some(refuel_point) => {
                let r = self.vertex_of_refuel_point(refuel_point);
                let distance_before = self.distance(s, r);
                let distance_after = self.distance(r, t);
                let idle_time = self.idle_time_at(s, refuel_point, t);
                Leg {
                    fuel_before_refuel: self.parameters.fuel_for(distance_before),
                    refill: self
                        .parameters
                        .refill_within(idle_time.max(0.0))
                        .min(TANK_CAPACITY),
                    fuel_after_refuel: self.parameters.fuel_for(distance_after),
                    vertex_fuel,
                    cost: self.parameters.cost_for(distance_before + distance_after)
                        + self.vertex_cost(t)
                        + vehicle_cost,
                    idle_time,
                }
            }
        }
    }
}

// private methods
impl Network {
    fn validate_pareto_refuel_points(&self, table: &ParetoRefuelPoints) -> Result<(), ModelError> {
        for (&(s, t), candidates) in table.iter() {
            for v in [s, t] {
                if v.idx() >= self.number_of_path_vertices() {
                    return Err(ModelError::IndexOutOfRange {
                        what: "vertex",
                        index: v.idx(),
                        size: self.number_of_path_vertices(),
                    });
                }
            }
            if let Some(r) = candidates
                .iter()
                .find(|r| r.idx() >= self.refuel_points.len())
            {
                return Err(ModelError::IndexOutOfRange {
                    what: "refuel point",
                    index: r.idx(),
                    size: self.refuel_points.len(),
                });
            }
        }
        Ok(())
    }

    fn build_arc_index(&self, pareto_refuel_points: Option<&ParetoRefuelPoints>) -> ArcIndex {
        let rows = (0..self.number_of_path_vertices())
            .map(VertexIdx::from_usize)
            .map(|t| {
                if !self.kind(t).is_trip() {
                    return Vec::new();
                }
                (0..t.idx())
                    .map(VertexIdx::from_usize)
                    .filter(|&s| self.is_feasible_arc(s, t))
                    .map(|s| {
                        let candidates = pareto_refuel_points
                            .and_then(|table| table.get(&(s, t)))
                            .map(|candidates| self.usable_refuel_points(s, t, candidates))
                            .unwrap_or_default();
                        (s, candidates)
                    })
                    .collect()
            })
            .collect();
        ArcIndex::from_rows(rows)
    }

    fn usable_refuel_points(
        &self,
        s: VertexIdx,
        t: VertexIdx,
        candidates: &[RefuelPointIdx],
    ) -> Vec<RefuelPointIdx> {
        candidates
            .iter()
            .copied()
            .filter(|&r| {
                let idle_time = self.idle_time_at(s, r, t);
                if idle_time < 0.0 {
                    warn!(
                        "dropped {} on arc ({}, {}): detour exceeds the time window by {}s",
                        r, s, t, -idle_time
                    );
                    false
                } else {
                    true
                }
            })
            .collect()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "** network with {} vertices:", self.number_of_vertices())?;
        for vehicle in self.vehicles.iter() {
            writeln!(f, "\t{}", vehicle)?;
        }
        for (j, trip) in self.trips.iter().enumerate() {
            writeln!(
                f,
                "\t{} of {} ({})",
                trip, self.trip_customers[j], self.alternative_types[self.trip_customers[j].idx()]
            )?;
        }
        write!(f, "\t{} feasible arcs", self.arcs.numel())
    }
}
