
use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use model::base_types::{Cost, RefuelPointIdx, TripIdx, VehicleIdx, VertexIdx};
use model::network::Network;

/// An entry of the sparse column of a duty in the master problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Coefficient {
    /// covering row of a trip
    Trip(TripIdx),
    Cost,
    Used,
    Length,
}

/// This represents the duty of a single vehicle: the trips in the order they are served and the
/// refuel point visited on the leg into each trip (if any).
///
/// refuel_points[i] is the refuel point on the leg from the previous vertex (the vehicle-start
/// for i = 0) into trips[i].
/// The empty duty (no trips) is valid and means that the vehicle is not used.
///
/// A duty is immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Duty {
    vehicle: VehicleIdx,
    trips: Vec<TripIdx>,
    refuel_points: Vec<Option<RefuelPointIdx>>,
    cost: Cost,
    reduced_cost: Cost,
}

// static functions
impl Duty {
    /// trips and refuel_points must have the same length.
    pub fn new(
        vehicle: VehicleIdx,
        trips: Vec<TripIdx>,
        refuel_points: Vec<Option<RefuelPointIdx>>,
        cost: Cost,
        reduced_cost: Cost,
    ) -> Duty {
        assert_eq!(trips.len(), refuel_points.len());
        Duty {
            vehicle,
            trips,
            refuel_points,
            cost,
            reduced_cost,
        }
    }

    /// the empty duty of a vehicle that is not used.
    pub fn empty(vehicle: VehicleIdx, reduced_cost: Cost) -> Duty {
        Duty::new(vehicle, Vec::new(), Vec::new(), 0.0, reduced_cost)
    }

    /// Builds a duty from a trip sequence and computes its cost from the network. The reduced
    /// cost is set to zero. Fails if some leg is not a feasible arc or uses a refuel point that
    /// is not a candidate of its arc.
    pub fn evaluate(
        network: &Network,
        vehicle: VehicleIdx,
        trips: Vec<TripIdx>,
        refuel_points: Vec<Option<RefuelPointIdx>>,
    ) -> Result<Duty, String> {
        if trips.len() != refuel_points.len() {
            return Err(format!(
                "{} trips but {} refuel choices",
                trips.len(),
                refuel_points.len()
            ));
        }
        if vehicle.idx() >= network.number_of_vehicles() {
            return Err(format!("{} does not exist", vehicle));
        }
        if let Some(trip) = trips.iter().find(|t| t.idx() >= network.number_of_trips()) {
            return Err(format!("{} does not exist", trip));
        }

        let mut duty = Duty::new(vehicle, trips, refuel_points, 0.0, 0.0);
        let mut cost = 0.0;
        for (s, t, refuel_point) in duty.legs(network) {
            let arc = network
                .arcs()
                .find(s, t)
                .ok_or_else(|| format!("no feasible arc from {} to {}", s, t))?;
            if let Some(r) = refuel_point {
                if !arc.refuel_points().contains(&r) {
                    return Err(format!("{} is not usable between {} and {}", r, s, t));
                }
            }
            cost += network.leg(s, t, refuel_point).cost;
        }
        duty.cost = cost;
        Ok(duty)
    }
}

// methods
impl Duty {
    pub fn vehicle(&self) -> VehicleIdx {
        self.vehicle
    }

    pub fn trips(&self) -> &[TripIdx] {
        &self.trips
    }

    pub fn refuel_points(&self) -> &[Option<RefuelPointIdx>] {
        &self.refuel_points
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn reduced_cost(&self) -> Cost {
        self.reduced_cost
    }

    /// number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// all legs (source, target, refuel point) starting at the vehicle-start.
    pub fn legs<'a>(
        &'a self,
        network: &'a Network,
    ) -> impl Iterator<Item = (VertexIdx, VertexIdx, Option<RefuelPointIdx>)> + 'a {
        std::iter::once(network.vertex_of_vehicle(self.vehicle))
            .chain(self.trips.iter().map(|&t| network.vertex_of_trip(t)))
            .tuple_windows()
            .zip(self.refuel_points.iter().copied())
            .map(|((s, t), r)| (s, t, r))
    }

    /// the sparse column of the duty: one entry per visited trip plus the aggregated cost,
    /// usage and length entries.
    pub fn coefficients(&self) -> Vec<(Coefficient, f64)> {
        self.trips
            .iter()
            .map(|&t| (Coefficient::Trip(t), 1.0))
            .chain([
                (Coefficient::Cost, self.cost),
                (Coefficient::Used, if self.is_empty() { 0.0 } else { 1.0 }),
                (Coefficient::Length, self.trips.len() as f64),
            ])
            .collect()
    }
}

impl fmt::Display for Duty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:", self.vehicle)?;
        for (trip, refuel_point) in self.trips.iter().zip(self.refuel_points.iter()) {
            match refuel_point {
                Some(r) => write!(f, " -{}-> {}", r, trip)?,
                None => write!(f, " -> {}", trip)?,
            }
        }
        write!(
            f,
            " (cost: {:.2}, reduced cost: {:.2})",
            self.cost, self.reduced_cost
        )
    }
}
