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


use std::iter;

use tracing::debug;

use model::base_types::{
    RefuelPointIdx, TripCount, TripIdx, VehicleIdx, VertexIdx, VertexKind, TANK_CAPACITY,
};
use model::network::{Leg, Network};
use solution::Duty;

use crate::blocks::Block;
use crate::config::PricingConfig;
use crate::duals::{DualPrices, VehicleBounds};
use crate::extraction::extract_duty;
use crate::frontier::Frontier;
use crate::label::{Label, LabelArena, LabelIdx, RouteUsage};

/// the improving duties of the vehicles of one block.
pub(crate) struct BlockOutcome {
    pub(crate) duties: Vec<(VehicleIdx, Vec<Duty>)>,
    pub(crate) labels_created: usize,
}

enum Extension {
    Label(Label),
    /// this label cannot be extended, labels with more fuel might.
    Pruned,
    /// neither this label nor any label with more fuel can be extended.
    Infeasible,
}

/// Backward label-setting over the vertices of the network for the vehicles of one block.
///
/// Vertices are processed in decreasing index order. As arcs only lead from lower to higher
/// indices, the frontier of a vertex is final once the sweep uses it as destination.
/// Every sweep owns its arena and frontiers; nothing survives between two sweeps.
pub(crate) struct BlockSweep<'a, F: Frontier> {
    network: &'a Network,
    config: &'a PricingConfig,
    duals: &'a DualPrices,
    bounds: &'a [VehicleBounds],
    block: &'a Block,
    arena: LabelArena,
    frontiers: Vec<F>,
}

// static functions
impl<'a, F: Frontier> BlockSweep<'a, F> {
    pub(crate) fn new(
        network: &'a Network,
        config: &'a PricingConfig,
        duals: &'a DualPrices,
        bounds: &'a [VehicleBounds],
        block: &'a Block,
        empty_frontier: F,
    ) -> BlockSweep<'a, F> {
        BlockSweep {
            network,
            config,
            duals,
            bounds,
            block,
            arena: LabelArena::new(),
            frontiers: vec![empty_frontier; network.number_of_path_vertices()],
        }
    }
}

// methods
impl<'a, F: Frontier> BlockSweep<'a, F> {
    pub(crate) fn run(mut self) -> BlockOutcome {
        let includes = self.includes();
        self.sweep(&includes);

        debug!("block {}: {} labels created", self.block, self.arena.len());

        let duties = self
            .block
            .vehicles()
            .iter()
            .map(|&vehicle| (vehicle, self.improving_duties(vehicle, includes.is_empty())))
            .collect();

        BlockOutcome {
            duties,
            labels_created: self.arena.len(),
        }
    }

    /// the included trips of the block as vertices in increasing order.
    fn includes(&self) -> Vec<VertexIdx> {
        self.bounds[self.block.representative().idx()]
            .included_trips()
            .map(|t| self.network.vertex_of_trip(t))
            .collect()
    }

    /// fills the frontiers of all vertices, the vehicle-starts last.
    fn sweep(&mut self, includes: &[VertexIdx]) {
        let network = self.network;
        let bounds = self.bounds;
        let shared_bounds = &bounds[self.block.representative().idx()];
        let max_trips = self.max_trips();

        self.seed(includes, shared_bounds);

        for t in network.arcs().destinations_rev() {
            let trip = match network.kind(t) {
                VertexKind::Trip(trip) => trip,
                _ => continue,
            };
            if shared_bounds.is_excluded(trip) || self.frontiers[t.idx()].is_empty() {
                continue;
            }

            // a duty cannot skip the last included trip before t
            let resume = includes
                .iter()
                .rev()
                .find(|&&u| u < t)
                .copied()
                .unwrap_or(VertexIdx(0));

            let labels_at_t = self.frontiers[t.idx()].labels(&self.arena);

            for arc in network.arcs().predecessors_from(t, resume) {
                let s = arc.source();
                let allowed = match network.kind(s) {
                    VertexKind::VehicleStart(vehicle) => self.block.contains(vehicle),
                    VertexKind::Trip(j) => !shared_bounds.is_excluded(j),
                    VertexKind::RefuelPoint(_) => false,
                };
                if !allowed {
                    continue;
                }

                let detours = arc.refuel_points().iter().copied().map(Some);
                for refuel_point in iter::once(None).chain(detours) {
                    let leg = network.leg(s, t, refuel_point);
                    // labels_at_t is sorted by fuel
                    for &label in labels_at_t.iter() {
                        match self.extend(label, s, trip, &leg, refuel_point, max_trips) {
                            Extension::Label(new_label) => {
                                self.frontiers[s.idx()].insert(new_label, &mut self.arena);
                            }
                            Extension::Pruned => continue,
                            Extension::Infeasible => break,
                        }
                    }
                }
            }
        }
    }

    /// every vertex starts with the trivial label, but only trips at or after the last included
    /// trip can end a duty. Vehicle-starts are seeded (empty duty) only without included trips.
    fn seed(&mut self, includes: &[VertexIdx], shared_bounds: &VehicleBounds) {
        let network = self.network;
        let last_include = includes.last().copied();

        for v in 0..network.number_of_path_vertices() {
            let vertex = VertexIdx::from_usize(v);
            self.frontiers[v].reset();
            let seeded = match network.kind(vertex) {
                VertexKind::VehicleStart(vehicle) => {
                    last_include.is_none() && self.block.contains(vehicle)
                }
                VertexKind::Trip(trip) => {
                    !shared_bounds.is_excluded(trip) && last_include.map_or(true, |u| vertex >= u)
                }
                VertexKind::RefuelPoint(_) => false,
            };
            if !seeded {
                continue;
            }
            if let Some(usage) = self.usage_at(vertex, &RouteUsage::new()) {
                self.frontiers[v].insert(Label::seed(vertex, usage), &mut self.arena);
            }
        }
    }

    /// the label at s obtained by going from s to t (over the refuel point of the leg) and
    /// continuing like the given label at t.
    fn extend(
        &self,
        label_idx: LabelIdx,
        s: VertexIdx,
        t: TripIdx,
        leg: &Leg,
        refuel_point: Option<RefuelPointIdx>,
        max_trips: Option<TripCount>,
    ) -> Extension {
        let epsilon = self.config.epsilon;
        let label = &self.arena[label_idx];

        let needed_after_refuel = leg.fuel_needed_after_refuel(label.fuel());
        if needed_after_refuel > TANK_CAPACITY + epsilon {
            return Extension::Infeasible;
        }
        let fuel = self.frontiers[s.idx()].quantize(leg.fuel_needed_at_source(needed_after_refuel));
        if fuel > TANK_CAPACITY + epsilon {
            return Extension::Infeasible;
        }

        let shared_duals = self.duals.vehicle(self.block.representative());
        let length = label.length() + 1;
        let mut reduced_cost =
            label.reduced_cost() + shared_duals.cost_factor * leg.cost + shared_duals.trip(t);

        let usage = match self.network.kind(s) {
            VertexKind::VehicleStart(vehicle) => {
                if fuel > self.network.vehicle(vehicle).initial_fuel() + epsilon {
                    return Extension::Infeasible;
                }
                if !self.bounds[vehicle.idx()].admits_length(length) {
                    return Extension::Pruned;
                }
                reduced_cost += self.duals.vehicle(vehicle).used;
                RouteUsage::new()
            }
            _ => {
                // s itself is one more trip
                if max_trips.map_or(false, |max| length + 1 > max) {
                    return Extension::Pruned;
                }
                match self.usage_at(s, label.usage()) {
                    Some(usage) => usage,
                    None => return Extension::Pruned,
                }
            }
        };

        Extension::Label(Label {
            vertex: s,
            fuel,
            reduced_cost,
            cost: label.cost() + leg.cost,
            length,
            predecessor: Some(label_idx),
            refuel_point,
            usage,
        })
    }

    /// The route usage of a label at the given trip: commits the customer of the trip (None if
    /// one of its alternatives is already used) and drops commitments of customers that have no
    /// trip finishing before the trip starts.
    fn usage_at(&self, vertex: VertexIdx, usage: &RouteUsage) -> Option<RouteUsage> {
        let network = self.network;
        if !self.config.forbid_alternatives {
            return Some(RouteUsage::new());
        }
        let (customer, route) = match (network.customer_of(vertex), network.route_of(vertex)) {
            (Some(customer), Some(route)) => (customer, route),
            _ => return Some(RouteUsage::new()),
        };
        let mut usage = if network.is_tracked(customer) {
            usage.commit(customer, route)?
        } else {
            usage.clone()
        };
        if self.config.drop_unused_routes {
            let start_time = network.start_time(vertex);
            usage = usage.retain(|c| network.earliest_finish(c) <= start_time);
        }
        Some(usage)
    }

    /// the largest maximal trip count within the block (None if some vehicle is unbounded).
    fn max_trips(&self) -> Option<TripCount> {
        self.block
            .vehicles()
            .iter()
            .map(|v| self.bounds[v.idx()].max_trips())
            .try_fold(0, |max, m| m.map(|m| max.max(m)))
    }

    /// the empty duty (if it may be used) and every non-dominated label at the vehicle-start
    /// whose reduced cost beats the convexity dual, best first.
    fn improving_duties(&self, vehicle: VehicleIdx, may_be_empty: bool) -> Vec<Duty> {
        let epsilon = self.config.epsilon;
        let convexity = self.duals.vehicle(vehicle).convexity;
        let mut duties = Vec::new();

        if may_be_empty && self.bounds[vehicle.idx()].admits_length(0) && -convexity < -epsilon
        {
            duties.push(Duty::empty(vehicle, -convexity));
        }

        let vertex = self.network.vertex_of_vehicle(vehicle);
        for idx in self.frontiers[vertex.idx()].labels(&self.arena) {
            let label = &self.arena[idx];
            if label.length() >= 1 && label.reduced_cost() - convexity < -epsilon {
                duties.push(extract_duty(
                    self.network,
                    &self.arena,
                    idx,
                    vehicle,
                    convexity,
                    self.config,
                ));
            }
        }

        duties.sort_by(|a, b| a.reduced_cost().total_cmp(&b.reduced_cost()));
        duties
    }
}
