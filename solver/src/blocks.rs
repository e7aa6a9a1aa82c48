use std::fmt;

use itertools::Itertools;
use model::base_types::VehicleIdx;

use crate::duals::{DualPrices, VehicleBounds};

/// Vehicles whose labels can be shared: the same cost factor and trip duals (up to epsilon)
/// and identical include and exclude masks. Their used and convexity duals as well as their
/// trip count bounds may differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    vehicles: Vec<VehicleIdx>,
}

impl Block {
    /// the vehicles in increasing order.
    pub fn vehicles(&self) -> &[VehicleIdx] {
        &self.vehicles
    }

    /// the first vehicle; its duals and masks stand for the whole block.
    pub fn representative(&self) -> VehicleIdx {
        self.vehicles[0]
    }

    pub fn contains(&self, vehicle: VehicleIdx) -> bool {
        self.vehicles.binary_search(&vehicle).is_ok()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.vehicles.iter().join(", "))
    }
}

/// groups the vehicles into blocks. Each vehicle joins the first block it fits.
pub fn fuse_vehicles(duals: &DualPrices, bounds: &[VehicleBounds], epsilon: f64) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    for v in 0..duals.number_of_vehicles() {
        let vehicle = VehicleIdx(v as u32);
        match blocks
            .iter_mut()
            .find(|b| can_fuse(b.representative(), vehicle, duals, bounds, epsilon))
        {
            Some(block) => block.vehicles.push(vehicle),
            None => blocks.push(Block {
                vehicles: vec![vehicle],
            }),
        }
    }
    blocks
}

fn can_fuse(
    a: VehicleIdx,
    b: VehicleIdx,
    duals: &DualPrices,
    bounds: &[VehicleBounds],
    epsilon: f64,
) -> bool {
    let (duals_a, duals_b) = (duals.vehicle(a), duals.vehicle(b));
    let (bounds_a, bounds_b) = (&bounds[a.idx()], &bounds[b.idx()]);
    (duals_a.cost_factor - duals_b.cost_factor).abs() <= epsilon
        && duals_a
            .trips
            .iter()
            .zip(duals_b.trips.iter())
            .all(|(x, y)| (x - y).abs() <= epsilon)
        && bounds_a.include_mask() == bounds_b.include_mask()
        && bounds_a.exclude_mask() == bounds_b.exclude_mask()
}
