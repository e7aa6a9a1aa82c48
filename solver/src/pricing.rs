#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::Arc;
use std::time as stdtime;

use rayon::prelude::*;
use tracing::info;

use model::base_types::{Cost, VehicleIdx};
use model::network::Network;
use solution::Duty;

use crate::blocks::{fuse_vehicles, Block};
use crate::config::{FrontierKind, PricingConfig};
use crate::duals::{DualPrices, VehicleBounds};
use crate::error::PricingError;
use crate::frontier::{DiscreteFrontier, ExactFrontier};
use crate::labeling::{BlockOutcome, BlockSweep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingStatus {
    /// at least one duty with negative reduced cost was found.
    Improving,
    /// the vehicle has no duty with negative reduced cost (up to epsilon).
    NoImprovingDuty,
}

impl fmt::Display for PricingStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PricingStatus::Improving => write!(f, "improving"),
            PricingStatus::NoImprovingDuty => write!(f, "no improving duty"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct VehiclePricing {
    status: PricingStatus,
    duties: Vec<Duty>,
}

impl VehiclePricing {
    fn new(duties: Vec<Duty>) -> VehiclePricing {
        let status = if duties.is_empty() {
            PricingStatus::NoImprovingDuty
        } else {
            PricingStatus::Improving
        };
        VehiclePricing { status, duties }
    }

    pub fn status(&self) -> PricingStatus {
        self.status
    }

    /// the improving duties in increasing order of reduced cost.
    pub fn duties(&self) -> &[Duty] {
        &self.duties
    }

    pub fn best(&self) -> Option<&Duty> {
        self.duties.first()
    }
}

/// The outcome of one pricing call, one entry per vehicle.
#[derive(Debug, Clone)]
pub struct PricingResult {
    vehicles: Vec<VehiclePricing>,
    labels_created: usize,
}

impl PricingResult {
    pub fn vehicle(&self, vehicle: VehicleIdx) -> &VehiclePricing {
        &self.vehicles[vehicle.idx()]
    }

    pub fn vehicles(&self) -> impl Iterator<Item = (VehicleIdx, &VehiclePricing)> + '_ {
        self.vehicles
            .iter()
            .enumerate()
            .map(|(v, pricing)| (VehicleIdx(v as u32), pricing))
    }

    /// all improving duties of all vehicles.
    pub fn duties(&self) -> impl Iterator<Item = &Duty> + '_ {
        self.vehicles.iter().flat_map(|pricing| pricing.duties.iter())
    }

    pub fn number_of_duties(&self) -> usize {
        self.vehicles.iter().map(|pricing| pricing.duties.len()).sum()
    }

    pub fn best_reduced_cost(&self) -> Option<Cost> {
        self.duties()
            .map(|duty| duty.reduced_cost())
            .min_by(|a, b| a.total_cmp(b))
    }

    /// true iff no vehicle has an improving duty, i.e., the master problem is optimal.
    pub fn is_optimal(&self) -> bool {
        self.vehicles
            .iter()
            .all(|pricing| pricing.status == PricingStatus::NoImprovingDuty)
    }

    pub fn labels_created(&self) -> usize {
        self.labels_created
    }
}

/// Computes duties of negative reduced cost for every vehicle.
///
/// The engine only holds the immutable network and the config, so it can be shared between
/// threads and called repeatedly with new duals. Calls are independent of each other.
pub struct PricingEngine {
    network: Arc<Network>,
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(network: Arc<Network>, config: PricingConfig) -> PricingEngine {
        PricingEngine { network, config }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn price(
        &self,
        duals: &DualPrices,
        bounds: &[VehicleBounds],
    ) -> Result<PricingResult, PricingError> {
        self.validate(duals, bounds)?;

        let blocks = fuse_vehicles(duals, bounds, self.config.epsilon);
        info!(
            "pricing {} vehicles in {} blocks",
            duals.number_of_vehicles(),
            blocks.len()
        );

        let outcomes: Vec<BlockOutcome> = if self.config.parallel && blocks.len() > 1 {
            blocks
                .par_iter()
                .map(|block| self.solve_block(block, duals, bounds))
                .collect()
        } else {
            blocks
                .iter()
                .map(|block| self.solve_block(block, duals, bounds))
                .collect()
        };

        let mut vehicles: Vec<Option<VehiclePricing>> = vec![None; duals.number_of_vehicles()];
        let mut labels_created = 0;
        for outcome in outcomes {
            labels_created += outcome.labels_created;
            for (vehicle, duties) in outcome.duties {
                vehicles[vehicle.idx()] = Some(VehiclePricing::new(duties));
            }
        }

        Ok(PricingResult {
            // every vehicle belongs to exactly one block
            vehicles: vehicles
                .into_iter()
                .map(|pricing| pricing.unwrap_or_else(|| VehiclePricing::new(Vec::new())))
                .collect(),
            labels_created,
        })
    }

    fn solve_block(
        &self,
        block: &Block,
        duals: &DualPrices,
        bounds: &[VehicleBounds],
    ) -> BlockOutcome {
        let start_time = stdtime::Instant::now();
        let network = self.network.as_ref();
        let epsilon = self.config.epsilon;

        let outcome = match self.config.frontier {
            FrontierKind::Exact => BlockSweep::new(
                network,
                &self.config,
                duals,
                bounds,
                block,
                ExactFrontier::new(epsilon),
            )
            .run(),
            FrontierKind::Discrete { levels } => BlockSweep::new(
                network,
                &self.config,
                duals,
                bounds,
                block,
                DiscreteFrontier::new(levels, epsilon),
            )
            .run(),
        };

        for (vehicle, duties) in outcome.duties.iter() {
            let status = if duties.is_empty() {
                PricingStatus::NoImprovingDuty
            } else {
                PricingStatus::Improving
            };
            info!(
                "{} (block {}): {} duties, best reduced cost: {}, status: {} (elapsed time: {:0.2}sec)",
                vehicle,
                block,
                duties.len(),
                duties
                    .first()
                    .map_or("-".to_string(), |d| format!("{:.4}", d.reduced_cost())),
                status,
                start_time.elapsed().as_secs_f32()
            );
        }

        outcome
    }

    fn validate(&self, duals: &DualPrices, bounds: &[VehicleBounds]) -> Result<(), PricingError> {
        let number_of_vehicles = self.network.number_of_vehicles();
        let number_of_trips = self.network.number_of_trips();

        check_dimension("dual prices", number_of_vehicles, duals.number_of_vehicles())?;
        check_dimension("vehicle bounds", number_of_vehicles, bounds.len())?;

        for (v, (vehicle_duals, vehicle_bounds)) in duals.iter().zip(bounds.iter()).enumerate() {
            let vehicle = VehicleIdx(v as u32);
            check_dimension(
                &format!("trip duals of {}", vehicle),
                number_of_trips,
                vehicle_duals.trips.len(),
            )?;
            check_dimension(
                &format!("include mask of {}", vehicle),
                number_of_trips,
                vehicle_bounds.include_mask().len(),
            )?;
            check_dimension(
                &format!("exclude mask of {}", vehicle),
                number_of_trips,
                vehicle_bounds.exclude_mask().len(),
            )?;
            if let (Some(min), Some(max)) = (vehicle_bounds.min_trips(), vehicle_bounds.max_trips())
            {
                if min > max {
                    return Err(PricingError::ContradictingTripCounts { vehicle, min, max });
                }
            }
        }
        Ok(())
    }
}

fn check_dimension(what: &str, expected: usize, found: usize) -> Result<(), PricingError> {
    if expected == found {
        Ok(())
    } else {
        Err(PricingError::DimensionMismatch {
            what: what.to_string(),
            expected,
            found,
        })
    }
}
