use thiserror::Error;

use model::base_types::{TripCount, VehicleIdx};

/// Inputs of a pricing call that do not fit the network. Detected before any sweep starts.
/// Finding no improving duty is not an error.
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("{what} has {found} entries, expected {expected}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        found: usize,
    },
    #[error("{vehicle} needs at least {min} but at most {max} trips")]
    ContradictingTripCounts {
        vehicle: VehicleIdx,
        min: TripCount,
        max: TripCount,
    },
    #[error("invalid pricing config: {0}")]
    InvalidConfig(String),
    #[error("invalid json input: {0}")]
    Json(#[from] serde_json::Error),
}
