use thiserror::Error;

use crate::base_types::{Fuel, TripIdx};

/// Violations of the input contract. The network cannot be built from such data.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("{what} has {found} entries, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{what} index {index} is out of range (size {size})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        size: usize,
    },
    #[error("unknown {what} id '{id}'")]
    UnknownId { what: &'static str, id: String },
    #[error("duplicate {what} id '{id}'")]
    DuplicateId { what: &'static str, id: String },
    #[error("trips are not ordered by start time: {0} precedes its predecessor")]
    TripsNotSorted(TripIdx),
    #[error("{0} finishes before it starts")]
    NegativeDuration(TripIdx),
    #[error("invalid fuel value {value} for {what}")]
    InvalidFuel { what: String, value: Fuel },
    #[error("invalid json input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot read instance: {0}")]
    Io(#[from] std::io::Error),
}
