pub mod blocks;
pub mod config;
pub mod duals;
pub mod error;
mod extraction;
pub mod frontier;
pub mod label;
mod labeling;
pub mod pricing;

pub use config::{FrontierKind, PricingConfig};
pub use duals::{DualPrices, VehicleBounds, VehicleDuals};
pub use error::PricingError;
pub use pricing::{PricingEngine, PricingResult, PricingStatus, VehiclePricing};
