pub mod base_types;
pub mod config;
pub mod dead_head_trips;
pub mod error;
pub mod json_serialisation;
pub mod network;
pub mod test_utilities;

pub use error::ModelError;
pub use network::Network;
