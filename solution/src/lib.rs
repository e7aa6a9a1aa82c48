pub mod duty;
pub mod verification;

pub use duty::{Coefficient, Duty};
pub use verification::verify_duty;
