use serde::Deserialize;

use crate::error::PricingError;

/// which dominance frontier keeps the labels of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum FrontierKind {
    /// continuous fuel levels.
    Exact,
    /// fuel levels are rounded up to multiples of 1/levels.
    Discrete { levels: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingConfig {
    /// shared tolerance of all fuel, reduced cost and dual comparisons.
    pub epsilon: f64,
    pub frontier: FrontierKind,
    /// enforce that a customer is served on at most one of its routes.
    pub forbid_alternatives: bool,
    /// forget route commitments of customers that cannot appear earlier in the duty.
    pub drop_unused_routes: bool,
    /// solve the blocks on the rayon thread pool.
    pub parallel: bool,
}

impl Default for PricingConfig {
    fn default() -> PricingConfig {
        PricingConfig {
            epsilon: 1e-6,
            frontier: FrontierKind::Exact,
            forbid_alternatives: true,
            drop_unused_routes: true,
            parallel: true,
        }
    }
}

impl PricingConfig {
    /// the default config with the given epsilon and frontier.
    pub fn new(epsilon: f64, frontier: FrontierKind) -> Result<PricingConfig, PricingError> {
        PricingConfig {
            epsilon,
            frontier,
            ..PricingConfig::default()
        }
        .validated()
    }

    /// missing fields take their default.
    pub fn from_json(input_data: serde_json::Value) -> Result<PricingConfig, PricingError> {
        let config: PricingConfig = serde_json::from_value(input_data)?;
        config.validated()
    }

    fn validated(self) -> Result<PricingConfig, PricingError> {
        if let FrontierKind::Discrete { levels: 0 } = self.frontier {
            return Err(PricingError::InvalidConfig(
                "a discrete frontier needs at least one level".to_string(),
            ));
        }
        // labels and verification sum costs in opposite order, so zero leaves no room
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(PricingError::InvalidConfig(format!(
                "epsilon must be positive and finite, got {}",
                self.epsilon
            )));
        }
        Ok(self)
    }
}
