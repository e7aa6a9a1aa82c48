use serde::Deserialize;

use crate::base_types::{Cost, Fuel, Meter, Seconds};

/// per-unit cost and fuel rates of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    pub cost_per_vehicle: Cost,
    pub cost_per_meter: Cost,
    pub fuel_per_meter: Fuel,
    pub refuel_per_second: Fuel,
}

impl Parameters {
    pub fn fuel_for(&self, distance: Meter) -> Fuel {
        self.fuel_per_meter * distance
    }

    pub fn cost_for(&self, distance: Meter) -> Cost {
        self.cost_per_meter * distance
    }

    pub fn refill_within(&self, idle_time: Seconds) -> Fuel {
        self.refuel_per_second * idle_time
    }
}
