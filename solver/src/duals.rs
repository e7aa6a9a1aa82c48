use model::base_types::{TripCount, TripIdx, VehicleIdx};

/// Dual prices of the master problem rows a duty of one vehicle has coefficients in.
///
/// The reduced cost of a duty is
/// `cost_factor * cost + sum of trips[j] over visited trips + used` (used only if non-empty)
/// and the duty improves the master problem iff `reduced cost - convexity < -epsilon`.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleDuals {
    pub cost_factor: f64,
    pub trips: Vec<f64>,
    pub used: f64,
    pub convexity: f64,
}

impl VehicleDuals {
    /// all trip duals zero, the cost counted once.
    pub fn zero(number_of_trips: usize) -> VehicleDuals {
        VehicleDuals {
            cost_factor: 1.0,
            trips: vec![0.0; number_of_trips],
            used: 0.0,
            convexity: 0.0,
        }
    }

    pub fn trip(&self, trip: TripIdx) -> f64 {
        self.trips[trip.idx()]
    }
}

/// the dual prices of one pricing call, one entry per vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct DualPrices {
    vehicles: Vec<VehicleDuals>,
}

impl DualPrices {
    pub fn new(vehicles: Vec<VehicleDuals>) -> DualPrices {
        DualPrices { vehicles }
    }

    pub fn number_of_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    pub fn vehicle(&self, vehicle: VehicleIdx) -> &VehicleDuals {
        &self.vehicles[vehicle.idx()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleDuals> + '_ {
        self.vehicles.iter()
    }
}

/// Branching decisions for the duties of one vehicle: trips every duty must contain, trips no
/// duty may contain and bounds on the number of trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleBounds {
    include: Vec<bool>,
    exclude: Vec<bool>,
    min_trips: Option<TripCount>,
    max_trips: Option<TripCount>,
}

// static functions
impl VehicleBounds {
    pub fn unrestricted(number_of_trips: usize) -> VehicleBounds {
        VehicleBounds {
            include: vec![false; number_of_trips],
            exclude: vec![false; number_of_trips],
            min_trips: None,
            max_trips: None,
        }
    }

    pub fn new(
        include: Vec<bool>,
        exclude: Vec<bool>,
        min_trips: Option<TripCount>,
        max_trips: Option<TripCount>,
    ) -> VehicleBounds {
        VehicleBounds {
            include,
            exclude,
            min_trips,
            max_trips,
        }
    }
}

// methods
impl VehicleBounds {
    pub fn with_included(mut self, trip: TripIdx) -> VehicleBounds {
        self.include[trip.idx()] = true;
        self
    }

    pub fn with_excluded(mut self, trip: TripIdx) -> VehicleBounds {
        self.exclude[trip.idx()] = true;
        self
    }

    pub fn with_trip_count(
        mut self,
        min_trips: Option<TripCount>,
        max_trips: Option<TripCount>,
    ) -> VehicleBounds {
        self.min_trips = min_trips;
        self.max_trips = max_trips;
        self
    }

    pub fn include_mask(&self) -> &[bool] {
        &self.include
    }

    pub fn exclude_mask(&self) -> &[bool] {
        &self.exclude
    }

    pub fn is_included(&self, trip: TripIdx) -> bool {
        self.include[trip.idx()]
    }

    pub fn is_excluded(&self, trip: TripIdx) -> bool {
        self.exclude[trip.idx()]
    }

    /// the included trips in increasing order.
    pub fn included_trips(&self) -> impl Iterator<Item = TripIdx> + '_ {
        self.include
            .iter()
            .enumerate()
            .filter(|(_, &included)| included)
            .map(|(j, _)| TripIdx(j as u32))
    }

    pub fn min_trips(&self) -> Option<TripCount> {
        self.min_trips
    }

    pub fn max_trips(&self) -> Option<TripCount> {
        self.max_trips
    }

    /// true iff a duty with this many trips respects the trip count bounds.
    pub fn admits_length(&self, length: TripCount) -> bool {
        self.min_trips.map_or(true, |min| length >= min)
            && self.max_trips.map_or(true, |max| length <= max)
    }
}
