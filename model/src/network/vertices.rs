use std::fmt;

use crate::base_types::{Cost, CustomerIdx, Fuel, RouteIdx, Seconds};

/// the origin of a vehicle. It is available from ready_time on and leaves with initial_fuel.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: String,
    initial_fuel: Fuel,
    ready_time: Seconds,
}

/// a schedulable occurrence of a job. Trips of the same customer are alternatives of each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    id: String,
    route: RouteIdx,
    start_time: Seconds,
    finish_time: Seconds,
    fuel: Fuel, // fuel burned while serving the trip
    cost: Cost,
}

/// can only be visited as detour on an arc between two vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct RefuelPoint {
    id: String,
}

/// a logical job. It is realized by the trips of exactly one of its routes.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: String,
}

/// a line or timetable grouping of trips. Each route belongs to one customer.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    id: String,
    customer: CustomerIdx,
}

/////////////////////////////////////////////////////////////////////
////////////////////////////// Vehicle //////////////////////////////
/////////////////////////////////////////////////////////////////////

impl Vehicle {
    pub fn new(id: String, initial_fuel: Fuel, ready_time: Seconds) -> Vehicle {
        Vehicle {
            id,
            initial_fuel,
            ready_time,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn initial_fuel(&self) -> Fuel {
        self.initial_fuel
    }

    pub fn ready_time(&self) -> Seconds {
        self.ready_time
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "vehicle {} (ready: {}s, fuel: {:.2})",
            self.id, self.ready_time, self.initial_fuel
        )
    }
}

/////////////////////////////////////////////////////////////////////
/////////////////////////////// Trip ////////////////////////////////
/////////////////////////////////////////////////////////////////////

impl Trip {
    pub fn new(
        id: String,
        route: RouteIdx,
        start_time: Seconds,
        finish_time: Seconds,
        fuel: Fuel,
        cost: Cost,
    ) -> Trip {
        Trip {
            id,
            route,
            start_time,
            finish_time,
            fuel,
            cost,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn route(&self) -> RouteIdx {
        self.route
    }

    pub fn start_time(&self) -> Seconds {
        self.start_time
    }

    pub fn finish_time(&self) -> Seconds {
        self.finish_time
    }

    pub fn duration(&self) -> Seconds {
        self.finish_time - self.start_time
    }

    pub fn fuel(&self) -> Fuel {
        self.fuel
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "trip {} ({}; {}s-{}s)",
            self.id, self.route, self.start_time, self.finish_time
        )
    }
}

/////////////////////////////////////////////////////////////////////
//////////////////// RefuelPoint, Customer, Route ///////////////////
/////////////////////////////////////////////////////////////////////

impl RefuelPoint {
    pub fn new(id: String) -> RefuelPoint {
        RefuelPoint { id }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Customer {
    pub fn new(id: String) -> Customer {
        Customer { id }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Route {
    pub fn new(id: String, customer: CustomerIdx) -> Route {
        Route { id, customer }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer(&self) -> CustomerIdx {
        self.customer
    }
}
