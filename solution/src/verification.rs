
use std::collections::HashMap;

use model::base_types::{CustomerIdx, RouteIdx, TANK_CAPACITY};
use model::network::Network;

use crate::duty::Duty;

/// the smallest tolerance of any comparison, to absorb rounding of sums.
pub const MIN_TOLERANCE: f64 = 1e-9;

/// Simulates the duty forward in time and returns a description of the first violation:
/// - every leg is a feasible arc and its refuel point is a candidate of the arc,
/// - the detour over a refuel point fits into the time window,
/// - the fuel level stays within [0, 1] after every leg and every refuel detour, starting
///   with the initial fuel of the vehicle,
/// - the cost matches the cost of its legs,
/// - if check_alternatives is set, no two routes of the same tracked customer are used.
///
/// All comparisons allow a slack of epsilon, but at least MIN_TOLERANCE.
pub fn verify_duty(
    network: &Network,
    duty: &Duty,
    check_alternatives: bool,
    epsilon: f64,
) -> Result<(), String> {
    let epsilon = epsilon.max(MIN_TOLERANCE);
    if duty.trips().len() != duty.refuel_points().len() {
        return Err(format!("{}: trips and refuel points do not match", duty));
    }
    if duty.vehicle().idx() >= network.number_of_vehicles() {
        return Err(format!("{}: unknown vehicle", duty));
    }

    let mut fuel = network.vehicle(duty.vehicle()).initial_fuel();
    let mut cost = 0.0;
    let mut committed_routes: HashMap<CustomerIdx, RouteIdx> = HashMap::new();

    for (s, t, refuel_point) in duty.legs(network) {
        let arc = network
            .arcs()
            .find(s, t)
            .ok_or_else(|| format!("{}: no feasible arc from {} to {}", duty, s, t))?;
        if !network.is_time_feasible(s, t) {
            return Err(format!("{}: {} cannot be reached from {} in time", duty, t, s));
        }

        let leg = network.leg(s, t, refuel_point);
        if let Some(r) = refuel_point {
            if !arc.refuel_points().contains(&r) {
                return Err(format!("{}: {} is not usable between {} and {}", duty, r, s, t));
            }
            if leg.idle_time < -epsilon {
                return Err(format!(
                    "{}: detour over {} between {} and {} is too long",
                    duty, r, s, t
                ));
            }
            fuel -= leg.fuel_before_refuel;
            if fuel < -epsilon {
                return Err(format!("{}: tank empty before reaching {}", duty, r));
            }
            fuel = (fuel + leg.refill).min(TANK_CAPACITY);
        }

        fuel -= leg.fuel_after_refuel + leg.vertex_fuel;
        if fuel < -epsilon || fuel > TANK_CAPACITY + epsilon {
            return Err(format!("{}: fuel level {} after serving {}", duty, fuel, t));
        }
        cost += leg.cost;

        if check_alternatives {
            if let (Some(customer), Some(route)) = (network.customer_of(t), network.route_of(t)) {
                if network.is_tracked(customer) {
                    let committed = *committed_routes.entry(customer).or_insert(route);
                    if committed != route {
                        return Err(format!(
                            "{}: {} is served on {} and {}",
                            duty, customer, committed, route
                        ));
                    }
                }
            }
        }
    }

    if (cost - duty.cost()).abs() > epsilon * cost.abs().max(1.0) {
        return Err(format!("{}: cost should be {}", duty, cost));
    }
    Ok(())
}
