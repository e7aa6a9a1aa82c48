use model::base_types::{VehicleIdx, VertexKind};
use model::network::Network;
use solution::{verify_duty, Duty};

use crate::config::PricingConfig;
use crate::label::{LabelArena, LabelIdx};

/// Walks the predecessor chain of a label at the vehicle-start to the seed label and returns
/// the duty in the order the trips are served.
/// The reduced cost of the duty includes the convexity dual.
///
/// Panics if the chain does not have the length the label claims. In debug builds the duty is
/// also verified forward in time.
pub(crate) fn extract_duty(
    network: &Network,
    arena: &LabelArena,
    terminal: LabelIdx,
    vehicle: VehicleIdx,
    convexity: f64,
    config: &PricingConfig,
) -> Duty {
    let label = &arena[terminal];
    let mut trips = Vec::with_capacity(label.length() as usize);
    let mut refuel_points = Vec::with_capacity(label.length() as usize);

    let mut current = label;
    while let Some(predecessor) = current.predecessor() {
        refuel_points.push(current.refuel_point());
        current = &arena[predecessor];
        match network.kind(current.vertex()) {
            VertexKind::Trip(trip) => trips.push(trip),
            _ => panic!("label chain of {} passes {}", vehicle, current.vertex()),
        }
    }

    assert_eq!(
        trips.len(),
        label.length() as usize,
        "label chain of {} does not match its length",
        vehicle
    );

    let duty = Duty::new(
        vehicle,
        trips,
        refuel_points,
        label.cost(),
        label.reduced_cost() - convexity,
    );

    if cfg!(debug_assertions) {
        // every refuel detour may lose up to epsilon of fuel
        let slack = config.epsilon * (duty.len() + 1) as f64;
        if let Err(violation) = verify_duty(network, &duty, config.forbid_alternatives, slack) {
            panic!("extracted an infeasible duty: {}", violation);
        }
    }

    duty
}
