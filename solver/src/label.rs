#[cfg(test)]
mod tests;

use std::fmt;
use std::ops::Index;

use im::OrdMap;

use model::base_types::{
    Cost, CustomerIdx, Fuel, RefuelPointIdx, RouteIdx, TripCount, VertexIdx,
};

/// stable position of a label in the LabelArena of one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelIdx(u32);

impl LabelIdx {
    pub fn idx(&self) -> usize {
        self.0 as usize
    }
}

/// Route commitments of the exclusivity-tracked customers served by a partial duty.
/// A customer is served on at most one of its routes, but possibly by several trips of it.
///
/// Persistent map, so extending a label shares the commitments with its origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteUsage {
    committed: OrdMap<CustomerIdx, RouteIdx>,
}

impl RouteUsage {
    pub fn new() -> RouteUsage {
        RouteUsage::default()
    }

    /// commits the customer to the route. Returns None if the customer is already committed to
    /// another route.
    pub fn commit(&self, customer: CustomerIdx, route: RouteIdx) -> Option<RouteUsage> {
        match self.committed.get(&customer) {
            Some(&committed) if committed == route => Some(self.clone()),
            Some(_) => None,
            None => Some(RouteUsage {
                committed: self.committed.update(customer, route),
            }),
        }
    }

    pub fn committed_route(&self, customer: CustomerIdx) -> Option<RouteIdx> {
        self.committed.get(&customer).copied()
    }

    /// keeps only the commitments of customers for which keep holds.
    pub fn retain(&self, keep: impl Fn(CustomerIdx) -> bool) -> RouteUsage {
        let dropped: Vec<CustomerIdx> = self
            .committed
            .keys()
            .copied()
            .filter(|&c| !keep(c))
            .collect();
        if dropped.is_empty() {
            return self.clone();
        }
        RouteUsage {
            committed: dropped
                .iter()
                .fold(self.committed.clone(), |map, c| map.without(c)),
        }
    }

    pub fn customers(&self) -> impl Iterator<Item = CustomerIdx> + '_ {
        self.committed.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

/// The state of a partial duty that starts at vertex and ends at the last trip of the duty.
///
/// fuel is the minimal fuel level needed when leaving vertex, reduced_cost and cost cover all
/// legs after vertex and length counts the trips after vertex.
/// usage includes the commitment of vertex itself.
#[derive(Debug, Clone)]
pub struct Label {
    pub(crate) vertex: VertexIdx,
    pub(crate) fuel: Fuel,
    pub(crate) reduced_cost: Cost,
    pub(crate) cost: Cost,
    pub(crate) length: TripCount,
    pub(crate) predecessor: Option<LabelIdx>, // the label this one was extended from
    pub(crate) refuel_point: Option<RefuelPointIdx>, // on the leg to the predecessor's vertex
    pub(crate) usage: RouteUsage,
}

// static functions
impl Label {
    /// the trivial label: the duty ends at vertex.
    pub fn seed(vertex: VertexIdx, usage: RouteUsage) -> Label {
        Label {
            vertex,
            fuel: 0.0,
            reduced_cost: 0.0,
            cost: 0.0,
            length: 0,
            predecessor: None,
            refuel_point: None,
            usage,
        }
    }
}

// methods
impl Label {
    pub fn vertex(&self) -> VertexIdx {
        self.vertex
    }

    pub fn fuel(&self) -> Fuel {
        self.fuel
    }

    pub fn reduced_cost(&self) -> Cost {
        self.reduced_cost
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn length(&self) -> TripCount {
        self.length
    }

    pub fn predecessor(&self) -> Option<LabelIdx> {
        self.predecessor
    }

    pub fn refuel_point(&self) -> Option<RefuelPointIdx> {
        self.refuel_point
    }

    pub fn usage(&self) -> &RouteUsage {
        &self.usage
    }

    /// true iff both labels are compared by dominance at all.
    pub fn is_comparable_to(&self, other: &Label) -> bool {
        self.length == other.length && self.usage == other.usage
    }

    /// true iff self is at least as good as other in reduced cost and fuel (up to epsilon).
    /// Only meaningful for comparable labels.
    pub fn dominates(&self, other: &Label, epsilon: f64) -> bool {
        self.reduced_cost <= other.reduced_cost + epsilon && self.fuel <= other.fuel + epsilon
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "label at {} (fuel: {:.4}, rc: {:.4}, cost: {:.2}, length: {}, {} commitments)",
            self.vertex,
            self.fuel,
            self.reduced_cost,
            self.cost,
            self.length,
            self.usage.len()
        )
    }
}

/// All labels created during one sweep. Labels are never removed, so a LabelIdx stays valid
/// even after its label is dropped from a frontier.
#[derive(Debug, Default)]
pub struct LabelArena {
    labels: Vec<Label>,
}

impl LabelArena {
    pub fn new() -> LabelArena {
        LabelArena::default()
    }

    pub fn push(&mut self, label: Label) -> LabelIdx {
        self.labels.push(label);
        LabelIdx((self.labels.len() - 1) as u32)
    }

    pub fn get(&self, idx: LabelIdx) -> &Label {
        &self.labels[idx.idx()]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// the predecessor chain starting with idx.
    pub fn chain(&self, idx: LabelIdx) -> impl Iterator<Item = &Label> + '_ {
        std::iter::successors(Some(self.get(idx)), move |label| {
            label.predecessor.map(|p| self.get(p))
        })
    }
}

impl Index<LabelIdx> for LabelArena {
    type Output = Label;

    fn index(&self, idx: LabelIdx) -> &Label {
        self.get(idx)
    }
}
