pub mod discrete;
pub mod exact;


use model::base_types::{Fuel, TripCount};

use crate::label::{Label, LabelArena, LabelIdx, RouteUsage};

pub use discrete::DiscreteFrontier;
pub use exact::ExactFrontier;

/// The non-dominated labels of one vertex.
///
/// Label a dominates label b iff they have the same length and route usage and
/// `a.reduced_cost <= b.reduced_cost + epsilon` and `a.fuel <= b.fuel + epsilon`.
/// No retained label dominates another retained label.
pub trait Frontier: Clone + Send {
    /// removes all labels.
    fn reset(&mut self);

    /// Inserts the label unless a retained label dominates it. Every retained label the new
    /// one dominates is removed (but stays in the arena).
    /// Returns the index of the new label if it was inserted.
    fn insert(&mut self, label: Label, arena: &mut LabelArena) -> Option<LabelIdx>;

    /// the retained labels in increasing order of fuel.
    fn labels(&self, arena: &LabelArena) -> Vec<LabelIdx>;

    /// the retained label of smallest reduced cost.
    fn best(&self, arena: &LabelArena) -> Option<LabelIdx> {
        self.labels(arena).into_iter().min_by(|&a, &b| {
            arena[a]
                .reduced_cost()
                .total_cmp(&arena[b].reduced_cost())
        })
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// the fuel level a new label is stored with (never below the given one).
    fn quantize(&self, fuel: Fuel) -> Fuel;
}

/// labels are only compared within a bucket of equal length and route usage.
#[derive(Debug, Clone)]
pub(crate) struct Bucket<T> {
    pub(crate) length: TripCount,
    pub(crate) usage: RouteUsage,
    pub(crate) entries: T,
}

/// the bucket of the label's length and usage, created if missing.
pub(crate) fn bucket_for<'a, T>(
    buckets: &'a mut Vec<Bucket<T>>,
    label: &Label,
    empty: impl FnOnce() -> T,
) -> &'a mut Bucket<T> {
    let position = buckets
        .iter()
        .position(|b| b.length == label.length() && &b.usage == label.usage());
    match position {
        Some(p) => &mut buckets[p],
        None => {
            buckets.push(Bucket {
                length: label.length(),
                usage: label.usage().clone(),
                entries: empty(),
            });
            let last = buckets.len() - 1;
            &mut buckets[last]
        }
    }
}
