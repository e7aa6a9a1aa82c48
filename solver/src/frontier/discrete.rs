use model::base_types::Fuel;

use super::{bucket_for, Bucket, Frontier};
use crate::label::{Label, LabelArena, LabelIdx};

/// Fuel levels are rounded up to multiples of 1/levels, so a bucket holds at most one label
/// per level (levels + 1 slots, slot k for fuel k/levels).
///
/// Rounding up only ever asks for more fuel than needed, so every label stays feasible.
#[derive(Debug, Clone)]
pub struct DiscreteFrontier {
    levels: u32,
    epsilon: f64,
    buckets: Vec<Bucket<Vec<Option<LabelIdx>>>>,
    len: usize,
}

impl DiscreteFrontier {
    pub fn new(levels: u32, epsilon: f64) -> DiscreteFrontier {
        assert!(levels > 0, "a discrete frontier needs at least one level");
        DiscreteFrontier {
            levels,
            epsilon,
            buckets: Vec::new(),
            len: 0,
        }
    }

    pub fn levels(&self) -> u32 {
        self.levels
    }

    fn slot(&self, fuel: Fuel) -> usize {
        ((fuel * self.levels as f64).round().max(0.0) as usize).min(self.levels as usize)
    }
}

impl Frontier for DiscreteFrontier {
    fn reset(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }

    fn insert(&mut self, mut label: Label, arena: &mut LabelArena) -> Option<LabelIdx> {
        label.fuel = self.quantize(label.fuel);
        let epsilon = self.epsilon;
        let slot = self.slot(label.fuel());
        let slots = self.levels as usize + 1;
        let bucket = bucket_for(&mut self.buckets, &label, || vec![None; slots]);

        if bucket
            .entries
            .iter()
            .flatten()
            .any(|&e| arena[e].dominates(&label, epsilon))
        {
            return None;
        }

        let mut removed = 0;
        for entry in bucket.entries.iter_mut() {
            if let Some(e) = *entry {
                if label.dominates(&arena[e], epsilon) {
                    *entry = None;
                    removed += 1;
                }
            }
        }

        let idx = arena.push(label);
        bucket.entries[slot] = Some(idx);
        self.len = self.len + 1 - removed;
        Some(idx)
    }

    fn labels(&self, arena: &LabelArena) -> Vec<LabelIdx> {
        let mut labels: Vec<LabelIdx> = self
            .buckets
            .iter()
            .flat_map(|b| b.entries.iter().flatten().copied())
            .collect();
        labels.sort_by(|&a, &b| arena[a].fuel().total_cmp(&arena[b].fuel()));
        labels
    }

    fn len(&self) -> usize {
        self.len
    }

    /// `ceil(levels * fuel - epsilon) / levels`
    fn quantize(&self, fuel: Fuel) -> Fuel {
        let levels = self.levels as f64;
        ((levels * fuel - self.epsilon).ceil() / levels).max(0.0)
    }
}
