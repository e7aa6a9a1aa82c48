use model::base_types::Fuel;

use super::{bucket_for, Bucket, Frontier};
use crate::label::{Label, LabelArena, LabelIdx};

/// Keeps labels with their exact fuel level. Each bucket is sorted by fuel, so only a prefix
/// has to be scanned to find a dominating label.
#[derive(Debug, Clone)]
pub struct ExactFrontier {
    epsilon: f64,
    buckets: Vec<Bucket<Vec<LabelIdx>>>,
    len: usize,
}

impl ExactFrontier {
    pub fn new(epsilon: f64) -> ExactFrontier {
        ExactFrontier {
            epsilon,
            buckets: Vec::new(),
            len: 0,
        }
    }
}

impl Frontier for ExactFrontier {
    fn reset(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }

    fn insert(&mut self, label: Label, arena: &mut LabelArena) -> Option<LabelIdx> {
        let epsilon = self.epsilon;
        let bucket = bucket_for(&mut self.buckets, &label, Vec::new);

        if bucket
            .entries
            .iter()
            .take_while(|&&e| arena[e].fuel() <= label.fuel() + epsilon)
            .any(|&e| arena[e].dominates(&label, epsilon))
        {
            return None;
        }

        let before = bucket.entries.len();
        bucket
            .entries
            .retain(|&e| !label.dominates(&arena[e], epsilon));
        let removed = before - bucket.entries.len();

        let fuel = label.fuel();
        let position = bucket.entries.partition_point(|&e| arena[e].fuel() <= fuel);
        let idx = arena.push(label);
        bucket.entries.insert(position, idx);

        self.len = self.len + 1 - removed;
        Some(idx)
    }

    fn labels(&self, arena: &LabelArena) -> Vec<LabelIdx> {
        let mut labels: Vec<LabelIdx> = self
            .buckets
            .iter()
            .flat_map(|b| b.entries.iter().copied())
            .collect();
        labels.sort_by(|&a, &b| arena[a].fuel().total_cmp(&arena[b].fuel()));
        labels
    }

    fn len(&self) -> usize {
        self.len
    }

    fn quantize(&self, fuel: Fuel) -> Fuel {
        fuel
    }
}
