use std::ops::Range;

use crate::base_types::{RefuelPointIdx, VertexIdx};

/// Compressed sparse storage of all feasible arcs, grouped by destination.
///
/// Row t holds the feasible predecessors s of t in increasing order of s. Each arc (s, t) owns
/// the (possibly empty) ordered list of refuel points that can be visited as detour s -> r -> t.
/// Without refuel table all these lists are empty.
///
/// Queries are O(degree) (plus a binary search for resuming), the full feasibility mask is
/// never scanned again after construction.
pub struct ArcIndex {
    row_starts: Vec<usize>, // row_starts[t]..row_starts[t+1] are the arcs into t
    sources: Vec<VertexIdx>,
    refuel_starts: Vec<usize>, // refuel_starts[k]..refuel_starts[k+1] are the candidates of arc k
    refuel_points: Vec<RefuelPointIdx>,
}

/// a feasible arc together with its refuel candidates.
#[derive(Debug, Clone, Copy)]
pub struct FeasibleArc<'a> {
    source: VertexIdx,
    target: VertexIdx,
    refuel_points: &'a [RefuelPointIdx],
}

impl<'a> FeasibleArc<'a> {
    pub fn source(&self) -> VertexIdx {
        self.source
    }

    pub fn target(&self) -> VertexIdx {
        self.target
    }

    pub fn refuel_points(&self) -> &'a [RefuelPointIdx] {
        self.refuel_points
    }
}

// static functions
impl ArcIndex {
    /// rows[t] must contain the feasible predecessors of t (with their refuel candidates) in
    /// increasing order of the predecessor.
    pub(crate) fn from_rows(rows: Vec<Vec<(VertexIdx, Vec<RefuelPointIdx>)>>) -> ArcIndex {
        let numel: usize = rows.iter().map(|row| row.len()).sum();

        let mut row_starts = Vec::with_capacity(rows.len() + 1);
        let mut sources = Vec::with_capacity(numel);
        let mut refuel_starts = Vec::with_capacity(numel + 1);
        let mut refuel_points = Vec::new();

        row_starts.push(0);
        refuel_starts.push(0);
        for row in rows.into_iter() {
            debug_assert!(row.windows(2).all(|w| w[0].0 < w[1].0));
            for (source, candidates) in row.into_iter() {
                sources.push(source);
                refuel_points.extend(candidates);
                refuel_starts.push(refuel_points.len());
            }
            row_starts.push(sources.len());
        }

        ArcIndex {
            row_starts,
            sources,
            refuel_starts,
            refuel_points,
        }
    }
}

// methods
impl ArcIndex {
    /// number of feasible arcs.
    pub fn numel(&self) -> usize {
        self.sources.len()
    }

    /// number of refuel candidates over all arcs.
    pub fn number_of_refuel_candidates(&self) -> usize {
        self.refuel_points.len()
    }

    pub fn number_of_rows(&self) -> usize {
        self.row_starts.len() - 1
    }

    pub fn in_degree(&self, target: VertexIdx) -> usize {
        self.row(target).len()
    }

    /// all destinations in decreasing order of their index.
    pub fn destinations_rev(&self) -> impl Iterator<Item = VertexIdx> {
        (0..self.number_of_rows()).rev().map(VertexIdx::from_usize)
    }

    /// all feasible arcs into target in increasing order of the source.
    pub fn predecessors(&self, target: VertexIdx) -> impl Iterator<Item = FeasibleArc<'_>> + '_ {
        self.row(target).map(move |k| self.arc_at(k, target))
    }

    /// all feasible arcs into target whose source is at least resume, in increasing order of the
    /// source.
    pub fn predecessors_from(
        &self,
        target: VertexIdx,
        resume: VertexIdx,
    ) -> impl Iterator<Item = FeasibleArc<'_>> + '_ {
        let row = self.row(target);
        let offset = self.sources[row.clone()].partition_point(|&s| s < resume);
        (row.start + offset..row.end).map(move |k| self.arc_at(k, target))
    }

    pub fn find(&self, source: VertexIdx, target: VertexIdx) -> Option<FeasibleArc<'_>> {
        let row = self.row(target);
        self.sources[row.clone()]
            .binary_search(&source)
            .ok()
            .map(|offset| self.arc_at(row.start + offset, target))
    }

    pub fn contains(&self, source: VertexIdx, target: VertexIdx) -> bool {
        self.find(source, target).is_some()
    }

    fn row(&self, target: VertexIdx) -> Range<usize> {
        self.row_starts[target.idx()]..self.row_starts[target.idx() + 1]
    }

    fn arc_at(&self, k: usize, target: VertexIdx) -> FeasibleArc<'_> {
        FeasibleArc {
            source: self.sources[k],
            target,
            refuel_points: &self.refuel_points[self.refuel_starts[k]..self.refuel_starts[k + 1]],
        }
    }
}
