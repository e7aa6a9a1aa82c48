use crate::base_types::{Meter, Seconds, VertexIdx};
use crate::error::ModelError;

/// a type for storing the pair-wise distances and travel times between all vertices of the
/// extended vertex set (vehicle-starts, trips and refuel points).
/// Both matrices are stored row-major in a flat Vec, indexed by the vertex indices.
///
/// The travel time from a to b is measured from the end of a (finish time) to the beginning of
/// b (start time).
/// Distances and travel times should satisfy the triangle-inequality. This is not asserted.
pub struct DeadHeadTrips {
    size: usize,
    travel_times: Vec<Seconds>,
    distances: Vec<Meter>,
}

// static functions
impl DeadHeadTrips {
    /// both matrices must be square and of the same size.
    pub fn new(
        travel_times: Vec<Vec<Seconds>>,
        distances: Vec<Vec<Meter>>,
    ) -> Result<DeadHeadTrips, ModelError> {
        let size = travel_times.len();
        if distances.len() != size {
            return Err(ModelError::DimensionMismatch {
                what: "distance matrix",
                expected: size,
                found: distances.len(),
            });
        }
        for row in travel_times.iter() {
            if row.len() != size {
                return Err(ModelError::DimensionMismatch {
                    what: "travel time matrix row",
                    expected: size,
                    found: row.len(),
                });
            }
        }
        for row in distances.iter() {
            if row.len() != size {
                return Err(ModelError::DimensionMismatch {
                    what: "distance matrix row",
                    expected: size,
                    found: row.len(),
                });
            }
        }

        Ok(DeadHeadTrips {
            size,
            travel_times: travel_times.into_iter().flatten().collect(),
            distances: distances.into_iter().flatten().collect(),
        })
    }
}

// methods
impl DeadHeadTrips {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn travel_time(&self, a: VertexIdx, b: VertexIdx) -> Seconds {
        self.travel_times[a.idx() * self.size + b.idx()]
    }

    pub fn distance(&self, a: VertexIdx, b: VertexIdx) -> Meter {
        self.distances[a.idx() * self.size + b.idx()]
    }
}
