// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use derive_more::Display;
use derive_more::From;
use serde::Serialize;

pub type Idx = u32;

pub type Seconds = f64;
pub type Meter = f64;
pub type Cost = f64;
pub type TripCount = u32;

/// fraction of a full tank (0.0 is empty, 1.0 is full).
pub type Fuel = f64;

pub const TANK_CAPACITY: Fuel = 1.0;

/// Position in the contiguous vertex index space:
/// vehicle-starts `[0, V)`, trips `[V, V+J)`, refuel points `[V+J, V+J+R)`.
#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[display(fmt = "v{}", _0)]
pub struct VertexIdx(pub Idx);

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[display(fmt = "veh{}", _0)]
pub struct VehicleIdx(pub Idx);

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[display(fmt = "trip{}", _0)]
pub struct TripIdx(pub Idx);

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[display(fmt = "refuel{}", _0)]
pub struct RefuelPointIdx(pub Idx);

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[display(fmt = "cust{}", _0)]
pub struct CustomerIdx(pub Idx);

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[display(fmt = "route{}", _0)]
pub struct RouteIdx(pub Idx);

impl VertexIdx {
    pub fn idx(&self) -> usize {
        self.0 as usize
    }

    pub fn from_usize(idx: usize) -> VertexIdx {
        VertexIdx(idx as Idx)
    }
}

impl VehicleIdx {
    pub fn idx(&self) -> usize {
        self.0 as usize
    }
}

impl TripIdx {
    pub fn idx(&self) -> usize {
        self.0 as usize
    }
}

impl RefuelPointIdx {
    pub fn idx(&self) -> usize {
        self.0 as usize
    }
}

impl CustomerIdx {
    pub fn idx(&self) -> usize {
        self.0 as usize
    }
}

impl RouteIdx {
    pub fn idx(&self) -> usize {
        self.0 as usize
    }
}

/// the kind of a vertex is fully determined by the range its index falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    VehicleStart(VehicleIdx),
    Trip(TripIdx),
    RefuelPoint(RefuelPointIdx),
}

impl VertexKind {
    pub fn is_vehicle_start(&self) -> bool {
        matches!(self, VertexKind::VehicleStart(_))
    }

    pub fn is_trip(&self) -> bool {
        matches!(self, VertexKind::Trip(_))
    }
}
