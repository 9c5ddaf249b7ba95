//! Per-cell terrain data.

use crate::core::{GridCoord, WorldPoint};
use serde::{Deserialize, Serialize};

/// One cell of the navigation grid.
///
/// Terrain data only: walkability, world-space center, and grid
/// coordinates, all fixed when the grid is built. Search bookkeeping
/// (costs, parent links, heap slots) lives in per-search scratch state,
/// so nodes are never mutated after construction and one grid can serve
/// overlapping path requests.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridNode {
    /// Whether an agent can occupy this cell.
    pub walkable: bool,
    /// World-space center of the cell.
    pub position: WorldPoint,
    /// Integer grid coordinates, unique per node.
    pub coord: GridCoord,
}

impl GridNode {
    /// Create a new node.
    #[inline]
    pub fn new(walkable: bool, position: WorldPoint, coord: GridCoord) -> Self {
        Self {
            walkable,
            position,
            coord,
        }
    }
}
