//! A* search over the navigation grid.
//!
//! Costs are the integer octile approximation (10 per straight step, 14
//! per diagonal), so heap comparisons are exact and runs are reproducible.
//! All per-search state lives in scratch arrays allocated per call;
//! nothing search-related is written back to the shared grid, which makes
//! overlapping searches over one grid safe.

use crate::core::{GridCoord, WorldPoint};
use crate::error::PlanError;
use crate::grid::NavGrid;
use crate::search::open_set::{CostKey, OpenSet};
use log::{debug, trace};

/// Cost of a straight (cardinal) step between adjacent cells.
pub const STRAIGHT_COST: u32 = 10;

/// Cost of a diagonal step (10·√2 rounded to an integer).
pub const DIAGONAL_COST: u32 = 14;

/// Sentinel for "no parent assigned".
const NO_PARENT: u32 = u32::MAX;

/// Octile grid distance between two cells.
///
/// `min(dx, dy)` diagonal steps plus the remaining straight steps.
/// Consistent for the 8-connected grid metric, and used for both the
/// step cost and the heuristic so the two never disagree.
#[inline]
pub fn octile_distance(a: GridCoord, b: GridCoord) -> u32 {
    let dx = (a.x - b.x).unsigned_abs();
    let dy = (a.y - b.y).unsigned_abs();
    let (min, max) = if dx < dy { (dx, dy) } else { (dy, dx) };
    DIAGONAL_COST * min + STRAIGHT_COST * (max - min)
}

/// Scratch state for a single search, indexed by flat cell index.
///
/// Freshly allocated per request. `f` is never stored: it is derived as
/// `g + h` at the moment a heap key is built.
struct SearchState {
    g: Vec<u32>,
    h: Vec<u32>,
    parent: Vec<u32>,
    closed: Vec<bool>,
}

impl SearchState {
    fn new(cell_count: usize) -> Self {
        Self {
            g: vec![u32::MAX; cell_count],
            h: vec![0; cell_count],
            parent: vec![NO_PARENT; cell_count],
            closed: vec![false; cell_count],
        }
    }
}

/// A completed route: ordered waypoints plus search statistics.
#[derive(Clone, Debug)]
pub struct Route {
    /// Waypoints in travel order. The start cell is excluded; the
    /// consumer already stands at the origin.
    pub waypoints: Vec<WorldPoint>,
    /// Accumulated octile cost at the target.
    pub cost: u32,
    /// Number of nodes expanded during the search.
    pub expanded: usize,
}

impl Route {
    /// True when start and goal resolved to the same cell.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

/// A* planner borrowing an immutable grid.
///
/// Holds no mutable state of its own; `find_path` takes `&self` and may
/// be called from several threads against the same grid.
pub struct AStarPlanner<'a> {
    grid: &'a NavGrid,
}

impl<'a> AStarPlanner<'a> {
    /// Create a planner for the given grid.
    pub fn new(grid: &'a NavGrid) -> Self {
        Self { grid }
    }

    /// Find a minimum-cost route between two world positions.
    ///
    /// Positions resolve to cells via the clamping conversion, so
    /// out-of-bounds requests are planned from/to the nearest edge cell.
    /// An unwalkable destination fails fast with
    /// [`PlanError::GoalBlocked`]; a drained open set fails with
    /// [`PlanError::NoRoute`].
    pub fn find_path(
        &self,
        origin: WorldPoint,
        destination: WorldPoint,
    ) -> Result<Route, PlanError> {
        let start = self.grid.world_to_cell(origin);
        let target = self.grid.world_to_cell(destination);
        trace!(
            "[AStar] find_path: start=({},{}) target=({},{})",
            start.coord.x,
            start.coord.y,
            target.coord.x,
            target.coord.y
        );

        if !target.walkable {
            debug!(
                "[AStar] FAILED: GoalBlocked at ({},{})",
                target.coord.x, target.coord.y
            );
            return Err(PlanError::GoalBlocked);
        }

        let cell_count = self.grid.cell_count();
        let mut state = SearchState::new(cell_count);
        let mut open = OpenSet::new(cell_count);

        let start_idx = self.grid.flat_index(start.coord);
        let target_idx = self.grid.flat_index(target.coord);
        let target_coord = target.coord;

        state.g[start_idx] = 0;
        state.h[start_idx] = octile_distance(start.coord, target_coord);
        open.push(start_idx as u32, CostKey::new(0, state.h[start_idx]));

        let mut expanded = 0usize;

        while let Some((cell, _)) = open.pop() {
            let cell_idx = cell as usize;
            state.closed[cell_idx] = true;
            expanded += 1;

            if cell_idx == target_idx {
                let waypoints = self.retrace(&state, start_idx, target_idx);
                debug!(
                    "[AStar] SUCCESS: {} waypoints, cost={}, expanded={}",
                    waypoints.len(),
                    state.g[target_idx],
                    expanded
                );
                return Ok(Route {
                    waypoints,
                    cost: state.g[target_idx],
                    expanded,
                });
            }

            let current_coord = self.grid.node_at(cell_idx).coord;
            let current_g = state.g[cell_idx];

            for neighbor in self.grid.neighbors(current_coord) {
                let n_idx = self.grid.flat_index(neighbor.coord);
                if !neighbor.walkable || state.closed[n_idx] {
                    continue;
                }

                let tentative = current_g + octile_distance(current_coord, neighbor.coord);
                if tentative < state.g[n_idx] {
                    state.g[n_idx] = tentative;
                    state.h[n_idx] = octile_distance(neighbor.coord, target_coord);
                    state.parent[n_idx] = cell;

                    let key = CostKey::new(tentative, state.h[n_idx]);
                    if open.contains(n_idx as u32) {
                        open.decrease_key(n_idx as u32, key);
                    } else {
                        open.push(n_idx as u32, key);
                    }
                }
            }
        }

        debug!("[AStar] FAILED: NoRoute after expanding {} nodes", expanded);
        Err(PlanError::NoRoute)
    }

    /// Walk parent links from the target back to the start, excluding the
    /// start cell, and reverse into travel order.
    fn retrace(&self, state: &SearchState, start_idx: usize, target_idx: usize) -> Vec<WorldPoint> {
        let mut waypoints = Vec::new();
        let mut current = target_idx;
        while current != start_idx {
            waypoints.push(self.grid.node_at(current).position);
            current = state.parent[current] as usize;
        }
        waypoints.reverse();
        waypoints
    }
}

/// One-shot convenience over [`AStarPlanner`].
pub fn find_path(
    grid: &NavGrid,
    origin: WorldPoint,
    destination: WorldPoint,
) -> Result<Route, PlanError> {
    AStarPlanner::new(grid).find_path(origin, destination)
}
