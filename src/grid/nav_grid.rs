//! Occupancy grid construction and coordinate mapping.
//!
//! The grid discretizes a bounded planar area into uniform cells. Each
//! cell is probed once at build time with a blocked/unblocked test
//! supplied by the hosting environment (typically a spatial-overlap
//! query); after that the grid is immutable terrain.

use crate::core::{GridCoord, GroundPoint, WorldPoint};
use crate::grid::GridNode;
use log::debug;
use serde::{Deserialize, Serialize};

/// Grid construction parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// World-space center of the gridded area. The z component becomes
    /// the height of every cell center.
    pub center: WorldPoint,

    /// Size of the area along the two ground-plane axes (meters).
    pub extent: GroundPoint,

    /// Half the edge length of one cell (meters). Also the radius passed
    /// to the occupancy probe.
    pub cell_radius: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            center: WorldPoint::new(0.0, 0.0, 0.0),
            extent: GroundPoint::new(32.0, 32.0),
            cell_radius: 0.5,
        }
    }
}

/// The occupancy grid: a fixed 2D table of [`GridNode`]s.
///
/// Built exactly once per area. Nodes are stored in raster order
/// (`y * width + x`), the flat index doubling as the cell identity used
/// by the search scratch state.
#[derive(Clone, Debug)]
pub struct NavGrid {
    nodes: Vec<GridNode>,
    width: usize,
    height: usize,
    center: WorldPoint,
    extent: GroundPoint,
}

impl NavGrid {
    /// Build the grid, probing every cell once.
    ///
    /// `is_blocked` receives the cell's world-space center and the cell
    /// radius; walkability is the negation of its result. Dimensions are
    /// `round(extent / cell_diameter)` per axis, clamped to at least one
    /// cell so coordinate conversion stays total.
    pub fn build<F>(config: GridConfig, mut is_blocked: F) -> Self
    where
        F: FnMut(WorldPoint, f32) -> bool,
    {
        let diameter = config.cell_radius * 2.0;
        let width = (config.extent.x / diameter).round().max(1.0) as usize;
        let height = (config.extent.y / diameter).round().max(1.0) as usize;

        let corner_x = config.center.x - config.extent.x / 2.0;
        let corner_y = config.center.y - config.extent.y / 2.0;

        let mut nodes = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let position = WorldPoint::new(
                    corner_x + x as f32 * diameter + config.cell_radius,
                    corner_y + y as f32 * diameter + config.cell_radius,
                    config.center.z,
                );
                let walkable = !is_blocked(position, config.cell_radius);
                nodes.push(GridNode::new(
                    walkable,
                    position,
                    GridCoord::new(x as i32, y as i32),
                ));
            }
        }

        debug!(
            "[NavGrid] built {}x{} grid ({} cells, {} walkable)",
            width,
            height,
            nodes.len(),
            nodes.iter().filter(|n| n.walkable).count()
        );

        Self {
            nodes,
            width,
            height,
            center: config.center,
            extent: config.extent,
        }
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// All nodes in raster order
    #[inline]
    pub fn nodes(&self) -> &[GridNode] {
        &self.nodes
    }

    /// The node at the given coordinate, or `None` when out of bounds
    #[inline]
    pub fn node(&self, coord: GridCoord) -> Option<&GridNode> {
        if coord.x < 0
            || coord.y < 0
            || coord.x as usize >= self.width
            || coord.y as usize >= self.height
        {
            return None;
        }
        Some(&self.nodes[coord.y as usize * self.width + coord.x as usize])
    }

    /// Flat raster index of an in-bounds coordinate.
    #[inline]
    pub(crate) fn flat_index(&self, coord: GridCoord) -> usize {
        coord.y as usize * self.width + coord.x as usize
    }

    /// The node at a flat raster index.
    #[inline]
    pub(crate) fn node_at(&self, index: usize) -> &GridNode {
        &self.nodes[index]
    }

    /// Resolve a world position to its grid cell.
    ///
    /// Ground-plane components are normalized over the extent, clamped to
    /// `[0, 1]`, scaled by `dimension - 1`, and rounded. Out-of-range
    /// positions clamp to the nearest edge cell; this is defined
    /// behavior, not an error.
    pub fn world_to_cell(&self, position: WorldPoint) -> &GridNode {
        let percent_x = ((position.x - self.center.x) / self.extent.x + 0.5).clamp(0.0, 1.0);
        let percent_y = ((position.y - self.center.y) / self.extent.y + 0.5).clamp(0.0, 1.0);

        let x = ((self.width - 1) as f32 * percent_x).round() as usize;
        let y = ((self.height - 1) as f32 * percent_y).round() as usize;

        &self.nodes[y * self.width + x]
    }

    /// The up-to-8 in-bounds neighbors of a cell, excluding the cell
    /// itself, in a fixed deterministic order.
    pub fn neighbors(&self, coord: GridCoord) -> Vec<&GridNode> {
        coord
            .neighbors_8()
            .iter()
            .filter_map(|&c| self.node(c))
            .collect()
    }
}
