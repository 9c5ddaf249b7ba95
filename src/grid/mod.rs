//! Occupancy grid built from a blocked/unblocked probe over world space.
//!
//! - [`NavGrid`]: the fixed cell table plus world↔grid coordinate mapping
//! - [`GridNode`]: immutable per-cell terrain data
//! - [`GridConfig`]: area center, extent, and cell size

mod nav_grid;
mod node;

pub use nav_grid::{GridConfig, NavGrid};
pub use node::GridNode;
