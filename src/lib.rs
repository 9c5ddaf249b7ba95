//! # Marga-Nav: Grid A* Planning with Turn-Boundary Smoothing
//!
//! A navigation library for agents moving across a static, bounded
//! planar area. The area is discretized once into a uniform occupancy
//! grid; path requests run a cost-optimal A* search over that grid and
//! convert the resulting waypoint chain into a smooth, direction-aware
//! [`Path`] a movement controller can follow.
//!
//! The crate plans; it does not move anything. Rendering, input capture,
//! and the steering loop that consumes a [`Path`] live in the hosting
//! application.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::core::{GroundPoint, WorldPoint};
//! use marga_nav::{find_path, GridConfig, NavGrid, Path, PathConfig};
//!
//! // A 16 x 16 m area with a pillar in the middle. The closure is the
//! // environment's occupancy probe, called once per cell at build time.
//! let config = GridConfig {
//!     center: WorldPoint::new(0.0, 0.0, 0.0),
//!     extent: GroundPoint::new(16.0, 16.0),
//!     cell_radius: 0.5,
//! };
//! let grid = NavGrid::build(config, |center, radius| {
//!     center.ground().length() < 2.0 + radius
//! });
//!
//! let start = WorldPoint::new(-7.0, -7.0, 0.0);
//! let goal = WorldPoint::new(7.0, 7.0, 0.0);
//! let route = find_path(&grid, start, goal).expect("pillar leaves room to route around");
//!
//! let path = Path::build(route.waypoints, start, &PathConfig::default());
//! assert_eq!(path.turn_boundaries.len(), path.waypoints.len());
//! ```
//!
//! ## Coordinate Frame
//!
//! - Ground plane is (x, y); z is up.
//! - Grid cells are addressed by integer [`core::GridCoord`]s; world
//!   positions are [`core::WorldPoint`]s whose vertical component passes
//!   through planning unchanged.
//! - Planning geometry (turn boundaries, crossing tests) lives on the
//!   ground plane as [`core::GroundPoint`]s.
//!
//! ## Architecture
//!
//! - [`core`]: geometry types
//! - [`grid`]: occupancy grid built from a blocked/unblocked probe
//! - [`search`]: A* with an indexed min-heap open set
//! - [`path`]: turn boundaries and the follower-facing [`Path`]
//!
//! ## Concurrency
//!
//! A built [`NavGrid`] is immutable; every search allocates its own
//! scratch state, so any number of path requests may run against one
//! grid at once. [`Path`] values are independent; swapping a new path in
//! for an old one is the consumer's concern.

pub mod core;
pub mod error;
pub mod grid;
pub mod path;
pub mod search;

pub use error::PlanError;
pub use grid::{GridConfig, GridNode, NavGrid};
pub use path::{Path, PathConfig, TurnBoundary};
pub use search::{find_path, AStarPlanner, Route};
