//! Core geometry types.
//!
//! - [`GridCoord`]: integer cell coordinates
//! - [`GroundPoint`]: 2D ground-plane point/vector
//! - [`WorldPoint`]: 3D world position (z up)

mod point;

pub use point::{GridCoord, GroundPoint, WorldPoint};
