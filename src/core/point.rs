//! Point and coordinate types for the navigation grid.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the 8 neighbors (including diagonals)
    ///
    /// Fixed order, so neighbor expansion is deterministic for a given
    /// grid and search results are reproducible across runs.
    #[inline]
    pub fn neighbors_8(&self) -> [GridCoord; 8] {
        [
            GridCoord::new(self.x, self.y + 1),     // N
            GridCoord::new(self.x + 1, self.y + 1), // NE
            GridCoord::new(self.x + 1, self.y),     // E
            GridCoord::new(self.x + 1, self.y - 1), // SE
            GridCoord::new(self.x, self.y - 1),     // S
            GridCoord::new(self.x - 1, self.y - 1), // SW
            GridCoord::new(self.x - 1, self.y),     // W
            GridCoord::new(self.x - 1, self.y + 1), // NW
        ]
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

/// Ground-plane point (meters, f32)
///
/// Turn boundaries and crossing tests operate purely in the ground plane;
/// 3D positions project down via [`WorldPoint::ground`].
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GroundPoint {
    /// X coordinate in meters
    pub x: f32,
    /// Y coordinate in meters
    pub y: f32,
}

impl GroundPoint {
    /// Create a new ground-plane point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: GroundPoint = GroundPoint { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: GroundPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Length (magnitude) of this point as a vector from origin
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Normalize to unit length, or `None` for the zero vector
    #[inline]
    pub fn try_normalize(&self) -> Option<GroundPoint> {
        let len = self.length();
        if len > 0.0 {
            Some(GroundPoint::new(self.x / len, self.y / len))
        } else {
            None
        }
    }

    /// Dot product with another point (as vectors)
    #[inline]
    pub fn dot(&self, other: GroundPoint) -> f32 {
        self.x * other.x + self.y * other.y
    }
}

impl Add for GroundPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GroundPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GroundPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GroundPoint::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for GroundPoint {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        GroundPoint::new(self.x * scalar, self.y * scalar)
    }
}

/// World position (meters, f32, z up)
///
/// The vertical component is carried through grid construction and path
/// output unchanged; planning itself happens on the ground plane.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate in meters
    pub x: f32,
    /// Y coordinate in meters
    pub y: f32,
    /// Height in meters
    pub z: f32,
}

impl WorldPoint {
    /// Create a new world position
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Project onto the ground plane
    #[inline]
    pub fn ground(&self) -> GroundPoint {
        GroundPoint::new(self.x, self.y)
    }

    /// Lift a ground-plane point back to 3D at the given height
    #[inline]
    pub fn from_ground(point: GroundPoint, z: f32) -> Self {
        Self::new(point.x, point.y, z)
    }

    /// Full 3D Euclidean distance to another position
    #[inline]
    pub fn distance(&self, other: WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_coord_neighbors() {
        let c = GridCoord::new(5, 5);
        let n = c.neighbors_8();
        assert_eq!(n[0], GridCoord::new(5, 6)); // N
        assert_eq!(n[2], GridCoord::new(6, 5)); // E
        assert_eq!(n[4], GridCoord::new(5, 4)); // S
        assert_eq!(n[6], GridCoord::new(4, 5)); // W
        // all eight distinct
        for i in 0..8 {
            for j in (i + 1)..8 {
                assert_ne!(n[i], n[j]);
            }
        }
    }

    #[test]
    fn test_ground_point_distance() {
        let a = GroundPoint::new(0.0, 0.0);
        let b = GroundPoint::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_try_normalize_zero_vector() {
        assert_eq!(GroundPoint::ZERO.try_normalize(), None);

        let n = GroundPoint::new(0.0, 2.0).try_normalize().unwrap();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_world_point_projection() {
        let p = WorldPoint::new(1.0, 2.0, 3.0);
        assert_eq!(p.ground(), GroundPoint::new(1.0, 2.0));
        assert_eq!(WorldPoint::from_ground(p.ground(), 3.0), p);
    }

    #[test]
    fn test_world_point_distance_is_3d() {
        let a = WorldPoint::new(0.0, 0.0, 0.0);
        let b = WorldPoint::new(2.0, 3.0, 6.0);
        assert!((a.distance(b) - 7.0).abs() < 1e-6);
    }
}
