//! Perpendicular turn-boundary lines.

use crate::core::GroundPoint;

/// Travel direction used when a boundary is built from coincident points.
const FALLBACK_DIR: GroundPoint = GroundPoint { x: 1.0, y: 0.0 };

/// A turn boundary: the line through an anchor point, perpendicular to
/// the direction of travel, plus the side the agent approaches from.
///
/// A follower advances to its next waypoint once its position crosses the
/// boundary, and reads its distance to the final boundary to scale
/// deceleration near the goal.
#[derive(Clone, Copy, Debug)]
pub struct TurnBoundary {
    anchor: GroundPoint,
    travel_dir: GroundPoint,
    approach_side: bool,
}

impl TurnBoundary {
    /// Build the boundary through `point_on_line`, perpendicular to the
    /// travel direction from `approach_point` toward it.
    ///
    /// Coincident inputs fall back to a fixed +X travel direction rather
    /// than producing a zero direction.
    pub fn new(point_on_line: GroundPoint, approach_point: GroundPoint) -> Self {
        let travel_dir = (point_on_line - approach_point)
            .try_normalize()
            .unwrap_or(FALLBACK_DIR);

        let mut boundary = Self {
            anchor: point_on_line,
            travel_dir,
            approach_side: false,
        };
        boundary.approach_side = boundary.side(approach_point);
        boundary
    }

    /// Which side of the line a point lies on, signed along the travel
    /// direction.
    #[inline]
    fn side(&self, point: GroundPoint) -> bool {
        (point - self.anchor).dot(self.travel_dir) > 0.0
    }

    /// True once `point` has moved past the line, relative to the side
    /// the approach started on.
    #[inline]
    pub fn has_crossed(&self, point: GroundPoint) -> bool {
        self.side(point) != self.approach_side
    }

    /// Unsigned perpendicular distance from `point` to the infinite
    /// boundary line.
    #[inline]
    pub fn distance_from_point(&self, point: GroundPoint) -> f32 {
        (point - self.anchor).dot(self.travel_dir).abs()
    }

    /// Point the boundary line passes through.
    #[inline]
    pub fn anchor(&self) -> GroundPoint {
        self.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_flips_past_anchor() {
        // Travelling +X toward an anchor at (8, 0).
        let boundary = TurnBoundary::new(GroundPoint::new(8.0, 0.0), GroundPoint::new(0.0, 0.0));

        assert!(!boundary.has_crossed(GroundPoint::new(0.0, 0.0)));
        assert!(!boundary.has_crossed(GroundPoint::new(7.9, 3.0)));
        // On the line counts as not yet crossed.
        assert!(!boundary.has_crossed(GroundPoint::new(8.0, -2.0)));
        assert!(boundary.has_crossed(GroundPoint::new(9.0, 0.0)));
        assert!(boundary.has_crossed(GroundPoint::new(8.1, 5.0)));
    }

    #[test]
    fn test_distance_is_perpendicular() {
        let boundary = TurnBoundary::new(GroundPoint::new(4.0, 0.0), GroundPoint::new(0.0, 0.0));

        // Lateral offset does not change the perpendicular distance.
        assert!((boundary.distance_from_point(GroundPoint::new(1.0, 0.0)) - 3.0).abs() < 1e-6);
        assert!((boundary.distance_from_point(GroundPoint::new(1.0, 7.0)) - 3.0).abs() < 1e-6);
        assert!((boundary.distance_from_point(GroundPoint::new(6.0, -2.0)) - 2.0).abs() < 1e-6);
        assert!(boundary.distance_from_point(GroundPoint::new(4.0, 100.0)) < 1e-6);
    }

    #[test]
    fn test_diagonal_travel_direction() {
        let boundary = TurnBoundary::new(GroundPoint::new(5.0, 5.0), GroundPoint::new(0.0, 0.0));

        assert!(!boundary.has_crossed(GroundPoint::new(4.0, 4.0)));
        assert!(boundary.has_crossed(GroundPoint::new(6.0, 6.0)));
        // Distance measured along the diagonal.
        let d = boundary.distance_from_point(GroundPoint::new(0.0, 0.0));
        assert!((d - (50.0f32).sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_points_do_not_panic() {
        let p = GroundPoint::new(3.0, 3.0);
        let boundary = TurnBoundary::new(p, p);

        // Falls back to +X travel: ahead of the anchor counts as crossed.
        assert!(boundary.has_crossed(GroundPoint::new(4.0, 3.0)));
        assert!(!boundary.has_crossed(GroundPoint::new(2.0, 3.0)));
        assert!(boundary.distance_from_point(p) < 1e-6);
    }
}
