//! Direction-aware path representation for a movement controller.
//!
//! Converts an ordered waypoint sequence into look-ahead waypoints,
//! perpendicular turn boundaries, and a deceleration index. The crate
//! drives no movement itself; a follower consumes the public fields:
//! advance the boundary index while the current boundary reports
//! crossed, and scale speed by the distance to the final boundary once
//! past [`Path::slow_down_index`].

mod line;

pub use line::TurnBoundary;

use crate::core::{GroundPoint, WorldPoint};
use serde::{Deserialize, Serialize};

/// Tuning for path construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PathConfig {
    /// Distance before a waypoint at which its turn boundary is placed
    /// (meters).
    pub turn_distance: f32,

    /// Remaining distance from the goal at which deceleration begins
    /// (meters).
    pub stopping_distance: f32,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            turn_distance: 2.0,
            stopping_distance: 5.0,
        }
    }
}

/// A smoothed, direction-aware path.
///
/// Built fresh per path request; a consumer replaces any path it already
/// holds. All fields are read-only outputs.
#[derive(Clone, Debug)]
pub struct Path {
    /// Waypoints in travel order, first to last.
    pub waypoints: Vec<WorldPoint>,

    /// One boundary per waypoint, same order and length.
    pub turn_boundaries: Vec<TurnBoundary>,

    /// Index of the last boundary (0 when the path is empty).
    pub finish_line_index: usize,

    /// First waypoint index at which deceleration should begin.
    ///
    /// Stays 0 when the whole path lies within the stopping distance: an
    /// agent already inside stopping range decelerates immediately.
    pub slow_down_index: usize,
}

impl Path {
    /// Build a path from a waypoint sequence and the agent's start
    /// position.
    ///
    /// Boundary placement happens on the ground plane; waypoints keep
    /// their vertical component. Each boundary anchor sits
    /// `turn_distance` before its waypoint along the direction of
    /// travel, except the final one, which is anchored exactly on the
    /// final waypoint so the agent reaches the true goal.
    pub fn build(waypoints: Vec<WorldPoint>, start_pos: WorldPoint, config: &PathConfig) -> Self {
        let finish_line_index = waypoints.len().saturating_sub(1);
        let mut turn_boundaries = Vec::with_capacity(waypoints.len());

        let mut previous = start_pos.ground();
        let mut travel_dir = GroundPoint::new(1.0, 0.0);

        for (i, waypoint) in waypoints.iter().enumerate() {
            let current = waypoint.ground();
            // Coincident consecutive points keep the previous direction.
            if let Some(dir) = (current - previous).try_normalize() {
                travel_dir = dir;
            }

            let boundary_point = if i == finish_line_index {
                current
            } else {
                current - travel_dir * config.turn_distance
            };
            turn_boundaries.push(TurnBoundary::new(
                boundary_point,
                previous - travel_dir * config.turn_distance,
            ));
            previous = boundary_point;
        }

        let mut slow_down_index = 0;
        let mut dst_from_end = 0.0;
        for i in (1..waypoints.len()).rev() {
            dst_from_end += waypoints[i].distance(waypoints[i - 1]);
            if dst_from_end > config.stopping_distance {
                slow_down_index = i;
                break;
            }
        }

        Self {
            waypoints,
            turn_boundaries,
            finish_line_index,
            slow_down_index,
        }
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// True when the route had no waypoints (start and goal shared a
    /// cell).
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Total 3D length over the waypoints.
    pub fn total_length(&self) -> f32 {
        self.waypoints
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_waypoints() -> Vec<WorldPoint> {
        vec![
            WorldPoint::new(10.0, 0.0, 0.0),
            WorldPoint::new(20.0, 0.0, 0.0),
            WorldPoint::new(30.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_boundary_per_waypoint() {
        let path = Path::build(
            straight_waypoints(),
            WorldPoint::new(0.0, 0.0, 0.0),
            &PathConfig::default(),
        );
        assert_eq!(path.turn_boundaries.len(), path.waypoints.len());
        assert_eq!(path.finish_line_index, 2);
    }

    #[test]
    fn test_boundary_offset_and_crossing() {
        let config = PathConfig {
            turn_distance: 2.0,
            stopping_distance: 5.0,
        };
        let path = Path::build(straight_waypoints(), WorldPoint::new(0.0, 0.0, 0.0), &config);

        // First boundary sits 2 units before its waypoint, along travel.
        let anchor = path.turn_boundaries[0].anchor();
        assert!((anchor.x - 8.0).abs() < 1e-5);
        assert!(anchor.y.abs() < 1e-5);

        // Not crossed at the anchor, crossed one unit past it.
        assert!(!path.turn_boundaries[0].has_crossed(anchor));
        assert!(path.turn_boundaries[0].has_crossed(GroundPoint::new(anchor.x + 1.0, 0.0)));
    }

    #[test]
    fn test_final_boundary_is_exact() {
        let path = Path::build(
            straight_waypoints(),
            WorldPoint::new(0.0, 0.0, 0.0),
            &PathConfig::default(),
        );
        let last = path.turn_boundaries[path.finish_line_index].anchor();
        assert_eq!(last, GroundPoint::new(30.0, 0.0));
    }

    #[test]
    fn test_slow_down_index_scans_from_end() {
        // Ten waypoints spaced one unit apart.
        let waypoints: Vec<_> = (1..=10)
            .map(|i| WorldPoint::new(i as f32, 0.0, 0.0))
            .collect();
        let config = PathConfig {
            turn_distance: 1.0,
            stopping_distance: 2.5,
        };
        let path = Path::build(waypoints, WorldPoint::new(0.0, 0.0, 0.0), &config);

        // Walking back: 1.0 at index 9, 2.0 at 8, 3.0 at 7 exceeds 2.5.
        assert_eq!(path.slow_down_index, 7);
        assert!(path.slow_down_index <= path.finish_line_index);
    }

    #[test]
    fn test_short_path_decelerates_immediately() {
        let config = PathConfig {
            turn_distance: 1.0,
            stopping_distance: 100.0,
        };
        let path = Path::build(straight_waypoints(), WorldPoint::new(0.0, 0.0, 0.0), &config);
        assert_eq!(path.slow_down_index, 0);
    }

    #[test]
    fn test_empty_waypoints_build_empty_path() {
        let path = Path::build(
            Vec::new(),
            WorldPoint::new(1.0, 2.0, 0.0),
            &PathConfig::default(),
        );
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert!(path.turn_boundaries.is_empty());
        assert_eq!(path.finish_line_index, 0);
        assert_eq!(path.slow_down_index, 0);
        assert_eq!(path.total_length(), 0.0);
    }

    #[test]
    fn test_coincident_waypoints_reuse_direction() {
        // Second waypoint repeats the first; construction must not
        // produce a zero direction.
        let waypoints = vec![
            WorldPoint::new(10.0, 0.0, 0.0),
            WorldPoint::new(10.0, 0.0, 0.0),
            WorldPoint::new(20.0, 0.0, 0.0),
        ];
        let path = Path::build(
            waypoints,
            WorldPoint::new(0.0, 0.0, 0.0),
            &PathConfig::default(),
        );
        assert_eq!(path.turn_boundaries.len(), 3);
        // Final boundary still exact.
        assert_eq!(
            path.turn_boundaries[2].anchor(),
            GroundPoint::new(20.0, 0.0)
        );
    }

    #[test]
    fn test_vertical_component_carried_through() {
        let waypoints = vec![
            WorldPoint::new(5.0, 0.0, 1.5),
            WorldPoint::new(10.0, 0.0, 2.5),
        ];
        let path = Path::build(
            waypoints,
            WorldPoint::new(0.0, 0.0, 1.0),
            &PathConfig::default(),
        );
        assert_eq!(path.waypoints[0].z, 1.5);
        assert_eq!(path.waypoints[1].z, 2.5);
        // Slow-down accumulation uses full 3D distance.
        let expected = (25.0f32 + 1.0).sqrt();
        assert!((path.total_length() - expected).abs() < 1e-5);
    }
}
