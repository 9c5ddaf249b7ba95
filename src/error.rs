//! Error types for marga-nav.

use thiserror::Error;

/// Reasons a path request can fail.
///
/// Both variants mean "no route exists". The planner never retries;
/// callers decide the fallback (typically: stay put).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    /// The destination resolves to an unwalkable cell.
    #[error("goal cell is not walkable")]
    GoalBlocked,

    /// The open set drained before the target was reached.
    #[error("no route between start and goal")]
    NoRoute,
}
