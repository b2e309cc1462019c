//! Deterministic moves used when the model never produced a legal one.

use crate::game::Move;
use std::fmt;

/// The stage of the resolution that produced the final move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The first completion parsed and validated
    FirstAttempt,
    /// The repair completion parsed and validated
    Repair,
    /// Neither did; the move came from the fallback policy
    Default,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::FirstAttempt => "first_attempt",
            Stage::Repair => "repair",
            Stage::Default => "default",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legal move with the smallest Manhattan distance to the board centre.
///
/// The centre is `((size-1)/2, (size-1)/2)`, which sits between cells on even
/// boards. Distances are compared doubled so they stay integral. Ties go to
/// the earliest move in `legal`.
pub fn center_nearest(legal: &[Move], board_size: usize) -> Option<Move> {
    let twice_center = board_size as i64 - 1;
    legal.iter().copied().min_by_key(|m| {
        (2 * m.row as i64 - twice_center).abs() + (2 * m.col as i64 - twice_center).abs()
    })
}

/// First move in host order
pub fn first_legal(legal: &[Move]) -> Option<Move> {
    legal.first().copied()
}
