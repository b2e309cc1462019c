//! Game-facing types: players, moves and the host's game state.
//!
//! The board itself belongs to the host framework. The agent only sees it
//! through [`GameState`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Stone symbol used on rendered boards
    pub fn symbol(&self) -> &'static str {
        match self {
            Player::Black => "X",
            Player::White => "O",
        }
    }

    pub fn rival(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A board coordinate, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies inside a `board_size` x `board_size` grid
    pub fn in_bounds(&self, board_size: usize) -> bool {
        let size = board_size as i64;
        (0..size).contains(&(self.row as i64)) && (0..size).contains(&(self.col as i64))
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl From<Move> for (i32, i32) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// How the host should serialize its board for a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardFormat {
    /// Machine-readable JSON rows
    Json,
    /// Human-readable grid of stone symbols
    Standard,
}

/// Read-only view of the host's game state.
///
/// Implementations own the rules; the agent never second-guesses them.
pub trait GameState {
    fn board_size(&self) -> usize;

    fn format_board(&self, format: BoardFormat) -> String;

    /// Moves playable right now, in the host's iteration order
    fn legal_moves(&self) -> Vec<Move>;

    fn is_valid_move(&self, row: i32, col: i32) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rival() {
        assert_eq!(Player::Black.rival(), Player::White);
        assert_eq!(Player::White.rival(), Player::Black);
        assert_eq!(Player::Black.to_string(), "X");
    }

    #[test]
    fn test_in_bounds() {
        assert!(Move::new(0, 0).in_bounds(8));
        assert!(Move::new(7, 7).in_bounds(8));
        assert!(!Move::new(8, 0).in_bounds(8));
        assert!(!Move::new(-1, 3).in_bounds(8));
    }

    #[test]
    fn test_tuple_conversions() {
        let mv: Move = (3, 4).into();
        assert_eq!(mv, Move::new(3, 4));
        assert_eq!(<(i32, i32)>::from(mv), (3, 4));
        assert_eq!(mv.to_string(), "(3, 4)");
    }
}
