//! Board coordinates and charge directions.
//!
//! ## Position
//!
//! A `(row, col)` pair addressing one cell of an N×N board. Row 0 is the
//! top of the board, column 0 the left edge.
//!
//! ## Direction
//!
//! The four commands a player can issue. Each maps to a unit step:
//!
//! | Direction | (dr, dc) |
//! |-----------|----------|
//! | North     | (-1, 0)  |
//! | South     | (+1, 0)  |
//! | West      | (0, -1)  |
//! | East      | (0, +1)  |
//!
//! ```
//! use samurai_charge::core::{Direction, Position};
//!
//! let pos = Position::new(0, 1);
//! assert_eq!(pos.step(Direction::East, 3), Some(Position::new(0, 2)));
//! assert_eq!(pos.step(Direction::North, 3), None); // off the top edge
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseDirectionError;

/// A cell address on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell one step in `direction`.
    ///
    /// Returns `None` if the step would leave a board of side `size`.
    #[must_use]
    pub fn step(self, direction: Direction, size: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;

        (row < size && col < size).then_some(Position { row, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// A charge command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All directions, in the order the terminal-state check tries them.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Unit `(dr, dc)` step for this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }

    /// The single-letter command token.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::South => 's',
            Direction::West => 'w',
            Direction::East => 'e',
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parse a command token. Surrounding whitespace is ignored and the
    /// letter is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" => Ok(Direction::North),
            "s" => Ok(Direction::South),
            "w" => Ok(Direction::West),
            "e" => Ok(Direction::East),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
