//! The N×N unit grid.
//!
//! `Board` owns every unit exclusively. Cells are stored row-major in a
//! flat `Vec<Option<Unit>>`, so moving a unit is a slot reassignment and
//! no unit is ever referenced from two cells.
//!
//! Coordinates passed to any method must lie in `[0, size)`. Out-of-range
//! access is a caller bug and panics.
//!
//! ## Usage
//!
//! ```
//! use samurai_charge::board::Board;
//! use samurai_charge::core::{Position, Unit};
//!
//! let mut board = Board::new(2);
//! board.place(Position::new(1, 1), Unit::spawned()).unwrap();
//! board.move_unit(Position::new(1, 1), Position::new(0, 1)).unwrap();
//!
//! assert!(board.get(Position::new(1, 1)).is_none());
//! assert_eq!(board.get(Position::new(0, 1)).map(|u| u.power), Some(1));
//! assert_eq!(board.unit_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{BoardError, Position, Unit};

/// A square grid of optional units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Option<Unit>>,
}

/// Unvalidated wire form of `Board`.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Option<Unit>>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = raw.size.checked_mul(raw.size);
        if raw.size == 0 || expected != Some(raw.cells.len()) {
            return Err(BoardError::Malformed {
                size: raw.size,
                cells: raw.cells.len(),
            });
        }

        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Create an empty board of side `size`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board must have at least one cell");

        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "Position {} outside {}x{} board",
            pos,
            self.size,
            self.size
        );
        pos.row * self.size + pos.col
    }

    /// The unit at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Unit> {
        self.cells[self.index(pos)].as_ref()
    }

    /// Mutable access to the unit at `pos`, if any.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Unit> {
        let idx = self.index(pos);
        self.cells[idx].as_mut()
    }

    /// Check whether `pos` holds no unit.
    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Put `unit` into the empty cell `pos`.
    pub fn place(&mut self, pos: Position, unit: Unit) -> Result<(), BoardError> {
        let idx = self.index(pos);
        if self.cells[idx].is_some() {
            return Err(BoardError::OccupiedCell(pos));
        }
        self.cells[idx] = Some(unit);
        Ok(())
    }

    /// Take the unit out of `pos`, leaving the cell empty.
    pub fn remove(&mut self, pos: Position) -> Result<Unit, BoardError> {
        let idx = self.index(pos);
        self.cells[idx].take().ok_or(BoardError::EmptyCell(pos))
    }

    /// Move the unit at `from` into the empty cell `to`.
    ///
    /// On error the board is left unchanged.
    pub fn move_unit(&mut self, from: Position, to: Position) -> Result<(), BoardError> {
        if !self.is_empty_at(to) {
            return Err(BoardError::OccupiedCell(to));
        }
        let unit = self.remove(from)?;
        self.place(to, unit)
    }

    /// Check whether every cell holds a unit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of units on the board.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Iterate over occupied cells in row-major order.
    pub fn units(&self) -> impl Iterator<Item = (Position, &Unit)> {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref()
                .map(|unit| (Position::new(i / size, i % size), unit))
        })
    }

    /// Apply `f` to every unit on the board.
    pub fn for_each_unit_mut(&mut self, mut f: impl FnMut(&mut Unit)) {
        self.cells.iter_mut().flatten().for_each(|unit| f(unit));
    }
}
