//! Placement of newly introduced units.
//!
//! New units always take the bottom-right-most empty cell: rows are
//! scanned from last to first, and within a row columns from last to
//! first.

use crate::core::{BoardError, Position, Unit};

use super::Board;

/// The cell a new unit would be placed in, or `None` if the board is full.
#[must_use]
pub fn spawn_slot(board: &Board) -> Option<Position> {
    let size = board.size();
    (0..size)
        .rev()
        .flat_map(|row| (0..size).rev().map(move |col| Position::new(row, col)))
        .find(|&pos| board.is_empty_at(pos))
}

/// Place a power-1 stationary unit in the spawn slot.
///
/// Returns the position filled, or `None` (board untouched) if the board
/// is full.
pub fn spawn(board: &mut Board) -> Result<Option<Position>, BoardError> {
    let Some(pos) = spawn_slot(board) else {
        return Ok(None);
    };

    board.place(pos, Unit::spawned())?;
    Ok(Some(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_spawn_is_bottom_right() {
        let mut board = Board::new(3);

        assert_eq!(spawn(&mut board).unwrap(), Some(Position::new(2, 2)));
        assert_eq!(board.get(Position::new(2, 2)), Some(&Unit::spawned()));
    }

    #[test]
    fn test_spawn_fills_last_row_right_to_left_then_moves_up() {
        let mut board = Board::new(2);

        let order: Vec<_> = (0..4).map(|_| spawn(&mut board).unwrap()).collect();
        assert_eq!(
            order,
            vec![
                Some(Position::new(1, 1)),
                Some(Position::new(1, 0)),
                Some(Position::new(0, 1)),
                Some(Position::new(0, 0)),
            ]
        );
        assert!(board.is_full());
    }

    #[test]
    fn test_spawn_skips_occupied_cells() {
        let mut board = Board::new(3);
        board.place(Position::new(2, 2), Unit::new(4)).unwrap();
        board.place(Position::new(2, 1), Unit::new(2)).unwrap();

        assert_eq!(spawn(&mut board).unwrap(), Some(Position::new(2, 0)));
        // The existing units are untouched.
        assert_eq!(board.get(Position::new(2, 2)).map(|u| u.power), Some(4));
    }

    #[test]
    fn test_spawn_prefers_lower_row_over_right_column() {
        let mut board = Board::new(3);
        for col in 1..3 {
            board.place(Position::new(2, col), Unit::new(1)).unwrap();
        }
        // (2, 0) is empty and beats (1, 2).
        assert_eq!(spawn_slot(&board), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_spawn_on_full_board() {
        let mut board = Board::new(1);
        board.place(Position::new(0, 0), Unit::new(9)).unwrap();

        let before = board.clone();
        assert_eq!(spawn(&mut board).unwrap(), None);
        assert_eq!(board, before);
    }
}
