//! Collision resolution between a charging unit and an occupied cell.
//!
//! A charger meeting a stationary unit of equal power duels it: the
//! charger absorbs the defender, gains one power, takes the defender's
//! cell, and rests. Any other meeting (defender charging or resting, or
//! powers differ) simply stops the charger. The defender is never touched
//! by a non-duel collision, even if it is itself still charging.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{BoardError, Position};

/// What happened when a charger ran into an occupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionOutcome {
    /// The charger won a duel and now occupies the target cell.
    Dueled,
    /// The charger stopped in place.
    Blocked,
}

/// Resolve the charger at `from` running into the unit at `to`.
///
/// Both cells must be occupied.
pub fn resolve_collision(
    board: &mut Board,
    from: Position,
    to: Position,
) -> Result<CollisionOutcome, BoardError> {
    let defender = *board.get(to).ok_or(BoardError::EmptyCell(to))?;
    let charger = board.get_mut(from).ok_or(BoardError::EmptyCell(from))?;

    if defender.is_stationary() && charger.power == defender.power {
        charger.win_duel();
        board.remove(to)?;
        board.move_unit(from, to)?;
        Ok(CollisionOutcome::Dueled)
    } else {
        charger.halt();
        Ok(CollisionOutcome::Blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Motion, Unit};

    fn charging(power: u32) -> Unit {
        let mut unit = Unit::new(power);
        unit.motion = Motion::Charging;
        unit
    }

    fn with_motion(power: u32, motion: Motion) -> Unit {
        let mut unit = Unit::new(power);
        unit.motion = motion;
        unit
    }

    fn setup(charger: Unit, defender: Unit) -> (Board, Position, Position) {
        let mut board = Board::new(2);
        let from = Position::new(0, 0);
        let to = Position::new(0, 1);
        board.place(from, charger).unwrap();
        board.place(to, defender).unwrap();
        (board, from, to)
    }

    #[test]
    fn test_equal_power_stationary_defender_duels() {
        let (mut board, from, to) = setup(charging(3), Unit::new(3));

        let outcome = resolve_collision(&mut board, from, to).unwrap();

        assert_eq!(outcome, CollisionOutcome::Dueled);
        assert!(board.is_empty_at(from));
        let winner = board.get(to).unwrap();
        assert_eq!(winner.power, 4);
        assert_eq!(winner.motion, Motion::Resting);
        assert!(winner.dueled_this_round);
        assert_eq!(board.unit_count(), 1);
    }

    #[test]
    fn test_unequal_power_blocks() {
        let (mut board, from, to) = setup(charging(2), Unit::new(3));

        let outcome = resolve_collision(&mut board, from, to).unwrap();

        assert_eq!(outcome, CollisionOutcome::Blocked);
        assert_eq!(board.get(from), Some(&Unit::new(2)));
        assert_eq!(board.get(to), Some(&Unit::new(3)));
    }

    #[test]
    fn test_charging_defender_blocks_and_is_left_charging() {
        let (mut board, from, to) = setup(charging(1), charging(1));

        let outcome = resolve_collision(&mut board, from, to).unwrap();

        assert_eq!(outcome, CollisionOutcome::Blocked);
        assert_eq!(board.get(from).unwrap().motion, Motion::Stationary);
        assert_eq!(board.get(to).unwrap().motion, Motion::Charging);
    }

    #[test]
    fn test_resting_defender_blocks() {
        let (mut board, from, to) = setup(charging(2), with_motion(2, Motion::Resting));

        let outcome = resolve_collision(&mut board, from, to).unwrap();

        assert_eq!(outcome, CollisionOutcome::Blocked);
        assert_eq!(board.get(to), Some(&with_motion(2, Motion::Resting)));
        assert_eq!(board.unit_count(), 2);
    }

    #[test]
    fn test_empty_target_is_an_error() {
        let mut board = Board::new(2);
        let from = Position::new(0, 0);
        let to = Position::new(0, 1);
        board.place(from, charging(1)).unwrap();

        assert_eq!(
            resolve_collision(&mut board, from, to),
            Err(BoardError::EmptyCell(to))
        );
    }
}
