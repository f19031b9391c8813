//! Terminal-state detection.
//!
//! The game is over once the board is full and no command could produce
//! a duel. "Could produce a duel" looks only at immediate neighbours: a
//! stationary unit whose next cell in the checked direction holds a
//! non-resting unit of the same power. Longer charges that might line up
//! equal units after other units move are not simulated.

use crate::board::Board;
use crate::core::Direction;

/// Whether issuing `direction` could trigger at least one duel on contact.
#[must_use]
pub fn can_increase_power(board: &Board, direction: Direction) -> bool {
    board
        .units()
        .filter(|(_, unit)| unit.is_stationary())
        .any(|(pos, unit)| {
            pos.step(direction, board.size())
                .and_then(|target| board.get(target))
                .is_some_and(|other| !other.is_resting() && other.power == unit.power)
        })
}

/// Whether no command can ever produce another duel.
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    board.is_full()
        && !Direction::ALL
            .iter()
            .any(|&direction| can_increase_power(board, direction))
}
