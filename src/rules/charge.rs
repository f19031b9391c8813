//! The charge engine: resolves one directional command to a fixed point.
//!
//! ## Round start
//!
//! Resting units become stationary, every stationary unit starts
//! charging, and all duel flags are cleared.
//!
//! ## Passes
//!
//! Each pass snapshots the charging units in travel order and steps each
//! one cell:
//!
//! - off the board: the unit halts
//! - into an empty cell: the unit moves
//! - into an occupied cell: see [`resolve_collision`]
//!
//! Travel order visits the leading units first (rows descending for
//! South, columns descending for East, ascending otherwise), so a unit
//! leaving a cell frees it before the unit behind it is evaluated. This
//! is what makes the sequential sweep behave like simultaneous motion;
//! scanning in any other order changes which units duel.
//!
//! The loop ends after a pass in which nothing moved or dueled, or when
//! no unit is still charging. Every evaluated unit moves, duels, or halts,
//! and a board of `n` cells allows at most `n` consecutive moves per unit,
//! so convergence is bounded by the board size.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{BoardError, Direction, Position, Unit};

use super::collision::{resolve_collision, CollisionOutcome};

/// Summary of one resolved command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeReport {
    /// The commanded direction.
    pub direction: Direction,

    /// Passes that had at least one charging unit.
    pub passes: u32,

    /// Single-cell moves into empty cells.
    pub moves: u32,

    /// Duels won (each removes one unit from the board).
    pub duels: u32,

    /// Units that stopped at an edge or against another unit.
    pub halts: u32,
}

impl ChargeReport {
    fn new(direction: Direction) -> Self {
        Self {
            direction,
            passes: 0,
            moves: 0,
            duels: 0,
            halts: 0,
        }
    }
}

/// Result of stepping one charging unit a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Moved,
    Dueled,
    Halted,
}

/// Reset transient per-round state before a new command.
pub fn begin_round(board: &mut Board) {
    board.for_each_unit_mut(Unit::begin_round);
}

/// Cells in the order a pass evaluates them for `direction`.
pub fn scan_order(size: usize, direction: Direction) -> impl Iterator<Item = Position> {
    let rows_descending = direction == Direction::South;
    let cols_descending = direction == Direction::East;

    let index = move |i: usize, descending: bool| if descending { size - 1 - i } else { i };

    (0..size).flat_map(move |r| {
        (0..size).map(move |c| Position::new(index(r, rows_descending), index(c, cols_descending)))
    })
}

/// Issue `direction` to every unit and run until the board settles.
pub fn charge(board: &mut Board, direction: Direction) -> Result<ChargeReport, BoardError> {
    begin_round(board);

    let mut report = ChargeReport::new(direction);
    loop {
        let charging: SmallVec<[Position; 32]> = scan_order(board.size(), direction)
            .filter(|&pos| board.get(pos).is_some_and(Unit::is_charging))
            .collect();

        if charging.is_empty() {
            break;
        }
        report.passes += 1;

        let mut changed = false;
        for pos in charging {
            // A unit whose fate was already settled earlier in this pass is skipped.
            let still_charging = board
                .get(pos)
                .is_some_and(|u| u.is_charging() && !u.dueled_this_round);
            if !still_charging {
                continue;
            }

            match step(board, pos, direction)? {
                Step::Moved => {
                    report.moves += 1;
                    changed = true;
                }
                Step::Dueled => {
                    report.duels += 1;
                    changed = true;
                }
                Step::Halted => report.halts += 1,
            }
        }

        log::trace!(
            "charge {}: pass {} done (moves={}, duels={}, halts={})",
            direction,
            report.passes,
            report.moves,
            report.duels,
            report.halts
        );

        if !changed {
            break;
        }
    }

    debug_assert!(
        board.units().all(|(_, u)| !u.is_charging()),
        "units still charging after convergence"
    );

    Ok(report)
}

fn step(board: &mut Board, pos: Position, direction: Direction) -> Result<Step, BoardError> {
    let Some(target) = pos.step(direction, board.size()) else {
        board.get_mut(pos).ok_or(BoardError::EmptyCell(pos))?.halt();
        return Ok(Step::Halted);
    };

    if board.is_empty_at(target) {
        board.move_unit(pos, target)?;
        return Ok(Step::Moved);
    }

    Ok(match resolve_collision(board, pos, target)? {
        CollisionOutcome::Dueled => Step::Dueled,
        CollisionOutcome::Blocked => Step::Halted,
    })
}
