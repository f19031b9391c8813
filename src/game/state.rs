//! A running game: one board plus the round sequencing around it.
//!
//! Each command runs, in order:
//! 1. the charge engine, to convergence
//! 2. one spawn
//! 3. the terminal-state check
//!
//! Once the check reports game over, further commands are refused.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{spawn, Board};
use crate::core::{BoardError, Direction, GameConfig, Position};
use crate::rules::{charge, is_game_over, ChargeReport};

/// Errors from driving a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is over; no more commands accepted")]
    GameOver,
    /// Internal invariant failure; a consistent board never produces this.
    #[error("board invariant violated: {0}")]
    Board(#[from] BoardError),
}

/// Whether the game still accepts commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Over,
}

/// What one command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Movement and duel counts from the charge.
    pub report: ChargeReport,

    /// Where the new unit went, or `None` if the board was full.
    pub spawned: Option<Position>,

    /// True if this command ended the game.
    pub game_over: bool,
}

/// A game session over a single board.
#[derive(Clone, Debug, Serialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    status: GameStatus,
    round: u32,
}

impl Game {
    /// Start a game: empty board plus the initial spawn.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let mut board = Board::new(config.board_size());
        spawn(&mut board)?;

        log::info!("new {}x{} game", config.board_size(), config.board_size());

        Ok(Self {
            config,
            board,
            status: GameStatus::InProgress,
            round: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Commands applied so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Apply one directional command.
    pub fn command(&mut self, direction: Direction) -> Result<RoundOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let report = charge(&mut self.board, direction)?;
        let spawned = spawn(&mut self.board)?;
        let game_over = is_game_over(&self.board);

        self.round += 1;
        if game_over {
            self.status = GameStatus::Over;
        }

        log::debug!(
            "round {}: {} -> passes={} moves={} duels={} halts={} spawned={:?} units={}",
            self.round,
            direction,
            report.passes,
            report.moves,
            report.duels,
            report.halts,
            spawned,
            self.board.unit_count()
        );
        if game_over {
            log::info!("game over after {} rounds", self.round);
        }

        Ok(RoundOutcome {
            report,
            spawned,
            game_over,
        })
    }
}
