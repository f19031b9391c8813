//! # samurai-charge
//!
//! A deterministic, turn-based grid combat simulation.
//!
//! An N×N board holds power-valued units ("samurai"). Each command names a
//! direction; every unit charges that way until blocked, equal-power units
//! meeting a stationary partner merge in a duel, and one new unit spawns
//! once the board settles. The game ends when the board is full and no
//! direction could produce another duel.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: no randomness anywhere. Spawn placement, scan
//!    order, and duel resolution are fixed policies.
//!
//! 2. **Owned grid**: the board is flat owned storage indexed by
//!    `(row, col)`. Units carry no identity beyond their cell.
//!
//! 3. **Sequential simultaneity**: units appear to move together because
//!    each pass visits them leading-edge first.
//!
//! ## Modules
//!
//! - `core`: positions, directions, units, configuration, errors
//! - `board`: the grid and the spawner
//! - `rules`: charge engine, collision resolver, terminal-state oracle
//! - `game`: round sequencing, rendering, and the input loop
//!
//! ## Example
//!
//! ```
//! use samurai_charge::{Direction, Game, GameConfig, Position};
//!
//! let mut game = Game::new(GameConfig::new(2).unwrap()).unwrap();
//! game.command(Direction::East).unwrap();
//! let outcome = game.command(Direction::East).unwrap();
//!
//! assert_eq!(outcome.report.duels, 1);
//! assert_eq!(game.board().get(Position::new(1, 1)).map(|u| u.power), Some(2));
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    BoardError, ConfigError, Direction, GameConfig, Motion, ParseDirectionError, Position, Unit,
};

pub use crate::board::{spawn, Board};

pub use crate::rules::{
    can_increase_power, charge, is_game_over, resolve_collision, ChargeReport, CollisionOutcome,
};

pub use crate::game::{run_session, Game, GameError, GameStatus, RoundOutcome, SessionEnd};
