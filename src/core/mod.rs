//! Core value types: positions, directions, units, configuration, errors.
//!
//! These are the building blocks shared by the board, the rules, and the
//! game session. None of them hold references to each other; a unit is
//! identified only by the cell it occupies.

pub mod position;
pub mod unit;
pub mod config;
pub mod error;

pub use position::{Direction, Position};
pub use unit::{Motion, Unit};
pub use config::{GameConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::{BoardError, ConfigError, ParseDirectionError};
