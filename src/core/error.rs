//! Error types for board access, configuration, and command parsing.

use thiserror::Error;

use super::position::Position;

/// Board contract violations.
///
/// A correctly sequenced charge or spawn never produces these; seeing one
/// means the board's one-unit-per-cell invariant was broken. `Malformed`
/// comes only from deserializing a snapshot with the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell {0} is already occupied")]
    OccupiedCell(Position),
    #[error("cell {0} is empty")]
    EmptyCell(Position),
    #[error("a board of side {size} cannot hold {cells} cells")]
    Malformed { size: usize, cells: usize },
}

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("N must be an integer, got '{0}'")]
    NotAnInteger(String),
    #[error("N must be between {min} and {max}, got {size}")]
    BoardSizeOutOfRange { size: i64, min: usize, max: usize },
}

/// A command token that is not one of `n`, `s`, `w`, `e`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized command '{0}'")]
pub struct ParseDirectionError(pub String);
