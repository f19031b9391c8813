//! Game sessions: round sequencing, rendering, and the input loop.

mod render;
mod session;
mod state;

pub use render::{render, BOARD_DELIMITER, ROW_SEPARATOR};
pub use session::{run_session, SessionEnd, SessionError, DONE_LINE, GAME_OVER_LINE};
pub use state::{Game, GameError, GameStatus, RoundOutcome};
