//! The read-eval loop: one command per input line, one board per round.
//!
//! Input handling:
//! - each line is trimmed and matched case-insensitively
//! - blank and unrecognized lines are ignored, including lines that are
//!   not valid UTF-8
//! - end of input prints `Done`
//!
//! The board is printed once before the first command and again after
//! every accepted command. If a command ends the game, `Game over` is
//! printed and the remaining input is left unread.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::core::Direction;

use super::state::{Game, GameError};

/// Printed when a command ends the game.
pub const GAME_OVER_LINE: &str = "Game over";

/// Printed when input runs out first.
pub const DONE_LINE: &str = "Done";

/// How a session finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver,
    EndOfInput,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Drive `game` from `input`, writing boards and status lines to `output`.
pub fn run_session<R, W>(
    game: &mut Game,
    mut input: R,
    mut output: W,
) -> Result<SessionEnd, SessionError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", game.board())?;
    output.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let token = line.trim();
        if token.is_empty() {
            continue;
        }

        let direction = match token.parse::<Direction>() {
            Ok(direction) => direction,
            Err(err) => {
                log::debug!("{}", err);
                continue;
            }
        };

        let outcome = game.command(direction)?;
        write!(output, "{}", game.board())?;

        if outcome.game_over {
            writeln!(output, "{}", GAME_OVER_LINE)?;
            output.flush()?;
            return Ok(SessionEnd::GameOver);
        }
        output.flush()?;
    }

    writeln!(output, "{}", DONE_LINE)?;
    output.flush()?;
    Ok(SessionEnd::EndOfInput)
}
