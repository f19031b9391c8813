//! Text rendering of a board.
//!
//! One `row,col: power` line per cell in row-major order (power 0 for an
//! empty cell), a `---` line between rows, and a closing `=====` line.
//!
//! ```text
//! 0,0: 0
//! 0,1: 0
//! ---
//! 1,0: 1
//! 1,1: 2
//! =====
//! ```

use std::fmt;

use crate::board::Board;

/// Separator printed between rows.
pub const ROW_SEPARATOR: &str = "---";

/// Delimiter printed after the last row.
pub const BOARD_DELIMITER: &str = "=====";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        for pos in self.positions() {
            let power = self.get(pos).map_or(0, |u| u.power);
            writeln!(f, "{}: {}", pos, power)?;

            if pos.col == size - 1 && pos.row < size - 1 {
                writeln!(f, "{}", ROW_SEPARATOR)?;
            }
        }
        writeln!(f, "{}", BOARD_DELIMITER)
    }
}

/// Render `board` in the framing described in the module docs.
#[must_use]
pub fn render(board: &Board) -> String {
    board.to_string()
}
