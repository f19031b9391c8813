//! Game rules: movement, duels, and the end condition.
//!
//! - `charge`: resolves one directional command to a settled board
//! - `resolve_collision`: duel-or-halt when a charger meets another unit
//! - `is_game_over`: whether any future command could still merge units
//!
//! The board is owned by `charge` for the whole convergence loop; nothing
//! else reads or mutates it until the command has settled.

mod charge;
mod collision;
mod oracle;

pub use charge::{begin_round, charge, scan_order, ChargeReport};
pub use collision::{resolve_collision, CollisionOutcome};
pub use oracle::{can_increase_power, is_game_over};
