//! Board storage and unit placement.
//!
//! - `Board`: the N×N grid that owns every unit
//! - `spawn`: introduces one new unit per round

mod grid;
mod spawner;

pub use grid::Board;
pub use spawner::{spawn, spawn_slot};
