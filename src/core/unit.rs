//! Samurai units and their per-command motion state.
//!
//! A unit is a plain value: a power level, a motion state, and a flag
//! recording whether it already won a duel during the current command.
//!
//! ## Lifecycle
//!
//! ```text
//!             command issued
//! Stationary ───────────────▶ Charging ──blocked / edge──▶ Stationary
//!     ▲                          │
//!     │ next command             │ won duel (power + 1)
//!     └──────── Resting ◀────────┘
//! ```
//!
//! Power never decreases. A unit leaves the board only by losing a duel.

use serde::{Deserialize, Serialize};

/// Motion state of a unit within the current command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Motion {
    /// At rest; will charge on the next command and can be dueled.
    #[default]
    Stationary,
    /// Being moved by the current command.
    Charging,
    /// Won a duel this command; sits out until the next one.
    Resting,
}

/// A power-valued occupant of one board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    /// Power level (starts at 1).
    pub power: u32,

    /// Current motion state.
    pub motion: Motion,

    /// Set when this unit wins a duel; cleared at the start of each command.
    pub dueled_this_round: bool,
}

impl Unit {
    /// Power of a freshly spawned unit.
    pub const SPAWN_POWER: u32 = 1;

    /// Create a unit with the given power, stationary and not yet dueled.
    #[must_use]
    pub const fn new(power: u32) -> Self {
        Self {
            power,
            motion: Motion::Stationary,
            dueled_this_round: false,
        }
    }

    /// A freshly spawned unit.
    #[must_use]
    pub const fn spawned() -> Self {
        Self::new(Self::SPAWN_POWER)
    }

    #[must_use]
    pub fn is_stationary(&self) -> bool {
        self.motion == Motion::Stationary
    }

    #[must_use]
    pub fn is_charging(&self) -> bool {
        self.motion == Motion::Charging
    }

    #[must_use]
    pub fn is_resting(&self) -> bool {
        self.motion == Motion::Resting
    }

    /// Prepare for a new command.
    ///
    /// Resting units become eligible again and every eligible unit starts
    /// charging. The duel flag is cleared.
    pub fn begin_round(&mut self) {
        if self.motion == Motion::Resting {
            self.motion = Motion::Stationary;
        }
        if self.motion == Motion::Stationary {
            self.motion = Motion::Charging;
        }
        self.dueled_this_round = false;
    }

    /// Stop charging without moving.
    pub fn halt(&mut self) {
        self.motion = Motion::Stationary;
    }

    /// Absorb a defeated opponent: gain one power and rest.
    pub fn win_duel(&mut self) {
        self.power += 1;
        self.motion = Motion::Resting;
        self.dueled_this_round = true;
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::spawned()
    }
}
