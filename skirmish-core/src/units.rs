//! Unit identity, sides, and combat parameters

use crate::board::Pos;
use serde::{Deserialize, Serialize};

/// Opaque unit identifier, assigned by the simulation
pub type UnitId = u32;

/// Which player a unit fights for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Melee, the maximizing player
    Footman,
    /// Ranged, the minimizing player
    Archer,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Footman => Side::Archer,
            Side::Archer => Side::Footman,
        }
    }
}

/// A unit as captured from the simulation snapshot.
///
/// Immutable within one search call; a transition produces a new record
/// with an updated position rather than mutating a shared one. The combat
/// parameters are read once at snapshot time; damage and health tracking
/// stay in the live simulation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub side: Side,
    pub pos: Pos,
    /// Chebyshev radius inside which this unit can attack
    #[serde(default = "default_attack_range")]
    pub attack_range: i32,
    #[serde(default)]
    pub attack_power: i32,
    #[serde(default)]
    pub max_health: i32,
}

fn default_attack_range() -> i32 {
    1
}

impl Unit {
    /// Same unit, one cell over
    pub fn at(&self, pos: Pos) -> Unit {
        Unit { pos, ..*self }
    }

    /// True iff `target` is inside this unit's attack radius
    pub fn can_reach(&self, target: Pos) -> bool {
        self.pos.chebyshev(target) <= self.attack_range
    }
}
