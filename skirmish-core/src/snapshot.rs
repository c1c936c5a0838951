//! Simulation snapshot: the engine's input boundary
//!
//! A `Snapshot` is the read-once view of the live simulation: board extents,
//! obstacle cells, and every unit with its static combat parameters. The
//! engine never re-queries the simulation mid-search; everything it needs is
//! validated here and converted into the initial `GameState`.

use crate::board::{Board, Pos};
use crate::error::{Error, Result};
use crate::game::GameState;
use crate::units::{Side, Unit};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Largest valid x coordinate (bounds are inclusive)
    pub width: i32,
    /// Largest valid y coordinate
    pub height: i32,
    #[serde(default)]
    pub obstacles: Vec<Pos>,
    pub units: Vec<Unit>,
}

impl Snapshot {
    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot = serde_json::from_str(&content)?;
        Ok(snapshot)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate and convert into the initial search state.
    ///
    /// Checks: positive extents, obstacles and units inside the extents,
    /// units off obstacle cells, unique unit ids, one unit per cell, and at
    /// least one unit on each side. Roster order is snapshot order, which
    /// fixes the attack-target and action tie-breaks.
    pub fn initial_state(&self) -> Result<GameState> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::MalformedSnapshot(format!(
                "board extents must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        for obstacle in &self.obstacles {
            if obstacle.x < 0 || obstacle.x > self.width || obstacle.y < 0 || obstacle.y > self.height {
                return Err(Error::MalformedSnapshot(format!(
                    "obstacle at ({}, {}) outside board extents",
                    obstacle.x, obstacle.y
                )));
            }
        }

        let board = Arc::new(Board::new(self.width, self.height, self.obstacles.iter().copied()));

        let mut seen_ids = FxHashSet::default();
        let mut occupied: FxHashMap<Pos, u32> = FxHashMap::default();
        let mut footmen = Vec::new();
        let mut archers = Vec::new();

        for unit in &self.units {
            if !seen_ids.insert(unit.id) {
                return Err(Error::MalformedSnapshot(format!(
                    "duplicate unit id {}",
                    unit.id
                )));
            }
            if !board.in_bounds(unit.pos) {
                return Err(Error::MalformedSnapshot(format!(
                    "unit {} at ({}, {}) out of bounds or on an obstacle",
                    unit.id, unit.pos.x, unit.pos.y
                )));
            }
            if let Some(other) = occupied.insert(unit.pos, unit.id) {
                return Err(Error::MalformedSnapshot(format!(
                    "units {} and {} share cell ({}, {})",
                    other, unit.id, unit.pos.x, unit.pos.y
                )));
            }
            match unit.side {
                Side::Footman => footmen.push(*unit),
                Side::Archer => archers.push(*unit),
            }
        }

        GameState::new(board, footmen, archers.into())
    }
}
