//! Game state and joint-action generation

use crate::board::{Board, Direction, CARDINALS};
use crate::error::{Error, Result};
use crate::eval::{self, DECISIVE_VALUE};
use crate::units::{Unit, UnitId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// ACTIONS
// ============================================================================

/// One primitive action for a single unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitAction {
    Move(Direction),
    Attack(UnitId),
}

/// Simultaneous assignment of one action per footman for a single ply.
/// Keys are unique; one entry per footman.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JointAction(FxHashMap<UnitId, UnitAction>);

impl JointAction {
    pub fn get(&self, id: UnitId) -> Option<&UnitAction> {
        self.0.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UnitId, &UnitAction)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn set(&mut self, id: UnitId, action: UnitAction) {
        self.0.insert(id, action);
    }
}

/// A joint action paired with the state it produces. The unit of exchange
/// between the transition generator and the search driver.
#[derive(Clone, Debug)]
pub struct Child {
    pub action: JointAction,
    pub state: GameState,
}

// ============================================================================
// GAME STATE
// ============================================================================

/// A node in the search tree: footman positions over a shared board and a
/// fixed archer roster, with the state's scalar utility.
///
/// Immutable after construction. Sibling subtrees share only the board and
/// the archer roster, both behind `Arc`; each node owns its footman table.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Arc<Board>,
    footmen: Vec<Unit>,
    archers: Arc<[Unit]>,
    utility: f64,
}

impl GameState {
    /// Build the initial search state. Utility is computed eagerly.
    ///
    /// Positions are assumed validated (the snapshot layer checks bounds);
    /// roster emptiness is re-checked here because evaluation is undefined
    /// without both sides.
    pub fn new(board: Arc<Board>, footmen: Vec<Unit>, archers: Arc<[Unit]>) -> Result<Self> {
        if footmen.is_empty() {
            return Err(Error::NoUnits);
        }
        if archers.is_empty() {
            return Err(Error::NoOpponents);
        }
        let utility = eval::distance_utility(&footmen, &archers);
        Ok(Self {
            board,
            footmen,
            archers,
            utility,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn utility(&self) -> f64 {
        self.utility
    }

    pub fn footmen(&self) -> &[Unit] {
        &self.footmen
    }

    pub fn archers(&self) -> &[Unit] {
        &self.archers
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Human-readable footman coordinate dump
    pub fn describe_positions(&self) -> String {
        let parts: Vec<String> = self
            .footmen
            .iter()
            .map(|u| format!("footman {} at ({}, {})", u.id, u.pos.x, u.pos.y))
            .collect();
        parts.join("; ")
    }

    // ========================================================================
    // TRANSITION GENERATION
    // ========================================================================

    /// Generate every legal joint action and its resulting state.
    ///
    /// One joint candidate per assignment of a cardinal direction to each
    /// footman (4^N candidates; the first footman's direction varies
    /// slowest). Per footman, an archer within attack range of the CURRENT
    /// position overrides the move with an attack on the first such archer
    /// in roster order. A candidate is emitted only if every footman's
    /// stepped square is in bounds, attacking or not: joint actions are
    /// atomic, so one unit's illegal square rejects the whole candidate.
    pub fn children(&self) -> Vec<Child> {
        let n = self.footmen.len();
        let combos = 4usize.pow(n as u32);
        let mut children = Vec::with_capacity(combos);

        'combo: for code in 0..combos {
            let mut action = JointAction::default();
            let mut next = Vec::with_capacity(n);
            let mut any_attack = false;

            for (i, unit) in self.footmen.iter().enumerate() {
                let digit = (code / 4usize.pow((n - 1 - i) as u32)) % 4;
                let dir = CARDINALS[digit];
                let candidate = unit.pos.step(dir);

                if !self.board.in_bounds(candidate) {
                    continue 'combo;
                }

                match self.target_in_range(unit) {
                    Some(target) => {
                        any_attack = true;
                        action.set(unit.id, UnitAction::Attack(target));
                        // Attackers hold their square
                        next.push(*unit);
                    }
                    None => {
                        action.set(unit.id, UnitAction::Move(dir));
                        next.push(unit.at(candidate));
                    }
                }
            }

            // An attack anywhere in the pair dominates every move-only child
            let utility = if any_attack {
                DECISIVE_VALUE
            } else {
                eval::distance_utility(&next, &self.archers)
            };

            children.push(Child {
                action,
                state: GameState {
                    board: Arc::clone(&self.board),
                    footmen: next,
                    archers: Arc::clone(&self.archers),
                    utility,
                },
            });
        }

        children
    }

    /// First archer in roster order within this unit's attack radius
    fn target_in_range(&self, unit: &Unit) -> Option<UnitId> {
        self.archers
            .iter()
            .find(|a| unit.can_reach(a.pos))
            .map(|a| a.id)
    }
}

// ============================================================================
// TESTS
// ============================================================================
