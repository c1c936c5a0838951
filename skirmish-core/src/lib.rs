//! SKIRMISH Core - joint-action adversarial search
//!
//! This crate decides the best simultaneous move/attack assignment for a
//! squad of footmen closing on archers over a bounded grid:
//! - Board geometry (bounded grid, obstacles, distance metrics)
//! - Units and sides captured from a simulation snapshot
//! - Game state with joint-action transition generation
//! - Average-minimum-distance evaluation with a decisive attack sentinel
//! - Depth-limited alpha-beta planner with utility-ordered children

pub mod ai;
pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod snapshot;
pub mod units;

// Re-exports for convenient access
pub use ai::{AlphaBetaPlanner, Plan, SearchStats};
pub use board::{Board, Direction, Pos, CARDINALS};
pub use error::{Error, Result};
pub use eval::{order_children, utility, DECISIVE_VALUE};
pub use game::{Child, GameState, JointAction, UnitAction};
pub use snapshot::Snapshot;
pub use units::{Side, Unit, UnitId};
