//! Alpha-beta joint-action planner

use crate::error::{Error, Result};
use crate::eval::order_children;
use crate::game::{GameState, JointAction};
use crate::snapshot::Snapshot;

// ============================================================================
// SEARCH RESULT
// ============================================================================

/// Node and cutoff counters for one plan call
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// States the search touched (root included)
    pub nodes: u64,
    /// Alpha/beta cutoffs taken
    pub cutoffs: u64,
}

/// Outcome of a plan call: the chosen joint action and the value backed up
/// from the subtree behind it
#[derive(Clone, Debug)]
pub struct Plan {
    pub action: JointAction,
    pub value: f64,
    pub stats: SearchStats,
}

// ============================================================================
// PLANNER
// ============================================================================

/// Depth-limited alpha-beta minimax over alternating maximizing and
/// minimizing plies. The depth in plies is the planner's only tunable.
#[derive(Clone, Copy, Debug)]
pub struct AlphaBetaPlanner {
    plies: u32,
}

impl AlphaBetaPlanner {
    /// Depth zero would return the current state without searching, so it is
    /// rejected here rather than silently planning nothing.
    pub fn new(plies: u32) -> Result<Self> {
        if plies == 0 {
            return Err(Error::InvalidDepth { plies });
        }
        Ok(Self { plies })
    }

    pub fn plies(&self) -> u32 {
        self.plies
    }

    /// Choose the footmen's joint action for this turn.
    ///
    /// Root is a maximizing ply over the ordered children; each child's
    /// value is backed up by the recursion below. Ties keep the first
    /// ordered child, so repeated plans on the same state are identical.
    pub fn plan(&self, state: &GameState) -> Result<Plan> {
        let mut stats = SearchStats { nodes: 1, cutoffs: 0 };

        let mut children = state.children();
        if children.is_empty() {
            return Err(Error::NoLegalActions);
        }
        order_children(&mut children);

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best: Option<(f64, JointAction)> = None;

        for child in children {
            let value = alpha_beta(&child.state, self.plies - 1, alpha, beta, false, &mut stats);
            let improved = match &best {
                None => true,
                Some((v, _)) => value > *v,
            };
            if improved {
                best = Some((value, child.action));
            }
            alpha = alpha.max(value);
        }

        // children was non-empty, so the first iteration always set best
        let (value, action) = match best {
            Some(b) => b,
            None => return Err(Error::NoLegalActions),
        };

        tracing::debug!(
            "planned {} plies: value={:.3}, nodes={}, cutoffs={}",
            self.plies,
            value,
            stats.nodes,
            stats.cutoffs
        );

        Ok(Plan { action, value, stats })
    }

    /// One-call entry point: snapshot in, joint action out
    pub fn plan_snapshot(&self, snapshot: &Snapshot) -> Result<Plan> {
        let state = snapshot.initial_state()?;
        self.plan(&state)
    }
}

// ============================================================================
// ALPHA-BETA RECURSION
// ============================================================================

/// Backed-up value of `state` searched to `depth` further plies.
///
/// Terminal when the depth budget is spent or the state has no children; in
/// both cases the state's own utility stands. Pruning only skips subtrees,
/// never changes the value chosen for a fixed child ordering.
fn alpha_beta(
    state: &GameState,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    stats: &mut SearchStats,
) -> f64 {
    stats.nodes += 1;

    if depth == 0 {
        return state.utility();
    }

    let mut children = state.children();
    if children.is_empty() {
        return state.utility();
    }
    order_children(&mut children);

    if maximizing {
        let mut v = f64::NEG_INFINITY;
        for child in &children {
            v = v.max(alpha_beta(&child.state, depth - 1, alpha, beta, false, stats));
            alpha = alpha.max(v);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        v
    } else {
        let mut v = f64::INFINITY;
        for child in &children {
            v = v.min(alpha_beta(&child.state, depth - 1, alpha, beta, true, stats));
            beta = beta.min(v);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        v
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Direction, Pos};
    use crate::eval::DECISIVE_VALUE;
    use crate::game::UnitAction;
    use crate::units::{Side, Unit, UnitId};
    use std::sync::Arc;

    fn footman(id: UnitId, x: i32, y: i32) -> Unit {
        Unit {
            id,
            side: Side::Footman,
            pos: Pos::new(x, y),
            attack_range: 1,
            attack_power: 10,
            max_health: 160,
        }
    }

    fn archer(id: UnitId, x: i32, y: i32) -> Unit {
        Unit {
            id,
            side: Side::Archer,
            pos: Pos::new(x, y),
            attack_range: 8,
            attack_power: 6,
            max_health: 50,
        }
    }

    fn state(board: Board, footmen: Vec<Unit>, archers: Vec<Unit>) -> GameState {
        GameState::new(Arc::new(board), footmen, archers.into()).unwrap()
    }

    /// Exhaustive minimax over the same ordered tree, for equivalence checks
    fn minimax_value(state: &GameState, depth: u32, maximizing: bool, nodes: &mut u64) -> f64 {
        *nodes += 1;
        if depth == 0 {
            return state.utility();
        }
        let mut children = state.children();
        if children.is_empty() {
            return state.utility();
        }
        order_children(&mut children);

        let values = children
            .iter()
            .map(|c| minimax_value(&c.state, depth - 1, !maximizing, nodes));
        if maximizing {
            values.fold(f64::NEG_INFINITY, f64::max)
        } else {
            values.fold(f64::INFINITY, f64::min)
        }
    }

    fn minimax_plan(state: &GameState, plies: u32) -> (JointAction, f64, u64) {
        let mut children = state.children();
        order_children(&mut children);
        let mut nodes = 1;
        let mut best: Option<(f64, JointAction)> = None;
        for child in children {
            let v = minimax_value(&child.state, plies - 1, false, &mut nodes);
            if best.as_ref().map_or(true, |(b, _)| v > *b) {
                best = Some((v, child.action));
            }
        }
        let (value, action) = best.unwrap();
        (action, value, nodes)
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert!(matches!(
            AlphaBetaPlanner::new(0),
            Err(Error::InvalidDepth { plies: 0 })
        ));
        assert!(AlphaBetaPlanner::new(1).is_ok());
    }

    #[test]
    fn test_depth_one_closes_distance() {
        // Footman at (2,2), archer at (5,5): the best single cardinal step
        // reaches (2,3) or (3,2), both at distance sqrt(13). South is
        // generated before East and wins the tie.
        let s = state(Board::open(10, 10), vec![footman(0, 2, 2)], vec![archer(10, 5, 5)]);
        let planner = AlphaBetaPlanner::new(1).unwrap();
        let plan = planner.plan(&s).unwrap();

        assert_eq!(plan.action.get(0), Some(&UnitAction::Move(Direction::South)));
        let expected = 100.0 / 13.0f64.sqrt();
        assert!((plan.value - expected).abs() < 1e-12);
    }

    #[test]
    fn test_adjacent_archer_is_attacked() {
        // Chebyshev distance 1: every child is an attack, backed up as the
        // decisive value
        let s = state(Board::open(10, 10), vec![footman(0, 4, 4)], vec![archer(10, 5, 5)]);
        let planner = AlphaBetaPlanner::new(1).unwrap();
        let plan = planner.plan(&s).unwrap();

        assert_eq!(plan.action.get(0), Some(&UnitAction::Attack(10)));
        assert_eq!(plan.value, DECISIVE_VALUE);
    }

    #[test]
    fn test_pruning_matches_exhaustive_minimax() {
        let s = state(
            Board::open(10, 10),
            vec![footman(0, 2, 2), footman(1, 8, 3)],
            vec![archer(10, 5, 5), archer(11, 1, 8)],
        );

        for plies in [1, 2, 3] {
            let planner = AlphaBetaPlanner::new(plies).unwrap();
            let plan = planner.plan(&s).unwrap();
            let (action, value, nodes) = minimax_plan(&s, plies);

            assert_eq!(plan.action, action, "action diverged at {} plies", plies);
            assert_eq!(plan.value, value, "value diverged at {} plies", plies);
            assert!(
                plan.stats.nodes <= nodes,
                "pruning visited {} nodes, exhaustive visited {}",
                plan.stats.nodes,
                nodes
            );
        }
    }

    #[test]
    fn test_plan_is_deterministic() {
        let s = state(
            Board::open(10, 10),
            vec![footman(0, 2, 2), footman(1, 7, 7)],
            vec![archer(10, 5, 5)],
        );
        let planner = AlphaBetaPlanner::new(2).unwrap();

        let first = planner.plan(&s).unwrap();
        for _ in 0..5 {
            let again = planner.plan(&s).unwrap();
            assert_eq!(first.action, again.action);
            assert_eq!(first.value, again.value);
        }
    }

    #[test]
    fn test_boxed_in_root_fails() {
        let board = Board::new(
            10,
            10,
            [Pos::new(2, 1), Pos::new(2, 3), Pos::new(1, 2), Pos::new(3, 2)],
        );
        let s = state(board, vec![footman(0, 2, 2)], vec![archer(10, 7, 7)]);
        let planner = AlphaBetaPlanner::new(2).unwrap();
        assert!(matches!(planner.plan(&s), Err(Error::NoLegalActions)));
    }

    #[test]
    fn test_deeper_search_still_legal() {
        let s = state(
            Board::open(10, 10),
            vec![footman(0, 1, 1), footman(1, 9, 9)],
            vec![archer(10, 5, 5)],
        );
        let planner = AlphaBetaPlanner::new(4).unwrap();
        let plan = planner.plan(&s).unwrap();
        assert_eq!(plan.action.len(), 2);
        assert!(plan.stats.nodes > 1);
    }
}
