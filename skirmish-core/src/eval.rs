//! Heuristic evaluation and child ordering

use crate::error::{Error, Result};
use crate::game::Child;
use crate::units::Unit;

/// Utility of a state reached through an attack. Distance utilities top out
/// at 100 (the closest non-overlapping cells are one apart), so any value
/// above that keeps attack children strictly ahead of every move child.
pub const DECISIVE_VALUE: f64 = 100_000.0;

/// Average-minimum-distance utility of a footman/archer configuration.
///
/// Per footman, the minimum Euclidean distance to any archer; the utility is
/// `100 / average`, so closing on the nearest archer raises it. Errors when
/// either roster is empty rather than producing infinity or NaN.
pub fn utility(footmen: &[Unit], archers: &[Unit]) -> Result<f64> {
    if archers.is_empty() {
        return Err(Error::NoOpponents);
    }
    if footmen.is_empty() {
        return Err(Error::NoUnits);
    }
    Ok(distance_utility(footmen, archers))
}

/// Unguarded form for callers that hold the non-empty-roster invariant
pub(crate) fn distance_utility(footmen: &[Unit], archers: &[Unit]) -> f64 {
    debug_assert!(!footmen.is_empty() && !archers.is_empty());

    let total: f64 = footmen
        .iter()
        .map(|f| {
            archers
                .iter()
                .map(|a| f.pos.euclidean(a.pos))
                .fold(f64::INFINITY, f64::min)
        })
        .sum();

    100.0 / (total / footmen.len() as f64)
}

/// Descending stable sort by resulting-state utility.
///
/// Visiting high-utility children first tightens alpha/beta bounds early;
/// ties keep generation order so repeated searches pick identical actions.
pub fn order_children(children: &mut [Child]) {
    children.sort_by(|a, b| {
        b.state
            .utility()
            .partial_cmp(&a.state.utility())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
