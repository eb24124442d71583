use crate::game::{Game, Player, VertexId};
use crate::index::IndexedVec;

use super::tuple::{Bounds, ProgressTuple};

/// The tuple `v` would get by moving to its successor `w`.
///
/// Copies the part of `w`'s tuple at least as relevant as `v`'s priority and,
/// if that priority is odd, counts one more visit to it.
pub fn prog(
    game: &Game,
    bounds: &Bounds,
    tuples: &IndexedVec<VertexId, ProgressTuple>,
    v: VertexId,
    w: VertexId,
) -> ProgressTuple {
    let priority = game.priority_of(v);
    let end = bounds.position(priority) + 1;
    let succ = &tuples[w];

    let mut m = ProgressTuple::empty(bounds);
    m.set_top(succ.is_top());
    m.set_range(0, end, succ.get_range(0, end));

    if priority % 2 == 1 {
        m.increment(end - 1, bounds);
    }

    m
}

/// Recomputes the tuple of `v` from its successors. Never returns less than
/// the current tuple of `v`.
pub fn lift(
    game: &Game,
    bounds: &Bounds,
    tuples: &IndexedVec<VertexId, ProgressTuple>,
    v: VertexId,
) -> ProgressTuple {
    let progs = game.successors_of(v).map(|w| prog(game, bounds, tuples, v, w));

    let best = match game.owner_of(v) {
        // Even picks the smallest measure; no successors leaves it at top.
        Player::Even => progs.fold(ProgressTuple::top(bounds), |min, m| match m < min {
            true => m,
            false => min,
        }),
        // Odd picks the largest measure.
        Player::Odd => progs.fold(ProgressTuple::empty(bounds), |max, m| match m > max {
            true => m,
            false => max,
        }),
    };

    let old = &tuples[v];
    match *old > best {
        true => old.clone(),
        false => best,
    }
}
