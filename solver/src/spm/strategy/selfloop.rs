use tracing::trace;

use crate::game::{Game, VertexId};
use crate::spm::state::SpmState;

use super::{self_loops_first, LiftStrategy, Next};

/// Cycles through the vertices with an odd self-loop first, skipping those
/// already at top: lifting them again cannot change anything.
pub struct SelfLoop {
    order: Vec<VertexId>,
    loops: usize,
    cursor: usize,
}

impl SelfLoop {
    pub fn new(game: &Game) -> Self {
        let (order, loops) = self_loops_first(game);
        SelfLoop { order, loops, cursor: 0 }
    }

    pub fn order(&self) -> &[VertexId] {
        &self.order
    }
}

impl LiftStrategy for SelfLoop {
    fn next_vertex(&mut self, state: &mut SpmState) -> Next {
        // At most one full cycle, in case every vertex gets skipped.
        for _ in 0..self.order.len() {
            let i = self.cursor;
            self.cursor = (i + 1) % self.order.len();

            let v = self.order[i];
            if i < self.loops && state.tuple(v).is_top() {
                trace!(vertex = %v, "skipping self-loop vertex at top");
                state.mark_stable(v);
                continue;
            }

            return Next::Vertex(v);
        }

        Next::Exhausted
    }
}
