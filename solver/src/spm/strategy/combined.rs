use crate::game::{Game, VertexId};
use crate::spm::state::SpmState;

use super::{self_loops_first, Backtrack, LiftStrategy, Next};

/// [`Backtrack`] seeded with the odd self-loop vertices first. Such a vertex
/// is lifted repeatedly until it reaches top before moving on.
pub struct Combined<'a> {
    game: &'a Game,
    worklist: Backtrack<'a>,
    current: Option<VertexId>,
}

impl<'a> Combined<'a> {
    pub fn new(game: &'a Game) -> Self {
        let (order, _) = self_loops_first(game);
        Combined { game, worklist: Backtrack::with_order(game, order), current: None }
    }
}

impl LiftStrategy for Combined<'_> {
    fn next_vertex(&mut self, state: &mut SpmState) -> Next {
        if self.worklist.is_empty() {
            return Next::Exhausted;
        }

        if let Some(v) = self.current {
            if self.game.has_odd_self_loop(v) && !state.tuple(v).is_top() {
                return Next::Vertex(v);
            }
        }

        match self.worklist.pop() {
            Some(v) => {
                self.current = Some(v);
                Next::Vertex(v)
            }
            None => Next::Exhausted,
        }
    }

    fn was_lifted(&mut self, v: VertexId, state: &SpmState) {
        self.worklist.enqueue_predecessors(v, state);
    }
}
