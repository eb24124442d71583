use std::collections::VecDeque;

use crate::game::{Game, VertexId};
use crate::index::IndexedVec;
use crate::spm::state::SpmState;

use super::{LiftStrategy, Next};

/// Worklist of vertices whose successors changed since they were last lifted.
pub struct Backtrack<'a> {
    game: &'a Game,
    queue: VecDeque<VertexId>,
    enqueued: IndexedVec<VertexId, bool>,
}

impl<'a> Backtrack<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self::with_order(game, game.vertices())
    }

    pub(super) fn with_order(game: &'a Game, order: impl IntoIterator<Item = VertexId>) -> Self {
        let queue = order.into_iter().collect::<VecDeque<_>>();
        let mut enqueued = IndexedVec::from_elem(false, game.vertex_count());
        for &v in &queue {
            enqueued[v] = true;
        }
        Backtrack { game, queue, enqueued }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_enqueued(&self, v: VertexId) -> bool {
        self.enqueued[v]
    }

    pub(super) fn pop(&mut self) -> Option<VertexId> {
        let v = self.queue.pop_front()?;
        self.enqueued[v] = false;
        Some(v)
    }

    /// Predecessors at top cannot change anymore, so they are skipped.
    pub(super) fn enqueue_predecessors(&mut self, v: VertexId, state: &SpmState) {
        for u in self.game.predecessors_of(v) {
            if !self.enqueued[u] && !state.tuple(u).is_top() {
                self.enqueued[u] = true;
                self.queue.push_back(u);
            }
        }
    }
}

impl LiftStrategy for Backtrack<'_> {
    fn next_vertex(&mut self, _: &mut SpmState) -> Next {
        match self.pop() {
            Some(v) => Next::Vertex(v),
            None => Next::Exhausted,
        }
    }

    fn was_lifted(&mut self, v: VertexId, state: &SpmState) {
        self.enqueue_predecessors(v, state);
    }
}
