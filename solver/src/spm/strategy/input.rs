use crate::game::{Game, VertexId};
use crate::spm::state::SpmState;

use super::{LiftStrategy, Next};

/// Cycles through a fixed order forever.
pub struct InputOrder {
    order: Vec<VertexId>,
    cursor: usize,
}

impl InputOrder {
    pub fn new(game: &Game) -> Self {
        Self::with_order(game.vertices().collect())
    }

    pub fn with_order(order: Vec<VertexId>) -> Self {
        InputOrder { order, cursor: 0 }
    }

    pub fn order(&self) -> &[VertexId] {
        &self.order
    }
}

impl LiftStrategy for InputOrder {
    fn next_vertex(&mut self, _: &mut SpmState) -> Next {
        let Some(&v) = self.order.get(self.cursor) else {
            return Next::Exhausted;
        };
        self.cursor = (self.cursor + 1) % self.order.len();
        Next::Vertex(v)
    }
}
