use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game::{Game, VertexId};
use crate::spm::state::SpmState;

use super::{InputOrder, LiftStrategy, Next};

/// Like [`InputOrder`], over a seeded shuffle of the vertices.
pub struct RandomOrder(InputOrder);

impl RandomOrder {
    pub fn new(game: &Game, seed: u64) -> Self {
        let mut order = game.vertices().collect::<Vec<_>>();
        order.shuffle(&mut StdRng::seed_from_u64(seed));
        RandomOrder(InputOrder::with_order(order))
    }

    pub fn order(&self) -> &[VertexId] {
        self.0.order()
    }
}

impl LiftStrategy for RandomOrder {
    fn next_vertex(&mut self, state: &mut SpmState) -> Next {
        self.0.next_vertex(state)
    }
}
