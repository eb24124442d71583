use crate::game::{Game, VertexId};
use crate::index::IndexedVec;

use super::tuple::{Bounds, ProgressTuple};

/// Mutable per-vertex state of one solve: the current tuples and stability marks.
pub struct SpmState {
    tuples: IndexedVec<VertexId, ProgressTuple>,
    stable: IndexedVec<VertexId, bool>,
    unstable: usize,
}

impl SpmState {
    /// Every vertex starts at the empty tuple and unstable.
    pub fn new(game: &Game, bounds: &Bounds) -> Self {
        let n = game.vertex_count();
        SpmState {
            tuples: IndexedVec::from_elem(ProgressTuple::empty(bounds), n),
            stable: IndexedVec::from_elem(false, n),
            unstable: n,
        }
    }

    pub fn tuple(&self, v: VertexId) -> &ProgressTuple {
        &self.tuples[v]
    }

    pub fn tuples(&self) -> &IndexedVec<VertexId, ProgressTuple> {
        &self.tuples
    }

    pub(crate) fn set_tuple(&mut self, v: VertexId, tuple: ProgressTuple) {
        self.tuples[v] = tuple;
    }

    pub(crate) fn into_tuples(self) -> IndexedVec<VertexId, ProgressTuple> {
        self.tuples
    }

    pub fn is_stable(&self, v: VertexId) -> bool {
        self.stable[v]
    }

    pub fn all_stable(&self) -> bool {
        self.unstable == 0
    }

    pub fn unstable_count(&self) -> usize {
        self.unstable
    }

    pub fn mark_stable(&mut self, v: VertexId) {
        if !std::mem::replace(&mut self.stable[v], true) {
            self.unstable -= 1;
        }
    }

    pub fn mark_unstable(&mut self, v: VertexId) {
        if std::mem::replace(&mut self.stable[v], false) {
            self.unstable += 1;
        }
    }
}
