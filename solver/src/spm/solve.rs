use tracing::{debug, trace};

use crate::game::{Game, Player, VertexId};
use crate::index::IndexedVec;

use super::lift::lift;
use super::state::SpmState;
use super::strategy::{LiftStrategy, Next, Strategy, StrategyKind, RANDOM_SEED};
use super::tuple::{Bounds, ProgressTuple};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveOptions {
    pub strategy: StrategyKind,
    /// Seed of [`StrategyKind::Random`].
    pub seed: u64,
    /// Stop after this many lifts, even if not solved yet.
    pub max_lifts: Option<u64>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions { strategy: StrategyKind::Input, seed: RANDOM_SEED, max_lifts: None }
    }
}

/// Why the lifting loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Every vertex was marked stable.
    Stable,
    /// The strategy had no more vertices to offer.
    Exhausted,
    /// The lift cap was reached first; the result is not a fixpoint.
    LiftLimit,
}

#[derive(Clone, Debug)]
pub struct Solution {
    tuples: IndexedVec<VertexId, ProgressTuple>,
    lifts: u64,
    termination: Termination,
}

impl Solution {
    /// Odd wins exactly from the vertices whose measure reached top.
    pub fn winner_of(&self, v: VertexId) -> Player {
        match self.tuples[v].is_top() {
            true => Player::Odd,
            false => Player::Even,
        }
    }

    pub fn winning_region(&self, player: Player) -> impl Iterator<Item = VertexId> + '_ {
        self.tuples.indexes().filter(move |&v| self.winner_of(v) == player)
    }

    pub fn tuple_of(&self, v: VertexId) -> &ProgressTuple {
        &self.tuples[v]
    }

    pub fn tuples(&self) -> &IndexedVec<VertexId, ProgressTuple> {
        &self.tuples
    }

    pub fn lifts(&self) -> u64 {
        self.lifts
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }
}

/// Solves `game` with the configured strategy.
pub fn solve(game: &Game, options: &SolveOptions) -> Solution {
    let bounds = Bounds::for_game(game);
    let strategy = Strategy::new(options.strategy, game, options.seed);

    debug!(
        strategy = %options.strategy,
        vertices = game.vertex_count(),
        max_priority = game.max_priority(),
        "solving parity game"
    );

    Solver::new(game, &bounds).run(strategy, options.max_lifts)
}

pub struct Solver<'a> {
    game: &'a Game,
    bounds: &'a Bounds,
    state: SpmState,
    lifts: u64,
}

impl<'a> Solver<'a> {
    pub fn new(game: &'a Game, bounds: &'a Bounds) -> Self {
        Solver { game, bounds, state: SpmState::new(game, bounds), lifts: 0 }
    }

    pub fn state(&self) -> &SpmState {
        &self.state
    }

    pub fn lifts(&self) -> u64 {
        self.lifts
    }

    /// Lifts `v` once and returns whether its tuple changed.
    ///
    /// On a change `v` and its predecessors that are not at top lose their
    /// stable mark, so that "all stable" always means a fixpoint.
    pub fn step(&mut self, v: VertexId, strategy: &mut impl LiftStrategy) -> bool {
        let new = lift(self.game, self.bounds, self.state.tuples(), v);
        self.lifts += 1;

        let old = self.state.tuple(v);
        debug_assert!(new >= *old, "lift of {v} decreased {old} to {new}");

        if new == *old {
            self.state.mark_stable(v);
            return false;
        }

        trace!(vertex = %v, from = %old, to = %new, "lifted");

        self.state.set_tuple(v, new);
        self.state.mark_unstable(v);
        for u in self.game.predecessors_of(v) {
            if !self.state.tuple(u).is_top() {
                self.state.mark_unstable(u);
            }
        }

        strategy.was_lifted(v, &self.state);
        true
    }

    pub fn run(mut self, mut strategy: impl LiftStrategy, max_lifts: Option<u64>) -> Solution {
        let termination = loop {
            if self.state.all_stable() {
                break Termination::Stable;
            }
            if max_lifts.is_some_and(|max| self.lifts >= max) {
                break Termination::LiftLimit;
            }

            match strategy.next_vertex(&mut self.state) {
                Next::Vertex(v) => {
                    self.step(v, &mut strategy);
                }
                Next::Exhausted => break Termination::Exhausted,
            }
        };

        if termination == Termination::Exhausted && !self.state.all_stable() {
            // Vertices still marked unstable only changed themselves; none of
            // their successors moved afterwards, so they are at a fixpoint.
            debug!(
                unstable = self.state.unstable_count(),
                "worklist exhausted before all vertices were marked stable"
            );
        }

        debug!(lifts = self.lifts, ?termination, "solved");

        Solution { tuples: self.state.into_tuples(), lifts: self.lifts, termination }
    }
}
