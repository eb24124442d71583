mod backtrack;
mod combined;
mod input;
mod random;
mod selfloop;


use std::fmt;
use std::str::FromStr;

pub use backtrack::Backtrack;
pub use combined::Combined;
pub use input::InputOrder;
pub use random::RandomOrder;
pub use selfloop::SelfLoop;

use crate::game::{Game, VertexId};

use super::state::SpmState;

/// Seed of the random lift order unless configured otherwise.
pub const RANDOM_SEED: u64 = 1234;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Next {
    Vertex(VertexId),
    /// No vertex is pending re-evaluation.
    Exhausted,
}

/// Decides which vertex the solver lifts next.
pub trait LiftStrategy {
    fn next_vertex(&mut self, state: &mut SpmState) -> Next;

    /// Called after lifting `v` changed its tuple, with `state` already updated.
    fn was_lifted(&mut self, _v: VertexId, _state: &SpmState) {}
}

impl<S: LiftStrategy + ?Sized> LiftStrategy for &mut S {
    fn next_vertex(&mut self, state: &mut SpmState) -> Next {
        (**self).next_vertex(state)
    }

    fn was_lifted(&mut self, v: VertexId, state: &SpmState) {
        (**self).was_lifted(v, state)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Input,
    Random,
    Backtrack,
    SelfLoop,
    Combined,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Input,
        StrategyKind::Random,
        StrategyKind::Backtrack,
        StrategyKind::SelfLoop,
        StrategyKind::Combined,
    ];

    /// The selector accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Input => "input",
            StrategyKind::Random => "random",
            StrategyKind::Backtrack => "backtrack",
            StrategyKind::SelfLoop => "selfloop",
            StrategyKind::Combined => "combined",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StrategyKind::Input => "input order",
            StrategyKind::Random => "random order",
            StrategyKind::Backtrack => "backtrack",
            StrategyKind::SelfLoop => "self-loop elimination",
            StrategyKind::Combined => "combined",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown lift strategy `{0}`, expected one of: input, random, backtrack, selfloop, combined")]
    UnknownStrategy(String),
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}

/// One of the built-in strategies, chosen at runtime.
pub enum Strategy<'a> {
    Input(InputOrder),
    Random(RandomOrder),
    Backtrack(Backtrack<'a>),
    SelfLoop(SelfLoop),
    Combined(Combined<'a>),
}

impl<'a> Strategy<'a> {
    pub fn new(kind: StrategyKind, game: &'a Game, seed: u64) -> Self {
        match kind {
            StrategyKind::Input => Strategy::Input(InputOrder::new(game)),
            StrategyKind::Random => Strategy::Random(RandomOrder::new(game, seed)),
            StrategyKind::Backtrack => Strategy::Backtrack(Backtrack::new(game)),
            StrategyKind::SelfLoop => Strategy::SelfLoop(SelfLoop::new(game)),
            StrategyKind::Combined => Strategy::Combined(Combined::new(game)),
        }
    }
}

impl LiftStrategy for Strategy<'_> {
    fn next_vertex(&mut self, state: &mut SpmState) -> Next {
        match self {
            Strategy::Input(s) => s.next_vertex(state),
            Strategy::Random(s) => s.next_vertex(state),
            Strategy::Backtrack(s) => s.next_vertex(state),
            Strategy::SelfLoop(s) => s.next_vertex(state),
            Strategy::Combined(s) => s.next_vertex(state),
        }
    }

    fn was_lifted(&mut self, v: VertexId, state: &SpmState) {
        match self {
            Strategy::Input(s) => s.was_lifted(v, state),
            Strategy::Random(s) => s.was_lifted(v, state),
            Strategy::Backtrack(s) => s.was_lifted(v, state),
            Strategy::SelfLoop(s) => s.was_lifted(v, state),
            Strategy::Combined(s) => s.was_lifted(v, state),
        }
    }
}

/// Vertices with an odd self-loop first, then all the others, each group in id order.
fn self_loops_first(game: &Game) -> (Vec<VertexId>, usize) {
    let (mut order, rest): (Vec<_>, Vec<_>) =
        game.vertices().partition(|&v| game.has_odd_self_loop(v));
    let loops = order.len();
    order.extend(rest);
    (order, loops)
}
