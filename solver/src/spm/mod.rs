//! Small progress measures.
//!
//! Every vertex carries a [`ProgressTuple`] that only ever grows. Vertices are
//! lifted one at a time, in the order chosen by a [`LiftStrategy`], until no
//! lift changes anything. Odd wins exactly from the vertices that reached top.

mod lift;
mod solve;
mod state;
pub mod strategy;
mod tuple;


pub use lift::{lift, prog};
pub use solve::{solve, SolveOptions, Solution, Solver, Termination};
pub use state::SpmState;
pub use strategy::{ConfigError, LiftStrategy, Next, Strategy, StrategyKind, RANDOM_SEED};
pub use tuple::{Bounds, ProgressTuple};
