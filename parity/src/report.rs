use std::fmt;
use std::path::Path;

use solver::game::{Game, Player, VertexId};
use solver::spm::{Solution, StrategyKind, Termination};

/// Human readable summary of one solve.
pub struct Report<'a> {
    pub path: &'a Path,
    pub strategy: StrategyKind,
    pub game: &'a Game,
    pub solution: &'a Solution,
    pub start: VertexId,
}

impl Report<'_> {
    fn write_region(&self, f: &mut fmt::Formatter<'_>, player: Player) -> fmt::Result {
        let region = self.solution.winning_region(player).collect::<Vec<_>>();
        write!(f, "Vertices won by {player} ({}):", region.len())?;
        for v in region {
            write!(f, " {}", self.game.label(v))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let termination = match self.solution.termination() {
            Termination::Stable => "all vertices stable",
            Termination::Exhausted => "no vertex left to lift",
            Termination::LiftLimit => "lift limit reached, result is incomplete",
        };

        writeln!(f, "File: {}", self.path.display())?;
        writeln!(f, "Strategy: {}", self.strategy.description())?;
        writeln!(f, "Lifts: {} ({termination})", self.solution.lifts())?;
        self.write_region(f, Player::Odd)?;
        self.write_region(f, Player::Even)?;
        write!(
            f,
            "Winner from vertex {}: player {}",
            self.game.label(self.start),
            self.solution.winner_of(self.start)
        )
    }
}
