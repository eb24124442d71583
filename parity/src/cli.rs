use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use solver::spm::{StrategyKind, RANDOM_SEED};

#[derive(Debug, Parser)]
#[command(name = "parity", version, about = "Solve parity games with small progress measures")]
pub struct CliArgs {
    /// Path to the parity game file.
    #[arg(value_name = "GAME")]
    pub game: PathBuf,

    /// Lift strategy: input, random, backtrack, selfloop or combined.
    #[arg(short, long, default_value = "input", value_name = "STRATEGY")]
    pub strategy: StrategyKind,

    /// Solve once with every strategy.
    #[arg(long, conflicts_with = "strategy")]
    pub all: bool,

    /// Vertex whose winner is reported.
    #[arg(long, default_value_t = 0, value_name = "ID")]
    pub start: usize,

    /// Seed of the random strategy.
    #[arg(long, default_value_t = RANDOM_SEED)]
    pub seed: u64,

    /// Give up after this many lifts.
    #[arg(long, value_name = "N")]
    pub max_lifts: Option<u64>,

    /// Logging level. Falls back to `SPM_LOG`, then `warn`.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

pub fn parse() -> CliArgs {
    CliArgs::parse()
}
