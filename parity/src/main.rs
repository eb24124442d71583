mod cli;
mod logging;

use std::iter;

use anyhow::{ensure, Context, Result};
use either::Either::{Left, Right};
use parity::{parse_parity_game, Report};
use solver::game::VertexId;
use solver::spm::{solve, SolveOptions, StrategyKind};

fn main() -> Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;

    let now = std::time::Instant::now();

    let file = std::fs::read_to_string(&args.game)
        .with_context(|| format!("Failed to read parity game file {}", args.game.display()))?;
    let game = parse_parity_game(&file)
        .with_context(|| format!("Failed to parse parity game file {}", args.game.display()))?;

    ensure!(
        args.start < game.vertex_count(),
        "Start vertex {} doesn't exist, the game has {} vertices",
        args.start,
        game.vertex_count()
    );
    let start = VertexId(args.start);

    println!("Preprocessing took {:?}", now.elapsed());

    let strategies = match args.all {
        true => Left(StrategyKind::ALL.into_iter()),
        false => Right(iter::once(args.strategy)),
    };

    for strategy in strategies {
        let options = SolveOptions { strategy, seed: args.seed, max_lifts: args.max_lifts };

        let now = std::time::Instant::now();
        let solution = solve(&game, &options);

        println!();
        println!("Solve took {:?}", now.elapsed());
        println!(
            "{}",
            Report { path: &args.game, strategy, game: &game, solution: &solution, start }
        );
    }

    Ok(())
}
