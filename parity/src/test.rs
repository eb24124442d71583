use chumsky::error::Simple;
use chumsky::primitive::{choice, end, just};
use chumsky::text::TextParser;
use chumsky::Parser;
use solver::game::{Player, VertexId};
use solver::spm::{solve, SolveOptions, StrategyKind, Termination};

use crate::parser::number;
use crate::{parse_parity_game, ParseError};

fn parse_parity_sol(source: &str) -> Result<Vec<(usize, Player)>, Vec<Simple<char>>> {
    let mut lines = source.lines().map(str::trim).filter(|line| !line.is_empty());

    let header = just("paritysol").padded().ignore_then(number()).then_ignore(just(';')).then_ignore(end());
    let player = choice((just('0').to(Player::Odd), just('1').to(Player::Even))).padded();
    let row = number().then(player).then_ignore(just(';')).then_ignore(end());

    header.parse(lines.next().unwrap_or_default())?;
    lines.map(|line| row.parse(line)).collect()
}

fn run_test(input: &str, sol: &str) {
    let game = parse_parity_game(input).unwrap();
    let sol = parse_parity_sol(sol).unwrap();
    assert_eq!(sol.len(), game.vertex_count());

    for strategy in StrategyKind::ALL {
        let solution = solve(&game, &SolveOptions { strategy, ..SolveOptions::default() });
        assert_ne!(solution.termination(), Termination::LiftLimit);

        for &(v, winner) in &sol {
            assert_eq!(solution.winner_of(VertexId(v)), winner, "vertex {v} with strategy {strategy}");
        }
    }
}

macro_rules! declare_test {
    ($($name:ident),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let input = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/", stringify!($name)));
                let sol = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/", stringify!($name), ".sol"));
                run_test(input, sol)
            }
        )*
    };
}

declare_test! {
    two_cycle,
    boundary,
    self_loop,
    named,
    random_small,
    random_medium,
    random_large,
}

#[test]
fn all() {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/");
    for e in std::fs::read_dir(dir).unwrap() {
        let e = e.unwrap();

        let name = e.file_name().into_string().unwrap();
        let path = e.path();
        if name == ".gitignore" || path.extension() == Some("sol".as_ref()) {
            continue;
        }

        let input = std::fs::read_to_string(&path).unwrap();
        let sol = std::fs::read_to_string(path.with_extension("sol")).unwrap();

        if let Err(e) = std::panic::catch_unwind(|| run_test(&input, &sol)) {
            eprintln!("Test {name} failed");
            std::panic::resume_unwind(e);
        }
    }
}

#[test]
fn parse_rows_and_names() {
    let game = parse_parity_game(
        "parity 2;
         0 3 0 1,2 \"first\";
         1 2 1 1 second name
         2 0 1 0,0;",
    )
    .unwrap();

    assert_eq!(game.vertex_count(), 3);
    assert_eq!(game.max_priority(), 3);

    assert_eq!(game.priority_of(VertexId(0)), 3);
    assert_eq!(game.owner_of(VertexId(0)), Player::Odd);
    assert_eq!(game.owner_of(VertexId(1)), Player::Even);
    assert_eq!(game.successors_of(VertexId(0)).collect::<Vec<_>>(), [VertexId(1), VertexId(2)]);
    assert_eq!(game.successors_of(VertexId(2)).collect::<Vec<_>>(), [VertexId(0)]);
    assert_eq!(game.predecessors_of(VertexId(1)).collect::<Vec<_>>(), [VertexId(0), VertexId(1)]);

    assert_eq!(game.label(VertexId(0)).to_string(), "first");
    assert_eq!(game.label(VertexId(1)).to_string(), "second name");
    assert_eq!(game.label(VertexId(2)).to_string(), "2");

    assert!(!game.vertex(VertexId(0)).even_priority());
    assert!(game.vertex(VertexId(1)).even_priority());
}

#[test]
fn parse_name_with_semicolons() {
    let game = parse_parity_game("parity 1;\n0 0 1 1 \"a;b\";\n1 1 0 1 c;d\n").unwrap();

    assert_eq!(game.label(VertexId(0)).to_string(), "a;b");
    assert_eq!(game.label(VertexId(1)).to_string(), "c;d");
    assert!(game.has_odd_self_loop(VertexId(1)));
}

#[test]
fn parse_undeclared_vertex_defaults() {
    let game = parse_parity_game("parity 1;\n0 1 0 0;\n").unwrap();

    assert_eq!(game.vertex_count(), 2);
    assert_eq!(game.priority_of(VertexId(1)), 0);
    assert_eq!(game.owner_of(VertexId(1)), Player::Even);
    assert_eq!(game.successors_of(VertexId(1)).count(), 0);
}

#[test]
fn parse_errors() {
    assert_eq!(parse_parity_game("").err(), Some(ParseError::Empty));
    assert_eq!(parse_parity_game("\n  \n").err(), Some(ParseError::Empty));
    assert_eq!(parse_parity_game("parity;\n0 0 1 0;").err(), Some(ParseError::Header { line: 1 }));
    assert_eq!(parse_parity_game("\n3;\n0 0 1 0;").err(), Some(ParseError::Header { line: 2 }));
    assert_eq!(
        parse_parity_game("parity 18446744073709551615;\n").err(),
        Some(ParseError::Header { line: 1 })
    );
    assert_eq!(
        parse_parity_game("parity 100000000000000000;\n").err(),
        Some(ParseError::TooManyVertices { line: 1, max_id: 100_000_000_000_000_000 })
    );

    assert_eq!(
        parse_parity_game("parity 1;\n0 0 1 1;\n2 0 1 0;").err(),
        Some(ParseError::VertexOutOfRange { line: 3, id: 2, max_id: 1 })
    );
    assert_eq!(
        parse_parity_game("parity 1;\n0 0 1 1,5;").err(),
        Some(ParseError::SuccessorOutOfRange { line: 2, id: 5, max_id: 1 })
    );
    assert_eq!(
        parse_parity_game("parity 1;\n0 0 1 1;\n1 0 1 0;\n0 2 0 1;").err(),
        Some(ParseError::DuplicateVertex { line: 4, id: 0 })
    );

    assert!(matches!(parse_parity_game("parity 1;\n0 -1 1 1;").err(), Some(ParseError::Syntax { line: 2, .. })));
    assert!(matches!(parse_parity_game("parity 1;\n0 1 2 1;").err(), Some(ParseError::Syntax { line: 2, .. })));
    assert!(matches!(parse_parity_game("parity 1;\n0 1 1;").err(), Some(ParseError::Syntax { line: 2, .. })));
}
