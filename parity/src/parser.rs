use std::ops::Range;

use chumsky::error::Simple;
use chumsky::primitive::{any, choice, end, just};
use chumsky::text::{self, TextParser};
use chumsky::Parser;
use solver::game::{Game, GameBuilder, Player, VertexId};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("the parity game is empty")]
    Empty,
    #[error("line {line}: malformed header, expected `<name> <max id>;`")]
    Header { line: usize },
    #[error("line {line}: cannot allocate a game with vertex ids up to {max_id}")]
    TooManyVertices { line: usize, max_id: usize },
    #[error("line {line}, column {column}: invalid {field}, found {found}")]
    Syntax { line: usize, column: usize, field: &'static str, found: String },
    #[error("line {line}: vertex {id} is out of range, the header declares ids up to {max_id}")]
    VertexOutOfRange { line: usize, id: usize, max_id: usize },
    #[error("line {line}: successor {id} is out of range, the header declares ids up to {max_id}")]
    SuccessorOutOfRange { line: usize, id: usize, max_id: usize },
    #[error("line {line}: vertex {id} is declared twice")]
    DuplicateVertex { line: usize, id: usize },
}

struct Row {
    id: usize,
    priority: usize,
    owner: Player,
    successors: Vec<usize>,
    name: Option<String>,
}

pub(crate) fn number() -> impl Parser<char, usize, Error = Simple<char>> + Clone {
    text::int::<_, Simple<char>>(10)
        .try_map(|n: String, span: Range<usize>| {
            n.parse::<usize>().map_err(|e| Simple::custom(span, format!("{e}")))
        })
        .padded()
}

fn header() -> impl Parser<char, usize, Error = Simple<char>> {
    text::ident::<_, Simple<char>>()
        .padded()
        .ignore_then(number())
        .then_ignore(just(';').or_not())
        .then_ignore(end())
}

fn row() -> impl Parser<char, Row, Error = Simple<char>> {
    // Owner 1 is even, 0 is odd.
    let owner = choice((just('0').to(Player::Odd), just('1').to(Player::Even))).padded();
    let successors = number().separated_by(just(',').padded()).at_least(1);
    let name = any().repeated().map(|name: Vec<char>| name.into_iter().collect::<String>());

    number()
        .labelled("vertex id")
        .then(number().labelled("priority"))
        .then(owner.labelled("owner"))
        .then(successors.labelled("successors"))
        .then(name)
        .then_ignore(end())
        .map(|((((id, priority), owner), successors), name)| Row {
            id,
            priority,
            owner,
            successors,
            name: display_name(&name),
        })
}

fn display_name(raw: &str) -> Option<String> {
    let name = raw.trim().trim_matches('"');
    (!name.is_empty()).then(|| name.to_string())
}

fn syntax_error(line: usize, errors: Vec<Simple<char>>) -> ParseError {
    let Some(e) = errors.into_iter().next() else {
        return ParseError::Syntax { line, column: 1, field: "row", found: "nothing".into() };
    };

    let found = match e.found() {
        Some(c) => format!("`{c}`"),
        None => "end of line".to_string(),
    };

    ParseError::Syntax { line, column: e.span().start + 1, field: e.label().unwrap_or("row"), found }
}

/// Reads a parity game: a `<name> <max id>;` header followed by one
/// `<id> <priority> <owner> <successors> ["name"];` row per vertex.
pub fn parse_parity_game(source: &str) -> Result<Game, ParseError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line, header_line) = lines.next().ok_or(ParseError::Empty)?;
    let max_id = header().parse(header_line).map_err(|_| ParseError::Header { line })?;

    let vertex_count = max_id.checked_add(1).ok_or(ParseError::Header { line })?;
    let mut builder =
        GameBuilder::try_new(vertex_count).ok_or(ParseError::TooManyVertices { line, max_id })?;
    let mut declared = vec![false; vertex_count];

    for (line, source) in lines {
        // Only the last `;` ends the row, names may contain more.
        let source = source.strip_suffix(';').unwrap_or(source);
        let row = row().parse(source).map_err(|errors| syntax_error(line, errors))?;

        if row.id > max_id {
            return Err(ParseError::VertexOutOfRange { line, id: row.id, max_id });
        }
        if let Some(&id) = row.successors.iter().find(|&&id| id > max_id) {
            return Err(ParseError::SuccessorOutOfRange { line, id, max_id });
        }
        if std::mem::replace(&mut declared[row.id], true) {
            return Err(ParseError::DuplicateVertex { line, id: row.id });
        }

        let v = VertexId(row.id);
        builder.set_vertex(v, row.priority, row.owner, row.name);
        for w in row.successors {
            builder.add_edge(v, VertexId(w));
        }
    }

    for (id, _) in declared.iter().enumerate().filter(|(_, &is_declared)| !is_declared) {
        warn!(vertex = id, "vertex declared by the header has no row, using priority 0 and no successors");
    }

    Ok(builder.build())
}
