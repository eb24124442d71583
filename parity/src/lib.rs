mod parser;
mod report;

#[cfg(test)]
mod test;

pub use parser::{parse_parity_game, ParseError};
pub use report::Report;
