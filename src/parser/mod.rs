#[cfg(test)]
mod str_test_strategies;

mod error;
mod lexer;
mod parse;

pub use error::ParserError;
pub(crate) use lexer::{Lexer, Token};
pub use parse::{Parser, parse};
