//! Errors raised while assembling a grammar.
//!
//! Parsing itself never fails with an error; an input that does not match
//! simply produces no derivations. These errors are about the grammar
//! description being unusable.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrammarError {
    /// The same operator symbol appears twice in a precedence table.
    #[error("operator {symbol} appears more than once in the operator table")]
    DuplicateOperator { symbol: String },
    /// A symbol that names no known operator.
    #[error("unknown operator {symbol:?}")]
    UnknownOperator { symbol: char },
    /// A character class pattern did not compile.
    #[error("invalid character class {pattern:?}: {source}")]
    InvalidCharClass {
        pattern: String,
        #[source]
        source: Box<regex_automata::meta::BuildError>,
    },
    /// The lexer could not produce a token.
    #[error("no token matches the input at {start}..{end}")]
    Lex { start: usize, end: usize },
}

impl GrammarError {
    pub fn duplicate_operator(symbol: impl std::fmt::Debug) -> Self {
        Self::DuplicateOperator {
            symbol: format!("{symbol:?}"),
        }
    }
}
