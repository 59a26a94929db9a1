#![doc=include_str!("../../README.md")]

pub mod calc;
pub mod combinator;
pub mod error;
pub mod harness;
pub mod lexer;
pub mod parser;
pub mod precedence;
pub mod primitive;
pub mod recursive;
pub mod seq;
pub mod stream;

pub use crate::{
    combinator::{
        apply, complete, keep_left, keep_right, many, many1, map, optionally_followed, replace,
        then,
    },
    error::GrammarError,
    harness::{run_and_report, Derivation, Report},
    lexer::{char_class, CharClass},
    parser::{BoxedParser, Call, Func, Outcome, Parser},
    precedence::{expression, operator_level, Operator, OperatorTable},
    primitive::{choice, eof, pure, satisfy, symbol, token},
    recursive::deferred,
    seq::Seq,
    stream::Stream,
};

#[cfg(feature = "logos")]
pub use crate::lexer::lex;
