//! Basic definitions for working with parsers.
//!
//! A parser is a value implementing [`Parser`]: given a [`Stream`] it returns
//! an [`Outcome`], the lazy sequence of every way it can succeed. Each element
//! pairs a parsed value with the input left over after it.
//!
//! - An empty outcome is a failure. There is no other error channel.
//! - More than one element means the grammar is ambiguous on this input.
//!   That is not an error; every derivation is reported, in order.
//! - A non-empty remainder is a partial parse, which is also not an error.
//!   Sequence with [`eof`](crate::eof) (or use [`Parser::complete`]) to
//!   require the whole input to be consumed.
//!
//! ```
//! # use parse_all::*;
//! let a_or_ab = choice(
//!     symbol('a').map(|c| c.to_string()),
//!     token("ab".chars()).map(|cs| cs.into_iter().collect::<String>()),
//! );
//! let values: Vec<String> = a_or_ab
//!     .parse_all("ab")
//!     .into_iter()
//!     .map(|(value, _)| value)
//!     .collect();
//! assert_eq!(values, vec!["a".to_string(), "ab".to_string()]);
//! ```
//!
//! Parsers are plain immutable values. Building one never reads input, and
//! the same parser can run on any number of inputs.

use std::rc::Rc;

use crate::{
    combinator::{FilterMap, IgnoreThen, Many, Map, Then, ThenIgnore},
    primitive::{Choice, Eof},
    seq::Seq,
    stream::Stream,
};

/// Every `(value, remainder)` pair a parser produced, lazily.
pub type Outcome<K, T> = Seq<(T, Stream<K>)>;

/// A function carried as a parsed value.
///
/// Parsers whose results are functions (the left side of
/// [`apply`](crate::apply), the suffix of
/// [`optionally_followed`](crate::optionally_followed)) use this when the
/// concrete closure type cannot be named.
pub type Func<A, B> = Rc<dyn Fn(A) -> B>;

/// A parsed function that [`apply`](crate::apply) can call: any closure or
/// function item, or a [`Func`].
pub trait Call<A> {
    type Output;
    fn call(&self, arg: A) -> Self::Output;
}

impl<A, B, F> Call<A> for F
where
    F: Fn(A) -> B,
{
    type Output = B;

    #[inline(always)]
    fn call(&self, arg: A) -> B {
        self(arg)
    }
}

impl<A, B> Call<A> for Func<A, B> {
    type Output = B;

    #[inline(always)]
    fn call(&self, arg: A) -> B {
        (**self)(arg)
    }
}

/// A parser over tokens of type `K`.
///
/// Implementations must be pure: calling `parse` twice on equal streams
/// yields equal outcomes, and the input stream is never modified.
pub trait Parser<K> {
    type Output;

    /// Run the parser, producing all derivations.
    fn parse(&self, stream: &Stream<K>) -> Outcome<K, Self::Output>;

    /// Run the parser on anything convertible into a [`Stream`] and collect
    /// the whole outcome.
    fn parse_all(&self, input: impl Into<Stream<K>>) -> Vec<(Self::Output, Stream<K>)>
    where
        Self: Sized,
        K: 'static,
        Self::Output: 'static,
    {
        self.parse(&input.into()).to_vec()
    }

    /// Run the parser and take only the first derivation.
    ///
    /// Later derivations are never computed.
    fn parse_first(&self, input: impl Into<Stream<K>>) -> Option<(Self::Output, Stream<K>)>
    where
        Self: Sized,
        K: 'static,
        Self::Output: 'static,
    {
        self.parse(&input.into()).first()
    }

    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map {
            parser: self,
            f: Rc::new(f),
        }
    }

    /// Like [`map`](Parser::map), but drops the derivations for which `f`
    /// returns `None`.
    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Option<U>,
    {
        FilterMap {
            parser: self,
            f: Rc::new(f),
        }
    }

    fn then<P>(self, other: P) -> Then<Self, P>
    where
        Self: Sized,
        P: Parser<K>,
    {
        Then {
            parser1: self,
            parser2: other,
        }
    }

    fn then_ignore<P>(self, other: P) -> ThenIgnore<Self, P>
    where
        Self: Sized,
        P: Parser<K>,
    {
        ThenIgnore {
            parser1: self,
            parser2: other,
        }
    }

    fn ignore_then<P>(self, other: P) -> IgnoreThen<Self, P>
    where
        Self: Sized,
        P: Parser<K>,
    {
        IgnoreThen {
            parser1: self,
            parser2: other,
        }
    }

    /// Both alternatives, in order. See [`choice`](crate::choice).
    fn or<P>(self, other: P) -> Choice<Self, P>
    where
        Self: Sized,
        P: Parser<K, Output = Self::Output>,
    {
        Choice {
            parser1: self,
            parser2: other,
        }
    }

    fn many(self) -> Many<Self>
    where
        Self: Sized,
    {
        Many { parser: self }
    }

    /// Require the input to be fully consumed after this parser.
    fn complete(self) -> ThenIgnore<Self, Eof>
    where
        Self: Sized,
        K: 'static,
    {
        self.then_ignore(Eof)
    }

    /// Erase the parser's type.
    fn boxed(self) -> BoxedParser<K, Self::Output>
    where
        Self: Sized + 'static,
    {
        BoxedParser {
            parser: Rc::new(self),
        }
    }
}

/// A type-erased, cheaply clonable parser.
pub struct BoxedParser<K, T> {
    parser: Rc<dyn Parser<K, Output = T>>,
}

impl<K, T> Clone for BoxedParser<K, T> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
        }
    }
}

impl<K, T> Parser<K> for BoxedParser<K, T> {
    type Output = T;

    fn parse(&self, stream: &Stream<K>) -> Outcome<K, T> {
        self.parser.parse(stream)
    }

    fn boxed(self) -> BoxedParser<K, T> {
        self
    }
}
