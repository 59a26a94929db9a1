use std::rc::Rc;

use crate::{
    parser::{Outcome, Parser},
    seq::Seq,
    stream::Stream,
};

/// See [`pure`].
#[derive(Clone, Copy)]
pub struct Pure<T> {
    pub value: T,
}

impl<K, T> Parser<K> for Pure<T>
where
    K: 'static,
    T: Clone + 'static,
{
    type Output = T;

    #[inline(always)]
    fn parse(&self, stream: &Stream<K>) -> Outcome<K, T> {
        Seq::one((self.value.clone(), stream.clone()))
    }
}

/// Succeed with `value` without consuming anything.
pub fn pure<T>(value: T) -> Pure<T> {
    Pure { value }
}

/// See [`satisfy`].
pub struct Satisfy<F> {
    pub predicate: Rc<F>,
}

impl<F> Clone for Satisfy<F> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
        }
    }
}

impl<K, F> Parser<K> for Satisfy<F>
where
    K: Clone + 'static,
    F: Fn(&K) -> bool + 'static,
{
    type Output = K;

    fn parse(&self, stream: &Stream<K>) -> Outcome<K, K> {
        let predicate = self.predicate.clone();
        let stream = stream.clone();
        Seq::from_fn(move || {
            match stream.uncons() {
                Some((head, tail)) if predicate(head) => Some((head.clone(), tail)),
                _ => None,
            }
            .into_iter()
        })
    }
}

/// Consume one token for which `predicate` holds.
///
/// The predicate is not consulted until the outcome is walked.
pub fn satisfy<K, F>(predicate: F) -> Satisfy<F>
where
    F: Fn(&K) -> bool,
{
    Satisfy {
        predicate: Rc::new(predicate),
    }
}

/// See [`eof`].
#[derive(Clone, Copy)]
pub struct Eof;

impl<K: 'static> Parser<K> for Eof {
    type Output = ();

    #[inline(always)]
    fn parse(&self, stream: &Stream<K>) -> Outcome<K, ()> {
        if stream.is_empty() {
            Seq::one(((), stream.clone()))
        } else {
            Seq::none()
        }
    }
}

/// Succeed, consuming nothing, only at the end of the input.
pub fn eof() -> Eof {
    Eof
}

/// See [`symbol`].
#[derive(Clone, Copy)]
pub struct Just<K> {
    pub value: K,
}

impl<K> Parser<K> for Just<K>
where
    K: Clone + PartialEq + 'static,
{
    type Output = K;

    fn parse(&self, stream: &Stream<K>) -> Outcome<K, K> {
        let value = self.value.clone();
        let stream = stream.clone();
        Seq::from_fn(move || {
            match stream.uncons() {
                Some((head, tail)) if *head == value => Some((head.clone(), tail)),
                _ => None,
            }
            .into_iter()
        })
    }
}

/// Consume exactly the token `value`.
///
/// Like [`satisfy`], the comparison waits until the outcome is walked.
pub fn symbol<K>(value: K) -> Just<K> {
    Just { value }
}

/// See [`token`].
#[derive(Clone)]
pub struct Token<K> {
    pub tokens: Rc<[K]>,
}

impl<K> Parser<K> for Token<K>
where
    K: Clone + PartialEq + 'static,
{
    type Output = Vec<K>;

    fn parse(&self, stream: &Stream<K>) -> Outcome<K, Vec<K>> {
        let tokens = self.tokens.clone();
        let stream = stream.clone();
        Seq::from_fn(move || {
            let mut rest = stream.clone();
            for expected in tokens.iter() {
                match rest.uncons() {
                    Some((head, tail)) if head == expected => rest = tail,
                    _ => return None.into_iter(),
                }
            }
            Some((tokens.to_vec(), rest)).into_iter()
        })
    }
}

/// Consume exactly the given run of tokens, in order.
pub fn token<K>(tokens: impl IntoIterator<Item = K>) -> Token<K> {
    Token {
        tokens: tokens.into_iter().collect(),
    }
}

/// See [`choice`].
#[derive(Clone, Copy)]
pub struct Choice<P1, P2> {
    pub parser1: P1,
    pub parser2: P2,
}

impl<K, T, P1, P2> Parser<K> for Choice<P1, P2>
where
    K: 'static,
    T: 'static,
    P1: Parser<K, Output = T>,
    P2: Parser<K, Output = T>,
{
    type Output = T;

    #[inline(always)]
    fn parse(&self, stream: &Stream<K>) -> Outcome<K, T> {
        self.parser1.parse(stream).concat(&self.parser2.parse(stream))
    }
}

/// Try both alternatives on the same input and keep every result: all of
/// `parser1`'s derivations, then all of `parser2`'s.
///
/// This is not first-match-wins. When both alternatives match, both results
/// are reported.
pub fn choice<K, P1, P2>(parser1: P1, parser2: P2) -> Choice<P1, P2>
where
    P1: Parser<K>,
    P2: Parser<K, Output = P1::Output>,
{
    Choice { parser1, parser2 }
}
