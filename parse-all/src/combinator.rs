use std::rc::Rc;

use crate::{
    parser::{Call, Func, Outcome, Parser},
    primitive::{choice, pure, Eof},
    recursive::deferred,
    stream::Stream,
};

pub struct Map<P, F> {
    pub parser: P,
    pub f: Rc<F>,
}

impl<P: Clone, F> Clone for Map<P, F> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            f: self.f.clone(),
        }
    }
}

impl<K, T, U, P, F> Parser<K> for Map<P, F>
where
    K: 'static,
    T: 'static,
    U: 'static,
    P: Parser<K, Output = T>,
    F: Fn(T) -> U + 'static,
{
    type Output = U;

    fn parse(&self, stream: &Stream<K>) -> Outcome<K, U> {
        let f = self.f.clone();
        self.parser
            .parse(stream)
            .map(move |(value, rest)| (f(value), rest))
    }
}

pub struct FilterMap<P, F> {
    pub parser: P,
    pub f: Rc<F>,
}

impl<P: Clone, F> Clone for FilterMap<P, F> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            f: self.f.clone(),
        }
    }
}

impl<K, T, U, P, F> Parser<K> for FilterMap<P, F>
where
    K: 'static,
    T: 'static,
    U: 'static,
    P: Parser<K, Output = T>,
    F: Fn(T) -> Option<U> + 'static,
{
    type Output = U;

    fn parse(&self, stream: &Stream<K>) -> Outcome<K, U> {
        let f = self.f.clone();
        self.parser
            .parse(stream)
            .filter_map(move |(value, rest)| f(value).map(|value| (value, rest)))
    }
}

#[derive(Clone, Copy)]
pub struct Apply<PF, PA> {
    pub parser_fn: PF,
    pub parser_arg: PA,
}

impl<K, F, A, PF, PA> Parser<K> for Apply<PF, PA>
where
    K: 'static,
    A: 'static,
    PF: Parser<K, Output = F>,
    F: Call<A> + 'static,
    F::Output: 'static,
    PA: Parser<K, Output = A> + Clone + 'static,
{
    type Output = F::Output;

    fn parse(&self, stream: &Stream<K>) -> Outcome<K, F::Output> {
        let parser_arg = self.parser_arg.clone();
        self.parser_fn.parse(stream).flat_map(move |(f, rest)| {
            parser_arg
                .parse(&rest)
                .map(move |(arg, rest)| (f.call(arg), rest))
        })
    }
}

#[derive(Clone, Copy)]
pub struct Then<P1, P2> {
    pub parser1: P1,
    pub parser2: P2,
}

impl<K, T, U, P1, P2> Parser<K> for Then<P1, P2>
where
    K: 'static,
    T: Clone + 'static,
    U: 'static,
    P1: Parser<K, Output = T>,
    P2: Parser<K, Output = U> + Clone + 'static,
{
    type Output = (T, U);

    fn parse(&self, stream: &Stream<K>) -> Outcome<K, (T, U)> {
        let parser2 = self.parser2.clone();
        self.parser1.parse(stream).flat_map(move |(value1, rest)| {
            parser2
                .parse(&rest)
                .map(move |(value2, rest)| ((value1.clone(), value2), rest))
        })
    }
}

#[derive(Clone, Copy)]
pub struct ThenIgnore<P1, P2> {
    pub parser1: P1,
    pub parser2: P2,
}

impl<K, T, U, P1, P2> Parser<K> for ThenIgnore<P1, P2>
where
    K: 'static,
    T: Clone + 'static,
    U: 'static,
    P1: Parser<K, Output = T>,
    P2: Parser<K, Output = U> + Clone + 'static,
{
    type Output = T;

    fn parse(&self, stream: &Stream<K>) -> Outcome<K, T> {
        let parser2 = self.parser2.clone();
        self.parser1.parse(stream).flat_map(move |(value1, rest)| {
            parser2
                .parse(&rest)
                .map(move |(_, rest)| (value1.clone(), rest))
        })
    }
}

#[derive(Clone, Copy)]
pub struct IgnoreThen<P1, P2> {
    pub parser1: P1,
    pub parser2: P2,
}

impl<K, T, U, P1, P2> Parser<K> for IgnoreThen<P1, P2>
where
    K: 'static,
    T: 'static,
    U: 'static,
    P1: Parser<K, Output = T>,
    P2: Parser<K, Output = U> + Clone + 'static,
{
    type Output = U;

    fn parse(&self, stream: &Stream<K>) -> Outcome<K, U> {
        let parser2 = self.parser2.clone();
        self.parser1
            .parse(stream)
            .flat_map(move |(_, rest)| parser2.parse(&rest))
    }
}

#[derive(Clone, Copy)]
pub struct Many<P> {
    pub parser: P,
}

impl<K, T, P> Parser<K> for Many<P>
where
    K: 'static,
    T: Clone + 'static,
    P: Parser<K, Output = T> + Clone + 'static,
{
    type Output = Vec<T>;

    fn parse(&self, stream: &Stream<K>) -> Outcome<K, Vec<T>> {
        let parser = self.parser.clone();
        let more = deferred(move || Many {
            parser: parser.clone(),
        });
        choice(
            apply(apply(pure(prepend::<T>), self.parser.clone()), more),
            pure(Vec::new()),
        )
        .parse(stream)
    }
}

fn prepend<T: Clone>(head: T) -> impl Fn(Vec<T>) -> Vec<T> + Clone {
    move |tail| {
        let mut items = Vec::with_capacity(tail.len() + 1);
        items.push(head.clone());
        items.extend(tail);
        items
    }
}

/// Applicative sequencing: run `parser_fn`, then `parser_arg` on each
/// remainder, and apply every parsed function to every parsed argument.
///
/// If either side is ambiguous, so is the result.
pub fn apply<K, PF, PA>(parser_fn: PF, parser_arg: PA) -> Apply<PF, PA>
where
    PF: Parser<K>,
    PA: Parser<K>,
{
    Apply {
        parser_fn,
        parser_arg,
    }
}

pub fn map<K, U, P, F>(parser: P, f: F) -> Map<P, F>
where
    P: Parser<K>,
    F: Fn(P::Output) -> U,
{
    parser.map(f)
}

/// Run both parsers in sequence and pair their values.
pub fn then<K, P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2>
where
    P1: Parser<K>,
    P2: Parser<K>,
{
    parser1.then(parser2)
}

/// Run both parsers in sequence, keeping the value of the first.
pub fn keep_left<K, P1, P2>(parser1: P1, parser2: P2) -> ThenIgnore<P1, P2>
where
    P1: Parser<K>,
    P2: Parser<K>,
{
    parser1.then_ignore(parser2)
}

/// Run both parsers in sequence, keeping the value of the second.
pub fn keep_right<K, P1, P2>(parser1: P1, parser2: P2) -> IgnoreThen<P1, P2>
where
    P1: Parser<K>,
    P2: Parser<K>,
{
    parser1.ignore_then(parser2)
}

/// Zero or more repetitions.
///
/// Longer runs come first in the outcome; the empty run is always last.
pub fn many<K, P>(parser: P) -> Many<P>
where
    P: Parser<K>,
{
    parser.many()
}

/// One or more repetitions.
pub fn many1<K, T, P>(parser: P) -> impl Parser<K, Output = Vec<T>> + Clone
where
    K: 'static,
    T: Clone + 'static,
    P: Parser<K, Output = T> + Clone + 'static,
{
    apply(parser.clone().map(prepend::<T>), parser.many())
}

/// Run `parser`, discard its value and yield `value` instead.
pub fn replace<K, T, P>(value: T, parser: P) -> impl Parser<K, Output = T> + Clone
where
    K: 'static,
    T: Clone + 'static,
    P: Parser<K> + Clone,
    P::Output: 'static,
{
    parser.map(move |_| value.clone())
}

/// `parser` followed by the end of input.
pub fn complete<K, P>(parser: P) -> ThenIgnore<P, Eof>
where
    K: 'static,
    P: Parser<K>,
{
    parser.complete()
}

/// Parse `parser`, then try `suffix`, which parses a function. When the suffix
/// matches, its function is applied to the value of `parser`; the value is
/// also reported unchanged, as the last alternative.
///
/// `suffix` is tried at most once. Repetition, if wanted, belongs inside the
/// suffix.
pub fn optionally_followed<K, A, P, S>(parser: P, suffix: S) -> impl Parser<K, Output = A> + Clone
where
    K: 'static,
    A: Clone + 'static,
    P: Parser<K, Output = A> + Clone + 'static,
    S: Parser<K, Output = Func<A, A>> + Clone + 'static,
{
    let identity: Func<A, A> = Rc::new(|value: A| value);
    apply(parser.map(apply_to::<A>), choice(suffix, pure(identity)))
}

fn apply_to<A: Clone>(value: A) -> impl Fn(Func<A, A>) -> A + Clone {
    move |f| f(value.clone())
}
