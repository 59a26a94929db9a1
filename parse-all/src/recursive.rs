use std::rc::Rc;

use crate::{
    parser::{Outcome, Parser},
    seq::Seq,
    stream::Stream,
};

/// A parser built on demand from a recipe. See [`deferred`].
pub struct Deferred<F> {
    recipe: Rc<F>,
}

impl<F> Clone for Deferred<F> {
    fn clone(&self) -> Self {
        Self {
            recipe: self.recipe.clone(),
        }
    }
}

impl<K, P, F> Parser<K> for Deferred<F>
where
    K: 'static,
    F: Fn() -> P + 'static,
    P: Parser<K>,
    P::Output: 'static,
{
    type Output = P::Output;

    fn parse(&self, stream: &Stream<K>) -> Outcome<K, P::Output> {
        let recipe = self.recipe.clone();
        let stream = stream.clone();
        Seq::from_fn(move || recipe().parse(&stream).iter())
    }
}

/// Delay building a parser until its outcome is walked.
///
/// Any rule that refers to itself, directly or through other rules, must go
/// through `deferred`; otherwise assembling the grammar recurses forever
/// before reading any input.
///
/// ```
/// # use parse_all::*;
/// // nested ::= '(' nested ')' | ε
/// fn nested() -> BoxedParser<char, usize> {
///     choice(
///         symbol('(')
///             .ignore_then(deferred(nested))
///             .then_ignore(symbol(')'))
///             .map(|depth: usize| depth + 1),
///         pure(0),
///     )
///     .boxed()
/// }
///
/// let (depth, _) = nested().complete().parse_first("((()))").unwrap();
/// assert_eq!(depth, 3);
/// ```
pub fn deferred<F>(recipe: F) -> Deferred<F> {
    Deferred {
        recipe: Rc::new(recipe),
    }
}
