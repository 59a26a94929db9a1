//! Lazy, restartable sequences.
//!
//! A [`Seq`] does not store its elements. It stores a recipe that produces a
//! fresh iterator each time the sequence is walked. Two consequences follow:
//!
//! - the same sequence can be consumed any number of times, and every walk
//!   sees the same elements in the same order;
//! - a consumer that stops after the first element never pays for the rest.
//!
//! Parser outcomes are built entirely out of these sequences, which is what
//! lets a backtracking parser report every derivation while a caller that
//! only wants the first one does no extra work.
//!
//! ```
//! # use parse_all::seq::Seq;
//! let evens = Seq::from_fn(|| 0..).map(|n| n * 2);
//! assert_eq!(evens.iter().take(3).collect::<Vec<_>>(), vec![0, 2, 4]);
//! // Walking it again starts over.
//! assert_eq!(evens.first(), Some(0));
//! ```

use std::rc::Rc;

type Generate<A> = Rc<dyn Fn() -> Box<dyn Iterator<Item = A>>>;

/// A demand-driven sequence of `A`s.
pub struct Seq<A> {
    generate: Generate<A>,
}

impl<A> Clone for Seq<A> {
    fn clone(&self) -> Self {
        Self {
            generate: self.generate.clone(),
        }
    }
}

impl<A: 'static> Seq<A> {
    /// Create a sequence from a recipe producing an iterator.
    ///
    /// The recipe is called once per walk, never when the sequence is built.
    pub fn from_fn<I>(generate: impl Fn() -> I + 'static) -> Self
    where
        I: Iterator<Item = A> + 'static,
    {
        Self {
            generate: Rc::new(move || Box::new(generate())),
        }
    }

    /// The empty sequence.
    pub fn none() -> Self {
        Self::from_fn(std::iter::empty)
    }

    /// A sequence holding exactly `value`.
    pub fn one(value: A) -> Self
    where
        A: Clone,
    {
        Self::from_fn(move || std::iter::once(value.clone()))
    }

    /// A sequence over already computed values.
    pub fn from_vec(values: Vec<A>) -> Self
    where
        A: Clone,
    {
        let values: Rc<[A]> = values.into();
        Self::from_fn(move || {
            let values = values.clone();
            (0..values.len()).map(move |i| values[i].clone())
        })
    }

    /// Start a new walk over the sequence.
    pub fn iter(&self) -> Box<dyn Iterator<Item = A>> {
        (self.generate)()
    }

    /// Transform every element, preserving order.
    pub fn map<B: 'static>(&self, f: impl Fn(A) -> B + 'static) -> Seq<B> {
        let seq = self.clone();
        let f = Rc::new(f);
        Seq::from_fn(move || {
            let f = f.clone();
            seq.iter().map(move |x| f(x))
        })
    }

    /// Transform every element, dropping those mapped to `None`.
    pub fn filter_map<B: 'static>(&self, f: impl Fn(A) -> Option<B> + 'static) -> Seq<B> {
        let seq = self.clone();
        let f = Rc::new(f);
        Seq::from_fn(move || {
            let f = f.clone();
            seq.iter().filter_map(move |x| f(x))
        })
    }

    /// All of `self`, then all of `other`.
    ///
    /// `other` is not started until `self` is exhausted.
    pub fn concat(&self, other: &Seq<A>) -> Seq<A> {
        Seq::from_vec(vec![self.clone(), other.clone()]).join()
    }

    /// Monadic bind: `join(map(self, f))`.
    pub fn flat_map<B: 'static>(&self, f: impl Fn(A) -> Seq<B> + 'static) -> Seq<B> {
        self.map(f).join()
    }

    /// The first element, computing nothing beyond it.
    pub fn first(&self) -> Option<A> {
        self.iter().next()
    }

    pub fn is_empty(&self) -> bool {
        self.first().is_none()
    }

    /// Walk the whole sequence and collect it.
    pub fn to_vec(&self) -> Vec<A> {
        self.iter().collect()
    }
}

impl<A: 'static> Seq<Seq<A>> {
    /// Flatten, draining each inner sequence before starting the next.
    pub fn join(&self) -> Seq<A> {
        let outer = self.clone();
        Seq::from_fn(move || outer.iter().flat_map(|inner| inner.iter()))
    }
}

impl<A: 'static> IntoIterator for Seq<A> {
    type Item = A;
    type IntoIter = Box<dyn Iterator<Item = A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: 'static> IntoIterator for &Seq<A> {
    type Item = A;
    type IntoIter = Box<dyn Iterator<Item = A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counting(counter: Rc<Cell<usize>>, values: Vec<i32>) -> Seq<i32> {
        Seq::from_vec(values).map(move |x| {
            counter.set(counter.get() + 1);
            x
        })
    }

    #[test]
    fn none_is_empty_and_one_is_singleton() {
        assert!(Seq::<i32>::none().is_empty());
        assert_eq!(Seq::one('x').to_vec(), vec!['x']);
    }

    #[test]
    fn concat_keeps_order() {
        let seq = Seq::from_vec(vec![1, 2]).concat(&Seq::from_vec(vec![3]));
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn concat_does_not_start_second_half_early() {
        let forced = Rc::new(Cell::new(0));
        let seq = Seq::one(0).concat(&counting(forced.clone(), vec![1, 2, 3]));
        assert_eq!(seq.first(), Some(0));
        assert_eq!(forced.get(), 0);
    }

    #[test]
    fn join_drains_inner_sequences_in_turn() {
        let nested = Seq::from_vec(vec![
            Seq::from_vec(vec![1, 2]),
            Seq::none(),
            Seq::from_vec(vec![3]),
        ]);
        assert_eq!(nested.join().to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn flat_map_over_infinite_sequence_is_lazy() {
        let pairs = Seq::from_fn(|| 0..).flat_map(|n| Seq::from_vec(vec![n, n]));
        assert_eq!(pairs.iter().take(5).collect::<Vec<_>>(), vec![0, 0, 1, 1, 2]);
    }

    #[test]
    fn walks_are_independent() {
        let forced = Rc::new(Cell::new(0));
        let seq = counting(forced.clone(), vec![1, 2, 3]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        assert_eq!(forced.get(), 6);
    }
}
