//! Expression grammars from operator precedence tables.
//!
//! Given an atom parser and a table of binary operators ordered from the
//! loosest to the tightest binding, [`expression`] nests one parser level per
//! operator: the tightest operator wraps the atom, the next one wraps that,
//! and so on out to the loosest. Each level reads `next (symbol next)*` and
//! folds the operands to the left, so `8-3-2` means `(8-3)-2`.
//!
//! Values are computed while parsing; no syntax tree is built.
//!
//! Right-associative operators cannot be expressed with this construction.

use std::{fmt::Debug, hash::Hash, rc::Rc};

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{
    combinator::{many1, optionally_followed},
    error::GrammarError,
    parser::{BoxedParser, Func, Parser},
    primitive::symbol,
};

/// A binary operator: the token that spells it and how it combines operands.
pub struct Operator<K, A> {
    pub symbol: K,
    pub combine: Rc<dyn Fn(A, A) -> A>,
}

impl<K, A> Operator<K, A> {
    pub fn new(symbol: K, combine: impl Fn(A, A) -> A + 'static) -> Self {
        Self {
            symbol,
            combine: Rc::new(combine),
        }
    }
}

impl<K: Clone, A> Clone for Operator<K, A> {
    fn clone(&self) -> Self {
        Self {
            symbol: self.symbol.clone(),
            combine: self.combine.clone(),
        }
    }
}

impl<K: Debug, A> Debug for Operator<K, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operator")
            .field("symbol", &self.symbol)
            .finish_non_exhaustive()
    }
}

/// Operators ordered from the loosest binding to the tightest.
///
/// A symbol may appear only once.
pub struct OperatorTable<K, A> {
    operators: Vec<Operator<K, A>>,
    symbols: FxHashSet<K>,
}

impl<K, A> OperatorTable<K, A>
where
    K: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self {
            operators: Vec::new(),
            symbols: FxHashSet::default(),
        }
    }

    /// Build a table from operators listed loosest first.
    pub fn from_operators(
        operators: impl IntoIterator<Item = Operator<K, A>>,
    ) -> Result<Self, GrammarError> {
        let mut table = Self::new();
        for operator in operators {
            table.push(operator)?;
        }
        Ok(table)
    }

    /// Add an operator binding tighter than every operator already present.
    pub fn push(&mut self, operator: Operator<K, A>) -> Result<(), GrammarError> {
        if !self.symbols.insert(operator.symbol.clone()) {
            return Err(GrammarError::duplicate_operator(&operator.symbol));
        }
        self.operators.push(operator);
        Ok(())
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(
        mut self,
        symbol: K,
        combine: impl Fn(A, A) -> A + 'static,
    ) -> Result<Self, GrammarError> {
        self.push(Operator::new(symbol, combine))?;
        Ok(self)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operator<K, A>> {
        self.operators.iter()
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl<K, A> Default for OperatorTable<K, A>
where
    K: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, A> Clone for OperatorTable<K, A> {
    fn clone(&self) -> Self {
        Self {
            operators: self.operators.clone(),
            symbols: self.symbols.clone(),
        }
    }
}

impl<K: Debug, A> Debug for OperatorTable<K, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.operators.iter().map(|op| &op.symbol))
            .finish()
    }
}

/// One precedence level for `operator` on top of `next`.
///
/// Reads `next`, then one or more `symbol next` steps folded to the left. The
/// bare `next` value is kept as the last alternative, so a level always
/// succeeds wherever `next` does.
pub fn operator_level<K, A, P>(operator: &Operator<K, A>, next: P) -> BoxedParser<K, A>
where
    K: Clone + PartialEq + 'static,
    A: Clone + 'static,
    P: Parser<K, Output = A> + Clone + 'static,
{
    let combine = operator.combine.clone();
    let step = symbol(operator.symbol.clone())
        .ignore_then(next.clone())
        .map(move |right: A| {
            let combine = combine.clone();
            Rc::new(move |left: A| combine(left, right.clone())) as Func<A, A>
        });
    let chain = many1(step).map(|steps: Vec<Func<A, A>>| {
        Rc::new(move |left: A| steps.iter().fold(left, |acc, step| step(acc))) as Func<A, A>
    });
    optionally_followed(next, chain).boxed()
}

/// Fold `table` over `atom`, producing a parser for the whole expression
/// language. Earlier table entries bind looser.
///
/// ```
/// # use parse_all::*;
/// let digit = satisfy(|c: &char| c.is_ascii_digit()).map(|c: char| c as i64 - '0' as i64);
/// let table = OperatorTable::new()
///     .with('+', |a: i64, b| a + b)?
///     .with('*', |a, b| a * b)?;
/// let (value, _) = expression(digit, &table).complete().parse_first("1+3*3").unwrap();
/// assert_eq!(value, 10);
/// # Ok::<(), GrammarError>(())
/// ```
pub fn expression<K, A, P>(atom: P, table: &OperatorTable<K, A>) -> BoxedParser<K, A>
where
    K: Clone + PartialEq + Debug + 'static,
    A: Clone + 'static,
    P: Parser<K, Output = A> + 'static,
{
    table
        .operators
        .iter()
        .rev()
        .fold(atom.boxed(), |next, operator| {
            debug!(symbol = ?operator.symbol, "building precedence level");
            operator_level(operator, next)
        })
}
