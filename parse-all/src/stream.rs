//! Immutable views over input tokens.

use std::{fmt, rc::Rc};

/// The input that remains to be parsed.
///
/// A `Stream` never changes: consuming a token returns a new view that shares
/// the same underlying tokens. Cloning is cheap.
///
/// ```
/// # use parse_all::Stream;
/// let input = Stream::from("ab");
/// assert_eq!(input.head(), Some(&'a'));
/// assert_eq!(input.tail().head(), Some(&'b'));
/// assert!(input.tail().tail().tail().is_empty());
/// ```
pub struct Stream<K> {
    tokens: Rc<[K]>,
    pos: usize,
}

impl<K> Stream<K> {
    pub fn new(tokens: impl Into<Rc<[K]>>) -> Self {
        Self {
            tokens: tokens.into(),
            pos: 0,
        }
    }

    /// The first remaining token, if any.
    pub fn head(&self) -> Option<&K> {
        self.tokens.get(self.pos)
    }

    /// Everything after the first token. The tail of an empty stream is empty.
    pub fn tail(&self) -> Self {
        Self {
            tokens: self.tokens.clone(),
            pos: (self.pos + 1).min(self.tokens.len()),
        }
    }

    /// Split into head and tail, or `None` if nothing remains.
    pub fn uncons(&self) -> Option<(&K, Self)> {
        self.head().map(|head| (head, self.tail()))
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Number of remaining tokens.
    pub fn len(&self) -> usize {
        self.tokens.len() - self.pos
    }

    /// How many tokens have been consumed from the original input.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The remaining tokens.
    pub fn remaining(&self) -> &[K] {
        &self.tokens[self.pos..]
    }
}

impl<K> Clone for Stream<K> {
    fn clone(&self) -> Self {
        Self {
            tokens: self.tokens.clone(),
            pos: self.pos,
        }
    }
}

impl<K: PartialEq> PartialEq for Stream<K> {
    fn eq(&self, other: &Self) -> bool {
        self.remaining() == other.remaining()
    }
}

impl<K: Eq> Eq for Stream<K> {}

impl<K: fmt::Debug> fmt::Debug for Stream<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.remaining()).finish()
    }
}

impl From<&str> for Stream<char> {
    fn from(input: &str) -> Self {
        input.chars().collect()
    }
}

impl From<String> for Stream<char> {
    fn from(input: String) -> Self {
        Self::from(input.as_str())
    }
}

impl<K> From<Vec<K>> for Stream<K> {
    fn from(tokens: Vec<K>) -> Self {
        Self::new(tokens)
    }
}

impl<K: Clone> From<&[K]> for Stream<K> {
    fn from(tokens: &[K]) -> Self {
        Self::new(tokens)
    }
}

impl<K> FromIterator<K> for Stream<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_of_empty_is_empty() {
        let empty = Stream::<char>::from("");
        assert!(empty.tail().is_empty());
        assert_eq!(empty.tail().offset(), 0);
    }

    #[test]
    fn consuming_leaves_original_untouched() {
        let input = Stream::from("xyz");
        let rest = input.tail();
        assert_eq!(input.remaining(), &['x', 'y', 'z']);
        assert_eq!(rest.remaining(), &['y', 'z']);
        assert_eq!(rest.len(), 2);
        assert_eq!(rest.offset(), 1);
    }

    #[test]
    fn equality_compares_remaining_tokens() {
        let a = Stream::from("zab").tail();
        let b = Stream::from("ab");
        assert_eq!(a, b);
        assert_eq!(format!("{a:?}"), "['a', 'b']");
    }
}
