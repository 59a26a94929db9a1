//! Token predicates and token sources.

use regex_automata::meta::Regex;

use crate::{error::GrammarError, parser::Parser, primitive::satisfy};
#[cfg(feature = "logos")]
use crate::stream::Stream;

/// A set of characters described by a regular expression class, such as
/// `\d`, `[+*/-]` or `\p{Greek}`.
#[derive(Clone, Debug)]
pub struct CharClass {
    regex: Regex,
}

impl CharClass {
    pub fn new(pattern: &str) -> Result<Self, GrammarError> {
        let regex = Regex::new(&format!(r"\A(?:{pattern})\z")).map_err(|source| {
            GrammarError::InvalidCharClass {
                pattern: pattern.to_string(),
                source: Box::new(source),
            }
        })?;
        Ok(Self { regex })
    }

    /// Whether the character, on its own, matches the class.
    pub fn contains(&self, c: char) -> bool {
        let mut buf = [0; 4];
        let encoded: &str = c.encode_utf8(&mut buf);
        self.regex.is_match(encoded)
    }
}

/// Consume one character belonging to the class `pattern`.
///
/// ```
/// # use parse_all::*;
/// let digit = char_class(r"\d").unwrap();
/// assert!(digit.parse_first("7").is_some());
/// assert!(digit.parse_first("x").is_none());
/// ```
pub fn char_class(pattern: &str) -> Result<impl Parser<char, Output = char> + Clone, GrammarError> {
    let class = CharClass::new(pattern)?;
    Ok(satisfy(move |c: &char| class.contains(*c)))
}

/// Run a [`logos`] lexer over `source` and collect its tokens into a stream.
///
/// The first input that no token matches is reported with its byte span.
#[cfg(feature = "logos")]
pub fn lex<'s, T>(source: &'s T::Source) -> Result<Stream<T>, GrammarError>
where
    T: logos::Logos<'s>,
    T::Extras: Default,
{
    let mut lexer = T::lexer(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(_) => {
                let span = lexer.span();
                return Err(GrammarError::Lex {
                    start: span.start,
                    end: span.end,
                });
            }
        }
    }
    Ok(Stream::from(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_matches_single_characters() {
        let ops = CharClass::new(r"[+*/-]").unwrap();
        assert!(ops.contains('+'));
        assert!(ops.contains('-'));
        assert!(!ops.contains('x'));
    }

    #[test]
    fn class_handles_multibyte_characters() {
        let greek = CharClass::new(r"\p{Greek}").unwrap();
        assert!(greek.contains('λ'));
        assert!(!greek.contains('l'));
    }

    #[test]
    fn class_must_cover_the_whole_character() {
        let empty_or_a = CharClass::new(r"|a").unwrap();
        assert!(empty_or_a.contains('a'));
        assert!(!empty_or_a.contains('b'));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = CharClass::new("[").unwrap_err();
        assert!(matches!(err, GrammarError::InvalidCharClass { ref pattern, .. } if pattern == "["));
    }

    #[test]
    fn char_class_parser_consumes_one_token() {
        let digit = char_class(r"\d").unwrap();
        let (value, rest) = digit.parse_first("42").unwrap();
        assert_eq!(value, '4');
        assert_eq!(rest.remaining(), &['2']);
    }
}
