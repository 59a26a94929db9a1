//! Running a parser to completion and rendering what it found.
//!
//! The report has one line per derivation, in outcome order:
//!
//! ```text
//! Success, found 10, remainder: []
//! ```
//!
//! or the single line `Parsing failed.` when there is none.

use std::fmt::{self, Debug, Display};

use tracing::{debug, trace};

use crate::{parser::Parser, stream::Stream};

const FAILURE: &str = "Parsing failed.";

/// One successful derivation, rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub value: String,
    pub remainder: String,
}

impl Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Success, found {}, remainder: {}",
            self.value, self.remainder
        )
    }
}

/// Every derivation a parser produced on one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub derivations: Vec<Derivation>,
}

impl Report {
    /// Walk the whole outcome of `parser` on `input`.
    pub fn collect<K, P>(parser: &P, input: impl Into<Stream<K>>) -> Self
    where
        K: Debug + 'static,
        P: Parser<K>,
        P::Output: Display + 'static,
    {
        Self::take(parser, input, usize::MAX)
    }

    /// Like [`collect`](Self::collect), but stop after `limit` derivations.
    /// The rest of the outcome is never computed.
    pub fn take<K, P>(parser: &P, input: impl Into<Stream<K>>, limit: usize) -> Self
    where
        K: Debug + 'static,
        P: Parser<K>,
        P::Output: Display + 'static,
    {
        let derivations: Vec<Derivation> = parser
            .parse(&input.into())
            .iter()
            .take(limit)
            .map(|(value, rest)| {
                let derivation = Derivation {
                    value: value.to_string(),
                    remainder: format!("{rest:?}"),
                };
                trace!(%derivation, "derivation");
                derivation
            })
            .collect();
        debug!(count = derivations.len(), "parse finished");
        Self { derivations }
    }

    pub fn is_failure(&self) -> bool {
        self.derivations.is_empty()
    }

    /// Number of derivations; more than one means the input is ambiguous.
    pub fn len(&self) -> usize {
        self.derivations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.derivations.is_empty()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.derivations.is_empty() {
            return f.write_str(FAILURE);
        }
        for (i, derivation) in self.derivations.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{derivation}")?;
        }
        Ok(())
    }
}

/// Run `parser` on `input` and render every derivation.
///
/// ```
/// # use parse_all::*;
/// let report = run_and_report(&symbol('a'), "ab");
/// assert_eq!(report, "Success, found a, remainder: ['b']");
/// assert_eq!(run_and_report(&symbol('a'), "x"), "Parsing failed.");
/// ```
pub fn run_and_report<K, P>(parser: &P, input: impl Into<Stream<K>>) -> String
where
    K: Debug + 'static,
    P: Parser<K>,
    P::Output: Display + 'static,
{
    Report::collect(parser, input).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{choice, pure, symbol};

    #[test]
    fn renders_one_line_per_derivation() {
        let parser = choice(symbol('a'), pure('z'));
        assert_eq!(
            run_and_report(&parser, "ab"),
            "Success, found a, remainder: ['b']\nSuccess, found z, remainder: ['a', 'b']"
        );
    }

    #[test]
    fn empty_remainder_renders_as_empty_list() {
        assert_eq!(
            run_and_report(&symbol('a'), "a"),
            "Success, found a, remainder: []"
        );
    }

    #[test]
    fn take_stops_early() {
        let parser = choice(symbol('a'), pure('z'));
        let report = Report::take(&parser, "ab", 1);
        assert_eq!(report.len(), 1);
        assert_eq!(report.derivations[0].value, "a");
    }

    #[test]
    fn failure_is_a_single_literal_line() {
        let report = Report::collect(&symbol('a'), "b");
        assert!(report.is_failure());
        assert_eq!(report.to_string(), "Parsing failed.");
    }
}
