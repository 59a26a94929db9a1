//! Integer arithmetic over characters, built from the precedence builder.

use crate::{
    combinator::many1,
    error::GrammarError,
    parser::{BoxedParser, Parser},
    precedence::{expression, Operator, OperatorTable},
    primitive::{choice, satisfy, symbol},
    recursive::deferred,
};

pub fn decimal_digit() -> impl Parser<char, Output = char> + Clone {
    satisfy(|c: &char| c.is_ascii_digit())
}

/// A non-negative decimal literal.
///
/// Like every repetition here, shorter prefixes are derivations too: on `"12"`
/// the outcome is `12` and then `1`. Literals that do not fit in an `i64`
/// produce no derivation.
pub fn number() -> BoxedParser<char, i64> {
    many1(decimal_digit())
        .filter_map(|digits: Vec<char>| digits.into_iter().collect::<String>().parse::<i64>().ok())
        .boxed()
}

/// The four integer operators, loosest first: `+ - * /`.
///
/// Arithmetic wraps on overflow, and division by zero yields zero.
pub fn arithmetic_table() -> Result<OperatorTable<char, i64>, GrammarError> {
    table_from_symbols("+-*/")
}

/// The operator spelled `symbol`, if it is one of `+ - * /`.
pub fn arithmetic_operator(symbol: char) -> Option<Operator<char, i64>> {
    let operator = match symbol {
        '+' => Operator::new('+', i64::wrapping_add),
        '-' => Operator::new('-', i64::wrapping_sub),
        '*' => Operator::new('*', i64::wrapping_mul),
        '/' => Operator::new('/', |a: i64, b: i64| a.checked_div(b).unwrap_or(0)),
        _ => return None,
    };
    Some(operator)
}

/// Build an arithmetic table from a string of operator symbols, loosest first,
/// e.g. `"+-*/"`.
pub fn table_from_symbols(symbols: &str) -> Result<OperatorTable<char, i64>, GrammarError> {
    symbols
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| arithmetic_operator(c).ok_or(GrammarError::UnknownOperator { symbol: c }))
        .collect::<Result<Vec<_>, _>>()
        .and_then(OperatorTable::from_operators)
}

/// `( expr )`, where `expr` is built on demand from `table`.
pub fn parenthesized(table: OperatorTable<char, i64>) -> BoxedParser<char, i64> {
    symbol('(')
        .ignore_then(deferred(move || calculator(table.clone())))
        .then_ignore(symbol(')'))
        .boxed()
}

/// Full expressions over numbers and parenthesized sub-expressions.
///
/// ```
/// # use parse_all::*;
/// let calc = calc::calculator(calc::arithmetic_table()?).complete();
/// let (value, _) = calc.parse_first("2*(3+4)").unwrap();
/// assert_eq!(value, 14);
/// # Ok::<(), GrammarError>(())
/// ```
pub fn calculator(table: OperatorTable<char, i64>) -> BoxedParser<char, i64> {
    let atom = choice(number(), parenthesized(table.clone()));
    expression(atom, &table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_values(parser: BoxedParser<char, i64>, input: &str) -> Vec<i64> {
        parser
            .complete()
            .parse_all(input)
            .into_iter()
            .map(|(value, _)| value)
            .collect()
    }

    #[test]
    fn number_reports_every_prefix() {
        let values: Vec<(i64, usize)> = number()
            .parse_all("123x")
            .into_iter()
            .map(|(value, rest)| (value, rest.len()))
            .collect();
        assert_eq!(values, vec![(123, 1), (12, 2), (1, 3)]);
    }

    #[test]
    fn number_overflow_has_no_derivation() {
        assert!(complete_values(number(), "99999999999999999999").is_empty());
    }

    #[test]
    fn arithmetic_evaluates_conventionally() {
        let calc = || calculator(arithmetic_table().unwrap());
        assert_eq!(complete_values(calc(), "1+3*3"), vec![10]);
        assert_eq!(complete_values(calc(), "10-3*2"), vec![4]);
        assert_eq!(complete_values(calc(), "8-3-2"), vec![3]);
        assert_eq!(complete_values(calc(), "(1+2)*3"), vec![9]);
        assert_eq!(complete_values(calc(), "((7))"), vec![7]);
    }

    #[test]
    fn division_by_zero_is_zero() {
        assert_eq!(complete_values(calculator(arithmetic_table().unwrap()), "7/0"), vec![0]);
    }

    #[test]
    fn unbalanced_parentheses_fail() {
        let table = arithmetic_table().unwrap();
        assert!(complete_values(calculator(table.clone()), "(1+2").is_empty());
        assert!(complete_values(calculator(table), "1+2)").is_empty());
    }

    #[test]
    fn arithmetic_table_lists_four_levels_loosest_first() {
        let table = arithmetic_table().unwrap();
        assert_eq!(format!("{table:?}"), "['+', '-', '*', '/']");
    }

    #[test]
    fn table_from_symbols_validates() {
        assert_eq!(table_from_symbols("-*").map(|t| t.len()).ok(), Some(2));
        assert!(matches!(
            table_from_symbols("+%"),
            Err(GrammarError::UnknownOperator { symbol: '%' })
        ));
        assert!(matches!(
            table_from_symbols("++"),
            Err(GrammarError::DuplicateOperator { .. })
        ));
    }
}
