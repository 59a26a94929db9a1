use parse_all::{
    calc, choice, eof, expression, many, run_and_report, satisfy, symbol, token, Operator,
    OperatorTable, Parser, Report,
};

fn integer_table(ops: &[char]) -> OperatorTable<char, i64> {
    OperatorTable::from_operators(ops.iter().map(|&op| {
        calc::arithmetic_operator(op).unwrap_or_else(|| panic!("{op} is not an arithmetic operator"))
    }))
    .unwrap()
}

#[test]
fn always_true_consumes_single_token() {
    let any = satisfy(|_: &char| true);
    let outcome = any.parse_all("q");
    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome[0].0, 'q');
    assert!(outcome[0].1.is_empty());
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let parser = expression(calc::number(), &integer_table(&['+', '*'])).complete();
    assert_eq!(
        run_and_report(&parser, "1+3*3"),
        "Success, found 10, remainder: []"
    );
}

#[test]
fn subtraction_groups_to_the_left() {
    let parser = expression(calc::number(), &integer_table(&['-'])).complete();
    assert_eq!(
        run_and_report(&parser, "8-3-2"),
        "Success, found 3, remainder: []"
    );
}

#[test]
fn later_table_entries_bind_tighter() {
    let parser = expression(calc::number(), &integer_table(&['-', '*'])).complete();
    assert_eq!(
        run_and_report(&parser, "10-3*2"),
        "Success, found 4, remainder: []"
    );
}

#[test]
fn ambiguous_atoms_are_all_reported() {
    let a = symbol('a').map(|c: char| c.to_string());
    let ab = token("ab".chars()).map(|cs: Vec<char>| cs.into_iter().collect::<String>());
    let report = run_and_report(&choice(a, ab), "ab");
    let successes = report
        .lines()
        .filter(|line| line.starts_with("Success"))
        .count();
    assert_eq!(successes, 2);
}

#[test]
fn non_digit_input_fails() {
    let parser = expression(calc::number(), &calc::arithmetic_table().unwrap());
    assert_eq!(run_and_report(&parser, "x"), "Parsing failed.");
}

#[test]
fn partial_parses_are_not_errors() {
    let parser = expression(calc::number(), &integer_table(&['+']));
    let report = Report::collect(&parser, "1+2)");
    assert_eq!(report.len(), 2);
    assert_eq!(
        report.derivations[0].to_string(),
        "Success, found 3, remainder: [')']"
    );
    assert!(Report::collect(&parser.complete(), "1+2)").is_failure());
}

#[test]
fn eof_matches_only_empty_input() {
    assert_eq!(Parser::<char>::parse_all(&eof(), "").len(), 1);
    assert!(Parser::<char>::parse_all(&eof(), "z").is_empty());
}

#[test]
fn many_on_empty_input_yields_one_empty_list() {
    let outcome = many(symbol('a')).parse_all("");
    assert_eq!(outcome.len(), 1);
    assert!(outcome[0].0.is_empty());
    assert!(outcome[0].1.is_empty());
}

#[test]
fn custom_value_types_work_too() {
    let word = many(satisfy(|c: &char| c.is_ascii_lowercase()))
        .map(|cs: Vec<char>| cs.into_iter().collect::<String>());
    let table = OperatorTable::new()
        .with('+', |a: String, b: String| a + &b)
        .unwrap();
    let concat = expression(word, &table).complete();
    assert_eq!(
        run_and_report(&concat, "ab+cd+e"),
        "Success, found abcde, remainder: []"
    );
}

#[test]
fn parentheses_override_table_order() {
    let table = integer_table(&['+', '*']);
    let parser = calc::calculator(table).complete();
    assert_eq!(
        run_and_report(&parser, "(1+3)*3"),
        "Success, found 12, remainder: []"
    );
}

#[test]
fn first_derivation_of_long_ambiguous_input() {
    let parser = calc::calculator(calc::arithmetic_table().unwrap());
    let (value, rest) = parser.parse_first("1+2+3+4+5+6+7+8+9").unwrap();
    assert_eq!(value, 45);
    assert!(rest.is_empty());
}

#[test]
fn operators_can_be_built_one_by_one() {
    let mut table = OperatorTable::new();
    table.push(Operator::new('^', |a: i64, b: i64| a.max(b))).unwrap();
    assert!(table.push(Operator::new('^', |a: i64, _| a)).is_err());
    let parser = expression(calc::number(), &table).complete();
    assert_eq!(
        run_and_report(&parser, "3^9^4"),
        "Success, found 9, remainder: []"
    );
}
