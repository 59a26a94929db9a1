use std::rc::Rc;

use parse_all::{
    calc, choice, deferred, many1, optionally_followed, run_and_report, satisfy, symbol,
    BoxedParser, Func, GrammarError, Parser,
};

fn number() -> BoxedParser<char, i32> {
    many1(satisfy(|c: &char| c.is_ascii_digit()))
        .filter_map(|digits: Vec<char>| digits.into_iter().collect::<String>().parse::<i32>().ok())
        .boxed()
}

/// `next (op next)*`, folded to the left.
fn chain(
    next: BoxedParser<char, i32>,
    ops: &[(char, fn(i32, i32) -> i32)],
) -> BoxedParser<char, i32> {
    let mut step: Option<BoxedParser<char, Func<i32, i32>>> = None;
    for &(op, f) in ops {
        let this = symbol(op)
            .ignore_then(next.clone())
            .map(move |rhs: i32| Rc::new(move |lhs: i32| f(lhs, rhs)) as Func<i32, i32>)
            .boxed();
        step = Some(match step {
            Some(step) => choice(step, this).boxed(),
            None => this,
        });
    }
    match step {
        Some(step) => {
            let steps = many1(step).map(|steps: Vec<Func<i32, i32>>| {
                Rc::new(move |lhs: i32| steps.iter().fold(lhs, |acc, f| f(acc))) as Func<i32, i32>
            });
            optionally_followed(next, steps).boxed()
        }
        None => next,
    }
}

fn expr() -> BoxedParser<char, i32> {
    let term = choice(
        number(),
        symbol('(')
            .ignore_then(deferred(expr))
            .then_ignore(symbol(')')),
    )
    .boxed();
    let mul_expr = chain(term, &[('*', |a, b| a * b), ('/', |a, b| a / b)]);
    chain(mul_expr, &[('+', |a, b| a + b), ('-', |a, b| a - b)])
}

fn main() -> Result<(), GrammarError> {
    let input = "11+2*(3+4)/5";

    // `*` and `/` share a level here, so this reads ((2*(3+4))/5).
    let parser = expr().complete();
    println!("by hand:\n{}", run_and_report(&parser, input));

    let parser = calc::calculator(calc::arithmetic_table()?).complete();
    println!("table:\n{}", run_and_report(&parser, input));
    Ok(())
}
