use clap::Parser as _;
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use parse_all::{calc, Parser, Report};

/// Evaluate an integer expression and print every derivation.
#[derive(Debug, clap::Parser)]
#[command(name = "calc", version, about)]
struct Args {
    /// The expression to evaluate, e.g. "2*(3+4)".
    #[arg(value_name = "EXPR")]
    expr: String,

    /// Operator symbols from loosest to tightest binding, each one of + - * /.
    #[arg(long, default_value = "+-*/")]
    operators: String,

    /// Also report derivations that leave part of the input unparsed.
    #[arg(long)]
    partial: bool,

    /// Stop after the first derivation.
    #[arg(long)]
    first: bool,
}

fn run_calc() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG selects which events get printed; the report itself goes to
    // stdout, so logging goes to stderr.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))?;
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let table = calc::table_from_symbols(&args.operators)?;
    event!(Level::INFO, operators = ?table, "operator table");

    let expression = calc::calculator(table);
    let parser = if args.partial {
        expression
    } else {
        expression.complete().boxed()
    };

    let limit = if args.first { 1 } else { usize::MAX };
    let report = Report::take(&parser, args.expr.as_str(), limit);
    if report.len() > 1 {
        event!(
            Level::INFO,
            derivations = report.len(),
            "input has more than one derivation"
        );
    }
    println!("{report}");
    if report.is_failure() {
        std::process::exit(2);
    }
    Ok(())
}

fn main() {
    match run_calc() {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}
