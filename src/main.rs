use std::io::{self, BufRead};

use clap::Parser;
use rpncalc::{DivisionMode, Engine, interpreter::lexer::format_tokens};
use tracing_subscriber::EnvFilter;

/// rpncalc evaluates an arithmetic expression made of numbers, `+ - * /` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the postfix (reverse Polish) form of the expression before the
    /// result.
    #[arg(short, long)]
    postfix: bool,

    /// Reports division by zero as an error instead of returning inf or NaN.
    #[arg(short, long)]
    strict_division: bool,

    /// The expression to evaluate. A single line is read from standard input
    /// when omitted.
    expression: Option<String>,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    let expression = args.expression.unwrap_or_else(|| {
                                         read_line().unwrap_or_else(|e| {
                                                        eprintln!("Failed to read an expression from standard input: {e}");
                                                        std::process::exit(1);
                                                    })
                                     });

    let division_mode = if args.strict_division {
        DivisionMode::Strict
    } else {
        DivisionMode::Ieee754
    };

    let mut engine = Engine::with_division_mode(division_mode);

    if let Err(e) = engine.parse(&expression) {
        eprintln!("Failed to parse expression: {e}");
        std::process::exit(1);
    }

    if args.postfix {
        println!("{}", format_tokens(engine.postfix()));
    }

    match engine.run() {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("Failed to evaluate expression: {e}");
            std::process::exit(1);
        },
    }
}

fn read_line() -> io::Result<String> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input"));
    }
    Ok(line)
}
