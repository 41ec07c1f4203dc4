use std::io::{self, BufRead, Write};

use clap::Parser;
use rpncalc::calculator::{evaluator::eval_postfix, translator::to_postfix};

/// rpncalc converts infix arithmetic to postfix (RPN) notation and evaluates
/// it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the intermediate postfix form before each result.
    #[arg(short, long)]
    show_postfix: bool,

    /// Evaluate a single expression and exit instead of starting a session.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        run_line(&expression, args.show_postfix);
        return;
    }

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        println!("Please enter an arithmetic expression.");
        let _ = io::stdout().flush();

        line.clear();
        let Ok(n) = stdin.lock().read_line(&mut line) else {
            break;
        };

        // EOF reads zero bytes; an empty line ends the session either way.
        let input = line.trim_end_matches(['\r', '\n']);
        if n == 0 || input.is_empty() {
            break;
        }

        run_line(input, args.show_postfix);
    }
}

/// Translates and evaluates one expression, printing the result or `error`
/// to stdout. Translator failures are reported to stderr and never end the
/// session.
fn run_line(input: &str, show_postfix: bool) {
    match to_postfix(input) {
        Ok(postfix) => {
            if show_postfix {
                println!("RPN string = {postfix}");
            }
            match eval_postfix(&postfix) {
                Ok(value) => println!("{value}"),
                Err(e) => println!("{e}"),
            }
        },
        Err(e) => eprintln!("{e}"),
    }
}
