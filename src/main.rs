// exparse: interactive shell around the expression parser

use std::io::{self, Write};

use clap::Parser;
use crossterm::style::Stylize;

use exparse::parser::lexer::Lexer;

/// Parses one-line arithmetic expressions into syntax trees.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Parse a single expression and exit instead of starting the shell.
    expression: Option<String>,

    /// Print the token stream instead of the syntax tree.
    #[arg(short, long)]
    tokens: bool,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        if !run_line(&expression, args.tokens) {
            std::process::exit(1);
        }
        return;
    }

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("expr > ");
        if io::stdout().flush().is_err() {
            break;
        }

        input.clear();
        match stdin.read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }

        // A failed line is reported and the shell keeps accepting input.
        run_line(line, args.tokens);
    }
}

/// Run one line through the pipeline and print the outcome.
///
/// Returns false if the line failed to lex or parse.
fn run_line(line: &str, tokens_only: bool) -> bool {
    if tokens_only {
        let mut lexer = Lexer::new(line);
        match lexer.tokenize() {
            Ok(tokens) => {
                let rendered: Vec<String> =
                    tokens.iter().map(ToString::to_string).collect();
                println!("[{}]", rendered.join(", "));
                true
            }
            Err(err) => {
                eprintln!("{}", err.to_string().red());
                false
            }
        }
    } else {
        match exparse::parse_line(line) {
            Ok(tree) => {
                println!("{}", tree);
                true
            }
            Err(err) => {
                eprintln!("{}", err.to_string().red());
                false
            }
        }
    }
}
