//! `r8` — Rotor command-line shell.
//!
//! `r8` drives the Rotor front end from the command line: it reads a script,
//! lexes and parses it, and prints the program's diagnostic rendering. It is
//! the inspection tool for the front end; tree-walking execution arrives with
//! the evaluator.

use std::fs;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use rotor_core::error::RotorResult;
use rotor_core::parser::scanner::{InvalidCharPolicy, Lexer};
use rotor_core::parser::Parser;

/// Rotor JavaScript shell: lex and parse a script, then print its AST.
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the script to process.
    script: String,

    /// Dump the token stream instead of the AST.
    #[arg(long)]
    tokens: bool,

    /// Treat unrecognised characters as fatal instead of skipping them.
    #[arg(long)]
    strict: bool,
}

fn run(args: &Args, source: &str) -> RotorResult<String> {
    let policy = if args.strict {
        InvalidCharPolicy::Fatal
    } else {
        InvalidCharPolicy::Skip
    };
    let mut lexer = Lexer::new(source, &args.script).invalid_char_policy(policy);
    let tokens = lexer.lex()?;

    if args.tokens {
        let mut out = String::new();
        for token in &tokens {
            out.push_str(&format!("{}: {}\n", token.span, token.describe()));
        }
        return Ok(out);
    }

    let (program, _globals) = Parser::new(tokens).parse()?;
    Ok(format!("{program}\n"))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let source = match fs::read_to_string(&args.script) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("r8: cannot read '{}': {e}", args.script);
            return ExitCode::FAILURE;
        }
    };

    match run(&args, &source) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
