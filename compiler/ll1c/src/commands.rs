//! Command implementations and argument handling.
//!
//! Commands write to any `io::Write` so they can be exercised without a
//! process; `main` hands them a locked stdout.

use ll1_grammar::{Grammar, Terminal, Token, TokenError};
use ll1_parse::{ParseOptions, Parser, Verdict};
use std::io::{self, Write};
use tracing::debug;

/// Exit status when the input is accepted (or a command succeeds).
pub const EXIT_OK: i32 = 0;
/// Exit status when the input is rejected or the grammar fails validation.
pub const EXIT_REJECTED: i32 = 1;
/// Exit status for bad command lines.
pub const EXIT_USAGE: i32 = 2;

pub const USAGE: &str = "\
Usage: ll1c <command> [options]

Commands:
  parse [-v|--trace] <token>...   Recognize a token sequence (tokens: f ( ) , x y $)
  demo                            Run the two built-in example inputs with tracing
  table                           Print and validate the grammar's parse table
  help                            Show this message

Tokens may be separate arguments or whitespace-separated within one argument:
  ll1c parse -v 'f ( x , y )'

Set RUST_LOG=ll1_parse=trace to log every engine step.
";

const F: Token = Token::Term(Terminal::F);
const LPAREN: Token = Token::Term(Terminal::LParen);
const RPAREN: Token = Token::Term(Terminal::RParen);
const COMMA: Token = Token::Term(Terminal::Comma);
const X: Token = Token::Term(Terminal::X);
const Y: Token = Token::Term(Terminal::Y);

/// The two inputs of the demo, with their labels.
const DEMO_INPUTS: [(&str, &[Token]); 2] = [
    ("Legitimate", &[F, LPAREN, X, COMMA, Y, COMMA, X, RPAREN]),
    ("Illegitimate", &[F, X, COMMA, Y, RPAREN]),
];

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Parse { tokens: Vec<Token>, trace: bool },
    Demo,
    Table,
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("unexpected argument `{0}` for `{1}`")]
    UnexpectedArgument(String, &'static str),

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Interpret the command line, program name excluded.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    match command.as_str() {
        "parse" => parse_parse_args(rest),
        "demo" => no_arguments(rest, "demo").map(|()| Command::Demo),
        "table" => no_arguments(rest, "table").map(|()| Command::Table),
        "help" | "-h" | "--help" => Ok(Command::Help),
        other => Err(CliError::UnknownCommand(other.to_owned())),
    }
}

fn parse_parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut trace = false;
    let mut tokens = Vec::new();

    for arg in args {
        if arg == "-v" || arg == "--trace" {
            trace = true;
        } else if arg.len() > 1 && arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else {
            for text in arg.split_whitespace() {
                tokens.push(text.parse::<Token>()?);
            }
        }
    }

    Ok(Command::Parse { tokens, trace })
}

fn no_arguments(args: &[String], command: &'static str) -> Result<(), CliError> {
    match args.first() {
        Some(arg) => Err(CliError::UnexpectedArgument(arg.clone(), command)),
        None => Ok(()),
    }
}

/// Execute `command`, returning the process exit status.
pub fn run(command: &Command, out: &mut impl Write) -> io::Result<i32> {
    match command {
        Command::Parse { tokens, trace } => {
            let verdict = parse_tokens(tokens, *trace, out)?;
            Ok(if verdict.is_accept() { EXIT_OK } else { EXIT_REJECTED })
        }
        Command::Demo => {
            run_demo(out)?;
            Ok(EXIT_OK)
        }
        Command::Table => print_table(Grammar::call_syntax(), out),
        Command::Help => {
            out.write_all(USAGE.as_bytes())?;
            Ok(EXIT_OK)
        }
    }
}

/// Parse `tokens`, print the trace when asked, then the verdict.
pub fn parse_tokens(tokens: &[Token], trace: bool, out: &mut impl Write) -> io::Result<Verdict> {
    let grammar = Grammar::call_syntax();
    let outcome = Parser::with_options(grammar, ParseOptions { trace }).parse(tokens);

    if let Some(steps) = &outcome.trace {
        write!(out, "{steps}")?;
        writeln!(out)?;
    }
    writeln!(out, "Result: {}", outcome.verdict)?;

    if let Some(rejection) = &outcome.rejection {
        let expected = rejection
            .expected(grammar)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "error: {rejection}")?;
        if !expected.is_empty() {
            writeln!(out, "  expected one of: {expected}")?;
        }
    }
    Ok(outcome.verdict)
}

/// Run the built-in legitimate and illegitimate examples with tracing.
pub fn run_demo(out: &mut impl Write) -> io::Result<()> {
    for (i, &(label, tokens)) in DEMO_INPUTS.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let text = tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "Test {} - {label}: {text}", i + 1)?;
        let verdict = parse_tokens(tokens, true, out)?;
        debug!(label, %verdict, "demo input parsed");
    }
    Ok(())
}

/// Print `grammar` and its validation result.
pub fn print_table(grammar: &Grammar, out: &mut impl Write) -> io::Result<i32> {
    write!(out, "{grammar}")?;
    match grammar.validate() {
        Ok(()) => {
            writeln!(out, "grammar is LL(1)")?;
            Ok(EXIT_OK)
        }
        Err(e) => {
            writeln!(out, "invalid grammar: {e}")?;
            Ok(EXIT_REJECTED)
        }
    }
}
