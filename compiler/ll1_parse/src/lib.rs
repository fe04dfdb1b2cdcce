//! Table-driven LL(1) driving engine.
//!
//! Decides whether a token sequence is a sentence of a [`Grammar`] by running
//! the classic predictive-parsing loop over an explicit stack:
//!
//! 1. Start with `[$, start]` on the stack and the cursor on the first token.
//! 2. `$` on top with `$` as lookahead accepts.
//! 3. A terminal on top must equal the lookahead; both are consumed.
//! 4. A nonterminal on top is replaced by the table's production for the
//!    lookahead, pushed in reverse so its first symbol is on top.
//! 5. Anything else is an error, reported immediately.
//!
//! No tree is built and there is no error recovery. A [`Trace`] of every step
//! can be requested and is returned to the caller instead of being printed.

mod cursor;
mod outcome;
mod parser;
mod stack;
mod trace;

pub use cursor::Cursor;
pub use outcome::{ParseOutcome, Rejection, Verdict};
pub use parser::{ParseOptions, Parser};
pub use stack::ParseStack;
pub use trace::{Action, Trace, TraceEntry};

use ll1_grammar::{Grammar, Token};

/// Parse `tokens` against the call-expression grammar.
///
/// Convenience for `Parser::with_options(Grammar::call_syntax(), ..).parse(tokens)`.
pub fn parse(tokens: &[Token], trace: bool) -> ParseOutcome {
    Parser::with_options(Grammar::call_syntax(), ParseOptions { trace }).parse(tokens)
}

#[cfg(test)]
mod tests;
