//! Errors raised outside of parsing proper: token conversion and table checks.

use crate::{NonTerminal, Production, Symbol, Token};

/// A piece of text that is not a token of the call-expression alphabet.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("unknown token `{0}` (expected one of: f ( ) , x y $)")]
    Unknown(String),
}

/// A problem found by [`Grammar::validate`](crate::Grammar::validate).
///
/// These describe a malformed table, never malformed input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("start symbol {0} is not a declared nonterminal")]
    UndeclaredStart(NonTerminal),

    #[error("symbol `{symbol}` used by `{production}` is not declared")]
    Undeclared {
        symbol: Symbol,
        production: Production,
    },

    #[error("LL(1) conflict on ({nonterminal}, {lookahead}): `{first}` and `{second}`")]
    Conflict {
        nonterminal: NonTerminal,
        lookahead: Token,
        first: Production,
        second: Production,
    },

    #[error("nonterminal {0} has no table entries")]
    MissingRow(NonTerminal),
}
