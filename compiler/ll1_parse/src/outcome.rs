//! Parse results: the verdict and, on rejection, why.

use crate::Trace;
use ll1_grammar::{Grammar, NonTerminal, Symbol, Token};
use std::fmt;

/// The two possible answers of the recognizer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Verdict {
    Accept,
    Error,
}

impl Verdict {
    #[inline]
    pub fn is_accept(self) -> bool {
        matches!(self, Verdict::Accept)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accept => f.write_str("ACCEPT"),
            Verdict::Error => f.write_str("ERROR"),
        }
    }
}

/// Why a parse stopped with [`Verdict::Error`].
///
/// `position` is the index of the lookahead token in the normalised input.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Rejection {
    /// A terminal (or `$`) on the stack differs from the lookahead.
    Mismatch {
        expected: Symbol,
        found: Token,
        position: usize,
    },
    /// The table has no entry for the nonterminal on top and the lookahead.
    NoRule {
        nonterminal: NonTerminal,
        lookahead: Token,
        position: usize,
    },
    /// A stack symbol the grammar never declared. Only a malformed table can
    /// produce this; it says nothing about the input.
    UnknownSymbol { symbol: Symbol, position: usize },
}

impl Rejection {
    pub fn position(&self) -> usize {
        match *self {
            Rejection::Mismatch { position, .. }
            | Rejection::NoRule { position, .. }
            | Rejection::UnknownSymbol { position, .. } => position,
        }
    }

    /// True when the grammar, not the input, is at fault.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Rejection::UnknownSymbol { .. })
    }

    /// Lookaheads that would have let the parse continue at this point.
    pub fn expected(&self, grammar: &Grammar) -> Vec<Token> {
        match *self {
            Rejection::Mismatch { expected, .. } => match expected {
                Symbol::T(t) => vec![Token::Term(t)],
                Symbol::End => vec![Token::End],
                Symbol::NT(nt) => grammar.expected(nt),
            },
            Rejection::NoRule { nonterminal, .. } => grammar.expected(nonterminal),
            Rejection::UnknownSymbol { .. } => Vec::new(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Mismatch {
                expected,
                found,
                position,
            } => write!(
                f,
                "expected '{expected}', found '{found}' at token {position}"
            ),
            Rejection::NoRule {
                nonterminal,
                lookahead,
                position,
            } => write!(
                f,
                "no rule for {nonterminal} on '{lookahead}' at token {position}"
            ),
            Rejection::UnknownSymbol { symbol, .. } => {
                write!(f, "symbol '{symbol}' is not declared by the grammar")
            }
        }
    }
}

/// Everything a parse call returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutcome {
    pub verdict: Verdict,
    /// Set exactly when `verdict` is [`Verdict::Error`].
    pub rejection: Option<Rejection>,
    /// Step-by-step record, present when tracing was requested.
    pub trace: Option<Trace>,
}

impl ParseOutcome {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accept()
    }
}
