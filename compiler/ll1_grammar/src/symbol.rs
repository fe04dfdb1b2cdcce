//! Grammar symbols.
//!
//! Terminals, nonterminals and the end marker are distinct enum variants, so the
//! three sets are disjoint by construction. The empty production has no symbol of
//! its own: it is a production whose right-hand side is empty.

use crate::TokenError;
use std::fmt;
use std::str::FromStr;

/// Text of the end marker.
pub const END_MARKER: &str = "$";

/// Text used when printing an empty production.
pub const EPSILON: &str = "ε";

/// Terminal symbols of the call-expression alphabet.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Terminal {
    /// `f`
    F,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `x`
    X,
    /// `y`
    Y,
}

impl Terminal {
    /// Every terminal, in table column order.
    pub const ALL: [Terminal; 6] = [
        Terminal::F,
        Terminal::LParen,
        Terminal::RParen,
        Terminal::Comma,
        Terminal::X,
        Terminal::Y,
    ];

    /// The literal text of this terminal.
    pub fn as_str(self) -> &'static str {
        match self {
            Terminal::F => "f",
            Terminal::LParen => "(",
            Terminal::RParen => ")",
            Terminal::Comma => ",",
            Terminal::X => "x",
            Terminal::Y => "y",
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nonterminal symbols.
///
/// Printed with the single-letter names used in the parse table:
/// `C` (call), `A` (argument list), `T` (argument tail), `E` (argument).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum NonTerminal {
    Call,
    Args,
    Tail,
    Arg,
}

impl NonTerminal {
    /// Every nonterminal, in table row order.
    pub const ALL: [NonTerminal; 4] = [
        NonTerminal::Call,
        NonTerminal::Args,
        NonTerminal::Tail,
        NonTerminal::Arg,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NonTerminal::Call => "C",
            NonTerminal::Args => "A",
            NonTerminal::Tail => "T",
            NonTerminal::Arg => "E",
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An input token: a terminal or the end marker.
///
/// Nonterminals never appear in the input, so they are not representable here.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Token {
    Term(Terminal),
    End,
}

impl Token {
    #[inline]
    pub fn is_end(self) -> bool {
        matches!(self, Token::End)
    }
}

impl From<Terminal> for Token {
    fn from(terminal: Terminal) -> Self {
        Token::Term(terminal)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Term(t) => fmt::Display::fmt(t, f),
            Token::End => f.write_str(END_MARKER),
        }
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == END_MARKER {
            return Ok(Token::End);
        }
        Terminal::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .map(Token::Term)
            .ok_or_else(|| TokenError::Unknown(s.to_owned()))
    }
}

/// A symbol on the parse stack or in a production.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Symbol {
    T(Terminal),
    NT(NonTerminal),
    End,
}

impl Symbol {
    pub fn is_end(self) -> bool {
        matches!(self, Symbol::End)
    }

    /// Whether this stack symbol is matched literally by `token`.
    ///
    /// Only terminals and the end marker can match; a nonterminal never does.
    #[inline]
    pub fn matches(self, token: Token) -> bool {
        match (self, token) {
            (Symbol::T(expected), Token::Term(found)) => expected == found,
            (Symbol::End, Token::End) => true,
            _ => false,
        }
    }
}

impl From<Terminal> for Symbol {
    fn from(terminal: Terminal) -> Self {
        Symbol::T(terminal)
    }
}

impl From<NonTerminal> for Symbol {
    fn from(nonterminal: NonTerminal) -> Self {
        Symbol::NT(nonterminal)
    }
}

impl From<Token> for Symbol {
    fn from(token: Token) -> Self {
        match token {
            Token::Term(t) => Symbol::T(t),
            Token::End => Symbol::End,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::T(t) => fmt::Display::fmt(t, f),
            Symbol::NT(nt) => fmt::Display::fmt(nt, f),
            Symbol::End => f.write_str(END_MARKER),
        }
    }
}
