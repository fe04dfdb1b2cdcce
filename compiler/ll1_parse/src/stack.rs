//! The explicit parse stack.

use ll1_grammar::{NonTerminal, Production, Symbol};
use std::fmt;

/// LIFO stack of grammar symbols, stored bottom to top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseStack {
    symbols: Vec<Symbol>,
}

impl ParseStack {
    /// `[$, start]`, bottom to top.
    pub fn new(start: NonTerminal) -> Self {
        ParseStack {
            symbols: vec![Symbol::End, Symbol::NT(start)],
        }
    }

    /// The symbol on top.
    ///
    /// An exhausted stack reads as `$`, the symbol that sits at its bottom.
    #[inline]
    pub fn top(&self) -> Symbol {
        self.symbols.last().copied().unwrap_or(Symbol::End)
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Symbol> {
        self.symbols.pop()
    }

    /// Push the right-hand side of `production` so its first symbol ends up on top.
    ///
    /// Pushes nothing for an empty production.
    pub fn expand(&mut self, production: &Production) {
        self.symbols.extend(production.rhs.iter().rev().copied());
    }

    /// Stack content, bottom to top.
    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for ParseStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_symbols(&self.symbols))
    }
}

/// Space-separated rendering shared by the stack and the trace.
pub(crate) fn join_symbols<T: fmt::Display>(symbols: &[T]) -> String {
    symbols
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
