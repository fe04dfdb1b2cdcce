//! The LL(1) parse table and its symbol sets.

use crate::{GrammarError, NonTerminal, Symbol, Terminal, Token, EPSILON};
use rustc_hash::FxHashMap;
use std::fmt;
use std::iter;
use std::sync::LazyLock;
use tracing::debug;

/// The right-hand side a nonterminal expands to.
///
/// An empty `rhs` is the empty production and expands to nothing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Production {
    pub lhs: NonTerminal,
    pub rhs: &'static [Symbol],
}

impl Production {
    pub const fn new(lhs: NonTerminal, rhs: &'static [Symbol]) -> Self {
        Production { lhs, rhs }
    }

    #[inline]
    pub fn is_epsilon(&self) -> bool {
        self.rhs.is_empty()
    }

    /// The right-hand side, space separated, or `ε` when empty.
    pub fn rhs_text(&self) -> String {
        if self.is_epsilon() {
            return EPSILON.to_owned();
        }
        self.rhs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.lhs, self.rhs_text())
    }
}

/// One cell of the parse table: `production` applies to `production.lhs`
/// when the lookahead is `lookahead`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Entry {
    pub lookahead: Token,
    pub production: Production,
}

impl Entry {
    #[inline]
    pub fn nonterminal(&self) -> NonTerminal {
        self.production.lhs
    }

    #[inline]
    fn key(&self) -> (NonTerminal, Token) {
        (self.production.lhs, self.lookahead)
    }
}

const F: Symbol = Symbol::T(Terminal::F);
const LPAREN: Symbol = Symbol::T(Terminal::LParen);
const RPAREN: Symbol = Symbol::T(Terminal::RParen);
const COMMA: Symbol = Symbol::T(Terminal::Comma);
const X: Symbol = Symbol::T(Terminal::X);
const Y: Symbol = Symbol::T(Terminal::Y);
const ARGS: Symbol = Symbol::NT(NonTerminal::Args);
const TAIL: Symbol = Symbol::NT(NonTerminal::Tail);
const ARG: Symbol = Symbol::NT(NonTerminal::Arg);

/// Table entries of the call-expression grammar.
///
/// ```text
/// C -> f ( A )
/// A -> E T | ε
/// T -> , E T | ε
/// E -> x | y
/// ```
const CALL_SYNTAX_ENTRIES: &[Entry] = &[
    Entry {
        lookahead: Token::Term(Terminal::F),
        production: Production::new(NonTerminal::Call, &[F, LPAREN, ARGS, RPAREN]),
    },
    Entry {
        lookahead: Token::Term(Terminal::X),
        production: Production::new(NonTerminal::Args, &[ARG, TAIL]),
    },
    Entry {
        lookahead: Token::Term(Terminal::Y),
        production: Production::new(NonTerminal::Args, &[ARG, TAIL]),
    },
    Entry {
        lookahead: Token::Term(Terminal::RParen),
        production: Production::new(NonTerminal::Args, &[]),
    },
    Entry {
        lookahead: Token::Term(Terminal::Comma),
        production: Production::new(NonTerminal::Tail, &[COMMA, ARG, TAIL]),
    },
    Entry {
        lookahead: Token::Term(Terminal::RParen),
        production: Production::new(NonTerminal::Tail, &[]),
    },
    Entry {
        lookahead: Token::Term(Terminal::X),
        production: Production::new(NonTerminal::Arg, &[X]),
    },
    Entry {
        lookahead: Token::Term(Terminal::Y),
        production: Production::new(NonTerminal::Arg, &[Y]),
    },
];

static CALL_SYNTAX: LazyLock<Grammar> = LazyLock::new(|| {
    Grammar::new(
        NonTerminal::Call,
        &Terminal::ALL,
        &NonTerminal::ALL,
        CALL_SYNTAX_ENTRIES,
    )
});

/// An LL(1) grammar: symbol sets, start symbol and parse table.
///
/// Immutable once built. The call-expression grammar is shared process-wide
/// through [`Grammar::call_syntax`].
#[derive(Debug)]
pub struct Grammar {
    start: NonTerminal,
    terminals: &'static [Terminal],
    nonterminals: &'static [NonTerminal],
    entries: &'static [Entry],
    table: FxHashMap<(NonTerminal, Token), Production>,
}

impl Grammar {
    /// Build a grammar from its declared symbols and table entries.
    ///
    /// When two entries share a key, the first one is used for lookups;
    /// [`Grammar::validate`] reports the conflict.
    pub fn new(
        start: NonTerminal,
        terminals: &'static [Terminal],
        nonterminals: &'static [NonTerminal],
        entries: &'static [Entry],
    ) -> Self {
        let mut table = FxHashMap::default();
        for entry in entries {
            table.entry(entry.key()).or_insert(entry.production);
        }
        Grammar {
            start,
            terminals,
            nonterminals,
            entries,
            table,
        }
    }

    /// The call-expression grammar, built on first use.
    pub fn call_syntax() -> &'static Grammar {
        &CALL_SYNTAX
    }

    #[inline]
    pub fn start(&self) -> NonTerminal {
        self.start
    }

    /// The production for `nonterminal` under `lookahead`, if the table has one.
    ///
    /// `None` is the normal signal that the input is malformed at this point.
    #[inline]
    pub fn lookup(&self, nonterminal: NonTerminal, lookahead: Token) -> Option<&Production> {
        self.table.get(&(nonterminal, lookahead))
    }

    pub fn is_terminal(&self, symbol: Symbol) -> bool {
        match symbol {
            Symbol::T(t) => self.terminals.contains(&t),
            Symbol::NT(_) | Symbol::End => false,
        }
    }

    pub fn is_nonterminal(&self, symbol: Symbol) -> bool {
        match symbol {
            Symbol::NT(nt) => self.nonterminals.contains(&nt),
            Symbol::T(_) | Symbol::End => false,
        }
    }

    fn is_declared(&self, symbol: Symbol) -> bool {
        symbol.is_end() || self.is_terminal(symbol) || self.is_nonterminal(symbol)
    }

    /// Table entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    /// Distinct productions in declaration order.
    pub fn productions(&self) -> Vec<Production> {
        let mut productions: Vec<Production> = Vec::with_capacity(self.entries.len());
        for entry in self.entries {
            if !productions.contains(&entry.production) {
                productions.push(entry.production);
            }
        }
        productions
    }

    /// Lookaheads for which `nonterminal` has a table entry.
    pub fn expected(&self, nonterminal: NonTerminal) -> Vec<Token> {
        let mut expected = Vec::new();
        for entry in self.entries.iter().filter(|e| e.nonterminal() == nonterminal) {
            if !expected.contains(&entry.lookahead) {
                expected.push(entry.lookahead);
            }
        }
        expected
    }

    /// Check the table against its declared symbol sets and the LL(1) property.
    pub fn validate(&self) -> Result<(), GrammarError> {
        if !self.nonterminals.contains(&self.start) {
            return Err(GrammarError::UndeclaredStart(self.start));
        }

        let mut seen: FxHashMap<(NonTerminal, Token), Production> = FxHashMap::default();
        for entry in self.entries {
            let production = entry.production;
            let used = iter::once(Symbol::NT(production.lhs))
                .chain(iter::once(Symbol::from(entry.lookahead)))
                .chain(production.rhs.iter().copied());
            for symbol in used {
                if !self.is_declared(symbol) {
                    return Err(GrammarError::Undeclared { symbol, production });
                }
            }

            if let Some(first) = seen.insert(entry.key(), production) {
                if first != production {
                    return Err(GrammarError::Conflict {
                        nonterminal: production.lhs,
                        lookahead: entry.lookahead,
                        first,
                        second: production,
                    });
                }
            }
        }

        if let Some(&missing) = self
            .nonterminals
            .iter()
            .find(|&&nt| !self.entries.iter().any(|e| e.nonterminal() == nt))
        {
            return Err(GrammarError::MissingRow(missing));
        }

        debug!(
            entries = self.entries.len(),
            nonterminals = self.nonterminals.len(),
            "grammar table validated"
        );
        Ok(())
    }
}

impl fmt::Display for Grammar {
    /// Productions followed by the table, one row per nonterminal and one
    /// column per lookahead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "start symbol: {}", self.start)?;
        writeln!(f, "productions:")?;
        for production in self.productions() {
            writeln!(f, "  {production}")?;
        }

        writeln!(f, "parse table:")?;
        let columns: Vec<Token> = self
            .terminals
            .iter()
            .copied()
            .map(Token::Term)
            .chain(iter::once(Token::End))
            .collect();
        let width = self
            .entries
            .iter()
            .map(|e| e.production.rhs_text().chars().count())
            .max()
            .unwrap_or(1);

        write!(f, "  {:<2}", "")?;
        for column in &columns {
            write!(f, " | {:<width$}", column.to_string())?;
        }
        writeln!(f)?;

        for &nonterminal in self.nonterminals {
            write!(f, "  {:<2}", nonterminal.name())?;
            for &column in &columns {
                let cell = self
                    .lookup(nonterminal, column)
                    .map(Production::rhs_text)
                    .unwrap_or_default();
                write!(f, " | {cell:<width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
