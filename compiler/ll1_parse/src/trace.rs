//! Step-by-step parse trace.
//!
//! The engine records one [`TraceEntry`] per loop iteration into a [`Trace`] the
//! caller owns; printing it is up to the caller. Rendering follows the classic
//! textbook layout:
//!
//! ```text
//! Step Stack                Input                Action
//! ------------------------------------------------------------
//! 1    $ C                  f ( ) $              C -> f ( A )
//! 2    $ ) A ( f            f ( ) $              match 'f'
//! ```

use crate::stack::join_symbols;
use crate::Rejection;
use ll1_grammar::{Production, Symbol, Terminal, Token};
use std::fmt;

const STEP_WIDTH: usize = 4;
const COLUMN_WIDTH: usize = 20;
const RULE_WIDTH: usize = 60;

/// What one step of the engine does.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Action {
    /// Pop a terminal and consume the matching lookahead.
    Match(Terminal),
    /// Replace a nonterminal by a production's right-hand side.
    Expand(Production),
    Accept,
    Reject(Rejection),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Match(t) => write!(f, "match '{t}'"),
            Action::Expand(production) => write!(f, "{production}"),
            Action::Accept => f.write_str("ACCEPT"),
            Action::Reject(Rejection::Mismatch { expected, .. }) => {
                write!(f, "ERROR (expected '{expected}')")
            }
            Action::Reject(Rejection::NoRule {
                nonterminal,
                lookahead,
                ..
            }) => write!(f, "ERROR (no rule for {nonterminal}, {lookahead})"),
            Action::Reject(Rejection::UnknownSymbol { symbol, .. }) => {
                write!(f, "ERROR (unknown symbol '{symbol}')")
            }
        }
    }
}

/// Snapshot of one step, taken before the step's action is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    /// 1-based step number.
    pub step: usize,
    /// Stack content, bottom to top.
    pub stack: Vec<Symbol>,
    /// Unconsumed input, lookahead first.
    pub input: Vec<Token>,
    pub action: Action,
}

impl TraceEntry {
    pub fn stack_text(&self) -> String {
        join_symbols(&self.stack)
    }

    pub fn input_text(&self) -> String {
        join_symbols(&self.input)
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<STEP_WIDTH$} {:<COLUMN_WIDTH$} {:<COLUMN_WIDTH$} {}",
            self.step,
            self.stack_text(),
            self.input_text(),
            self.action
        )
    }
}

/// Ordered trace of a whole parse; the last entry is ACCEPT or ERROR.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub(crate) fn push(&mut self, entry: TraceEntry) {
        debug_assert_eq!(entry.step, self.entries.len() + 1, "trace steps must be consecutive");
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The final step, which carries the verdict.
    pub fn last(&self) -> Option<&TraceEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEntry;
    type IntoIter = std::slice::Iter<'a, TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<STEP_WIDTH$} {:<COLUMN_WIDTH$} {:<COLUMN_WIDTH$} Action",
            "Step", "Stack", "Input"
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
