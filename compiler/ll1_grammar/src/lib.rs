//! Grammar table for the call-expression language.
//!
//! The language is `f ( Arg [, Arg]* )` or `f ( )`, with `Arg` either `x` or `y`.
//! This crate holds only data: the symbol types, the productions and the LL(1)
//! parse table mapping `(nonterminal, lookahead)` to a production. The driving
//! engine lives in `ll1_parse`.
//!
//! # Design
//!
//! - **Typed symbols**: terminals, nonterminals and the end marker are separate
//!   enum variants, so an unknown symbol cannot be spelled by accident.
//! - **Immutable table**: [`Grammar::call_syntax`] is built once on first use and
//!   shared by reference; there are no mutation operations.

mod error;
mod grammar;
mod symbol;

pub use error::{GrammarError, TokenError};
pub use grammar::{Entry, Grammar, Production};
pub use symbol::{NonTerminal, Symbol, Terminal, Token, END_MARKER, EPSILON};
