//! The table-driven driving loop.

use crate::{Action, Cursor, ParseOutcome, ParseStack, Rejection, Trace, TraceEntry, Verdict};
use ll1_grammar::{Grammar, Symbol, Token};
use tracing::{debug, trace};

/// Per-call settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Record a [`Trace`] of every step.
    pub trace: bool,
}

/// LL(1) predictive parser driven by a [`Grammar`]'s parse table.
///
/// Holds no per-parse state: each [`Parser::parse`] call builds its own stack
/// and cursor, so one parser (and one grammar) can serve any number of calls,
/// including from several threads at once.
#[derive(Copy, Clone, Debug)]
pub struct Parser<'g> {
    grammar: &'g Grammar,
    options: ParseOptions,
}

impl<'g> Parser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self::with_options(grammar, ParseOptions::default())
    }

    pub fn with_options(grammar: &'g Grammar, options: ParseOptions) -> Self {
        Parser { grammar, options }
    }

    /// Decide whether `tokens` is a sentence of the grammar.
    ///
    /// `$` is appended when `tokens` is empty or does not already end with it.
    /// Stops at the first error; there is no recovery.
    pub fn parse(&self, tokens: &[Token]) -> ParseOutcome {
        let mut cursor = Cursor::new(tokens);
        let mut stack = ParseStack::new(self.grammar.start());
        let mut recorded = self.options.trace.then(Trace::default);
        let mut step = 1;

        loop {
            let top = stack.top();
            let lookahead = cursor.current();
            let action = self.decide(top, lookahead, cursor.position());

            trace!(step, stack = %stack, lookahead = %lookahead, action = %action, "step");
            if let Some(recorded) = recorded.as_mut() {
                recorded.push(TraceEntry {
                    step,
                    stack: stack.as_slice().to_vec(),
                    input: cursor.remaining().to_vec(),
                    action,
                });
            }

            match action {
                Action::Match(_) => {
                    stack.pop();
                    cursor.advance();
                }
                Action::Expand(production) => {
                    stack.pop();
                    stack.expand(&production);
                }
                Action::Accept => return finish(Verdict::Accept, None, recorded, step),
                Action::Reject(rejection) => {
                    return finish(Verdict::Error, Some(rejection), recorded, step);
                }
            }
            step += 1;
        }
    }

    /// Choose the action for one step without touching any state.
    fn decide(&self, top: Symbol, lookahead: Token, position: usize) -> Action {
        // Checked first: `$` would otherwise go through the generic match below.
        if top.is_end() && lookahead.is_end() {
            return Action::Accept;
        }

        if top.is_end() || self.grammar.is_terminal(top) {
            return match top {
                Symbol::T(expected) if top.matches(lookahead) => Action::Match(expected),
                _ => Action::Reject(Rejection::Mismatch {
                    expected: top,
                    found: lookahead,
                    position,
                }),
            };
        }

        match top {
            Symbol::NT(nonterminal) if self.grammar.is_nonterminal(top) => {
                match self.grammar.lookup(nonterminal, lookahead) {
                    Some(&production) => Action::Expand(production),
                    None => Action::Reject(Rejection::NoRule {
                        nonterminal,
                        lookahead,
                        position,
                    }),
                }
            }
            _ => Action::Reject(Rejection::UnknownSymbol {
                symbol: top,
                position,
            }),
        }
    }
}

fn finish(
    verdict: Verdict,
    rejection: Option<Rejection>,
    trace: Option<Trace>,
    steps: usize,
) -> ParseOutcome {
    match rejection {
        Some(rejection) => debug!(%verdict, steps, %rejection, "parse finished"),
        None => debug!(%verdict, steps, "parse finished"),
    }
    ParseOutcome {
        verdict,
        rejection,
        trace,
    }
}
