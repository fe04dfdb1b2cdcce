//! Property-based tests for the driving engine.
//!
//! Generated inputs are checked against a direct structural recognizer of the
//! call-expression language, so the table-driven loop is compared with code
//! that shares nothing with it.

use ll1_grammar::{Terminal, Token};
use ll1_parse::{parse, Action, Verdict};
use proptest::prelude::*;

const F: Token = Token::Term(Terminal::F);
const LPAREN: Token = Token::Term(Terminal::LParen);
const RPAREN: Token = Token::Term(Terminal::RParen);
const COMMA: Token = Token::Term(Terminal::Comma);

// ============================================================================
// Reference recognizer
// ============================================================================

fn is_atom(token: Token) -> bool {
    matches!(token, Token::Term(Terminal::X | Terminal::Y))
}

/// `f ( )` or `f ( atom (, atom)* )`, with no end marker anywhere.
fn reference_accepts(tokens: &[Token]) -> bool {
    let [f, lparen, args @ .., rparen] = tokens else {
        return false;
    };
    if (*f, *lparen, *rparen) != (F, LPAREN, RPAREN) {
        return false;
    }
    if args.is_empty() {
        return true;
    }
    args.len() % 2 == 1
        && args.iter().enumerate().all(|(i, &token)| {
            if i % 2 == 0 {
                is_atom(token)
            } else {
                token == COMMA
            }
        })
}

// ============================================================================
// Strategies
// ============================================================================

fn arb_terminal() -> impl Strategy<Value = Token> {
    prop::sample::select(Terminal::ALL.to_vec()).prop_map(Token::Term)
}

fn arb_atom() -> impl Strategy<Value = Token> {
    prop_oneof![Just(Token::Term(Terminal::X)), Just(Token::Term(Terminal::Y))]
}

/// Sentences of the language.
fn arb_call() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec(arb_atom(), 0..12).prop_map(|atoms| {
        let mut tokens = vec![F, LPAREN];
        for (i, atom) in atoms.into_iter().enumerate() {
            if i > 0 {
                tokens.push(COMMA);
            }
            tokens.push(atom);
        }
        tokens.push(RPAREN);
        tokens
    })
}

/// A sentence with one token replaced, inserted or removed.
fn arb_near_call() -> impl Strategy<Value = Vec<Token>> {
    (arb_call(), any::<prop::sample::Index>(), arb_terminal(), 0..3u8).prop_map(
        |(mut tokens, index, token, edit)| {
            let at = index.index(tokens.len());
            match edit {
                0 => tokens[at] = token,
                1 => tokens.insert(at, token),
                _ => {
                    tokens.remove(at);
                }
            }
            tokens
        },
    )
}

fn arb_tokens() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec(arb_terminal(), 0..16)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_sentences_are_accepted(tokens in arb_call()) {
        prop_assert_eq!(parse(&tokens, false).verdict, Verdict::Accept);
    }

    #[test]
    fn test_edited_sentences_agree_with_reference(tokens in arb_near_call()) {
        let expected = if reference_accepts(&tokens) { Verdict::Accept } else { Verdict::Error };
        prop_assert_eq!(parse(&tokens, false).verdict, expected, "{:?}", tokens);
    }

    #[test]
    fn test_arbitrary_tokens_agree_with_reference(tokens in arb_tokens()) {
        let expected = if reference_accepts(&tokens) { Verdict::Accept } else { Verdict::Error };
        prop_assert_eq!(parse(&tokens, false).verdict, expected, "{:?}", tokens);
    }

    #[test]
    fn test_parse_is_idempotent(tokens in arb_near_call()) {
        prop_assert_eq!(parse(&tokens, true), parse(&tokens, true));
    }

    #[test]
    fn test_appending_end_marker_keeps_verdict(tokens in arb_near_call()) {
        let mut with_end = tokens.clone();
        with_end.push(Token::End);
        let plain = parse(&tokens, false);
        let marked = parse(&with_end, false);
        prop_assert_eq!(plain.verdict, marked.verdict);
        prop_assert_eq!(plain.rejection, marked.rejection);
    }

    #[test]
    fn test_trace_ends_with_the_verdict(tokens in arb_near_call()) {
        let outcome = parse(&tokens, true);
        let Some(trace) = outcome.trace else {
            return Err(TestCaseError::fail("trace was requested"));
        };
        let last = trace.last().map(|e| e.action);
        match outcome.verdict {
            Verdict::Accept => prop_assert_eq!(last, Some(Action::Accept)),
            Verdict::Error => prop_assert!(matches!(last, Some(Action::Reject(_)))),
        }

        for (i, entry) in trace.iter().enumerate() {
            prop_assert_eq!(entry.step, i + 1);
            prop_assert_eq!(entry.stack.first().copied(), Some(ll1_grammar::Symbol::End));
            prop_assert_eq!(entry.input.last().copied(), Some(Token::End));
            let verdict_row = i + 1 == trace.len();
            prop_assert_eq!(
                matches!(entry.action, Action::Accept | Action::Reject(_)),
                verdict_row
            );
        }
    }
}
