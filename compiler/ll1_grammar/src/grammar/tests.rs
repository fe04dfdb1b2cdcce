use super::*;
use pretty_assertions::assert_eq;

fn term(t: Terminal) -> Token {
    Token::Term(t)
}

// === Lookup ===

#[test]
fn test_call_row_has_single_entry_on_f() {
    let grammar = Grammar::call_syntax();
    let production = grammar.lookup(NonTerminal::Call, term(Terminal::F));
    assert_eq!(production.map(ToString::to_string).as_deref(), Some("C -> f ( A )"));

    for terminal in Terminal::ALL.into_iter().filter(|&t| t != Terminal::F) {
        assert!(grammar.lookup(NonTerminal::Call, term(terminal)).is_none());
    }
}

#[test]
fn test_empty_productions_on_close_paren() {
    let grammar = Grammar::call_syntax();
    for nonterminal in [NonTerminal::Args, NonTerminal::Tail] {
        let production = grammar.lookup(nonterminal, term(Terminal::RParen));
        assert!(production.is_some_and(Production::is_epsilon), "{nonterminal}");
    }
}

#[test]
fn test_arg_row_matches_atoms() {
    let grammar = Grammar::call_syntax();
    let x = grammar.lookup(NonTerminal::Arg, term(Terminal::X));
    let y = grammar.lookup(NonTerminal::Arg, term(Terminal::Y));
    assert_eq!(x.map(|p| p.rhs), Some(&[Symbol::T(Terminal::X)][..]));
    assert_eq!(y.map(|p| p.rhs), Some(&[Symbol::T(Terminal::Y)][..]));
}

#[test]
fn test_missing_entries_are_absent() {
    let grammar = Grammar::call_syntax();
    assert!(grammar.lookup(NonTerminal::Call, Token::End).is_none());
    assert!(grammar.lookup(NonTerminal::Arg, term(Terminal::RParen)).is_none());
    assert!(grammar.lookup(NonTerminal::Tail, term(Terminal::X)).is_none());
    assert!(grammar.lookup(NonTerminal::Args, term(Terminal::Comma)).is_none());
}

// === Classification ===

#[test]
fn test_classifies_declared_symbols() {
    let grammar = Grammar::call_syntax();
    for terminal in Terminal::ALL {
        assert!(grammar.is_terminal(Symbol::T(terminal)));
        assert!(!grammar.is_nonterminal(Symbol::T(terminal)));
    }
    for nonterminal in NonTerminal::ALL {
        assert!(grammar.is_nonterminal(Symbol::NT(nonterminal)));
        assert!(!grammar.is_terminal(Symbol::NT(nonterminal)));
    }
    assert!(!grammar.is_terminal(Symbol::End));
    assert!(!grammar.is_nonterminal(Symbol::End));
    assert_eq!(grammar.start(), NonTerminal::Call);
}

#[test]
fn test_undeclared_terminal_is_neither() {
    static NO_Y: [Terminal; 5] = [
        Terminal::F,
        Terminal::LParen,
        Terminal::RParen,
        Terminal::Comma,
        Terminal::X,
    ];
    let grammar = Grammar::new(NonTerminal::Call, &NO_Y, &NonTerminal::ALL, CALL_SYNTAX_ENTRIES);
    let y = Symbol::T(Terminal::Y);
    assert!(!grammar.is_terminal(y));
    assert!(!grammar.is_nonterminal(y));
}

// === Listing ===

#[test]
fn test_productions_are_distinct_and_ordered() {
    let listed: Vec<String> = Grammar::call_syntax()
        .productions()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        listed,
        [
            "C -> f ( A )",
            "A -> E T",
            "A -> ε",
            "T -> , E T",
            "T -> ε",
            "E -> x",
            "E -> y",
        ]
    );
}

#[test]
fn test_expected_lookaheads_per_row() {
    let grammar = Grammar::call_syntax();
    assert_eq!(grammar.expected(NonTerminal::Call), [term(Terminal::F)]);
    assert_eq!(
        grammar.expected(NonTerminal::Args),
        [term(Terminal::X), term(Terminal::Y), term(Terminal::RParen)]
    );
    assert_eq!(
        grammar.expected(NonTerminal::Tail),
        [term(Terminal::Comma), term(Terminal::RParen)]
    );
    assert_eq!(grammar.entries().count(), 8);
}

#[test]
fn test_display_lists_productions_and_table() {
    let text = Grammar::call_syntax().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "start symbol: C");
    assert!(lines.contains(&"  A -> ε"));
    assert!(lines.contains(&"parse table:"));

    let arg_row = lines
        .iter()
        .find(|line| line.starts_with("  E  |"))
        .copied()
        .unwrap_or_default();
    assert!(arg_row.contains(&format!(" | {:<7} | {:<7} | ", "x", "y")), "{arg_row}");
}

// === Validation ===

#[test]
fn test_call_syntax_validates() {
    assert_eq!(Grammar::call_syntax().validate(), Ok(()));
}

#[test]
fn test_validate_reports_conflict() {
    static ENTRIES: [Entry; 2] = [
        Entry {
            lookahead: Token::Term(Terminal::X),
            production: Production::new(NonTerminal::Call, &[X]),
        },
        Entry {
            lookahead: Token::Term(Terminal::X),
            production: Production::new(NonTerminal::Call, &[X, Y]),
        },
    ];
    let grammar = Grammar::new(NonTerminal::Call, &Terminal::ALL, &[NonTerminal::Call], &ENTRIES);

    assert_eq!(
        grammar.validate(),
        Err(GrammarError::Conflict {
            nonterminal: NonTerminal::Call,
            lookahead: Token::Term(Terminal::X),
            first: ENTRIES[0].production,
            second: ENTRIES[1].production,
        })
    );
    // The first entry wins for lookups.
    assert_eq!(
        grammar.lookup(NonTerminal::Call, Token::Term(Terminal::X)),
        Some(&ENTRIES[0].production)
    );
}

#[test]
fn test_validate_reports_undeclared_symbol() {
    static ONLY_X: [Terminal; 1] = [Terminal::X];
    static ENTRIES: [Entry; 1] = [Entry {
        lookahead: Token::Term(Terminal::X),
        production: Production::new(NonTerminal::Call, &[X, Y]),
    }];
    let grammar = Grammar::new(NonTerminal::Call, &ONLY_X, &[NonTerminal::Call], &ENTRIES);

    assert_eq!(
        grammar.validate(),
        Err(GrammarError::Undeclared {
            symbol: Y,
            production: ENTRIES[0].production,
        })
    );
}

#[test]
fn test_validate_reports_missing_row() {
    let grammar = Grammar::new(
        NonTerminal::Call,
        &Terminal::ALL,
        &NonTerminal::ALL,
        &CALL_SYNTAX_ENTRIES[..1],
    );
    assert_eq!(grammar.validate(), Err(GrammarError::MissingRow(NonTerminal::Args)));
}

#[test]
fn test_validate_reports_undeclared_start() {
    let grammar = Grammar::new(
        NonTerminal::Call,
        &Terminal::ALL,
        &[NonTerminal::Arg],
        CALL_SYNTAX_ENTRIES,
    );
    assert_eq!(grammar.validate(), Err(GrammarError::UndeclaredStart(NonTerminal::Call)));
}

#[test]
fn test_grammar_errors_render() {
    let error = GrammarError::MissingRow(NonTerminal::Tail);
    assert_eq!(error.to_string(), "nonterminal T has no table entries");
}
