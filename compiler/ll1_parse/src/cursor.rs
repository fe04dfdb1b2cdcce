//! Input cursor over the token sequence.
//!
//! Owns the end-marker normalisation: a sequence that is empty or does not end
//! with `$` gets one appended, so the cursor can always read a lookahead.

use ll1_grammar::Token;
use std::borrow::Cow;

/// Cursor over the (normalised) input tokens.
///
/// The position only moves forward, and only when a terminal is matched.
pub struct Cursor<'a> {
    tokens: Cow<'a, [Token]>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the first token, appending `$` if it is missing.
    ///
    /// Input that already ends with `$` is borrowed as is.
    pub fn new(tokens: &'a [Token]) -> Self {
        let tokens = if tokens.last().is_some_and(|t| t.is_end()) {
            Cow::Borrowed(tokens)
        } else {
            let mut owned = Vec::with_capacity(tokens.len() + 1);
            owned.extend_from_slice(tokens);
            owned.push(Token::End);
            Cow::Owned(owned)
        };
        Cursor { tokens, pos: 0 }
    }

    /// The lookahead token.
    ///
    /// Invariant: the position never passes the final `$`, because matching `$`
    /// against `$` is acceptance and never consumes input.
    #[inline]
    pub fn current(&self) -> Token {
        debug_assert!(
            self.pos < self.tokens.len(),
            "cursor position {} past end of input (len {})",
            self.pos,
            self.tokens.len()
        );
        self.tokens[self.pos]
    }

    /// Consume the lookahead token.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Number of tokens consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed tokens, lookahead first.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.pos..]
    }
}
