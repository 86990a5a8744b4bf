//! Token stream management for the parser
//!
//! Wraps the lexical analyzer's output with a cursor, one-token lookahead,
//! and significant-token filtering. Comments stay in the underlying vector
//! for tooling but are invisible to the parser's cursor.

use crate::tokens::token::Token;
use crate::utils::{Position, Span, Spanned};

/// A token with its source span
pub type SpannedToken = Spanned<Token>;

/// Errors from token stream operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenStreamError {
    #[error("token stream is empty")]
    Empty,

    #[error("cursor position {position} is out of bounds (stream has {len} significant tokens)")]
    PositionOutOfBounds { position: usize, len: usize },
}

/// An ordered, cursor-based view over tokenized source.
///
/// The cursor only visits significant tokens. The parser never backtracks
/// past a consumed token; checkpoints exist for lookahead probes only.
#[derive(Debug, Clone)]
pub struct TokenStream {
    all_tokens: Vec<SpannedToken>,
    significant_indices: Vec<usize>,
    position: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<SpannedToken>) -> Self {
        let significant_indices = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.value.is_significant())
            .map(|(index, _)| index)
            .collect();

        Self {
            all_tokens: tokens,
            significant_indices,
            position: 0,
        }
    }

    /// The current significant token, if any remain
    pub fn current(&self) -> Option<&SpannedToken> {
        self.significant_indices
            .get(self.position)
            .map(|&index| &self.all_tokens[index])
    }

    /// Span of the current token, or a dummy span past the end
    pub fn current_span(&self) -> Span {
        self.current().map(|token| token.span).unwrap_or_else(|| {
            self.all_tokens
                .last()
                .map(|token| token.span)
                .unwrap_or_else(Span::dummy)
        })
    }

    /// Peek one significant token ahead without advancing
    pub fn peek(&self) -> Option<&SpannedToken> {
        self.significant_indices
            .get(self.position + 1)
            .map(|&index| &self.all_tokens[index])
    }

    /// Advance past the current significant token and return it
    pub fn advance(&mut self) -> Option<&SpannedToken> {
        let index = *self.significant_indices.get(self.position)?;
        self.position += 1;
        Some(&self.all_tokens[index])
    }

    /// True once the cursor has consumed every significant token
    pub fn is_at_end(&self) -> bool {
        self.position >= self.significant_indices.len()
    }

    /// True when the current token is the end-of-input marker
    pub fn at_eof_token(&self) -> bool {
        matches!(self.current(), Some(token) if token.value.is_eof())
    }

    /// Number of significant tokens
    pub fn len(&self) -> usize {
        self.significant_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.significant_indices.is_empty()
    }

    /// Total token count including comments
    pub fn total_len(&self) -> usize {
        self.all_tokens.len()
    }

    /// All tokens, comments included, in source order
    pub fn all_tokens(&self) -> &[SpannedToken] {
        &self.all_tokens
    }

    /// Check the current token against a predicate without consuming it
    pub fn check<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&Token) -> bool,
    {
        self.current().map(|token| predicate(&token.value)).unwrap_or(false)
    }

    /// Checkpoint the cursor for a lookahead probe
    pub fn save_position(&self) -> usize {
        self.position
    }

    /// Restore a previously saved checkpoint
    pub fn restore_position(&mut self, position: usize) -> Result<(), TokenStreamError> {
        if position > self.significant_indices.len() {
            return Err(TokenStreamError::PositionOutOfBounds {
                position,
                len: self.significant_indices.len(),
            });
        }
        self.position = position;
        Ok(())
    }
}

/// Builder for assembling token streams by hand in tests.
///
/// Spans are synthesized on a single line, one column per pushed token's
/// rendered width plus a separating space.
#[derive(Debug, Default)]
pub struct TokenStreamBuilder {
    tokens: Vec<SpannedToken>,
    cursor: Position,
}

impl TokenStreamBuilder {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            cursor: Position::start(),
        }
    }

    pub fn push_token(mut self, token: Token) -> Self {
        let rendered = token.to_string();
        let start = self.cursor;
        let end = start.advance_str(&rendered);
        self.tokens.push(Spanned::new(token, Span::new(start, end)));
        self.cursor = end.advance(' ');
        self
    }

    /// Append the end-of-input marker and build
    pub fn finish(self) -> TokenStream {
        self.push_token(Token::Eof).build()
    }

    pub fn build(self) -> TokenStream {
        TokenStream::new(self.tokens)
    }
}
