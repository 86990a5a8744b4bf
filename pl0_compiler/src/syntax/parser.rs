//! Recursive-descent parser over a token stream
//!
//! [`Pl0Parser`] owns the cursor state for one parse invocation and
//! implements the [`Parser`] trait the grammar builders consume. State is
//! discarded when the parse returns; a new invocation starts fresh.

use crate::config::constants::compile_time;
use crate::grammar::ast::nodes::{Number, Program};
use crate::grammar::builders::{self, Parser};
use crate::grammar::keywords::Keyword;
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::tokens::{Token, TokenStream};
use crate::utils::Span;

/// Parser state for a single parse call
pub struct Pl0Parser {
    tokens: TokenStream,
    parse_depth: usize,
}

impl Pl0Parser {
    pub fn new(tokens: TokenStream) -> Self {
        Self {
            tokens,
            parse_depth: 0,
        }
    }

    /// Recognize a complete program.
    ///
    /// The stream must be non-empty and terminated by an end-of-input
    /// token. After `program` is recognized the cursor must rest on that
    /// end-of-input token; anything else is a trailing-token error.
    pub fn parse(mut self) -> SyntaxResult<Program> {
        if self.tokens.is_empty() {
            return Err(SyntaxError::EmptyTokenStream);
        }

        let ends_with_eof = self
            .tokens
            .all_tokens()
            .iter()
            .filter(|token| token.value.is_significant())
            .last()
            .map(|token| token.value.is_eof())
            .unwrap_or(false);
        if !ends_with_eof {
            return Err(SyntaxError::MissingEof);
        }

        let program = builders::parse_program(&mut self)?;

        match self.current_token() {
            Token::Eof => {
                self.tokens.advance();
                Ok(program)
            }
            found => Err(SyntaxError::TrailingTokens {
                found,
                span: self.current_span(),
            }),
        }
    }
}

impl Parser for Pl0Parser {
    fn current_token(&self) -> Token {
        self.tokens
            .current()
            .map(|spanned| spanned.value.clone())
            .unwrap_or(Token::Eof)
    }

    fn current_span(&self) -> Span {
        self.tokens.current_span()
    }

    fn advance_token(&mut self) {
        // the end-of-input marker is consumed only by parse() itself
        if !self.tokens.at_eof_token() {
            self.tokens.advance();
        }
    }

    fn enter_production(&mut self) -> SyntaxResult<()> {
        self.parse_depth += 1;
        if self.parse_depth > compile_time::syntax::MAX_PARSE_DEPTH {
            return Err(SyntaxError::MaxRecursionDepth {
                limit: compile_time::syntax::MAX_PARSE_DEPTH,
                span: self.current_span(),
            });
        }
        Ok(())
    }

    fn exit_production(&mut self) {
        self.parse_depth = self.parse_depth.saturating_sub(1);
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> SyntaxResult<Span> {
        match self.current_token() {
            Token::Keyword(found) if found == keyword => {
                let span = self.current_span();
                self.advance_token();
                Ok(span)
            }
            found => Err(SyntaxError::expected_one(
                keyword.as_str(),
                found,
                self.current_span(),
            )),
        }
    }

    fn expect_identifier(&mut self) -> SyntaxResult<String> {
        match self.current_token() {
            Token::Identifier(name) => {
                self.advance_token();
                Ok(name)
            }
            found => Err(SyntaxError::expected_one(
                "identifier",
                found,
                self.current_span(),
            )),
        }
    }

    fn expect_number(&mut self) -> SyntaxResult<Number> {
        match self.current_token() {
            Token::Integer(value) => {
                self.advance_token();
                Ok(Number::Integer(value))
            }
            Token::Real(value) => {
                self.advance_token();
                Ok(Number::Real(value))
            }
            found => Err(SyntaxError::expected_one(
                "number",
                found,
                self.current_span(),
            )),
        }
    }
}

/// Convenience constructor mirroring the module API
pub fn create_parser(tokens: TokenStream) -> Pl0Parser {
    Pl0Parser::new(tokens)
}
