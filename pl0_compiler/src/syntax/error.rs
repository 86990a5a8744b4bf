//! Syntax error types
//!
//! The parser fails fast: the first mismatch is fatal and carries the full
//! expected-set plus the found token and its position, enough to render
//! `syntax error at line L, column C: expected {set}, found <kind>('<text>')`.

use crate::logging::codes::{self, Code};
use crate::tokens::Token;
use crate::utils::Span;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

fn format_expected(expected: &[&'static str]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [single] => (*single).to_string(),
        many => format!("{{{}}}", many.join(", ")),
    }
}

/// Errors produced during syntax analysis
#[derive(Debug, Clone, thiserror::Error)]
pub enum SyntaxError {
    #[error(
        "syntax error at line {}, column {}: expected {}, found {}",
        span.start.line,
        span.start.column,
        format_expected(expected),
        found.describe()
    )]
    UnexpectedToken {
        expected: Vec<&'static str>,
        found: Token,
        span: Span,
    },

    #[error(
        "syntax error at line {}, column {}: expected {}, found end of input",
        span.start.line,
        span.start.column,
        format_expected(expected)
    )]
    UnexpectedEndOfInput {
        expected: Vec<&'static str>,
        span: Span,
    },

    #[error("cannot parse an empty token stream")]
    EmptyTokenStream,

    #[error("token stream does not end with an end-of-input marker")]
    MissingEof,

    #[error(
        "syntax error at line {}, column {}: unexpected {} after end of program",
        span.start.line,
        span.start.column,
        found.describe()
    )]
    TrailingTokens { found: Token, span: Span },

    #[error("maximum parse depth of {limit} exceeded at line {}, column {}", span.start.line, span.start.column)]
    MaxRecursionDepth { limit: usize, span: Span },

    #[error("internal parser error: {message}")]
    InternalParserError { message: String },
}

impl SyntaxError {
    /// A mismatch against one expected kind
    pub fn expected_one(expected: &'static str, found: Token, span: Span) -> Self {
        Self::unexpected(vec![expected], found, span)
    }

    /// A mismatch against a set of expected kinds. An EOF token folds into
    /// the end-of-input variant so the message names the real problem.
    pub fn unexpected(expected: Vec<&'static str>, found: Token, span: Span) -> Self {
        if found.is_eof() {
            SyntaxError::UnexpectedEndOfInput { expected, span }
        } else {
            SyntaxError::UnexpectedToken {
                expected,
                found,
                span,
            }
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            SyntaxError::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
            SyntaxError::UnexpectedEndOfInput { .. } => codes::syntax::UNEXPECTED_END_OF_INPUT,
            SyntaxError::EmptyTokenStream => codes::syntax::EMPTY_TOKEN_STREAM,
            SyntaxError::MissingEof => codes::syntax::MISSING_EOF,
            SyntaxError::TrailingTokens { .. } => codes::syntax::TRAILING_TOKENS,
            SyntaxError::MaxRecursionDepth { .. } => codes::syntax::MAX_RECURSION_DEPTH,
            SyntaxError::InternalParserError { .. } => codes::syntax::INTERNAL_PARSER_ERROR,
        }
    }

    /// Position of the offending token, when known
    pub fn span(&self) -> Option<Span> {
        match self {
            SyntaxError::UnexpectedToken { span, .. }
            | SyntaxError::UnexpectedEndOfInput { span, .. }
            | SyntaxError::TrailingTokens { span, .. }
            | SyntaxError::MaxRecursionDepth { span, .. } => Some(*span),
            _ => None,
        }
    }

    /// Kinds the grammar would have accepted at the point of failure
    pub fn expected_kinds(&self) -> &[&'static str] {
        match self {
            SyntaxError::UnexpectedToken { expected, .. }
            | SyntaxError::UnexpectedEndOfInput { expected, .. } => expected,
            _ => &[],
        }
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }
}
