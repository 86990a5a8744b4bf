//! Token system for PL/0 lexical analysis
//!
//! Converts raw source text concerns into a structured token vocabulary the
//! parser consumes. Tokens carry their parsed payload (identifier text,
//! numeric value, literal content) and, once wrapped in [`Spanned`], the
//! 1-based line and column of their first character.

pub mod token;
pub mod token_stream;

pub use token::{Token, TokenClass};
pub use token_stream::{SpannedToken, TokenStream, TokenStreamBuilder, TokenStreamError};

// Re-export span types from utils
pub use crate::utils::{Position, SourceMap, Span, Spanned};
