//! Shared utilities for the PL/0 front-end

pub mod span;

pub use span::{Position, SourceMap, Span, Spanned};
