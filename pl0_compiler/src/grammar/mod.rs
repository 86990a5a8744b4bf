//! PL/0 grammar definitions
//!
//! Contains the reserved-word table, the AST node types produced by the
//! parser, and the grammar builder functions (one per non-terminal).

pub mod ast;
pub mod builders;
pub mod keywords;

pub use keywords::{Keyword, RESERVED_WORDS};
