//! Grammar builders - one recognizer function per non-terminal
//!
//! Builders are free functions over the [`Parser`] trait so they compose
//! without knowing the concrete parser. Dispatch is predictive with one
//! token of lookahead; no builder ever backtracks past a consumed token.

pub mod atomic;
pub mod blocks;
pub mod expressions;

pub use atomic::{parse_factor, parse_relational_operator, Parser};
pub use blocks::{parse_block, parse_program, parse_statement};
pub use expressions::{parse_condition, parse_expression, parse_term};
