//! Parser trait and atomic grammar builders
//!
//! `factor` and `relOp` sit at the bottom of the grammar; everything above
//! them is built in `expressions.rs` and `blocks.rs`.

use crate::grammar::ast::nodes::{Expression, Number, RelOp};
use crate::grammar::keywords::Keyword;
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::tokens::Token;
use crate::utils::Span;

/// The token-consumption surface grammar builders operate on.
///
/// A conforming implementation holds the lookahead cursor and the recursion
/// depth guard. `current_token` never runs past the end-of-input marker:
/// once the cursor reaches it, the token stays current until consumed.
pub trait Parser {
    /// Current lookahead token
    fn current_token(&self) -> Token;

    /// Span of the current lookahead token
    fn current_span(&self) -> Span;

    /// Consume the current token
    fn advance_token(&mut self);

    /// Enter a recursive production; fails when the depth limit is hit
    fn enter_production(&mut self) -> SyntaxResult<()>;

    /// Leave a recursive production
    fn exit_production(&mut self);

    /// Consume a specific keyword or fail with it as the expected kind
    fn expect_keyword(&mut self, keyword: Keyword) -> SyntaxResult<Span>;

    /// Consume an identifier and return its spelling
    fn expect_identifier(&mut self) -> SyntaxResult<String>;

    /// Consume a numeric literal (integer or real)
    fn expect_number(&mut self) -> SyntaxResult<Number>;
}

/// Build the mismatch error for the current lookahead
pub fn unexpected_here(parser: &dyn Parser, expected: Vec<&'static str>) -> SyntaxError {
    SyntaxError::unexpected(expected, parser.current_token(), parser.current_span())
}

/// First set of `factor` (equally the first set of `expression` minus the
/// optional sign)
pub const FACTOR_FIRST: &[&'static str] = &["identifier", "number", "'('"];

/// `factor -> ID | NUMBER | ( expression )`
pub fn parse_factor(parser: &mut dyn Parser) -> SyntaxResult<Expression> {
    parser.enter_production()?;

    let result = match parser.current_token() {
        Token::Identifier(name) => {
            parser.advance_token();
            Ok(Expression::Variable(name))
        }
        Token::Integer(value) => {
            parser.advance_token();
            Ok(Expression::Number(Number::Integer(value)))
        }
        Token::Real(value) => {
            parser.advance_token();
            Ok(Expression::Number(Number::Real(value)))
        }
        Token::LeftParen => {
            parser.advance_token();
            let inner = super::expressions::parse_expression(parser)?;
            match parser.current_token() {
                Token::RightParen => {
                    parser.advance_token();
                    Ok(inner)
                }
                _ => Err(unexpected_here(parser, vec!["')'"])),
            }
        }
        _ => Err(unexpected_here(parser, FACTOR_FIRST.to_vec())),
    };

    parser.exit_production();
    result
}

/// `relOp -> = | <> | < | <= | > | >=`
pub fn parse_relational_operator(parser: &mut dyn Parser) -> SyntaxResult<RelOp> {
    let op = match parser.current_token() {
        Token::Equal => RelOp::Equal,
        Token::NotEqual => RelOp::NotEqual,
        Token::Less => RelOp::Less,
        Token::LessEqual => RelOp::LessEqual,
        Token::Greater => RelOp::Greater,
        Token::GreaterEqual => RelOp::GreaterEqual,
        _ => {
            return Err(unexpected_here(
                parser,
                vec!["'='", "'<>'", "'<'", "'<='", "'>'", "'>='"],
            ))
        }
    };
    parser.advance_token();
    Ok(op)
}
