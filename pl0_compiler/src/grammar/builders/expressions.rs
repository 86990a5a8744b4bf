//! Expression-level grammar builders
//!
//! Precedence is structural: `parse_expression` folds `+`/`-` over terms,
//! `parse_term` folds `*`/`/` over factors, both left-associative.
//! Parenthesized sub-expressions re-enter at the top through `parse_factor`.

use super::atomic::{self, unexpected_here, Parser};
use crate::grammar::ast::nodes::{Condition, Expression};
use crate::grammar::keywords::Keyword;
use crate::syntax::error::SyntaxResult;
use crate::tokens::Token;

/// `expression -> (+|-)? term ((+|-) term)*`
pub fn parse_expression(parser: &mut dyn Parser) -> SyntaxResult<Expression> {
    parser.enter_production()?;
    let result = parse_expression_inner(parser);
    parser.exit_production();
    result
}

fn parse_expression_inner(parser: &mut dyn Parser) -> SyntaxResult<Expression> {
    // optional leading sign; a leading '+' is a no-op
    let mut left = match parser.current_token() {
        Token::Plus => {
            parser.advance_token();
            parse_term(parser)?
        }
        Token::Minus => {
            parser.advance_token();
            Expression::Negate(Box::new(parse_term(parser)?))
        }
        _ => parse_term(parser)?,
    };

    loop {
        match parser.current_token() {
            Token::Plus => {
                parser.advance_token();
                let right = parse_term(parser)?;
                left = Expression::Add(Box::new(left), Box::new(right));
            }
            Token::Minus => {
                parser.advance_token();
                let right = parse_term(parser)?;
                left = Expression::Subtract(Box::new(left), Box::new(right));
            }
            _ => break,
        }
    }

    Ok(left)
}

/// `term -> factor ((*|/) factor)*`
pub fn parse_term(parser: &mut dyn Parser) -> SyntaxResult<Expression> {
    let mut left = atomic::parse_factor(parser)?;

    loop {
        match parser.current_token() {
            Token::Star => {
                parser.advance_token();
                let right = atomic::parse_factor(parser)?;
                left = Expression::Multiply(Box::new(left), Box::new(right));
            }
            Token::Slash => {
                parser.advance_token();
                let right = atomic::parse_factor(parser)?;
                left = Expression::Divide(Box::new(left), Box::new(right));
            }
            _ => break,
        }
    }

    Ok(left)
}

/// `condition -> ODD expression | expression relOp expression`
pub fn parse_condition(parser: &mut dyn Parser) -> SyntaxResult<Condition> {
    parser.enter_production()?;
    let result = parse_condition_inner(parser);
    parser.exit_production();
    result
}

fn parse_condition_inner(parser: &mut dyn Parser) -> SyntaxResult<Condition> {
    if parser.current_token().is_keyword(Keyword::Odd) {
        parser.advance_token();
        let operand = parse_expression(parser)?;
        return Ok(Condition::Odd(operand));
    }

    // disjoint first sets: anything else must start an expression
    match parser.current_token() {
        Token::Plus
        | Token::Minus
        | Token::Identifier(_)
        | Token::Integer(_)
        | Token::Real(_)
        | Token::LeftParen => {}
        _ => {
            let mut expected = vec!["odd"];
            expected.extend_from_slice(atomic::FACTOR_FIRST);
            return Err(unexpected_here(parser, expected));
        }
    }

    let left = parse_expression(parser)?;
    let op = atomic::parse_relational_operator(parser)?;
    let right = parse_expression(parser)?;

    Ok(Condition::Relation { left, op, right })
}
