//! Block and statement grammar builders
//!
//! The ε-productions live here: `constDecl`, `varDecl`, and `procDecl`
//! commit only when their keyword is the lookahead, and `parse_statement`
//! returns [`Statement::Empty`] without consuming anything when the
//! lookahead is outside the statement first set.

use super::atomic::{unexpected_here, Parser};
use super::expressions::{parse_condition, parse_expression};
use crate::grammar::ast::nodes::{Block, ConstDef, Procedure, Program, Statement};
use crate::grammar::keywords::Keyword;
use crate::syntax::error::SyntaxResult;
use crate::tokens::Token;

/// `program -> block`
pub fn parse_program(parser: &mut dyn Parser) -> SyntaxResult<Program> {
    let block = parse_block(parser)?;
    Ok(Program { block })
}

/// `block -> constDecl varDecl procDecl statement`
pub fn parse_block(parser: &mut dyn Parser) -> SyntaxResult<Block> {
    parser.enter_production()?;
    let result = parse_block_inner(parser);
    parser.exit_production();
    result
}

fn parse_block_inner(parser: &mut dyn Parser) -> SyntaxResult<Block> {
    let constants = parse_const_declarations(parser)?;
    let variables = parse_var_declarations(parser)?;
    let procedures = parse_procedure_declarations(parser)?;
    let body = parse_statement(parser)?;

    Ok(Block {
        constants,
        variables,
        procedures,
        body,
    })
}

/// `constDecl -> CONST ID = NUMBER (, ID = NUMBER)* ; | ε`
fn parse_const_declarations(parser: &mut dyn Parser) -> SyntaxResult<Vec<ConstDef>> {
    if !parser.current_token().is_keyword(Keyword::Const) {
        return Ok(Vec::new());
    }
    parser.advance_token();

    let mut definitions = Vec::new();
    loop {
        let start = parser.current_span();
        let name = parser.expect_identifier()?;

        match parser.current_token() {
            Token::Equal => parser.advance_token(),
            _ => return Err(unexpected_here(parser, vec!["'='"])),
        }

        let value = parser.expect_number()?;
        let span = start.to(parser.current_span());
        definitions.push(ConstDef { name, value, span });

        match parser.current_token() {
            Token::Comma => parser.advance_token(),
            Token::Semicolon => {
                parser.advance_token();
                break;
            }
            _ => return Err(unexpected_here(parser, vec!["','", "';'"])),
        }
    }

    Ok(definitions)
}

/// `varDecl -> VAR ID (, ID)* ; | ε`
fn parse_var_declarations(parser: &mut dyn Parser) -> SyntaxResult<Vec<String>> {
    if !parser.current_token().is_keyword(Keyword::Var) {
        return Ok(Vec::new());
    }
    parser.advance_token();

    let mut names = vec![parser.expect_identifier()?];
    loop {
        match parser.current_token() {
            Token::Comma => {
                parser.advance_token();
                names.push(parser.expect_identifier()?);
            }
            Token::Semicolon => {
                parser.advance_token();
                break;
            }
            _ => return Err(unexpected_here(parser, vec!["','", "';'"])),
        }
    }

    Ok(names)
}

/// `procDecl -> (PROCEDURE ID ; block ;)* | ε`
fn parse_procedure_declarations(parser: &mut dyn Parser) -> SyntaxResult<Vec<Procedure>> {
    let mut procedures = Vec::new();

    while parser.current_token().is_keyword(Keyword::Procedure) {
        let start = parser.current_span();
        parser.advance_token();

        let name = parser.expect_identifier()?;
        expect_semicolon(parser)?;
        let body = parse_block(parser)?;
        let end = expect_semicolon(parser)?;

        procedures.push(Procedure {
            name,
            body,
            span: start.to(end),
        });
    }

    Ok(procedures)
}

fn expect_semicolon(parser: &mut dyn Parser) -> SyntaxResult<crate::utils::Span> {
    match parser.current_token() {
        Token::Semicolon => {
            let span = parser.current_span();
            parser.advance_token();
            Ok(span)
        }
        _ => Err(unexpected_here(parser, vec!["';'"])),
    }
}

/// `statement -> ID := expression | CALL ID | BEGIN ... END
///             | IF condition THEN statement | WHILE condition DO statement
///             | ε`
pub fn parse_statement(parser: &mut dyn Parser) -> SyntaxResult<Statement> {
    parser.enter_production()?;
    let result = parse_statement_inner(parser);
    parser.exit_production();
    result
}

fn parse_statement_inner(parser: &mut dyn Parser) -> SyntaxResult<Statement> {
    match parser.current_token() {
        Token::Identifier(name) => {
            parser.advance_token();
            match parser.current_token() {
                Token::Assign => parser.advance_token(),
                _ => return Err(unexpected_here(parser, vec!["':='"])),
            }
            let value = parse_expression(parser)?;
            Ok(Statement::Assign { name, value })
        }

        Token::Keyword(Keyword::Call) => {
            parser.advance_token();
            let name = parser.expect_identifier()?;
            Ok(Statement::Call { name })
        }

        Token::Keyword(Keyword::Begin) => {
            parser.advance_token();
            let mut statements = vec![parse_statement(parser)?];
            loop {
                match parser.current_token() {
                    Token::Semicolon => {
                        parser.advance_token();
                        statements.push(parse_statement(parser)?);
                    }
                    Token::Keyword(Keyword::End) => {
                        parser.advance_token();
                        break;
                    }
                    _ => return Err(unexpected_here(parser, vec!["';'", "end"])),
                }
            }
            Ok(Statement::Compound(statements))
        }

        Token::Keyword(Keyword::If) => {
            parser.advance_token();
            let condition = parse_condition(parser)?;
            parser.expect_keyword(Keyword::Then)?;
            let body = parse_statement(parser)?;
            Ok(Statement::If {
                condition,
                body: Box::new(body),
            })
        }

        Token::Keyword(Keyword::While) => {
            parser.advance_token();
            let condition = parse_condition(parser)?;
            parser.expect_keyword(Keyword::Do)?;
            let body = parse_statement(parser)?;
            Ok(Statement::While {
                condition,
                body: Box::new(body),
            })
        }

        // ε: the lookahead belongs to whatever follows this statement
        _ => Ok(Statement::Empty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::ast::nodes::{Condition, Expression, Number};
    use crate::syntax::parser::Pl0Parser;
    use crate::tokens::TokenStreamBuilder;
    use assert_matches::assert_matches;

    fn parser_for(tokens: Vec<Token>) -> Pl0Parser {
        let mut builder = TokenStreamBuilder::new();
        for token in tokens {
            builder = builder.push_token(token);
        }
        Pl0Parser::new(builder.finish())
    }

    fn ident(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    fn kw(keyword: Keyword) -> Token {
        Token::Keyword(keyword)
    }

    #[test]
    fn test_assignment_statement() {
        let mut parser = parser_for(vec![ident("b"), Token::Assign, ident("a"), Token::Plus, Token::Integer(1)]);
        let statement = parse_statement(&mut parser).unwrap();
        assert_matches!(statement, Statement::Assign { name, value } => {
            assert_eq!(name, "b");
            assert_matches!(value, Expression::Add(_, _));
        });
    }

    #[test]
    fn test_identifier_without_assign_fails() {
        let mut parser = parser_for(vec![ident("b"), Token::Equal, Token::Integer(1)]);
        let error = parse_statement(&mut parser).unwrap_err();
        assert_eq!(error.expected_kinds(), &["':='"]);
    }

    #[test]
    fn test_call_statement() {
        let mut parser = parser_for(vec![kw(Keyword::Call), ident("p")]);
        assert_matches!(
            parse_statement(&mut parser).unwrap(),
            Statement::Call { name } if name == "p"
        );
    }

    #[test]
    fn test_compound_statement() {
        let mut parser = parser_for(vec![
            kw(Keyword::Begin),
            ident("x"),
            Token::Assign,
            Token::Integer(1),
            Token::Semicolon,
            ident("y"),
            Token::Assign,
            Token::Integer(2),
            kw(Keyword::End),
        ]);
        let statement = parse_statement(&mut parser).unwrap();
        assert_matches!(statement, Statement::Compound(statements) => {
            assert_eq!(statements.len(), 2);
        });
    }

    #[test]
    fn test_unbalanced_begin_cites_end_of_input() {
        let mut parser = parser_for(vec![
            kw(Keyword::Begin),
            ident("x"),
            Token::Assign,
            Token::Integer(1),
        ]);
        let error = parse_statement(&mut parser).unwrap_err();
        assert_matches!(
            error,
            crate::syntax::error::SyntaxError::UnexpectedEndOfInput { .. }
        );
        assert!(error.expected_kinds().contains(&"';'"));
        assert!(error.expected_kinds().contains(&"end"));
    }

    #[test]
    fn test_if_and_while_statements() {
        let mut parser = parser_for(vec![
            kw(Keyword::If),
            kw(Keyword::Odd),
            ident("x"),
            kw(Keyword::Then),
            ident("x"),
            Token::Assign,
            Token::Integer(0),
        ]);
        assert_matches!(
            parse_statement(&mut parser).unwrap(),
            Statement::If { condition: Condition::Odd(_), .. }
        );

        let mut parser = parser_for(vec![
            kw(Keyword::While),
            ident("x"),
            Token::Less,
            Token::Integer(10),
            kw(Keyword::Do),
            kw(Keyword::Call),
            ident("p"),
        ]);
        assert_matches!(parse_statement(&mut parser).unwrap(), Statement::While { .. });
    }

    #[test]
    fn test_empty_statement_consumes_nothing() {
        let mut parser = parser_for(vec![Token::Semicolon]);
        assert_matches!(parse_statement(&mut parser).unwrap(), Statement::Empty);
        // the semicolon is still the lookahead
        assert_matches!(parser.current_token(), Token::Semicolon);
    }

    #[test]
    fn test_const_declarations() {
        let mut parser = parser_for(vec![
            kw(Keyword::Const),
            ident("a"),
            Token::Equal,
            Token::Integer(1),
            Token::Comma,
            ident("b"),
            Token::Equal,
            Token::Real(2.5),
            Token::Semicolon,
        ]);
        let block = parse_block(&mut parser).unwrap();
        assert_eq!(block.constants.len(), 2);
        assert_eq!(block.constants[0].name, "a");
        assert_matches!(block.constants[1].value, Number::Real(_));
    }

    #[test]
    fn test_const_requires_equal_not_assign() {
        let mut parser = parser_for(vec![
            kw(Keyword::Const),
            ident("a"),
            Token::Assign,
            Token::Integer(1),
            Token::Semicolon,
        ]);
        let error = parse_block(&mut parser).unwrap_err();
        assert_eq!(error.expected_kinds(), &["'='"]);
    }

    #[test]
    fn test_var_declarations() {
        let mut parser = parser_for(vec![
            kw(Keyword::Var),
            ident("x"),
            Token::Comma,
            ident("y"),
            Token::Semicolon,
        ]);
        let block = parse_block(&mut parser).unwrap();
        assert_eq!(block.variables, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_nested_procedure_blocks() {
        // procedure p; procedure q; ; ; call p
        let mut parser = parser_for(vec![
            kw(Keyword::Procedure),
            ident("p"),
            Token::Semicolon,
            kw(Keyword::Procedure),
            ident("q"),
            Token::Semicolon,
            Token::Semicolon,
            Token::Semicolon,
            kw(Keyword::Call),
            ident("p"),
        ]);
        let block = parse_block(&mut parser).unwrap();
        assert_eq!(block.procedures.len(), 1);
        assert_eq!(block.procedures[0].name, "p");
        assert_eq!(block.procedures[0].body.procedures.len(), 1);
        assert_eq!(block.procedures[0].body.procedures[0].name, "q");
    }

    #[test]
    fn test_all_sections_empty() {
        let mut parser = parser_for(vec![]);
        let block = parse_block(&mut parser).unwrap();
        assert!(block.is_empty());
    }
}
