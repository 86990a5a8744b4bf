//! AST node types for the PL/0 grammar
//!
//! Every production returns a constructed node. The tree mirrors the grammar
//! directly: a program is a block, a block is declarations plus one
//! statement, and expression precedence is already resolved by the time a
//! node exists (the `*`/`/` over `+`/`-` nesting is structural, so the tree
//! needs no precedence information).

use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Root node: `program -> block`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub block: Block,
}

/// `block -> constDecl varDecl procDecl statement`
///
/// All three declaration sections may be empty, and the statement may be
/// [`Statement::Empty`], so the degenerate empty program is a valid block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub constants: Vec<ConstDef>,
    pub variables: Vec<String>,
    pub procedures: Vec<Procedure>,
    pub body: Statement,
}

/// One `ID = NUMBER` entry of a const declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstDef {
    pub name: String,
    pub value: Number,
    pub span: Span,
}

/// `procDecl -> PROCEDURE ID ; block ;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    pub name: String,
    pub body: Block,
    pub span: Span,
}

/// A numeric literal value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    Integer(i64),
    Real(f64),
}

/// Statement alternatives, one per grammar production
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// `ID := expression`
    Assign { name: String, value: Expression },
    /// `CALL ID`
    Call { name: String },
    /// `BEGIN statement (; statement)* END`
    Compound(Vec<Statement>),
    /// `IF condition THEN statement`
    If {
        condition: Condition,
        body: Box<Statement>,
    },
    /// `WHILE condition DO statement`
    While {
        condition: Condition,
        body: Box<Statement>,
    },
    /// The empty statement
    Empty,
}

/// `condition -> ODD expression | expression relOp expression`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    Odd(Expression),
    Relation {
        left: Expression,
        op: RelOp,
        right: Expression,
    },
}

/// Relational operators valid between two expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelOp {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl RelOp {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RelOp::Equal => "=",
            RelOp::NotEqual => "<>",
            RelOp::Less => "<",
            RelOp::LessEqual => "<=",
            RelOp::Greater => ">",
            RelOp::GreaterEqual => ">=",
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expression tree with precedence already applied.
///
/// `Add`/`Subtract` nodes come from the `expression` level, `Multiply`/
/// `Divide` from the `term` level, both folded left-associatively. `Negate`
/// is the optional leading sign of an expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Number(Number),
    Variable(String),
    Negate(Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
}

impl Statement {
    pub fn is_empty(&self) -> bool {
        matches!(self, Statement::Empty)
    }
}

impl Block {
    /// True when every section took its empty alternative
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
            && self.variables.is_empty()
            && self.procedures.is_empty()
            && self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_block_detection() {
        let block = Block {
            constants: vec![],
            variables: vec![],
            procedures: vec![],
            body: Statement::Empty,
        };
        assert!(block.is_empty());

        let block = Block {
            variables: vec!["x".to_string()],
            ..block
        };
        assert!(!block.is_empty());
    }

    #[test]
    fn test_relop_spelling() {
        assert_eq!(RelOp::NotEqual.as_str(), "<>");
        assert_eq!(RelOp::LessEqual.to_string(), "<=");
    }

    #[test]
    fn test_ast_serializes_to_json() {
        let program = Program {
            block: Block {
                constants: vec![],
                variables: vec!["b".to_string()],
                procedures: vec![],
                body: Statement::Assign {
                    name: "b".to_string(),
                    value: Expression::Add(
                        Box::new(Expression::Variable("a".to_string())),
                        Box::new(Expression::Number(Number::Integer(1))),
                    ),
                },
            },
        };

        let json = serde_json::to_string(&program).unwrap();
        assert!(json.contains("\"Assign\""));
        assert!(json.contains("\"Add\""));
    }
}
