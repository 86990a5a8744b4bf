//! Token definitions for the PL/0 grammar
//!
//! The token catalogue is closed: identifiers, numeric/char/string literals,
//! the operator and punctuation set, one dedicated variant per reserved word
//! (via [`Keyword`]), comments, and the end-of-input marker.
//!
//! `:=` is assignment and `=` is equality in this grammar variant. The
//! multi-character operators (`:=`, `<>`, `<=`, `>=`) are distinct tokens,
//! never operator pairs.

use crate::grammar::keywords::Keyword;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single lexical unit of PL/0 source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// Reserved word (begin, end, if, then, while, do, call, const, var,
    /// procedure, odd)
    Keyword(Keyword),

    /// User-defined name, original spelling preserved
    Identifier(String),

    /// Integer literal with its parsed value
    Integer(i64),
    /// Real literal (a fractional part was present)
    Real(f64),
    /// Character literal, single-quoted in source
    CharLiteral(char),
    /// String literal, double-quoted in source, quotes stripped
    StringLiteral(String),

    // Arithmetic operators
    Plus,
    Minus,
    Star,
    Slash,

    /// Assignment operator `:=`
    Assign,

    // Relational operators
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Punctuation
    LeftParen,
    RightParen,
    Comma,
    Semicolon,
    Colon,

    /// Comment body, delimiters stripped. Filtered out of parsing but kept
    /// in the token stream for tooling.
    Comment(String),

    /// End of input. Always the final token of a tokenization.
    Eof,
}

/// Coarse token categories, used for lexical metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenClass {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Punctuation,
    Special,
}

impl Token {
    /// Stable kind name, used in expected-set diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Keyword(kw) => kw.as_str(),
            Token::Identifier(_) => "identifier",
            Token::Integer(_) => "number",
            Token::Real(_) => "number",
            Token::CharLiteral(_) => "char literal",
            Token::StringLiteral(_) => "string literal",
            Token::Plus => "'+'",
            Token::Minus => "'-'",
            Token::Star => "'*'",
            Token::Slash => "'/'",
            Token::Assign => "':='",
            Token::Equal => "'='",
            Token::NotEqual => "'<>'",
            Token::Less => "'<'",
            Token::LessEqual => "'<='",
            Token::Greater => "'>'",
            Token::GreaterEqual => "'>='",
            Token::LeftParen => "'('",
            Token::RightParen => "')'",
            Token::Comma => "','",
            Token::Semicolon => "';'",
            Token::Colon => "':'",
            Token::Comment(_) => "comment",
            Token::Eof => "end of input",
        }
    }

    pub fn classify(&self) -> TokenClass {
        match self {
            Token::Keyword(_) => TokenClass::Keyword,
            Token::Identifier(_) => TokenClass::Identifier,
            Token::Integer(_)
            | Token::Real(_)
            | Token::CharLiteral(_)
            | Token::StringLiteral(_) => TokenClass::Literal,
            Token::Plus
            | Token::Minus
            | Token::Star
            | Token::Slash
            | Token::Assign
            | Token::Equal
            | Token::NotEqual
            | Token::Less
            | Token::LessEqual
            | Token::Greater
            | Token::GreaterEqual => TokenClass::Operator,
            Token::LeftParen
            | Token::RightParen
            | Token::Comma
            | Token::Semicolon
            | Token::Colon => TokenClass::Punctuation,
            Token::Comment(_) | Token::Eof => TokenClass::Special,
        }
    }

    /// Tokens the parser sees. Comments are lexed but never parsed.
    pub fn is_significant(&self) -> bool {
        !matches!(self, Token::Comment(_))
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Token::Keyword(kw) if *kw == keyword)
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Identifier(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Integer(_) | Token::Real(_))
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }

    /// Relational operators valid in `condition`
    pub fn is_relational_operator(&self) -> bool {
        matches!(
            self,
            Token::Equal
                | Token::NotEqual
                | Token::Less
                | Token::LessEqual
                | Token::Greater
                | Token::GreaterEqual
        )
    }

    /// Operators of `expression` level (`+` and `-`)
    pub fn is_adding_operator(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus)
    }

    /// Operators of `term` level (`*` and `/`)
    pub fn is_multiplying_operator(&self) -> bool {
        matches!(self, Token::Star | Token::Slash)
    }

    /// Render the token the way diagnostics quote it, with payload text.
    pub fn describe(&self) -> String {
        match self {
            Token::Identifier(name) => format!("identifier '{}'", name),
            Token::Integer(value) => format!("number '{}'", value),
            Token::Real(value) => format!("number '{}'", value),
            Token::CharLiteral(ch) => format!("char literal '{}'", ch),
            Token::StringLiteral(text) => format!("string literal \"{}\"", text),
            Token::Keyword(kw) => format!("keyword '{}'", kw.as_str()),
            other => other.kind_name().to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Keyword(kw) => write!(f, "{}", kw.as_str()),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Integer(value) => write!(f, "{}", value),
            Token::Real(value) => write!(f, "{}", value),
            Token::CharLiteral(ch) => write!(f, "'{}'", ch),
            Token::StringLiteral(text) => write!(f, "\"{}\"", text),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Assign => write!(f, ":="),
            Token::Equal => write!(f, "="),
            Token::NotEqual => write!(f, "<>"),
            Token::Less => write!(f, "<"),
            Token::LessEqual => write!(f, "<="),
            Token::Greater => write!(f, ">"),
            Token::GreaterEqual => write!(f, ">="),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
            Token::Colon => write!(f, ":"),
            Token::Comment(body) => write!(f, "{{ {} }}", body),
            Token::Eof => write!(f, "<eof>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(Token::Keyword(Keyword::Begin).classify(), TokenClass::Keyword);
        assert_eq!(
            Token::Identifier("x".to_string()).classify(),
            TokenClass::Identifier
        );
        assert_eq!(Token::Integer(3).classify(), TokenClass::Literal);
        assert_eq!(Token::Real(1.5).classify(), TokenClass::Literal);
        assert_eq!(Token::Assign.classify(), TokenClass::Operator);
        assert_eq!(Token::Semicolon.classify(), TokenClass::Punctuation);
        assert_eq!(Token::Eof.classify(), TokenClass::Special);
    }

    #[test]
    fn test_significance_filters_comments() {
        assert!(!Token::Comment("note".to_string()).is_significant());
        assert!(Token::Eof.is_significant());
        assert!(Token::Identifier("x".to_string()).is_significant());
    }

    #[test]
    fn test_operator_groups() {
        assert!(Token::Equal.is_relational_operator());
        assert!(Token::NotEqual.is_relational_operator());
        assert!(!Token::Assign.is_relational_operator());

        assert!(Token::Plus.is_adding_operator());
        assert!(!Token::Star.is_adding_operator());
        assert!(Token::Slash.is_multiplying_operator());
    }

    #[test]
    fn test_display_round_trip_spelling() {
        assert_eq!(Token::Assign.to_string(), ":=");
        assert_eq!(Token::NotEqual.to_string(), "<>");
        assert_eq!(Token::Keyword(Keyword::Procedure).to_string(), "procedure");
        assert_eq!(Token::Identifier("counter".to_string()).to_string(), "counter");
    }

    #[test]
    fn test_describe_includes_payload() {
        assert_eq!(
            Token::Identifier("x".to_string()).describe(),
            "identifier 'x'"
        );
        assert_eq!(Token::Integer(42).describe(), "number '42'");
        assert_eq!(Token::Eof.describe(), "end of input");
    }
}
