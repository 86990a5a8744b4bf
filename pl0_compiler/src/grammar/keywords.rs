//! Reserved words of the PL/0 grammar
//!
//! The keyword table is a process-wide constant. Lookup is case-insensitive:
//! the lexical analyzer lowercases candidate identifiers before consulting
//! the table, so `Begin`, `BEGIN`, and `begin` all yield [`Keyword::Begin`]
//! while `beginner` stays an identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every reserved word of the grammar, one variant per word.
///
/// Reserved words carry no payload. An identifier that matches one of these
/// (case-insensitively) is reclassified during lexical analysis and never
/// reaches the parser as an identifier token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Begin,
    End,
    If,
    Then,
    While,
    Do,
    Call,
    Const,
    Var,
    Procedure,
    Odd,
}

impl Keyword {
    /// Canonical (lowercase) spelling
    pub const fn as_str(&self) -> &'static str {
        match self {
            Keyword::Begin => "begin",
            Keyword::End => "end",
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::While => "while",
            Keyword::Do => "do",
            Keyword::Call => "call",
            Keyword::Const => "const",
            Keyword::Var => "var",
            Keyword::Procedure => "procedure",
            Keyword::Odd => "odd",
        }
    }

    /// Case-insensitive lookup. Returns `None` for non-reserved words.
    pub fn lookup(word: &str) -> Option<Keyword> {
        let lowered = word.to_ascii_lowercase();
        RESERVED_WORDS
            .iter()
            .find(|(spelling, _)| *spelling == lowered)
            .map(|(_, keyword)| *keyword)
    }

    /// Keywords that can begin a declaration inside a block
    pub fn is_declaration_keyword(&self) -> bool {
        matches!(self, Keyword::Const | Keyword::Var | Keyword::Procedure)
    }

    /// Keywords that can begin a statement
    pub fn is_statement_keyword(&self) -> bool {
        matches!(
            self,
            Keyword::Call | Keyword::Begin | Keyword::If | Keyword::While
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The immutable reserved-word table, built once at compile time.
pub const RESERVED_WORDS: &[(&str, Keyword)] = &[
    ("begin", Keyword::Begin),
    ("end", Keyword::End),
    ("if", Keyword::If),
    ("then", Keyword::Then),
    ("while", Keyword::While),
    ("do", Keyword::Do),
    ("call", Keyword::Call),
    ("const", Keyword::Const),
    ("var", Keyword::Var),
    ("procedure", Keyword::Procedure),
    ("odd", Keyword::Odd),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Keyword::lookup("begin"), Some(Keyword::Begin));
        assert_eq!(Keyword::lookup("Begin"), Some(Keyword::Begin));
        assert_eq!(Keyword::lookup("BEGIN"), Some(Keyword::Begin));
        assert_eq!(Keyword::lookup("PrOcEdUrE"), Some(Keyword::Procedure));
    }

    #[test]
    fn test_lookup_rejects_non_keywords() {
        assert_eq!(Keyword::lookup("beginner"), None);
        assert_eq!(Keyword::lookup("ends"), None);
        assert_eq!(Keyword::lookup(""), None);
        assert_eq!(Keyword::lookup("x"), None);
    }

    #[test]
    fn test_odd_is_reserved() {
        assert_eq!(Keyword::lookup("odd"), Some(Keyword::Odd));
        assert_eq!(Keyword::lookup("ODD"), Some(Keyword::Odd));
    }

    #[test]
    fn test_table_round_trips_canonical_spelling() {
        for (spelling, keyword) in RESERVED_WORDS {
            assert_eq!(keyword.as_str(), *spelling);
            assert_eq!(Keyword::lookup(spelling), Some(*keyword));
        }
    }

    #[test]
    fn test_classification_predicates() {
        assert!(Keyword::Const.is_declaration_keyword());
        assert!(Keyword::Var.is_declaration_keyword());
        assert!(Keyword::Procedure.is_declaration_keyword());
        assert!(!Keyword::Begin.is_declaration_keyword());

        assert!(Keyword::Begin.is_statement_keyword());
        assert!(Keyword::Call.is_statement_keyword());
        assert!(!Keyword::Then.is_statement_keyword());
        assert!(!Keyword::Odd.is_statement_keyword());
    }
}
