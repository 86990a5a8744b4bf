//! Lexical analyzer for PL/0 source text
//!
//! Scans left to right with maximal munch: multi-character operators
//! (`:=`, `<>`, `<=`, `>=`) are matched before their single-character
//! prefixes, and an identifier consumes every identifier character before
//! the reserved-word table is consulted. Whitespace produces no token;
//! comments (`{ ... }` and `(* ... *)`) produce comment tokens that the
//! token stream filters from parsing.
//!
//! The first unmatched character aborts the whole tokenization. The
//! analyzer holds no cross-call state, so re-running it over the same input
//! yields an identical sequence.

use crate::config::constants::compile_time;
use crate::grammar::keywords::Keyword;
use crate::logging::codes::{self, Code};
use crate::tokens::token::Token;
use crate::tokens::token_stream::SpannedToken;
use crate::utils::{Position, Span, Spanned};

/// Lexical analysis errors. Every variant carries the 1-based line and
/// column where the problem starts.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LexerError {
    #[error("invalid character '{character}' at line {line}, column {column}")]
    InvalidCharacter {
        character: char,
        line: u32,
        column: u32,
    },

    #[error("unterminated comment starting at line {line}, column {column}")]
    UnterminatedComment { line: u32, column: u32 },

    #[error("unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { line: u32, column: u32 },

    #[error("unterminated char literal starting at line {line}, column {column}")]
    UnterminatedChar { line: u32, column: u32 },

    #[error("invalid number '{text}' at line {line}, column {column}")]
    InvalidNumber {
        text: String,
        line: u32,
        column: u32,
    },

    #[error("identifier of {length} characters exceeds maximum at line {line}, column {column}")]
    IdentifierTooLong {
        length: usize,
        line: u32,
        column: u32,
    },

    #[error("comment of {length} characters exceeds maximum at line {line}, column {column}")]
    CommentTooLong {
        length: usize,
        line: u32,
        column: u32,
    },

    #[error("token count exceeds maximum of {limit}")]
    TooManyTokens { limit: usize },
}

impl LexerError {
    pub fn error_code(&self) -> Code {
        match self {
            LexerError::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::UnterminatedComment { .. } => codes::lexical::UNTERMINATED_COMMENT,
            LexerError::UnterminatedString { .. } | LexerError::UnterminatedChar { .. } => {
                codes::lexical::UNTERMINATED_STRING
            }
            LexerError::InvalidNumber { .. } => codes::lexical::INVALID_NUMBER,
            LexerError::IdentifierTooLong { .. } => codes::lexical::IDENTIFIER_TOO_LONG,
            LexerError::CommentTooLong { .. } => codes::lexical::COMMENT_TOO_LONG,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
        }
    }

    /// Position of the offending input, when the variant carries one
    pub fn position(&self) -> Option<(u32, u32)> {
        match self {
            LexerError::InvalidCharacter { line, column, .. }
            | LexerError::UnterminatedComment { line, column }
            | LexerError::UnterminatedString { line, column }
            | LexerError::UnterminatedChar { line, column }
            | LexerError::InvalidNumber { line, column, .. }
            | LexerError::IdentifierTooLong { line, column, .. }
            | LexerError::CommentTooLong { line, column, .. } => Some((*line, *column)),
            LexerError::TooManyTokens { .. } => None,
        }
    }
}

/// Token counts gathered during a scan
#[derive(Debug, Clone, Default)]
pub struct LexicalMetrics {
    pub keyword_count: usize,
    pub identifier_count: usize,
    pub literal_count: usize,
    pub operator_count: usize,
    pub punctuation_count: usize,
    pub comment_count: usize,
    pub line_count: u32,
}

impl LexicalMetrics {
    fn record_token(&mut self, token: &Token) {
        use crate::tokens::token::TokenClass;
        match token.classify() {
            TokenClass::Keyword => self.keyword_count += 1,
            TokenClass::Identifier => self.identifier_count += 1,
            TokenClass::Literal => self.literal_count += 1,
            TokenClass::Operator => self.operator_count += 1,
            TokenClass::Punctuation => self.punctuation_count += 1,
            TokenClass::Special => {
                if matches!(token, Token::Comment(_)) {
                    self.comment_count += 1;
                }
            }
        }
    }

    pub fn total_significant(&self) -> usize {
        self.keyword_count
            + self.identifier_count
            + self.literal_count
            + self.operator_count
            + self.punctuation_count
    }
}

/// The scanner. One instance tokenizes one source buffer at a time; the
/// cursor resets at the start of every [`tokenize`](Self::tokenize) call.
#[derive(Debug, Default)]
pub struct LexicalAnalyzer {
    position: Position,
    metrics: LexicalMetrics,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Tokenize a source buffer into a finite sequence ending with
    /// [`Token::Eof`]. Aborts at the first lexical error.
    pub fn tokenize(&mut self, source: &str) -> Result<Vec<SpannedToken>, LexerError> {
        self.position = Position::start();
        self.metrics = LexicalMetrics::default();

        let mut tokens: Vec<SpannedToken> = Vec::new();

        while let Some(ch) = self.peek(source) {
            if ch.is_whitespace() {
                self.position = self.position.advance(ch);
                continue;
            }

            let token = match ch {
                '{' => self.scan_brace_comment(source)?,
                '(' if self.peek_at(source, 1) == Some('*') => self.scan_paren_comment(source)?,
                '0'..='9' => self.scan_number(source)?,
                '\'' => self.scan_char_literal(source)?,
                '"' => self.scan_string_literal(source)?,
                c if c.is_ascii_alphabetic() || c == '_' => self.scan_word(source)?,
                _ => self.scan_operator(source)?,
            };

            self.metrics.record_token(&token.value);
            tokens.push(token);

            if tokens.len() > compile_time::lexical::MAX_TOKEN_COUNT {
                return Err(LexerError::TooManyTokens {
                    limit: compile_time::lexical::MAX_TOKEN_COUNT,
                });
            }
        }

        self.metrics.line_count = self.position.line;

        let eof_span = Span::new(self.position, self.position);
        tokens.push(Spanned::new(Token::Eof, eof_span));

        Ok(tokens)
    }

    fn peek(&self, source: &str) -> Option<char> {
        source[self.position.offset..].chars().next()
    }

    fn peek_at(&self, source: &str, n: usize) -> Option<char> {
        source[self.position.offset..].chars().nth(n)
    }

    fn bump(&mut self, source: &str) -> Option<char> {
        let ch = self.peek(source)?;
        self.position = self.position.advance(ch);
        Some(ch)
    }

    fn spanned(&self, token: Token, start: Position) -> SpannedToken {
        Spanned::new(token, Span::new(start, self.position))
    }

    /// `{ ... }` comment. The body is kept; the braces are not.
    fn scan_brace_comment(&mut self, source: &str) -> Result<SpannedToken, LexerError> {
        let start = self.position;
        self.bump(source); // '{'

        let mut body = String::new();
        loop {
            match self.bump(source) {
                Some('}') => break,
                Some(ch) => body.push(ch),
                None => {
                    return Err(LexerError::UnterminatedComment {
                        line: start.line,
                        column: start.column,
                    })
                }
            }

            if body.len() > compile_time::lexical::MAX_COMMENT_LENGTH {
                return Err(LexerError::CommentTooLong {
                    length: body.len(),
                    line: start.line,
                    column: start.column,
                });
            }
        }

        Ok(self.spanned(Token::Comment(body), start))
    }

    /// `(* ... *)` comment, possibly spanning lines
    fn scan_paren_comment(&mut self, source: &str) -> Result<SpannedToken, LexerError> {
        let start = self.position;
        self.bump(source); // '('
        self.bump(source); // '*'

        let mut body = String::new();
        loop {
            match self.bump(source) {
                Some('*') if self.peek(source) == Some(')') => {
                    self.bump(source);
                    break;
                }
                Some(ch) => body.push(ch),
                None => {
                    return Err(LexerError::UnterminatedComment {
                        line: start.line,
                        column: start.column,
                    })
                }
            }

            if body.len() > compile_time::lexical::MAX_COMMENT_LENGTH {
                return Err(LexerError::CommentTooLong {
                    length: body.len(),
                    line: start.line,
                    column: start.column,
                });
            }
        }

        Ok(self.spanned(Token::Comment(body), start))
    }

    /// Digits, with an optional fractional part. The dot is only consumed
    /// when a digit follows it, so `3.` lexes as the integer 3 and leaves
    /// the dot for the next match attempt.
    fn scan_number(&mut self, source: &str) -> Result<SpannedToken, LexerError> {
        let start = self.position;

        while matches!(self.peek(source), Some(c) if c.is_ascii_digit()) {
            self.bump(source);
        }

        let mut is_real = false;
        if self.peek(source) == Some('.')
            && matches!(self.peek_at(source, 1), Some(c) if c.is_ascii_digit())
        {
            is_real = true;
            self.bump(source); // '.'
            while matches!(self.peek(source), Some(c) if c.is_ascii_digit()) {
                self.bump(source);
            }
        }

        let text = &source[start.offset..self.position.offset];

        if text.len() > compile_time::lexical::MAX_NUMBER_LENGTH {
            return Err(LexerError::InvalidNumber {
                text: text.to_string(),
                line: start.line,
                column: start.column,
            });
        }

        let token = if is_real {
            let value = text.parse::<f64>().map_err(|_| LexerError::InvalidNumber {
                text: text.to_string(),
                line: start.line,
                column: start.column,
            })?;
            Token::Real(value)
        } else {
            let value = text.parse::<i64>().map_err(|_| LexerError::InvalidNumber {
                text: text.to_string(),
                line: start.line,
                column: start.column,
            })?;
            Token::Integer(value)
        };

        Ok(self.spanned(token, start))
    }

    /// Identifier or reserved word. The whole word is consumed first, then
    /// reclassified case-insensitively against the keyword table.
    fn scan_word(&mut self, source: &str) -> Result<SpannedToken, LexerError> {
        let start = self.position;

        while matches!(self.peek(source), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.bump(source);
        }

        let text = &source[start.offset..self.position.offset];

        if text.len() > compile_time::lexical::MAX_IDENTIFIER_LENGTH {
            return Err(LexerError::IdentifierTooLong {
                length: text.len(),
                line: start.line,
                column: start.column,
            });
        }

        let token = match Keyword::lookup(text) {
            Some(keyword) => Token::Keyword(keyword),
            None => Token::Identifier(text.to_string()),
        };

        Ok(self.spanned(token, start))
    }

    /// `'x'` with an optional backslash escape
    fn scan_char_literal(&mut self, source: &str) -> Result<SpannedToken, LexerError> {
        let start = self.position;
        self.bump(source); // opening quote

        let ch = match self.bump(source) {
            Some('\\') => match self.bump(source) {
                Some('n') => '\n',
                Some('t') => '\t',
                Some(escaped) => escaped,
                None => {
                    return Err(LexerError::UnterminatedChar {
                        line: start.line,
                        column: start.column,
                    })
                }
            },
            Some(ch) if ch != '\'' && ch != '\n' => ch,
            _ => {
                return Err(LexerError::UnterminatedChar {
                    line: start.line,
                    column: start.column,
                })
            }
        };

        if self.bump(source) != Some('\'') {
            return Err(LexerError::UnterminatedChar {
                line: start.line,
                column: start.column,
            });
        }

        Ok(self.spanned(Token::CharLiteral(ch), start))
    }

    /// `"..."`, no escapes, quotes stripped
    fn scan_string_literal(&mut self, source: &str) -> Result<SpannedToken, LexerError> {
        let start = self.position;
        self.bump(source); // opening quote

        let mut body = String::new();
        loop {
            match self.bump(source) {
                Some('"') => break,
                Some(ch) => body.push(ch),
                None => {
                    return Err(LexerError::UnterminatedString {
                        line: start.line,
                        column: start.column,
                    })
                }
            }

            if body.len() > compile_time::lexical::MAX_STRING_LENGTH {
                return Err(LexerError::UnterminatedString {
                    line: start.line,
                    column: start.column,
                });
            }
        }

        Ok(self.spanned(Token::StringLiteral(body), start))
    }

    /// Operators and punctuation. Two-character forms are checked before
    /// their single-character prefixes.
    fn scan_operator(&mut self, source: &str) -> Result<SpannedToken, LexerError> {
        let start = self.position;
        let ch = match self.bump(source) {
            Some(ch) => ch,
            None => {
                return Err(LexerError::InvalidCharacter {
                    character: '\0',
                    line: start.line,
                    column: start.column,
                })
            }
        };

        let token = match ch {
            ':' if self.peek(source) == Some('=') => {
                self.bump(source);
                Token::Assign
            }
            ':' => Token::Colon,
            '<' if self.peek(source) == Some('>') => {
                self.bump(source);
                Token::NotEqual
            }
            '<' if self.peek(source) == Some('=') => {
                self.bump(source);
                Token::LessEqual
            }
            '<' => Token::Less,
            '>' if self.peek(source) == Some('=') => {
                self.bump(source);
                Token::GreaterEqual
            }
            '>' => Token::Greater,
            '=' => Token::Equal,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            other => {
                return Err(LexerError::InvalidCharacter {
                    character: other,
                    line: start.line,
                    column: start.column,
                })
            }
        };

        Ok(self.spanned(token, start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn tokens_of(source: &str) -> Vec<Token> {
        LexicalAnalyzer::new()
            .tokenize(source)
            .unwrap()
            .into_iter()
            .map(|spanned| spanned.value)
            .collect()
    }

    #[test]
    fn test_assignment_and_not_equal_sequence() {
        assert_eq!(
            tokens_of("x := 3 <> 4"),
            vec![
                Token::Identifier("x".to_string()),
                Token::Assign,
                Token::Integer(3),
                Token::NotEqual,
                Token::Integer(4),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_assign_is_one_token_not_colon_pair() {
        assert_eq!(tokens_of(":="), vec![Token::Assign, Token::Eof]);
        assert_eq!(tokens_of(":"), vec![Token::Colon, Token::Eof]);
    }

    #[test]
    fn test_maximal_munch_on_relational_operators() {
        assert_eq!(
            tokens_of("< <= <> > >= ="),
            vec![
                Token::Less,
                Token::LessEqual,
                Token::NotEqual,
                Token::Greater,
                Token::GreaterEqual,
                Token::Equal,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_keyword_reclassification_is_case_insensitive() {
        assert_eq!(
            tokens_of("Begin"),
            vec![Token::Keyword(Keyword::Begin), Token::Eof]
        );
        assert_eq!(
            tokens_of("beginner"),
            vec![Token::Identifier("beginner".to_string()), Token::Eof]
        );
        assert_eq!(
            tokens_of("ODD"),
            vec![Token::Keyword(Keyword::Odd), Token::Eof]
        );
    }

    #[test]
    fn test_integer_and_real_literals() {
        assert_eq!(
            tokens_of("42 3.14"),
            vec![Token::Integer(42), Token::Real(3.14), Token::Eof]
        );
        // trailing dot is not part of the number
        let mut analyzer = LexicalAnalyzer::new();
        let result = analyzer.tokenize("3.");
        assert_matches!(result, Err(LexerError::InvalidCharacter { character: '.', .. }));
    }

    #[test]
    fn test_comments_are_discarded_from_significant_stream() {
        let tokens = tokens_of("a { note } b (* more *) c");
        assert_eq!(
            tokens,
            vec![
                Token::Identifier("a".to_string()),
                Token::Comment(" note ".to_string()),
                Token::Identifier("b".to_string()),
                Token::Comment(" more ".to_string()),
                Token::Identifier("c".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_multiline_comment_advances_line_count() {
        let spanned = LexicalAnalyzer::new()
            .tokenize("(* one\ntwo *)\nx")
            .unwrap();
        let ident = spanned
            .iter()
            .find(|t| t.value.is_identifier())
            .unwrap();
        assert_eq!(ident.span.start.line, 3);
        assert_eq!(ident.span.start.column, 1);
    }

    #[test]
    fn test_positions_are_one_based() {
        let spanned = LexicalAnalyzer::new().tokenize("var x;\n  y := 1").unwrap();
        assert_eq!(spanned[0].span.start.line, 1);
        assert_eq!(spanned[0].span.start.column, 1);

        let y = spanned
            .iter()
            .find(|t| matches!(&t.value, Token::Identifier(name) if name == "y"))
            .unwrap();
        assert_eq!(y.span.start.line, 2);
        assert_eq!(y.span.start.column, 3);
    }

    #[test]
    fn test_invalid_character_aborts_with_position() {
        let mut analyzer = LexicalAnalyzer::new();
        let result = analyzer.tokenize("x := 1;\n  @");
        assert_matches!(
            result,
            Err(LexerError::InvalidCharacter {
                character: '@',
                line: 2,
                column: 3,
            })
        );
    }

    #[test]
    fn test_input_without_bad_character_tokenizes_cleanly() {
        let mut analyzer = LexicalAnalyzer::new();
        assert!(analyzer.tokenize("x := 1; @").is_err());
        // a fresh scan over the repaired input succeeds
        assert!(analyzer.tokenize("x := 1;").is_ok());
    }

    #[test]
    fn test_unterminated_comment_reports_opening_position() {
        let mut analyzer = LexicalAnalyzer::new();
        let result = analyzer.tokenize("begin { never closed");
        assert_matches!(
            result,
            Err(LexerError::UnterminatedComment { line: 1, column: 7 })
        );
    }

    #[test]
    fn test_char_and_string_literals() {
        assert_eq!(
            tokens_of("'a' \"hello\""),
            vec![
                Token::CharLiteral('a'),
                Token::StringLiteral("hello".to_string()),
                Token::Eof,
            ]
        );

        let mut analyzer = LexicalAnalyzer::new();
        assert_matches!(
            analyzer.tokenize("\"open"),
            Err(LexerError::UnterminatedString { .. })
        );
    }

    #[test]
    fn test_restartable_identical_sequences() {
        let source = "const a = 1; var b; begin b := a + 1 end";
        let first = LexicalAnalyzer::new().tokenize(source).unwrap();
        let second = LexicalAnalyzer::new().tokenize(source).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_yields_only_eof() {
        let tokens = tokens_of("");
        assert_eq!(tokens, vec![Token::Eof]);
    }

    #[test]
    fn test_metrics_record_token_classes() {
        let mut analyzer = LexicalAnalyzer::new();
        analyzer
            .tokenize("const a = 1; { note } begin a := a + 2 end")
            .unwrap();
        let metrics = analyzer.metrics();
        assert_eq!(metrics.keyword_count, 3); // const, begin, end
        assert_eq!(metrics.identifier_count, 3);
        assert_eq!(metrics.literal_count, 2);
        assert_eq!(metrics.comment_count, 1);
        assert!(metrics.total_significant() > 0);
    }
}
