//! Syntax analysis - token stream to AST transformation
//!
//! Converts a significant-token stream into an abstract syntax tree using
//! the grammar builders, with span-accurate error reporting and global
//! logging integration.

pub mod error;
pub mod parser;

pub use crate::grammar::ast::nodes::Program;
pub use error::{SyntaxError, SyntaxResult};
pub use parser::{create_parser, Pl0Parser};

use crate::logging::codes;
use crate::tokens::TokenStream;
use crate::{log_debug, log_error, log_success};

/// Parse a program from a token stream with global logging
pub fn parse_program_stream(token_stream: TokenStream) -> SyntaxResult<Program> {
    log_debug!("Starting syntax analysis", "tokens" => token_stream.len());

    let result = Pl0Parser::new(token_stream).parse();

    match &result {
        Ok(_ast) => {
            log_success!(
                codes::success::AST_CONSTRUCTION_COMPLETE,
                "Syntax analysis completed successfully"
            );
        }
        Err(error) => {
            log_error!(error.error_code(), "Syntax analysis failed",
                "error" => error.to_string()
            );
        }
    }

    result
}

/// Validate that all syntax error codes are registered
pub fn init_syntax_logging() -> Result<(), String> {
    let required = [
        codes::syntax::UNEXPECTED_TOKEN,
        codes::syntax::UNEXPECTED_END_OF_INPUT,
        codes::syntax::MISSING_EOF,
        codes::syntax::EMPTY_TOKEN_STREAM,
        codes::syntax::TRAILING_TOKENS,
        codes::syntax::INTERNAL_PARSER_ERROR,
        codes::syntax::MAX_RECURSION_DEPTH,
    ];

    for code in &required {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "syntax error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{Token, TokenStreamBuilder};

    #[test]
    fn test_syntax_codes_registered() {
        assert!(init_syntax_logging().is_ok());
    }

    #[test]
    fn test_empty_stream_reports_registered_code() {
        let tokens = TokenStreamBuilder::new().build();
        let error = parse_program_stream(tokens).unwrap_err();
        assert_eq!(error.error_code().as_str(), "E041");
    }

    #[test]
    fn test_eof_only_stream_is_empty_program() {
        let tokens = TokenStreamBuilder::new()
            .push_token(Token::Eof)
            .build();
        let program = parse_program_stream(tokens).unwrap();
        assert!(program.block.is_empty());
    }

    #[test]
    fn test_parse_stream_end_to_end() {
        let stream = crate::lexical::tokenize_to_stream("var n; begin n := 3 * (2 + 1) end")
            .expect("tokenization should succeed");
        let program = parse_program_stream(stream).unwrap();
        assert_eq!(program.block.variables, vec!["n".to_string()]);
    }

    #[test]
    fn test_error_metadata_available() {
        let tokens = TokenStreamBuilder::new()
            .push_token(Token::Semicolon)
            .finish();
        let error = parse_program_stream(tokens).unwrap_err();
        let description = codes::get_description(error.error_code().as_str());
        assert_ne!(description, "Unknown error");
    }
}
