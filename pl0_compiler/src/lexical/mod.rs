//! Lexical analysis module - source text to token sequence
//!
//! The public API is [`tokenize`] for raw buffers and
//! [`tokenize_file_result`] for the pipeline, which wraps the token
//! sequence in a [`TokenStream`] and logs the outcome.

mod analyzer;

pub use analyzer::{LexerError, LexicalAnalyzer, LexicalMetrics};

use crate::file_processor::FileProcessingResult;
use crate::logging::codes;
use crate::tokens::{SpannedToken, TokenStream};
use crate::{log_debug, log_error, log_success};

/// Tokenize a source buffer. Finite, ends with an end-of-input token,
/// restartable: a fresh call over the same text yields the same sequence.
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, LexerError> {
    LexicalAnalyzer::new().tokenize(source)
}

/// Tokenize into a parser-ready stream
pub fn tokenize_to_stream(source: &str) -> Result<TokenStream, LexerError> {
    Ok(TokenStream::new(tokenize(source)?))
}

/// Create a fresh analyzer (callers that want metrics keep the instance)
pub fn create_analyzer() -> LexicalAnalyzer {
    LexicalAnalyzer::new()
}

/// Tokenize the output of file processing, with global logging.
/// Returns the stream together with the metrics gathered while scanning.
pub fn tokenize_file_result(
    file_result: &FileProcessingResult,
) -> Result<(TokenStream, LexicalMetrics), LexerError> {
    log_debug!("Starting lexical analysis", "bytes" => file_result.source.len());

    let mut analyzer = LexicalAnalyzer::new();
    match analyzer.tokenize(&file_result.source) {
        Ok(tokens) => {
            log_success!(
                codes::success::TOKENIZATION_COMPLETE,
                "Lexical analysis completed",
                "tokens" => tokens.len(),
                "lines" => analyzer.metrics().line_count
            );
            let metrics = analyzer.metrics().clone();
            Ok((TokenStream::new(tokens), metrics))
        }
        Err(error) => {
            log_error!(error.error_code(), "Lexical analysis failed",
                "error" => error.to_string()
            );
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Token;

    #[test]
    fn test_tokenize_api_ends_with_eof() {
        let tokens = tokenize("begin end").unwrap();
        assert!(matches!(tokens.last().map(|t| &t.value), Some(Token::Eof)));
    }

    #[test]
    fn test_tokenize_to_stream_filters_comments() {
        let stream = tokenize_to_stream("{ header } begin end").unwrap();
        assert_eq!(stream.len(), 3); // begin, end, eof
        assert_eq!(stream.total_len(), 4);
    }
}
