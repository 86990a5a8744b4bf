//! Processing pipeline - file reading through syntax analysis
//!
//! Stages run in order and stop at the first failure: file processing,
//! lexical analysis, syntax analysis. Logging runs with the file path as
//! thread-local context so every event carries its source file.

mod error;
mod result;

pub use error::PipelineError;
pub use result::PipelineResult;

use crate::logging;
use std::path::PathBuf;
use std::time::Instant;

/// Process a single file through the full front end
pub fn process_file(file_path: &str) -> Result<PipelineResult, PipelineError> {
    let start_time = Instant::now();

    logging::with_file_context(PathBuf::from(file_path), || {
        crate::log_info!("Starting front-end pipeline", "file" => file_path);

        let file_result = crate::file_processor::process_file(file_path)?;
        let (tokens, lexical_metrics) = crate::lexical::tokenize_file_result(&file_result)?;
        let token_count = tokens.total_len();
        let program = crate::syntax::parse_program_stream(tokens)?;

        let result = PipelineResult {
            program,
            file_metadata: file_result.metadata,
            lexical_metrics,
            token_count,
            processing_duration: start_time.elapsed(),
        };

        result.log_success(file_path);

        Ok(result)
    })
}

/// Run lexical and syntax analysis over an in-memory buffer.
///
/// Used when the source does not come from a file, for instance tests or
/// standard input.
pub fn process_source(source: &str) -> Result<crate::grammar::ast::nodes::Program, PipelineError> {
    let stream = crate::lexical::tokenize_to_stream(source)?;
    Ok(crate::syntax::parse_program_stream(stream)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_process_valid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("square.pl0");
        fs::write(
            &file_path,
            "var x, squ;\n\
             procedure square;\n\
             squ := x * x;\n\
             begin\n\
             \tx := 1;\n\
             \twhile x <= 10 do\n\
             \tbegin\n\
             \t\tcall square;\n\
             \t\tx := x + 1\n\
             \tend\n\
             end\n",
        )
        .unwrap();

        let result = process_file(file_path.to_str().unwrap()).unwrap();
        assert_eq!(result.program.block.variables.len(), 2);
        assert_eq!(result.program.block.procedures.len(), 1);
        assert!(result.token_count > 0);
        assert!(result.lexical_metrics.keyword_count > 0);
    }

    #[test]
    fn test_missing_file_is_file_processing_error() {
        let error = process_file("does_not_exist.pl0").unwrap_err();
        assert_matches!(error, PipelineError::FileProcessing(_));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_lexical_failure_stops_pipeline() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bad.pl0");
        fs::write(&file_path, "x := @").unwrap();

        let error = process_file(file_path.to_str().unwrap()).unwrap_err();
        assert_matches!(error, PipelineError::LexicalAnalysis(_));
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_syntax_failure_stops_pipeline() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bad.pl0");
        fs::write(&file_path, "begin x := 1").unwrap();

        let error = process_file(file_path.to_str().unwrap()).unwrap_err();
        assert_matches!(error, PipelineError::SyntaxAnalysis(_));
        assert_eq!(error.exit_code(), 4);
    }

    #[test]
    fn test_process_source_buffer() {
        let program = process_source("begin end").unwrap();
        assert!(program.block.constants.is_empty());
    }

    #[test]
    fn test_pipeline_error_creation() {
        let error = PipelineError::pipeline_error("stage ordering violated");
        assert_matches!(error, PipelineError::Pipeline { ref message } if message == "stage ordering violated");
        assert_eq!(error.exit_code(), 1);
    }
}
