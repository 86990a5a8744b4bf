use crate::file_processor::FileProcessorError;
use crate::lexical::LexerError;
use crate::syntax::SyntaxError;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("Lexical analysis failed: {0}")]
    LexicalAnalysis(#[from] LexerError),

    #[error("Syntax analysis failed: {0}")]
    SyntaxAnalysis(#[from] SyntaxError),

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn pipeline_error(message: &str) -> Self {
        Self::Pipeline {
            message: message.to_string(),
        }
    }

    /// Error code of the underlying stage failure
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            PipelineError::FileProcessing(e) => e.error_code(),
            PipelineError::LexicalAnalysis(e) => e.error_code(),
            PipelineError::SyntaxAnalysis(e) => e.error_code(),
            PipelineError::Pipeline { .. } => crate::logging::codes::system::INTERNAL_ERROR,
        }
    }

    /// Process exit code for the stage that failed
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::FileProcessing(_) => 2,
            PipelineError::LexicalAnalysis(_) => 3,
            PipelineError::SyntaxAnalysis(_) => 4,
            PipelineError::Pipeline { .. } => 1,
        }
    }
}
