use crate::file_processor::FileMetadata;
use crate::grammar::ast::nodes::Program;
use crate::lexical::LexicalMetrics;
use std::time::Duration;

/// Result of processing one source file through every stage
#[derive(Debug)]
pub struct PipelineResult {
    pub program: Program,
    pub file_metadata: FileMetadata,
    pub lexical_metrics: LexicalMetrics,
    pub token_count: usize,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn log_success(&self, file_path: &str) {
        let duration_str = format!("{:.2}", self.processing_duration.as_secs_f64() * 1000.0);
        let tokens_str = self.token_count.to_string();
        crate::log_success!(
            crate::logging::codes::success::OPERATION_COMPLETED_SUCCESSFULLY,
            "Source file accepted",
            "file" => file_path,
            "tokens" => tokens_str.as_str(),
            "duration_ms" => duration_str.as_str()
        );
    }
}
