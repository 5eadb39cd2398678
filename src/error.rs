// src/error.rs

use thiserror::Error;

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Fatal error conditions for a summarization run.
///
/// Per-page extraction failures, per-chunk summarization failures and
/// synthesis failures are not represented here: those degrade in place
/// (skipped, error-flagged, or replaced by a simpler output) so the run
/// can finish.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Error reading PDF: {0}")]
    PdfRead(String),

    #[error("Document contains no extractable text")]
    EmptyDocument,

    #[error("Tokenizer initialization failed: {0}")]
    Tokenizer(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
