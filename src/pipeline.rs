// src/pipeline.rs

use std::path::Path;

use tracing::info;

use crate::chunker;
use crate::cleaner;
use crate::config::AppConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::llm::{GeminiProvider, LlmProvider};
use crate::report::SummaryReport;
use crate::summarizer::{Summarizer, SummaryStyle};
use crate::tokens::{BpeTokenCounter, TokenCounter};

/// Linear extract -> clean -> chunk -> summarize pipeline.
///
/// The provider and token counter are constructed explicitly and passed in;
/// there is no ambient client state.
pub struct Pipeline {
    summarizer: Summarizer,
    counter: Box<dyn TokenCounter>,
    max_chunk_tokens: usize,
}

impl Pipeline {
    pub fn new(
        provider: Box<dyn LlmProvider>,
        counter: Box<dyn TokenCounter>,
        max_chunk_tokens: usize,
    ) -> Self {
        Self {
            summarizer: Summarizer::new(provider),
            counter,
            max_chunk_tokens,
        }
    }

    /// Wires the default Gemini provider and BPE counter from configuration.
    pub fn from_config(config: &AppConfig) -> PipelineResult<Self> {
        let provider = Box::new(GeminiProvider::from_config(config));
        let counter = Box::new(BpeTokenCounter::new()?);
        Ok(Self::new(provider, counter, config.max_chunk_tokens))
    }

    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    /// Extracts and cleans a PDF into a single normalized string.
    pub fn load_document(&self, pdf_path: &Path) -> PipelineResult<String> {
        let raw = crate::pdf::extract_text(pdf_path)?;
        let cleaned = cleaner::clean_text(&raw);
        if cleaned.is_empty() {
            return Err(PipelineError::EmptyDocument);
        }
        Ok(cleaned)
    }

    /// Chunks cleaned text and summarizes it chunk by chunk.
    pub async fn summarize_document(
        &self,
        cleaned_text: &str,
        style: SummaryStyle,
    ) -> PipelineResult<SummaryReport> {
        if cleaned_text.trim().is_empty() {
            return Err(PipelineError::EmptyDocument);
        }

        let chunks = chunker::chunk_text(cleaned_text, self.counter.as_ref(), self.max_chunk_tokens);
        info!(
            chunks = chunks.len(),
            chars = cleaned_text.len(),
            max_tokens = self.max_chunk_tokens,
            "Document chunked"
        );

        Ok(self.summarizer.summarize_chunks(&chunks, style).await)
    }

    /// One-shot convenience: load a PDF from disk and summarize it.
    pub async fn run(&self, pdf_path: &Path, style: SummaryStyle) -> PipelineResult<SummaryReport> {
        let cleaned = self.load_document(pdf_path)?;
        self.summarize_document(&cleaned, style).await
    }
}
