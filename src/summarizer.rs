// src/summarizer.rs

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::chunker::Chunk;
use crate::llm::LlmProvider;
use crate::report::{estimate_processing_time, ChunkSummary, SummaryReport};

/// Fixed pause between chunk calls. Naive throttle, not adaptive.
const CHUNK_PAUSE: Duration = Duration::from_secs(1);

/// How much of the document the structure analysis pass looks at.
const ANALYSIS_SAMPLE_CHARS: usize = 3000;

const MAX_KEY_QUOTES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStyle {
    Brief,
    Detailed,
    BulletPoints,
    Executive,
}

impl Default for SummaryStyle {
    fn default() -> Self {
        Self::Detailed
    }
}

impl SummaryStyle {
    /// Selectors outside the known set fall back to `Detailed`.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "brief" => Self::Brief,
            "detailed" => Self::Detailed,
            "bullet_points" | "bullet-points" => Self::BulletPoints,
            "executive" => Self::Executive,
            _ => Self::Detailed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brief => "brief",
            Self::Detailed => "detailed",
            Self::BulletPoints => "bullet_points",
            Self::Executive => "executive",
        }
    }

    fn prompt(&self, text: &str) -> String {
        match self {
            Self::Brief => format!(
                "Provide a brief, concise summary of the following text in 2-3 sentences.\n\
                 Focus on the main points and key takeaways.\n\n\
                 Text: {text}\n\nBrief Summary:"
            ),
            Self::Detailed => format!(
                "Provide a detailed summary of the following text.\n\
                 Include:\n\
                 - Main topics and themes\n\
                 - Key arguments or findings\n\
                 - Important details and examples\n\
                 - Conclusions or recommendations\n\n\
                 Text: {text}\n\nDetailed Summary:"
            ),
            Self::BulletPoints => format!(
                "Summarize the following text as clear, organized bullet points.\n\
                 Group related information together and use sub-bullets where appropriate.\n\n\
                 Text: {text}\n\nBullet Point Summary:"
            ),
            Self::Executive => format!(
                "Create an executive summary of the following text suitable for business leaders.\n\
                 Include:\n\
                 - Key insights and findings\n\
                 - Strategic implications\n\
                 - Actionable recommendations\n\
                 - Risk factors or considerations\n\n\
                 Text: {text}\n\nExecutive Summary:"
            ),
        }
    }
}

/// Outcome of the document-structure analysis pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub analysis: String,
    pub success: bool,
}

/// Drives the hosted model: one call per chunk, one synthesis call, plus the
/// optional analysis and quote passes. Individual failures degrade inline so
/// a run always produces a report.
pub struct Summarizer {
    provider: Box<dyn LlmProvider>,
}

impl Summarizer {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// On provider failure returns an inline error string rather than
    /// propagating, so the caller keeps processing remaining chunks.
    pub async fn summarize_text(&self, text: &str, style: SummaryStyle) -> String {
        match self.provider.generate(&style.prompt(text)).await {
            Ok(summary) => summary,
            Err(e) => format!("Error generating summary: {e}"),
        }
    }

    /// Summarizes chunks strictly sequentially with a fixed pause between
    /// calls, then runs one synthesis pass over the successful summaries.
    pub async fn summarize_chunks(&self, chunks: &[Chunk], style: SummaryStyle) -> SummaryReport {
        let mut chunk_summaries = Vec::with_capacity(chunks.len());

        info!(
            total = chunks.len(),
            style = style.as_str(),
            estimated = %estimate_processing_time(chunks.len()),
            "Summarizing chunks"
        );

        for (i, chunk) in chunks.iter().enumerate() {
            info!(chunk = i + 1, total = chunks.len(), "Summarizing chunk");
            let summary = self.summarize_text(&chunk.content, style).await;
            let success = !summary.contains("Error");

            chunk_summaries.push(ChunkSummary {
                chunk_number: i + 1,
                original_length: chunk.content.len(),
                summary_length: if success { summary.len() } else { 0 },
                success,
                summary,
            });

            if i + 1 < chunks.len() {
                tokio::time::sleep(CHUNK_PAUSE).await;
            }
        }

        let combined_summary = self.combine_summaries(&chunk_summaries, style).await;

        SummaryReport {
            individual_summaries: chunk_summaries,
            combined_summary,
            total_chunks: chunks.len(),
            summary_type: style,
            generated_at: Utc::now(),
        }
    }

    /// Joins successful summaries under numbered section labels and asks the
    /// model for one cohesive synthesis. If that call fails, the raw labelled
    /// concatenation is returned instead of an error.
    async fn combine_summaries(&self, summaries: &[ChunkSummary], style: SummaryStyle) -> String {
        let sections: Vec<String> = summaries
            .iter()
            .filter(|cs| cs.success)
            .enumerate()
            .map(|(i, cs)| format!("Section {}: {}", i + 1, cs.summary))
            .collect();

        if sections.is_empty() {
            return "No valid summaries were generated.".to_string();
        }

        let combined_text = sections.join("\n\n");
        let prompt = format!(
            "You have been provided with summaries from different sections of a document.\n\
             Create a final, cohesive summary that synthesizes all the information.\n\n\
             Summary Type: {}\n\n\
             Section Summaries:\n{}\n\nFinal Cohesive Summary:",
            style.as_str(),
            combined_text
        );

        match self.provider.generate(&prompt).await {
            Ok(final_summary) => final_summary,
            Err(e) => {
                warn!(error = %e, "Synthesis call failed, returning concatenated sections");
                format!("Combined Summary:\n\n{combined_text}")
            }
        }
    }

    /// Classifies document type, themes, sections, audience and purpose from
    /// a sample of the text.
    pub async fn analyze_document_structure(&self, text: &str) -> DocumentAnalysis {
        let sample: String = text.chars().take(ANALYSIS_SAMPLE_CHARS).collect();
        let prompt = format!(
            "Analyze the structure and content of this document. Provide:\n\n\
             1. Document Type (research paper, report, article, etc.)\n\
             2. Main Topics/Themes\n\
             3. Key Sections or Chapters\n\
             4. Target Audience\n\
             5. Overall Purpose\n\n\
             Text: {sample}\n\nDocument Analysis:"
        );

        match self.provider.generate(&prompt).await {
            Ok(analysis) => DocumentAnalysis {
                analysis,
                success: true,
            },
            Err(e) => DocumentAnalysis {
                analysis: format!("Error analyzing document: {e}"),
                success: false,
            },
        }
    }

    /// Pulls up to ten representative quotes, one per response line.
    pub async fn extract_key_quotes(&self, text: &str) -> Vec<String> {
        let prompt = format!(
            "Extract 5-10 key quotes, statements, or important phrases from this text.\n\
             Choose quotes that best represent the main ideas or are particularly insightful.\n\n\
             Text: {text}\n\nKey Quotes (one per line):"
        );

        match self.provider.generate(&prompt).await {
            Ok(response) => response
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .take(MAX_KEY_QUOTES)
                .map(str::to_string)
                .collect(),
            Err(e) => vec![format!("Error extracting quotes: {e}")],
        }
    }
}
