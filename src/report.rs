// src/report.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::summarizer::SummaryStyle;

/// Per-chunk summarization outcome. `chunk_number` is 1-based and entries
/// keep the original chunk order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkSummary {
    pub chunk_number: usize,
    pub summary: String,
    pub original_length: usize,
    pub summary_length: usize,
    pub success: bool,
}

impl ChunkSummary {
    /// Summary-to-original size ratio; 0 when the chunk was empty.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_length == 0 {
            return 0.0;
        }
        self.summary_length as f64 / self.original_length as f64
    }
}

/// Aggregate result of a summarization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub individual_summaries: Vec<ChunkSummary>,
    pub combined_summary: String,
    pub total_chunks: usize,
    pub summary_type: SummaryStyle,
    pub generated_at: DateTime<Utc>,
}

impl SummaryReport {
    pub fn successful_summaries(&self) -> usize {
        self.individual_summaries.iter().filter(|cs| cs.success).count()
    }
}

/// Rough wall-clock estimate for a run over `num_chunks` chunks. Chunk calls
/// are sequential with a fixed pause, so this grows superlinearly.
pub fn estimate_processing_time(num_chunks: usize) -> String {
    let estimated_seconds = (num_chunks as f64).powf(2.5);

    if estimated_seconds < 60.0 {
        format!("~{} seconds", estimated_seconds as u64)
    } else if estimated_seconds < 3600.0 {
        format!("~{} minutes", (estimated_seconds / 60.0) as u64)
    } else {
        let hours = (estimated_seconds / 3600.0) as u64;
        let minutes = ((estimated_seconds % 3600.0) / 60.0) as u64;
        format!("~{}h {}m", hours, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(original: usize, summary: usize, success: bool) -> ChunkSummary {
        ChunkSummary {
            chunk_number: 1,
            summary: String::new(),
            original_length: original,
            summary_length: summary,
            success,
        }
    }

    #[test]
    fn test_compression_ratio_handles_empty_original() {
        assert_eq!(entry(0, 50, true).compression_ratio(), 0.0);
        assert_eq!(entry(200, 50, true).compression_ratio(), 0.25);
    }

    #[test]
    fn test_successful_summary_count() {
        let report = SummaryReport {
            individual_summaries: vec![entry(10, 5, true), entry(10, 0, false), entry(10, 4, true)],
            combined_summary: String::new(),
            total_chunks: 3,
            summary_type: SummaryStyle::Detailed,
            generated_at: Utc::now(),
        };
        assert_eq!(report.successful_summaries(), 2);
    }

    #[test]
    fn test_time_estimate_ranges() {
        assert_eq!(estimate_processing_time(2), "~5 seconds");
        assert!(estimate_processing_time(10).ends_with("minutes"));
        assert!(estimate_processing_time(40).contains('h'));
    }
}
