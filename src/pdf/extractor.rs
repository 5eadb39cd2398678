// src/pdf/extractor.rs

use std::path::Path;

use lopdf::Document;
use tracing::{debug, warn};

use crate::error::{PipelineError, PipelineResult};

/// Extracts text from every page of a PDF on disk.
///
/// An unreadable document is fatal. A page that fails to decode is logged
/// and skipped so the rest of the document still goes through. Pages are
/// joined with `--- Page N ---` markers, which the cleaner strips later.
pub fn extract_text(path: &Path) -> PipelineResult<String> {
    let doc = Document::load(path).map_err(|e| PipelineError::PdfRead(e.to_string()))?;
    Ok(extract_pages(&doc))
}

/// Same as [`extract_text`] but for an in-memory byte stream.
pub fn extract_text_from_bytes(bytes: &[u8]) -> PipelineResult<String> {
    let doc = Document::load_mem(bytes).map_err(|e| PipelineError::PdfRead(e.to_string()))?;
    Ok(extract_pages(&doc))
}

fn extract_pages(doc: &Document) -> String {
    let mut text = String::new();

    for (page_num, _object_id) in doc.get_pages() {
        match doc.extract_text(&[page_num]) {
            Ok(page_text) => {
                text.push_str(&format!("\n--- Page {} ---\n{}", page_num, page_text));
            }
            Err(e) => {
                warn!(page = page_num, error = %e, "Skipping page that failed to extract");
                continue;
            }
        }
    }

    debug!(chars = text.len(), "Extracted PDF text");
    text
}
