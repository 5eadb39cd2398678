// src/pdf/metadata.rs

use std::path::Path;

use lopdf::{Dictionary, Document, Object};
use serde::Serialize;

use crate::error::{PipelineError, PipelineResult};

const UNKNOWN: &str = "Unknown";

/// Standard metadata fields from the PDF info dictionary.
/// Missing fields read "Unknown" rather than failing.
#[derive(Debug, Clone, Serialize)]
pub struct PdfMetadata {
    pub num_pages: usize,
    pub title: String,
    pub author: String,
    pub subject: String,
}

pub fn read_metadata(path: &Path) -> PipelineResult<PdfMetadata> {
    let doc = Document::load(path).map_err(|e| PipelineError::PdfRead(e.to_string()))?;
    Ok(read_from_document(&doc))
}

fn read_from_document(doc: &Document) -> PdfMetadata {
    let info = info_dictionary(doc);

    PdfMetadata {
        num_pages: doc.get_pages().len(),
        title: info_field(info, b"Title"),
        author: info_field(info, b"Author"),
        subject: info_field(info, b"Subject"),
    }
}

/// The trailer's Info entry may be a direct dictionary or a reference.
fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn info_field(info: Option<&Dictionary>, key: &[u8]) -> String {
    info.and_then(|dict| dict.get(key).ok())
        .and_then(|obj| obj.as_str().ok())
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
