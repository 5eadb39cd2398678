pub mod extractor;
pub mod metadata;

pub use extractor::{extract_text, extract_text_from_bytes};
pub use metadata::{read_metadata, PdfMetadata};
