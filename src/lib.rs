pub mod chunker;
pub mod cleaner;
pub mod config;
pub mod error;
pub mod llm;
pub mod pdf;
pub mod pipeline;
pub mod report;
pub mod summarizer;
pub mod tokens;

pub use config::AppConfig;
pub use error::{PipelineError, PipelineResult};
pub use pipeline::Pipeline;
pub use report::SummaryReport;
pub use summarizer::SummaryStyle;
