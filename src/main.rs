// src/main.rs

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::warn;

use pdfsum::config::AppConfig;
use pdfsum::pdf;
use pdfsum::pipeline::Pipeline;
use pdfsum::summarizer::SummaryStyle;

#[derive(Parser, Debug)]
#[command(name = "pdfsum", about = "Summarize a PDF document with a hosted LLM")]
struct Args {
    /// Path to the PDF document
    pdf: PathBuf,

    /// Summary style: brief, detailed, bullet_points or executive.
    /// Unknown values fall back to detailed.
    #[arg(short, long, default_value = "detailed")]
    style: String,

    /// Maximum tokens per chunk (overrides MAX_CHUNK_TOKENS)
    #[arg(long)]
    max_tokens: Option<usize>,

    /// Also run the document-structure analysis pass
    #[arg(long)]
    analyze: bool,

    /// Also extract key quotes
    #[arg(long)]
    quotes: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let style = SummaryStyle::parse_or_default(&args.style);

    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            eprintln!("Add GOOGLE_API_KEY=... to your environment or .env file");
            process::exit(1);
        }
    };
    if let Some(max_tokens) = args.max_tokens {
        config.max_chunk_tokens = max_tokens;
    }

    let pipeline = match Pipeline::from_config(&config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("❌ {e}");
            process::exit(1);
        }
    };

    // Metadata failure is not fatal, the text extraction pass decides that.
    match pdf::read_metadata(&args.pdf) {
        Ok(meta) => println!(
            "📄 {} ({} page(s), author: {})",
            meta.title, meta.num_pages, meta.author
        ),
        Err(e) => warn!(error = %e, "Could not read PDF metadata"),
    }

    let cleaned = match pipeline.load_document(&args.pdf) {
        Ok(cleaned) => cleaned,
        Err(e) => {
            eprintln!("❌ {e}");
            process::exit(1);
        }
    };

    let report = match pipeline.summarize_document(&cleaned, style).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("❌ {e}");
            process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("❌ Failed to serialize report: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("\n===== Final Summary ({}) =====\n", report.summary_type.as_str());
        println!("{}", report.combined_summary);
        println!(
            "\n✅ {} of {} chunk(s) summarized",
            report.successful_summaries(),
            report.total_chunks
        );
        for cs in &report.individual_summaries {
            println!(
                "  chunk {}: {} -> {} chars ({})",
                cs.chunk_number,
                cs.original_length,
                cs.summary_length,
                if cs.success { "ok" } else { "error" }
            );
        }
    }

    if args.analyze {
        let analysis = pipeline.summarizer().analyze_document_structure(&cleaned).await;
        println!("\n===== Document Analysis =====\n");
        println!("{}", analysis.analysis);
    }

    if args.quotes {
        let quotes = pipeline.summarizer().extract_key_quotes(&cleaned).await;
        println!("\n===== Key Quotes =====\n");
        for quote in quotes {
            println!("- {quote}");
        }
    }
}
