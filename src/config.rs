// src/config.rs
use std::env;

use crate::error::{PipelineError, PipelineResult};

/// Keys shorter than this are rejected at startup. Presence and shape only;
/// the key is never probed for actual validity.
const MIN_API_KEY_LEN: usize = 30;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_MAX_CHUNK_TOKENS: usize = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub max_chunk_tokens: usize,
}

impl AppConfig {
    pub fn from_env() -> PipelineResult<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("GOOGLE_API_KEY")
            .map_err(|_| PipelineError::Config("GOOGLE_API_KEY is not set".into()))?;
        if api_key.len() < MIN_API_KEY_LEN {
            return Err(PipelineError::Config(
                "GOOGLE_API_KEY looks incomplete, check that it was copied fully".into(),
            ));
        }

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let max_chunk_tokens = match env::var("MAX_CHUNK_TOKENS") {
            Ok(raw) => raw.parse().map_err(|_| {
                PipelineError::Config(format!("MAX_CHUNK_TOKENS must be a number, got {:?}", raw))
            })?,
            Err(_) => DEFAULT_MAX_CHUNK_TOKENS,
        };

        Ok(Self {
            api_key,
            model,
            max_chunk_tokens,
        })
    }
}
