// src/tokens.rs

use tiktoken_rs::{cl100k_base, CoreBPE};

use crate::error::{PipelineError, PipelineResult};

/// Measures text length in model-specific token units.
///
/// The chunker only depends on this trait, so the expensive BPE counter can
/// be swapped for a cheap deterministic one in tests.
pub trait TokenCounter: Send + Sync {
    fn count_tokens(&self, text: &str) -> usize;
}

/// BPE counter over the `cl100k_base` vocabulary.
pub struct BpeTokenCounter {
    encoding: CoreBPE,
}

impl BpeTokenCounter {
    pub fn new() -> PipelineResult<Self> {
        let encoding = cl100k_base().map_err(|e| PipelineError::Tokenizer(e.to_string()))?;
        Ok(Self { encoding })
    }
}

impl TokenCounter for BpeTokenCounter {
    fn count_tokens(&self, text: &str) -> usize {
        self.encoding.encode_with_special_tokens(text).len()
    }
}

/// Whitespace-word counter. Deterministic and tokenizer-free, used by tests
/// and available as an offline fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenCounter;

impl TokenCounter for WhitespaceTokenCounter {
    fn count_tokens(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_counter_basics() {
        let counter = WhitespaceTokenCounter;
        assert_eq!(counter.count_tokens(""), 0);
        assert_eq!(counter.count_tokens("hello"), 1);
        assert_eq!(counter.count_tokens("hello   world"), 2);
    }

    #[test]
    fn test_counting_is_monotonic_under_append() {
        let counter = WhitespaceTokenCounter;
        let mut text = String::new();
        let mut previous = counter.count_tokens(&text);

        for piece in ["The", " quick", " brown fox", "jumped", ". Over the lazy dog"] {
            text.push_str(piece);
            let current = counter.count_tokens(&text);
            assert!(
                current >= previous,
                "appending {:?} decreased the count from {} to {}",
                piece,
                previous,
                current
            );
            previous = current;
        }
    }
}
