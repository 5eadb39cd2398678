// src/chunker.rs

use serde::{Deserialize, Serialize};

use crate::tokens::TokenCounter;

/// A token-bounded contiguous piece of the cleaned document text.
/// `index` records position in the original order, which later stages rely
/// on for reassembly and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub index: usize,
    pub content: String,
    pub token_count: usize,
}

/// Greedily packs sentence units into chunks of at most `max_tokens` tokens.
///
/// Sentences are delimited by `". "`. Each candidate extension re-measures
/// the whole accumulated chunk, terminator included, so cost is one token
/// count per sentence over the running text. A chunk is closed as soon as
/// adding the next sentence would cross the ceiling; a single sentence that
/// alone exceeds the ceiling is emitted as an oversized chunk rather than
/// split further.
pub fn chunk_text(text: &str, counter: &dyn TokenCounter, max_tokens: usize) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut current = String::new();

    for sentence in text.split(". ").map(str::trim).filter(|s| !s.is_empty()) {
        let candidate = if current.is_empty() {
            sentence.to_string()
        } else {
            format!("{current}. {sentence}")
        };

        // Measure with the closing period restored, otherwise a candidate
        // sitting exactly at the ceiling closes one token over it.
        if counter.count_tokens(&with_terminator(&candidate)) > max_tokens && !current.is_empty() {
            let closed = close_chunk(chunks.len(), std::mem::take(&mut current), counter);
            chunks.push(closed);
            current = sentence.to_string();
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        let closed = close_chunk(chunks.len(), current, counter);
        chunks.push(closed);
    }

    chunks
}

/// Restores the sentence terminator that `". "` splitting consumed.
fn close_chunk(index: usize, content: String, counter: &dyn TokenCounter) -> Chunk {
    let content = with_terminator(&content).into_owned();
    let token_count = counter.count_tokens(&content);
    Chunk {
        index,
        content,
        token_count,
    }
}

fn with_terminator(text: &str) -> std::borrow::Cow<'_, str> {
    if text.ends_with(['.', '!', '?']) {
        std::borrow::Cow::Borrowed(text)
    } else {
        std::borrow::Cow::Owned(format!("{text}."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::WhitespaceTokenCounter;

    const COUNTER: WhitespaceTokenCounter = WhitespaceTokenCounter;

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(chunk_text("", &COUNTER, 100).is_empty());
        assert!(chunk_text("   ", &COUNTER, 100).is_empty());
    }

    #[test]
    fn test_text_without_sentence_structure_yields_one_chunk() {
        let chunks = chunk_text("plain words with no period structure", &COUNTER, 100);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "plain words with no period structure.");
    }

    #[test]
    fn test_three_sentences_with_room_for_two() {
        // "A. B" is 2 words, adding "C." makes 3 and crosses the ceiling.
        let chunks = chunk_text("A. B. C.", &COUNTER, 2);
        assert_eq!(chunks.len(), 2, "expected monotonic packing into 2 chunks");
        assert_eq!(chunks[0].content, "A. B.");
        assert_eq!(chunks[1].content, "C.");
    }

    #[test]
    fn test_chunk_indices_preserve_order() {
        let chunks = chunk_text("one one. two two. three three. four four.", &COUNTER, 2);
        let indices: Vec<usize> = chunks.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_ceiling_respected_except_oversized_sentence() {
        let text = "a b c d e f g h. short one. another short one. i j k l m n o p q.";
        let ceiling = 4;
        let chunks = chunk_text(text, &COUNTER, ceiling);

        for chunk in &chunks {
            let is_single_sentence = !chunk.content.trim_end_matches('.').contains(". ");
            assert!(
                chunk.token_count <= ceiling || is_single_sentence,
                "chunk {:?} has {} tokens over ceiling {} and is not a lone sentence",
                chunk.content,
                chunk.token_count,
                ceiling
            );
        }

        // The two oversized sentences must still come through intact.
        assert!(chunks.iter().any(|c| c.content.starts_with("a b c")));
        assert!(chunks.iter().any(|c| c.content.starts_with("i j k")));
    }

    #[test]
    fn test_concatenation_reconstructs_cleaned_text() {
        let text = "First sentence here. Second sentence follows. Third one closes it.";
        let chunks = chunk_text(text, &COUNTER, 5);
        assert!(chunks.len() > 1, "test needs more than one chunk");

        let rejoined = chunks
            .iter()
            .map(|c| c.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(rejoined, text);
    }
}
