// src/cleaner.rs

use regex::Regex;

/// Normalizes raw extracted text into a single clean string.
///
/// Collapses newline and space runs, strips the `--- Page N ---` markers the
/// extractor inserts, and drops special characters outside common
/// punctuation. Page boundaries do not survive cleaning.
pub fn clean_text(text: &str) -> String {
    let text = Regex::new(r"\n+").unwrap().replace_all(text, "\n");
    let text = Regex::new(r" +").unwrap().replace_all(&text, " ");
    let text = Regex::new(r"--- Page \d+ ---").unwrap().replace_all(&text, "");
    let text = Regex::new(r"[^\w\s.,!?;:\-()]")
        .unwrap()
        .replace_all(&text, " ");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        let cleaned = clean_text("one   two\n\n\nthree");
        assert_eq!(cleaned, "one two three");
    }

    #[test]
    fn test_strips_page_markers() {
        let cleaned = clean_text("--- Page 1 ---\nFirst page. --- Page 12 ---\nSecond page.");
        assert_eq!(cleaned, "First page. Second page.");
    }

    #[test]
    fn test_drops_special_characters_keeps_punctuation() {
        let cleaned = clean_text("Revenue* grew 12% (YoY) — see §4!");
        assert!(!cleaned.contains('*'));
        assert!(!cleaned.contains('%'));
        assert!(!cleaned.contains('—'));
        assert!(cleaned.contains("(YoY)"));
        assert!(cleaned.ends_with("4!"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("  \n\n  "), "");
    }
}
