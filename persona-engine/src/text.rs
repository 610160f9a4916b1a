//! Text normalization and naive keyword extraction.
//!
//! These are deterministic, pure functions. Nothing here ranks by frequency;
//! topic extraction keeps the first few qualifying words in original order
//! and leaves ranking to the report.

/// Words too common to count as topics.
const STOPWORDS: [&str; 11] = [
    "the", "is", "in", "and", "to", "a", "of", "for", "on", "with", "by",
];

/// Topics shorter than this carry too little signal to keep.
const MIN_TOPIC_CHARS: usize = 4;

const MAX_TOPICS: usize = 5;

const SNIPPET_CHARS: usize = 100;

/// Strips every character that is not a word character, whitespace, comma,
/// or period, then collapses whitespace runs and trims. Idempotent:
/// `clean_text(clean_text(x)) == clean_text(x)`.
pub fn clean_text(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace() || *c == ',' || *c == '.')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Evidence text: at most `SNIPPET_CHARS` characters, with an ellipsis
/// marker when anything was cut. Char-based, so multi-byte input never
/// splits mid-character.
pub fn truncate_snippet(text: &str) -> String {
    match text.char_indices().nth(SNIPPET_CHARS) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// First `MAX_TOPICS` lowercased words that are neither stopwords nor
/// shorter than `MIN_TOPIC_CHARS`. Expects already-cleaned text.
pub fn extract_topics(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| !STOPWORDS.contains(word) && word.chars().count() >= MIN_TOPIC_CHARS)
        .take(MAX_TOPICS)
        .map(|word| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  hello   world \n\t again  "), "hello world again");
    }

    #[test]
    fn test_clean_text_strips_special_characters() {
        assert_eq!(
            clean_text("Wow!! This is *great*, right? Yes."),
            "Wow This is great, right Yes."
        );
        assert_eq!(clean_text("under_score stays"), "under_score stays");
    }

    #[test]
    fn test_clean_text_is_idempotent() {
        let inputs = [
            "  hello   world  ",
            "a ! b",
            "Wow!! *great*, right?",
            "café — déjà vu…",
            "",
            "already clean text, with commas.",
        ];
        for input in inputs {
            let once = clean_text(input);
            assert_eq!(clean_text(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_clean_text_stripped_char_between_spaces() {
        // A removed character must not leave a double space behind.
        assert_eq!(clean_text("a ! b"), "a b");
    }

    #[test]
    fn test_truncate_snippet_short_text_verbatim() {
        let text = "short text";
        assert_eq!(truncate_snippet(text), "short text");

        let exactly_100 = "x".repeat(100);
        assert_eq!(truncate_snippet(&exactly_100), exactly_100);
    }

    #[test]
    fn test_truncate_snippet_long_text() {
        let text = "y".repeat(150);
        let snippet = truncate_snippet(&text);
        assert_eq!(snippet.len(), 103);
        assert_eq!(&snippet[..100], "y".repeat(100));
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn test_truncate_snippet_multibyte_safe() {
        let text = "é".repeat(150);
        let snippet = truncate_snippet(&text);
        assert_eq!(snippet.chars().count(), 103);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn test_extract_topics_drops_stopwords_and_short_words() {
        let topics = extract_topics("I love hiking in the mountains");
        assert_eq!(topics, vec!["love", "hiking", "mountains"]);
    }

    #[test]
    fn test_extract_topics_caps_at_five() {
        let topics =
            extract_topics("alpha bravo charlie delta echo foxtrot golf hotel");
        assert_eq!(
            topics,
            vec!["alpha", "bravo", "charlie", "delta", "echo"]
        );
    }

    #[test]
    fn test_extract_topics_lowercases_and_keeps_order() {
        let topics = extract_topics("Rust PROGRAMMING feels great");
        assert_eq!(topics, vec!["rust", "programming", "feels", "great"]);
    }

    #[test]
    fn test_extract_topics_never_returns_stopword_or_short_token() {
        let topics = extract_topics("the cat sat on a mat with far too few long words here");
        for topic in &topics {
            assert!(topic.chars().count() >= 4);
            assert!(!STOPWORDS.contains(&topic.as_str()));
        }
        assert!(topics.len() <= 5);
    }

    #[test]
    fn test_extract_topics_empty_input() {
        assert!(extract_topics("").is_empty());
        assert!(extract_topics("the is in and to").is_empty());
    }
}
