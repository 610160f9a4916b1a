//! Folds fetched content into a `Persona`, one item at a time.

use chrono::{TimeZone, Utc};
use personalens_core::{EvidenceRecord, Persona, UserContent};

use crate::sentiment::SentimentClassifier;
use crate::text::{clean_text, extract_topics, truncate_snippet};

const REDDIT_BASE_URL: &str = "https://www.reddit.com";

pub struct PersonaAggregator {
    classifier: SentimentClassifier,
}

impl PersonaAggregator {
    pub fn new() -> Self {
        Self {
            classifier: SentimentClassifier::new(),
        }
    }

    /// Folds one comment or post into the persona: the matching sentiment
    /// counter, the subreddit set, each extracted topic's interest count,
    /// and an evidence record. Every field is updated before the next item
    /// is touched.
    pub fn process(&self, persona: &mut Persona, item: &UserContent) {
        let cleaned = clean_text(&item.text);

        let sentiment = self.classifier.classify(&cleaned);
        persona.sentiment.record(sentiment);

        persona.subreddits.insert(item.subreddit.clone());

        let topics = extract_topics(&cleaned);
        for topic in &topics {
            *persona.interests.entry(topic.clone()).or_insert(0) += 1;
        }

        persona.evidence.push(EvidenceRecord {
            kind: item.kind,
            subreddit: item.subreddit.clone(),
            snippet: truncate_snippet(&cleaned),
            permalink: format!("{}{}", REDDIT_BASE_URL, item.permalink),
            timestamp: format_timestamp(item.created_utc),
            topics,
            sentiment,
        });
    }
}

impl Default for PersonaAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Epoch seconds to `YYYY-MM-DD HH:MM:SS` in UTC.
pub fn format_timestamp(epoch_seconds: i64) -> String {
    Utc.timestamp_opt(epoch_seconds, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
