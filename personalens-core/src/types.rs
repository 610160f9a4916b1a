use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use crate::error::ConfigError;

/// One fetched comment, reduced to the fields the aggregator consumes.
#[derive(Debug, Clone)]
pub struct RedditComment {
    pub body: String,
    pub subreddit: String,
    pub permalink: String,
    pub created_utc: i64,
}

/// One fetched submission (self post or link post).
#[derive(Debug, Clone)]
pub struct RedditSubmission {
    pub title: String,
    pub selftext: String,
    pub subreddit: String,
    pub permalink: String,
    pub created_utc: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Comment,
    Post,
}

impl ContentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Comment => "Comment",
            ContentKind::Post => "Post",
        }
    }
}

/// A comment or post flattened to the single display text the aggregator
/// scans. Posts contribute their title and selftext joined by one space.
#[derive(Debug, Clone)]
pub struct UserContent {
    pub kind: ContentKind,
    pub text: String,
    pub subreddit: String,
    pub permalink: String,
    pub created_utc: i64,
}

impl UserContent {
    pub fn from_comment(comment: &RedditComment) -> Self {
        Self {
            kind: ContentKind::Comment,
            text: comment.body.clone(),
            subreddit: comment.subreddit.clone(),
            permalink: comment.permalink.clone(),
            created_utc: comment.created_utc,
        }
    }

    pub fn from_submission(submission: &RedditSubmission) -> Self {
        Self {
            kind: ContentKind::Post,
            text: format!("{} {}", submission.title, submission.selftext),
            subreddit: submission.subreddit.clone(),
            permalink: submission.permalink.clone(),
            created_utc: submission.created_utc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn label(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// A single item retained to justify a persona claim. Immutable once built;
/// appended to `Persona::evidence` in processing order.
#[derive(Debug, Clone)]
pub struct EvidenceRecord {
    pub kind: ContentKind,
    pub subreddit: String,
    /// Cleaned text, truncated to 100 chars plus an ellipsis marker.
    pub snippet: String,
    /// Absolute URL, not the API-relative permalink.
    pub permalink: String,
    /// `%Y-%m-%d %H:%M:%S` in UTC.
    pub timestamp: String,
    /// Up to 5 topics extracted from this item, in original word order.
    pub topics: Vec<String>,
    pub sentiment: SentimentLabel,
}

/// The aggregated summary of one user. Owned by a single analysis run and
/// discarded after the report is generated.
///
/// Invariant: `sentiment.total() == activity_level == evidence.len()` after
/// every completed run.
#[derive(Debug, Clone, Default)]
pub struct Persona {
    pub interests: HashMap<String, usize>,
    pub sentiment: SentimentCounts,
    pub activity_level: usize,
    pub subreddits: BTreeSet<String>,
    pub evidence: Vec<EvidenceRecord>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub reddit_client_id: Option<String>,
    pub reddit_client_secret: Option<String>,
    pub user_agent: String,
    pub fetch_limit: u32,
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reddit_client_id: None,
            reddit_client_secret: None,
            user_agent: String::from("personalens/0.1"),
            fetch_limit: 50,
            output_dir: PathBuf::from("persona_outputs"),
        }
    }
}

impl AppConfig {
    /// Pre-flight check, run before any network call is made.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reddit_client_id.as_deref().unwrap_or("").trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "reddit_client_id".to_string(),
            });
        }
        if self
            .reddit_client_secret
            .as_deref()
            .unwrap_or("")
            .trim()
            .is_empty()
        {
            return Err(ConfigError::MissingField {
                field: "reddit_client_secret".to_string(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "user_agent".to_string(),
                value: self.user_agent.clone(),
            });
        }
        if self.fetch_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch_limit".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    pub fn client_id(&self) -> &str {
        self.reddit_client_id.as_deref().unwrap_or("")
    }

    pub fn client_secret(&self) -> &str {
        self.reddit_client_secret.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> AppConfig {
        AppConfig {
            reddit_client_id: Some("id".to_string()),
            reddit_client_secret: Some("secret".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_post_text_joins_title_and_selftext() {
        let submission = RedditSubmission {
            title: "Trail report".to_string(),
            selftext: "Snow above 2000m".to_string(),
            subreddit: "hiking".to_string(),
            permalink: "/r/hiking/comments/abc".to_string(),
            created_utc: 1_700_000_000,
        };
        let content = UserContent::from_submission(&submission);
        assert_eq!(content.kind, ContentKind::Post);
        assert_eq!(content.text, "Trail report Snow above 2000m");
    }

    #[test]
    fn test_link_post_without_selftext_keeps_title() {
        let submission = RedditSubmission {
            title: "Look at this".to_string(),
            selftext: String::new(),
            subreddit: "pics".to_string(),
            permalink: "/r/pics/comments/xyz".to_string(),
            created_utc: 1_700_000_000,
        };
        let content = UserContent::from_submission(&submission);
        assert_eq!(content.text, "Look at this ");
    }

    #[test]
    fn test_sentiment_counts_total() {
        let mut counts = SentimentCounts::default();
        counts.record(SentimentLabel::Positive);
        counts.record(SentimentLabel::Positive);
        counts.record(SentimentLabel::Negative);
        counts.record(SentimentLabel::Neutral);
        assert_eq!(counts.count(SentimentLabel::Positive), 2);
        assert_eq!(counts.count(SentimentLabel::Negative), 1);
        assert_eq!(counts.count(SentimentLabel::Neutral), 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_config_validation_missing_credentials() {
        let config = AppConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField { .. })
        ));

        let config = AppConfig {
            reddit_client_id: Some("id".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField { ref field }) if field == "reddit_client_secret"
        ));
    }

    #[test]
    fn test_config_validation_rejects_zero_limit() {
        let config = AppConfig {
            fetch_limit: 0,
            ..configured()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "fetch_limit"
        ));
    }

    #[test]
    fn test_config_validation_accepts_complete_config() {
        assert!(configured().validate().is_ok());
    }
}
