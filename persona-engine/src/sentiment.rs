//! Sentiment classification on top of the VADER lexicon.

use personalens_core::SentimentLabel;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Compound scores at or above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound scores at or below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

pub struct SentimentClassifier {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Compound polarity score from the lexicon, normalized to [-1, 1].
    pub fn compound_score(&self, text: &str) -> f64 {
        let scores = self.analyzer.polarity_scores(text);
        scores.get("compound").copied().unwrap_or(0.0)
    }

    pub fn classify(&self, text: &str) -> SentimentLabel {
        label_for_compound(self.compound_score(text))
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Both thresholds are inclusive.
pub fn label_for_compound(compound: f64) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
