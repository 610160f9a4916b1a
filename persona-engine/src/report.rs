//! Plain-text persona report rendering and file output.

use personalens_core::{AnalysisError, Persona, SentimentLabel};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const MAX_INTERESTS: usize = 5;
const MAX_SUBREDDITS: usize = 5;
const MAX_EVIDENCE_PER_ENTRY: usize = 2;

/// Renders the fixed-layout report: header, interests with evidence,
/// sentiment distribution, activity level, and active subreddits with
/// evidence.
pub fn render_persona_report(username: &str, persona: &Persona) -> String {
    let mut output = String::new();

    output.push_str(&format!("User Persona for Reddit User: {}\n", username));
    output.push_str(&"=".repeat(50));
    output.push_str("\n\n");

    output.push_str(&interests_section(persona));
    output.push_str(&sentiment_section(persona));
    output.push_str(&format!(
        "Activity Level: {} posts/comments analyzed\n\n",
        persona.activity_level
    ));
    output.push_str(&subreddits_section(persona));

    output
}

fn interests_section(persona: &Persona) -> String {
    let mut section = String::from("Interests:\n");

    // Mention count descending; ties by topic name so the report is stable.
    let mut ranked: Vec<(&String, &usize)> = persona.interests.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    for (topic, count) in ranked.into_iter().take(MAX_INTERESTS) {
        section.push_str(&format!("- {} (mentioned {} times)\n", topic, count));

        let relevant = persona
            .evidence
            .iter()
            .filter(|e| e.topics.iter().any(|t| t == topic));
        for evidence in relevant.take(MAX_EVIDENCE_PER_ENTRY) {
            section.push_str(&format!(
                "  * {} in r/{} ({}): {}\n  * Source: {}\n",
                evidence.kind.label(),
                evidence.subreddit,
                evidence.timestamp,
                evidence.snippet,
                evidence.permalink
            ));
        }
    }
    section.push('\n');
    section
}

fn sentiment_section(persona: &Persona) -> String {
    let mut section = String::from("Sentiment Analysis:\n");
    let total = persona.sentiment.total();

    for label in [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ] {
        let count = persona.sentiment.count(label);
        let percentage = if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        section.push_str(&format!(
            "- {}: {} ({:.1}%)\n",
            label.label(),
            count,
            percentage
        ));
    }
    section.push('\n');
    section
}

fn subreddits_section(persona: &Persona) -> String {
    let mut section = String::from("Active Subreddits:\n");

    // BTreeSet iteration is already lexicographic.
    for subreddit in persona.subreddits.iter().take(MAX_SUBREDDITS) {
        section.push_str(&format!("- r/{}\n", subreddit));

        let relevant = persona
            .evidence
            .iter()
            .filter(|e| &e.subreddit == subreddit);
        for evidence in relevant.take(MAX_EVIDENCE_PER_ENTRY) {
            section.push_str(&format!(
                "  * {} ({}): {}\n  * Source: {}\n",
                evidence.kind.label(),
                evidence.timestamp,
                evidence.snippet,
                evidence.permalink
            ));
        }
    }
    section
}

/// Writes `<username>_persona.txt` into `output_dir`, creating the directory
/// first. Returns the path of the written file.
pub fn write_report_file(
    output_dir: &Path,
    username: &str,
    report: &str,
) -> Result<PathBuf, AnalysisError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(format!("{}_persona.txt", username));
    fs::write(&path, report)?;
    info!("Persona report written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use personalens_core::{ContentKind, EvidenceRecord, UserContent};

    use crate::aggregator::PersonaAggregator;

    fn evidence(subreddit: &str, topics: &[&str]) -> EvidenceRecord {
        EvidenceRecord {
            kind: ContentKind::Comment,
            subreddit: subreddit.to_string(),
            snippet: format!("snippet about {}", topics.join(" ")),
            permalink: format!("https://www.reddit.com/r/{}/comments/abc", subreddit),
            timestamp: "2023-11-14 22:13:20".to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            sentiment: personalens_core::SentimentLabel::Neutral,
        }
    }

    #[test]
    fn test_empty_persona_report() {
        let persona = Persona::default();
        let report = render_persona_report("nobody", &persona);

        assert!(report.starts_with("User Persona for Reddit User: nobody\n"));
        assert!(report.contains(&"=".repeat(50)));
        assert!(report.contains("- Positive: 0 (0.0%)\n"));
        assert!(report.contains("- Negative: 0 (0.0%)\n"));
        assert!(report.contains("- Neutral: 0 (0.0%)\n"));
        assert!(report.contains("Activity Level: 0 posts/comments analyzed\n"));
        assert!(report.contains("Interests:\n"));
        assert!(report.contains("Active Subreddits:\n"));
    }

    #[test]
    fn test_report_sections_from_processed_content() {
        let aggregator = PersonaAggregator::new();
        let mut persona = Persona::default();
        aggregator.process(
            &mut persona,
            &UserContent {
                kind: ContentKind::Comment,
                text: "I love hiking in the mountains".to_string(),
                subreddit: "hiking".to_string(),
                permalink: "/r/hiking/comments/abc/x/def".to_string(),
                created_utc: 1_700_000_000,
            },
        );
        persona.activity_level = persona.evidence.len();

        let report = render_persona_report("trailfan", &persona);
        assert!(report.contains("- hiking (mentioned 1 times)\n"));
        assert!(report.contains("- Positive: 1 (100.0%)\n"));
        assert!(report.contains("- Negative: 0 (0.0%)\n"));
        assert!(report.contains("Activity Level: 1 posts/comments analyzed\n"));
        assert!(report.contains("- r/hiking\n"));
        assert!(report.contains(
            "  * Comment in r/hiking (2023-11-14 22:13:20): I love hiking in the mountains\n"
        ));
        assert!(report
            .contains("  * Source: https://www.reddit.com/r/hiking/comments/abc/x/def\n"));
    }

    #[test]
    fn test_interests_are_capped_and_ranked_by_count() {
        let mut persona = Persona::default();
        for (topic, count) in [
            ("alpha", 1),
            ("bravo", 7),
            ("charlie", 3),
            ("delta", 5),
            ("echo", 2),
            ("foxtrot", 4),
        ] {
            persona.interests.insert(topic.to_string(), count);
        }

        let report = render_persona_report("ranked", &persona);
        for expected in ["bravo", "delta", "foxtrot", "charlie", "echo"] {
            assert!(report.contains(&format!("- {} (mentioned", expected)));
        }
        assert!(!report.contains("- alpha (mentioned"));

        // Highest count is listed first.
        let bravo_at = report.find("- bravo").unwrap();
        let delta_at = report.find("- delta").unwrap();
        assert!(bravo_at < delta_at);
    }

    #[test]
    fn test_evidence_capped_at_two_per_entry() {
        let mut persona = Persona::default();
        persona.interests.insert("hiking".to_string(), 3);
        persona.subreddits.insert("hiking".to_string());
        for _ in 0..3 {
            persona.evidence.push(evidence("hiking", &["hiking"]));
        }
        persona.activity_level = persona.evidence.len();

        let report = render_persona_report("capped", &persona);
        // 2 under the interest entry plus 2 under the subreddit entry.
        assert_eq!(report.matches("  * Source:").count(), 4);
    }

    #[test]
    fn test_subreddits_capped_at_five_lexicographic() {
        let mut persona = Persona::default();
        for name in ["zebra", "alpha", "mike", "bravo", "yankee", "charlie"] {
            persona.subreddits.insert(name.to_string());
        }

        let report = render_persona_report("subs", &persona);
        for expected in ["alpha", "bravo", "charlie", "mike", "yankee"] {
            assert!(report.contains(&format!("- r/{}\n", expected)));
        }
        assert!(!report.contains("- r/zebra\n"));
    }

    #[test]
    fn test_write_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("persona_outputs");

        let path = write_report_file(&output_dir, "trailfan", "report body").unwrap();
        assert_eq!(path, output_dir.join("trailfan_persona.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "report body");
    }
}
