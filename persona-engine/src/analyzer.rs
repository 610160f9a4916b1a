//! The end-to-end pipeline: profile URL -> username -> fetch -> persona.

use personalens_core::{AnalysisError, Persona, UserContent};
use reddit_client::RedditClient;
use tracing::info;
use url::Url;

use crate::aggregator::PersonaAggregator;

pub struct UserAnalyzer {
    client: RedditClient,
    aggregator: PersonaAggregator,
    fetch_limit: u32,
}

impl UserAnalyzer {
    pub fn new(client: RedditClient, fetch_limit: u32) -> Self {
        Self {
            client,
            aggregator: PersonaAggregator::new(),
            fetch_limit,
        }
    }

    /// Runs one full analysis: resolve the username, authenticate, fetch the
    /// most-recent comments and submissions, and fold every item into a
    /// fresh persona. Any failure propagates immediately and the partially
    /// built persona is discarded; callers never see partial results.
    pub async fn analyze(
        &mut self,
        profile_url: &str,
    ) -> Result<(String, Persona), AnalysisError> {
        let username = parse_profile_username(profile_url)?;
        info!("Analyzing Reddit user: {}", username);

        self.client.authenticate().await?;
        let comments = self
            .client
            .recent_comments(&username, self.fetch_limit)
            .await?;
        let submissions = self
            .client
            .recent_submissions(&username, self.fetch_limit)
            .await?;
        info!(
            "Fetched {} comments and {} submissions for {}",
            comments.len(),
            submissions.len(),
            username
        );

        let mut persona = Persona::default();
        for item in &comments {
            self.aggregator
                .process(&mut persona, &UserContent::from_comment(item));
        }
        for item in &submissions {
            self.aggregator
                .process(&mut persona, &UserContent::from_submission(item));
        }
        persona.activity_level = persona.evidence.len();

        Ok((username, persona))
    }
}

/// The username is whatever follows the last `/user/` segment of the profile
/// URL, with trailing slashes removed.
pub fn parse_profile_username(profile_url: &str) -> Result<String, AnalysisError> {
    Url::parse(profile_url).map_err(|_| AnalysisError::InvalidInput {
        message: format!("not a valid profile URL: {}", profile_url),
    })?;

    let after = profile_url
        .rfind("/user/")
        .map(|idx| &profile_url[idx + "/user/".len()..])
        .ok_or_else(|| AnalysisError::InvalidInput {
            message: format!("profile URL has no /user/ segment: {}", profile_url),
        })?;

    let username = after.trim_end_matches('/');
    if username.is_empty() {
        return Err(AnalysisError::InvalidInput {
            message: format!("profile URL has no username: {}", profile_url),
        });
    }
    Ok(username.to_string())
}
