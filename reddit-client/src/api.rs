use crate::auth;
use personalens_core::{AnalysisError, RedditApiError, RedditComment, RedditSubmission};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

const REDDIT_OAUTH_BASE: &str = "https://oauth.reddit.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Deserialize)]
pub struct RedditListing<T> {
    pub kind: String,
    pub data: RedditListingData<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedditListingData<T> {
    pub children: Vec<RedditListingChild<T>>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub dist: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedditListingChild<T> {
    pub kind: String,
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedditCommentData {
    pub body: String,
    pub subreddit: String,
    pub permalink: String,
    pub created_utc: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedditPostData {
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    pub subreddit: String,
    pub permalink: String,
    pub created_utc: f64,
}

impl From<RedditCommentData> for RedditComment {
    fn from(data: RedditCommentData) -> Self {
        Self {
            body: data.body,
            subreddit: data.subreddit,
            permalink: data.permalink,
            created_utc: data.created_utc as i64,
        }
    }
}

impl From<RedditPostData> for RedditSubmission {
    fn from(data: RedditPostData) -> Self {
        Self {
            title: data.title,
            selftext: data.selftext,
            subreddit: data.subreddit,
            permalink: data.permalink,
            created_utc: data.created_utc as i64,
        }
    }
}

/// Client for the two user listing endpoints the analyzer reads. Every call
/// is a single attempt: errors are typed for diagnostics but never retried.
#[derive(Debug)]
pub struct RedditClient {
    http_client: Client,
    client_id: String,
    client_secret: String,
    access_token: Option<String>,
}

impl RedditClient {
    pub fn new(
        client_id: String,
        client_secret: String,
        user_agent: &str,
    ) -> Result<Self, AnalysisError> {
        let http_client = Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http_client,
            client_id,
            client_secret,
            access_token: None,
        })
    }

    /// Fetches and stores an app-only token for subsequent listing calls.
    pub async fn authenticate(&mut self) -> Result<(), AnalysisError> {
        let token =
            auth::request_access_token(&self.http_client, &self.client_id, &self.client_secret)
                .await?;
        self.access_token = Some(token.access_token);
        Ok(())
    }

    fn token(&self) -> Result<&str, AnalysisError> {
        self.access_token
            .as_deref()
            .ok_or(AnalysisError::RedditApi(RedditApiError::InvalidToken))
    }

    /// Most-recent comments, newest first, one page only.
    pub async fn recent_comments(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<RedditComment>, AnalysisError> {
        let endpoint = format!("/user/{}/comments", username);
        let listing: RedditListing<RedditCommentData> =
            self.get_listing(&endpoint, username, limit).await?;
        Ok(listing
            .data
            .children
            .into_iter()
            .map(|child| child.data.into())
            .collect())
    }

    /// Most-recent submissions, newest first, one page only.
    pub async fn recent_submissions(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<RedditSubmission>, AnalysisError> {
        let endpoint = format!("/user/{}/submitted", username);
        let listing: RedditListing<RedditPostData> =
            self.get_listing(&endpoint, username, limit).await?;
        Ok(listing
            .data
            .children
            .into_iter()
            .map(|child| child.data.into())
            .collect())
    }

    async fn get_listing<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        username: &str,
        limit: u32,
    ) -> Result<RedditListing<T>, AnalysisError> {
        let token = self.token()?;
        let url = format!("{}{}", REDDIT_OAUTH_BASE, endpoint);
        let limit_str = limit.to_string();
        let query = [
            ("limit", limit_str.as_str()),
            ("sort", "new"),
            ("raw_json", "1"),
        ];

        info!("Fetching {}", endpoint);
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                error!("Network error for {}: {}", endpoint, e);
                if e.is_timeout() {
                    AnalysisError::RedditApi(RedditApiError::RequestTimeout)
                } else {
                    AnalysisError::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Request failed with status {} for {}", status, endpoint);
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            return Err(AnalysisError::RedditApi(map_error_status(
                status,
                username,
                endpoint,
                retry_after,
            )));
        }

        let listing = response.json::<RedditListing<T>>().await.map_err(|e| {
            error!("Failed to parse listing for {}: {}", endpoint, e);
            AnalysisError::RedditApi(RedditApiError::InvalidResponse {
                details: format!("unparseable listing from {}", endpoint),
            })
        })?;

        debug!(
            "Received {} items from {}",
            listing.data.children.len(),
            endpoint
        );
        Ok(listing)
    }
}

fn map_error_status(
    status: StatusCode,
    username: &str,
    endpoint: &str,
    retry_after: Option<u64>,
) -> RedditApiError {
    match status.as_u16() {
        401 => RedditApiError::InvalidToken,
        403 => RedditApiError::Forbidden {
            resource: endpoint.to_string(),
        },
        404 => RedditApiError::UserNotFound {
            username: username.to_string(),
        },
        429 => RedditApiError::RateLimitExceeded {
            retry_after: retry_after.unwrap_or(60),
        },
        code if status.is_server_error() => RedditApiError::ServerError { status_code: code },
        _ => RedditApiError::InvalidResponse {
            details: format!("unexpected status {} from {}", status, endpoint),
        },
    }
}
