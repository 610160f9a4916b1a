use personalens_core::{AnalysisError, RedditApiError};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Token response from the client-credentials grant.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(default)]
    pub scope: String,
}

/// Application-only OAuth2: one client-credentials POST, no user context and
/// no refresh handling. A run never outlives the token.
pub async fn request_access_token(
    http_client: &Client,
    client_id: &str,
    client_secret: &str,
) -> Result<AccessToken, AnalysisError> {
    let response = http_client
        .post(TOKEN_URL)
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| {
            error!("Token request failed: {}", e);
            if e.is_timeout() {
                AnalysisError::RedditApi(RedditApiError::RequestTimeout)
            } else {
                AnalysisError::Network(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        error!("Token endpoint returned status {}", status);
        return Err(AnalysisError::RedditApi(
            RedditApiError::AuthenticationFailed {
                reason: format!("token endpoint returned {}", status),
            },
        ));
    }

    let token: AccessToken = response.json().await.map_err(|e| {
        error!("Failed to parse token response: {}", e);
        AnalysisError::RedditApi(RedditApiError::InvalidResponse {
            details: "unparseable token response".to_string(),
        })
    })?;

    debug!(
        "Obtained app-only token ({}), expires in {}s",
        token.token_type, token.expires_in
    );
    Ok(token)
}
