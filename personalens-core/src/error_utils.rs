use crate::error::*;

pub trait ErrorExt {
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for AnalysisError {
    fn user_friendly_message(&self) -> String {
        match self {
            AnalysisError::RedditApi(e) => e.user_friendly_message(),
            AnalysisError::Config(e) => e.user_friendly_message(),
            AnalysisError::InvalidInput { message } => {
                format!("Invalid input: {}. Please check the profile URL.", message)
            }
            AnalysisError::Network(_) => {
                "Network connection error. Please check your internet connection.".to_string()
            }
            AnalysisError::Io(_) => {
                "Could not read or write a local file. Please check permissions.".to_string()
            }
            AnalysisError::Serialization(_) => {
                "Received data that could not be decoded.".to_string()
            }
            AnalysisError::Internal { message } => {
                format!("An unexpected error occurred: {}", message)
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            AnalysisError::RedditApi(_) => "REDDIT_API".to_string(),
            AnalysisError::Config(_) => "CONFIG".to_string(),
            AnalysisError::InvalidInput { .. } => "INVALID_INPUT".to_string(),
            AnalysisError::Io(_) => "IO".to_string(),
            AnalysisError::Serialization(_) => "SERIALIZATION".to_string(),
            AnalysisError::Network(_) => "NETWORK".to_string(),
            AnalysisError::Internal { .. } => "INTERNAL".to_string(),
        }
    }
}

impl ErrorExt for RedditApiError {
    fn user_friendly_message(&self) -> String {
        match self {
            RedditApiError::AuthenticationFailed { .. } => {
                "Reddit authentication failed. Please check your credentials.".to_string()
            }
            RedditApiError::InvalidToken => {
                "Reddit authentication token is invalid or missing.".to_string()
            }
            RedditApiError::Forbidden { resource } => format!(
                "Access denied to {}. The account may be suspended or private.",
                resource
            ),
            RedditApiError::UserNotFound { username } => {
                format!("Reddit user '{}' was not found.", username)
            }
            RedditApiError::RateLimitExceeded { retry_after } => format!(
                "Too many requests. Please wait {} seconds before trying again.",
                retry_after
            ),
            RedditApiError::RequestTimeout => {
                "Request to Reddit timed out. Please try again.".to_string()
            }
            RedditApiError::InvalidResponse { .. } => {
                "Reddit returned a response that could not be understood.".to_string()
            }
            RedditApiError::ServerError { .. } => {
                "Reddit is having server trouble. Please try again later.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            RedditApiError::AuthenticationFailed { .. } => "REDDIT_AUTH_FAILED".to_string(),
            RedditApiError::InvalidToken => "REDDIT_INVALID_TOKEN".to_string(),
            RedditApiError::Forbidden { .. } => "REDDIT_FORBIDDEN".to_string(),
            RedditApiError::UserNotFound { .. } => "REDDIT_USER_NOT_FOUND".to_string(),
            RedditApiError::RateLimitExceeded { .. } => "REDDIT_RATE_LIMIT".to_string(),
            RedditApiError::RequestTimeout => "REDDIT_TIMEOUT".to_string(),
            RedditApiError::InvalidResponse { .. } => "REDDIT_INVALID_RESPONSE".to_string(),
            RedditApiError::ServerError { .. } => "REDDIT_SERVER_ERROR".to_string(),
        }
    }
}

impl ErrorExt for ConfigError {
    fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::MissingField { field } => {
                format!("Required configuration field '{}' is missing.", field)
            }
            ConfigError::InvalidValue { field, .. } => {
                format!("Invalid value for configuration field '{}'.", field)
            }
            ConfigError::MissingEnvironmentVariable { var_name } => format!(
                "Environment variable '{}' is required but not set.",
                var_name
            ),
        }
    }

    fn error_code(&self) -> String {
        match self {
            ConfigError::MissingField { .. } => "CONFIG_MISSING_FIELD".to_string(),
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE".to_string(),
            ConfigError::MissingEnvironmentVariable { .. } => "CONFIG_MISSING_ENV_VAR".to_string(),
        }
    }
}
