//! Command-line interface argument parsing.

use clap::Parser;
use personalens_core::AppConfig;
use std::path::PathBuf;

/// Personalens - Reddit user persona analyzer
///
/// Fetches a Reddit user's recent comments and posts, scores their sentiment
/// against the VADER lexicon, extracts topic keywords, and renders a persona
/// report with supporting evidence.
///
/// Examples:
///   personalens https://www.reddit.com/user/spez/
///   personalens https://www.reddit.com/user/spez/ --limit 25 --output-dir reports
///   personalens https://www.reddit.com/user/spez/ --no-save
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Reddit profile URL (e.g. https://www.reddit.com/user/username/)
    #[arg(value_name = "PROFILE_URL")]
    pub profile_url: String,

    /// Reddit API client id
    #[arg(long, env = "REDDIT_CLIENT_ID", value_name = "ID")]
    pub client_id: Option<String>,

    /// Reddit API client secret
    #[arg(
        long,
        env = "REDDIT_CLIENT_SECRET",
        value_name = "SECRET",
        hide_env_values = true
    )]
    pub client_secret: Option<String>,

    /// User agent sent with every Reddit API request
    #[arg(long, default_value = "personalens/0.1", value_name = "UA")]
    pub user_agent: String,

    /// Maximum comments and submissions to fetch (each)
    #[arg(long, default_value = "50", value_name = "COUNT")]
    pub limit: u32,

    /// Directory the persona report file is written to
    #[arg(long, default_value = "persona_outputs", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Print the report without writing the output file
    #[arg(long)]
    pub no_save: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate flag combinations before anything else runs.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }
        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            reddit_client_id: self.client_id.clone(),
            reddit_client_secret: self.client_secret.clone(),
            user_agent: self.user_agent.clone(),
            fetch_limit: self.limit,
            output_dir: self.output_dir.clone(),
        }
    }
}
