//! Personalens - Reddit user persona analyzer CLI.
//!
//! Exit codes:
//!   0 - report generated
//!   1 - validation or analysis failure

mod cli;

use cli::Args;
use persona_engine::{render_persona_report, write_report_file, UserAnalyzer};
use personalens_core::{AnalysisError, AppConfig, ErrorExt};
use reddit_client::RedditClient;
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    init_logging(&args);

    info!("Personalens v{}", env!("CARGO_PKG_VERSION"));
    debug!("Profile URL: {}", args.profile_url);

    // Pre-flight: missing credentials are reported before any network call.
    let config = args.to_config();
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        eprintln!("Error [{}]: {}", e.error_code(), e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&args, &config).await {
        error!("Analysis failed: {}", e);
        eprintln!(
            "Analysis failed [{}]: {}",
            e.error_code(),
            e.user_friendly_message()
        );
        std::process::exit(1);
    }
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

async fn run(args: &Args, config: &AppConfig) -> Result<(), AnalysisError> {
    let client = RedditClient::new(
        config.client_id().to_string(),
        config.client_secret().to_string(),
        &config.user_agent,
    )?;
    let mut analyzer = UserAnalyzer::new(client, config.fetch_limit);

    let (username, persona) = analyzer.analyze(&args.profile_url).await?;

    let report = render_persona_report(&username, &persona);
    println!("{}", report);

    if !args.no_save {
        let path = write_report_file(&config.output_dir, &username, &report)?;
        println!("Persona saved to {}", path.display());
    }

    Ok(())
}
