use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use form::view;
use form::{EntryList, RecommendationFormController, ResultView, SubmissionState};
use recs_client::{DEFAULT_SERVICE_URL, HttpRecommendationClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;
mod session;

use render::render_result;

/// ReelRecs - Movie Recommendation Client
#[derive(Parser)]
#[command(name = "reel-recs")]
#[command(
    about = "Get movie recommendations from a ReelRecs recommendation service",
    long_about = None
)]
struct Cli {
    /// Base URL of the recommendation service
    #[arg(long, env = "REEL_RECS_SERVICE_URL", default_value = DEFAULT_SERVICE_URL)]
    service_url: String,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long, env = "REEL_RECS_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get recommendations for the given titles and exit
    Recommend {
        /// Movie titles to base recommendations on
        #[arg(required = true)]
        titles: Vec<String>,
    },

    /// Edit the list of titles interactively, submitting as often as you like
    Form,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let timeout = cli.timeout_secs.map(Duration::from_secs);
    let client = HttpRecommendationClient::new(&cli.service_url, timeout)
        .context("Failed to create recommendation client")?;
    info!("Using recommendation service at {}", client.base_url());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend { titles } => handle_recommend(client, titles).await,
        Commands::Form => {
            session::run(RecommendationFormController::new(client)).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Handle the 'recommend' command
async fn handle_recommend(
    client: HttpRecommendationClient,
    titles: Vec<String>,
) -> Result<ExitCode> {
    let controller =
        RecommendationFormController::with_entries(client, EntryList::from_titles(titles));

    eprintln!("{}", view::submit_label(SubmissionState::Loading));
    let outcome = controller.submit().await;
    info!("Submit finished: {:?}", outcome);

    let result = controller.result();
    print!("{}", render_result(&result));

    let code = match result {
        ResultView::Error(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    };
    Ok(code)
}
