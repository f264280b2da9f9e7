//! Sentiment Trigger CLI
//!
//! Local execution entry point. For AWS Lambda, use `sentiment-trigger-lambda`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use aws_lambda_events::event::s3::S3Event;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sentiment_trigger::{
    config,
    error::{AppError, Result},
    handler::{HandlerContext, handle_event},
    models::Config,
    services::{ComprehendService, DryRunService, SentimentService},
    storage::{LocalStore, ResultStore, S3Store},
};

/// Starts Comprehend sentiment jobs for uploaded S3 objects
#[derive(Parser, Debug)]
#[command(
    name = "sentiment-trigger",
    version,
    about = "Replay S3 upload events through the sentiment trigger"
)]
struct Cli {
    /// Optional TOML configuration file (environment variables override it)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the handler on an S3 event file
    Invoke {
        /// Path to an S3 event notification JSON file
        #[arg(short, long)]
        event: PathBuf,

        /// Write results under this directory instead of the output bucket
        #[arg(long)]
        local_output: Option<PathBuf>,

        /// Acknowledge jobs locally instead of calling Comprehend
        #[arg(long)]
        dry_run: bool,
    },

    /// Load and validate the configuration
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Invoke {
            event,
            local_output,
            dry_run,
        } => invoke(config, &event, local_output, dry_run).await,
        Command::Validate => {
            println!("{}", toml::to_string_pretty(&config)?);
            info!("Configuration is valid");
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn invoke(
    config: Config,
    event_path: &Path,
    local_output: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let content = tokio::fs::read_to_string(event_path).await?;
    let event: S3Event = serde_json::from_str(&content)?;
    info!(
        "Loaded {} record(s) from {}",
        event.records.len(),
        event_path.display()
    );

    // Only touch AWS credentials when a real client is needed.
    let sdk_config = if dry_run && local_output.is_some() {
        None
    } else {
        Some(aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await)
    };

    let service: Arc<dyn SentimentService> = match (&sdk_config, dry_run) {
        (Some(sdk), false) => Arc::new(ComprehendService::from_sdk_config(sdk)),
        _ => Arc::new(DryRunService::default()),
    };

    let store: Arc<dyn ResultStore> = match (local_output, &sdk_config) {
        (Some(dir), _) => Arc::new(LocalStore::new(dir)),
        (None, Some(sdk)) => Arc::new(S3Store::from_sdk_config(sdk, config.output_bucket.clone())),
        (None, None) => return Err(AppError::config("no result store available")),
    };

    let ctx = HandlerContext::new(config, service, store);
    let result = handle_event(&ctx, &event).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
