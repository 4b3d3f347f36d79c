mod campaign;
mod mimicry;
mod queue;
mod research;
mod trending;

use clap::{Parser, Subcommand};
use pulsewrite_api::BackendClient;
use pulsewrite_core::{AppConfig, LocalStore};
use tracing_subscriber::EnvFilter;

use campaign::CampaignCommands;
use mimicry::MimicryCommands;
use queue::QueueCommands;
use research::ResearchCommands;
use trending::TrendingCommands;

#[derive(Debug, Parser)]
#[command(name = "pulsewrite")]
#[command(about = "PulseWrite content-marketing dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create, edit, build and activate campaigns
    Campaign {
        #[command(subcommand)]
        command: CampaignCommands,
    },
    /// Build an author style profile from writing samples
    Mimicry {
        #[command(subcommand)]
        command: MimicryCommands,
    },
    /// Research assistant panels for a campaign
    Research {
        #[command(subcommand)]
        command: ResearchCommands,
    },
    /// Trending topics on X
    Trending {
        #[command(subcommand)]
        command: TrendingCommands,
    },
    /// Inspect the content queue
    Queue {
        #[command(subcommand)]
        command: QueueCommands,
    },
    /// Show the API credentials the backend has on file
    Credentials,
}

/// Opens the local store at the configured path.
pub(crate) fn open_store(config: &AppConfig) -> anyhow::Result<LocalStore> {
    LocalStore::open(&config.storage_path)
        .map_err(|e| anyhow::anyhow!("failed to open local store: {e}"))
}

pub(crate) fn backend_client(config: &AppConfig) -> anyhow::Result<BackendClient> {
    BackendClient::new(config).map_err(|e| anyhow::anyhow!("failed to build backend client: {e}"))
}

async fn run_credentials_show(config: &AppConfig) -> anyhow::Result<()> {
    let client = backend_client(config)?;
    let creds = client.get_user_credentials().await?;
    if creds.has_api_key {
        println!(
            "api key: {}",
            creds.api_key_preview.as_deref().unwrap_or("(on file)")
        );
    } else {
        println!("api key: none on file");
    }
    if creds.providers.is_empty() {
        println!("providers: none");
    } else {
        println!("providers: {}", creds.providers.join(", "));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("pulsewrite: run with --help to list commands");
        return Ok(());
    };

    let config = pulsewrite_core::load_app_config_from_env()
        .map_err(|e| anyhow::anyhow!("failed to load config: {e}"))?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::debug!(env = %config.env, base_url = %config.api_base_url, "configuration loaded");

    match command {
        Commands::Campaign { command } => campaign::run(&config, command).await,
        Commands::Mimicry { command } => mimicry::run(&config, command).await,
        Commands::Research { command } => research::run(&config, command),
        Commands::Trending { command } => trending::run(&config, command).await,
        Commands::Queue { command } => queue::run(&config, command),
        Commands::Credentials => run_credentials_show(&config).await,
    }
}
