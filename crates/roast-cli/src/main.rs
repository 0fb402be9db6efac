use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use roast_client::{BiliFeedClient, OpenAiCritic};
use roast_core::critique::CritiqueService;
use roast_core::paginate::FeedAggregator;

#[derive(Parser)]
#[command(name = "roast", version, about = "Aggregates a creator's public feed and roasts it")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the aggregated text of a subject's public feed
    Feed {
        /// Subject (user) id whose feed to read
        #[arg(short, long)]
        mid: String,

        /// Number of feed pages to fetch
        #[arg(short, long, env = "ROAST_PAGES", default_value_t = 1)]
        pages: usize,
    },

    /// Generate an LLM critique of a subject's public feed
    Critique {
        /// Subject (user) id whose feed to critique
        #[arg(short, long)]
        mid: String,

        /// Number of feed pages to fetch
        #[arg(short, long, env = "ROAST_PAGES", default_value_t = 1)]
        pages: usize,

        /// LLM model to use
        #[arg(
            long,
            env = "ROAST_MODEL",
            default_value = "deepseek-ai/DeepSeek-V3"
        )]
        model: String,

        /// OpenAI-compatible API base URL
        #[arg(
            long,
            env = "ROAST_BASE_URL",
            default_value = "https://api-inference.modelscope.cn/v1"
        )]
        base_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("roast=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Feed { mid, pages } => cmd_feed(&mid, pages).await,
        Commands::Critique {
            mid,
            pages,
            model,
            base_url,
        } => cmd_critique(&mid, pages, &model, &base_url).await,
    }
}

/// Read a required credential from the environment, failing with a
/// descriptive message before any network call is made.
fn require_env(name: &str) -> Result<String> {
    let value = std::env::var(name)
        .with_context(|| format!("{name} not set; set it in the environment or a .env file"))?;
    if value.trim().is_empty() {
        anyhow::bail!("{name} is set but empty");
    }
    Ok(value)
}

async fn cmd_feed(mid: &str, pages: usize) -> Result<()> {
    let cookie = require_env("ROAST_COOKIE")?;

    let client = BiliFeedClient::new(&cookie).map_err(|e| anyhow::anyhow!(e))?;
    let aggregator = FeedAggregator::new(client);

    let text = aggregator
        .fetch_aggregated_text(mid, pages)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    println!("{text}");
    Ok(())
}

async fn cmd_critique(mid: &str, pages: usize, model: &str, base_url: &str) -> Result<()> {
    let cookie = require_env("ROAST_COOKIE")?;
    let api_key = require_env("ROAST_API_KEY")?;

    let client = BiliFeedClient::new(&cookie).map_err(|e| anyhow::anyhow!(e))?;
    let critic =
        OpenAiCritic::with_base_url(&api_key, model, base_url).map_err(|e| anyhow::anyhow!(e))?;

    let service = CritiqueService::new(FeedAggregator::new(client), critic);

    tracing::info!(mid, pages, model, "generating critique");
    println!("{}", service.critique(mid, pages).await);
    Ok(())
}
