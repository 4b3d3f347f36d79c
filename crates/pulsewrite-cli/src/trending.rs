//! Trending-on-X command handlers for the CLI.

use clap::Subcommand;
use pulsewrite_core::AppConfig;
use pulsewrite_research::TrendingBrowser;

/// Sub-commands available under `trending`.
#[derive(Debug, Subcommand)]
pub enum TrendingCommands {
    /// List current trending topics
    List {
        /// Only show topics containing this text
        #[arg(long)]
        filter: Option<String>,
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Queue a trending topic and make it the active topic for content generation
    Select {
        topic: String,
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

pub(crate) async fn run(config: &AppConfig, command: TrendingCommands) -> anyhow::Result<()> {
    let client = crate::backend_client(config)?;
    match command {
        TrendingCommands::List { filter, limit } => {
            let topics = client.get_trending_content(limit).await?;
            let browser = TrendingBrowser::new(topics).with_filter(filter.unwrap_or_default());
            let shown = browser.filtered();
            if shown.is_empty() {
                println!("no trending topics match");
            }
            for (i, topic) in shown.iter().enumerate() {
                println!("{:>3}. {topic}", i + 1);
            }
            Ok(())
        }
        TrendingCommands::Select { topic, limit } => {
            let topics = client.get_trending_content(limit).await?;
            let browser = TrendingBrowser::new(topics);

            let mut store = crate::open_store(config)?;
            let mut queue = store.load_queue();
            let item = browser
                .select(&topic, &mut queue)
                .ok_or_else(|| anyhow::anyhow!("'{topic}' is not currently trending"))?;
            store
                .save_queue(&queue)
                .map_err(|e| anyhow::anyhow!("failed to save content queue: {e}"))?;
            store
                .update_payload(|p| p.trending_topic = Some(item.name.clone()))
                .map_err(|e| anyhow::anyhow!("failed to record trending topic: {e}"))?;

            println!("selected trending topic '{}'", item.name);
            Ok(())
        }
    }
}
