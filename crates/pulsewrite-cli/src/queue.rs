//! Content queue command handlers for the CLI.

use clap::Subcommand;
use pulsewrite_core::{AppConfig, CONTENT_QUEUE_KEY};

/// Sub-commands available under `queue`.
#[derive(Debug, Subcommand)]
pub enum QueueCommands {
    /// Show queued items and the active content generation selection
    Show,
    /// Remove every queued item
    Clear,
}

pub(crate) fn run(config: &AppConfig, command: QueueCommands) -> anyhow::Result<()> {
    let mut store = crate::open_store(config)?;
    match command {
        QueueCommands::Show => {
            let payload = store.load_payload();
            if let Some(author) = &payload.author {
                println!("author:   {} ({})", author.name, author.id);
            }
            if let Some(topic) = &payload.trending_topic {
                println!("trending: {topic}");
            }
            if !payload.topics.is_empty() {
                println!("topics:   {}", payload.topics.join(", "));
            }

            let queue = store.load_queue();
            if queue.is_empty() {
                println!("content queue is empty");
                return Ok(());
            }
            println!("{:<12}{:<40}SOURCE", "TYPE", "NAME");
            for item in queue.items() {
                println!("{:<12}{:<40}{}", item.item_type, item.name, item.source);
            }
            Ok(())
        }
        QueueCommands::Clear => {
            let removed = store
                .remove(CONTENT_QUEUE_KEY)
                .map_err(|e| anyhow::anyhow!("failed to clear content queue: {e}"))?;
            if removed {
                println!("content queue cleared");
            } else {
                println!("content queue was already empty");
            }
            Ok(())
        }
    }
}
