//! Research assistant command handlers for the CLI.
//!
//! Panels are derived from the cached campaign; nothing here contacts the
//! backend. Selections are persisted in the content queue.

use clap::Subcommand;
use pulsewrite_core::{AppConfig, Campaign, ContentQueue, LocalStore};
use pulsewrite_research::{InsightSelection, Panel, ResearchPanels};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Sub-commands available under `research`.
#[derive(Debug, Subcommand)]
pub enum ResearchCommands {
    /// Print every research panel for a campaign
    Show {
        id: String,
        /// Seed for the display jitter, for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Toggle a panel entry in the content queue
    Select {
        id: String,
        /// Panel: words, sentiment, topics, entities or hashtags
        #[arg(long)]
        panel: Panel,
        /// Entry name as shown by `research show`
        #[arg(long)]
        item: String,
    },
}

pub(crate) fn run(config: &AppConfig, command: ResearchCommands) -> anyhow::Result<()> {
    let mut store = crate::open_store(config)?;
    match command {
        ResearchCommands::Show { id, seed } => {
            let campaign = cached_campaign(&store, &id)?;
            let panels = match seed {
                Some(seed) => ResearchPanels::derive(&campaign, &mut StdRng::seed_from_u64(seed)),
                None => ResearchPanels::derive(&campaign, &mut rand::rng()),
            };
            print_panels(&panels, &store.load_queue());
            Ok(())
        }
        ResearchCommands::Select { id, panel, item } => {
            run_research_select(&mut store, &id, panel, &item)
        }
    }
}

fn cached_campaign(store: &LocalStore, id: &str) -> anyhow::Result<Campaign> {
    crate::campaign::load_cached(store)
        .get(id)
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!("campaign '{id}' not found locally; run `campaign list` first")
        })
}

fn run_research_select(
    store: &mut LocalStore,
    id: &str,
    panel: Panel,
    name: &str,
) -> anyhow::Result<()> {
    let campaign = cached_campaign(store, id)?;
    // Entry names do not depend on the jitter, so any seed will do.
    let panels = ResearchPanels::derive(&campaign, &mut StdRng::seed_from_u64(0));
    let item = panels
        .item(panel, name)
        .ok_or_else(|| anyhow::anyhow!("'{name}' is not in the {panel} panel"))?;

    let mut queue = store.load_queue();
    let mut selection = InsightSelection::from_items(queue.items());
    let label = item.name.clone();
    let selected = selection.toggle(item, &mut queue);
    store
        .save_queue(&queue)
        .map_err(|e| anyhow::anyhow!("failed to save content queue: {e}"))?;

    if selected {
        println!("added '{label}' to the content queue ({} items)", queue.len());
    } else {
        println!("removed '{label}' from the content queue ({} items)", queue.len());
    }
    Ok(())
}

fn mark(queue: &ContentQueue, panels: &ResearchPanels, panel: Panel, name: &str) -> &'static str {
    match panels.item(panel, name) {
        Some(item) if queue.contains(&item.id) => "[x]",
        _ => "[ ]",
    }
}

fn print_panels(panels: &ResearchPanels, queue: &ContentQueue) {
    println!("WORD CLOUD");
    for w in &panels.word_cloud {
        println!(
            "  {} {:<24}{:>4}  {:.2}",
            mark(queue, panels, Panel::WordCloud, &w.word),
            w.word,
            w.count,
            w.weight
        );
    }

    let s = &panels.sentiment;
    println!("\nSENTIMENT  {} ({:+.2})", s.label(), s.score);
    println!(
        "  positive {}%  negative {}%  neutral {}%",
        s.positive, s.negative, s.neutral
    );
    for word in &s.matched {
        println!("  {} {word}", mark(queue, panels, Panel::Sentiment, word));
    }

    println!("\nTOPICAL MAP");
    for t in &panels.topical_map {
        println!(
            "  {} {:<32}{:.2}",
            mark(queue, panels, Panel::TopicalMap, &t.name),
            t.name,
            t.relevance
        );
    }

    println!("\nKNOWLEDGE GRAPH");
    for e in &panels.knowledge_graph.entities {
        println!(
            "  {} {:<32}{} mentions",
            mark(queue, panels, Panel::KnowledgeGraph, &e.name),
            e.name,
            e.mentions
        );
    }
    for edge in &panels.knowledge_graph.edges {
        println!("      {} -- {} ({})", edge.source, edge.target, edge.weight);
    }

    println!("\nHASHTAGS");
    for h in &panels.hashtags {
        println!(
            "  {} {:<32}{:.2}",
            mark(queue, panels, Panel::Hashtags, &h.tag),
            h.tag,
            h.score
        );
    }
}
