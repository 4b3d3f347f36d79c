//! Campaign command handlers for the CLI.
//!
//! The dashboard's campaign list is cached in the local store under
//! [`CAMPAIGNS_KEY`]. Campaigns created with `--offline` keep their
//! temporary id and live only in that cache until they are built.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Subcommand};
use pulsewrite_api::{ApiError, BackendClient, CampaignBuilder, CredentialPrompt};
use pulsewrite_core::{
    AppConfig, Campaign, CampaignDraft, CampaignList, CampaignType, LocalStore, TopicTool,
};

pub(crate) const CAMPAIGNS_KEY: &str = "campaigns";

/// Sub-commands available under `campaign`.
#[derive(Debug, Subcommand)]
pub enum CampaignCommands {
    /// Create a campaign from a YAML draft or flags
    Create {
        #[command(flatten)]
        draft: DraftArgs,
        /// Keep the campaign local with a temporary id instead of saving it to the backend
        #[arg(long)]
        offline: bool,
    },
    /// List campaigns, newest first
    List {
        /// Show the local cache without contacting the backend
        #[arg(long)]
        offline: bool,
    },
    /// Edit an existing campaign; unset flags keep their current values
    Edit {
        id: String,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete a campaign
    Delete { id: String },
    /// Run trend analysis for a campaign and record its topics
    Build { id: String },
    /// Activate a built campaign
    Activate { id: String },
}

/// Campaign form fields. With `--file`, the YAML draft is loaded first and
/// any other flag overrides it.
#[derive(Debug, Default, Args)]
pub struct DraftArgs {
    /// YAML campaign draft
    #[arg(long)]
    pub file: Option<PathBuf>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub query: Option<String>,
    /// Source type: keyword, url or trending
    #[arg(long = "type")]
    pub campaign_type: Option<CampaignType>,
    /// Keyword to track (repeatable)
    #[arg(long = "keyword")]
    pub keywords: Vec<String>,
    /// URL to extract from (repeatable)
    #[arg(long = "url")]
    pub urls: Vec<String>,
    /// Trending topic to follow (repeatable)
    #[arg(long = "topic")]
    pub trending_topics: Vec<String>,
    /// Crawl depth (1-5)
    #[arg(long)]
    pub depth: Option<u8>,
    #[arg(long)]
    pub max_pages: Option<u32>,
    /// Topic modeling tool: lda, nmf or bertopic
    #[arg(long)]
    pub topic_tool: Option<TopicTool>,
    #[arg(long)]
    pub num_topics: Option<u32>,
}

impl DraftArgs {
    /// Apply the flags on top of `base`, loading `--file` first when given.
    fn into_draft(self, base: CampaignDraft) -> anyhow::Result<CampaignDraft> {
        let mut draft = match &self.file {
            Some(path) => CampaignDraft::load(path)
                .map_err(|e| anyhow::anyhow!("failed to load draft: {e}"))?,
            None => base,
        };
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(query) = self.query {
            draft.query = query;
        }
        if let Some(campaign_type) = self.campaign_type {
            draft.campaign_type = campaign_type;
        }
        if !self.keywords.is_empty() {
            draft.keywords = self.keywords;
        }
        if !self.urls.is_empty() {
            draft.urls = self.urls;
        }
        if !self.trending_topics.is_empty() {
            draft.trending_topics = self.trending_topics;
        }
        if let Some(depth) = self.depth {
            draft.settings.extraction.depth = depth;
        }
        if let Some(max_pages) = self.max_pages {
            draft.settings.extraction.max_pages = max_pages;
        }
        if let Some(tool) = self.topic_tool {
            draft.settings.modeling.topic_tool = tool;
        }
        if let Some(n) = self.num_topics {
            draft.settings.modeling.num_topics = n;
        }
        Ok(draft)
    }
}

/// Reads a replacement API key from stdin after a credential failure.
struct StdinPrompt;

impl CredentialPrompt for StdinPrompt {
    fn request_api_key(&mut self, error: &ApiError) -> Option<String> {
        eprintln!("backend rejected the request: {error}");
        eprint!("enter API key (blank to cancel): ");
        std::io::stderr().flush().ok();
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(_) => Some(line.trim().to_string()).filter(|k| !k.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read API key from stdin");
                None
            }
        }
    }
}

pub(crate) fn load_cached(store: &LocalStore) -> CampaignList {
    CampaignList::from_campaigns(store.get::<Vec<Campaign>>(CAMPAIGNS_KEY).unwrap_or_default())
}

fn save_cached(store: &mut LocalStore, list: &CampaignList) -> anyhow::Result<()> {
    let campaigns: Vec<&Campaign> = list.iter().collect();
    store
        .set(CAMPAIGNS_KEY, &campaigns)
        .map_err(|e| anyhow::anyhow!("failed to save campaign cache: {e}"))
}

/// Replace the cache with the backend list, keeping local-only campaigns.
async fn refresh(client: &BackendClient, store: &mut LocalStore) -> anyhow::Result<CampaignList> {
    let cached = load_cached(store);
    let mut list = CampaignList::from_campaigns(client.list_campaigns().await?);
    for local in cached.iter().filter(|c| c.is_temporary()) {
        list.upsert(local.clone(), None);
    }
    save_cached(store, &list)?;
    Ok(list)
}

/// Find `id` in the cache, refreshing from the backend once if it is missing.
async fn find_campaign(
    client: &BackendClient,
    store: &mut LocalStore,
    id: &str,
) -> anyhow::Result<(CampaignList, Campaign)> {
    let mut list = load_cached(store);
    if list.get(id).is_none() {
        list = refresh(client, store).await?;
    }
    let campaign = list
        .get(id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("campaign '{id}' not found"))?;
    Ok((list, campaign))
}

fn print_campaigns(list: &CampaignList) {
    if list.is_empty() {
        println!("no campaigns yet; run `campaign create` first");
        return;
    }
    println!(
        "{:<38}{:<10}{:<19}{:<7}{:<18}NAME",
        "ID", "TYPE", "STATUS", "POSTS", "CREATED"
    );
    for c in list.iter() {
        println!(
            "{:<38}{:<10}{:<19}{:<7}{:<18}{}",
            c.id,
            c.campaign_type.to_string(),
            c.status.to_string(),
            c.posts_count,
            c.created_at.format("%Y-%m-%d %H:%M").to_string(),
            c.name
        );
    }
}

fn print_campaign(c: &Campaign) {
    println!("{} ({})", c.name, c.id);
    println!("  type:    {}", c.campaign_type);
    println!("  status:  {}", c.status);
    println!("  sources: {}", c.source_terms().join(", "));
    if !c.topics.is_empty() {
        println!("  topics:  {}", c.topics.join(", "));
    }
}

pub(crate) async fn run(config: &AppConfig, command: CampaignCommands) -> anyhow::Result<()> {
    let mut store = crate::open_store(config)?;
    let mut client = crate::backend_client(config)?;
    match command {
        CampaignCommands::Create { draft, offline } => {
            run_campaign_create(&client, &mut store, draft, offline).await
        }
        CampaignCommands::List { offline } => {
            let list = if offline {
                load_cached(&store)
            } else {
                refresh(&client, &mut store).await?
            };
            print_campaigns(&list);
            Ok(())
        }
        CampaignCommands::Edit { id, draft } => {
            run_campaign_edit(&client, &mut store, &id, draft).await
        }
        CampaignCommands::Delete { id } => run_campaign_delete(&client, &mut store, &id).await,
        CampaignCommands::Build { id } => run_campaign_build(&mut client, &mut store, &id).await,
        CampaignCommands::Activate { id } => {
            run_campaign_activate(&client, &mut store, &id).await
        }
    }
}

/// Validate the draft and create the campaign.
///
/// # Errors
///
/// Returns an error if the draft is invalid, the backend rejects the
/// campaign, or the cache cannot be written.
async fn run_campaign_create(
    client: &BackendClient,
    store: &mut LocalStore,
    args: DraftArgs,
    offline: bool,
) -> anyhow::Result<()> {
    let draft = args.into_draft(CampaignDraft::default())?;
    let local = Campaign::from_draft(draft, Utc::now())?;
    let temp_id = local.id.clone();

    let campaign = if offline {
        local
    } else {
        client.create_campaign(&local).await?
    };

    let mut list = load_cached(store);
    list.upsert(campaign.clone(), Some(temp_id.as_str()));
    save_cached(store, &list)?;

    println!("campaign created");
    print_campaign(&campaign);
    Ok(())
}

async fn run_campaign_edit(
    client: &BackendClient,
    store: &mut LocalStore,
    id: &str,
    args: DraftArgs,
) -> anyhow::Result<()> {
    let (mut list, mut campaign) = find_campaign(client, store, id).await?;
    let draft = args.into_draft(CampaignDraft::from_campaign(&campaign))?;
    campaign.apply_edit(draft, Utc::now())?;

    if !campaign.is_temporary() {
        campaign = client.update_campaign(&campaign).await?;
    }
    list.upsert(campaign.clone(), None);
    save_cached(store, &list)?;

    println!("campaign updated");
    print_campaign(&campaign);
    Ok(())
}

async fn run_campaign_delete(
    client: &BackendClient,
    store: &mut LocalStore,
    id: &str,
) -> anyhow::Result<()> {
    let (mut list, campaign) = find_campaign(client, store, id).await?;
    if !campaign.is_temporary() {
        client.delete_campaign(&campaign.id).await?;
    }
    list.remove(&campaign.id);
    save_cached(store, &list)?;
    tracing::info!(campaign_id = %campaign.id, "campaign removed from list");
    println!("deleted campaign '{}'", campaign.name);
    Ok(())
}

/// Build a campaign, prompting on stdin for an API key if the backend
/// rejects the current one.
///
/// # Errors
///
/// Returns an error if the campaign is unknown or invalid, the build fails,
/// or the cache cannot be written.
async fn run_campaign_build(
    client: &mut BackendClient,
    store: &mut LocalStore,
    id: &str,
) -> anyhow::Result<()> {
    let (mut list, campaign) = find_campaign(client, store, id).await?;
    println!("building '{}'...", campaign.name);

    let built = CampaignBuilder::new(client)
        .with_store(store)
        .build(&mut list, campaign, &mut StdinPrompt)
        .await
        .map_err(|e| {
            if e.is_credential_error() {
                anyhow::anyhow!("build cancelled: {e}")
            } else {
                anyhow::anyhow!("build failed: {e}")
            }
        })?;
    save_cached(store, &list)?;

    println!("build complete: {} topics, {} posts", built.topics.len(), built.posts_count);
    print_campaign(&built);
    Ok(())
}

async fn run_campaign_activate(
    client: &BackendClient,
    store: &mut LocalStore,
    id: &str,
) -> anyhow::Result<()> {
    let (mut list, mut campaign) = find_campaign(client, store, id).await?;
    campaign.activate(Utc::now())?;
    if !campaign.is_temporary() {
        campaign = client.update_campaign(&campaign).await?;
    }
    list.upsert(campaign.clone(), None);
    save_cached(store, &list)?;
    println!("campaign '{}' is now {}", campaign.name, campaign.status);
    Ok(())
}
