//! All research panels for one campaign, and the selectable items each
//! panel offers to the content queue.

use std::fmt;
use std::str::FromStr;

use pulsewrite_core::{Campaign, QueueItem};
use rand::Rng;
use serde::Serialize;

use crate::graph::knowledge_graph;
use crate::scorer::sentiment;
use crate::topical::{hashtags, topical_map};
use crate::types::{Hashtag, KnowledgeGraph, SentimentBreakdown, TopicNode, WordWeight};
use crate::words::word_cloud;

pub const WORD_CLOUD_LIMIT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    WordCloud,
    Sentiment,
    TopicalMap,
    KnowledgeGraph,
    Hashtags,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::WordCloud,
        Panel::Sentiment,
        Panel::TopicalMap,
        Panel::KnowledgeGraph,
        Panel::Hashtags,
    ];

    /// Queue item type for entries selected from this panel.
    #[must_use]
    pub fn item_type(self) -> &'static str {
        match self {
            Panel::WordCloud => "word",
            Panel::Sentiment => "sentiment",
            Panel::TopicalMap => "topic",
            Panel::KnowledgeGraph => "entity",
            Panel::Hashtags => "hashtag",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Panel::WordCloud => "words",
            Panel::Sentiment => "sentiment",
            Panel::TopicalMap => "topics",
            Panel::KnowledgeGraph => "entities",
            Panel::Hashtags => "hashtags",
        };
        f.write_str(s)
    }
}

impl FromStr for Panel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "words" | "word" | "word-cloud" | "wordcloud" => Ok(Panel::WordCloud),
            "sentiment" => Ok(Panel::Sentiment),
            "topics" | "topic" | "topical-map" => Ok(Panel::TopicalMap),
            "entities" | "entity" | "graph" | "knowledge-graph" => Ok(Panel::KnowledgeGraph),
            "hashtags" | "hashtag" => Ok(Panel::Hashtags),
            other => Err(format!(
                "unknown panel '{other}' (expected words, sentiment, topics, entities or hashtags)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResearchPanels {
    pub campaign_id: String,
    pub word_cloud: Vec<WordWeight>,
    pub sentiment: SentimentBreakdown,
    pub topical_map: Vec<TopicNode>,
    pub knowledge_graph: KnowledgeGraph,
    pub hashtags: Vec<Hashtag>,
}

impl ResearchPanels {
    pub fn derive<R: Rng + ?Sized>(campaign: &Campaign, rng: &mut R) -> Self {
        Self {
            campaign_id: campaign.id.clone(),
            word_cloud: word_cloud(campaign, WORD_CLOUD_LIMIT),
            sentiment: sentiment(campaign),
            topical_map: topical_map(campaign, rng),
            knowledge_graph: knowledge_graph(campaign),
            hashtags: hashtags(campaign, rng),
        }
    }

    /// Display names of the selectable entries in `panel`.
    #[must_use]
    pub fn names(&self, panel: Panel) -> Vec<&str> {
        match panel {
            Panel::WordCloud => self.word_cloud.iter().map(|w| w.word.as_str()).collect(),
            Panel::Sentiment => self.sentiment.matched.iter().map(String::as_str).collect(),
            Panel::TopicalMap => self.topical_map.iter().map(|t| t.name.as_str()).collect(),
            Panel::KnowledgeGraph => self
                .knowledge_graph
                .entities
                .iter()
                .map(|e| e.name.as_str())
                .collect(),
            Panel::Hashtags => self.hashtags.iter().map(|h| h.tag.as_str()).collect(),
        }
    }

    /// Queue item for the entry of `panel` named `name` (case-insensitive),
    /// or `None` if the panel has no such entry.
    #[must_use]
    pub fn item(&self, panel: Panel, name: &str) -> Option<QueueItem> {
        let name = name.trim();
        self.names(panel)
            .into_iter()
            .find(|n| n.eq_ignore_ascii_case(name))
            .map(|n| QueueItem::new(panel.item_type(), n, &self.campaign_id))
    }
}
