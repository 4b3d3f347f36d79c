//! Research assistant panels for PulseWrite.
//!
//! Derives visualization data (word cloud, lexicon sentiment, topical map,
//! knowledge graph, hashtags) from the fields already present on a campaign.
//! Nothing here calls the backend. Scores used only for display carry a
//! random jitter; pass a seeded RNG for reproducible output.

pub mod graph;
pub mod panels;
pub mod scorer;
pub mod selection;
pub mod topical;
pub mod trending;
pub mod types;
pub mod words;

pub use graph::knowledge_graph;
pub use panels::{Panel, ResearchPanels};
pub use scorer::{lexicon_score, sentiment};
pub use selection::InsightSelection;
pub use topical::{hashtags, topical_map};
pub use trending::TrendingBrowser;
pub use types::{
    Entity, GraphEdge, Hashtag, KnowledgeGraph, SentimentBreakdown, TopicNode, WordWeight,
};
pub use words::word_cloud;
