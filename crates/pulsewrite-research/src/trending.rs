//! Trending-on-X browser: a filterable list of backend trending topics.

use pulsewrite_core::{QueueItem, QueueSink};

pub const TRENDING_ITEM_TYPE: &str = "trending";
pub const TRENDING_SOURCE: &str = "x";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendingBrowser {
    pub topics: Vec<String>,
    pub filter: String,
}

impl TrendingBrowser {
    #[must_use]
    pub fn new(topics: Vec<String>) -> Self {
        Self {
            topics,
            filter: String::new(),
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Topics containing the filter text, case-insensitively. A blank
    /// filter matches everything.
    #[must_use]
    pub fn filtered(&self) -> Vec<&str> {
        let needle = self.filter.trim().to_lowercase();
        self.topics
            .iter()
            .map(String::as_str)
            .filter(|t| needle.is_empty() || t.to_lowercase().contains(&needle))
            .collect()
    }

    /// Forward `topic` to `sink` as a trending queue item. Returns the item,
    /// or `None` if the topic is not in the list.
    pub fn select(&self, topic: &str, sink: &mut dyn QueueSink) -> Option<QueueItem> {
        let found = self
            .topics
            .iter()
            .find(|t| t.eq_ignore_ascii_case(topic.trim()))?;
        let item = QueueItem::new(TRENDING_ITEM_TYPE, found, TRENDING_SOURCE);
        sink.push(item.clone());
        tracing::info!(topic = %found, "trending topic selected");
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use pulsewrite_core::ContentQueue;

    use super::*;

    fn browser() -> TrendingBrowser {
        TrendingBrowser::new(vec![
            "AI Agents".to_string(),
            "Web3 Gaming".to_string(),
            "Rust 2026".to_string(),
        ])
    }

    #[test]
    fn blank_filter_returns_all() {
        assert_eq!(browser().with_filter("  ").filtered().len(), 3);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        assert_eq!(browser().with_filter("GAM").filtered(), vec!["Web3 Gaming"]);
        assert!(browser().with_filter("python").filtered().is_empty());
    }

    #[test]
    fn select_pushes_trending_item() {
        let mut queue = ContentQueue::new();
        let item = browser().select("ai agents", &mut queue).unwrap();
        assert_eq!(item.name, "AI Agents");
        assert_eq!(item.item_type, "trending");
        assert!(queue.contains("trending:ai-agents"));
        assert!(browser().select("Unknown", &mut queue).is_none());
        assert_eq!(queue.len(), 1);
    }
}
