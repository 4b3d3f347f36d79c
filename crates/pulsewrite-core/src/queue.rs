//! Content queue: insight items picked for downstream content generation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueItem {
    pub id: String,
    /// Panel kind, e.g. `word`, `hashtag`, `entity`, `trending`.
    #[serde(rename = "type")]
    pub item_type: String,
    pub name: String,
    pub source: String,
}

impl QueueItem {
    /// Build an item whose id is derived from its type and name, so the same
    /// insight selected twice maps to the same queue entry.
    #[must_use]
    pub fn new(item_type: &str, name: &str, source: &str) -> Self {
        let slug: String = name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        Self {
            id: format!("{item_type}:{slug}"),
            item_type: item_type.to_string(),
            name: name.to_string(),
            source: source.to_string(),
        }
    }
}

/// Receiver for selection changes, the "add to content queue" callback.
pub trait QueueSink {
    fn push(&mut self, item: QueueItem);
    fn remove(&mut self, id: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentQueue {
    items: Vec<QueueItem>,
}

impl ContentQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[QueueItem] {
        &self.items
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl QueueSink for ContentQueue {
    fn push(&mut self, item: QueueItem) {
        if !self.contains(&item.id) {
            self.items.push(item);
        }
    }

    fn remove(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_stable_slug() {
        let item = QueueItem::new("hashtag", "#Content Marketing!", "research");
        assert_eq!(item.id, "hashtag:content-marketing");
        assert_eq!(item.name, "#Content Marketing!");
    }

    #[test]
    fn push_deduplicates_by_id() {
        let mut queue = ContentQueue::new();
        queue.push(QueueItem::new("word", "growth", "word_cloud"));
        queue.push(QueueItem::new("word", "Growth", "word_cloud"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn remove_keeps_insertion_order() {
        let mut queue = ContentQueue::new();
        for name in ["a1", "b2", "c3"] {
            queue.push(QueueItem::new("word", name, "word_cloud"));
        }
        queue.remove("word:b2");
        let names: Vec<&str> = queue.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a1", "c3"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut queue = ContentQueue::new();
        queue.push(QueueItem::new("trending", "AI", "x"));
        let value = serde_json::to_value(&queue).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["type"], "trending");
    }
}
