//! Checkbox state across the research panels.

use std::collections::BTreeSet;

use pulsewrite_core::{QueueItem, QueueSink};

/// Ids of the insight items currently ticked.
///
/// Every toggle is forwarded to a [`QueueSink`]: selecting pushes the item,
/// deselecting removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightSelection {
    selected: BTreeSet<String>,
}

impl InsightSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the selection from items already in the queue.
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a QueueItem>,
    {
        Self {
            selected: items.into_iter().map(|i| i.id.clone()).collect(),
        }
    }

    /// Flip `item` and notify `sink`. Returns `true` if the item is now
    /// selected.
    pub fn toggle(&mut self, item: QueueItem, sink: &mut dyn QueueSink) -> bool {
        if self.selected.remove(&item.id) {
            tracing::debug!(item_id = %item.id, "insight deselected");
            sink.remove(&item.id);
            false
        } else {
            tracing::debug!(item_id = %item.id, "insight selected");
            self.selected.insert(item.id.clone());
            sink.push(item);
            true
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pulsewrite_core::ContentQueue;

    use super::*;

    #[test]
    fn toggle_twice_restores_selection_and_queue() {
        let mut queue = ContentQueue::new();
        queue.push(QueueItem::new("word", "growth", "c1"));
        let mut selection = InsightSelection::from_items(queue.items());
        let before_queue = queue.clone();
        let before_selection = selection.clone();

        let item = QueueItem::new("hashtag", "#Ai", "c1");
        assert!(selection.toggle(item.clone(), &mut queue));
        assert!(selection.is_selected(&item.id));
        assert!(queue.contains(&item.id));

        assert!(!selection.toggle(item, &mut queue));
        assert_eq!(selection, before_selection);
        assert_eq!(queue, before_queue);
    }

    #[test]
    fn items_toggle_independently() {
        let mut queue = ContentQueue::new();
        let mut selection = InsightSelection::new();
        selection.toggle(QueueItem::new("word", "seo", "c1"), &mut queue);
        selection.toggle(QueueItem::new("entity", "Acme", "c1"), &mut queue);
        selection.toggle(QueueItem::new("word", "seo", "c1"), &mut queue);
        assert_eq!(selection.len(), 1);
        assert!(selection.is_selected("entity:acme"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn preselected_item_toggles_off() {
        let mut queue = ContentQueue::new();
        let item = QueueItem::new("topic", "Tech", "c1");
        queue.push(item.clone());
        let mut selection = InsightSelection::from_items(queue.items());
        assert!(!selection.toggle(item, &mut queue));
        assert!(queue.is_empty());
        assert!(selection.is_empty());
    }
}
