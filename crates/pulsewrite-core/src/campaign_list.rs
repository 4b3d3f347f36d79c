//! The campaign list shown on the dashboard, newest first.

use crate::campaign::Campaign;

/// Campaigns ordered by `created_at` descending; ties fall back to id so
/// the order is stable across reloads.
#[derive(Debug, Clone, Default)]
pub struct CampaignList {
    campaigns: Vec<Campaign>,
}

impl CampaignList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sorted list. Later duplicates of an id replace earlier ones.
    #[must_use]
    pub fn from_campaigns(campaigns: Vec<Campaign>) -> Self {
        let mut list = Self::new();
        for campaign in campaigns {
            list.upsert(campaign, None);
        }
        list
    }

    /// Insert or replace a campaign and restore the ordering.
    ///
    /// `previous_id` names the entry being replaced when a build swapped a
    /// temporary id for a server id.
    pub fn upsert(&mut self, campaign: Campaign, previous_id: Option<&str>) {
        self.campaigns
            .retain(|c| c.id != campaign.id && previous_id != Some(c.id.as_str()));
        self.campaigns.push(campaign);
        self.campaigns.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
    }

    /// Remove exactly the campaign with `id`. Other entries keep their order.
    pub fn remove(&mut self, id: &str) -> Option<Campaign> {
        let idx = self.campaigns.iter().position(|c| c.id == id)?;
        Some(self.campaigns.remove(idx))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Campaign> {
        self.campaigns.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Campaign> {
        self.campaigns
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::campaign::{CampaignDraft, CampaignType};

    fn campaign(id: &str, minutes: i64) -> Campaign {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let draft = CampaignDraft {
            name: format!("Campaign {id}"),
            campaign_type: CampaignType::Keyword,
            keywords: vec!["ai".to_string()],
            ..CampaignDraft::default()
        };
        let mut c = Campaign::from_draft(draft, base + Duration::minutes(minutes)).unwrap();
        c.id = id.to_string();
        c
    }

    fn ids(list: &CampaignList) -> Vec<&str> {
        list.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn sorted_newest_first() {
        let list = CampaignList::from_campaigns(vec![
            campaign("a", 1),
            campaign("c", 3),
            campaign("b", 2),
        ]);
        assert_eq!(ids(&list), vec!["c", "b", "a"]);
    }

    #[test]
    fn remove_drops_only_that_id_and_keeps_order() {
        let mut list = CampaignList::from_campaigns(vec![
            campaign("a", 1),
            campaign("b", 2),
            campaign("c", 3),
            campaign("d", 4),
        ]);
        let removed = list.remove("b").unwrap();
        assert_eq!(removed.id, "b");
        assert_eq!(ids(&list), vec!["d", "c", "a"]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut list = CampaignList::from_campaigns(vec![campaign("a", 1)]);
        assert!(list.remove("zzz").is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn upsert_replaces_temporary_entry() {
        let mut list = CampaignList::from_campaigns(vec![campaign("temp-1", 5), campaign("x", 1)]);
        let mut built = list.get("temp-1").unwrap().clone();
        built.id = "srv-9".to_string();
        list.upsert(built, Some("temp-1"));
        assert_eq!(ids(&list), vec!["srv-9", "x"]);
    }

    #[test]
    fn upsert_same_id_replaces_in_place() {
        let mut list = CampaignList::from_campaigns(vec![campaign("a", 1), campaign("b", 2)]);
        let mut edited = list.get("a").unwrap().clone();
        edited.name = "Renamed".to_string();
        list.upsert(edited, None);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get("a").unwrap().name, "Renamed");
        assert_eq!(ids(&list), vec!["b", "a"]);
    }

    #[test]
    fn equal_timestamps_order_by_id() {
        let list = CampaignList::from_campaigns(vec![campaign("b", 1), campaign("a", 1)]);
        assert_eq!(ids(&list), vec!["a", "b"]);
    }
}
