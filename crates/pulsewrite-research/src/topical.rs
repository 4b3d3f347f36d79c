//! Topical map and hashtag panels. Both are ranked lists with a small
//! random jitter on the display score.

use pulsewrite_core::{normalize_topics, title_case, Campaign};
use rand::Rng;

use crate::types::{Hashtag, TopicNode};

const JITTER: f32 = 0.05;
const RANK_DECAY: f32 = 0.1;
const MIN_BASE: f32 = 0.2;

fn ranked_score<R: Rng + ?Sized>(rank: usize, rng: &mut R) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let base = (1.0 - RANK_DECAY * rank as f32).max(MIN_BASE);
    (base + rng.random_range(-JITTER..=JITTER)).clamp(0.0, 1.0)
}

/// Topic names for the map: the built topics, or the normalized keywords
/// and then trending topics when the campaign has not been built yet. URLs
/// never become nodes.
fn map_topics(campaign: &Campaign) -> Vec<String> {
    if !campaign.topics.is_empty() {
        return campaign.topics.clone();
    }
    let keywords = normalize_topics(&campaign.keywords);
    if keywords.is_empty() {
        normalize_topics(&campaign.trending_topics)
    } else {
        keywords
    }
}

/// One node per topic, relevance decreasing with rank.
pub fn topical_map<R: Rng + ?Sized>(campaign: &Campaign, rng: &mut R) -> Vec<TopicNode> {
    map_topics(campaign)
        .into_iter()
        .enumerate()
        .map(|(rank, name)| TopicNode {
            name,
            relevance: ranked_score(rank, rng),
        })
        .collect()
}

/// `#` followed by the PascalCase form of `phrase`, or `None` if it has no
/// alphanumeric content.
fn to_hashtag(phrase: &str) -> Option<String> {
    let body: String = phrase
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(title_case)
        .collect();
    (!body.is_empty()).then(|| format!("#{body}"))
}

/// Hashtags from topics, keywords and trending topics. URLs are not turned
/// into tags.
pub fn hashtags<R: Rng + ?Sized>(campaign: &Campaign, rng: &mut R) -> Vec<Hashtag> {
    let mut tags: Vec<String> = Vec::new();
    let phrases = campaign
        .topics
        .iter()
        .chain(&campaign.keywords)
        .chain(&campaign.trending_topics);
    for phrase in phrases {
        let Some(tag) = to_hashtag(phrase) else {
            continue;
        };
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            tags.push(tag);
        }
    }
    tags.into_iter()
        .enumerate()
        .map(|(rank, tag)| Hashtag {
            tag,
            score: ranked_score(rank, rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pulsewrite_core::{CampaignDraft, CampaignType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn keyword_campaign(keywords: &[&str]) -> Campaign {
        let draft = CampaignDraft {
            name: "Map".to_string(),
            campaign_type: CampaignType::Keyword,
            keywords: keywords.iter().map(ToString::to_string).collect(),
            ..CampaignDraft::default()
        };
        Campaign::from_draft(draft, Utc::now()).unwrap()
    }

    #[test]
    fn map_prefers_built_topics() {
        let mut c = keyword_campaign(&["ignored"]);
        c.topics = vec!["Tech".to_string(), "Ai".to_string()];
        let nodes = topical_map(&c, &mut StdRng::seed_from_u64(7));
        let names: Vec<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Tech", "Ai"]);
    }

    #[test]
    fn map_falls_back_to_normalized_keywords() {
        let c = keyword_campaign(&["growth hacking, seo", "non"]);
        let nodes = topical_map(&c, &mut StdRng::seed_from_u64(7));
        let names: Vec<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Growth Hacking", "Seo"]);
    }

    #[test]
    fn unbuilt_url_campaign_has_no_url_nodes() {
        let draft = CampaignDraft {
            name: "Links".to_string(),
            campaign_type: CampaignType::Url,
            urls: vec!["https://example.com/blog".to_string()],
            ..CampaignDraft::default()
        };
        let c = Campaign::from_draft(draft, Utc::now()).unwrap();
        assert!(topical_map(&c, &mut StdRng::seed_from_u64(7)).is_empty());
    }

    #[test]
    fn unbuilt_trending_campaign_maps_trending_topics() {
        let draft = CampaignDraft {
            name: "Trends".to_string(),
            campaign_type: CampaignType::Trending,
            trending_topics: vec!["web3".to_string()],
            ..CampaignDraft::default()
        };
        let c = Campaign::from_draft(draft, Utc::now()).unwrap();
        let nodes = topical_map(&c, &mut StdRng::seed_from_u64(7));
        let names: Vec<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Web3"]);
    }

    #[test]
    fn relevance_stays_in_unit_range_and_decays() {
        let keywords: Vec<String> = (0..15).map(|i| format!("topic{i}")).collect();
        let refs: Vec<&str> = keywords.iter().map(String::as_str).collect();
        let c = keyword_campaign(&refs);
        let nodes = topical_map(&c, &mut StdRng::seed_from_u64(42));
        assert_eq!(nodes.len(), 15);
        assert!(nodes.iter().all(|n| (0.0..=1.0).contains(&n.relevance)));
        assert!(nodes[0].relevance > nodes[5].relevance);
    }

    #[test]
    fn same_seed_same_scores() {
        let c = keyword_campaign(&["a1", "b2", "c3"]);
        let a = topical_map(&c, &mut StdRng::seed_from_u64(1));
        let b = topical_map(&c, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn hashtags_are_pascal_case_and_deduplicated() {
        let mut c = keyword_campaign(&["content marketing", "AI agents", "Content-Marketing"]);
        c.topics = vec!["Ai".to_string()];
        let tags: Vec<String> = hashtags(&c, &mut StdRng::seed_from_u64(3))
            .into_iter()
            .map(|h| h.tag)
            .collect();
        assert_eq!(tags, vec!["#Ai", "#ContentMarketing", "#AiAgents"]);
    }

    #[test]
    fn hashtags_skip_symbol_only_phrases() {
        let c = keyword_campaign(&["!!!", "rust"]);
        let tags: Vec<String> = hashtags(&c, &mut StdRng::seed_from_u64(3))
            .into_iter()
            .map(|h| h.tag)
            .collect();
        assert_eq!(tags, vec!["#Rust"]);
    }
}
