//! Knowledge graph panel: capitalized phrases as entities, linked when they
//! appear in the same sentence or topic.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use pulsewrite_core::Campaign;
use regex::Regex;

use crate::types::{Entity, GraphEdge, KnowledgeGraph};

static CAPITALIZED_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][\w'-]*(?:[ \t]+[A-Z][\w'-]*)*").expect("valid phrase regex")
});
static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?\n]+").expect("valid sentence regex"));

/// Capitalized function words that start sentences but are not entities.
const LEADING_NOISE: &[&str] = &[
    "A", "An", "And", "But", "For", "In", "It", "Its", "Of", "On", "Our", "The", "These", "This",
    "We", "Your",
];

fn entities_in(sentence: &str) -> BTreeSet<String> {
    CAPITALIZED_PHRASE_RE
        .find_iter(sentence)
        .filter_map(|m| {
            let words: Vec<&str> = m
                .as_str()
                .split_whitespace()
                .skip_while(|w| LEADING_NOISE.contains(w))
                .collect();
            (!words.is_empty()).then(|| words.join(" "))
        })
        .collect()
}

/// Build the entity graph from the campaign's description sentences and
/// its built topics.
#[must_use]
pub fn knowledge_graph(campaign: &Campaign) -> KnowledgeGraph {
    let sentences = SENTENCE_END_RE
        .split(&campaign.description)
        .chain(campaign.topics.iter().map(String::as_str));

    let mut mentions: BTreeMap<String, usize> = BTreeMap::new();
    let mut links: BTreeMap<(String, String), usize> = BTreeMap::new();
    for sentence in sentences {
        let found: Vec<String> = entities_in(sentence).into_iter().collect();
        for (i, a) in found.iter().enumerate() {
            *mentions.entry(a.clone()).or_default() += 1;
            for b in &found[i + 1..] {
                *links.entry((a.clone(), b.clone())).or_default() += 1;
            }
        }
    }

    let mut entities: Vec<Entity> = mentions
        .into_iter()
        .map(|(name, mentions)| Entity { name, mentions })
        .collect();
    entities.sort_by(|a, b| b.mentions.cmp(&a.mentions).then_with(|| a.name.cmp(&b.name)));

    let mut edges: Vec<GraphEdge> = links
        .into_iter()
        .map(|((source, target), weight)| GraphEdge {
            source,
            target,
            weight,
        })
        .collect();
    edges.sort_by(|a, b| b.weight.cmp(&a.weight));

    tracing::debug!(
        campaign_id = %campaign.id,
        entities = entities.len(),
        edges = edges.len(),
        "knowledge graph derived"
    );
    KnowledgeGraph { entities, edges }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pulsewrite_core::CampaignDraft;

    use super::*;

    fn campaign(description: &str, topics: &[&str]) -> Campaign {
        let draft = CampaignDraft {
            name: "Graph".to_string(),
            description: description.to_string(),
            keywords: vec!["x".to_string()],
            ..CampaignDraft::default()
        };
        let mut c = Campaign::from_draft(draft, Utc::now()).unwrap();
        c.topics = topics.iter().map(ToString::to_string).collect();
        c
    }

    #[test]
    fn extracts_phrases_and_strips_leading_noise() {
        let found = entities_in("The Rust Foundation met with Mozilla in Berlin");
        let expected: BTreeSet<String> = ["Rust Foundation", "Mozilla", "Berlin"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn sentence_boundaries_limit_edges() {
        let g = campaign(
            "OpenAI partners with Microsoft. Google answers! Microsoft ships Copilot.",
            &[],
        );
        let graph = knowledge_graph(&g);
        assert_eq!(graph.entities[0].name, "Microsoft");
        assert_eq!(graph.entities[0].mentions, 2);
        let pairs: Vec<(&str, &str)> = graph
            .edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert!(pairs.contains(&("Microsoft", "OpenAI")));
        assert!(pairs.contains(&("Copilot", "Microsoft")));
        assert!(!pairs.iter().any(|(a, b)| *a == "Google" || *b == "Google"));
    }

    #[test]
    fn repeated_cooccurrence_raises_weight() {
        let graph = knowledge_graph(&campaign(
            "Nike and Adidas compete. Adidas trails Nike.",
            &[],
        ));
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].weight, 2);
        assert_eq!(graph.edges[0].source, "Adidas");
    }

    #[test]
    fn topics_count_as_entities() {
        let graph = knowledge_graph(&campaign("", &["Machine Learning", "Tech"]));
        let names: Vec<&str> = graph.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Machine Learning", "Tech"]);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn lowercase_text_has_no_entities() {
        assert_eq!(
            knowledge_graph(&campaign("just some lowercase notes", &[])),
            KnowledgeGraph::default()
        );
    }
}
