//! Word-frequency counts for the word cloud panel.

use std::collections::HashMap;

use pulsewrite_core::Campaign;

use crate::types::WordWeight;

const MIN_WORD_LEN: usize = 3;

const STOPWORDS: &[&str] = &[
    "about", "after", "all", "also", "and", "any", "are", "because", "been", "but", "can", "com",
    "for", "from", "has", "have", "her", "his", "how", "http", "https", "into", "its", "just",
    "more", "most", "non", "not", "our", "out", "over", "she", "than", "that", "the", "their",
    "them", "then", "there", "these", "they", "this", "those", "through", "was", "were", "what",
    "when", "where", "which", "while", "who", "why", "will", "with", "www", "you", "your",
];

/// Campaign text the panels draw on: built topics, the type's source
/// terms, then the description.
pub(crate) fn campaign_text(campaign: &Campaign) -> Vec<&str> {
    campaign
        .topics
        .iter()
        .chain(campaign.source_terms())
        .map(String::as_str)
        .chain(std::iter::once(campaign.description.as_str()))
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Lowercase alphanumeric tokens of `text`.
pub(crate) fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|w| w.trim_matches('\'').to_lowercase())
        .filter(|w| !w.is_empty())
}

fn is_stopword(word: &str) -> bool {
    STOPWORDS.binary_search(&word).is_ok()
}

/// Most frequent words across the campaign's topics, source terms and
/// description.
///
/// Stopwords, numbers and words shorter than three characters are skipped.
/// Ties in count are ordered alphabetically.
#[must_use]
pub fn word_cloud(campaign: &Campaign, limit: usize) -> Vec<WordWeight> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for text in campaign_text(campaign) {
        for word in tokenize(text) {
            if word.chars().count() < MIN_WORD_LEN
                || is_stopword(&word)
                || word.chars().all(|c| c.is_ascii_digit())
            {
                continue;
            }
            *counts.entry(word).or_default() += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);

    let max = ranked.first().map_or(1, |(_, c)| *c);
    ranked
        .into_iter()
        .map(|(word, count)| WordWeight {
            word,
            count,
            weight: ratio(count, max),
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn ratio(part: usize, whole: usize) -> f32 {
    if whole == 0 {
        0.0
    } else {
        part as f32 / whole as f32
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pulsewrite_core::{CampaignDraft, CampaignType};

    use super::*;

    fn campaign(keywords: &[&str], description: &str) -> Campaign {
        let draft = CampaignDraft {
            name: "Cloud".to_string(),
            description: description.to_string(),
            campaign_type: CampaignType::Keyword,
            keywords: keywords.iter().map(ToString::to_string).collect(),
            ..CampaignDraft::default()
        };
        Campaign::from_draft(draft, Utc::now()).unwrap()
    }

    #[test]
    fn stopword_list_is_sorted() {
        assert!(STOPWORDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn counts_across_fields_and_ranks() {
        let c = campaign(
            &["content marketing", "marketing automation"],
            "Marketing teams love automation. The AI era is here.",
        );
        let cloud = word_cloud(&c, 10);
        assert_eq!(cloud[0].word, "marketing");
        assert_eq!(cloud[0].count, 3);
        assert!((cloud[0].weight - 1.0).abs() < f32::EPSILON);
        assert_eq!(cloud[1].word, "automation");
        assert_eq!(cloud[1].count, 2);
        assert!(cloud.iter().all(|w| w.word != "the" && w.word != "ai"));
    }

    #[test]
    fn ties_sort_alphabetically_and_limit_applies() {
        let c = campaign(&["zebra", "apple", "mango"], "");
        let words: Vec<String> = word_cloud(&c, 2).into_iter().map(|w| w.word).collect();
        assert_eq!(words, vec!["apple", "mango"]);
    }

    #[test]
    fn numbers_are_skipped() {
        let c = campaign(&["2026 trends"], "");
        let words: Vec<String> = word_cloud(&c, 10).into_iter().map(|w| w.word).collect();
        assert_eq!(words, vec!["trends"]);
    }

    #[test]
    fn empty_campaign_text_gives_empty_cloud() {
        let mut c = campaign(&["x"], "");
        c.keywords.clear();
        assert!(word_cloud(&c, 10).is_empty());
    }
}
