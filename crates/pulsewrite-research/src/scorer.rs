//! Lexicon sentiment for the research assistant's sentiment panel.

use pulsewrite_core::Campaign;

use crate::types::SentimentBreakdown;
use crate::words::{campaign_text, tokenize};

/// Marketing-copy word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("amazing", 0.5),
    ("best", 0.5),
    ("boost", 0.3),
    ("easy", 0.3),
    ("effective", 0.4),
    ("engaging", 0.4),
    ("excellent", 0.5),
    ("exciting", 0.4),
    ("good", 0.3),
    ("great", 0.4),
    ("grow", 0.3),
    ("growth", 0.3),
    ("innovative", 0.4),
    ("love", 0.5),
    ("opportunity", 0.3),
    ("popular", 0.3),
    ("positive", 0.4),
    ("success", 0.5),
    ("successful", 0.5),
    ("trusted", 0.4),
    ("win", 0.4),
    // Negative signals
    ("bad", -0.4),
    ("boring", -0.4),
    ("concern", -0.3),
    ("crisis", -0.6),
    ("decline", -0.4),
    ("difficult", -0.3),
    ("fail", -0.4),
    ("failed", -0.4),
    ("failure", -0.4),
    ("hate", -0.6),
    ("loss", -0.4),
    ("negative", -0.4),
    ("poor", -0.4),
    ("problem", -0.3),
    ("risk", -0.3),
    ("scam", -0.7),
    ("terrible", -0.6),
    ("threat", -0.5),
    ("worst", -0.6),
];

fn weight_of(word: &str) -> Option<f32> {
    LEXICON
        .iter()
        .find(|(lex_word, _)| *lex_word == word)
        .map(|&(_, weight)| weight)
}

/// Score a text string using the lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    tokenize(text)
        .filter_map(|w| weight_of(&w))
        .sum::<f32>()
        .clamp(-1.0, 1.0)
}

/// Sentiment breakdown over the campaign's topics, source terms and
/// description.
#[must_use]
pub fn sentiment(campaign: &Campaign) -> SentimentBreakdown {
    let mut total = 0usize;
    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut score = 0.0_f32;
    let mut matched: Vec<String> = Vec::new();

    for text in campaign_text(campaign) {
        for word in tokenize(text) {
            total += 1;
            let Some(weight) = weight_of(&word) else {
                continue;
            };
            score += weight;
            if weight > 0.0 {
                positive += 1;
            } else {
                negative += 1;
            }
            if !matched.contains(&word) {
                matched.push(word);
            }
        }
    }

    if total == 0 {
        return SentimentBreakdown {
            positive: 0,
            negative: 0,
            neutral: 100,
            score: 0.0,
            matched,
        };
    }

    let positive_pct = percent(positive, total);
    let negative_pct = percent(negative, total).min(100 - positive_pct);
    SentimentBreakdown {
        positive: positive_pct,
        negative: negative_pct,
        neutral: 100 - positive_pct - negative_pct,
        score: score.clamp(-1.0, 1.0),
        matched,
    }
}

/// `part / total` in whole percent, rounded half up.
fn percent(part: usize, total: usize) -> u8 {
    let pct = (part * 200 + total) / (2 * total);
    u8::try_from(pct.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pulsewrite_core::CampaignDraft;

    use super::*;

    fn campaign(keyword: &str, description: &str) -> Campaign {
        let draft = CampaignDraft {
            name: "Mood".to_string(),
            description: description.to_string(),
            keywords: vec![keyword.to_string()],
            ..CampaignDraft::default()
        };
        Campaign::from_draft(draft, Utc::now()).unwrap()
    }

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(lexicon_score(""), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(lexicon_score("the quick brown fox"), 0.0);
    }

    #[test]
    fn positive_and_negative_keywords() {
        assert!(lexicon_score("an amazing launch") > 0.0);
        assert!(lexicon_score("a terrible quarter") < 0.0);
    }

    #[test]
    fn score_clamps_to_bounds() {
        let up = "amazing best excellent love success successful";
        let down = "scam crisis hate terrible worst threat";
        assert_eq!(lexicon_score(up), 1.0);
        assert_eq!(lexicon_score(down), -1.0);
    }

    #[test]
    fn punctuation_stripped_from_words() {
        assert!(lexicon_score("Great!") > 0.0);
    }

    #[test]
    fn breakdown_sums_to_one_hundred() {
        // 7 tokens, 2 positive, 1 negative.
        let s = sentiment(&campaign("campaign", "great growth despite one big problem"));
        assert_eq!(s.positive + s.negative + s.neutral, 100);
        assert_eq!(s.positive, 29);
        assert_eq!(s.negative, 14);
        assert_eq!(s.matched, vec!["great", "growth", "problem"]);
        assert!(s.score > 0.0);
        assert_eq!(s.label(), "positive");
    }

    #[test]
    fn rounding_never_exceeds_one_hundred() {
        // 1 positive, 7 negative out of 8 tokens: 12.5% and 87.5%.
        let s = sentiment(&campaign("love", "bad poor hate scam loss risk terrible"));
        assert_eq!(s.positive, 13);
        assert_eq!(s.positive + s.negative + s.neutral, 100);
        assert_eq!(s.neutral, 0);
    }

    #[test]
    fn neutral_text_is_all_neutral() {
        let s = sentiment(&campaign("campaign", "quarterly planning notes"));
        assert_eq!(s.neutral, 100);
        assert!(s.matched.is_empty());
        assert_eq!(s.label(), "neutral");
    }
}
