use serde::Serialize;

/// One word of the word cloud. `weight` is `count / max_count` in `(0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordWeight {
    pub word: String,
    pub count: usize,
    pub weight: f32,
}

/// Share of positive, negative and neutral tokens, in whole percent.
///
/// The three percentages always sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentBreakdown {
    pub positive: u8,
    pub negative: u8,
    pub neutral: u8,
    /// Summed lexicon weight, clamped to `[-1.0, 1.0]`.
    pub score: f32,
    /// Lexicon words found in the campaign text, in first-seen order.
    pub matched: Vec<String>,
}

impl SentimentBreakdown {
    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.score > 0.05 {
            "positive"
        } else if self.score < -0.05 {
            "negative"
        } else {
            "neutral"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicNode {
    pub name: String,
    /// Display relevance in `[0, 1]`, jittered.
    pub relevance: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub name: String,
    pub mentions: usize,
}

/// Undirected co-occurrence edge; `source < target` lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub weight: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KnowledgeGraph {
    pub entities: Vec<Entity>,
    pub edges: Vec<GraphEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hashtag {
    pub tag: String,
    /// Display popularity in `[0, 1]`, jittered.
    pub score: f32,
}
