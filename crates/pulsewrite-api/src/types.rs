//! Request and response shapes for the backend endpoints.
//!
//! The backend speaks snake_case JSON. Campaign bodies reuse the dashboard's
//! own [`pulsewrite_core::Campaign`] shape.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// analyzeTrends
// ---------------------------------------------------------------------------

/// Flattened build payload for `analyzeTrends`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeTrendsRequest {
    pub campaign_id: String,
    pub campaign_name: String,
    pub campaign_type: String,
    pub description: String,
    pub query: String,
    pub keywords: Vec<String>,
    pub urls: Vec<String>,
    pub trending_topics: Vec<String>,
    // extraction
    pub depth: u8,
    pub max_pages: u32,
    pub include_comments: bool,
    pub include_images: bool,
    pub language: String,
    // preprocessing
    pub lowercase: bool,
    pub remove_stopwords: bool,
    pub remove_punctuation: bool,
    pub remove_numbers: bool,
    pub lemmatize: bool,
    // entity recognition
    pub extract_people: bool,
    pub extract_organizations: bool,
    pub extract_locations: bool,
    pub extract_products: bool,
    pub min_confidence: f32,
    // topic modeling
    pub topic_tool: String,
    pub num_topics: u32,
    pub min_topic_size: u32,
    pub iterations: u32,
}

/// Result of a build. Topics may arrive comma-joined and need
/// [`pulsewrite_core::normalize_topics`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeTrendsResponse {
    #[serde(default, alias = "id")]
    pub campaign_id: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub posts: Vec<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// getTrendingContent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendingContentResponse {
    #[serde(default, alias = "trends")]
    pub topics: Vec<String>,
}

// ---------------------------------------------------------------------------
// getUserCredentials
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserCredentials {
    #[serde(default)]
    pub has_api_key: bool,
    /// Masked key as displayed by the backend, e.g. `"sk-...9f2c"`.
    #[serde(default)]
    pub api_key_preview: Option<String>,
    #[serde(default)]
    pub providers: Vec<String>,
}

// ---------------------------------------------------------------------------
// errors
// ---------------------------------------------------------------------------

/// Error body the backend returns on non-2xx responses. Different handlers
/// use different field names.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        self.error.or(self.message).or(self.detail)
    }
}
