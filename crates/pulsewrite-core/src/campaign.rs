//! Campaign model, form validation and lifecycle transitions.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ConfigError, CoreError, ValidationError};
use crate::settings::AdvancedSettings;

/// Prefix for ids assigned locally before the backend has seen the campaign.
pub const TEMP_ID_PREFIX: &str = "temp-";

/// Where a campaign's research seeds come from. Exactly one of the matching
/// lists on [`Campaign`] is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    #[default]
    Keyword,
    Url,
    Trending,
}

impl std::fmt::Display for CampaignType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CampaignType::Keyword => write!(f, "keyword"),
            CampaignType::Url => write!(f, "url"),
            CampaignType::Trending => write!(f, "trending"),
        }
    }
}

impl std::str::FromStr for CampaignType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keyword" | "keywords" => Ok(CampaignType::Keyword),
            "url" | "urls" => Ok(CampaignType::Url),
            "trending" => Ok(CampaignType::Trending),
            other => Err(format!(
                "unknown campaign type '{other}'; expected keyword, url or trending"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    #[default]
    Incomplete,
    ReadyToActivate,
    Active,
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CampaignStatus::Incomplete => write!(f, "INCOMPLETE"),
            CampaignStatus::ReadyToActivate => write!(f, "READY_TO_ACTIVATE"),
            CampaignStatus::Active => write!(f, "ACTIVE"),
        }
    }
}

/// Contents of the campaign form before it is submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CampaignDraft {
    pub name: String,
    pub description: String,
    pub query: String,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    pub keywords: Vec<String>,
    pub urls: Vec<String>,
    pub trending_topics: Vec<String>,
    #[serde(flatten)]
    pub settings: AdvancedSettings,
}

impl CampaignDraft {
    /// Load a draft from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed. The draft
    /// is not validated here; see [`validate_draft`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DraftFileIo {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Pre-fill the form from an existing campaign, as the edit dialog does.
    #[must_use]
    pub fn from_campaign(campaign: &Campaign) -> Self {
        Self {
            name: campaign.name.clone(),
            description: campaign.description.clone(),
            query: campaign.query.clone(),
            campaign_type: campaign.campaign_type,
            keywords: campaign.keywords.clone(),
            urls: campaign.urls.clone(),
            trending_topics: campaign.trending_topics.clone(),
            settings: campaign.settings.clone(),
        }
    }
}

fn has_entries(list: &[String]) -> bool {
    list.iter().any(|s| !s.trim().is_empty())
}

fn clean(list: &[String]) -> Vec<String> {
    list.iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Validate the campaign form.
///
/// The name is checked first, then the list matching the campaign type,
/// then the advanced settings ranges.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate_draft(draft: &CampaignDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    match draft.campaign_type {
        CampaignType::Keyword if !has_entries(&draft.keywords) => {
            return Err(ValidationError::MissingKeywords)
        }
        CampaignType::Url if !has_entries(&draft.urls) => return Err(ValidationError::MissingUrls),
        CampaignType::Trending if !has_entries(&draft.trending_topics) => {
            return Err(ValidationError::MissingTrendingTopics)
        }
        _ => {}
    }
    draft.settings.validate()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub query: String,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub trending_topics: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    /// Number of posts the last build produced.
    #[serde(default)]
    pub posts_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(flatten)]
    pub settings: AdvancedSettings,
}

impl Campaign {
    /// Create a campaign from a submitted form with a temporary client id.
    ///
    /// Lists that do not belong to the selected type are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the draft fails [`validate_draft`].
    pub fn from_draft(draft: CampaignDraft, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        validate_draft(&draft)?;
        let mut campaign = Self {
            id: format!("{TEMP_ID_PREFIX}{}", Uuid::new_v4()),
            name: String::new(),
            description: String::new(),
            query: String::new(),
            campaign_type: draft.campaign_type,
            keywords: Vec::new(),
            urls: Vec::new(),
            trending_topics: Vec::new(),
            topics: Vec::new(),
            posts_count: 0,
            created_at: now,
            updated_at: now,
            status: CampaignStatus::Incomplete,
            settings: AdvancedSettings::default(),
        };
        campaign.copy_form_fields(draft);
        Ok(campaign)
    }

    /// Apply the edit form to an existing campaign.
    ///
    /// Id, creation time, topics and status are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the draft fails [`validate_draft`];
    /// the campaign is left untouched in that case.
    pub fn apply_edit(
        &mut self,
        draft: CampaignDraft,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        validate_draft(&draft)?;
        self.copy_form_fields(draft);
        self.updated_at = now;
        Ok(())
    }

    fn copy_form_fields(&mut self, draft: CampaignDraft) {
        self.name = draft.name.trim().to_string();
        self.description = draft.description.trim().to_string();
        self.query = draft.query.trim().to_string();
        self.campaign_type = draft.campaign_type;
        self.keywords.clear();
        self.urls.clear();
        self.trending_topics.clear();
        match draft.campaign_type {
            CampaignType::Keyword => self.keywords = clean(&draft.keywords),
            CampaignType::Url => self.urls = clean(&draft.urls),
            CampaignType::Trending => self.trending_topics = clean(&draft.trending_topics),
        }
        self.settings = draft.settings;
    }

    /// Record the outcome of a successful backend build.
    ///
    /// A server-assigned id replaces the temporary one. The status becomes
    /// `READY_TO_ACTIVATE` when the build produced topics or posts, and
    /// falls back to `INCOMPLETE` otherwise. An `ACTIVE` campaign stays
    /// active when the rebuild produced content.
    pub fn apply_build_result(
        &mut self,
        server_id: Option<String>,
        topics: Vec<String>,
        posts_count: u32,
        now: DateTime<Utc>,
    ) {
        if let Some(id) = server_id.filter(|id| !id.trim().is_empty()) {
            self.id = id;
        }
        self.topics = topics;
        self.posts_count = posts_count;
        let has_content = !self.topics.is_empty() || self.posts_count > 0;
        self.status = match (self.status, has_content) {
            (_, false) => CampaignStatus::Incomplete,
            (CampaignStatus::Active, true) => CampaignStatus::Active,
            (_, true) => CampaignStatus::ReadyToActivate,
        };
        self.updated_at = now;
    }

    /// Move a built campaign to `ACTIVE`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidStatusTransition`] unless the campaign is
    /// `READY_TO_ACTIVATE`.
    pub fn activate(&mut self, now: DateTime<Utc>) -> Result<(), CoreError> {
        if self.status != CampaignStatus::ReadyToActivate {
            return Err(CoreError::InvalidStatusTransition {
                id: self.id.clone(),
                from: self.status.to_string(),
                to: CampaignStatus::Active.to_string(),
            });
        }
        self.status = CampaignStatus::Active;
        self.updated_at = now;
        Ok(())
    }

    /// `true` while the campaign only has a client-assigned id.
    #[must_use]
    pub fn is_temporary(&self) -> bool {
        self.id.starts_with(TEMP_ID_PREFIX)
    }

    /// The seed list for the campaign's type.
    #[must_use]
    pub fn source_terms(&self) -> &[String] {
        match self.campaign_type {
            CampaignType::Keyword => &self.keywords,
            CampaignType::Url => &self.urls,
            CampaignType::Trending => &self.trending_topics,
        }
    }
}

#[cfg(test)]
#[path = "campaign_test.rs"]
mod tests;
