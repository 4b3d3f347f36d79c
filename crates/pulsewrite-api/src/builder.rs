//! Campaign build flow.
//!
//! Validate the form, assemble the `analyzeTrends` payload, call the
//! backend, normalize the returned topics and merge the built campaign back
//! into the dashboard's list. A credential failure asks the user for an API
//! key once and retries once; every other failure is terminal.

use chrono::Utc;
use pulsewrite_core::{
    normalize_topics, validate_draft, Campaign, CampaignDraft, CampaignList, LocalStore,
};

use crate::client::BackendClient;
use crate::error::ApiError;
use crate::types::{AnalyzeTrendsRequest, AnalyzeTrendsResponse};

/// Asks the user for an API key after a credential failure.
pub trait CredentialPrompt {
    /// Return the new key, or `None` if the user cancelled.
    fn request_api_key(&mut self, error: &ApiError) -> Option<String>;
}

/// Prompt that always cancels, for non-interactive callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPrompt;

impl CredentialPrompt for NoPrompt {
    fn request_api_key(&mut self, _error: &ApiError) -> Option<String> {
        None
    }
}

/// Flatten a campaign and its four settings groups into the build payload.
#[must_use]
pub fn build_payload(campaign: &Campaign) -> AnalyzeTrendsRequest {
    let s = &campaign.settings;
    AnalyzeTrendsRequest {
        campaign_id: campaign.id.clone(),
        campaign_name: campaign.name.clone(),
        campaign_type: campaign.campaign_type.to_string(),
        description: campaign.description.clone(),
        query: campaign.query.clone(),
        keywords: campaign.keywords.clone(),
        urls: campaign.urls.clone(),
        trending_topics: campaign.trending_topics.clone(),
        depth: s.extraction.depth,
        max_pages: s.extraction.max_pages,
        include_comments: s.extraction.include_comments,
        include_images: s.extraction.include_images,
        language: s.extraction.language.clone(),
        lowercase: s.preprocessing.lowercase,
        remove_stopwords: s.preprocessing.remove_stopwords,
        remove_punctuation: s.preprocessing.remove_punctuation,
        remove_numbers: s.preprocessing.remove_numbers,
        lemmatize: s.preprocessing.lemmatize,
        extract_people: s.entity.extract_people,
        extract_organizations: s.entity.extract_organizations,
        extract_locations: s.entity.extract_locations,
        extract_products: s.entity.extract_products,
        min_confidence: s.entity.min_confidence,
        topic_tool: s.modeling.topic_tool.to_string(),
        num_topics: s.modeling.num_topics,
        min_topic_size: s.modeling.min_topic_size,
        iterations: s.modeling.iterations,
    }
}

pub struct CampaignBuilder<'a> {
    client: &'a mut BackendClient,
    store: Option<&'a mut LocalStore>,
}

impl<'a> CampaignBuilder<'a> {
    pub fn new(client: &'a mut BackendClient) -> Self {
        Self {
            client,
            store: None,
        }
    }

    /// Also publish the built campaign's topics to the content generation
    /// payload in `store`.
    #[must_use]
    pub fn with_store(mut self, store: &'a mut LocalStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Build `campaign` and merge the result into `list`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Validation`] if the campaign form is invalid; no request
    ///   is made.
    /// - Any backend error from `analyzeTrends`. A credential error is only
    ///   returned after the prompt was cancelled or the single retry failed.
    pub async fn build<P>(
        &mut self,
        list: &mut CampaignList,
        mut campaign: Campaign,
        prompt: &mut P,
    ) -> Result<Campaign, ApiError>
    where
        P: CredentialPrompt + ?Sized,
    {
        validate_draft(&CampaignDraft::from_campaign(&campaign))?;
        let payload = build_payload(&campaign);

        tracing::info!(
            campaign_id = %campaign.id,
            campaign_type = %campaign.campaign_type,
            "building campaign"
        );
        let response = self.analyze_with_credential_retry(&payload, prompt).await?;

        let topics = normalize_topics(&response.topics);
        let posts_count = u32::try_from(response.posts.len()).unwrap_or(u32::MAX);
        let previous_id = campaign.id.clone();
        campaign.apply_build_result(response.campaign_id, topics, posts_count, Utc::now());

        list.upsert(campaign.clone(), Some(previous_id.as_str()));

        if let Some(store) = self.store.as_deref_mut() {
            let id = campaign.id.clone();
            let topics = campaign.topics.clone();
            if let Err(e) = store.update_payload(|p| {
                p.campaign_id = Some(id);
                p.topics = topics;
            }) {
                tracing::warn!(error = %e, "failed to update content generation payload");
            }
        }

        tracing::info!(
            campaign_id = %campaign.id,
            topics = campaign.topics.len(),
            posts = campaign.posts_count,
            status = %campaign.status,
            "campaign build complete"
        );
        Ok(campaign)
    }

    async fn analyze_with_credential_retry<P>(
        &mut self,
        payload: &AnalyzeTrendsRequest,
        prompt: &mut P,
    ) -> Result<AnalyzeTrendsResponse, ApiError>
    where
        P: CredentialPrompt + ?Sized,
    {
        match self.client.analyze_trends(payload).await {
            Ok(response) => Ok(response),
            Err(err) if err.is_credential_error() => {
                tracing::warn!(error = %err, "build rejected for credentials; prompting for API key");
                let Some(key) = prompt
                    .request_api_key(&err)
                    .filter(|k| !k.trim().is_empty())
                else {
                    return Err(err);
                };
                self.client.set_api_key(key.trim());
                self.client.analyze_trends(payload).await
            }
            Err(err) => Err(err),
        }
    }
}
