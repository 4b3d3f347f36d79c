//! HTTP client for the dashboard backend.
//!
//! Wraps `reqwest` with API-key handling, typed request/response bodies and
//! error classification. Every call is a single attempt: there is no retry
//! policy, failures are reported to the caller.

use std::time::Duration;

use pulsewrite_core::{AppConfig, AuthorProfile, AuthorProfileDraft, Campaign};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::types::{
    AnalyzeTrendsRequest, AnalyzeTrendsResponse, ErrorBody, TrendingContentResponse,
    UserCredentials,
};

const API_KEY_HEADER: &str = "X-API-Key";

/// Client for the backend REST API.
///
/// Use [`BackendClient::new`] with the loaded [`AppConfig`], or
/// [`BackendClient::with_base_url`] to point at a mock server in tests.
pub struct BackendClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl BackendClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`ApiError::InvalidBaseUrl`] if the configured URL is unusable.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        Self::with_base_url(
            &config.api_base_url,
            config.api_key.as_deref(),
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`ApiError::InvalidBaseUrl`] if `base_url` does not parse or cannot
    /// carry a path.
    pub fn with_base_url(
        base_url: &str,
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // One trailing slash so path segments append instead of replacing
        // the last segment of a prefixed base such as `https://host/backend`.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            api_key: api_key.map(str::to_owned),
        })
    }

    /// Replace the API key sent with every subsequent request.
    pub fn set_api_key(&mut self, api_key: &str) {
        self.api_key = Some(api_key.to_owned());
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// `GET /api/campaigns`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status, or an
    /// unexpected body.
    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        let url = self.endpoint(&["api", "campaigns"]);
        self.send_json(self.request(Method::GET, url), "listCampaigns")
            .await
    }

    /// `POST /api/campaigns`. Returns the campaign as stored by the backend,
    /// usually with a server-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status, or an
    /// unexpected body.
    pub async fn create_campaign(&self, campaign: &Campaign) -> Result<Campaign, ApiError> {
        let url = self.endpoint(&["api", "campaigns"]);
        let created: Campaign = self
            .send_json(
                self.request(Method::POST, url).json(campaign),
                "createCampaign",
            )
            .await?;
        tracing::info!(campaign_id = %created.id, name = %created.name, "campaign created");
        Ok(created)
    }

    /// `PUT /api/campaigns/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status, or an
    /// unexpected body.
    pub async fn update_campaign(&self, campaign: &Campaign) -> Result<Campaign, ApiError> {
        let url = self.endpoint(&["api", "campaigns", campaign.id.as_str()]);
        self.send_json(
            self.request(Method::PUT, url).json(campaign),
            &format!("updateCampaign(id={})", campaign.id),
        )
        .await
    }

    /// `DELETE /api/campaigns/{id}`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure or a non-2xx status.
    pub async fn delete_campaign(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "campaigns", id]);
        let response = self.request(Method::DELETE, url).send().await?;
        Self::check_status(response).await?;
        tracing::info!(campaign_id = %id, "campaign deleted");
        Ok(())
    }

    /// `POST /api/analyze-trends`: run extraction and topic modeling for a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status, or an
    /// unexpected body.
    pub async fn analyze_trends(
        &self,
        request: &AnalyzeTrendsRequest,
    ) -> Result<AnalyzeTrendsResponse, ApiError> {
        let url = self.endpoint(&["api", "analyze-trends"]);
        self.send_json(
            self.request(Method::POST, url).json(request),
            &format!("analyzeTrends(campaign={})", request.campaign_name),
        )
        .await
    }

    /// `GET /api/trending-content?limit=N`: current trending topics on X.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status, or an
    /// unexpected body.
    pub async fn get_trending_content(&self, limit: usize) -> Result<Vec<String>, ApiError> {
        let mut url = self.endpoint(&["api", "trending-content"]);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        let body: TrendingContentResponse = self
            .send_json(self.request(Method::GET, url), "getTrendingContent")
            .await?;
        Ok(body.topics)
    }

    /// `GET /api/user/credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status, or an
    /// unexpected body.
    pub async fn get_user_credentials(&self) -> Result<UserCredentials, ApiError> {
        let url = self.endpoint(&["api", "user", "credentials"]);
        self.send_json(self.request(Method::GET, url), "getUserCredentials")
            .await
    }

    /// `POST /api/author-personalities`: persist a profile built from writing samples.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status, or an
    /// unexpected body.
    pub async fn create_author_personality(
        &self,
        draft: &AuthorProfileDraft,
    ) -> Result<AuthorProfile, ApiError> {
        let url = self.endpoint(&["api", "author-personalities"]);
        let profile: AuthorProfile = self
            .send_json(
                self.request(Method::POST, url).json(draft),
                &format!("createAuthorPersonality(name={})", draft.name),
            )
            .await?;
        tracing::info!(author_id = %profile.id, name = %profile.name, "author profile saved");
        Ok(profile)
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base URLs are rejected at construction.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        }
    }

    /// Sends the request, maps non-2xx statuses to [`ApiError::Status`] and
    /// parses the body as `T`.
    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        context: &str,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }

    /// Returns the response unchanged on 2xx; otherwise extracts the
    /// backend's error message.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                } else {
                    body.trim().to_string()
                }
            });
        tracing::warn!(status = status.as_u16(), message = %message, "backend request failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
