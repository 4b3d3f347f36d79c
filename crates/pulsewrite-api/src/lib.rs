//! Typed client for the content-dashboard backend.
//!
//! Wraps the campaign CRUD endpoints and the analysis operations
//! (`analyzeTrends`, `getTrendingContent`, `getUserCredentials`,
//! `createAuthorPersonality`), and orchestrates the campaign build flow on
//! top of them.

pub mod builder;
pub mod client;
pub mod error;
pub mod types;

pub use builder::{build_payload, CampaignBuilder, CredentialPrompt, NoPrompt};
pub use client::BackendClient;
pub use error::ApiError;
pub use types::{AnalyzeTrendsRequest, AnalyzeTrendsResponse, UserCredentials};
