//! Domain model and local state for the pulsewrite content dashboard.
//!
//! Holds the campaign/author/queue types shared by the API client, the
//! research panels, and the CLI, plus environment configuration and the
//! local JSON store that stands in for the browser's `localStorage`.

mod app_config;
pub mod author;
pub mod campaign;
pub mod campaign_list;
mod config;
pub mod error;
pub mod local_store;
pub mod mimicry;
pub mod queue;
pub mod settings;
pub mod topics;

pub use app_config::{AppConfig, Environment};
pub use author::{AuthorProfile, AuthorProfileDraft, WritingSample};
pub use campaign::{validate_draft, Campaign, CampaignDraft, CampaignStatus, CampaignType};
pub use campaign_list::CampaignList;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use local_store::{
    AuthorRef, ContentGenerationPayload, LocalStore, CONTENT_GENERATION_PAYLOAD_KEY,
    CONTENT_QUEUE_KEY,
};
pub use mimicry::{MimicryError, MimicryStage, MimicryWorkflow, StageProgress, StyleFeature};
pub use queue::{ContentQueue, QueueItem, QueueSink};
pub use settings::{
    AdvancedSettings, EntitySettings, ExtractionSettings, ModelingSettings,
    PreprocessingSettings, TopicTool,
};
pub use topics::{normalize_topics, title_case};
