use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read campaign draft {path}: {source}")]
    DraftFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse campaign draft: {0}")]
    DraftFileParse(#[from] serde_yaml::Error),
}

/// Form validation failures. The `Display` text is the fixed message the
/// dashboard shows in its validation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a campaign name.")]
    MissingName,

    #[error("Please add at least one keyword.")]
    MissingKeywords,

    #[error("Please add at least one URL.")]
    MissingUrls,

    #[error("Please select at least one trending topic.")]
    MissingTrendingTopics,

    #[error("invalid setting {field}: {reason}")]
    InvalidSetting { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("campaign {id} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        id: String,
        from: String,
        to: String,
    },

    #[error("writing sample {path} is empty")]
    EmptySample { path: String },

    #[error("failed to read writing sample {path}: {source}")]
    SampleIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local store I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("local store at {path} is not a JSON object: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
