//! Writing samples and the author profiles built from them.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// A pasted or uploaded piece of writing. Only ever held in memory until it
/// is bundled into an [`AuthorProfileDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingSample {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub is_uploaded: bool,
}

impl WritingSample {
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            file_name: None,
            is_uploaded: false,
        }
    }

    /// Read an uploaded sample from a UTF-8 text file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SampleIo`] if the file cannot be read and
    /// [`CoreError::EmptySample`] if it holds only whitespace.
    pub fn from_file(path: &Path) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path).map_err(|e| CoreError::SampleIo {
            path: path.display().to_string(),
            source: e,
        })?;
        if text.trim().is_empty() {
            return Err(CoreError::EmptySample {
                path: path.display().to_string(),
            });
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            text,
            file_name: path.file_name().map(|n| n.to_string_lossy().into_owned()),
            is_uploaded: true,
        })
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Saved style fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sample_count: usize,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Payload for `createAuthorPersonality`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorProfileDraft {
    pub name: String,
    pub description: String,
    pub samples: Vec<String>,
    pub features: Vec<String>,
}
