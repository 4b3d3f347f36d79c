//! File-backed key/value store standing in for the browser's `localStorage`.
//!
//! Unrelated parts of the dashboard pass their current selection (active
//! author, trending topic) through a single JSON blob under
//! [`CONTENT_GENERATION_PAYLOAD_KEY`]. Writes are read-modify-write of the
//! whole file with no locking; the store assumes a single user.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::queue::ContentQueue;

pub const CONTENT_GENERATION_PAYLOAD_KEY: &str = "contentGenerationPayload";
pub const CONTENT_QUEUE_KEY: &str = "contentQueue";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub id: String,
    pub name: String,
}

/// Cross-component selection handed to content generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentGenerationPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending_topic: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    /// Keys written by other parts of the app, preserved untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl LocalStore {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read and
    /// [`StoreError::Corrupt`] if it is not a JSON object.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let entries = match std::fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => Map::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
                path: path.display().to_string(),
                source: e,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the value under `key`. A value that no longer matches
    /// `T` is logged and treated as absent.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unreadable local store entry");
                None
            }
        }
    }

    /// Store `value` under `key` and flush the file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] if `value` cannot be serialized and
    /// [`StoreError::Io`] if the file cannot be written.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let encoded = serde_json::to_value(value).map_err(|e| StoreError::Encode {
            key: key.to_string(),
            source: e,
        })?;
        self.entries.insert(key.to_string(), encoded);
        self.flush()
    }

    /// Remove `key`, returning whether it was present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be written.
    pub fn remove(&mut self, key: &str) -> Result<bool, StoreError> {
        let existed = self.entries.remove(key).is_some();
        if existed {
            self.flush()?;
        }
        Ok(existed)
    }

    #[must_use]
    pub fn load_payload(&self) -> ContentGenerationPayload {
        self.get(CONTENT_GENERATION_PAYLOAD_KEY).unwrap_or_default()
    }

    /// Read-modify-write the content generation payload.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the updated payload cannot be persisted.
    pub fn update_payload<F>(&mut self, update: F) -> Result<ContentGenerationPayload, StoreError>
    where
        F: FnOnce(&mut ContentGenerationPayload),
    {
        let mut payload = self.load_payload();
        update(&mut payload);
        self.set(CONTENT_GENERATION_PAYLOAD_KEY, &payload)?;
        Ok(payload)
    }

    #[must_use]
    pub fn load_queue(&self) -> ContentQueue {
        self.get(CONTENT_QUEUE_KEY).unwrap_or_default()
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the queue cannot be persisted.
    pub fn save_queue(&mut self, queue: &ContentQueue) -> Result<(), StoreError> {
        self.set(CONTENT_QUEUE_KEY, queue)
    }

    fn flush(&self) -> Result<(), StoreError> {
        let io_err = |e: std::io::Error| StoreError::Io {
            path: self.path.display().to_string(),
            source: e,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let body = serde_json::to_string_pretty(&self.entries).map_err(|e| StoreError::Encode {
            key: "*".to_string(),
            source: e,
        })?;
        std::fs::write(&self.path, body).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::queue::{QueueItem, QueueSink};

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("pulsewrite-store-{}", Uuid::new_v4()))
            .join("local_storage.json")
    }

    #[test]
    fn missing_file_opens_empty() {
        let store = LocalStore::open(&temp_path()).unwrap();
        assert_eq!(store.load_payload(), ContentGenerationPayload::default());
        assert!(store.load_queue().is_empty());
    }

    #[test]
    fn payload_round_trips_through_file() {
        let path = temp_path();
        let mut store = LocalStore::open(&path).unwrap();
        store
            .update_payload(|p| {
                p.author = Some(AuthorRef {
                    id: "a1".to_string(),
                    name: "Brand Voice".to_string(),
                });
            })
            .unwrap();
        store
            .update_payload(|p| p.trending_topic = Some("AI Agents".to_string()))
            .unwrap();

        let reopened = LocalStore::open(&path).unwrap();
        let payload = reopened.load_payload();
        assert_eq!(payload.author.unwrap().name, "Brand Voice");
        assert_eq!(payload.trending_topic.as_deref(), Some("AI Agents"));
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn unknown_payload_keys_are_preserved() {
        let path = temp_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            r#"{"contentGenerationPayload": {"tone": "playful", "trendingTopic": "Web3"}}"#,
        )
        .unwrap();

        let mut store = LocalStore::open(&path).unwrap();
        store
            .update_payload(|p| p.topics = vec!["Tech".to_string()])
            .unwrap();

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let payload = &raw[CONTENT_GENERATION_PAYLOAD_KEY];
        assert_eq!(payload["tone"], "playful");
        assert_eq!(payload["trendingTopic"], "Web3");
        assert_eq!(payload["topics"][0], "Tech");
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn corrupt_payload_value_reads_as_default() {
        let path = temp_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"contentGenerationPayload": "not an object"}"#).unwrap();
        let store = LocalStore::open(&path).unwrap();
        assert_eq!(store.load_payload(), ContentGenerationPayload::default());
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn non_object_file_is_corrupt() {
        let path = temp_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        let err = LocalStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn queue_persists_and_remove_key() {
        let path = temp_path();
        let mut store = LocalStore::open(&path).unwrap();
        let mut queue = store.load_queue();
        queue.push(QueueItem::new("hashtag", "#Ai", "research"));
        store.save_queue(&queue).unwrap();

        let mut reopened = LocalStore::open(&path).unwrap();
        assert_eq!(reopened.load_queue().len(), 1);
        assert!(reopened.remove(CONTENT_QUEUE_KEY).unwrap());
        assert!(!reopened.remove(CONTENT_QUEUE_KEY).unwrap());
        assert!(LocalStore::open(&path).unwrap().load_queue().is_empty());
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
