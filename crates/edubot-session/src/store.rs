use async_trait::async_trait;
use edubot_core::{EdubotError, EdubotResult};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Storage key the session client persists its transcript under.
pub const STORAGE_KEY: &str = "edubot-history-v2";

/// A durable key/value slot holding whole JSON documents.
///
/// Saves replace the previous value entirely; the last write wins.
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// Reads the value under `key`, or `None` if nothing was saved.
    async fn load(&self, key: &str) -> EdubotResult<Option<String>>;
    /// Replaces the value under `key`.
    async fn save(&self, key: &str, value: &str) -> EdubotResult<()>;
}

/// File-based store: one `<key>.json` file per key in a directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// reader never sees a half-written document. Each save gets its own
/// temporary file.
pub struct FileTranscriptStore {
    dir: PathBuf,
    next_tmp: AtomicU64,
}

impl FileTranscriptStore {
    /// Opens (and creates if needed) a store rooted at `dir`.
    pub async fn new(dir: impl Into<PathBuf>) -> EdubotResult<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self {
            dir,
            next_tmp: AtomicU64::new(0),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

#[async_trait]
impl TranscriptStore for FileTranscriptStore {
    async fn load(&self, key: &str) -> EdubotResult<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(EdubotError::Storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    async fn save(&self, key: &str, value: &str) -> EdubotResult<()> {
        let path = self.path_for(key);
        let seq = self.next_tmp.fetch_add(1, Ordering::Relaxed);
        let tmp = path.with_extension(format!("json.{}-{seq}.tmp", std::process::id()));
        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| EdubotError::Storage(format!("Failed to write {}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &path).await.map_err(|e| {
            EdubotError::Storage(format!("Failed to replace {}: {e}", path.display()))
        })?;
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryTranscriptStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryTranscriptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with `value` already saved under `key`.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.slots.lock().insert(key.into(), value.into());
        store
    }

    /// Current value under `key`, without going through the async trait.
    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().get(key).cloned()
    }
}

#[async_trait]
impl TranscriptStore for MemoryTranscriptStore {
    async fn load(&self, key: &str) -> EdubotResult<Option<String>> {
        Ok(self.get(key))
    }

    async fn save(&self, key: &str, value: &str) -> EdubotResult<()> {
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
