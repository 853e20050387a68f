use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::repo::ClientStorage;

pub const STORAGE_FILE_NAME: &str = "client-storage.json";

/// Client storage persisted as a flat JSON object in a single file.
///
/// The whole map is cached in memory and rewritten on every `set`; writes go
/// to a sibling temp file first and are renamed into place.
pub struct FileStorage {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Opens `<dir>/client-storage.json`, creating `dir` when missing.
    ///
    /// # Errors
    /// Fails if the directory cannot be created or an existing file is not a
    /// JSON object of strings.
    pub async fn open(dir: &Path) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("failed to create storage dir {}", dir.display()))?;

        let path = dir.join(STORAGE_FILE_NAME);
        let values: BTreeMap<String, String> = match tokio::fs::read(&path).await {
            Ok(raw) => serde_json::from_slice(&raw)
                .with_context(|| format!("corrupt client storage file {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        tracing::debug!(path = %path.display(), entries = values.len(), "client storage opened");

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn flush(&self, values: &BTreeMap<String, String>) -> anyhow::Result<()> {
        let encoded = serde_json::to_vec_pretty(values)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, encoded)
            .await
            .with_context(|| format!("failed to write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

#[async_trait]
impl ClientStorage for FileStorage {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut values = self.values.lock().await;
        let previous = values.insert(key.to_owned(), value.to_owned());
        if let Err(e) = self.flush(&values).await {
            // Keep memory consistent with disk.
            match previous {
                Some(old) => values.insert(key.to_owned(), old),
                None => values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
