use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::repo::ClientStorage;

/// Process-lifetime storage; contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: DashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStorage for MemoryStorage {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
