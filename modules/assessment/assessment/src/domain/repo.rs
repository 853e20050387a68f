use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Client storage keys.
pub const USER_NAME_KEY: &str = "userName";
pub const USER_EMAIL_KEY: &str = "userEmail";
pub const THEME_KEY: &str = "theme";

/// Process-wide key/value storage for client state. Values never expire.
#[async_trait]
pub trait ClientStorage: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// A validated lead ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub timestamp: DateTime<Utc>,
}

/// Why a webhook delivery did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("webhook rejected submission with status {0}")]
    Rejected(u16),

    #[error("webhook transport error: {0}")]
    Transport(String),
}

/// Outbound delivery of lead submissions. Single attempt, no retries.
#[async_trait]
pub trait LeadWebhook: Send + Sync {
    async fn deliver(&self, submission: &LeadSubmission) -> Result<(), DeliveryError>;
}
