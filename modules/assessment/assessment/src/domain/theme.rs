use std::sync::Arc;

use assessment_sdk::Theme;
use tracing::debug;

use super::error::DomainError;
use super::repo::{ClientStorage, THEME_KEY};

/// Light/dark preference persisted in client storage.
#[derive(Clone)]
pub struct ThemePreference {
    storage: Arc<dyn ClientStorage>,
    default: Theme,
}

impl ThemePreference {
    #[must_use]
    pub fn new(storage: Arc<dyn ClientStorage>, default: Theme) -> Self {
        Self { storage, default }
    }

    /// Stored theme, or the configured default when missing or unrecognised.
    ///
    /// # Errors
    /// Returns [`DomainError::Storage`] if the storage read fails.
    pub async fn current(&self) -> Result<Theme, DomainError> {
        let stored = self.storage.get(THEME_KEY).await?;
        Ok(stored
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or(self.default))
    }

    /// # Errors
    /// Returns [`DomainError::Storage`] if the storage write fails.
    pub async fn set(&self, theme: Theme) -> Result<Theme, DomainError> {
        self.storage.set(THEME_KEY, theme.as_str()).await?;
        debug!(theme = theme.as_str(), "theme updated");
        Ok(theme)
    }

    /// # Errors
    /// Returns [`DomainError::Storage`] if reading or writing fails.
    pub async fn toggle(&self) -> Result<Theme, DomainError> {
        let next = self.current().await?.toggled();
        self.set(next).await
    }
}
