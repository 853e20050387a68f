use assessment_sdk::Theme;
use serde::{Deserialize, Serialize};

use crate::domain::service::{DEFAULT_MAX_PAGES, DEFAULT_PAGE_IDLE_TTL, DEFAULT_SCHEDULING_URL};
use crate::infra::webhook::DEFAULT_WEBHOOK_URL;

/// Where client storage (`userName`, `userEmail`, `theme`) lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// JSON file under the server home directory.
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    #[default]
    Light,
    Dark,
}

impl From<ThemeSetting> for Theme {
    fn from(setting: ThemeSetting) -> Self {
        match setting {
            ThemeSetting::Light => Theme::Light,
            ThemeSetting::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssessmentConfig {
    #[serde(default = "default_webhook_url")]
    pub webhook_url: String,
    #[serde(default = "default_scheduling_url")]
    pub scheduling_url: String,
    #[serde(default)]
    pub storage: StorageKind,
    #[serde(default)]
    pub default_theme: ThemeSetting,
    /// Most widget pages mounted at once; the least recently used is dropped.
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
    /// Pages untouched for this long are dropped on the next mount.
    #[serde(default = "default_page_idle_secs")]
    pub page_idle_secs: u64,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            webhook_url: default_webhook_url(),
            scheduling_url: default_scheduling_url(),
            storage: StorageKind::default(),
            default_theme: ThemeSetting::default(),
            max_pages: default_max_pages(),
            page_idle_secs: default_page_idle_secs(),
        }
    }
}

fn default_webhook_url() -> String {
    DEFAULT_WEBHOOK_URL.to_owned()
}

fn default_scheduling_url() -> String {
    DEFAULT_SCHEDULING_URL.to_owned()
}

fn default_max_pages() -> usize {
    DEFAULT_MAX_PAGES
}

fn default_page_idle_secs() -> u64 {
    DEFAULT_PAGE_IDLE_TTL.as_secs()
}

impl AssessmentConfig {
    /// Checks that the webhook URL is an absolute `http`/`https` URL with a host
    /// and that the page registry can hold at least one page.
    ///
    /// # Errors
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_pages == 0 {
            anyhow::bail!("assessment.max_pages must be at least 1");
        }
        let url = url::Url::parse(&self.webhook_url)
            .map_err(|e| anyhow::anyhow!("assessment.webhook_url '{}': {e}", self.webhook_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!(
                "assessment.webhook_url must use http or https, got '{}'",
                url.scheme()
            );
        }
        if url.host_str().is_none_or(str::is_empty) {
            anyhow::bail!("assessment.webhook_url has no host");
        }
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production_endpoints() {
        let cfg = AssessmentConfig::default();
        assert!(cfg.webhook_url.starts_with("https://hook.us2.make.com/"));
        assert_eq!(cfg.scheduling_url, "https://calendly.com/pateljilly1/30min");
        assert_eq!(cfg.storage, StorageKind::File);
        assert_eq!(Theme::from(cfg.default_theme), Theme::Light);
        cfg.validate().unwrap();
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: AssessmentConfig =
            serde_json::from_str(r#"{"storage":"memory","default_theme":"dark"}"#).unwrap();
        assert_eq!(cfg.storage, StorageKind::Memory);
        assert_eq!(cfg.default_theme, ThemeSetting::Dark);
        assert_eq!(cfg.webhook_url, DEFAULT_WEBHOOK_URL);
        assert_eq!(cfg.max_pages, DEFAULT_MAX_PAGES);
        assert_eq!(cfg.page_idle_secs, 1800);
    }

    #[test]
    fn page_limits_are_configurable() {
        let cfg: AssessmentConfig =
            serde_json::from_str(r#"{"max_pages":50,"page_idle_secs":60}"#).unwrap();
        assert_eq!(cfg.max_pages, 50);
        assert_eq!(cfg.page_idle_secs, 60);
        cfg.validate().unwrap();

        let empty = AssessmentConfig {
            max_pages: 0,
            ..AssessmentConfig::default()
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_webhook_urls() {
        for url in ["not a url", "ftp://example.com/hook", "file:///tmp/hook"] {
            let cfg = AssessmentConfig {
                webhook_url: url.to_owned(),
                ..AssessmentConfig::default()
            };
            assert!(cfg.validate().is_err(), "{url} should be rejected");
        }
    }
}
