use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use assessment_sdk::{CalculationResult, CalculatorKind, LeadIdentity, Theme};
use chrono::Utc;
use dashmap::DashMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::calculators;
use super::error::DomainError;
use super::lead_gate::LeadGate;
use super::page::{AssessmentPage, greeting_for};
use super::repo::{ClientStorage, LeadWebhook, USER_NAME_KEY};
use super::theme::ThemePreference;
use super::widget::CalculatorWidget;

pub const DEFAULT_SCHEDULING_URL: &str = "https://calendly.com/pateljilly1/30min";
pub const DEFAULT_MAX_PAGES: usize = 10_000;
pub const DEFAULT_PAGE_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

pub struct ServiceConfig {
    pub scheduling_url: String,
    pub default_theme: Theme,
    /// Upper bound on mounted pages; the least recently used page is dropped
    /// to make room for a new one.
    pub max_pages: usize,
    /// Pages untouched for this long are dropped on the next mount.
    pub page_idle_ttl: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            scheduling_url: DEFAULT_SCHEDULING_URL.to_owned(),
            default_theme: Theme::Light,
            max_pages: DEFAULT_MAX_PAGES,
            page_idle_ttl: DEFAULT_PAGE_IDLE_TTL,
        }
    }
}

struct PageSlot {
    page: AssessmentPage,
    touched_at: Instant,
    // Use order; breaks `touched_at` ties.
    touched_seq: u64,
}

pub struct Service {
    webhook: Arc<dyn LeadWebhook>,
    storage: Arc<dyn ClientStorage>,
    theme: ThemePreference,
    pages: DashMap<Uuid, PageSlot>,
    clock: AtomicU64,
    config: ServiceConfig,
}

impl Service {
    #[must_use]
    pub fn new(
        webhook: Arc<dyn LeadWebhook>,
        storage: Arc<dyn ClientStorage>,
        config: ServiceConfig,
    ) -> Self {
        let theme = ThemePreference::new(storage.clone(), config.default_theme);
        Self {
            webhook,
            storage,
            theme,
            pages: DashMap::new(),
            clock: AtomicU64::new(0),
            config,
        }
    }

    #[must_use]
    pub fn scheduling_url(&self) -> &str {
        &self.config.scheduling_url
    }

    /// Stateless widget run: fields not listed keep their catalog default.
    /// `Ok(None)` means some field did not parse as an integer.
    ///
    /// # Errors
    /// [`DomainError::UnknownField`] for a field the calculator does not have.
    pub fn calculate(
        &self,
        kind: CalculatorKind,
        inputs: &[(String, String)],
    ) -> Result<Option<CalculationResult>, DomainError> {
        let mut widget = CalculatorWidget::new(kind);
        for (field, text) in inputs {
            widget.update_input(field, text.as_str())?;
        }
        Ok(widget.calculate().cloned())
    }

    /// Validates and delivers one lead, then persists the identity.
    ///
    /// # Errors
    /// [`DomainError::Validation`] for a rejected form,
    /// [`DomainError::SubmissionFailed`] when delivery or persistence fails.
    pub async fn submit_lead(&self, name: &str, email: &str) -> Result<LeadIdentity, DomainError> {
        let mut gate = LeadGate::with_values(name, email);
        let route = gate
            .submit(self.webhook.as_ref(), self.storage.as_ref(), Utc::now())
            .await?;
        debug!(route = route.path(), "lead gate passed");
        Ok(LeadIdentity {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
        })
    }

    /// # Errors
    /// Fails when client storage cannot be read.
    pub async fn greeting(&self) -> Result<String, DomainError> {
        let name = self.storage.get(USER_NAME_KEY).await?;
        Ok(greeting_for(name.as_deref()))
    }

    /// Mounts a page keyed by a fresh id, greeting the stored user if any.
    ///
    /// Idle pages are dropped first; if the registry is still full the least
    /// recently used page makes room.
    ///
    /// # Errors
    /// Fails when client storage cannot be read.
    pub async fn mount_page(&self) -> Result<(Uuid, AssessmentPage), DomainError> {
        let page = AssessmentPage::mount(self.storage.as_ref()).await?;
        self.evict_pages();

        let id = Uuid::new_v4();
        self.pages.insert(
            id,
            PageSlot {
                page: page.clone(),
                touched_at: Instant::now(),
                touched_seq: self.tick(),
            },
        );
        info!(page_id = %id, "assessment page mounted");
        Ok((id, page))
    }

    /// Number of currently mounted pages.
    #[must_use]
    pub fn mounted_pages(&self) -> usize {
        self.pages.len()
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    fn evict_pages(&self) {
        let ttl = self.config.page_idle_ttl;
        let before = self.pages.len();
        self.pages.retain(|_, slot| slot.touched_at.elapsed() < ttl);
        let idle = before.saturating_sub(self.pages.len());
        if idle > 0 {
            debug!(count = idle, "dropped idle assessment pages");
        }

        while self.pages.len() >= self.config.max_pages.max(1) {
            let oldest = self
                .pages
                .iter()
                .min_by_key(|entry| entry.value().touched_seq)
                .map(|entry| *entry.key());
            let Some(id) = oldest else { break };
            self.pages.remove(&id);
            warn!(page_id = %id, "page registry full, dropped least recently used page");
        }
    }

    /// # Errors
    /// [`DomainError::PageNotFound`] for an unknown id.
    pub fn page(&self, id: Uuid) -> Result<AssessmentPage, DomainError> {
        self.with_page(id, |_| Ok(()))
    }

    /// Applies all field updates or none of them.
    ///
    /// # Errors
    /// [`DomainError::UnknownField`] before anything is applied, or
    /// [`DomainError::PageNotFound`].
    pub fn update_inputs(
        &self,
        id: Uuid,
        kind: CalculatorKind,
        inputs: &[(String, String)],
    ) -> Result<AssessmentPage, DomainError> {
        let fields = calculators::fields(kind);
        if let Some((unknown, _)) = inputs
            .iter()
            .find(|(field, _)| !fields.iter().any(|spec| spec.name == field.as_str()))
        {
            return Err(DomainError::unknown_field(kind, unknown.as_str()));
        }

        self.with_page(id, |page| {
            for (field, text) in inputs {
                page.update_input(kind, field, text.as_str())?;
            }
            Ok(())
        })
    }

    /// # Errors
    /// [`DomainError::PageNotFound`] for an unknown id.
    pub fn calculate_widget(
        &self,
        id: Uuid,
        kind: CalculatorKind,
    ) -> Result<AssessmentPage, DomainError> {
        self.with_page(id, |page| {
            page.calculate(kind);
            Ok(())
        })
    }

    /// # Errors
    /// [`DomainError::PageNotFound`] for an unknown id.
    pub fn set_scheduling(&self, id: Uuid, open: bool) -> Result<AssessmentPage, DomainError> {
        self.with_page(id, |page| {
            if open {
                page.open_scheduling();
            } else {
                page.close_scheduling();
            }
            Ok(())
        })
    }

    /// Drops the page together with its results.
    ///
    /// # Errors
    /// [`DomainError::PageNotFound`] for an unknown id.
    pub fn unmount_page(&self, id: Uuid) -> Result<(), DomainError> {
        self.pages
            .remove(&id)
            .map(|_| info!(page_id = %id, "assessment page unmounted"))
            .ok_or(DomainError::PageNotFound(id))
    }

    /// # Errors
    /// Fails when client storage cannot be read.
    pub async fn theme(&self) -> Result<Theme, DomainError> {
        self.theme.current().await
    }

    /// # Errors
    /// Fails when client storage cannot be written.
    pub async fn set_theme(&self, theme: Theme) -> Result<Theme, DomainError> {
        self.theme.set(theme).await
    }

    /// # Errors
    /// Fails when client storage cannot be read or written.
    pub async fn toggle_theme(&self) -> Result<Theme, DomainError> {
        self.theme.toggle().await
    }

    // Mutates under the map's entry lock, marks the page as used and returns
    // a snapshot.
    fn with_page(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut AssessmentPage) -> Result<(), DomainError>,
    ) -> Result<AssessmentPage, DomainError> {
        let mut slot = self
            .pages
            .get_mut(&id)
            .ok_or(DomainError::PageNotFound(id))?;
        let slot = slot.value_mut();
        slot.touched_at = Instant::now();
        slot.touched_seq = self.tick();
        apply(&mut slot.page)?;
        Ok(slot.page.clone())
    }
}
