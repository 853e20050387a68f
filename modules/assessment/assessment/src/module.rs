//! Module declaration for the assessment module.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use assessment_sdk::AssessmentApi;
use tracing::{debug, info};

use crate::config::{AssessmentConfig, StorageKind};
use crate::domain::repo::ClientStorage;
use crate::domain::service::{Service, ServiceConfig};
use crate::infra::storage::{FileStorage, MemoryStorage};
use crate::infra::webhook::HttpLeadWebhook;
use crate::local_client::LocalClient;

/// Assessment module: owns the service and exposes it in-process and over REST.
#[derive(Clone)]
pub struct AssessmentModule {
    service: Arc<Service>,
}

impl AssessmentModule {
    /// Wires storage, the webhook client and the service from configuration.
    ///
    /// # Errors
    /// Fails on an invalid webhook URL, TLS setup errors or when file storage
    /// cannot be opened under `home_dir`.
    pub async fn init(cfg: &AssessmentConfig, home_dir: &Path) -> anyhow::Result<Self> {
        info!("Initializing assessment module");
        debug!(
            storage = ?cfg.storage,
            scheduling_url = %cfg.scheduling_url,
            max_pages = cfg.max_pages,
            page_idle_secs = cfg.page_idle_secs,
            "Loaded assessment config"
        );

        cfg.validate()?;

        let storage: Arc<dyn ClientStorage> = match cfg.storage {
            StorageKind::File => Arc::new(FileStorage::open(home_dir).await?),
            StorageKind::Memory => Arc::new(MemoryStorage::new()),
        };
        let webhook = Arc::new(HttpLeadWebhook::new(&cfg.webhook_url)?);

        let service = Service::new(
            webhook,
            storage,
            ServiceConfig {
                scheduling_url: cfg.scheduling_url.clone(),
                default_theme: cfg.default_theme.into(),
                max_pages: cfg.max_pages,
                page_idle_ttl: Duration::from_secs(cfg.page_idle_secs),
            },
        );

        info!("Assessment module initialized");
        Ok(Self::from_service(Arc::new(service)))
    }

    #[must_use]
    pub fn from_service(service: Arc<Service>) -> Self {
        Self { service }
    }

    /// In-process client of the module.
    #[must_use]
    pub fn client(&self) -> Arc<dyn AssessmentApi> {
        Arc::new(LocalClient::new(self.service.clone()))
    }

    #[must_use]
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering assessment REST routes");
        crate::api::rest::routes::register_routes(router, self.service.clone())
    }

    #[must_use]
    pub fn openapi() -> utoipa::openapi::OpenApi {
        use utoipa::OpenApi;
        crate::api::rest::routes::AssessmentApiDoc::openapi()
    }
}
