use assessment_sdk::{
    AssessmentApi, AssessmentError, CalculationResult, CalculatorKind, LeadIdentity, Theme,
};
use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::service::Service;

pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AssessmentApi for LocalClient {
    async fn calculate(
        &self,
        kind: CalculatorKind,
        inputs: &[(String, String)],
    ) -> Result<Option<CalculationResult>, AssessmentError> {
        self.service.calculate(kind, inputs).map_err(Into::into)
    }

    async fn submit_lead(&self, name: &str, email: &str) -> Result<LeadIdentity, AssessmentError> {
        self.service
            .submit_lead(name, email)
            .await
            .map_err(Into::into)
    }

    async fn greeting(&self) -> Result<String, AssessmentError> {
        self.service.greeting().await.map_err(Into::into)
    }

    async fn theme(&self) -> Result<Theme, AssessmentError> {
        self.service.theme().await.map_err(Into::into)
    }
}
