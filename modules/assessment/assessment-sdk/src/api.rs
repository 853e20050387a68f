//! `AssessmentApi` trait definition.
//!
//! This trait defines the in-process API of the assessment module.

use async_trait::async_trait;

use crate::errors::AssessmentError;
use crate::models::{CalculationResult, CalculatorKind, LeadIdentity, Theme};

/// Public API trait for the assessment module.
///
/// ```ignore
/// let client = module.client();
/// let identity = client.submit_lead("Alice", "alice@example.com").await?;
/// ```
#[async_trait]
pub trait AssessmentApi: Send + Sync {
    /// Run one calculator over raw text inputs, keyed by field name.
    /// Fields not supplied take their catalog default.
    /// Returns `Ok(None)` when any field does not parse as an integer.
    async fn calculate(
        &self,
        kind: CalculatorKind,
        inputs: &[(String, String)],
    ) -> Result<Option<CalculationResult>, AssessmentError>;

    /// Validate the lead form, deliver it to the webhook and persist the identity.
    async fn submit_lead(&self, name: &str, email: &str)
    -> Result<LeadIdentity, AssessmentError>;

    /// Greeting for a freshly mounted assessment page.
    async fn greeting(&self) -> Result<String, AssessmentError>;

    /// Current colour scheme preference.
    async fn theme(&self) -> Result<Theme, AssessmentError>;
}
