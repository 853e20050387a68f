//! Lead capture gate in front of the assessment page.
//!
//! `Idle -> Submitting -> Succeeded`, with a failed delivery falling back to
//! `Idle` and an inline error. Field edits and re-submission are refused while
//! a submission is in flight.

use std::sync::LazyLock;

use assessment_sdk::{LeadIdentity, Route};
use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::{info, warn};

use super::error::{
    DomainError, EMPTY_NAME_MESSAGE, INVALID_EMAIL_MESSAGE, SUBMISSION_FAILED_MESSAGE,
};
use super::repo::{ClientStorage, LeadSubmission, LeadWebhook, USER_EMAIL_KEY, USER_NAME_KEY};

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Idle,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone)]
pub struct LeadGate {
    name: String,
    email: String,
    state: GateState,
    error: Option<String>,
}

impl Default for LeadGate {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadGate {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            state: GateState::Idle,
            error: None,
        }
    }

    /// Gate pre-filled with form values.
    #[must_use]
    pub fn with_values(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Inline error text currently shown under the form.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// # Errors
    /// Returns [`DomainError::FormLocked`] unless the gate is idle.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        self.ensure_editable()?;
        self.name = name.into();
        Ok(())
    }

    /// # Errors
    /// Returns [`DomainError::FormLocked`] unless the gate is idle.
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), DomainError> {
        self.ensure_editable()?;
        self.email = email.into();
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), DomainError> {
        if self.state == GateState::Idle {
            Ok(())
        } else {
            Err(DomainError::FormLocked)
        }
    }

    fn validate(&self) -> Result<LeadIdentity, DomainError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name", EMPTY_NAME_MESSAGE));
        }
        if !EMAIL_PATTERN.is_match(&self.email) {
            return Err(DomainError::validation("email", INVALID_EMAIL_MESSAGE));
        }
        Ok(LeadIdentity {
            name: name.to_owned(),
            email: self.email.trim().to_owned(),
        })
    }

    /// Validates the form and moves to `Submitting`.
    ///
    /// # Errors
    /// - [`DomainError::FormLocked`] if a submission is already pending or done
    /// - [`DomainError::Validation`] if the name or email is rejected; the
    ///   gate stays idle and shows the message inline
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<LeadSubmission, DomainError> {
        self.ensure_editable()?;
        self.error = None;

        let identity = self.validate().inspect_err(|e| {
            self.error = Some(e.to_string());
        })?;

        self.state = GateState::Submitting;
        Ok(LeadSubmission {
            name: identity.name,
            email: identity.email,
            timestamp: now,
        })
    }

    /// Applies the delivery outcome of the pending submission.
    ///
    /// # Errors
    /// Returns [`DomainError::SubmissionFailed`] after a failed delivery; the
    /// gate is idle again and may be resubmitted by the user.
    pub fn finish_submit(&mut self, delivered: bool) -> Result<Route, DomainError> {
        if delivered {
            self.state = GateState::Succeeded;
            Ok(Route::Assessment)
        } else {
            self.state = GateState::Idle;
            self.error = Some(SUBMISSION_FAILED_MESSAGE.to_owned());
            Err(DomainError::SubmissionFailed)
        }
    }

    /// Runs one full submission: validate, POST once, persist the identity and
    /// return the route to navigate to.
    ///
    /// # Errors
    /// See [`LeadGate::begin_submit`] and [`LeadGate::finish_submit`].
    pub async fn submit(
        &mut self,
        webhook: &dyn LeadWebhook,
        storage: &dyn ClientStorage,
        now: DateTime<Utc>,
    ) -> Result<Route, DomainError> {
        let submission = self.begin_submit(now)?;
        let email_domain = submission.email.rsplit('@').next().unwrap_or_default().to_owned();

        if let Err(e) = webhook.deliver(&submission).await {
            warn!(error = %e, email_domain, "lead delivery failed");
            return self.finish_submit(false);
        }

        // Identity is written only after a successful delivery.
        let persisted = async {
            storage.set(USER_EMAIL_KEY, &submission.email).await?;
            storage.set(USER_NAME_KEY, &submission.name).await
        }
        .await;
        if let Err(e) = persisted {
            tracing::error!(error = %e, "failed to persist lead identity");
            return self.finish_submit(false);
        }

        info!(email_domain, "lead captured");
        self.finish_submit(true)
    }
}
