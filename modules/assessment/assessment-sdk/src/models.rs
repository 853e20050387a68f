//! Public models for the assessment module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the assessment module and its consumers.

use std::fmt;
use std::str::FromStr;

/// The five ROI calculators, in the order the assessment page renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorKind {
    CustomerService,
    VirtualReceptionist,
    AppointmentSetter,
    Onboarding,
    WorkflowAutomation,
}

impl CalculatorKind {
    /// Render order of the assessment page.
    pub const ALL: [CalculatorKind; 5] = [
        CalculatorKind::CustomerService,
        CalculatorKind::VirtualReceptionist,
        CalculatorKind::AppointmentSetter,
        CalculatorKind::Onboarding,
        CalculatorKind::WorkflowAutomation,
    ];

    /// Stable identifier used in URLs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CalculatorKind::CustomerService => "customer-service",
            CalculatorKind::VirtualReceptionist => "virtual-receptionist",
            CalculatorKind::AppointmentSetter => "appointment-setter",
            CalculatorKind::Onboarding => "onboarding",
            CalculatorKind::WorkflowAutomation => "workflow-automation",
        }
    }

    /// Widget title; also the key of the page's section results.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            CalculatorKind::CustomerService => "Customer Service AI Agent",
            CalculatorKind::VirtualReceptionist => "Virtual Receptionist",
            CalculatorKind::AppointmentSetter => "AI Appointment Setter",
            CalculatorKind::Onboarding => "One-Click Onboarding",
            CalculatorKind::WorkflowAutomation => "Workflow Automation",
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown calculator '{0}'")]
pub struct UnknownCalculator(pub String);

impl FromStr for CalculatorKind {
    type Err = UnknownCalculator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculatorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownCalculator(s.to_owned()))
    }
}

/// Unit of a result's raw value. Only `Money` is summed into the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Money,
    Hours,
}

/// Named sub-quantity shown in a result breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDetail {
    pub name: &'static str,
    pub value: f64,
}

/// Output record of one calculator run.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub metric: String,
    pub description: String,
    pub source: String,
    pub raw_value: f64,
    pub kind: ResultKind,
    pub details: Option<Vec<ResultDetail>>,
}

/// Captured prospect identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadIdentity {
    pub name: String,
    pub email: String,
}

/// Logical navigation targets of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Assessment,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Assessment => "/assessment",
        }
    }
}

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parses a persisted value; anything unrecognised yields `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}
