//! Assessment Module Implementation
//!
//! ROI calculators, the lead capture gate and per-visit assessment pages.
//! The public API is defined in `assessment-sdk` and re-exported here.
#![forbid(unsafe_code)]

pub use assessment_sdk::{
    AssessmentApi, AssessmentError, CalculationResult, CalculatorKind, LeadIdentity, Theme,
};

pub mod module;
pub use module::AssessmentModule;

pub mod config;
pub use config::AssessmentConfig;

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
