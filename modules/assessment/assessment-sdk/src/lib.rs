//! Assessment SDK
//!
//! This crate provides the public API for the assessment module:
//! - `AssessmentApi` trait for in-process consumers
//! - Model types (`CalculatorKind`, `CalculationResult`, `LeadIdentity`, `Theme`)
//! - Error type (`AssessmentError`)
//!
//! ```ignore
//! let client: Arc<dyn AssessmentApi> = module.client();
//! let result = client
//!     .calculate(CalculatorKind::AppointmentSetter, &[("monthlyLeads".to_owned(), "1000".to_owned())])
//!     .await?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::AssessmentApi;
pub use errors::AssessmentError;
pub use models::{
    CalculationResult, CalculatorKind, LeadIdentity, ResultDetail, ResultKind, Route, Theme,
    UnknownCalculator,
};
