use std::collections::BTreeMap;

use assessment_sdk::{CalculationResult, CalculatorKind, LeadIdentity, ResultKind, Route, Theme};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::calculators;
use crate::domain::numbers::format_metric;
use crate::domain::page::AssessmentPage;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldDto {
    pub name: String,
    pub label: String,
    pub default: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceDto {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorDto {
    pub id: String,
    pub title: String,
    pub fields: Vec<FieldDto>,
    pub references: Vec<ReferenceDto>,
}

impl From<CalculatorKind> for CalculatorDto {
    fn from(kind: CalculatorKind) -> Self {
        Self {
            id: kind.as_str().to_owned(),
            title: kind.title().to_owned(),
            fields: calculators::fields(kind)
                .iter()
                .map(|f| FieldDto {
                    name: f.name.to_owned(),
                    label: f.label.to_owned(),
                    default: f.default.to_owned(),
                })
                .collect(),
            references: calculators::references(kind)
                .iter()
                .map(|r| ReferenceDto {
                    title: r.title.to_owned(),
                    url: r.url.to_owned(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResultKindDto {
    Money,
    Hours,
}

impl From<ResultKind> for ResultKindDto {
    fn from(kind: ResultKind) -> Self {
        match kind {
            ResultKind::Money => Self::Money,
            ResultKind::Hours => Self::Hours,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultDetailDto {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResultDto {
    pub metric: String,
    pub description: String,
    pub source: String,
    pub raw_value: f64,
    #[serde(rename = "type")]
    pub kind: ResultKindDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ResultDetailDto>>,
}

impl From<&CalculationResult> for CalculationResultDto {
    fn from(result: &CalculationResult) -> Self {
        Self {
            metric: result.metric.clone(),
            description: result.description.clone(),
            source: result.source.clone(),
            raw_value: result.raw_value,
            kind: result.kind.into(),
            details: result.details.as_ref().map(|details| {
                details
                    .iter()
                    .map(|d| ResultDetailDto {
                        name: d.name.to_owned(),
                        value: d.value,
                    })
                    .collect()
            }),
        }
    }
}

/// Raw field text keyed by field name.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InputsRequest {
    #[serde(default)]
    pub inputs: BTreeMap<String, String>,
}

impl InputsRequest {
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.inputs.into_iter().collect()
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    /// `null` when an input was not numeric.
    pub result: Option<CalculationResultDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadResponse {
    pub name: String,
    pub email: String,
    pub redirect_to: String,
}

impl From<LeadIdentity> for LeadResponse {
    fn from(identity: LeadIdentity) -> Self {
        Self {
            name: identity.name,
            email: identity.email,
            redirect_to: Route::Assessment.path().to_owned(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WidgetInputDto {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDto {
    pub id: String,
    pub title: String,
    pub inputs: Vec<WidgetInputDto>,
    pub result: Option<CalculationResultDto>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionResultDto {
    pub title: String,
    pub result: CalculationResultDto,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingDto {
    pub open: bool,
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub id: Uuid,
    pub greeting: String,
    pub widgets: Vec<WidgetDto>,
    pub results: Vec<SectionResultDto>,
    /// Sum of money results; absent until something was calculated.
    pub total: Option<f64>,
    pub total_metric: Option<String>,
    pub scheduling: SchedulingDto,
}

impl PageDto {
    #[must_use]
    pub fn from_page(id: Uuid, page: &AssessmentPage, scheduling_url: &str) -> Self {
        let total = page.total();
        Self {
            id,
            greeting: page.greeting().to_owned(),
            widgets: page
                .widgets()
                .iter()
                .map(|w| WidgetDto {
                    id: w.kind().as_str().to_owned(),
                    title: w.title().to_owned(),
                    inputs: w
                        .inputs()
                        .map(|(name, value)| WidgetInputDto {
                            name: name.to_owned(),
                            value: value.to_owned(),
                        })
                        .collect(),
                    result: w.result().map(Into::into),
                })
                .collect(),
            results: page
                .results()
                .entries()
                .map(|(title, result)| SectionResultDto {
                    title: title.to_owned(),
                    result: result.into(),
                })
                .collect(),
            total,
            total_metric: total.map(|t| format_metric(ResultKind::Money, t)),
            scheduling: SchedulingDto {
                open: page.scheduling_open(),
                url: scheduling_url.to_owned(),
            },
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingRequest {
    pub open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThemeValue {
    Light,
    Dark,
}

impl From<Theme> for ThemeValue {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

impl From<ThemeValue> for Theme {
    fn from(value: ThemeValue) -> Self {
        match value {
            ThemeValue::Light => Self::Light,
            ThemeValue::Dark => Self::Dark,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDto {
    pub theme: ThemeValue,
}
