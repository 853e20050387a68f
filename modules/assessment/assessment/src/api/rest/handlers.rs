#![allow(clippy::unused_async, clippy::missing_errors_doc)] // axum handlers; failures render as Problem

use std::sync::Arc;

use assessment_sdk::CalculatorKind;
use axum::Json;
use axum::extract::Extension;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use tracing::field::Empty;
use uuid::Uuid;

use crate::domain::page::AssessmentPage;
use crate::domain::service::Service;

use super::dto::{
    CalculateResponse, CalculatorDto, InputsRequest, LeadRequest, LeadResponse, PageDto,
    SchedulingRequest, ThemeDto,
};
use super::error::problem_at;
use super::extract::{ApiJson, ApiPath};
use super::problem::{ApiResult, Problem};

fn page_view(svc: &Service, id: Uuid, page: &AssessmentPage) -> PageDto {
    PageDto::from_page(id, page, svc.scheduling_url())
}

#[utoipa::path(
    get,
    path = "/assessment/v1/calculators",
    tag = "Assessment",
    operation_id = "assessment.list_calculators",
    responses((status = 200, description = "Calculator catalog", body = [CalculatorDto]))
)]
/// Catalog of all calculators in render order.
pub async fn list_calculators() -> Json<Vec<CalculatorDto>> {
    Json(CalculatorKind::ALL.into_iter().map(Into::into).collect())
}

#[utoipa::path(
    post,
    path = "/assessment/v1/calculators/{calculator}/calculate",
    tag = "Assessment",
    operation_id = "assessment.calculate",
    params(("calculator" = String, Path, description = "Calculator id, e.g. `appointment-setter`")),
    request_body = InputsRequest,
    responses(
        (status = 200, description = "Result, or null when an input is not numeric", body = CalculateResponse),
        (status = 400, description = "Unknown field", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Unknown calculator", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn calculate(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    ApiPath(calculator): ApiPath<String>,
    ApiJson(req): ApiJson<InputsRequest>,
) -> ApiResult<Json<CalculateResponse>> {
    let kind = calculator
        .parse::<CalculatorKind>()
        .map_err(|e| problem_at(e, &uri))?;
    let result = svc
        .calculate(kind, &req.into_pairs())
        .map_err(|e| problem_at(e, &uri))?;
    Ok(Json(CalculateResponse {
        result: result.as_ref().map(Into::into),
    }))
}

#[utoipa::path(
    post,
    path = "/assessment/v1/leads",
    tag = "Assessment",
    operation_id = "assessment.submit_lead",
    request_body = LeadRequest,
    responses(
        (status = 200, description = "Lead captured", body = LeadResponse),
        (status = 400, description = "Invalid name or email", body = Problem, content_type = "application/problem+json"),
        (status = 502, description = "Webhook delivery failed", body = Problem, content_type = "application/problem+json")
    )
)]
#[tracing::instrument(skip_all, fields(email_domain = Empty))]
pub async fn submit_lead(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    ApiJson(req): ApiJson<LeadRequest>,
) -> ApiResult<Json<LeadResponse>> {
    if let Some((_, domain)) = req.email.trim().rsplit_once('@') {
        tracing::Span::current().record("email_domain", domain);
    }
    let identity = svc
        .submit_lead(&req.name, &req.email)
        .await
        .map_err(|e| problem_at(e, &uri))?;
    Ok(Json(identity.into()))
}

#[utoipa::path(
    post,
    path = "/assessment/v1/pages",
    tag = "Assessment",
    operation_id = "assessment.mount_page",
    responses((status = 201, description = "Page mounted", body = PageDto))
)]
pub async fn mount_page(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
) -> ApiResult<impl IntoResponse> {
    let (id, page) = svc
        .mount_page()
        .await
        .map_err(|e| problem_at(e, &uri))?;
    Ok((StatusCode::CREATED, Json(page_view(&svc, id, &page))))
}

#[utoipa::path(
    get,
    path = "/assessment/v1/pages/{id}",
    tag = "Assessment",
    operation_id = "assessment.get_page",
    params(("id" = Uuid, Path, description = "Page id")),
    responses(
        (status = 200, description = "Page view", body = PageDto),
        (status = 404, description = "Page not found", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn get_page(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<PageDto>> {
    let page = svc
        .page(id)
        .map_err(|e| problem_at(e, &uri))?;
    Ok(Json(page_view(&svc, id, &page)))
}

#[utoipa::path(
    put,
    path = "/assessment/v1/pages/{id}/widgets/{calculator}/inputs",
    tag = "Assessment",
    operation_id = "assessment.update_inputs",
    params(
        ("id" = Uuid, Path, description = "Page id"),
        ("calculator" = String, Path, description = "Calculator id")
    ),
    request_body = InputsRequest,
    responses(
        (status = 200, description = "Inputs stored", body = PageDto),
        (status = 400, description = "Unknown field", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Page or calculator not found", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn update_inputs(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    ApiPath((id, calculator)): ApiPath<(Uuid, String)>,
    ApiJson(req): ApiJson<InputsRequest>,
) -> ApiResult<Json<PageDto>> {
    let kind = calculator
        .parse::<CalculatorKind>()
        .map_err(|e| problem_at(e, &uri))?;
    let page = svc
        .update_inputs(id, kind, &req.into_pairs())
        .map_err(|e| problem_at(e, &uri))?;
    Ok(Json(page_view(&svc, id, &page)))
}

#[utoipa::path(
    post,
    path = "/assessment/v1/pages/{id}/widgets/{calculator}/calculate",
    tag = "Assessment",
    operation_id = "assessment.calculate_widget",
    params(
        ("id" = Uuid, Path, description = "Page id"),
        ("calculator" = String, Path, description = "Calculator id")
    ),
    responses(
        (status = 200, description = "Page view after calculation", body = PageDto),
        (status = 404, description = "Page or calculator not found", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn calculate_widget(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    ApiPath((id, calculator)): ApiPath<(Uuid, String)>,
) -> ApiResult<Json<PageDto>> {
    let kind = calculator
        .parse::<CalculatorKind>()
        .map_err(|e| problem_at(e, &uri))?;
    let page = svc
        .calculate_widget(id, kind)
        .map_err(|e| problem_at(e, &uri))?;
    Ok(Json(page_view(&svc, id, &page)))
}

#[utoipa::path(
    put,
    path = "/assessment/v1/pages/{id}/scheduling",
    tag = "Assessment",
    operation_id = "assessment.set_scheduling",
    params(("id" = Uuid, Path, description = "Page id")),
    request_body = SchedulingRequest,
    responses(
        (status = 200, description = "Scheduling trigger updated", body = PageDto),
        (status = 404, description = "Page not found", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn set_scheduling(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<SchedulingRequest>,
) -> ApiResult<Json<PageDto>> {
    let page = svc
        .set_scheduling(id, req.open)
        .map_err(|e| problem_at(e, &uri))?;
    Ok(Json(page_view(&svc, id, &page)))
}

#[utoipa::path(
    delete,
    path = "/assessment/v1/pages/{id}",
    tag = "Assessment",
    operation_id = "assessment.unmount_page",
    params(("id" = Uuid, Path, description = "Page id")),
    responses(
        (status = 204, description = "Page dropped"),
        (status = 404, description = "Page not found", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn unmount_page(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<StatusCode> {
    svc
        .unmount_page(id)
        .map_err(|e| problem_at(e, &uri))?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/assessment/v1/theme",
    tag = "Theme",
    operation_id = "assessment.get_theme",
    responses((status = 200, description = "Current theme", body = ThemeDto))
)]
pub async fn get_theme(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
) -> ApiResult<Json<ThemeDto>> {
    let theme = svc
        .theme()
        .await
        .map_err(|e| problem_at(e, &uri))?;
    Ok(Json(ThemeDto {
        theme: theme.into(),
    }))
}

#[utoipa::path(
    put,
    path = "/assessment/v1/theme",
    tag = "Theme",
    operation_id = "assessment.set_theme",
    request_body = ThemeDto,
    responses((status = 200, description = "Theme stored", body = ThemeDto))
)]
pub async fn set_theme(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    ApiJson(req): ApiJson<ThemeDto>,
) -> ApiResult<Json<ThemeDto>> {
    let theme = svc
        .set_theme(req.theme.into())
        .await
        .map_err(|e| problem_at(e, &uri))?;
    Ok(Json(ThemeDto {
        theme: theme.into(),
    }))
}

#[utoipa::path(
    post,
    path = "/assessment/v1/theme/toggle",
    tag = "Theme",
    operation_id = "assessment.toggle_theme",
    responses((status = 200, description = "Theme flipped", body = ThemeDto))
)]
pub async fn toggle_theme(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
) -> ApiResult<Json<ThemeDto>> {
    let theme = svc
        .toggle_theme()
        .await
        .map_err(|e| problem_at(e, &uri))?;
    Ok(Json(ThemeDto {
        theme: theme.into(),
    }))
}
