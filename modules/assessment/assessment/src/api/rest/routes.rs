use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::{Extension, Router};
use utoipa::OpenApi;

use crate::api::rest::{dto, handlers, problem};
use crate::domain::service::Service;

#[derive(OpenApi)]
#[openapi(
    info(title = "SetItGo Assessment API", description = "ROI calculators, lead capture and assessment pages"),
    paths(
        handlers::list_calculators,
        handlers::calculate,
        handlers::submit_lead,
        handlers::mount_page,
        handlers::get_page,
        handlers::update_inputs,
        handlers::calculate_widget,
        handlers::set_scheduling,
        handlers::unmount_page,
        handlers::get_theme,
        handlers::set_theme,
        handlers::toggle_theme,
    ),
    components(schemas(
        dto::CalculatorDto,
        dto::FieldDto,
        dto::ReferenceDto,
        dto::CalculationResultDto,
        dto::ResultDetailDto,
        dto::ResultKindDto,
        dto::InputsRequest,
        dto::CalculateResponse,
        dto::LeadRequest,
        dto::LeadResponse,
        dto::PageDto,
        dto::WidgetDto,
        dto::WidgetInputDto,
        dto::SectionResultDto,
        dto::SchedulingDto,
        dto::SchedulingRequest,
        dto::ThemeDto,
        dto::ThemeValue,
        problem::Problem,
    )),
    tags(
        (name = "Assessment", description = "Calculators, lead gate and assessment pages"),
        (name = "Theme", description = "Colour scheme preference"),
    )
)]
pub struct AssessmentApiDoc;

#[must_use]
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route("/assessment/v1/calculators", get(handlers::list_calculators))
        .route(
            "/assessment/v1/calculators/{calculator}/calculate",
            post(handlers::calculate),
        )
        .route("/assessment/v1/leads", post(handlers::submit_lead))
        .route("/assessment/v1/pages", post(handlers::mount_page))
        .route(
            "/assessment/v1/pages/{id}",
            get(handlers::get_page).delete(handlers::unmount_page),
        )
        .route(
            "/assessment/v1/pages/{id}/widgets/{calculator}/inputs",
            put(handlers::update_inputs),
        )
        .route(
            "/assessment/v1/pages/{id}/widgets/{calculator}/calculate",
            post(handlers::calculate_widget),
        )
        .route(
            "/assessment/v1/pages/{id}/scheduling",
            put(handlers::set_scheduling),
        )
        .route(
            "/assessment/v1/theme",
            get(handlers::get_theme).put(handlers::set_theme),
        )
        .route("/assessment/v1/theme/toggle", post(handlers::toggle_theme))
        .layer(Extension(service))
}
