use anyhow::{Context, Result};
use assessment::AssessmentModule;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsConfig;

/// Assessment routes plus `/health` and `/openapi.json`, wrapped in request
/// tracing and CORS.
///
/// # Errors
/// Fails when an allowed origin is not a valid header value.
pub fn build_router(module: &AssessmentModule, cors: &CorsConfig) -> Result<Router> {
    let router = module
        .register_rest(Router::new())
        .route("/health", get(health))
        .route("/openapi.json", get(openapi))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors)?);
    Ok(router)
}

#[allow(clippy::unused_async)]
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[allow(clippy::unused_async)]
async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(AssessmentModule::openapi())
}

fn cors_layer(cfg: &CorsConfig) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if cfg.allowed_origins.iter().any(|o| o == "*") {
        return Ok(layer.allow_origin(Any));
    }
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(layer.allow_origin(origins))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use assessment::config::{AssessmentConfig, StorageKind};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn router(cors: &CorsConfig) -> (Router, TempDir) {
        let home = TempDir::new().unwrap();
        let cfg = AssessmentConfig {
            storage: StorageKind::Memory,
            ..AssessmentConfig::default()
        };
        let module = AssessmentModule::init(&cfg, home.path()).await.unwrap();
        (build_router(&module, cors).unwrap(), home)
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (router, _home) = router(&CorsConfig::default()).await;
        let (status, body) = get_json(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let (router, _home) = router(&CorsConfig::default()).await;
        let (status, body) = get_json(router, "/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/assessment/v1/leads"].is_object());
    }

    #[tokio::test]
    async fn assessment_routes_are_mounted() {
        let (router, _home) = router(&CorsConfig::default()).await;
        let (status, body) = get_json(router, "/assessment/v1/calculators").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn listed_origin_is_echoed() {
        let cors = CorsConfig {
            allowed_origins: vec!["https://setitgo.com".to_owned()],
        };
        let (router, _home) = router(&cors).await;
        let response = router
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "https://setitgo.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://setitgo.com"
        );
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let cors = CorsConfig {
            allowed_origins: vec!["bad\norigin".to_owned()],
        };
        assert!(cors_layer(&cors).is_err());
    }
}
