//! End-to-end REST tests: router + service + memory storage + mock webhook.

use assessment::AssessmentModule;
use assessment::config::{AssessmentConfig, StorageKind};
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use httpmock::MockServer;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    _home: TempDir,
}

async fn app_with_webhook(webhook_url: String) -> TestApp {
    let home = TempDir::new().unwrap();
    let cfg = AssessmentConfig {
        webhook_url,
        storage: StorageKind::Memory,
        ..AssessmentConfig::default()
    };
    let module = AssessmentModule::init(&cfg, home.path()).await.unwrap();
    TestApp {
        router: module.register_rest(Router::new()),
        _home: home,
    }
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn catalog_lists_five_calculators_in_order() {
    let app = app_with_webhook("http://127.0.0.1:1/hook".to_owned()).await;

    let (status, body) = send(&app.router, Method::GET, "/assessment/v1/calculators", None).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(
        ids,
        vec![
            "customer-service",
            "virtual-receptionist",
            "appointment-setter",
            "onboarding",
            "workflow-automation"
        ]
    );
}

#[tokio::test]
async fn stateless_calculation() {
    let app = app_with_webhook("http://127.0.0.1:1/hook".to_owned()).await;

    let (status, body) = send(
        &app.router,
        Method::POST,
        "/assessment/v1/calculators/appointment-setter/calculate",
        Some(json!({"inputs": {"monthlyLeads": "1000", "dealValue": "1000"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["metric"], "$170,000");
    assert_eq!(body["result"]["type"], "money");

    let (status, body) = send(
        &app.router,
        Method::POST,
        "/assessment/v1/calculators/customer-service/calculate",
        Some(json!({"inputs": {"budget": "a lot"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["result"].is_null());

    let (status, body) = send(
        &app.router,
        Method::POST,
        "/assessment/v1/calculators/fortune-teller/calculate",
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ASSESSMENT_NOT_FOUND");
}

#[tokio::test]
async fn lead_validation_never_reaches_webhook() {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(httpmock::Method::POST).path("/hook");
        then.status(200);
    });
    let app = app_with_webhook(server.url("/hook")).await;

    let (status, body) = send(
        &app.router,
        Method::POST,
        "/assessment/v1/leads",
        Some(json!({"name": "  ", "email": "alice@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Please enter your name");
    assert_eq!(body["field"], "name");

    let (status, body) = send(
        &app.router,
        Method::POST,
        "/assessment/v1/leads",
        Some(json!({"name": "Alice", "email": "bad-email"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Please enter a valid email address");

    hook.assert_calls(0);
}

#[tokio::test]
async fn webhook_failure_is_bad_gateway() {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(httpmock::Method::POST).path("/hook");
        then.status(500);
    });
    let app = app_with_webhook(server.url("/hook")).await;

    let (status, body) = send(
        &app.router,
        Method::POST,
        "/assessment/v1/leads",
        Some(json!({"name": "Alice", "email": "alice@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "ASSESSMENT_SUBMISSION_FAILED");
    assert_eq!(body["detail"], "Failed to submit form. Please try again.");
    hook.assert();

    let (_, page) = send(&app.router, Method::POST, "/assessment/v1/pages", None).await;
    assert_eq!(page["greeting"], "Welcome!");
}

#[tokio::test]
async fn lead_then_assessment_page_flow() {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/hook")
            .header("content-type", "application/json")
            .body_includes(r#""name":"Alice""#);
        then.status(200);
    });
    let app = app_with_webhook(server.url("/hook")).await;

    let (status, lead) = send(
        &app.router,
        Method::POST,
        "/assessment/v1/leads",
        Some(json!({"name": " Alice ", "email": "alice@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(lead["redirectTo"], "/assessment");
    hook.assert();

    let (status, page) = send(&app.router, Method::POST, "/assessment/v1/pages", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(page["greeting"], "Welcome, Alice!");
    assert!(page["total"].is_null());
    let id = page["id"].as_str().unwrap().to_owned();

    let (status, _) = send(
        &app.router,
        Method::PUT,
        &format!("/assessment/v1/pages/{id}/widgets/appointment-setter/inputs"),
        Some(json!({"inputs": {"monthlyLeads": "1000", "dealValue": "1000"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, page) = send(
        &app.router,
        Method::POST,
        &format!("/assessment/v1/pages/{id}/widgets/appointment-setter/calculate"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["results"][0]["title"], "AI Appointment Setter");
    assert_eq!(page["results"][0]["result"]["metric"], "$170,000");
    assert_eq!(page["totalMetric"], "$170,000");

    let (_, page) = send(
        &app.router,
        Method::PUT,
        &format!("/assessment/v1/pages/{id}/scheduling"),
        Some(json!({"open": true})),
    )
    .await;
    assert_eq!(page["scheduling"]["open"], true);
    assert_eq!(
        page["scheduling"]["url"],
        "https://calendly.com/pateljilly1/30min"
    );

    let (status, _) = send(
        &app.router,
        Method::DELETE,
        &format!("/assessment/v1/pages/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &app.router,
        Method::GET,
        &format!("/assessment/v1/pages/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ASSESSMENT_NOT_FOUND");
}

#[tokio::test]
async fn unknown_widget_field_is_rejected() {
    let app = app_with_webhook("http://127.0.0.1:1/hook".to_owned()).await;
    let (_, page) = send(&app.router, Method::POST, "/assessment/v1/pages", None).await;
    let id = page["id"].as_str().unwrap().to_owned();

    let (status, body) = send(
        &app.router,
        Method::PUT,
        &format!("/assessment/v1/pages/{id}/widgets/onboarding/inputs"),
        Some(json!({"inputs": {"budget": "10"}})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "ASSESSMENT_VALIDATION");
    assert_eq!(body["field"], "budget");
}

#[tokio::test]
async fn theme_toggle_round_trip() {
    let app = app_with_webhook("http://127.0.0.1:1/hook".to_owned()).await;

    let (_, body) = send(&app.router, Method::GET, "/assessment/v1/theme", None).await;
    assert_eq!(body["theme"], "light");

    let (_, body) = send(&app.router, Method::POST, "/assessment/v1/theme/toggle", None).await;
    assert_eq!(body["theme"], "dark");

    let (status, body) = send(
        &app.router,
        Method::PUT,
        "/assessment/v1/theme",
        Some(json!({"theme": "light"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["theme"], "light");
}

#[tokio::test]
async fn malformed_body_is_problem_json() {
    let app = app_with_webhook("http://127.0.0.1:1/hook".to_owned()).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/assessment/v1/leads")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/problem+json"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "ASSESSMENT_VALIDATION");
    assert_eq!(body["instance"], "/assessment/v1/leads");
}

#[tokio::test]
async fn malformed_page_id_is_problem_json() {
    let app = app_with_webhook("http://127.0.0.1:1/hook".to_owned()).await;

    let (status, body) = send(&app.router, Method::GET, "/assessment/v1/pages/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "ASSESSMENT_VALIDATION");
    assert_eq!(body["instance"], "/assessment/v1/pages/not-a-uuid");
}

#[tokio::test]
async fn problems_carry_request_path() {
    let app = app_with_webhook("http://127.0.0.1:1/hook".to_owned()).await;
    let missing = "/assessment/v1/pages/00000000-0000-4000-8000-000000000000";

    let (status, body) = send(&app.router, Method::GET, missing, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["instance"], missing);
}

#[tokio::test]
async fn overflowing_input_is_ignored() {
    let app = app_with_webhook("http://127.0.0.1:1/hook".to_owned()).await;
    let huge = "9".repeat(400);

    let (status, body) = send(
        &app.router,
        Method::POST,
        "/assessment/v1/calculators/appointment-setter/calculate",
        Some(json!({"inputs": {"monthlyLeads": huge, "dealValue": "1000"}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["result"].is_null());
}
