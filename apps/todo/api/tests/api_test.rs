//! End-to-end tests of the assembled router
//!
//! The full stack (auth, `/api` prefix, fallback, docs, health) runs against
//! the in-memory store, so no database is needed.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use axum_helpers::{ApiResponse, BasicAuth, BasicAuthConfig, ErrorResponse, Locale, MessageResponse};
use core_config::AppInfo;
use domain_tasks::{InMemoryTaskRepository, TaskResponse, TaskService, TaskStatus};
use http_body_util::BodyExt;
use serde_json::json;
use todo_api::{build_router, catalog};
use tower::ServiceExt;

// admin:s3cret
const VALID_AUTH: &str = "Basic YWRtaW46czNjcmV0";
// admin:wrong
const WRONG_AUTH: &str = "Basic YWRtaW46d3Jvbmc=";

const TASKS: &str = "/api/v1/tasks";

fn app_with_locale(locale: Locale) -> Router {
    let catalog = catalog(locale);
    let auth = BasicAuth::new(&BasicAuthConfig::new("admin", "s3cret"), catalog.clone()).unwrap();
    let service = TaskService::new(InMemoryTaskRepository::new());

    build_router(
        service,
        catalog,
        auth,
        None,
        AppInfo {
            name: "todo_api",
            version: "0.1.0",
        },
        Router::new().route("/ready", get(|| async { "ready" })),
    )
}

fn app() -> Router {
    app_with_locale(Locale::En)
}

fn request(method: &str, uri: &str, auth: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_task_lifecycle() {
    let app = app();

    // Create
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            TASKS,
            Some(VALID_AUTH),
            Some(json!({ "title": "Buy coffee", "description": "Two bags" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: ApiResponse<TaskResponse> = json_body(response.into_body()).await;
    assert_eq!(created.message, "Task 'Buy coffee' created successfully.");
    assert_eq!(created.data.status, TaskStatus::Pending);
    assert_eq!(created.data.creation_date, created.data.update_date);
    let id = created.data.id;

    // Fetch
    let response = app
        .clone()
        .oneshot(request("GET", &format!("{TASKS}/{id}"), Some(VALID_AUTH), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: TaskResponse = json_body(response.into_body()).await;
    assert_eq!(fetched, created.data);

    // Complete and rename
    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("{TASKS}/{id}?status=COMPLETED"),
            Some(VALID_AUTH),
            Some(json!({ "title": "Buy coffee (done)" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: ApiResponse<TaskResponse> = json_body(response.into_body()).await;
    assert_eq!(updated.message, format!("Task {id} updated successfully."));
    assert_eq!(updated.data.title, "Buy coffee (done)");
    assert_eq!(updated.data.description.as_deref(), Some("Two bags"));
    assert_eq!(updated.data.status, TaskStatus::Completed);
    assert_eq!(updated.data.creation_date, created.data.creation_date);
    assert!(updated.data.update_date >= created.data.update_date);

    // List
    let response = app
        .clone()
        .oneshot(request("GET", TASKS, Some(VALID_AUTH), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let tasks: Vec<TaskResponse> = json_body(response.into_body()).await;
    assert_eq!(tasks, vec![updated.data.clone()]);

    // Delete
    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("{TASKS}/{id}"), Some(VALID_AUTH), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: MessageResponse = json_body(response.into_body()).await;
    assert_eq!(deleted.message, format!("Task {id} deleted successfully."));

    // Gone
    let response = app
        .oneshot(request("GET", &format!("{TASKS}/{id}"), Some(VALID_AUTH), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.status, 404);
    assert_eq!(error.message, format!("Task with ID {id} not found."));
}

#[tokio::test]
async fn test_missing_credentials_rejected() {
    let response = app()
        .oneshot(request("GET", TASKS, None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.status, 401);
    assert_eq!(error.error, "Unauthorized");
}

#[tokio::test]
async fn test_wrong_password_rejected_before_validation() {
    let response = app()
        .oneshot(request(
            "POST",
            TASKS,
            Some(WRONG_AUTH),
            Some(json!({ "title": "" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_empty_title_lists_details() {
    let response = app()
        .oneshot(request(
            "POST",
            TASKS,
            Some(VALID_AUTH),
            Some(json!({ "title": "", "description": "x" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "Bad Request");
    assert_eq!(error.message, "Validation Failed");
    let details = error.details.unwrap();
    assert_eq!(details.len(), 1);
    assert!(details[0].starts_with("title: "));
}

#[tokio::test]
async fn test_invalid_id_names_parameter_and_value() {
    let response = app()
        .oneshot(request(
            "GET",
            &format!("{TASKS}/not-a-uuid"),
            Some(VALID_AUTH),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "Failed to convert 'id' with value: 'not-a-uuid'");
}

#[tokio::test]
async fn test_default_locale_applies_without_header() {
    let response = app_with_locale(Locale::PtBr)
        .oneshot(request("GET", TASKS, None, None))
        .await
        .unwrap();

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "Credenciais inválidas ou ausentes.");
}

#[tokio::test]
async fn test_accept_language_overrides_default_locale() {
    let mut req = request(
        "POST",
        TASKS,
        Some(VALID_AUTH),
        Some(json!({ "title": "Comprar café" })),
    );
    req.headers_mut()
        .insert(header::ACCEPT_LANGUAGE, "pt-BR,pt;q=0.9".parse().unwrap());

    let response = app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: ApiResponse<TaskResponse> = json_body(response.into_body()).await;
    assert_eq!(created.message, "Tarefa 'Comprar café' criada com sucesso.");
}

#[tokio::test]
async fn test_health_is_public() {
    let response = app()
        .oneshot(request("GET", "/health", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["name"], "todo_api");
}

#[tokio::test]
async fn test_public_routes_carry_security_headers() {
    for uri in ["/health", "/ready"] {
        let response = app()
            .oneshot(request("GET", uri, None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(
            response.headers()[header::X_CONTENT_TYPE_OPTIONS],
            "nosniff",
            "{uri}"
        );
    }
}

#[tokio::test]
async fn test_openapi_document_is_public() {
    let response = app()
        .oneshot(request("GET", "/api-docs/openapi.json", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc: serde_json::Value = json_body(response.into_body()).await;
    assert!(doc["paths"]["/v1/tasks/{id}"].is_object());
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let response = app()
        .oneshot(request("GET", "/api/v1/notes", Some(VALID_AUTH), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "Not Found");
}
