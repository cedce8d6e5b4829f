use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use staff_db_rust::api::routes::create_app;
use staff_db_rust::config::CorsConfig;
use staff_db_rust::store::MemoryStore;

/// The full application over an in-memory store. Cloning the router shares
/// the store, so one `app()` spans a whole scenario.
fn app() -> Router {
    create_app(&CorsConfig::default()).with_state(Arc::new(MemoryStore::new()))
}

async fn send(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn winnipeg_branch() -> Value {
    json!({
        "name": "Winnipeg Branch",
        "address": "1300 Joe St",
        "phone": "204-456-0022",
    })
}

fn sample_employee(branch_id: &str) -> Value {
    json!({
        "name": "Pablito Salazar",
        "position": "Back End Developer",
        "department": "Development",
        "email": "pablito@example.com",
        "phone": "123-542-4594",
        "branchId": branch_id,
    })
}

async fn create_branch(app: &Router) -> String {
    let (status, body) = send(app, Method::POST, "/branches", Some(winnipeg_branch())).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

async fn create_employee(app: &Router, branch_id: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/employee",
        Some(sample_employee(branch_id)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn create_branch_returns_created_envelope() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/branches", Some(winnipeg_branch())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Branch has been created successfully");
    assert_eq!(body["data"]["name"], "Winnipeg Branch");
    assert_eq!(body["data"]["address"], "1300 Joe St");
    assert_eq!(body["data"]["phone"], "204-456-0022");
    assert!(!body["data"]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn create_branch_with_empty_address_fails_validation() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/branches",
        Some(json!({
            "name": "Winnipeg Branch",
            "address": "",
            "phone": "204-456-0022",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Validation error: Body: Address cannot be empty"})
    );
}

#[tokio::test]
async fn create_employee_with_empty_body_lists_every_violation_in_order() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/employee", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Validation error: Body: Name is required, Body: Position is required, \
         Body: Department is required, Body: Email is required, Body: Phone is required, \
         Body: Branch ID is required"
    );
}

#[tokio::test]
async fn create_employee_with_bad_email_fails_validation() {
    let app = app();
    let mut payload = sample_employee("b-1");
    payload["email"] = json!("not-an-email");
    let (status, body) = send(&app, Method::POST, "/employee", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Validation error: Body: Email must be valid"})
    );
}

#[tokio::test]
async fn missing_request_body_fails_validation_rather_than_crashing() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/branches", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Validation error: Body: Name is required, Body: Address is required, \
         Body: Phone is required"
    );
}

#[tokio::test]
async fn branch_crud_round_trip() {
    let app = app();
    let id = create_branch(&app).await;

    let (status, body) = send(&app, Method::GET, &format!("/branches/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Branch retrieved successfully");
    assert_eq!(body["data"]["id"], id.as_str());

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/branches/{id}"),
        Some(json!({"phone": "204-456-9999"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Branch information updated successfully");
    assert_eq!(body["data"]["phone"], "204-456-9999");
    assert_eq!(body["data"]["name"], "Winnipeg Branch");
    assert_eq!(body["data"]["address"], "1300 Joe St");

    let (status, body) = send(&app, Method::DELETE, &format!("/branches/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "success", "message": "Branch deleted successfully"})
    );

    let (status, body) = send(&app, Method::GET, &format!("/branches/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(
        body["message"],
        format!("Branch with ID {id} does not exist")
    );
}

#[tokio::test]
async fn list_branches_wraps_all_records() {
    let app = app();
    create_branch(&app).await;

    let (status, body) = send(&app, Method::GET, "/branches", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Branches successfully retrieved");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn partial_employee_update_keeps_other_fields() {
    let app = app();
    let branch_id = create_branch(&app).await;
    let id = create_employee(&app, &branch_id).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/employee/{id}"),
        Some(json!({"position": "Manager"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee information updated successfully.");
    assert_eq!(body["data"]["position"], "Manager");
    assert_eq!(body["data"]["name"], "Pablito Salazar");
    assert_eq!(body["data"]["department"], "Development");
    assert_eq!(body["data"]["email"], "pablito@example.com");
    assert_eq!(body["data"]["phone"], "123-542-4594");
    assert_eq!(body["data"]["branchId"], branch_id.as_str());

    // The merge was persisted, not just echoed.
    let (_, body) = send(&app, Method::GET, &format!("/employee/{id}"), None).await;
    assert_eq!(body["data"]["position"], "Manager");
    assert_eq!(body["data"]["name"], "Pablito Salazar");
}

#[tokio::test]
async fn getting_a_missing_employee_is_an_error_not_an_empty_success() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/employee/ghost", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"status": "error", "message": "Employee with ID ghost does not exist"})
    );
}

#[tokio::test]
async fn employee_delete_round_trip() {
    let app = app();
    let branch_id = create_branch(&app).await;
    let id = create_employee(&app, &branch_id).await;

    let (status, body) = send(&app, Method::DELETE, &format!("/employee/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee deleted successfully");

    let (status, _) = send(&app, Method::GET, &format!("/employee/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn branch_filter_is_exact_and_department_filter_is_case_insensitive() {
    let app = app();
    let branch_id = create_branch(&app).await;
    create_employee(&app, &branch_id).await;

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/employee/branch/{branch_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employees for branch retrieved successfully.");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // A prefix of the branch id is not a match.
    let prefix = &branch_id[..branch_id.len() - 1];
    let (status, _) = send(&app, Method::GET, &format!("/employee/branch/{prefix}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, "/employee/department/DEVELOPMENT", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Employees in department retrieved successfully."
    );
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_filter_results_surface_as_not_found() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/employee/branch/b-9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No employees found for branch ID b-9.");

    let (status, body) = send(&app, Method::GET, "/employee/department/Accounting", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "No employees found in department 'Accounting'."
    );
}

#[tokio::test]
async fn health_reports_status_uptime_timestamp_and_version() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert!(body["uptime"].is_number());
    assert!(body["timestamp"].is_string());
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn welcome_and_docs_endpoints_respond() {
    let app = app();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"Welcome Client");

    let (status, body) = send(&app, Method::GET, "/docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["openapi"], "3.0.3");
    assert!(body["paths"]["/branches"].is_object());
    assert!(body["paths"]["/employee/department/{departmentName}"].is_object());
}

#[tokio::test]
async fn responses_carry_security_and_rate_limit_headers() {
    let app = app();
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-ratelimit-limit"], "100");
}
