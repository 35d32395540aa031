//! HTTP-level tests for the membership API, driving the real router
//! against a temporary SQLite database.

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use membership_config::DatabaseConfig;
use membership_gateway::{create_router, GatewayState};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt;

async fn test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("api.db");

    let config = DatabaseConfig {
        url: format!("sqlite://{}", db_path.display()),
        max_connections: 1,
    };

    let state = GatewayState::from_config(&config).await.unwrap();
    (create_router(state), temp_dir)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

fn create_body(first_name: &str, email: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": "Pérez",
        "email": email,
        "birthDate": "1985-05-15",
        "initialBalance": "1000.00",
    })
}

fn update_body(email: &str, is_active: bool) -> Value {
    json!({
        "firstName": "Juan",
        "lastName": "Pérez",
        "email": email,
        "isActive": is_active,
    })
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (app, _temp_dir) = test_app().await;

    let response = send(&app, Method::GET, "/health", None).await;
    assert_eq!(StatusCode::OK, response.status());

    let body = body_json(response).await;
    assert_eq!("ok", body["status"]);
}

#[tokio::test]
async fn list_members_on_empty_store_returns_empty_array() {
    let (app, _temp_dir) = test_app().await;

    let response = send(&app, Method::GET, "/members", None).await;
    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(json!([]), body_json(response).await);
}

#[tokio::test]
async fn create_member_returns_created_with_location() {
    let (app, _temp_dir) = test_app().await;

    let response = send(
        &app,
        Method::POST,
        "/members",
        Some(create_body("Juan", "juan.perez@example.com")),
    )
    .await;
    assert_eq!(StatusCode::CREATED, response.status());

    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .expect("Location header missing");

    let body = body_json(response).await;
    assert_eq!(format!("/members/{}", body["id"]), location);
    assert_eq!("Juan", body["firstName"]);
    assert_eq!("juan.perez@example.com", body["email"]);
    assert_eq!("1985-05-15", body["birthDate"]);
    assert_eq!("1000.00", body["balance"]);
    assert_eq!(true, body["isActive"]);
    assert!(body["registrationDate"].is_string());

    // The Location points at a resolvable resource
    let fetched = send(&app, Method::GET, &location, None).await;
    assert_eq!(StatusCode::OK, fetched.status());
}

#[tokio::test]
async fn create_member_defaults_initial_balance_to_zero() {
    let (app, _temp_dir) = test_app().await;

    let body = json!({
        "firstName": "Juan",
        "lastName": "Pérez",
        "email": "juan.perez@example.com",
        "birthDate": "1985-05-15",
    });

    let response = send(&app, Method::POST, "/members", Some(body)).await;
    assert_eq!(StatusCode::CREATED, response.status());

    let body = body_json(response).await;
    assert_eq!("0", body["balance"]);
}

#[tokio::test]
async fn create_member_with_taken_email_returns_bad_request() {
    let (app, _temp_dir) = test_app().await;

    let first = send(
        &app,
        Method::POST,
        "/members",
        Some(create_body("Juan", "a@x.com")),
    )
    .await;
    assert_eq!(StatusCode::CREATED, first.status());

    let second = send(
        &app,
        Method::POST,
        "/members",
        Some(create_body("María", "b@x.com")),
    )
    .await;
    assert_eq!(StatusCode::CREATED, second.status());

    // Case-insensitive match against the first email
    let duplicate = send(
        &app,
        Method::POST,
        "/members",
        Some(create_body("Carlos", "A@X.com")),
    )
    .await;
    assert_eq!(StatusCode::BAD_REQUEST, duplicate.status());

    let body = body_json(duplicate).await;
    assert_eq!("Email already exists", body["message"]);

    // No partial row was persisted
    let list = body_json(send(&app, Method::GET, "/members", None).await).await;
    assert_eq!(2, list.as_array().unwrap().len());
}

#[tokio::test]
async fn create_member_with_invalid_fields_returns_bad_request() {
    let (app, _temp_dir) = test_app().await;

    let response = send(
        &app,
        Method::POST,
        "/members",
        Some(create_body("", "juan.perez@example.com")),
    )
    .await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());
}

#[tokio::test]
async fn get_missing_member_returns_not_found_with_empty_body() {
    let (app, _temp_dir) = test_app().await;

    let response = send(&app, Method::GET, "/members/999", None).await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn get_member_by_email_matches_case_insensitively() {
    let (app, _temp_dir) = test_app().await;

    send(
        &app,
        Method::POST,
        "/members",
        Some(create_body("Juan", "juan.perez@example.com")),
    )
    .await;

    let response = send(
        &app,
        Method::GET,
        "/members/email/JUAN.PEREZ@EXAMPLE.COM",
        None,
    )
    .await;
    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(
        "juan.perez@example.com",
        body_json(response).await["email"]
    );

    let missing = send(&app, Method::GET, "/members/email/nobody@x.com", None).await;
    assert_eq!(StatusCode::NOT_FOUND, missing.status());
    assert!(body_bytes(missing).await.is_empty());
}

#[tokio::test]
async fn update_member_keeps_email_and_toggles_activity() {
    let (app, _temp_dir) = test_app().await;

    let created = body_json(
        send(
            &app,
            Method::POST,
            "/members",
            Some(create_body("Juan", "a@x.com")),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = send(
        &app,
        Method::PUT,
        &format!("/members/{id}"),
        Some(update_body("a@x.com", false)),
    )
    .await;
    assert_eq!(StatusCode::OK, response.status());

    let body = body_json(response).await;
    assert_eq!("a@x.com", body["email"]);
    assert_eq!(false, body["isActive"]);
    assert_eq!(created["balance"], body["balance"]);
    assert_eq!(created["registrationDate"], body["registrationDate"]);
}

#[tokio::test]
async fn update_missing_member_returns_not_found() {
    let (app, _temp_dir) = test_app().await;

    let response = send(
        &app,
        Method::PUT,
        "/members/999",
        Some(update_body("a@x.com", true)),
    )
    .await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn update_member_to_taken_email_returns_bad_request() {
    let (app, _temp_dir) = test_app().await;

    send(
        &app,
        Method::POST,
        "/members",
        Some(create_body("Juan", "a@x.com")),
    )
    .await;
    let second = body_json(
        send(
            &app,
            Method::POST,
            "/members",
            Some(create_body("María", "b@x.com")),
        )
        .await,
    )
    .await;
    let id = second["id"].as_i64().unwrap();

    let response = send(
        &app,
        Method::PUT,
        &format!("/members/{id}"),
        Some(update_body("a@x.com", true)),
    )
    .await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());
    assert_eq!("Email already exists", body_json(response).await["message"]);
}

#[tokio::test]
async fn delete_member_flow() {
    let (app, _temp_dir) = test_app().await;

    let created = body_json(
        send(
            &app,
            Method::POST,
            "/members",
            Some(create_body("Juan", "a@x.com")),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = send(&app, Method::DELETE, &format!("/members/{id}"), None).await;
    assert_eq!(StatusCode::NO_CONTENT, response.status());

    let fetched = send(&app, Method::GET, &format!("/members/{id}"), None).await;
    assert_eq!(StatusCode::NOT_FOUND, fetched.status());

    let again = send(&app, Method::DELETE, &format!("/members/{id}"), None).await;
    assert_eq!(StatusCode::NOT_FOUND, again.status());
}
