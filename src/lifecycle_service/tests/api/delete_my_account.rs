use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{TestApp, USER_EMAIL, USER_ID, assert_cors_headers, bearer, listing};

const ROUTE: &str = "/delete-my-account";

fn list_path() -> &'static str {
    "/storage/v1/object/list/prescriptions"
}

fn admin_path() -> String {
    format!("/auth/v1/admin/users/{USER_ID}")
}

/// One listing reply; mounted pages answer in order, each once.
async fn mock_page(app: &TestApp, offset: usize, page: Value) {
    Mock::given(method("POST"))
        .and(path(list_path()))
        .and(header("authorization", "Bearer service-key"))
        .and(body_partial_json(json!({
            "prefix": USER_ID,
            "limit": 100,
            "offset": offset
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page))
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.supabase)
        .await;
}

async fn mock_removals(app: &TestApp, expected_batches: u64) {
    Mock::given(method("DELETE"))
        .and(path("/storage/v1/object/prescriptions"))
        .and(header("apikey", "service-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(expected_batches)
        .mount(&app.supabase)
        .await;
}

async fn mock_admin_delete(app: &TestApp, response: ResponseTemplate) {
    Mock::given(method("DELETE"))
        .and(path(admin_path()))
        .and(header("authorization", "Bearer service-key"))
        .respond_with(response)
        .expect(1)
        .mount(&app.supabase)
        .await;
}

async fn removed_paths(app: &TestApp) -> Vec<String> {
    app.supabase
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path() == "/storage/v1/object/prescriptions")
        .flat_map(|request| {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            body["prefixes"]
                .as_array()
                .unwrap()
                .iter()
                .map(|p| p.as_str().unwrap().to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}

#[tokio::test]
async fn preflight_returns_cors_headers_and_no_body() {
    let app = TestApp::spawn().await;

    let response = app.preflight(ROUTE).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_cors_headers(&response);
    assert!(response.text().await.unwrap().is_empty());
    assert_eq!(app.upstream_request_count().await, 0);
}

#[tokio::test]
async fn missing_authorization_returns_401() {
    let app = TestApp::spawn().await;

    let response = app.post(ROUTE, None).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_cors_headers(&response);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"ok": false, "message": "Not authenticated"}));
    assert_eq!(app.upstream_request_count().await, 0);
}

#[tokio::test]
async fn rejected_credential_returns_401_without_side_effects() {
    let app = TestApp::spawn().await;
    app.mock_rejected_caller().await;

    let response = app.post(ROUTE, Some("Bearer expired")).await;

    assert_eq!(response.status().as_u16(), 401);
    // Only the verification call reached the upstream
    assert_eq!(app.upstream_request_count().await, 1);
}

#[tokio::test]
async fn deletes_objects_page_by_page_then_the_user() {
    let app = TestApp::spawn().await;
    app.mock_caller(Some(USER_EMAIL)).await;
    // Removed objects leave the listing, so every page is read at offset 0
    mock_page(&app, 0, listing(0, 100)).await;
    mock_page(&app, 0, listing(100, 100)).await;
    mock_page(&app, 0, listing(200, 50)).await;
    mock_removals(&app, 3).await;
    mock_admin_delete(&app, ResponseTemplate::new(200).set_body_json(json!({}))).await;

    let response = app.post(ROUTE, Some(&bearer())).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_cors_headers(&response);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"ok": true, "message": "Account deleted"}));

    let removed = removed_paths(&app).await;
    assert_eq!(removed.len(), 250);
    assert!(removed.iter().all(|p| p.starts_with(&format!("{USER_ID}/"))));
    assert!(removed.contains(&format!("{USER_ID}/rx-0249.jpg")));

    // The identity goes last
    let requests = app.supabase.received_requests().await.unwrap();
    assert_eq!(requests.last().unwrap().url.path(), admin_path());
}

#[tokio::test]
async fn listing_failure_still_deletes_the_user() {
    let app = TestApp::spawn().await;
    app.mock_caller(Some(USER_EMAIL)).await;
    Mock::given(method("POST"))
        .and(path(list_path()))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "statusCode": "500",
            "error": "internal",
            "message": "storage unavailable"
        })))
        .expect(1)
        .mount(&app.supabase)
        .await;
    mock_removals(&app, 0).await;
    mock_admin_delete(&app, ResponseTemplate::new(200).set_body_json(json!({}))).await;

    let response = app.post(ROUTE, Some(&bearer())).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Account deleted");
}

#[tokio::test]
async fn removal_failure_does_not_stop_the_deletion() {
    let app = TestApp::spawn().await;
    app.mock_caller(Some(USER_EMAIL)).await;
    mock_page(&app, 0, listing(0, 3)).await;
    Mock::given(method("DELETE"))
        .and(path("/storage/v1/object/prescriptions"))
        .and(body_json(json!({
            "prefixes": [
                format!("{USER_ID}/rx-0000.jpg"),
                format!("{USER_ID}/rx-0001.jpg"),
                format!("{USER_ID}/rx-0002.jpg"),
            ]
        })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "denied"})))
        .expect(1)
        .mount(&app.supabase)
        .await;
    mock_admin_delete(&app, ResponseTemplate::new(200).set_body_json(json!({}))).await;

    let response = app.post(ROUTE, Some(&bearer())).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn already_deleted_user_returns_500_with_details() {
    let app = TestApp::spawn().await;
    app.mock_caller(None).await;
    mock_page(&app, 0, json!([])).await;
    mock_removals(&app, 0).await;
    mock_admin_delete(
        &app,
        ResponseTemplate::new(404).set_body_json(json!({
            "code": 404,
            "error_code": "user_not_found",
            "msg": "User not found"
        })),
    )
    .await;

    let response = app.post(ROUTE, Some(&bearer())).await;

    assert_eq!(response.status().as_u16(), 500);
    assert_cors_headers(&response);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "ok": false,
            "message": "Failed to delete user",
            "details": "User not found"
        })
    );
}

#[tokio::test]
async fn page_limit_stops_a_runaway_listing() {
    let app = TestApp::spawn_with(|settings| {
        settings.paging.page_size = 2;
        settings.paging.max_pages = 3;
    })
    .await;
    app.mock_caller(Some(USER_EMAIL)).await;
    Mock::given(method("POST"))
        .and(path(list_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(0, 2)))
        .expect(3)
        .mount(&app.supabase)
        .await;
    mock_removals(&app, 3).await;
    mock_admin_delete(&app, ResponseTemplate::new(200).set_body_json(json!({}))).await;

    let response = app.post(ROUTE, Some(&bearer())).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn missing_service_role_key_returns_500_before_any_call() {
    let app = TestApp::spawn_with(|settings| settings.supabase.service_role_key = None).await;
    app.mock_caller(Some(USER_EMAIL)).await;

    let response = app.post(ROUTE, Some(&bearer())).await;

    assert_eq!(response.status().as_u16(), 500);
    assert_cors_headers(&response);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["ok"], false);
    assert_eq!(body["message"], "Missing server env vars");
    assert_eq!(app.upstream_request_count().await, 0);
}
