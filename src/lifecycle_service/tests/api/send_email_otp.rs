use serde_json::{Value, json};
use wiremock::matchers::{any, body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{TestApp, USER_EMAIL, assert_cors_headers, bearer};

const ROUTE: &str = "/send-email-otp";

async fn mock_generator(app: &TestApp, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/create_email_otp"))
        .and(header("apikey", "anon-key"))
        .and(header("authorization", bearer().as_str()))
        .respond_with(response)
        .expect(1)
        .mount(&app.supabase)
        .await;
}

#[tokio::test]
async fn sends_the_generated_code_to_the_caller() {
    let app = TestApp::spawn().await;
    app.mock_caller(Some(USER_EMAIL)).await;
    mock_generator(&app, ResponseTemplate::new(200).set_body_json(json!("482913"))).await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("authorization", "Bearer re_test_key"))
        .and(body_partial_json(json!({
            "from": "PharmC <onboarding@resend.dev>",
            "to": [USER_EMAIL],
            "subject": "Your PharmC verification code"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "email-1"})))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post(ROUTE, Some(&bearer())).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_cors_headers(&response);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"ok": true, "message": "OTP sent"}));

    let sent = app.email_server.received_requests().await.unwrap();
    let email: Value = serde_json::from_slice(&sent[0].body).unwrap();
    let html = email["html"].as_str().unwrap();
    assert!(html.contains("482913"));
    assert!(html.contains("This code expires in 10 minutes."));
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
async fn caller_without_email_returns_401() {
    let app = TestApp::spawn().await;
    app.mock_caller(None).await;

    let response = app.post(ROUTE, Some(&bearer())).await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Not authenticated");
    assert_eq!(app.upstream_request_count().await, 1);
}

#[tokio::test]
async fn missing_configuration_returns_500_before_any_call() {
    for missing in ["url", "anon_key", "email_key"] {
        let app = TestApp::spawn_with(|settings| match missing {
            "url" => settings.supabase.url = None,
            "anon_key" => settings.supabase.anon_key = None,
            _ => settings.email.api_key = None,
        })
        .await;
        app.mock_caller(Some(USER_EMAIL)).await;

        let response = app.post(ROUTE, Some(&bearer())).await;

        assert_eq!(response.status().as_u16(), 500, "missing {missing}");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["message"], "Missing server env vars");
        assert_eq!(app.upstream_request_count().await, 0, "missing {missing}");
    }
}

#[tokio::test]
async fn generator_error_returns_500_with_details() {
    let app = TestApp::spawn().await;
    app.mock_caller(Some(USER_EMAIL)).await;
    mock_generator(
        &app,
        ResponseTemplate::new(400).set_body_json(json!({
            "code": "P0001",
            "message": "Too many codes requested"
        })),
    )
    .await;

    let response = app.post(ROUTE, Some(&bearer())).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "ok": false,
            "message": "Failed to create OTP",
            "details": "Too many codes requested"
        })
    );
    assert!(
        app.email_server
            .received_requests()
            .await
            .unwrap_or_default()
            .is_empty()
    );
}

#[tokio::test]
async fn empty_generator_reply_returns_500_without_details() {
    let app = TestApp::spawn().await;
    app.mock_caller(Some(USER_EMAIL)).await;
    mock_generator(&app, ResponseTemplate::new(200).set_body_json(json!(null))).await;

    let response = app.post(ROUTE, Some(&bearer())).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"ok": false, "message": "Failed to create OTP"}));
}

#[tokio::test]
async fn provider_rejection_returns_502_with_raw_body() {
    let app = TestApp::spawn().await;
    app.mock_caller(Some(USER_EMAIL)).await;
    mock_generator(&app, ResponseTemplate::new(200).set_body_json(json!("482913"))).await;
    let provider_body =
        r#"{"statusCode":403,"message":"You can only send testing emails to your own email address","name":"validation_error"}"#;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(403).set_body_string(provider_body))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post(ROUTE, Some(&bearer())).await;

    assert_eq!(response.status().as_u16(), 502);
    assert_cors_headers(&response);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["ok"], false);
    assert_eq!(body["message"], "Email sending failed");
    assert_eq!(body["details"], provider_body);
}
