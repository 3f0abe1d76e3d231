//! Integration tests for the verify-code endpoint

mod common;

use actix_web::test;
use serde_json::{json, Value};
use tk_api::create_app;
use tk_shared::config::{CorsConfig, Environment};

use common::test_context;

macro_rules! init_app {
    ($ctx:expr) => {
        test::init_service(create_app(
            $ctx.state.clone(),
            &CorsConfig::default(),
            Environment::Development,
        ))
        .await
    };
}

fn post(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post().uri(uri).set_json(body)
}

fn wrong_code(code: &str) -> &'static str {
    if code == "123456" {
        "654321"
    } else {
        "123456"
    }
}

#[actix_web::test]
async fn test_verify_code_success() {
    let ctx = test_context(false);
    let app = init_app!(ctx);

    let req = post("/api/v1/auth/send-code", json!({ "email": "user@example.com" })).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
    let code = ctx.mail.last_code();

    let req = post("/api/v1/auth/verify-code", json!({ "email": " USER@example.com", "code": code })).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["verified"], true);

    // Codes are single use
    let req = post("/api/v1/auth/verify-code", json!({ "email": "user@example.com", "code": code })).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "invalid_code");
}

#[actix_web::test]
async fn test_verify_code_validation_errors() {
    let ctx = test_context(false);
    let app = init_app!(ctx);

    let req = post("/api/v1/auth/send-code", json!({ "email": "user@example.com" })).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    for body in [
        json!({ "email": "", "code": "123456" }),
        json!({ "email": "user@example.com", "code": "12345" }),
        json!({ "email": "user@example.com", "code": "12a456" }),
        json!({ "email": "user@example.com", "code": "１２３４５６" }),
        json!({ "email": "user@example.com" }),
    ] {
        let req = post("/api/v1/auth/verify-code", body.clone()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "body: {}", body);

        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error["error"], "validation_error", "body: {}", body);
    }

    // Malformed input never counts as an attempt
    let record = ctx.state.auth_service.verification_service().record("user@example.com").unwrap();
    assert_eq!(record.attempts, 0);
}

#[actix_web::test]
async fn test_wrong_unknown_and_locked_codes_look_the_same() {
    let ctx = test_context(false);
    let app = init_app!(ctx);

    let req = post("/api/v1/auth/verify-code", json!({ "email": "nobody@example.com", "code": "123456" })).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let unknown: Value = test::read_body_json(resp).await;

    let req = post("/api/v1/auth/send-code", json!({ "email": "user@example.com" })).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
    let code = ctx.mail.last_code();
    let wrong = wrong_code(&code);

    let mut wrong_bodies = Vec::new();
    for _ in 0..5 {
        let req = post("/api/v1/auth/verify-code", json!({ "email": "user@example.com", "code": wrong })).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        wrong_bodies.push(test::read_body_json::<Value, _>(resp).await);
    }

    // Locked out: even the right code is refused
    let req = post("/api/v1/auth/verify-code", json!({ "email": "user@example.com", "code": code })).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let locked: Value = test::read_body_json(resp).await;

    for body in wrong_bodies.iter().chain([&unknown, &locked]) {
        assert_eq!(body["error"], "invalid_code");
        assert_eq!(body["message"], unknown["message"]);
        assert!(body.get("details").is_none());
    }
}

#[actix_web::test]
async fn test_expired_code() {
    let ctx = test_context(false);
    let app = init_app!(ctx);

    let req = post("/api/v1/auth/send-code", json!({ "email": "user@example.com" })).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
    let code = ctx.mail.last_code();

    ctx.clock.advance_secs(181);

    let req = post("/api/v1/auth/verify-code", json!({ "email": "user@example.com", "code": code })).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "code_expired");

    // The expired record is gone; a new code can be requested right away
    let req = post("/api/v1/auth/verify-code", json!({ "email": "user@example.com", "code": code })).to_request();
    let resp = test::call_service(&app, req).await;
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "invalid_code");

    let req = post("/api/v1/auth/send-code", json!({ "email": "user@example.com" })).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
}
