mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::{verify_access_token, Role};
use backend_test_support::problem_details::assert_problem_details;
use common::json_body;
use serde_json::json;
use support::{auth_app, test_auth_state, test_security};

#[actix_web::test]
async fn admin_login_issues_admin_token() -> Result<(), Box<dyn std::error::Error>> {
    let app = auth_app(test_auth_state()).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"username": "admin", "password": "admin123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert_eq!(body["user"], "admin");
    assert_eq!(body["role"], "admin");

    let claims = verify_access_token(token, &test_security())?;
    assert_eq!(claims.sub, "admin");
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(body["expires"].as_i64(), Some(claims.exp));
    assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    Ok(())
}

#[actix_web::test]
async fn every_default_login_succeeds() {
    let app = auth_app(test_auth_state()).await;

    for (username, password, role) in [("admin", "admin123", "admin"), ("user", "user123", "user")] {
        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({"username": username, "password": password}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "login {username}");
        let body = json_body(resp).await;
        assert_eq!(body["user"], username);
        assert_eq!(body["role"], role);
    }
}

#[actix_web::test]
async fn wrong_password_is_invalid_credentials() {
    let app = auth_app(test_auth_state()).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"username": "admin", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, "INVALID_CREDENTIALS", StatusCode::UNAUTHORIZED, None).await;
}

#[actix_web::test]
async fn unknown_user_is_indistinguishable_from_wrong_password() {
    let app = auth_app(test_auth_state()).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"username": "mallory", "password": "admin123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let problem =
        assert_problem_details(resp, "INVALID_CREDENTIALS", StatusCode::UNAUTHORIZED, None).await;
    assert_eq!(problem.detail, "Invalid credentials");
}

#[actix_web::test]
async fn malformed_bodies_are_rejected_before_credential_checks() {
    let app = auth_app(test_auth_state()).await;

    let cases: [&'static str; 5] = [
        "",
        "not json",
        r#"{"username":"admin"}"#,
        r#"{"username":"","password":"admin123"}"#,
        r#"{"username":42,"password":"admin123"}"#,
    ];

    for body in cases {
        let req = test::TestRequest::post()
            .uri("/auth/login")
            .insert_header(("Content-Type", "application/json"))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(resp, "MALFORMED_REQUEST", StatusCode::BAD_REQUEST, None).await;
    }
}

#[actix_web::test]
async fn auth_health_reports_service_and_time() {
    let app = auth_app(test_auth_state()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "auth");
    assert!(body["time"].as_i64().unwrap() > 1_600_000_000);
}
