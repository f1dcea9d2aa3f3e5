mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use common::json_body;
use sea_orm::ConnectionTrait;
use support::{survey_app, test_survey_state};

#[actix_web::test]
async fn health_reports_connected_store() {
    let app = survey_app(test_survey_state(None).await).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "core");
    assert_eq!(body["db"], "connected");
}

#[actix_web::test]
async fn list_returns_seeded_surveys_in_id_order() {
    let app = survey_app(test_survey_state(None).await).await;

    let req = test::TestRequest::get().uri("/api/surveys").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    let surveys = body.as_array().unwrap();
    assert_eq!(surveys.len(), 2);
    assert_eq!(surveys[0]["id"], 1);
    assert_eq!(surveys[0]["title"], "Оценка курса программирования");
    assert_eq!(surveys[1]["id"], 2);
    assert_eq!(surveys[1]["title"], "Опрос об университете");
    assert!(surveys[0].get("created_at").is_none());
}

#[actix_web::test]
async fn course_survey_has_three_ordered_questions() {
    let app = survey_app(test_survey_state(None).await).await;

    let req = test::TestRequest::get().uri("/api/surveys/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["survey"]["id"], 1);
    assert_eq!(body["survey"]["title"], "Оценка курса программирования");

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);

    let ids: Vec<i64> = questions.iter().map(|q| q["id"].as_i64().unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert!(questions.iter().all(|q| q["survey_id"] == 1));

    assert_eq!(questions[0]["type"], "radio");
    assert_eq!(
        questions[0]["options"],
        serde_json::json!(["Слишком легко", "В самый раз", "Слишком сложно"])
    );
    assert_eq!(questions[1]["type"], "checkbox");
    assert_eq!(questions[1]["options"].as_array().unwrap().len(), 4);
    assert_eq!(questions[2]["type"], "text");
    assert_eq!(questions[2]["text"], "Ваши пожелания на будущее");
    assert_eq!(questions[2]["options"], serde_json::json!([]));
}

#[actix_web::test]
async fn corrupt_options_degrade_to_empty_list() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_survey_state(None).await;
    state
        .db
        .execute_unprepared("UPDATE questions SET options = 'not json' WHERE id = 1")
        .await?;
    let app = survey_app(state).await;

    let req = test::TestRequest::get().uri("/api/surveys/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0]["id"], 1);
    assert_eq!(questions[0]["type"], "radio");
    assert_eq!(questions[0]["options"], serde_json::json!([]));
    // neighbours keep their options
    assert_eq!(questions[1]["options"].as_array().unwrap().len(), 4);
    Ok(())
}

#[actix_web::test]
async fn survey_without_questions_has_empty_list() {
    let app = survey_app(test_survey_state(None).await).await;

    let req = test::TestRequest::get().uri("/api/surveys/2").to_request();
    let body = json_body(test::call_service(&app, req).await).await;
    assert_eq!(body["survey"]["title"], "Опрос об университете");
    assert_eq!(body["questions"], serde_json::json!([]));
}

#[actix_web::test]
async fn missing_survey_is_404() {
    let app = survey_app(test_survey_state(None).await).await;

    let req = test::TestRequest::get().uri("/api/surveys/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        "SURVEY_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("Survey 999 not found"),
    )
    .await;
}

#[actix_web::test]
async fn bad_survey_id_is_400() {
    let app = survey_app(test_survey_state(None).await).await;

    for uri in ["/api/surveys/abc", "/api/surveys/0", "/api/surveys/-1"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(resp, "INVALID_SURVEY_ID", StatusCode::BAD_REQUEST, None).await;
    }
}
