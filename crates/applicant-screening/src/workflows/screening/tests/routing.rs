use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::screening::questionnaire::QuestionRole;
use crate::workflows::screening::router::evaluate_handler;
use crate::workflows::screening::{screening_router, ApplicantDocument};

fn evaluate_request(body: serde_json::Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post("/api/v1/screening/evaluate")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serialize body"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn evaluate_route_returns_accepted_view() {
    let router = screening_router(Arc::new(engine()));

    let response = router
        .oneshot(evaluate_request(applicant_document("cand-20", &cna_answers())))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["application_id"], json!("cand-20"));
    assert_eq!(body["disposition"], json!("accepted"));
    assert_eq!(body["status"], json!("Candidate"));
    assert!(body.get("missing").is_none());
}

#[tokio::test]
async fn evaluate_route_lists_missing_items() {
    let router = screening_router(Arc::new(engine()));
    let answers: Vec<_> = cna_answers()
        .into_iter()
        .filter(|(role, _)| *role != QuestionRole::DrugScreen)
        .collect();

    let response = router
        .oneshot(evaluate_request(applicant_document("cand-21", &answers)))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["disposition"], json!("incomplete"));
    assert_eq!(
        body["missing"],
        json!(["Are you able to pass a drug screen?"])
    );
    assert!(body.get("status").is_none());
}

#[tokio::test]
async fn evaluate_handler_rejects_documents_without_candidate_id() {
    let document = ApplicantDocument::from_value(json!({ "job_name": "Caregiver" }))
        .expect("document decodes");

    let response = evaluate_handler(State(Arc::new(engine())), axum::Json(document)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], json!("applicant document has no candidate id"));
}

#[tokio::test]
async fn evaluate_route_rejects_malformed_sections() {
    let router = screening_router(Arc::new(engine()));
    let body = json!({
        "candidate": { "id": "cand-22" },
        "application": {
            "application_form_data": { "form_sections": { "Screening": "not a list" } }
        }
    });

    let response = router
        .oneshot(evaluate_request(body))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
