use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::collaborators::ScreeningStatusView;
use super::engine::ScreeningEngine;
use super::payload::ApplicantDocument;

/// Router exposing stateless evaluation of a single applicant document.
pub fn screening_router(engine: Arc<ScreeningEngine>) -> Router {
    Router::new()
        .route("/api/v1/screening/evaluate", post(evaluate_handler))
        .with_state(engine)
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<ScreeningEngine>>,
    axum::Json(document): axum::Json<ApplicantDocument>,
) -> Response {
    let intake = match document.into_intake() {
        Ok(intake) => intake,
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    let screening = engine.screen(&intake.profile, &intake.schema, &intake.answers);
    let view = ScreeningStatusView {
        application_id: screening.application_id.clone(),
        disposition: screening.disposition().label(),
        rationale: screening.rationale(),
        missing: screening.missing(),
        status: screening
            .decision()
            .map(|decision| engine.status_label(decision).to_string()),
    };

    (StatusCode::OK, axum::Json(view)).into_response()
}
