use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::leads::{
    LeadId, LeadNotifier, LeadRepository, LeadRepositoryError, LeadServiceError, LeadSubmission,
    QuizLeadService,
};

/// Router builder exposing HTTP endpoints for quiz lead capture.
pub fn lead_router<R, N>(service: Arc<QuizLeadService<R, N>>) -> Router
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
{
    Router::new()
        .route("/api/v1/quiz/leads", post(capture_handler::<R, N>))
        .route("/api/v1/quiz/leads/:lead_id", get(lead_handler::<R, N>))
        .with_state(service)
}

pub(crate) async fn capture_handler<R, N>(
    State(service): State<Arc<QuizLeadService<R, N>>>,
    axum::Json(submission): axum::Json<LeadSubmission>,
) -> Response
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
{
    match service.capture(submission) {
        Ok(lead) => (StatusCode::ACCEPTED, axum::Json(lead)).into_response(),
        Err(LeadServiceError::Submission(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(LeadServiceError::Repository(LeadRepositoryError::Conflict)) => {
            let payload = json!({ "error": "lead already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn lead_handler<R, N>(
    State(service): State<Arc<QuizLeadService<R, N>>>,
    Path(lead_id): Path<String>,
) -> Response
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
{
    let id = LeadId(lead_id);
    match service.get(&id) {
        Ok(lead) => (StatusCode::OK, axum::Json(lead)).into_response(),
        Err(LeadServiceError::Repository(LeadRepositoryError::NotFound)) => {
            let payload = json!({ "lead_id": id.0, "error": "lead not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
