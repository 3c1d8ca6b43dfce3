use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{LoanApplicationRequest, ModelSelector};
use super::service::{PredictionService, PredictionServiceError};

/// Payload accepted by the prediction endpoint: the applicant attributes plus
/// the model variant to score with.
#[derive(Debug, Deserialize)]
pub struct PredictionRequest {
    pub model: ModelSelector,
    pub applicant: LoanApplicationRequest,
}

/// Router builder exposing the HTTP scoring endpoint.
pub fn prediction_router(service: Arc<PredictionService>) -> Router {
    Router::new()
        .route("/api/v1/loans/predictions", post(predict_handler))
        .with_state(service)
}

pub(crate) async fn predict_handler(
    State(service): State<Arc<PredictionService>>,
    axum::Json(payload): axum::Json<PredictionRequest>,
) -> Response {
    match service.predict(payload.applicant, payload.model) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(PredictionServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
