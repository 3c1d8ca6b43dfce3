use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use loan_predict::scoring::{prediction_router, ModelSelector, PredictionService};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// Catalog entry describing one scoring variant for client model pickers.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ModelCatalogEntry {
    pub(crate) id: ModelSelector,
    pub(crate) display_name: &'static str,
    pub(crate) description: &'static str,
}

pub(crate) fn with_prediction_routes(service: Arc<PredictionService>) -> axum::Router {
    prediction_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/models", axum::routing::get(models_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn models_endpoint() -> Json<Vec<ModelCatalogEntry>> {
    Json(vec![
        ModelCatalogEntry {
            id: ModelSelector::RandomForest,
            display_name: "Random Forest",
            description: "Baseline ensemble variant with no conservatism adjustment",
        },
        ModelCatalogEntry {
            id: ModelSelector::XGBoost,
            display_name: "XGBoost",
            description: "Gradient boosting variant, scaled slightly more conservative",
        },
    ])
}
