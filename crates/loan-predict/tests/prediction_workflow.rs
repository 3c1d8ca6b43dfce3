//! Integration specifications for the loan prediction workflow.
//!
//! Scenarios drive the public service facade and the HTTP router end to end,
//! with the randomness source pinned so outcomes are assertable.

mod common {
    use std::sync::Arc;

    use loan_predict::scoring::{
        EducationLevel, LoanApplicationRequest, PredictionService, RandomSource, ScoringEngine,
    };

    pub(super) struct FixedSource(pub(super) f64);

    impl RandomSource for FixedSource {
        fn draw(&self) -> f64 {
            self.0
        }
    }

    pub(super) fn service_with_draw(draw: f64) -> PredictionService {
        PredictionService::with_engine(ScoringEngine::with_random(Arc::new(FixedSource(draw))))
    }

    pub(super) fn strong_applicant() -> LoanApplicationRequest {
        LoanApplicationRequest {
            dependents_count: 0,
            education: EducationLevel::Graduate,
            self_employed: false,
            annual_income: 1_200_000.0,
            loan_amount: 300_000.0,
            loan_term_months: 240,
            credit_score: 780,
            residential_assets_value: 250_000.0,
            commercial_assets_value: 120_000.0,
            luxury_assets_value: 40_000.0,
            bank_asset_value: 200_000.0,
        }
    }

    pub(super) fn applicant_json() -> serde_json::Value {
        serde_json::to_value(strong_applicant()).expect("applicant serializes")
    }
}

mod service {
    use super::common::*;
    use loan_predict::scoring::{IntakeError, ModelSelector, PredictionServiceError};

    #[test]
    fn strong_applicant_is_approved_under_a_high_draw() {
        let service = service_with_draw(0.9);
        let result = service
            .predict(strong_applicant(), ModelSelector::RandomForest)
            .expect("prediction succeeds");

        assert!(result.approved);
        assert_eq!(result.positive_count, 5);
        assert_eq!(result.model, ModelSelector::RandomForest);
        assert!((0.0..=1.0).contains(&result.probability));
    }

    #[test]
    fn intake_failure_surfaces_before_scoring() {
        let service = service_with_draw(0.9);
        let mut applicant = strong_applicant();
        applicant.credit_score = 1_000;

        match service.predict(applicant, ModelSelector::XGBoost) {
            Err(PredictionServiceError::Intake(IntakeError::CreditScoreOutOfRange { found })) => {
                assert_eq!(found, 1_000);
            }
            other => panic!("expected credit score rejection, got {other:?}"),
        }
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use loan_predict::scoring::prediction_router;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn build_router(draw: f64) -> axum::Router {
        prediction_router(Arc::new(service_with_draw(draw)))
    }

    async fn post_prediction(router: axum::Router, payload: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/loans/predictions")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&payload).expect("serialize payload"),
            ))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let value: Value = serde_json::from_slice(&body).expect("json body");
        (status, value)
    }

    #[tokio::test]
    async fn post_prediction_returns_result_payload() {
        let router = build_router(1.0);
        let payload = json!({
            "model": "RandomForest",
            "applicant": applicant_json(),
        });

        let (status, body) = post_prediction(router, payload).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.get("model"), Some(&json!("RandomForest")));
        assert_eq!(body.get("approved"), Some(&json!(true)));
        assert_eq!(body.get("probability").and_then(Value::as_f64), Some(1.0));
        assert_eq!(body.get("positive_count").and_then(Value::as_u64), Some(5));
        assert_eq!(
            body.get("indicators")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(5)
        );
    }

    #[tokio::test]
    async fn xgboost_result_echoes_its_selector() {
        let router = build_router(0.0);
        let payload = json!({
            "model": "XGBoost",
            "applicant": applicant_json(),
        });

        let (status, body) = post_prediction(router, payload).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.get("model"), Some(&json!("XGBoost")));
        assert_eq!(body.get("probability").and_then(Value::as_f64), Some(0.76));
    }

    #[tokio::test]
    async fn invalid_applicant_yields_unprocessable_entity() {
        let router = build_router(0.5);
        let mut applicant = applicant_json();
        applicant["loan_amount"] = json!(-250.0);
        let payload = json!({
            "model": "RandomForest",
            "applicant": applicant,
        });

        let (status, body) = post_prediction(router, payload).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .expect("error message present");
        assert!(message.contains("loan_amount"));
    }
}
