use loan_predict::scoring::{EducationLevel, ModelSelector, PredictionService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_prediction_service() -> PredictionService {
    PredictionService::new()
}

pub(crate) fn parse_model(raw: &str) -> Result<ModelSelector, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "randomforest" | "random-forest" | "random_forest" => Ok(ModelSelector::RandomForest),
        "xgboost" => Ok(ModelSelector::XGBoost),
        other => Err(format!(
            "unknown model '{other}' (expected RandomForest or XGBoost)"
        )),
    }
}

pub(crate) fn parse_education(raw: &str) -> Result<EducationLevel, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "graduate" => Ok(EducationLevel::Graduate),
        "not graduate" | "not-graduate" | "not_graduate" => Ok(EducationLevel::NotGraduate),
        other => Err(format!(
            "unknown education level '{other}' (expected Graduate or 'Not Graduate')"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_parser_accepts_common_spellings() {
        assert_eq!(parse_model("RandomForest"), Ok(ModelSelector::RandomForest));
        assert_eq!(parse_model("random_forest"), Ok(ModelSelector::RandomForest));
        assert_eq!(parse_model(" xgboost "), Ok(ModelSelector::XGBoost));
        assert!(parse_model("lightgbm").is_err());
    }

    #[test]
    fn education_parser_accepts_common_spellings() {
        assert_eq!(parse_education("Graduate"), Ok(EducationLevel::Graduate));
        assert_eq!(
            parse_education("Not Graduate"),
            Ok(EducationLevel::NotGraduate)
        );
        assert_eq!(
            parse_education("not_graduate"),
            Ok(EducationLevel::NotGraduate)
        );
        assert!(parse_education("doctorate").is_err());
    }
}
