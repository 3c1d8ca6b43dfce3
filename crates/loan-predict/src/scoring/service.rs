use super::domain::{ApplicantRecord, LoanApplicationRequest, ModelSelector, PredictionResult};
use super::engine::ScoringEngine;
use super::intake::{IntakeError, IntakeGuard};

/// Service composing the intake guard and the scoring engine.
///
/// Predictions are transient: nothing is persisted, each call is independent,
/// and the only state is the injected randomness source inside the engine.
pub struct PredictionService {
    guard: IntakeGuard,
    engine: ScoringEngine,
}

impl PredictionService {
    pub fn new() -> Self {
        Self::with_engine(ScoringEngine::new())
    }

    pub fn with_engine(engine: ScoringEngine) -> Self {
        Self {
            guard: IntakeGuard,
            engine,
        }
    }

    /// Validate a wire request and score it with the selected model.
    pub fn predict(
        &self,
        request: LoanApplicationRequest,
        model: ModelSelector,
    ) -> Result<PredictionResult, PredictionServiceError> {
        let record = self.guard.record_from_request(request)?;
        Ok(self.engine.score(&record, model))
    }

    /// Score a record that has already passed intake.
    pub fn score_record(&self, record: &ApplicantRecord, model: ModelSelector) -> PredictionResult {
        self.engine.score(record, model)
    }
}

impl Default for PredictionService {
    fn default() -> Self {
        Self::new()
    }
}

/// Error raised by the prediction service.
#[derive(Debug, thiserror::Error)]
pub enum PredictionServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
}
