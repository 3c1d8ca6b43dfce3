use std::sync::Arc;

use rand::Rng;

use super::domain::{ApplicantRecord, ModelSelector, PredictionResult};
use super::indicators;

/// Source of the uniform draw blended into every score. Kept behind a trait
/// so the engine is deterministic under test while production wiring uses a
/// real generator.
pub trait RandomSource: Send + Sync {
    /// Draw a value uniformly from `[0, 1)`.
    fn draw(&self) -> f64;
}

/// Production source backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn draw(&self) -> f64 {
        rand::thread_rng().gen()
    }
}

const RANDOM_BLEND_WEIGHT: f64 = 0.2;
const XGBOOST_CONSERVATISM: f64 = 0.95;
const APPROVAL_THRESHOLD: f64 = 0.5;

/// Stateless scoring engine applying the indicator rubric to a record.
///
/// Each invocation is independent: the base probability is the fraction of
/// indicators satisfied, blended with one fresh uniform draw, with the
/// XGBoost variant scaled down for conservatism. The engine performs no
/// validation and never fails; callers are expected to run intake first.
pub struct ScoringEngine {
    random: Arc<dyn RandomSource>,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self::with_random(Arc::new(ThreadRngSource))
    }

    pub fn with_random(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    pub fn score(&self, record: &ApplicantRecord, model: ModelSelector) -> PredictionResult {
        let (readings, positive_count) = indicators::evaluate_indicators(record);
        let base_probability =
            f64::from(positive_count) / f64::from(indicators::INDICATOR_COUNT);

        let draw = self.random.draw();
        let mut probability =
            base_probability * (1.0 - RANDOM_BLEND_WEIGHT) + draw * RANDOM_BLEND_WEIGHT;

        if model == ModelSelector::XGBoost {
            probability *= XGBOOST_CONSERVATISM;
        }

        // Decide before rounding so the reported two-decimal value never
        // flips the outcome.
        let approved = probability > APPROVAL_THRESHOLD;

        PredictionResult {
            model,
            approved,
            probability: round_to_hundredths(probability),
            positive_count,
            indicators: readings,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to two decimal places, half away from zero.
pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
