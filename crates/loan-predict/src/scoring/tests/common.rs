use std::sync::Arc;

use crate::scoring::domain::{ApplicantRecord, EducationLevel, LoanApplicationRequest};
use crate::scoring::engine::{RandomSource, ScoringEngine};

/// Deterministic source returning the same draw on every call.
pub(super) struct FixedSource(pub(super) f64);

impl RandomSource for FixedSource {
    fn draw(&self) -> f64 {
        self.0
    }
}

pub(super) fn engine_with_draw(draw: f64) -> ScoringEngine {
    ScoringEngine::with_random(Arc::new(FixedSource(draw)))
}

/// Record satisfying all five approval indicators.
pub(super) fn strong_record() -> ApplicantRecord {
    ApplicantRecord {
        dependents_count: 1,
        education: EducationLevel::Graduate,
        self_employed: false,
        annual_income: 900_000.0,
        loan_amount: 200_000.0,
        loan_term_months: 120,
        credit_score: 760,
        residential_assets_value: 150_000.0,
        commercial_assets_value: 100_000.0,
        luxury_assets_value: 50_000.0,
        bank_asset_value: 150_000.0,
    }
}

/// Record satisfying none of the indicators.
pub(super) fn weak_record() -> ApplicantRecord {
    ApplicantRecord {
        dependents_count: 3,
        education: EducationLevel::NotGraduate,
        self_employed: true,
        annual_income: 100_000.0,
        loan_amount: 400_000.0,
        loan_term_months: 60,
        credit_score: 640,
        residential_assets_value: 0.0,
        commercial_assets_value: 0.0,
        luxury_assets_value: 0.0,
        bank_asset_value: 0.0,
    }
}

/// Wire request that passes intake unchanged.
pub(super) fn valid_request() -> LoanApplicationRequest {
    LoanApplicationRequest {
        dependents_count: 2,
        education: EducationLevel::Graduate,
        self_employed: false,
        annual_income: 540_000.0,
        loan_amount: 150_000.0,
        loan_term_months: 240,
        credit_score: 712,
        residential_assets_value: 80_000.0,
        commercial_assets_value: 40_000.0,
        luxury_assets_value: 20_000.0,
        bank_asset_value: 60_000.0,
    }
}
