//! Loan application intake and heuristic approval scoring.
//!
//! The flow mirrors the service surface: a wire [`LoanApplicationRequest`]
//! passes through the [`IntakeGuard`], the resulting [`ApplicantRecord`] is
//! scored by the [`ScoringEngine`], and the [`PredictionResult`] is returned
//! to the caller. The engine itself never validates; intake fails fast so the
//! scoring formula stays untouched by error handling.

pub mod domain;
pub mod engine;
pub(crate) mod indicators;
pub mod intake;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantRecord, EducationLevel, IndicatorKind, IndicatorReading, LoanApplicationRequest,
    ModelSelector, PredictionResult,
};
pub use engine::{RandomSource, ScoringEngine, ThreadRngSource};
pub use intake::{IntakeError, IntakeGuard};
pub use router::{prediction_router, PredictionRequest};
pub use service::{PredictionService, PredictionServiceError};
