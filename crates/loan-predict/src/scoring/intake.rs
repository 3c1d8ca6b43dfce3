use super::domain::{ApplicantRecord, LoanApplicationRequest};

/// Lowest score on the supported credit bureau scale.
pub const CREDIT_SCORE_MIN: u16 = 300;
/// Highest score on the supported credit bureau scale.
pub const CREDIT_SCORE_MAX: u16 = 900;

/// Validation errors raised before scoring is attempted.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("{field} must be a finite amount, found {found}")]
    NonFiniteAmount { field: &'static str, found: f64 },
    #[error("{field} must not be negative, found {found}")]
    NegativeAmount { field: &'static str, found: f64 },
    #[error("credit score {found} outside the supported 300-900 range")]
    CreditScoreOutOfRange { found: u16 },
    #[error("loan term must be at least one month")]
    ZeroLoanTerm,
}

/// Guard producing validated [`ApplicantRecord`]s from wire requests.
///
/// The scoring engine is deliberately permissive, so every range check lives
/// here: amounts must be finite and non-negative, the credit score must sit
/// within the bureau scale, and the loan term must be positive. Values are
/// carried through unchanged; intake never adjusts the scoring inputs.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn record_from_request(
        &self,
        request: LoanApplicationRequest,
    ) -> Result<ApplicantRecord, IntakeError> {
        check_amount("annual_income", request.annual_income)?;
        check_amount("loan_amount", request.loan_amount)?;
        check_amount("residential_assets_value", request.residential_assets_value)?;
        check_amount("commercial_assets_value", request.commercial_assets_value)?;
        check_amount("luxury_assets_value", request.luxury_assets_value)?;
        check_amount("bank_asset_value", request.bank_asset_value)?;

        if !(CREDIT_SCORE_MIN..=CREDIT_SCORE_MAX).contains(&request.credit_score) {
            return Err(IntakeError::CreditScoreOutOfRange {
                found: request.credit_score,
            });
        }

        if request.loan_term_months == 0 {
            return Err(IntakeError::ZeroLoanTerm);
        }

        Ok(ApplicantRecord {
            dependents_count: request.dependents_count,
            education: request.education,
            self_employed: request.self_employed,
            annual_income: request.annual_income,
            loan_amount: request.loan_amount,
            loan_term_months: request.loan_term_months,
            credit_score: request.credit_score,
            residential_assets_value: request.residential_assets_value,
            commercial_assets_value: request.commercial_assets_value,
            luxury_assets_value: request.luxury_assets_value,
            bank_asset_value: request.bank_asset_value,
        })
    }
}

fn check_amount(field: &'static str, found: f64) -> Result<(), IntakeError> {
    if !found.is_finite() {
        return Err(IntakeError::NonFiniteAmount { field, found });
    }
    if found < 0.0 {
        return Err(IntakeError::NegativeAmount { field, found });
    }
    Ok(())
}
