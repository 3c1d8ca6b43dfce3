use serde::{Deserialize, Serialize};

/// Highest education attained by the applicant. Closed enumeration; the wire
/// labels match the upstream data set and anything else is rejected at
/// deserialization rather than silently scored as a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    Graduate,
    #[serde(rename = "Not Graduate")]
    NotGraduate,
}

/// Selects one of the two scoring variants. The variants share the same
/// indicator rubric and differ only in a conservatism multiplier applied by
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelSelector {
    RandomForest,
    XGBoost,
}

impl ModelSelector {
    pub const fn label(self) -> &'static str {
        match self {
            ModelSelector::RandomForest => "RandomForest",
            ModelSelector::XGBoost => "XGBoost",
        }
    }
}

/// Raw applicant attributes as submitted over the wire, before intake
/// validation. Monetary fields are currency-agnostic magnitudes.
///
/// `bank_asset_value` is optional because the upstream intake form never
/// collects it; an absent value is treated as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplicationRequest {
    pub dependents_count: u32,
    pub education: EducationLevel,
    pub self_employed: bool,
    pub annual_income: f64,
    pub loan_amount: f64,
    pub loan_term_months: u32,
    pub credit_score: u16,
    pub residential_assets_value: f64,
    pub commercial_assets_value: f64,
    pub luxury_assets_value: f64,
    #[serde(default)]
    pub bank_asset_value: f64,
}

/// Validated applicant snapshot consumed by the scoring engine. Amounts are
/// guaranteed finite and non-negative, the credit score sits within the
/// supported bureau range, and the loan term is at least one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub dependents_count: u32,
    pub education: EducationLevel,
    pub self_employed: bool,
    pub annual_income: f64,
    pub loan_amount: f64,
    pub loan_term_months: u32,
    pub credit_score: u16,
    pub residential_assets_value: f64,
    pub commercial_assets_value: f64,
    pub luxury_assets_value: f64,
    pub bank_asset_value: f64,
}

/// The five boolean heuristics contributing to the approval likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    StrongCredit,
    IncomeCoverage,
    GraduateEducation,
    BankReserves,
    AssetBacking,
}

/// One indicator evaluation, kept so callers can render a transparent
/// breakdown of the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReading {
    pub indicator: IndicatorKind,
    pub satisfied: bool,
    pub notes: String,
}

/// Outcome of a single scoring invocation. The probability is rounded to two
/// decimal places; the approval decision was taken on the pre-rounded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub model: ModelSelector,
    pub approved: bool,
    pub probability: f64,
    pub positive_count: u8,
    pub indicators: Vec<IndicatorReading>,
}
