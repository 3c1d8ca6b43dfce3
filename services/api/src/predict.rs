use clap::Args;
use loan_predict::error::AppError;
use loan_predict::scoring::{
    EducationLevel, LoanApplicationRequest, ModelSelector, PredictionService,
};

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Model variant to score with (RandomForest or XGBoost)
    #[arg(long, value_parser = crate::infra::parse_model, default_value = "RandomForest")]
    pub(crate) model: ModelSelector,
    /// Number of dependents in the applicant's household
    #[arg(long, default_value_t = 0)]
    pub(crate) dependents: u32,
    /// Applicant education level (Graduate or 'Not Graduate')
    #[arg(long, value_parser = crate::infra::parse_education, default_value = "Graduate")]
    pub(crate) education: EducationLevel,
    /// Whether the applicant is self-employed
    #[arg(long)]
    pub(crate) self_employed: bool,
    /// Annual income
    #[arg(long)]
    pub(crate) annual_income: f64,
    /// Requested loan amount
    #[arg(long)]
    pub(crate) loan_amount: f64,
    /// Loan term in months
    #[arg(long, default_value_t = 120)]
    pub(crate) loan_term_months: u32,
    /// Credit score (300-900)
    #[arg(long)]
    pub(crate) credit_score: u16,
    /// Residential assets value
    #[arg(long, default_value_t = 0.0)]
    pub(crate) residential_assets: f64,
    /// Commercial assets value
    #[arg(long, default_value_t = 0.0)]
    pub(crate) commercial_assets: f64,
    /// Luxury assets value
    #[arg(long, default_value_t = 0.0)]
    pub(crate) luxury_assets: f64,
    /// Bank assets value
    #[arg(long, default_value_t = 0.0)]
    pub(crate) bank_assets: f64,
}

/// Score one applicant in process and print the outcome, mirroring what the
/// HTTP endpoint returns.
pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let request = LoanApplicationRequest {
        dependents_count: args.dependents,
        education: args.education,
        self_employed: args.self_employed,
        annual_income: args.annual_income,
        loan_amount: args.loan_amount,
        loan_term_months: args.loan_term_months,
        credit_score: args.credit_score,
        residential_assets_value: args.residential_assets,
        commercial_assets_value: args.commercial_assets,
        luxury_assets_value: args.luxury_assets,
        bank_asset_value: args.bank_assets,
    };

    let service = PredictionService::new();
    let result = service.predict(request, args.model)?;

    println!("Model:       {}", result.model.label());
    println!(
        "Decision:    {}",
        if result.approved { "approved" } else { "rejected" }
    );
    println!("Probability: {:.2}", result.probability);
    println!("Indicators:  {}/5 satisfied", result.positive_count);
    for reading in &result.indicators {
        let marker = if reading.satisfied { "+" } else { "-" };
        println!("  [{marker}] {}", reading.notes);
    }

    Ok(())
}
