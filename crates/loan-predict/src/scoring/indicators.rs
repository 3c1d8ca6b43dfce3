use super::domain::{ApplicantRecord, EducationLevel, IndicatorKind, IndicatorReading};

pub(crate) const INDICATOR_COUNT: u8 = 5;

const CREDIT_SCORE_THRESHOLD: u16 = 700;
const INCOME_COVERAGE_MULTIPLE: f64 = 3.0;
const BANK_RESERVE_FRACTION: f64 = 0.5;

/// Evaluate the five approval indicators against a record, returning the
/// per-indicator readings and the number satisfied. Comparisons are strict
/// `>` throughout, so degenerate inputs (zero or infinite amounts) simply
/// fail the relevant indicator instead of erroring.
pub(crate) fn evaluate_indicators(record: &ApplicantRecord) -> (Vec<IndicatorReading>, u8) {
    let mut readings = Vec::with_capacity(INDICATOR_COUNT as usize);
    let mut positive_count = 0u8;

    let strong_credit = record.credit_score > CREDIT_SCORE_THRESHOLD;
    if strong_credit {
        positive_count += 1;
    }
    readings.push(IndicatorReading {
        indicator: IndicatorKind::StrongCredit,
        satisfied: strong_credit,
        notes: format!(
            "credit score {} {} threshold {}",
            record.credit_score,
            if strong_credit { "above" } else { "at or below" },
            CREDIT_SCORE_THRESHOLD
        ),
    });

    let required_income = record.loan_amount * INCOME_COVERAGE_MULTIPLE;
    let income_coverage = record.annual_income > required_income;
    if income_coverage {
        positive_count += 1;
    }
    readings.push(IndicatorReading {
        indicator: IndicatorKind::IncomeCoverage,
        satisfied: income_coverage,
        notes: format!(
            "annual income {:.0} {} {:.0}x the loan amount ({:.0})",
            record.annual_income,
            if income_coverage {
                "exceeds"
            } else {
                "does not exceed"
            },
            INCOME_COVERAGE_MULTIPLE,
            required_income
        ),
    });

    let graduate = record.education == EducationLevel::Graduate;
    if graduate {
        positive_count += 1;
    }
    readings.push(IndicatorReading {
        indicator: IndicatorKind::GraduateEducation,
        satisfied: graduate,
        notes: if graduate {
            "applicant holds a graduate degree".to_string()
        } else {
            "applicant is not a graduate".to_string()
        },
    });

    let required_reserve = record.loan_amount * BANK_RESERVE_FRACTION;
    let bank_reserves = record.bank_asset_value > required_reserve;
    if bank_reserves {
        positive_count += 1;
    }
    readings.push(IndicatorReading {
        indicator: IndicatorKind::BankReserves,
        satisfied: bank_reserves,
        notes: format!(
            "bank assets {:.0} {} half the loan amount ({:.0})",
            record.bank_asset_value,
            if bank_reserves {
                "exceed"
            } else {
                "do not exceed"
            },
            required_reserve
        ),
    });

    let combined_assets = record.residential_assets_value + record.commercial_assets_value;
    let asset_backing = combined_assets > record.loan_amount;
    if asset_backing {
        positive_count += 1;
    }
    readings.push(IndicatorReading {
        indicator: IndicatorKind::AssetBacking,
        satisfied: asset_backing,
        notes: format!(
            "residential plus commercial assets {:.0} {} the loan amount ({:.0})",
            combined_assets,
            if asset_backing {
                "exceed"
            } else {
                "do not exceed"
            },
            record.loan_amount
        ),
    });

    (readings, positive_count)
}
