//! Check 7: Home loan interest under Section 24(b).
//!
//! Display-only: the interest the user already declared is folded into the
//! old-regime taxable income by the regime comparator, so savings here are
//! reported as 0 to keep the orchestrator's total free of double-counting.
//! The check exists to surface the ₹2L self-occupied cap.

use serde_json::json;

use crate::constants::{CESS_RATE, LIMIT_24B_SELF_OCCUPIED};
use crate::models::{
    format_rupees, AgeCategory, Confidence, Finding, FindingStatus, SalaryProfile, TaxRegime,
};
use crate::tax_math::{
    get_marginal_rate, old_regime_taxable_income, round_rupees, OldRegimeOverrides,
};

pub const CHECK_ID: &str = "home_loan_check";
const CHECK_NAME: &str = "Home Loan Interest (Section 24(b))";

/// Check home loan interest treatment under the old regime.
pub fn check_home_loan(salary: &SalaryProfile) -> Finding {
    let fy = salary.financial_year;
    let claimed = salary.deduction_24b;

    if claimed == 0 {
        return Finding {
            check_id: CHECK_ID.to_string(),
            check_name: CHECK_NAME.to_string(),
            status: FindingStatus::NotApplicable,
            finding: "No home loan interest declared".to_string(),
            savings: 0,
            action: "N/A".to_string(),
            deadline: "N/A".to_string(),
            confidence: Confidence::Definite,
            explanation: String::new(),
            details: json!({
                "claimed_24b": 0,
                "limit": LIMIT_24B_SELF_OCCUPIED,
            }),
        };
    }

    let capped = claimed.min(LIMIT_24B_SELF_OCCUPIED);
    let breakdown = old_regime_taxable_income(salary, &OldRegimeOverrides::default());
    let marginal = get_marginal_rate(
        breakdown.gross_total_income,
        TaxRegime::Old,
        fy,
        AgeCategory::BelowSixty,
    );
    let display_saving = round_rupees(capped as f64 * marginal * (1.0 + CESS_RATE));

    let cap_note = if claimed > LIMIT_24B_SELF_OCCUPIED {
        format!(
            " Interest above the \u{20b9}{} self-occupied cap does not deduct.",
            format_rupees(LIMIT_24B_SELF_OCCUPIED)
        )
    } else {
        String::new()
    };

    Finding {
        check_id: CHECK_ID.to_string(),
        check_name: CHECK_NAME.to_string(),
        status: FindingStatus::Opportunity,
        finding: format!(
            "\u{20b9}{} home loan interest deducts under the old regime \
             (capped at \u{20b9}{})",
            format_rupees(capped),
            format_rupees(LIMIT_24B_SELF_OCCUPIED)
        ),
        savings: 0,
        action: "Keep the lender's interest certificate for ITR filing. \
                 The 24(b) benefit is captured in the regime switch recommendation"
            .to_string(),
        deadline: "Include in ITR filing by July 31".to_string(),
        confidence: Confidence::Definite,
        explanation: format!(
            "Section 24(b) allows up to \u{20b9}{} of home loan interest on a \
             self-occupied property as a deduction under the old regime. Your \
             \u{20b9}{} of declared interest is worth \u{20b9}{} at your marginal \
             rate.{}",
            format_rupees(LIMIT_24B_SELF_OCCUPIED),
            format_rupees(claimed),
            format_rupees(display_saving),
            cap_note
        ),
        details: json!({
            "claimed_24b": claimed,
            "capped_amount": capped,
            "limit": LIMIT_24B_SELF_OCCUPIED,
            "marginal_rate": marginal,
            "display_saving": display_saving,
            "note": "Savings included in regime arbitrage check",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FinancialYear;

    fn priya_with_loan(interest: i64) -> SalaryProfile {
        SalaryProfile {
            financial_year: FinancialYear::Fy2024_25,
            gross_salary: 1_500_000,
            basic_salary: 600_000,
            hra_received: 300_000,
            professional_tax: 2_400,
            deduction_80c: 72_000,
            deduction_24b: interest,
            epf_employee_contribution: 72_000,
            city: "mumbai".to_string(),
            monthly_rent: 25_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_loan_not_applicable() {
        let result = check_home_loan(&priya_with_loan(0));
        assert_eq!(result.status, FindingStatus::NotApplicable);
        assert_eq!(result.savings, 0);
    }

    #[test]
    fn test_loan_is_display_only_opportunity() {
        let result = check_home_loan(&priya_with_loan(200_000));
        assert_eq!(result.status, FindingStatus::Opportunity);
        assert_eq!(result.savings, 0);
        assert_eq!(result.details["capped_amount"], 200_000);
        // ₹2,00,000 × 30% × 1.04 = ₹62,400
        assert_eq!(result.details["display_saving"], 62_400);
    }

    #[test]
    fn test_interest_above_cap() {
        let result = check_home_loan(&priya_with_loan(350_000));
        assert_eq!(result.details["claimed_24b"], 350_000);
        assert_eq!(result.details["capped_amount"], 200_000);
        assert_eq!(result.details["display_saving"], 62_400);
    }
}
