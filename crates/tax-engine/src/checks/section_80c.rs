//! Check 2: Section 80C gap analysis.
//!
//! Measures the gap between current 80C usage (usually just EPF) and the
//! ₹1.5L combined limit. The savings shown are a component of the regime
//! switch benefit, not additive to it.

use serde_json::json;

use crate::constants::{CESS_RATE, LIMIT_80C};
use crate::models::{
    format_rupees, AgeCategory, Confidence, Finding, FindingStatus, SalaryProfile, TaxRegime,
};
use crate::tax_math::{
    get_marginal_rate, old_regime_taxable_income, round_rupees, OldRegimeOverrides,
};

pub const CHECK_ID: &str = "80c_gap";
const CHECK_NAME: &str = "Section 80C Gap";

/// Analyze the gap between current 80C claims and the ₹1.5L limit.
pub fn check_80c(salary: &SalaryProfile) -> Finding {
    let fy = salary.financial_year;

    // 80C + 80CCC + 80CCD(1) share the combined limit.
    let current_80c = (salary.deduction_80c + salary.deduction_80ccc + salary.deduction_80ccd_1)
        .min(LIMIT_80C);
    let epf = salary.epf_employee_contribution;
    let gap = (LIMIT_80C - current_80c).max(0);

    if gap <= 0 {
        return Finding {
            check_id: CHECK_ID.to_string(),
            check_name: CHECK_NAME.to_string(),
            status: FindingStatus::Optimized,
            finding: format!(
                "80C fully utilized at \u{20b9}{}",
                format_rupees(current_80c)
            ),
            savings: 0,
            action: "No action needed \u{2014} 80C limit already maxed".to_string(),
            deadline: "N/A".to_string(),
            confidence: Confidence::Definite,
            explanation: String::new(),
            details: json!({
                "epf_contribution": epf,
                "current_80c_total": current_80c,
                "limit": LIMIT_80C,
                "gap": 0,
            }),
        };
    }

    // Each rupee of deduction saves tax at the rate of the slab the
    // gross total income sits in.
    let breakdown = old_regime_taxable_income(salary, &OldRegimeOverrides::default());
    let marginal = get_marginal_rate(
        breakdown.gross_total_income,
        TaxRegime::Old,
        fy,
        AgeCategory::BelowSixty,
    );
    let tax_saved = round_rupees(gap as f64 * marginal * (1.0 + CESS_RATE));

    Finding {
        check_id: CHECK_ID.to_string(),
        check_name: CHECK_NAME.to_string(),
        status: FindingStatus::Opportunity,
        finding: format!(
            "\u{20b9}{} gap in 80C limit. EPF covers \u{20b9}{} of \u{20b9}{}K",
            format_rupees(gap),
            format_rupees(epf),
            LIMIT_80C / 1_000
        ),
        savings: tax_saved,
        action: format!(
            "Invest \u{20b9}{} in ELSS mutual fund \
             (e.g., Mirae Asset ELSS, Axis ELSS) before March 31",
            format_rupees(gap)
        ),
        deadline: format!("March 31 (for FY {fy} deduction)"),
        confidence: Confidence::Definite,
        explanation: format!(
            "Your EPF contribution of \u{20b9}{} covers only {:.0}% of the \
             \u{20b9}{} limit. ELSS has the shortest lock-in (3 years) among 80C \
             instruments and offers equity market returns.",
            format_rupees(epf),
            epf as f64 / LIMIT_80C as f64 * 100.0,
            format_rupees(LIMIT_80C)
        ),
        details: json!({
            "epf_contribution": epf,
            "current_80c_total": current_80c,
            "limit": LIMIT_80C,
            "gap": gap,
            "marginal_rate": marginal,
            "tax_saved_component": tax_saved,
            "recommended_instrument": "ELSS (3-year lock-in, equity growth)",
        }),
    }
}
