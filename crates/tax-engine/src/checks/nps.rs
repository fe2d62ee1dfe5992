//! Check 6: NPS 80CCD(1B) — additional ₹50,000 deduction.
//!
//! An additional deduction over and above the ₹1.5L 80C limit, available
//! only under the old regime. The trade-off is that NPS money is locked
//! until age 60. A component of the regime switch benefit.

use serde_json::json;

use crate::constants::{CESS_RATE, LIMIT_80CCD_1B};
use crate::models::{
    format_rupees, AgeCategory, Confidence, Finding, FindingStatus, SalaryProfile, TaxRegime,
};
use crate::tax_math::{
    get_marginal_rate, old_regime_taxable_income, round_rupees, OldRegimeOverrides,
};

pub const CHECK_ID: &str = "nps_check";
const CHECK_NAME: &str = "NPS Tax Benefit (80CCD(1B))";

/// Check the NPS 80CCD(1B) deduction opportunity.
pub fn check_nps(salary: &SalaryProfile) -> Finding {
    let fy = salary.financial_year;
    let current_nps_1b = salary.deduction_80ccd_1b;
    let gap = (LIMIT_80CCD_1B - current_nps_1b).max(0);

    if gap <= 0 {
        return Finding {
            check_id: CHECK_ID.to_string(),
            check_name: CHECK_NAME.to_string(),
            status: FindingStatus::Optimized,
            finding: format!(
                "NPS 80CCD(1B) fully utilized at \u{20b9}{}",
                format_rupees(current_nps_1b)
            ),
            savings: 0,
            action: "No action needed".to_string(),
            deadline: "N/A".to_string(),
            confidence: Confidence::Definite,
            explanation: String::new(),
            details: json!({
                "current_nps_1b": current_nps_1b,
                "limit_1b": LIMIT_80CCD_1B,
                "gap": 0,
            }),
        };
    }

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
            "\u{20b9}{} NPS contribution saves \u{20b9}{} in tax (additional to 80C)",
            format_rupees(gap),
            format_rupees(tax_saved)
        ),
        savings: tax_saved,
        action: format!(
            "Open NPS Tier 1 account and invest \u{20b9}{}. \
             This is ABOVE the \u{20b9}1.5L 80C limit",
            format_rupees(gap)
        ),
        deadline: format!("March 31 (for FY {fy} deduction)"),
        confidence: Confidence::Definite,
        explanation: format!(
            "Section 80CCD(1B) provides an additional \u{20b9}{} deduction over the \
             80C limit. At your {:.0}% marginal rate, this saves \u{20b9}{} \
             immediately. The trade-off: NPS is locked until age 60, but the tax \
             saving is immediate.",
            format_rupees(LIMIT_80CCD_1B),
            marginal * 100.0,
            format_rupees(tax_saved)
        ),
        details: json!({
            "current_nps_1b": current_nps_1b,
            "limit_1b": LIMIT_80CCD_1B,
            "gap": gap,
            "marginal_rate": marginal,
            "tax_saved_component": tax_saved,
            "note": "Locked until age 60. Tax saving is immediate, but money is illiquid",
        }),
    }
}
