//! Check 3: Section 80D — health insurance premium deduction.
//!
//! The usual opportunity is parents' insurance: retirees rarely have a
//! personal policy, and the premium deducts in full within the parents'
//! limit. A component of the regime switch benefit.

use serde_json::json;

use crate::checks::CheckOptions;
use crate::constants::{
    CESS_RATE, LIMIT_80D_PARENTS_BELOW_60, LIMIT_80D_PARENTS_SENIOR, LIMIT_80D_SELF_BELOW_60,
    LIMIT_80D_SELF_SENIOR,
};
use crate::models::{
    format_rupees, AgeCategory, Confidence, Finding, FindingStatus, SalaryProfile, TaxRegime,
};
use crate::tax_math::{
    get_marginal_rate, old_regime_taxable_income, round_rupees, OldRegimeOverrides,
};

pub const CHECK_ID: &str = "80d_check";
const CHECK_NAME: &str = "Health Insurance (Section 80D)";

/// Analyze the health insurance deduction opportunity under Section 80D.
pub fn check_80d(salary: &SalaryProfile, options: &CheckOptions) -> Finding {
    let fy = salary.financial_year;
    let current_80d = salary.deduction_80d;

    let self_limit = if options.self_senior {
        LIMIT_80D_SELF_SENIOR
    } else {
        LIMIT_80D_SELF_BELOW_60
    };
    let parents_limit = if options.parents_senior {
        LIMIT_80D_PARENTS_SENIOR
    } else {
        LIMIT_80D_PARENTS_BELOW_60
    };
    let total_limit = self_limit + parents_limit;

    if current_80d >= total_limit {
        return Finding {
            check_id: CHECK_ID.to_string(),
            check_name: CHECK_NAME.to_string(),
            status: FindingStatus::Optimized,
            finding: format!(
                "80D fully utilized at \u{20b9}{}",
                format_rupees(current_80d)
            ),
            savings: 0,
            action: "No action needed".to_string(),
            deadline: "N/A".to_string(),
            confidence: Confidence::Definite,
            explanation: String::new(),
            details: json!({
                "self_family_claimed": current_80d,
                "self_family_limit": self_limit,
                "parents_limit": parents_limit,
                "total_limit": total_limit,
            }),
        };
    }

    let additional_80d = total_limit - current_80d;

    // Nothing claimed yet: recommend the parents' policy (employer group
    // cover is assumed to handle self). Otherwise fill the remaining room.
    let (recommended_premium, parents_opportunity) = if current_80d == 0 {
        (parents_limit, true)
    } else {
        (additional_80d, false)
    };

    let breakdown = old_regime_taxable_income(salary, &OldRegimeOverrides::default());
    let marginal = get_marginal_rate(
        breakdown.gross_total_income,
        TaxRegime::Old,
        fy,
        AgeCategory::BelowSixty,
    );
    let tax_saved = round_rupees(recommended_premium as f64 * marginal * (1.0 + CESS_RATE));

    let (finding_text, action_text) = if parents_opportunity {
        (
            format!(
                "Parents have no health insurance. \u{20b9}{} policy = \u{20b9}{} tax saving",
                format_rupees(recommended_premium),
                format_rupees(tax_saved)
            ),
            "Buy a \u{20b9}5-10L family floater health insurance for parents \
             (annual premium ~\u{20b9}20-25K). Claim under Section 80D"
                .to_string(),
        )
    } else {
        (
            format!(
                "\u{20b9}{} additional 80D deduction available",
                format_rupees(additional_80d)
            ),
            format!(
                "Increase health insurance coverage to claim additional \u{20b9}{} under 80D",
                format_rupees(additional_80d)
            ),
        )
    };

    Finding {
        check_id: CHECK_ID.to_string(),
        check_name: CHECK_NAME.to_string(),
        status: FindingStatus::Opportunity,
        finding: finding_text,
        savings: tax_saved,
        action: action_text,
        deadline: format!("March 31 (for FY {fy} deduction)"),
        confidence: Confidence::Definite,
        explanation: format!(
            "Section 80D allows deduction for health insurance premiums: up to \
             \u{20b9}{} for self/family and \u{20b9}{} for parents. A family floater \
             for parents costs ~\u{20b9}25K/year and the effective cost after tax \
             saving is only \u{20b9}{}.",
            format_rupees(self_limit),
            format_rupees(parents_limit),
            format_rupees(recommended_premium - tax_saved)
        ),
        details: json!({
            "self_family_claimed": current_80d,
            "self_family_limit": self_limit,
            "parents_claimed": 0,
            "parents_limit": parents_limit,
            "parents_senior": options.parents_senior,
            "recommended_premium": recommended_premium,
            "marginal_rate": marginal,
            "tax_saved_component": tax_saved,
        }),
    }
}
