//! Check 1: Tax regime arbitrage — old vs new regime comparison.
//!
//! The highest-impact check. It computes the fully-optimized old regime tax
//! (HRA + 80C + 80D + NPS, plus any home loan interest already declared) and
//! compares it against the new regime tax. The savings reported here IS the
//! ground-truth regime switch benefit; the individual deduction checks show
//! component breakdowns of the same money.

use serde_json::json;

use crate::checks::CheckOptions;
use crate::constants::{
    LIMIT_80C, LIMIT_80CCD_1B, LIMIT_80D_PARENTS_BELOW_60, LIMIT_80D_PARENTS_SENIOR,
    LIMIT_80D_SELF_BELOW_60, LIMIT_80D_SELF_SENIOR,
};
use crate::models::{
    format_rupees, Confidence, Finding, FindingStatus, SalaryProfile, TaxRegime,
};
use crate::tax_math::{
    hra_exemption, new_regime_tax, new_regime_taxable_income, old_regime_tax,
    old_regime_taxable_income, OldRegimeOverrides,
};

pub const CHECK_ID: &str = "regime_arbitrage";
const CHECK_NAME: &str = "Tax Regime Optimization";

/// Compare old vs new regime with fully optimized deductions.
pub fn check_regime(salary: &SalaryProfile, options: &CheckOptions) -> Finding {
    let fy = salary.financial_year;
    let age_category = if options.self_senior {
        crate::models::AgeCategory::Senior
    } else {
        crate::models::AgeCategory::BelowSixty
    };

    let new_taxable = new_regime_taxable_income(salary);
    let new_result = new_regime_tax(new_taxable, fy);
    let new_tax = new_result.total_tax;

    // Optimal HRA requires both an HRA component and actual rent.
    let optimal_hra = if salary.hra_received > 0 && salary.monthly_rent > 0 {
        hra_exemption(
            salary.basic_salary,
            salary.hra_received,
            salary.monthly_rent * 12,
            salary.is_metro(),
        )
    } else {
        0
    };

    let current_80c = salary.deduction_80c + salary.deduction_80ccc + salary.deduction_80ccd_1;
    let optimal_80c = LIMIT_80C;

    // For non-seniors, employer group cover is assumed to absorb self — only
    // the parents' premium is targeted. Seniors have no group cover, so both
    // limits are in play.
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
    let optimal_80d_target = if options.self_senior {
        self_limit + parents_limit
    } else {
        parents_limit
    };
    let optimal_80d = salary.deduction_80d.max(optimal_80d_target);

    let optimal_nps_1b = LIMIT_80CCD_1B;

    // 24(b) is taken as declared (capped inside the breakdown) — the engine
    // never fabricates a home loan the user doesn't have.
    let overrides = OldRegimeOverrides {
        hra_exemption: Some(optimal_hra),
        total_80c: Some(optimal_80c),
        total_80d: Some(optimal_80d),
        total_80ccd_1b: Some(optimal_nps_1b),
        total_80ccd_2: None,
    };
    let old_breakdown = old_regime_taxable_income(salary, &overrides);
    let old_taxable = old_breakdown.taxable_income;
    let old_result = old_regime_tax(old_taxable, fy, age_category);
    let old_tax = old_result.total_tax;

    let delta = new_tax - old_tax;
    let recommended = if delta > 0 {
        TaxRegime::Old
    } else {
        TaxRegime::New
    };

    // Only the gaps that actually need filling.
    let mut deductions_needed = serde_json::Map::new();
    if optimal_hra > salary.hra_exemption {
        deductions_needed.insert("hra_exemption".to_string(), json!(optimal_hra));
    }
    let gap_80c = LIMIT_80C - current_80c;
    if gap_80c > 0 {
        deductions_needed.insert("section_80c".to_string(), json!(optimal_80c));
        deductions_needed.insert("section_80c_gap".to_string(), json!(gap_80c));
    }
    if optimal_80d > salary.deduction_80d {
        deductions_needed.insert("section_80d".to_string(), json!(optimal_80d));
    }
    if optimal_nps_1b > salary.deduction_80ccd_1b {
        deductions_needed.insert("section_80ccd_1b".to_string(), json!(optimal_nps_1b));
    }

    let details = json!({
        "new_regime_tax": new_tax,
        "new_regime_taxable": new_taxable,
        "new_regime_breakdown": serde_json::to_value(new_result).unwrap_or_default(),
        "old_regime_tax": old_tax,
        "old_regime_taxable": old_taxable,
        "recommended_regime": recommended.to_string(),
        "old_regime_breakdown": serde_json::to_value(old_breakdown).unwrap_or_default(),
        "deductions_needed": deductions_needed,
    });

    if delta > 0 {
        Finding {
            check_id: CHECK_ID.to_string(),
            check_name: CHECK_NAME.to_string(),
            status: FindingStatus::Opportunity,
            finding: format!(
                "Switching to old regime with full deductions saves \u{20b9}{}",
                format_rupees(delta)
            ),
            savings: delta,
            action: format!(
                "File ITR under old tax regime for FY {fy}. \
                 Invest in ELSS/PPF for 80C, get parents' health insurance for 80D, \
                 and open NPS for 80CCD(1B) before March 31"
            ),
            deadline: "July 31 (ITR filing) \u{2014} but investments needed before March 31"
                .to_string(),
            confidence: Confidence::Definite,
            explanation: format!(
                "Your employer applied the new regime (default), resulting in tax of \
                 \u{20b9}{}. Under the old regime with optimized deductions \
                 (HRA \u{20b9}{} + 80C \u{20b9}{} + 80D \u{20b9}{} + NPS \u{20b9}{}), \
                 your tax drops to \u{20b9}{}.",
                format_rupees(new_tax),
                format_rupees(optimal_hra),
                format_rupees(optimal_80c),
                format_rupees(optimal_80d),
                format_rupees(optimal_nps_1b),
                format_rupees(old_tax)
            ),
            details,
        }
    } else {
        Finding {
            check_id: CHECK_ID.to_string(),
            check_name: CHECK_NAME.to_string(),
            status: FindingStatus::Optimized,
            finding: format!(
                "New regime is already optimal (saves \u{20b9}{} vs old)",
                format_rupees(-delta)
            ),
            savings: 0,
            action: "No action needed \u{2014} continue with new regime".to_string(),
            deadline: "N/A".to_string(),
            confidence: Confidence::Definite,
            explanation: format!(
                "New regime tax: \u{20b9}{}. Old regime tax (even with optimized \
                 deductions): \u{20b9}{}. New regime is better by \u{20b9}{}.",
                format_rupees(new_tax),
                format_rupees(old_tax),
                format_rupees(-delta)
            ),
            details,
        }
    }
}
