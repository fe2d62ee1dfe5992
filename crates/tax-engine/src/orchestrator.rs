//! Orchestrator — runs all seven checks and assembles the final report.
//!
//! The critical interdependency: the regime comparator's savings already
//! include the combined effect of HRA + 80C + 80D + NPS + 24(b) (it computes
//! the old-regime tax with ALL deductions and subtracts from the new-regime
//! tax). The individual deduction checks are component breakdowns for
//! display. Capital gains is the only independent, additive savings, so
//!
//! ```text
//! total_savings = regime.savings + capital_gains.savings
//! ```
//!
//! never the sum of all checks.

use log::debug;

use crate::checks::{
    check_80c, check_80d, check_capital_gains, check_home_loan, check_hra, check_nps,
    check_regime, CheckOptions,
};
use crate::models::{
    format_rupees, Finding, FindingStatus, Holdings, Report, SalaryProfile, TaxRegime,
    DISCLAIMER,
};

/// Run all seven optimization checks and produce the final report.
///
/// `holdings` may be omitted; the capital-gains check then reports
/// not-applicable. Never fails: malformed inputs degrade to not-applicable
/// or zero-savings findings.
pub fn run_all_checks(
    salary: &SalaryProfile,
    holdings: Option<&Holdings>,
    options: &CheckOptions,
) -> Report {
    let empty_holdings = Holdings::default();
    let holdings = holdings.unwrap_or(&empty_holdings);

    let regime_finding = check_regime(salary, options);
    let finding_80c = check_80c(salary);
    let finding_80d = check_80d(salary, options);
    let finding_hra = check_hra(salary);
    let finding_cg = check_capital_gains(holdings, options.cg_as_of);
    let finding_nps = check_nps(salary);
    let finding_home_loan = check_home_loan(salary);

    let recommended_regime = match regime_finding.details["recommended_regime"].as_str() {
        Some("old") => TaxRegime::Old,
        _ => TaxRegime::New,
    };
    debug!(
        "regime recommendation: {recommended_regime} (regime savings {}, cg savings {})",
        regime_finding.savings, finding_cg.savings
    );

    // Insertion order is the tie-break order after the savings sort.
    let mut checks = vec![
        regime_finding,
        finding_80c,
        finding_80d,
        finding_hra,
        finding_cg,
        finding_nps,
        finding_home_loan,
    ];

    // Under the new regime no Chapter VI-A or HRA deduction applies, so the
    // deduction-based findings are rewritten to not-applicable. Capital gains
    // and the regime finding itself are untouched.
    if recommended_regime == TaxRegime::New {
        for check in checks.iter_mut() {
            if !is_deduction_check(&check.check_id) {
                continue;
            }
            let original_savings = check.savings;
            check.savings = 0;
            check.status = FindingStatus::NotApplicable;
            if original_savings > 0 {
                check.finding = format!(
                    "Not applicable under new regime \
                     (would save \u{20b9}{} under old regime)",
                    format_rupees(original_savings)
                );
            }
        }
    }

    let regime_savings = checks[0].savings;
    let cg_savings = checks
        .iter()
        .find(|c| c.check_id == crate::checks::capital_gains::CHECK_ID)
        .map(|c| c.savings)
        .unwrap_or(0);
    let total_savings = regime_savings + cg_savings;

    // Stable sort: ties keep insertion order.
    checks.sort_by(|a, b| b.savings.cmp(&a.savings));

    let summary = generate_summary(salary, &checks, total_savings, recommended_regime);

    Report {
        user_name: salary.employee_name.clone(),
        financial_year: salary.financial_year,
        current_regime: salary.regime,
        recommended_regime,
        total_savings,
        checks,
        summary,
        disclaimer: DISCLAIMER.to_string(),
    }
}

fn is_deduction_check(check_id: &str) -> bool {
    matches!(
        check_id,
        "80c_gap" | "80d_check" | "hra_optimizer" | "nps_check" | "home_loan_check"
    )
}

/// Plain-English summary of the findings.
fn generate_summary(
    salary: &SalaryProfile,
    checks: &[Finding],
    total_savings: i64,
    recommended_regime: TaxRegime,
) -> String {
    let mut lines = Vec::new();

    if total_savings > 0 {
        lines.push(format!(
            "TaxHawk found \u{20b9}{} in potential tax savings for {} (FY {}).",
            format_rupees(total_savings),
            salary.employee_name,
            salary.financial_year
        ));

        if recommended_regime == TaxRegime::Old && salary.regime == TaxRegime::New {
            lines.push(
                "The biggest opportunity: switching from the new tax regime \
                 (employer default) to the old regime with optimized deductions."
                    .to_string(),
            );
        }

        let opportunities: Vec<&Finding> = checks
            .iter()
            .filter(|c| c.status == FindingStatus::Opportunity)
            .collect();
        if !opportunities.is_empty() {
            lines.push(format!("\n{} optimization(s) found:", opportunities.len()));
            for opp in opportunities {
                if opp.savings > 0 {
                    lines.push(format!(
                        "  - {}: \u{20b9}{}",
                        opp.check_name,
                        format_rupees(opp.savings)
                    ));
                }
            }
        }
    } else {
        lines.push(format!(
            "Your tax setup is already well-optimized for FY {}. \
             No significant savings opportunities found.",
            salary.financial_year
        ));
    }

    lines.join("\n")
}
