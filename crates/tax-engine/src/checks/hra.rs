//! Check 4: HRA exemption optimization.
//!
//! HRA is often the single biggest factor in the old-vs-new regime decision.
//! This check explains the optimal exemption as a component of the regime
//! switch; its savings are always reported as 0 because the money is already
//! counted in the regime comparator's total.

use serde_json::json;

use crate::constants::{HRA_METRO_PERCENT, HRA_NON_METRO_PERCENT, HRA_RENT_MINUS_BASIC_PERCENT};
use crate::models::{format_rupees, Confidence, Finding, FindingStatus, SalaryProfile};
use crate::tax_math::hra_exemption;

pub const CHECK_ID: &str = "hra_optimizer";
const CHECK_NAME: &str = "HRA Exemption";

/// Analyze the HRA exemption opportunity under Section 10(13A).
pub fn check_hra(salary: &SalaryProfile) -> Finding {
    if salary.hra_received <= 0 || salary.monthly_rent <= 0 {
        return Finding {
            check_id: CHECK_ID.to_string(),
            check_name: CHECK_NAME.to_string(),
            status: FindingStatus::NotApplicable,
            finding: "No HRA received or no rent paid".to_string(),
            savings: 0,
            action: "N/A".to_string(),
            deadline: "N/A".to_string(),
            confidence: Confidence::Definite,
            explanation: String::new(),
            details: json!({
                "hra_received": salary.hra_received,
                "monthly_rent": salary.monthly_rent,
            }),
        };
    }

    let rent_annual = salary.monthly_rent * 12;
    let is_metro = salary.is_metro();
    let optimal_exemption = hra_exemption(
        salary.basic_salary,
        salary.hra_received,
        rent_annual,
        is_metro,
    );
    let current_exemption = salary.hra_exemption;

    // The three statutory options, for transparency.
    let option_a = salary.hra_received;
    let option_b =
        rent_annual as f64 - HRA_RENT_MINUS_BASIC_PERCENT * salary.basic_salary as f64;
    let metro_pct = if is_metro {
        HRA_METRO_PERCENT
    } else {
        HRA_NON_METRO_PERCENT
    };
    let option_c = metro_pct * salary.basic_salary as f64;
    let city_type = if is_metro { "metro" } else { "non-metro" };

    if optimal_exemption <= 0 {
        return Finding {
            check_id: CHECK_ID.to_string(),
            check_name: CHECK_NAME.to_string(),
            status: FindingStatus::NotApplicable,
            finding: "Rent is too low relative to basic salary for HRA benefit".to_string(),
            savings: 0,
            action: "N/A".to_string(),
            deadline: "N/A".to_string(),
            confidence: Confidence::Definite,
            explanation: String::new(),
            details: json!({
                "rent_annual": rent_annual,
                "hra_received": salary.hra_received,
                "optimal_exemption": 0,
            }),
        };
    }

    if current_exemption >= optimal_exemption {
        return Finding {
            check_id: CHECK_ID.to_string(),
            check_name: CHECK_NAME.to_string(),
            status: FindingStatus::Optimized,
            finding: format!(
                "HRA exemption already claimed at \u{20b9}{}",
                format_rupees(current_exemption)
            ),
            savings: 0,
            action: "No action needed".to_string(),
            deadline: "N/A".to_string(),
            confidence: Confidence::Definite,
            explanation: String::new(),
            details: json!({
                "rent_annual": rent_annual,
                "hra_received": salary.hra_received,
                "current_exemption": current_exemption,
                "optimal_exemption": optimal_exemption,
            }),
        };
    }

    // Opportunity: HRA unclaimed, usually because the user is on new regime.
    Finding {
        check_id: CHECK_ID.to_string(),
        check_name: CHECK_NAME.to_string(),
        status: FindingStatus::Opportunity,
        finding: format!(
            "Paying \u{20b9}{}/month rent but claiming \u{20b9}{} HRA ({} regime). \
             Old regime unlocks \u{20b9}{} exemption",
            format_rupees(salary.monthly_rent),
            format_rupees(current_exemption),
            salary.regime,
            format_rupees(optimal_exemption)
        ),
        savings: 0,
        action: "Collect rent receipts and landlord PAN. \
                 HRA benefit is captured in regime switch recommendation"
            .to_string(),
        deadline: "Include in ITR filing by July 31".to_string(),
        confidence: Confidence::Definite,
        explanation: format!(
            "HRA exemption = min of three amounts:\n  \
             A) Actual HRA received = \u{20b9}{}\n  \
             B) Rent - 10% of Basic = \u{20b9}{}\n  \
             C) {}% of Basic ({}) = \u{20b9}{}\n  \
             Exempt amount = \u{20b9}{}",
            format_rupees(option_a),
            format_rupees(option_b as i64),
            (metro_pct * 100.0) as i64,
            city_type,
            format_rupees(option_c as i64),
            format_rupees(optimal_exemption)
        ),
        details: json!({
            "rent_annual": rent_annual,
            "hra_received": salary.hra_received,
            "optimal_exemption": optimal_exemption,
            "current_exemption": current_exemption,
            "is_metro": is_metro,
            "option_a_hra_received": option_a,
            "option_b_rent_minus_basic": option_b,
            "option_c_percent_basic": option_c,
            "note": "Savings included in regime arbitrage check",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FinancialYear;

    fn priya() -> SalaryProfile {
        SalaryProfile {
            financial_year: FinancialYear::Fy2024_25,
            gross_salary: 1_500_000,
            basic_salary: 600_000,
            hra_received: 300_000,
            professional_tax: 2_400,
            city: "mumbai".to_string(),
            monthly_rent: 25_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_optimal_exemption() {
        // Metro: min(3L, 2.4L, 3L) = ₹2,40,000
        let result = check_hra(&priya());
        assert_eq!(result.details["optimal_exemption"], 240_000);
        assert_eq!(result.details["is_metro"], true);
    }

    #[test]
    fn test_savings_always_zero() {
        let result = check_hra(&priya());
        assert_eq!(result.savings, 0);
        assert_eq!(result.status, FindingStatus::Opportunity);
    }

    #[test]
    fn test_current_exemption_zero_on_new_regime() {
        let result = check_hra(&priya());
        assert_eq!(result.details["current_exemption"], 0);
    }

    #[test]
    fn test_no_rent_not_applicable() {
        let mut salary = priya();
        salary.monthly_rent = 0;
        let result = check_hra(&salary);
        assert_eq!(result.status, FindingStatus::NotApplicable);
    }

    #[test]
    fn test_no_hra_not_applicable() {
        let mut salary = priya();
        salary.hra_received = 0;
        let result = check_hra(&salary);
        assert_eq!(result.status, FindingStatus::NotApplicable);
    }

    #[test]
    fn test_rent_too_low_not_applicable() {
        let mut salary = priya();
        salary.monthly_rent = 4_000; // 48K < 10% of 6L basic
        let result = check_hra(&salary);
        assert_eq!(result.status, FindingStatus::NotApplicable);
    }

    #[test]
    fn test_already_claimed_optimized() {
        let mut salary = priya();
        salary.hra_exemption = 240_000;
        let result = check_hra(&salary);
        assert_eq!(result.status, FindingStatus::Optimized);
        assert_eq!(result.savings, 0);
    }
}
