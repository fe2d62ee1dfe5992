//! Deterministic tax calculation primitives
//!
//! All tax math lives here. Slab application keeps rational intermediates;
//! rounding happens only at the statutory sites (cess, surcharge, totals) and
//! is always half-away-from-zero to the nearest rupee.

use serde::{Deserialize, Serialize};

use crate::constants::{
    self, new_regime_slabs, old_regime_slabs, rebate_87a, standard_deduction, Slab, CESS_RATE,
    LIMIT_24B_SELF_OCCUPIED, LIMIT_80C, SURCHARGE_SLABS_NEW, SURCHARGE_SLABS_OLD,
};
use crate::models::{AgeCategory, FinancialYear, SalaryProfile, TaxRegime};

/// Round to the nearest rupee, halves away from zero.
pub fn round_rupees(amount: f64) -> i64 {
    amount.round() as i64
}

/// Apply progressive slab rates to taxable income. Returns the base tax with
/// rounding deferred.
pub fn tax_on_slabs(taxable_income: f64, slabs: &[Slab]) -> f64 {
    let mut tax = 0.0;
    let mut prev_limit = 0.0;
    for slab in slabs {
        if taxable_income <= prev_limit {
            break;
        }
        let taxable_in_slab = taxable_income.min(slab.upper_limit) - prev_limit;
        tax += taxable_in_slab * slab.rate;
        prev_limit = slab.upper_limit;
    }
    tax
}

/// 4% Health & Education Cess on (tax + surcharge). Returns the cess amount,
/// not the total.
pub fn apply_cess(tax: f64) -> i64 {
    round_rupees(tax * CESS_RATE)
}

/// Apply the Section 87A rebate if eligible. Returns tax after rebate.
///
/// The rebate is a cliff: one rupee of income above the limit forfeits the
/// entire rebate.
pub fn apply_87a_rebate(
    tax: f64,
    taxable_income: i64,
    regime: TaxRegime,
    fy: FinancialYear,
) -> f64 {
    let rule = rebate_87a(fy, regime);
    if taxable_income <= rule.income_limit {
        let rebate = tax.min(rule.max_rebate as f64);
        (tax - rebate).round()
    } else {
        tax
    }
}

/// Marginal slab rate at a given taxable income level.
///
/// Used to estimate tax savings from additional deductions
/// (`savings = amount × marginal_rate × (1 + CESS_RATE)`), never to compute
/// final tax.
pub fn get_marginal_rate(
    taxable_income: i64,
    regime: TaxRegime,
    fy: FinancialYear,
    age_category: AgeCategory,
) -> f64 {
    let slabs = match regime {
        TaxRegime::New => new_regime_slabs(fy),
        TaxRegime::Old => old_regime_slabs(age_category),
    };
    let income = taxable_income as f64;
    for slab in slabs {
        if income <= slab.upper_limit {
            return slab.rate;
        }
    }
    // Unreachable with well-formed tables (last slab is infinite), but stay
    // total on arbitrary input.
    slabs.last().map(|s| s.rate).unwrap_or(0.0)
}

/// Surcharge on base tax, with marginal relief.
///
/// Relief caps the combined (tax + surcharge) at what it would be at the slab
/// threshold below, plus the income in excess of that threshold. The
/// threshold tax is the pre-rebate slab tax even though `base_tax` is
/// post-rebate; incomes in surcharge territory are far past every rebate
/// ceiling, so the distinction only matters for keeping the arithmetic
/// consistent with the statutory worked examples.
pub fn surcharge(
    taxable_income: i64,
    base_tax: f64,
    surcharge_slabs: &[Slab],
    income_tax_slabs: &[Slab],
) -> i64 {
    let income = taxable_income as f64;
    let mut idx = surcharge_slabs.len().saturating_sub(1);
    for (i, slab) in surcharge_slabs.iter().enumerate() {
        if income <= slab.upper_limit {
            idx = i;
            break;
        }
    }
    let rate = surcharge_slabs[idx].rate;
    if rate == 0.0 || idx == 0 {
        return 0;
    }

    let prev = surcharge_slabs[idx - 1];
    let raw_surcharge = base_tax * rate;

    let tax_at_threshold = tax_on_slabs(prev.upper_limit, income_tax_slabs);
    let surcharge_at_threshold = tax_at_threshold * prev.rate;
    let max_total = tax_at_threshold + surcharge_at_threshold + (income - prev.upper_limit);

    if base_tax + raw_surcharge > max_total {
        round_rupees((max_total - base_tax).max(0.0))
    } else {
        round_rupees(raw_surcharge)
    }
}

/// Full tax computation breakdown: slab tax, rebate, surcharge, cess, total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub taxable_income: i64,
    pub base_tax: i64,
    pub rebate_87a: i64,
    pub tax_after_rebate: i64,
    pub surcharge: i64,
    pub cess: i64,
    pub total_tax: i64,
}

fn regime_tax(
    taxable_income: i64,
    regime: TaxRegime,
    fy: FinancialYear,
    income_slabs: &[Slab],
    surcharge_slabs: &[Slab],
) -> TaxBreakdown {
    let base_tax = tax_on_slabs(taxable_income as f64, income_slabs);
    let tax_after_rebate = apply_87a_rebate(base_tax, taxable_income, regime, fy);
    let surcharge = surcharge(taxable_income, tax_after_rebate, surcharge_slabs, income_slabs);
    let cess = apply_cess(tax_after_rebate + surcharge as f64);
    let total_tax = round_rupees(tax_after_rebate + surcharge as f64 + cess as f64);

    TaxBreakdown {
        taxable_income,
        base_tax: round_rupees(base_tax),
        rebate_87a: round_rupees(base_tax - tax_after_rebate),
        tax_after_rebate: round_rupees(tax_after_rebate),
        surcharge,
        cess,
        total_tax,
    }
}

/// Full tax pipeline under the new regime.
pub fn new_regime_tax(taxable_income: i64, fy: FinancialYear) -> TaxBreakdown {
    regime_tax(
        taxable_income,
        TaxRegime::New,
        fy,
        new_regime_slabs(fy),
        &SURCHARGE_SLABS_NEW,
    )
}

/// Full tax pipeline under the old regime for the given age category.
pub fn old_regime_tax(
    taxable_income: i64,
    fy: FinancialYear,
    age_category: AgeCategory,
) -> TaxBreakdown {
    regime_tax(
        taxable_income,
        TaxRegime::Old,
        fy,
        old_regime_slabs(age_category),
        &SURCHARGE_SLABS_OLD,
    )
}

/// HRA exemption under Section 10(13A): the minimum of
///
/// 1. actual HRA received,
/// 2. rent paid minus 10% of basic,
/// 3. 50% of basic (metro) or 40% of basic (non-metro),
///
/// floored at zero. Zero rent or rent below 10% of basic yields 0.
pub fn hra_exemption(
    basic_annual: i64,
    hra_received_annual: i64,
    rent_paid_annual: i64,
    is_metro: bool,
) -> i64 {
    let option_a = hra_received_annual as f64;
    let option_b =
        rent_paid_annual as f64 - constants::HRA_RENT_MINUS_BASIC_PERCENT * basic_annual as f64;
    let pct = if is_metro {
        constants::HRA_METRO_PERCENT
    } else {
        constants::HRA_NON_METRO_PERCENT
    };
    let option_c = pct * basic_annual as f64;
    round_rupees(option_a.min(option_b).min(option_c).max(0.0))
}

/// Taxable income under the new regime.
///
/// The new regime allows only the standard deduction, professional tax, and
/// employer NPS under Section 80CCD(2). No 80C, 80D, HRA, etc.
pub fn new_regime_taxable_income(salary: &SalaryProfile) -> i64 {
    let std_ded = standard_deduction(salary.financial_year, TaxRegime::New);
    (salary.gross_salary - std_ded - salary.professional_tax - salary.deduction_80ccd_2).max(0)
}

/// Overrides for "what-if" old-regime scenarios. `None` means use the value
/// currently on the profile; an override for 80C replaces the entire capped
/// 80C/80CCC/80CCD(1) sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct OldRegimeOverrides {
    pub hra_exemption: Option<i64>,
    pub total_80c: Option<i64>,
    pub total_80d: Option<i64>,
    pub total_80ccd_1b: Option<i64>,
    pub total_80ccd_2: Option<i64>,
}

/// Line-by-line derivation of old-regime taxable income.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OldRegimeBreakdown {
    pub gross_salary: i64,
    pub hra_exemption: i64,
    pub lta_exemption: i64,
    pub other_exemptions: i64,
    pub net_salary: i64,
    pub standard_deduction: i64,
    pub professional_tax: i64,
    pub gross_total_income: i64,
    pub deduction_80c: i64,
    pub deduction_80ccd_1b: i64,
    pub deduction_80ccd_2: i64,
    pub deduction_80d: i64,
    pub deduction_24b: i64,
    pub deduction_other: i64,
    pub total_via: i64,
    pub taxable_income: i64,
}

/// Derive taxable income under the old regime, returning the full breakdown
/// for transparency.
///
/// Home loan interest under 24(b) is a first-class line capped at ₹2,00,000
/// (self-occupied). Gross total income may go negative on degenerate
/// profiles; only the final taxable income clamps at zero.
pub fn old_regime_taxable_income(
    salary: &SalaryProfile,
    overrides: &OldRegimeOverrides,
) -> OldRegimeBreakdown {
    let std_ded = standard_deduction(salary.financial_year, TaxRegime::Old);

    let hra_exemption = overrides.hra_exemption.unwrap_or(salary.hra_exemption);
    let net_salary =
        salary.gross_salary - hra_exemption - salary.lta_exemption - salary.other_exemptions;

    let gross_total_income = net_salary - std_ded - salary.professional_tax;

    let deduction_80c = overrides.total_80c.unwrap_or_else(|| {
        (salary.deduction_80c + salary.deduction_80ccc + salary.deduction_80ccd_1).min(LIMIT_80C)
    });
    let deduction_80d = overrides.total_80d.unwrap_or(salary.deduction_80d);
    let deduction_80ccd_1b = overrides.total_80ccd_1b.unwrap_or(salary.deduction_80ccd_1b);
    let deduction_80ccd_2 = overrides.total_80ccd_2.unwrap_or(salary.deduction_80ccd_2);
    let deduction_24b = salary.deduction_24b.min(LIMIT_24B_SELF_OCCUPIED);
    let deduction_other = salary.deduction_80e
        + salary.deduction_80g
        + salary.deduction_80tta
        + salary.other_deductions;

    let total_via = deduction_80c
        + deduction_80ccd_1b
        + deduction_80ccd_2
        + deduction_80d
        + deduction_24b
        + deduction_other;
    let taxable_income = (gross_total_income - total_via).max(0);

    OldRegimeBreakdown {
        gross_salary: salary.gross_salary,
        hra_exemption,
        lta_exemption: salary.lta_exemption,
        other_exemptions: salary.other_exemptions,
        net_salary,
        standard_deduction: std_ded,
        professional_tax: salary.professional_tax,
        gross_total_income,
        deduction_80c,
        deduction_80ccd_1b,
        deduction_80ccd_2,
        deduction_80d,
        deduction_24b,
        deduction_other,
        total_via,
        taxable_income,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        NEW_REGIME_SLABS_FY2024_25, NEW_REGIME_SLABS_FY2025_26, OLD_REGIME_SLABS_BELOW_60,
        OLD_REGIME_SLABS_SENIOR, OLD_REGIME_SLABS_SUPER_SENIOR,
    };

    fn fy24() -> FinancialYear {
        FinancialYear::Fy2024_25
    }

    // ── tax_on_slabs ────────────────────────────────────────────────────

    #[test]
    fn test_zero_income() {
        assert_eq!(tax_on_slabs(0.0, &NEW_REGIME_SLABS_FY2024_25), 0.0);
    }

    #[test]
    fn test_income_within_first_slab() {
        assert_eq!(tax_on_slabs(200_000.0, &NEW_REGIME_SLABS_FY2024_25), 0.0);
        assert_eq!(tax_on_slabs(300_000.0, &NEW_REGIME_SLABS_FY2024_25), 0.0);
    }

    #[test]
    fn test_income_in_second_slab() {
        // ₹5L: 2L above the zero slab at 5% = ₹10,000
        assert_eq!(
            round_rupees(tax_on_slabs(500_000.0, &NEW_REGIME_SLABS_FY2024_25)),
            10_000
        );
        assert_eq!(
            round_rupees(tax_on_slabs(700_000.0, &NEW_REGIME_SLABS_FY2024_25)),
            20_000
        );
    }

    #[test]
    fn test_income_at_slab_boundary() {
        // ₹10L new regime: 0 + 20K + 30K
        assert_eq!(
            round_rupees(tax_on_slabs(1_000_000.0, &NEW_REGIME_SLABS_FY2024_25)),
            50_000
        );
    }

    #[test]
    fn test_high_income_new_regime() {
        // ₹23,22,600: 140K through ₹15L, then 8,22,600 at 30%
        assert_eq!(
            round_rupees(tax_on_slabs(2_322_600.0, &NEW_REGIME_SLABS_FY2024_25)),
            386_780
        );
    }

    #[test]
    fn test_old_regime_below_60() {
        // ₹9,82,600: 12,500 + 4,82,600 × 20% = 1,09,020
        assert_eq!(
            round_rupees(tax_on_slabs(982_600.0, &OLD_REGIME_SLABS_BELOW_60)),
            109_020
        );
    }

    #[test]
    fn test_old_regime_senior_exemption() {
        assert_eq!(
            round_rupees(tax_on_slabs(400_000.0, &OLD_REGIME_SLABS_SENIOR)),
            5_000
        );
        assert_eq!(
            round_rupees(tax_on_slabs(400_000.0, &OLD_REGIME_SLABS_BELOW_60)),
            7_500
        );
    }

    #[test]
    fn test_old_regime_super_senior() {
        assert_eq!(tax_on_slabs(500_000.0, &OLD_REGIME_SLABS_SUPER_SENIOR), 0.0);
        assert_eq!(
            round_rupees(tax_on_slabs(800_000.0, &OLD_REGIME_SLABS_SUPER_SENIOR)),
            60_000
        );
    }

    #[test]
    fn test_fy2025_26_new_slabs() {
        // ₹12L: (8L−4L)×5% + (12L−8L)×10% = 60,000
        assert_eq!(
            round_rupees(tax_on_slabs(1_200_000.0, &NEW_REGIME_SLABS_FY2025_26)),
            60_000
        );
    }

    #[test]
    fn test_slab_monotonicity() {
        let mut prev = 0.0;
        for income in (0..=3_000_000).step_by(12_347) {
            let tax = tax_on_slabs(income as f64, &NEW_REGIME_SLABS_FY2024_25);
            assert!(tax >= prev, "tax decreased at income {income}");
            prev = tax;
        }
    }

    // ── apply_cess ──────────────────────────────────────────────────────

    #[test]
    fn test_cess_on_zero() {
        assert_eq!(apply_cess(0.0), 0);
    }

    #[test]
    fn test_cess_4_percent() {
        assert_eq!(apply_cess(100_000.0), 4_000);
    }

    #[test]
    fn test_cess_rounding() {
        // 1,09,020 × 0.04 = 4,360.8 → 4,361
        assert_eq!(apply_cess(109_020.0), 4_361);
    }

    // ── apply_87a_rebate ────────────────────────────────────────────────

    #[test]
    fn test_rebate_new_regime_eligible() {
        assert_eq!(
            apply_87a_rebate(15_000.0, 600_000, TaxRegime::New, fy24()),
            0.0
        );
    }

    #[test]
    fn test_rebate_new_regime_at_limit() {
        assert_eq!(
            apply_87a_rebate(20_000.0, 700_000, TaxRegime::New, fy24()),
            0.0
        );
    }

    #[test]
    fn test_rebate_cliff_above_limit() {
        // One rupee of income above the ceiling adds the whole rebate back.
        assert_eq!(
            apply_87a_rebate(20_001.0, 700_001, TaxRegime::New, fy24()),
            20_001.0
        );
    }

    #[test]
    fn test_rebate_old_regime() {
        assert_eq!(
            apply_87a_rebate(12_500.0, 500_000, TaxRegime::Old, fy24()),
            0.0
        );
        assert_eq!(
            apply_87a_rebate(12_500.0, 500_001, TaxRegime::Old, fy24()),
            12_500.0
        );
    }

    #[test]
    fn test_rebate_capped_at_max() {
        // New regime max rebate is ₹25K; tax of ₹30K at ₹7L income leaves ₹5K.
        assert_eq!(
            apply_87a_rebate(30_000.0, 700_000, TaxRegime::New, fy24()),
            5_000.0
        );
    }

    #[test]
    fn test_rebate_fy2025_26_higher_limit() {
        let fy = FinancialYear::Fy2025_26;
        assert_eq!(apply_87a_rebate(60_000.0, 1_200_000, TaxRegime::New, fy), 0.0);
        assert_eq!(
            apply_87a_rebate(60_000.0, 1_200_001, TaxRegime::New, fy),
            60_000.0
        );
    }

    // ── get_marginal_rate ───────────────────────────────────────────────

    #[test]
    fn test_marginal_rate_zero_income() {
        assert_eq!(
            get_marginal_rate(0, TaxRegime::Old, fy24(), AgeCategory::BelowSixty),
            0.0
        );
    }

    #[test]
    fn test_marginal_rate_old_regime() {
        let old = TaxRegime::Old;
        let age = AgeCategory::BelowSixty;
        assert_eq!(get_marginal_rate(400_000, old, fy24(), age), 0.05);
        assert_eq!(get_marginal_rate(800_000, old, fy24(), age), 0.20);
        assert_eq!(get_marginal_rate(1_207_600, old, fy24(), age), 0.30);
        // Exactly at ₹10L sits in the 20% slab
        assert_eq!(get_marginal_rate(1_000_000, old, fy24(), age), 0.20);
    }

    #[test]
    fn test_marginal_rate_new_regime() {
        let age = AgeCategory::BelowSixty;
        assert_eq!(
            get_marginal_rate(1_100_000, TaxRegime::New, fy24(), age),
            0.15
        );
        assert_eq!(
            get_marginal_rate(2_000_000, TaxRegime::New, fy24(), age),
            0.30
        );
    }

    // ── surcharge with marginal relief ──────────────────────────────────

    #[test]
    fn test_no_surcharge_below_50l() {
        let base = tax_on_slabs(1_500_000.0, &OLD_REGIME_SLABS_BELOW_60);
        assert_eq!(
            surcharge(1_500_000, base, &SURCHARGE_SLABS_OLD, &OLD_REGIME_SLABS_BELOW_60),
            0
        );
    }

    #[test]
    fn test_marginal_relief_at_51l_old() {
        // ₹51L old regime: base tax 13,42,500; raw surcharge 1,34,250 but
        // relief caps it at 70,000.
        let base = tax_on_slabs(5_100_000.0, &OLD_REGIME_SLABS_BELOW_60);
        assert_eq!(round_rupees(base), 1_342_500);
        assert_eq!(
            surcharge(5_100_000, base, &SURCHARGE_SLABS_OLD, &OLD_REGIME_SLABS_BELOW_60),
            70_000
        );
    }

    #[test]
    fn test_surcharge_away_from_threshold_is_raw() {
        // ₹80L is deep inside the 10% band; no relief needed.
        let base = tax_on_slabs(8_000_000.0, &OLD_REGIME_SLABS_BELOW_60);
        let s = surcharge(8_000_000, base, &SURCHARGE_SLABS_OLD, &OLD_REGIME_SLABS_BELOW_60);
        assert_eq!(s, round_rupees(base * 0.10));
    }

    #[test]
    fn test_marginal_relief_invariant_old() {
        // (tax + surcharge) at T + δ never exceeds (tax + surcharge at T) + δ.
        let slabs = &OLD_REGIME_SLABS_BELOW_60;
        for threshold in [5_000_000i64, 10_000_000, 20_000_000, 50_000_000] {
            let tax_at_t = tax_on_slabs(threshold as f64, slabs);
            let surch_at_t = surcharge(threshold, tax_at_t, &SURCHARGE_SLABS_OLD, slabs);
            let total_at_t = tax_at_t + surch_at_t as f64;
            for delta in [1i64, 100, 10_000, 1_000_000] {
                let income = threshold + delta;
                let tax = tax_on_slabs(income as f64, slabs);
                let surch = surcharge(income, tax, &SURCHARGE_SLABS_OLD, slabs);
                let total = tax + surch as f64;
                assert!(
                    total <= total_at_t + delta as f64 + 0.5,
                    "relief violated at threshold {threshold} + {delta}"
                );
            }
        }
    }

    #[test]
    fn test_marginal_relief_invariant_new() {
        let slabs = &NEW_REGIME_SLABS_FY2024_25;
        for threshold in [5_000_000i64, 10_000_000, 20_000_000, 50_000_000] {
            let tax_at_t = tax_on_slabs(threshold as f64, slabs);
            let surch_at_t = surcharge(threshold, tax_at_t, &SURCHARGE_SLABS_NEW, slabs);
            let total_at_t = tax_at_t + surch_at_t as f64;
            for delta in [1i64, 100, 10_000, 1_000_000] {
                let income = threshold + delta;
                let tax = tax_on_slabs(income as f64, slabs);
                let surch = surcharge(income, tax, &SURCHARGE_SLABS_NEW, slabs);
                assert!(
                    tax + surch as f64 <= total_at_t + delta as f64 + 0.5,
                    "relief violated at threshold {threshold} + {delta}"
                );
            }
        }
    }

    // ── full pipelines ──────────────────────────────────────────────────

    #[test]
    fn test_new_regime_priya_15l() {
        // Taxable ₹14,22,600: base 1,24,520, cess 4,981, total 1,29,501.
        let result = new_regime_tax(1_422_600, fy24());
        assert_eq!(result.base_tax, 124_520);
        assert_eq!(result.rebate_87a, 0);
        assert_eq!(result.surcharge, 0);
        assert_eq!(result.cess, 4_981);
        assert_eq!(result.total_tax, 129_501);
    }

    #[test]
    fn test_new_regime_24l() {
        let result = new_regime_tax(2_322_600, fy24());
        assert_eq!(result.total_tax, 402_251);
    }

    #[test]
    fn test_new_regime_below_rebate_threshold() {
        let result = new_regime_tax(600_000, fy24());
        assert_eq!(result.total_tax, 0);
    }

    #[test]
    fn test_new_regime_zero_income() {
        assert_eq!(new_regime_tax(0, fy24()).total_tax, 0);
    }

    #[test]
    fn test_old_regime_priya_optimized() {
        let result = old_regime_tax(982_600, fy24(), AgeCategory::BelowSixty);
        assert_eq!(result.base_tax, 109_020);
        assert_eq!(result.rebate_87a, 0);
        assert_eq!(result.surcharge, 0);
        assert_eq!(result.cess, 4_361);
        assert_eq!(result.total_tax, 113_381);
    }

    #[test]
    fn test_old_regime_18l() {
        let result = old_regime_tax(1_842_600, fy24(), AgeCategory::BelowSixty);
        assert_eq!(result.total_tax, 379_891);
    }

    #[test]
    fn test_old_regime_below_rebate() {
        let result = old_regime_tax(400_000, fy24(), AgeCategory::BelowSixty);
        assert_eq!(result.total_tax, 0);
    }

    #[test]
    fn test_old_regime_senior_slabs() {
        let regular = old_regime_tax(400_000, fy24(), AgeCategory::BelowSixty);
        let senior = old_regime_tax(400_000, fy24(), AgeCategory::Senior);
        assert_eq!(regular.total_tax, 0);
        assert_eq!(senior.total_tax, 0);
        assert_eq!(regular.base_tax, 7_500);
        assert_eq!(senior.base_tax, 5_000);
    }

    #[test]
    fn test_old_regime_51l_marginal_relief() {
        let result = old_regime_tax(5_100_000, fy24(), AgeCategory::BelowSixty);
        assert_eq!(result.base_tax, 1_342_500);
        assert_eq!(result.surcharge, 70_000);
        assert_eq!(result.cess, 56_500);
        assert_eq!(result.total_tax, 1_469_000);
    }

    #[test]
    fn test_new_regime_surcharge_capped_at_6cr() {
        // New regime surcharge never exceeds 25% of base tax.
        let result = new_regime_tax(60_000_000, fy24());
        assert_eq!(result.base_tax, 17_690_000);
        assert!(result.surcharge as f64 <= result.base_tax as f64 * 0.25 + 0.5);
        assert_eq!(result.surcharge, 4_422_500);
    }

    // ── hra_exemption ───────────────────────────────────────────────────

    #[test]
    fn test_hra_priya_metro() {
        // A=3L, B=3L−60K=2.4L, C=50%×6L=3L → 2.4L
        assert_eq!(hra_exemption(600_000, 300_000, 300_000, true), 240_000);
    }

    #[test]
    fn test_hra_nonmetro() {
        // A=4L, B=3.6L−80K=2.8L, C=40%×8L=3.2L → 2.8L
        assert_eq!(hra_exemption(800_000, 400_000, 360_000, false), 280_000);
    }

    #[test]
    fn test_hra_zero_rent() {
        assert_eq!(hra_exemption(600_000, 300_000, 0, true), 0);
    }

    #[test]
    fn test_hra_rent_below_ten_percent_of_basic() {
        assert_eq!(hra_exemption(600_000, 300_000, 50_000, true), 0);
    }

    #[test]
    fn test_hra_limited_by_hra_received() {
        // A=1L, B=4L, C=5L → 1L
        assert_eq!(hra_exemption(1_000_000, 100_000, 500_000, true), 100_000);
    }

    #[test]
    fn test_hra_never_exceeds_any_option() {
        for basic in [300_000i64, 600_000, 1_200_000] {
            for hra in [0i64, 100_000, 300_000] {
                for rent in [0i64, 120_000, 300_000, 600_000] {
                    for metro in [true, false] {
                        let exempt = hra_exemption(basic, hra, rent, metro);
                        assert!(exempt >= 0);
                        assert!(exempt <= hra);
                        let pct = if metro { 0.50 } else { 0.40 };
                        assert!(exempt as f64 <= pct * basic as f64 + 0.5);
                    }
                }
            }
        }
    }

    // ── taxable income derivation ───────────────────────────────────────

    fn priya() -> SalaryProfile {
        SalaryProfile {
            financial_year: FinancialYear::Fy2024_25,
            employee_name: "Priya Sharma".to_string(),
            gross_salary: 1_500_000,
            basic_salary: 600_000,
            hra_received: 300_000,
            professional_tax: 2_400,
            deduction_80c: 72_000,
            epf_employee_contribution: 72_000,
            city: "mumbai".to_string(),
            monthly_rent: 25_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_regime_taxable_income_priya() {
        // ₹15L − ₹75K std ded − ₹2,400 prof tax
        assert_eq!(new_regime_taxable_income(&priya()), 1_422_600);
    }

    #[test]
    fn test_new_regime_taxable_income_with_employer_nps() {
        let salary = SalaryProfile {
            gross_salary: 1_500_000,
            professional_tax: 2_400,
            deduction_80ccd_2: 60_000,
            ..Default::default()
        };
        assert_eq!(
            new_regime_taxable_income(&salary),
            1_500_000 - 75_000 - 2_400 - 60_000
        );
    }

    #[test]
    fn test_new_regime_taxable_income_floors_at_zero() {
        let salary = SalaryProfile {
            gross_salary: 50_000,
            ..Default::default()
        };
        assert_eq!(new_regime_taxable_income(&salary), 0);
    }

    #[test]
    fn test_old_regime_taxable_income_priya_optimized() {
        let overrides = OldRegimeOverrides {
            hra_exemption: Some(240_000),
            total_80c: Some(150_000),
            total_80d: Some(25_000),
            total_80ccd_1b: Some(50_000),
            total_80ccd_2: None,
        };
        let bd = old_regime_taxable_income(&priya(), &overrides);
        assert_eq!(bd.gross_salary, 1_500_000);
        assert_eq!(bd.hra_exemption, 240_000);
        assert_eq!(bd.net_salary, 1_260_000);
        assert_eq!(bd.standard_deduction, 50_000);
        assert_eq!(bd.professional_tax, 2_400);
        assert_eq!(bd.gross_total_income, 1_207_600);
        assert_eq!(bd.deduction_80c, 150_000);
        assert_eq!(bd.deduction_80d, 25_000);
        assert_eq!(bd.deduction_80ccd_1b, 50_000);
        assert_eq!(bd.total_via, 225_000);
        assert_eq!(bd.taxable_income, 982_600);
    }

    #[test]
    fn test_old_regime_defaults_use_profile_values() {
        let bd = old_regime_taxable_income(&priya(), &OldRegimeOverrides::default());
        assert_eq!(bd.hra_exemption, 0);
        assert_eq!(bd.deduction_80c, 72_000);
        assert_eq!(bd.deduction_80d, 0);
        assert_eq!(bd.deduction_80ccd_1b, 0);
    }

    #[test]
    fn test_old_regime_24b_capped() {
        let mut salary = priya();
        salary.deduction_24b = 350_000;
        let bd = old_regime_taxable_income(&salary, &OldRegimeOverrides::default());
        assert_eq!(bd.deduction_24b, 200_000);
    }

    #[test]
    fn test_old_regime_80c_sum_capped() {
        let salary = SalaryProfile {
            gross_salary: 1_500_000,
            deduction_80c: 120_000,
            deduction_80ccc: 40_000,
            deduction_80ccd_1: 30_000,
            ..Default::default()
        };
        let bd = old_regime_taxable_income(&salary, &OldRegimeOverrides::default());
        assert_eq!(bd.deduction_80c, 150_000);
    }
}
