//! Statutory tax constants
//!
//! Every rate, limit, and slab the engine uses lives here — nothing is
//! hardcoded in check logic. Slab tables are ordered `(upper_limit, rate)`
//! pairs; the last entry carries an infinite upper limit.

use crate::models::{AgeCategory, FinancialYear, TaxRegime};

/// One progressive slab: income up to `upper_limit` (exclusive of the slab
/// below) is taxed at `rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slab {
    pub upper_limit: f64,
    pub rate: f64,
}

const fn slab(upper_limit: f64, rate: f64) -> Slab {
    Slab { upper_limit, rate }
}

pub const NEW_REGIME_SLABS_FY2024_25: [Slab; 6] = [
    slab(300_000.0, 0.00),
    slab(700_000.0, 0.05),
    slab(1_000_000.0, 0.10),
    slab(1_200_000.0, 0.15),
    slab(1_500_000.0, 0.20),
    slab(f64::INFINITY, 0.30),
];

pub const NEW_REGIME_SLABS_FY2025_26: [Slab; 7] = [
    slab(400_000.0, 0.00),
    slab(800_000.0, 0.05),
    slab(1_200_000.0, 0.10),
    slab(1_600_000.0, 0.15),
    slab(2_000_000.0, 0.20),
    slab(2_400_000.0, 0.25),
    slab(f64::INFINITY, 0.30),
];

pub const OLD_REGIME_SLABS_BELOW_60: [Slab; 4] = [
    slab(250_000.0, 0.00),
    slab(500_000.0, 0.05),
    slab(1_000_000.0, 0.20),
    slab(f64::INFINITY, 0.30),
];

pub const OLD_REGIME_SLABS_SENIOR: [Slab; 4] = [
    slab(300_000.0, 0.00),
    slab(500_000.0, 0.05),
    slab(1_000_000.0, 0.20),
    slab(f64::INFINITY, 0.30),
];

pub const OLD_REGIME_SLABS_SUPER_SENIOR: [Slab; 3] = [
    slab(500_000.0, 0.00),
    slab(1_000_000.0, 0.20),
    slab(f64::INFINITY, 0.30),
];

/// New-regime slab table for a financial year.
pub fn new_regime_slabs(fy: FinancialYear) -> &'static [Slab] {
    match fy {
        FinancialYear::Fy2024_25 => &NEW_REGIME_SLABS_FY2024_25,
        FinancialYear::Fy2025_26 => &NEW_REGIME_SLABS_FY2025_26,
    }
}

/// Old-regime slab table for an age category. The table is FY-independent.
pub fn old_regime_slabs(age: AgeCategory) -> &'static [Slab] {
    match age {
        AgeCategory::BelowSixty => &OLD_REGIME_SLABS_BELOW_60,
        AgeCategory::Senior => &OLD_REGIME_SLABS_SENIOR,
        AgeCategory::SuperSenior => &OLD_REGIME_SLABS_SUPER_SENIOR,
    }
}

/// 4% Health & Education Cess on (tax + surcharge), both regimes.
pub const CESS_RATE: f64 = 0.04;

/// Standard deduction on salary income.
pub fn standard_deduction(fy: FinancialYear, regime: TaxRegime) -> i64 {
    match (fy, regime) {
        (FinancialYear::Fy2024_25, TaxRegime::Old) => 50_000,
        (FinancialYear::Fy2024_25, TaxRegime::New) => 75_000,
        (FinancialYear::Fy2025_26, TaxRegime::Old) => 75_000,
        (FinancialYear::Fy2025_26, TaxRegime::New) => 75_000,
    }
}

/// Section 87A rebate rule: full rebate up to `max_rebate` when taxable
/// income does not exceed `income_limit`. Cliff, not taper.
#[derive(Debug, Clone, Copy)]
pub struct RebateRule {
    pub income_limit: i64,
    pub max_rebate: i64,
}

pub fn rebate_87a(fy: FinancialYear, regime: TaxRegime) -> RebateRule {
    match (fy, regime) {
        (FinancialYear::Fy2024_25, TaxRegime::Old) => RebateRule {
            income_limit: 500_000,
            max_rebate: 12_500,
        },
        (FinancialYear::Fy2024_25, TaxRegime::New) => RebateRule {
            income_limit: 700_000,
            max_rebate: 25_000,
        },
        (FinancialYear::Fy2025_26, TaxRegime::Old) => RebateRule {
            income_limit: 500_000,
            max_rebate: 12_500,
        },
        (FinancialYear::Fy2025_26, TaxRegime::New) => RebateRule {
            income_limit: 1_200_000,
            max_rebate: 60_000,
        },
    }
}

pub const SURCHARGE_SLABS_OLD: [Slab; 5] = [
    slab(5_000_000.0, 0.00),
    slab(10_000_000.0, 0.10),
    slab(20_000_000.0, 0.15),
    slab(50_000_000.0, 0.25),
    slab(f64::INFINITY, 0.37),
];

/// Surcharge is capped at 25% under the new regime.
pub const SURCHARGE_SLABS_NEW: [Slab; 5] = [
    slab(5_000_000.0, 0.00),
    slab(10_000_000.0, 0.10),
    slab(20_000_000.0, 0.15),
    slab(50_000_000.0, 0.25),
    slab(f64::INFINITY, 0.25),
];

/// Section 80C/80CCC/80CCD(1) combined limit.
pub const LIMIT_80C: i64 = 150_000;

/// Section 80CCD(1B) — additional NPS, above the 80C limit.
pub const LIMIT_80CCD_1B: i64 = 50_000;

// Section 80D health insurance premium limits
pub const LIMIT_80D_SELF_BELOW_60: i64 = 25_000;
pub const LIMIT_80D_SELF_SENIOR: i64 = 50_000;
pub const LIMIT_80D_PARENTS_BELOW_60: i64 = 25_000;
pub const LIMIT_80D_PARENTS_SENIOR: i64 = 50_000;

/// Section 24(b) home loan interest, self-occupied property.
pub const LIMIT_24B_SELF_OCCUPIED: i64 = 200_000;

// Capital gains (FY 2024-25 onwards, post Budget 2024)
pub const LTCG_EXEMPTION: i64 = 125_000;
pub const LTCG_RATE: f64 = 0.125;
/// 20% for listed equity with STT paid.
pub const STCG_RATE: f64 = 0.20;
pub const EQUITY_LTCG_HOLDING_MONTHS: i32 = 12;
pub const DEBT_LTCG_HOLDING_MONTHS: i32 = 24;

// HRA exemption percentages
pub const HRA_METRO_PERCENT: f64 = 0.50;
pub const HRA_NON_METRO_PERCENT: f64 = 0.40;
pub const HRA_RENT_MINUS_BASIC_PERCENT: f64 = 0.10;
