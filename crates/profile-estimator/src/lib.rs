//! Profile estimators
//!
//! Thin boundary-layer mappers for users who skip the detailed wizard: a CTC
//! figure becomes a representative [`SalaryProfile`], and a coarse
//! portfolio-value band becomes representative [`Holdings`]. Both are
//! deterministic; the engine treats the output like any other profile.

use anyhow::{bail, Result};
use chrono::{Datelike, NaiveDate};
use log::debug;

use tax_engine::{
    FinancialYear, Holding, Holdings, SalaryProfile, SecurityType, TaxRegime, METRO_CITIES,
};

/// Share of gross salary paid as basic in the assumed structure.
const BASIC_PERCENT: f64 = 0.40;
/// HRA as a share of basic: 50% in metros, 40% elsewhere.
const HRA_METRO_PERCENT: f64 = 0.50;
const HRA_NON_METRO_PERCENT: f64 = 0.40;
/// Employee EPF contribution as a share of basic.
const EPF_PERCENT: f64 = 0.12;
/// Flat annual professional tax assumed for all states that levy it.
const PROFESSIONAL_TAX: i64 = 2_400;

/// Build a representative salary profile from a CTC figure.
///
/// Assumes the common private-sector structure: basic at 40% of gross, HRA
/// at 50%/40% of basic by metro status, the remainder as special allowance.
/// The employee EPF contribution (12% of basic) is pre-seeded into 80C since
/// it deducts automatically.
pub fn estimate_salary_profile(
    employee_name: &str,
    ctc: i64,
    financial_year: FinancialYear,
    city: &str,
    monthly_rent: i64,
) -> Result<SalaryProfile> {
    if ctc <= 0 {
        bail!("CTC must be positive, got {ctc}");
    }
    if monthly_rent < 0 {
        bail!("monthly rent cannot be negative, got {monthly_rent}");
    }

    let gross = ctc;
    let basic = (gross as f64 * BASIC_PERCENT).round() as i64;
    let is_metro = METRO_CITIES.contains(&city.to_lowercase().as_str());
    let hra_pct = if is_metro {
        HRA_METRO_PERCENT
    } else {
        HRA_NON_METRO_PERCENT
    };
    let hra_received = (basic as f64 * hra_pct).round() as i64;
    let special_allowance = (gross - basic - hra_received).max(0);
    let epf = (basic as f64 * EPF_PERCENT).round() as i64;

    debug!("estimated profile from CTC {ctc}: basic {basic}, hra {hra_received}, epf {epf}");

    Ok(SalaryProfile {
        financial_year,
        employee_name: employee_name.to_string(),
        gross_salary: gross,
        basic_salary: basic,
        hra_received,
        special_allowance,
        professional_tax: PROFESSIONAL_TAX,
        deduction_80c: epf,
        epf_employee_contribution: epf,
        regime: TaxRegime::New,
        city: city.to_lowercase(),
        monthly_rent,
        ..Default::default()
    })
}

/// Coarse portfolio-value bands offered by the question wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioRange {
    /// Up to ₹5L invested.
    UpToFiveLakh,
    /// ₹5L–₹25L invested.
    FiveToTwentyFiveLakh,
    /// Above ₹25L invested.
    AboveTwentyFiveLakh,
}

impl PortfolioRange {
    /// Representative portfolio value for the band.
    fn midpoint_value(&self) -> f64 {
        match self {
            PortfolioRange::UpToFiveLakh => 250_000.0,
            PortfolioRange::FiveToTwentyFiveLakh => 1_500_000.0,
            PortfolioRange::AboveTwentyFiveLakh => 4_000_000.0,
        }
    }
}

/// Assumed unrealized gain across the representative portfolio.
const ASSUMED_GAIN_PERCENT: f64 = 0.15;

/// Build representative holdings for a portfolio-value band.
///
/// Three positions: a large-cap share and an index fund held long enough for
/// LTCG treatment (60% of value), and a recent flexi-cap purchase still
/// short-term. Every position carries the assumed 15% unrealized gain, so
/// the capital-gains check has realistic material to work with. Purchase
/// dates are derived from `as_of`, keeping the output deterministic.
pub fn estimate_holdings(range: PortfolioRange, as_of: NaiveDate) -> Holdings {
    let total_value = range.midpoint_value();

    let positions: [(&str, SecurityType, f64, i32); 3] = [
        ("Nifty 50 Index Fund", SecurityType::EquityMf, 0.40, 30),
        ("Reliance Industries Ltd", SecurityType::EquityShare, 0.20, 18),
        ("Flexi Cap Fund - Growth", SecurityType::EquityMf, 0.40, 8),
    ];

    let holdings = positions
        .iter()
        .map(|&(name, security_type, share, months_held)| {
            let current_value = total_value * share;
            let cost = current_value / (1.0 + ASSUMED_GAIN_PERCENT);
            // Unit-price scale is arbitrary; fix quantity at 100 units.
            let quantity = 100.0;
            Holding {
                security_name: name.to_string(),
                security_type,
                purchase_date: months_back(as_of, months_held),
                purchase_price: cost / quantity,
                quantity,
                current_price: current_value / quantity,
            }
        })
        .collect();

    Holdings {
        holdings,
        realized_stcg_this_fy: 0,
        realized_ltcg_this_fy: 0,
    }
}

/// First day of the month `months` before `as_of`.
fn months_back(as_of: NaiveDate, months: i32) -> NaiveDate {
    let total = as_of.year() * 12 + as_of.month() as i32 - 1 - months;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(as_of)
}
