//! Redemption planner
//!
//! Secondary calculator for a planned LTCG sale: pay tax in one financial
//! year, or split the sale across the FY boundary to use two annual
//! exemptions. Not part of the checks set — the surrounding UI invokes it
//! directly with a rupee amount.

use serde::{Deserialize, Serialize};

use crate::constants::{CESS_RATE, LTCG_EXEMPTION, LTCG_RATE};
use crate::tax_math::round_rupees;

/// Effective LTCG rate including cess: 12.5% × 1.04 = 13%.
const EFFECTIVE_LTCG_RATE: f64 = LTCG_RATE * (1.0 + CESS_RATE);

/// Exemption overrides. `None` means the full ₹1.25L allowance is available.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RedemptionOptions {
    /// Unused LTCG exemption in the current financial year.
    pub exemption_remaining: Option<i64>,
    /// Expected unused exemption next financial year.
    pub exemption_next_fy: Option<i64>,
}

/// Selling everything in the current financial year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OneFyScenario {
    pub taxable: i64,
    pub tax: i64,
    pub exemption_used: i64,
    pub effective_rate: f64,
}

/// Splitting the sale across the March 31 boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplitFyScenario {
    pub sell_fy1: i64,
    pub sell_fy2: i64,
    pub taxable_fy2: i64,
    pub tax_fy2: i64,
    pub total_tax: i64,
    pub effective_rate: f64,
}

/// Comparison of the two redemption strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RedemptionPlan {
    pub planned_ltcg: i64,
    pub one_fy: OneFyScenario,
    pub split_fy: SplitFyScenario,
    pub split_beneficial: bool,
    pub split_savings: i64,
}

/// Compute the tax on a planned LTCG redemption under both strategies.
///
/// Negative input clamps to zero. Effective rates are tax over the planned
/// amount (0 when nothing is planned).
pub fn compute_redemption_tax(planned_ltcg: i64, options: &RedemptionOptions) -> RedemptionPlan {
    let planned = planned_ltcg.max(0);
    let exemption_remaining = options.exemption_remaining.unwrap_or(LTCG_EXEMPTION).max(0);
    let exemption_next_fy = options.exemption_next_fy.unwrap_or(LTCG_EXEMPTION).max(0);

    // One FY: everything beyond this year's remaining exemption is taxed.
    let one_fy_taxable = (planned - exemption_remaining).max(0);
    let one_fy_tax = round_rupees(one_fy_taxable as f64 * EFFECTIVE_LTCG_RATE);
    let one_fy = OneFyScenario {
        taxable: one_fy_taxable,
        tax: one_fy_tax,
        exemption_used: planned.min(exemption_remaining),
        effective_rate: effective_rate(one_fy_tax, planned),
    };

    // Split: fill this year's exemption tax-free, push the rest into next FY
    // where a fresh exemption applies.
    let sell_fy1 = planned.min(exemption_remaining);
    let sell_fy2 = planned - sell_fy1;
    let taxable_fy2 = (sell_fy2 - exemption_next_fy).max(0);
    let tax_fy2 = round_rupees(taxable_fy2 as f64 * EFFECTIVE_LTCG_RATE);
    let split_fy = SplitFyScenario {
        sell_fy1,
        sell_fy2,
        taxable_fy2,
        tax_fy2,
        total_tax: tax_fy2,
        effective_rate: effective_rate(tax_fy2, planned),
    };

    let delta = one_fy_tax - split_fy.total_tax;
    RedemptionPlan {
        planned_ltcg: planned,
        one_fy,
        split_fy,
        split_beneficial: delta > 0,
        split_savings: delta.max(0),
    }
}

fn effective_rate(tax: i64, planned: i64) -> f64 {
    if planned > 0 {
        tax as f64 / planned as f64
    } else {
        0.0
    }
}
