//! Check 5: Capital gains optimization.
//!
//! Regime-independent — capital gains tax applies in both regimes. Three
//! sub-analyses:
//!
//! - LTCG harvesting against the ₹1.25L annual exemption,
//! - holding-period alerts for positions weeks away from LTCG treatment,
//! - unrealized losses usable to offset realized gains.
//!
//! India has no wash sale rule, so sell-and-repurchase on the same day is a
//! legal cost-basis reset.

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;
use serde_json::json;

use crate::constants::{CESS_RATE, LTCG_EXEMPTION, LTCG_RATE, STCG_RATE};
use crate::models::{format_rupees, Confidence, Finding, FindingStatus, Holdings};
use crate::tax_math::round_rupees;

pub const CHECK_ID: &str = "capital_gains";
const CHECK_NAME: &str = "Capital Gains Optimization";

#[derive(Debug, Serialize)]
struct LongTermPosition {
    name: String,
    gain: i64,
    months: i32,
    cost: i64,
    value: i64,
}

#[derive(Debug, Serialize)]
struct ShortTermPosition {
    name: String,
    gain: i64,
    months: i32,
    months_to_ltcg: i32,
    cost: i64,
    value: i64,
}

#[derive(Debug, Serialize)]
struct HoldingPeriodAlert {
    security: String,
    months_held: i32,
    months_to_ltcg: i32,
    gain: i64,
    stcg_tax: i64,
    advice: String,
}

#[derive(Debug, Serialize)]
struct UnrealizedLoss {
    name: String,
    loss: i64,
    is_long_term: bool,
}

/// End of the financial year the reference date falls in: March 31 of the
/// current calendar year for January–March, otherwise next year's.
pub fn fiscal_year_end(today: NaiveDate) -> NaiveDate {
    let year = if today.month() <= 3 {
        today.year()
    } else {
        today.year() + 1
    };
    NaiveDate::from_ymd_opt(year, 3, 31).unwrap_or(today)
}

/// Analyze capital gains optimization opportunities.
///
/// `as_of` is the reference date for holding periods; when `None` it
/// defaults to the end of the current financial year for tax planning.
pub fn check_capital_gains(holdings: &Holdings, as_of: Option<NaiveDate>) -> Finding {
    let as_of = as_of.unwrap_or_else(|| fiscal_year_end(Utc::now().date_naive()));

    if holdings.holdings.is_empty() {
        return Finding {
            check_id: CHECK_ID.to_string(),
            check_name: CHECK_NAME.to_string(),
            status: FindingStatus::NotApplicable,
            finding: "No investment holdings to analyze".to_string(),
            savings: 0,
            action: "N/A".to_string(),
            deadline: "N/A".to_string(),
            confidence: Confidence::Definite,
            explanation: String::new(),
            details: json!({}),
        };
    }

    let mut long_term = Vec::new();
    let mut short_term = Vec::new();
    let mut alerts = Vec::new();
    let mut losses = Vec::new();

    for h in &holdings.holdings {
        let months = h.holding_months(as_of);
        let gain = round_rupees(h.unrealized_gain());
        let is_lt = h.is_long_term(as_of);

        if gain < 0 {
            losses.push(UnrealizedLoss {
                name: h.security_name.clone(),
                loss: -gain,
                is_long_term: is_lt,
            });
        }

        if is_lt && gain > 0 {
            long_term.push(LongTermPosition {
                name: h.security_name.clone(),
                gain,
                months,
                cost: round_rupees(h.total_cost()),
                value: round_rupees(h.current_value()),
            });
        } else if !is_lt {
            let months_to_ltcg = if months < 13 { 13 - months } else { 0 };
            short_term.push(ShortTermPosition {
                name: h.security_name.clone(),
                gain,
                months,
                months_to_ltcg,
                cost: round_rupees(h.total_cost()),
                value: round_rupees(h.current_value()),
            });
            // Alert when LTCG treatment is only weeks away and selling now
            // would pay the 20% short-term rate on a real gain.
            if (10..=12).contains(&months) && gain > 0 {
                alerts.push(HoldingPeriodAlert {
                    security: h.security_name.clone(),
                    months_held: months,
                    months_to_ltcg: 13 - months,
                    gain,
                    stcg_tax: round_rupees(gain as f64 * STCG_RATE * (1.0 + CESS_RATE)),
                    advice: format!(
                        "Wait {} month(s) before selling to qualify for LTCG rate \
                         (12.5% vs 20%)",
                        13 - months
                    ),
                });
            }
        }
    }

    let unrealized_ltcg: i64 = long_term.iter().map(|p| p.gain).sum();
    let unrealized_stcg: i64 = short_term.iter().map(|p| p.gain).filter(|g| *g > 0).sum();

    let exemption_remaining = (LTCG_EXEMPTION - holdings.realized_ltcg_this_fy).max(0);
    let harvestable_ltcg = unrealized_ltcg.min(exemption_remaining);
    let future_tax_saved = round_rupees(harvestable_ltcg as f64 * LTCG_RATE * (1.0 + CESS_RATE));

    let holdings_to_harvest: Vec<&str> = long_term.iter().map(|p| p.name.as_str()).collect();

    if harvestable_ltcg <= 0 && alerts.is_empty() {
        return Finding {
            check_id: CHECK_ID.to_string(),
            check_name: CHECK_NAME.to_string(),
            status: FindingStatus::Optimized,
            finding: "No harvestable LTCG or holding period optimizations found".to_string(),
            savings: 0,
            action: "No action needed".to_string(),
            deadline: "N/A".to_string(),
            confidence: Confidence::Definite,
            explanation: String::new(),
            details: json!({
                "unrealized_ltcg": unrealized_ltcg,
                "unrealized_stcg": unrealized_stcg,
                "ltcg_exemption_limit": LTCG_EXEMPTION,
            }),
        };
    }

    let action = if holdings_to_harvest.is_empty() {
        "Monitor holdings for LTCG harvesting opportunity".to_string()
    } else {
        format!(
            "Before March 31: Sell {}. Immediately repurchase. This resets cost \
             basis and uses your \u{20b9}{}K annual LTCG exemption",
            holdings_to_harvest.join(", "),
            LTCG_EXEMPTION / 1_000
        )
    };

    let mut details = json!({
        "unrealized_ltcg": unrealized_ltcg,
        "unrealized_stcg": unrealized_stcg,
        "realized_ltcg_this_fy": holdings.realized_ltcg_this_fy,
        "ltcg_exemption_limit": LTCG_EXEMPTION,
        "exemption_used": harvestable_ltcg,
        "exemption_remaining": exemption_remaining - harvestable_ltcg,
        "future_tax_saved": future_tax_saved,
        "holdings_to_harvest": holdings_to_harvest,
        "as_of": as_of.to_string(),
    });
    if !alerts.is_empty() {
        details["holding_period_alerts"] = serde_json::to_value(&alerts).unwrap_or_default();
    }
    if !losses.is_empty() {
        details["unrealized_losses"] = serde_json::to_value(&losses).unwrap_or_default();
    }

    Finding {
        check_id: CHECK_ID.to_string(),
        check_name: CHECK_NAME.to_string(),
        status: FindingStatus::Opportunity,
        finding: format!(
            "\u{20b9}{} unrealized LTCG can be harvested tax-free. \
             Saves \u{20b9}{} in future taxes",
            format_rupees(unrealized_ltcg),
            format_rupees(future_tax_saved)
        ),
        savings: future_tax_saved,
        action,
        deadline: "March 31 (end of financial year)".to_string(),
        confidence: Confidence::Definite,
        explanation: format!(
            "You have \u{20b9}{} in unrealized long-term capital gains, well under \
             the \u{20b9}{} annual exemption. By selling and immediately repurchasing \
             (legal in India \u{2014} no wash sale rule), you reset your cost basis \
             higher and avoid 12.5% tax on these gains in the future.",
            format_rupees(unrealized_ltcg),
            format_rupees(LTCG_EXEMPTION)
        ),
        details,
    }
}
