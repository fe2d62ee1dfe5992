//! Core data model
//!
//! Input records (salary profile, holdings), the per-check `Finding` output,
//! and the final `Report`. All rupee amounts are annual `i64` values; per-unit
//! security prices and quantities are `f64`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Financial years with distinct slab/rebate/standard-deduction tables.
///
/// Unknown years parse to `Fy2024_25` for compatibility with older payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinancialYear {
    #[default]
    #[serde(rename = "2024-25")]
    Fy2024_25,
    #[serde(rename = "2025-26")]
    Fy2025_26,
}

impl FinancialYear {
    pub fn parse(s: &str) -> Self {
        match s {
            "2025-26" => FinancialYear::Fy2025_26,
            _ => FinancialYear::Fy2024_25,
        }
    }
}

impl std::fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinancialYear::Fy2024_25 => write!(f, "2024-25"),
            FinancialYear::Fy2025_26 => write!(f, "2025-26"),
        }
    }
}

/// Income-tax regime choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    Old,
    /// Employer default since FY 2023-24.
    #[default]
    New,
}

impl std::fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxRegime::Old => write!(f, "old"),
            TaxRegime::New => write!(f, "new"),
        }
    }
}

/// Age bracket selecting the old-regime slab table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeCategory {
    #[default]
    BelowSixty,
    /// 60 to 79 years.
    Senior,
    /// 80 years and above.
    SuperSenior,
}

/// Security classification for the long-term holding test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityType {
    EquityShare,
    EquityMf,
    DebtMf,
    Elss,
    Other,
}

impl SecurityType {
    /// Equity instruments turn long-term after 12 months, everything else
    /// after 24 months.
    pub fn is_equity(&self) -> bool {
        matches!(
            self,
            SecurityType::EquityShare | SecurityType::EquityMf | SecurityType::Elss
        )
    }
}

/// Outcome class of a single optimization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingStatus {
    Opportunity,
    Optimized,
    NotApplicable,
}

/// How certain the engine is about a finding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    #[default]
    Definite,
    Likely,
    NeedsVerification,
}

/// Metro cities for HRA. Bangalore is NOT metro — only these four qualify.
pub const METRO_CITIES: [&str; 4] = ["mumbai", "delhi", "kolkata", "chennai"];

/// Structured salary data, typically extracted from Form 16 Part B.
///
/// All amounts are annual rupees. Amounts the employer did not report default
/// to zero; the engine tolerates out-of-invariant values (clamping at use
/// sites) rather than rejecting the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryProfile {
    // Identity
    pub financial_year: FinancialYear,
    pub employee_name: String,
    pub pan: String,
    pub employer_name: String,

    // Salary components
    pub gross_salary: i64,
    pub basic_salary: i64,
    pub hra_received: i64,
    pub special_allowance: i64,
    pub lta: i64,
    pub bonus: i64,
    pub other_salary: i64,

    // Section 10 exemptions currently claimed
    pub hra_exemption: i64,
    pub lta_exemption: i64,
    pub other_exemptions: i64,

    // Salary-head deductions (Section 16)
    pub standard_deduction: i64,
    pub professional_tax: i64,

    // Chapter VI-A deductions currently claimed
    pub deduction_80c: i64,
    pub deduction_80ccc: i64,
    pub deduction_80ccd_1: i64,
    pub deduction_80ccd_1b: i64,
    pub deduction_80ccd_2: i64,
    pub deduction_80d: i64,
    pub deduction_80e: i64,
    pub deduction_80g: i64,
    pub deduction_80tta: i64,
    pub deduction_24b: i64,
    pub other_deductions: i64,

    // Declared tax figures from Form 16 (informational only)
    pub taxable_income: i64,
    pub tax_payable: i64,
    pub cess: i64,
    pub total_tax_paid: i64,

    // Regime currently applied by the employer, plus context
    pub regime: TaxRegime,
    pub city: String,
    pub monthly_rent: i64,
    pub epf_employee_contribution: i64,
}

impl Default for SalaryProfile {
    fn default() -> Self {
        Self {
            financial_year: FinancialYear::default(),
            employee_name: String::new(),
            pan: String::new(),
            employer_name: String::new(),
            gross_salary: 0,
            basic_salary: 0,
            hra_received: 0,
            special_allowance: 0,
            lta: 0,
            bonus: 0,
            other_salary: 0,
            hra_exemption: 0,
            lta_exemption: 0,
            other_exemptions: 0,
            standard_deduction: 0,
            professional_tax: 0,
            deduction_80c: 0,
            deduction_80ccc: 0,
            deduction_80ccd_1: 0,
            deduction_80ccd_1b: 0,
            deduction_80ccd_2: 0,
            deduction_80d: 0,
            deduction_80e: 0,
            deduction_80g: 0,
            deduction_80tta: 0,
            deduction_24b: 0,
            other_deductions: 0,
            taxable_income: 0,
            tax_payable: 0,
            cess: 0,
            total_tax_paid: 0,
            regime: TaxRegime::New,
            city: "other".to_string(),
            monthly_rent: 0,
            epf_employee_contribution: 0,
        }
    }
}

impl SalaryProfile {
    /// Metro classification for HRA purposes.
    pub fn is_metro(&self) -> bool {
        let city = self.city.to_lowercase();
        METRO_CITIES.contains(&city.as_str())
    }

    pub fn total_exemptions(&self) -> i64 {
        self.hra_exemption + self.lta_exemption + self.other_exemptions
    }

    /// Sum of all currently claimed Chapter VI-A deductions.
    pub fn total_chapter_via(&self) -> i64 {
        self.deduction_80c
            + self.deduction_80ccc
            + self.deduction_80ccd_1
            + self.deduction_80ccd_1b
            + self.deduction_80ccd_2
            + self.deduction_80d
            + self.deduction_80e
            + self.deduction_80g
            + self.deduction_80tta
            + self.deduction_24b
            + self.other_deductions
    }
}

/// A single investment position (equity share, MF units, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub security_name: String,
    pub security_type: SecurityType,
    pub purchase_date: NaiveDate,
    /// Cost per unit/share.
    pub purchase_price: f64,
    pub quantity: f64,
    /// Current market price per unit/share.
    pub current_price: f64,
}

impl Holding {
    pub fn total_cost(&self) -> f64 {
        self.purchase_price * self.quantity
    }

    pub fn current_value(&self) -> f64 {
        self.current_price * self.quantity
    }

    pub fn unrealized_gain(&self) -> f64 {
        self.current_value() - self.total_cost()
    }

    /// Whole calendar months held from purchase to `as_of`.
    ///
    /// Year/month difference only — day-of-month is ignored so the long-term
    /// classification is deterministic regardless of timezone. An inverted
    /// purchase date yields a negative count, which simply fails the
    /// long-term test.
    pub fn holding_months(&self, as_of: NaiveDate) -> i32 {
        use chrono::Datelike;
        (as_of.year() - self.purchase_date.year()) * 12
            + (as_of.month() as i32 - self.purchase_date.month() as i32)
    }

    /// Equity/ELSS: long-term after more than 12 months. Debt and other
    /// security types: more than 24 months.
    pub fn is_long_term(&self, as_of: NaiveDate) -> bool {
        let months = self.holding_months(as_of);
        if self.security_type.is_equity() {
            months > crate::constants::EQUITY_LTCG_HOLDING_MONTHS
        } else {
            months > crate::constants::DEBT_LTCG_HOLDING_MONTHS
        }
    }
}

/// Portfolio of holdings plus gains already realized this financial year.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Holdings {
    pub holdings: Vec<Holding>,
    pub realized_stcg_this_fy: i64,
    pub realized_ltcg_this_fy: i64,
}

/// Output of a single optimization check.
///
/// `savings` is zero unless `status` is `Opportunity` — and stays zero even
/// then for the display-only checks (HRA, home loan) whose effect is counted
/// inside the regime finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub check_id: String,
    pub check_name: String,
    pub status: FindingStatus,
    /// One-line summary of what was found.
    pub finding: String,
    /// Rupees saved per year if the action is taken.
    pub savings: i64,
    pub action: String,
    pub deadline: String,
    pub confidence: Confidence,
    pub explanation: String,
    /// Check-specific fields for the results dashboard.
    pub details: serde_json::Value,
}

/// Final report combining all optimization findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub user_name: String,
    pub financial_year: FinancialYear,
    pub current_regime: TaxRegime,
    pub recommended_regime: TaxRegime,
    pub total_savings: i64,
    pub checks: Vec<Finding>,
    pub summary: String,
    pub disclaimer: String,
}

pub const DISCLAIMER: &str = "This analysis is for informational purposes only and does not constitute \
tax advice. Please consult a qualified Chartered Accountant before making \
tax decisions. Tax laws are subject to change.";

/// Format a rupee amount with thousands separators, e.g. `1,42,600` style
/// western grouping: `1422600` → `"1,422,600"`.
pub fn format_rupees(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
