//! TaxHawk Engine
//!
//! Deterministic income-tax optimization for Indian salaried individuals.
//! Given a salary profile and optionally an equity/MF portfolio, the engine
//! runs seven optimization checks over a shared tax-math kernel and produces
//! a ranked report whose total savings are free of double-counting.
//!
//! Pure and side-effect free: no I/O, no shared state, bit-identical output
//! for identical inputs.

pub mod checks;
pub mod constants;
pub mod deadline;
pub mod models;
pub mod orchestrator;
pub mod redemption;
pub mod tax_math;

pub use checks::{
    check_80c, check_80d, check_capital_gains, check_home_loan, check_hra, check_nps,
    check_regime, CheckOptions,
};
pub use deadline::{next_deadline, DeadlineError};
pub use models::{
    format_rupees, AgeCategory, Confidence, FinancialYear, Finding, FindingStatus, Holding,
    Holdings, Report, SalaryProfile, SecurityType, TaxRegime, DISCLAIMER, METRO_CITIES,
};
pub use orchestrator::run_all_checks;
pub use redemption::{
    compute_redemption_tax, OneFyScenario, RedemptionOptions, RedemptionPlan, SplitFyScenario,
};
pub use tax_math::{
    apply_87a_rebate, apply_cess, get_marginal_rate, hra_exemption, new_regime_tax,
    new_regime_taxable_income, old_regime_tax, old_regime_taxable_income, surcharge,
    tax_on_slabs, OldRegimeBreakdown, OldRegimeOverrides, TaxBreakdown,
};
