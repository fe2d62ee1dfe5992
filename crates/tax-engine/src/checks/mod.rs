//! Optimization checks
//!
//! One module per check. Every check is a pure function from a slice of the
//! profile/holdings plus [`CheckOptions`] to a [`crate::models::Finding`];
//! outcomes flow through the finding status, never through panics or errors.

pub mod capital_gains;
pub mod home_loan;
pub mod hra;
pub mod nps;
pub mod regime;
pub mod section_80c;
pub mod section_80d;

pub use capital_gains::check_capital_gains;
pub use home_loan::check_home_loan;
pub use hra::check_hra;
pub use nps::check_nps;
pub use regime::check_regime;
pub use section_80c::check_80c;
pub use section_80d::check_80d;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Caller-supplied context shared by the checks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckOptions {
    /// True if either parent is 60+ (raises the 80D parents limit).
    pub parents_senior: bool,
    /// True if the taxpayer is 60+ (senior slabs and 80D self limit).
    pub self_senior: bool,
    /// Reference date for capital-gains holding periods. Defaults to the
    /// upcoming March 31 when absent; pass an explicit date for
    /// deterministic output.
    pub cg_as_of: Option<NaiveDate>,
}
