//! Deadline-string parsing for the calendar utility.
//!
//! Findings carry free-form deadline strings built around two anchors: the
//! investment deadline ("March 31 …") and the ITR filing deadline
//! ("July 31 …"). The calendar utility turns these into concrete dates by
//! rolling the anchor forward to its next occurrence.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeadlineError {
    #[error("no recognizable deadline in {0:?}")]
    Unrecognized(String),
}

/// Resolve a finding's deadline string to the next concrete date on or after
/// `today`.
///
/// Matching is case-insensitive and tolerates arbitrary spacing between the
/// month word and the day. `"N/A"` resolves to `Ok(None)`; anything without a
/// recognizable anchor is an error the caller can skip.
pub fn next_deadline(deadline: &str, today: NaiveDate) -> Result<Option<NaiveDate>, DeadlineError> {
    let lower = deadline.to_lowercase();
    if lower.trim() == "n/a" || lower.trim().is_empty() {
        return Ok(None);
    }

    for (month_word, month, day) in [("march", 3u32, 31u32), ("july", 7, 31)] {
        if contains_month_day(&lower, month_word, "31") {
            return Ok(Some(roll_forward(today, month, day)));
        }
    }

    Err(DeadlineError::Unrecognized(deadline.to_string()))
}

/// True when `month_word` appears followed (after optional whitespace) by
/// `day`.
fn contains_month_day(lower: &str, month_word: &str, day: &str) -> bool {
    let mut search_from = 0;
    while let Some(pos) = lower[search_from..].find(month_word) {
        let after = search_from + pos + month_word.len();
        if lower[after..].trim_start().starts_with(day) {
            return true;
        }
        search_from = after;
    }
    false
}

fn roll_forward(today: NaiveDate, month: u32, day: u32) -> NaiveDate {
    let candidate = NaiveDate::from_ymd_opt(today.year(), month, day).unwrap_or(today);
    if candidate >= today {
        candidate
    } else {
        NaiveDate::from_ymd_opt(today.year() + 1, month, day).unwrap_or(candidate)
    }
}
