//! Lateness policy: threshold classification and the tiered deduction ladder.

use crate::errors::{AppError, AppResult};
use crate::utils::time::minutes_between;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One deduction band: checking in more than `minutes` past the scheduled
/// start costs `amount`. Bands are independent; several may trigger at once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LatenessRule {
    pub minutes: u32,
    pub amount: u32,
}

/// Signed distance in minutes between a check-in and the scheduled start.
/// Negative means the employee clocked in early.
pub fn late_minutes(check_in: NaiveTime, scheduled_start: NaiveTime) -> i64 {
    minutes_between(scheduled_start, check_in)
}

/// A day counts as late when the check-in lands strictly more than
/// `late_threshold` minutes past the scheduled start.
pub fn is_late(check_in: NaiveTime, scheduled_start: NaiveTime, late_threshold: u32) -> bool {
    late_minutes(check_in, scheduled_start) > late_threshold as i64
}

/// Resolve the deduction for a given lateness magnitude: every band whose
/// threshold is exceeded contributes its amount. The ladder is neither
/// sorted nor deduplicated here; it is applied exactly as configured.
pub fn deduction_for(late_minutes: u32, rules: &[LatenessRule]) -> u64 {
    rules
        .iter()
        .filter(|rule| late_minutes > rule.minutes)
        .map(|rule| rule.amount as u64)
        .sum()
}

/// Validate a band and append it, returning a new ladder. The input slice is
/// untouched; the caller decides whether and where to persist the result.
/// Duplicate thresholds are allowed.
pub fn add_rule(rules: &[LatenessRule], minutes: i64, amount: i64) -> AppResult<Vec<LatenessRule>> {
    if minutes <= 0 || minutes > u32::MAX as i64 {
        return Err(AppError::InvalidRule(format!(
            "threshold must be a positive number of minutes, got {}",
            minutes
        )));
    }
    if amount < 0 || amount > u32::MAX as i64 {
        return Err(AppError::InvalidRule(format!(
            "amount must be a non-negative number, got {}",
            amount
        )));
    }

    let mut out = rules.to_vec();
    out.push(LatenessRule {
        minutes: minutes as u32,
        amount: amount as u32,
    });
    Ok(out)
}

/// Remove the band at `index` (0-based), returning a new ladder with the
/// remaining bands in their original order.
pub fn remove_rule(rules: &[LatenessRule], index: usize) -> AppResult<Vec<LatenessRule>> {
    if index >= rules.len() {
        return Err(AppError::InvalidRule(format!(
            "no rule at position {} (ladder has {} rules)",
            index + 1,
            rules.len()
        )));
    }

    let mut out = rules.to_vec();
    out.remove(index);
    Ok(out)
}
