/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::status::DayStatus;

/// Status color: on time → green, late → red.
pub fn color_for_status(status: DayStatus) -> &'static str {
    match status {
        DayStatus::OnTime => GREEN,
        DayStatus::Late => RED,
    }
}

/// Deduction color:
/// \>0 → red
/// 0 → grey
pub fn color_for_deduction(amount: u64) -> &'static str {
    if amount > 0 { RED } else { GREY }
}

/// Grey out placeholder values ("--:--", empty) in table cells.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
