//! Aggregate counters over a set of day summaries.

use crate::models::day_summary::DaySummary;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AttendanceStats {
    pub total: usize,
    pub on_time: usize,
    pub late: usize,
}

/// Count total / on-time / late days. Total on any finite input; an empty
/// iterator yields the all-zero stats.
pub fn summarize<'a, I>(days: I) -> AttendanceStats
where
    I: IntoIterator<Item = &'a DaySummary>,
{
    let mut total = 0;
    let mut late = 0;

    for day in days {
        total += 1;
        if day.status.is_late() {
            late += 1;
        }
    }

    AttendanceStats {
        total,
        on_time: total - late,
        late,
    }
}
