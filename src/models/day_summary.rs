use crate::models::status::DayStatus;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Reduced view of all punches for one employee on one calendar date.
/// Recomputed on demand from the full event set; never persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub status: DayStatus,
}

impl DaySummary {
    /// Fresh accumulator for a date seen for the first time.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            check_in: None,
            check_out: None,
            status: DayStatus::OnTime,
        }
    }

    pub fn check_in_str(&self) -> String {
        match self.check_in {
            Some(t) => t.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        }
    }

    pub fn check_out_str(&self) -> String {
        match self.check_out {
            Some(t) => t.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        }
    }
}
