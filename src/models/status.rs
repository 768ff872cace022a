use serde::{Deserialize, Serialize};

/// Day-level attendance status. The default for a day with no recorded
/// check-in is `OnTime`; once a late check-in is seen the status sticks to
/// `Late` for that day (monotonic, never reverted by later on-time punches).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DayStatus {
    #[default]
    OnTime,
    Late,
}

impl DayStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            DayStatus::OnTime => "ontime",
            DayStatus::Late => "late",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "ontime" => Some(DayStatus::OnTime),
            "late" => Some(DayStatus::Late),
            _ => None,
        }
    }

    /// Human-readable label for CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::OnTime => "on time",
            DayStatus::Late => "late",
        }
    }

    pub fn is_late(&self) -> bool {
        matches!(self, DayStatus::Late)
    }
}
