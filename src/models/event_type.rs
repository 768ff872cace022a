use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventType {
    CheckIn,
    CheckOut,
}

impl EventType {
    /// Parse the CLI argument (`in` / `out`, case-insensitive).
    pub fn from_cli_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" => Some(Self::CheckIn),
            "out" => Some(Self::CheckOut),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::CheckIn => "in",
            EventType::CheckOut => "out",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(EventType::CheckIn),
            "out" => Some(EventType::CheckOut),
            _ => None,
        }
    }

    pub fn is_check_in(&self) -> bool {
        matches!(self, EventType::CheckIn)
    }

    pub fn is_check_out(&self) -> bool {
        matches!(self, EventType::CheckOut)
    }
}
