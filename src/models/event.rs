use super::{event_type::EventType, status::DayStatus};
use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// One immutable punch record. Events are append-only: corrections are made
/// by adding more events, never by rewriting an existing one.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub employee: String,          // ⇔ events.employee (TEXT, opaque id)
    pub date: NaiveDate,           // ⇔ events.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,           // ⇔ events.time (TEXT "HH:MM")
    pub kind: EventType,           // ⇔ events.kind ('in' | 'out')
    pub status: Option<DayStatus>, // ⇔ events.status ('ontime' | 'late' | NULL), check-in only

    pub source: String,     // ⇔ events.source (TEXT, default 'cli')
    pub created_at: String, // ⇔ events.created_at (TEXT, ISO8601)
}

impl Event {
    /// High-level constructor for events created from the CLI.
    /// - Sets `source = "cli"`
    /// - Sets `created_at = now() in ISO8601`
    pub fn new(
        id: i64,
        employee: &str,
        date: NaiveDate,
        time: NaiveTime,
        kind: EventType,
        status: Option<DayStatus>,
    ) -> Self {
        Self {
            id,
            employee: employee.to_string(),
            date,
            time,
            kind,
            status,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn timestamp(&self) -> chrono::DateTime<Local> {
        let dt = self.date.and_time(self.time);
        dt.and_local_timezone(Local).unwrap()
    }
}
