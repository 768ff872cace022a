pub mod db_utils;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;

use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::models::status::DayStatus;
use rusqlite::Connection;

/// Convenience wrapper used by tests and scripting: parse the string form of
/// a punch and insert it directly, bypassing the CLI.
pub fn add_punch(
    conn: &Connection,
    employee: &str,
    date: &str,
    time: &str,
    kind: &str,
    status: Option<&str>,
) -> AppResult<()> {
    let d = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(date.to_string()))?;
    let t = chrono::NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| AppError::InvalidTime(time.to_string()))?;
    let k = EventType::from_db_str(kind)
        .ok_or_else(|| AppError::InvalidPunchKind(kind.to_string()))?;

    let s = match status {
        Some(raw) => Some(
            DayStatus::from_db_str(raw)
                .ok_or_else(|| AppError::MalformedEvent(format!("invalid status: {}", raw)))?,
        ),
        None => None,
    };

    let ev = Event::new(0, employee, d, t, k, s);
    queries::insert_event(conn, &ev)
}
