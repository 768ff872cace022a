use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::models::status::DayStatus;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Result, Row, params};

/// Decode one `events` row into a typed Event.
///
/// A row that cannot be decoded is a contract violation, not a skippable
/// record: the error propagates and aborts the whole load, so the aggregator
/// never sees a partial event set.
pub fn map_row(row: &Row) -> Result<Event> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::MalformedEvent(format!(
                "unreadable date: {}",
                date_str
            ))),
        )
    })?;

    let time = NaiveTime::parse_from_str(&time_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::MalformedEvent(format!(
                "unreadable time: {}",
                time_str
            ))),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = EventType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::MalformedEvent(format!(
                "invalid kind: {}",
                kind_str
            ))),
        )
    })?;

    let status_str: Option<String> = row.get("status")?;
    let status = match status_str {
        Some(raw) => Some(DayStatus::from_db_str(&raw).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::MalformedEvent(format!("invalid status: {}", raw))),
            )
        })?),
        None => None,
    };

    Ok(Event {
        id: row.get("id")?,
        employee: row.get("employee")?,
        date,
        time,
        kind,
        status,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// All punches of one employee on one date, in time order.
pub fn load_events_for_day(
    pool: &mut DbPool,
    employee: &str,
    date: &NaiveDate,
) -> AppResult<Vec<Event>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM events
         WHERE employee = ?1 AND date = ?2
         ORDER BY time ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map(params![employee, date_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All punches of one employee over an inclusive date range. The ISO date
/// encoding makes lexicographic BETWEEN equivalent to a date comparison.
pub fn load_events_for_range(
    pool: &mut DbPool,
    employee: &str,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<Event>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM events
         WHERE employee = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date ASC, time ASC",
    )?;

    let from_str = from.format("%Y-%m-%d").to_string();
    let to_str = to.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map(params![employee, from_str, to_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<()> {
    conn.execute(
        "INSERT INTO events (employee, date, time, kind, status, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            ev.employee,
            ev.date.format("%Y-%m-%d").to_string(),
            ev.time.format("%H:%M").to_string(),
            ev.kind.to_db_str(),
            ev.status.map(|s| s.to_db_str()),
            ev.source,
            ev.created_at,
        ],
    )?;
    Ok(())
}

pub fn delete_event(pool: &mut DbPool, id: i64) -> Result<()> {
    pool.conn.execute("DELETE FROM events WHERE id = ?", [id])?;
    Ok(())
}
