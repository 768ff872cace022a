use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, load_events_for_day};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete all punches of an employee for a date, or a single one by id.
    /// Storage administration only; the aggregation layer treats the event
    /// set as append-only.
    pub fn apply(
        pool: &mut DbPool,
        employee: &str,
        date: NaiveDate,
        id: Option<i64>,
    ) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let events = load_events_for_day(pool, employee, &date)?;

        if events.is_empty() {
            return Err(AppError::NoEventsForDate(date_str));
        }

        if let Some(event_id) = id {
            // Delete one specific event
            if !events.iter().any(|ev| ev.id == event_id) {
                return Err(AppError::UnknownEvent(event_id));
            }

            delete_event(pool, event_id)?;
            ttlog(
                &pool.conn,
                "del",
                &date_str,
                &format!("deleted event {} for {}", event_id, employee),
            )?;

            info(format!("Deleted event {} for {}", event_id, date));
            return Ok(());
        }

        // Delete all events for this date
        let count = events.len();
        for ev in &events {
            delete_event(pool, ev.id)?;
        }

        ttlog(
            &pool.conn,
            "del",
            &date_str,
            &format!("deleted {} events for {}", count, employee),
        )?;

        info(format!("Deleted all {} events for {}", count, date));
        Ok(())
    }
}
