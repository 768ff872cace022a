use crate::config::Config;
use crate::core::policy;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::models::status::DayStatus;
use crate::ui::messages::success;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `punch` command.
pub struct PunchLogic;

impl PunchLogic {
    /// Record a single punch. Events are append-only: a retry or correction
    /// is just another row, and the aggregation layer resolves duplicates.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        employee: &str,
        date: NaiveDate,
        time: NaiveTime,
        kind: EventType,
    ) -> AppResult<()> {
        if employee.trim().is_empty() {
            return Err(AppError::InvalidEmployee(
                "employee id must not be empty".into(),
            ));
        }

        // Stamp the status on check-in the way a badge terminal would:
        // measured against the configured shift start and late threshold.
        // Check-outs carry no status.
        let status = match kind {
            EventType::CheckIn => {
                let start = cfg.scheduled_start_time()?;
                if policy::is_late(time, start, cfg.late_threshold) {
                    Some(DayStatus::Late)
                } else {
                    Some(DayStatus::OnTime)
                }
            }
            EventType::CheckOut => None,
        };

        let ev = Event::new(0, employee, date, time, kind, status);
        insert_event(&pool.conn, &ev)?;

        ttlog(
            &pool.conn,
            "punch",
            kind.as_str(),
            &format!("{} {} at {} on {}", employee, kind.as_str(), ev.time_str(), ev.date_str()),
        )?;

        let note = match status {
            Some(DayStatus::Late) => " (late)",
            _ => "",
        };
        success(format!(
            "Punched {} at {} on {} for {}{}.",
            kind.as_str(),
            ev.time_str(),
            ev.date_str(),
            employee,
            note
        ));

        Ok(())
    }
}
