use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event_type::EventType;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Record a single check-in or check-out punch.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        kind,
        date: date_arg,
        at,
        employee,
    } = cmd
    {
        //
        // 1. Parse punch kind (mandatory)
        //
        let kind = EventType::from_cli_str(kind).ok_or_else(|| {
            AppError::InvalidPunchKind(format!("'{}'. Use 'in' or 'out'.", kind))
        })?;

        //
        // 2. Parse date (default: today)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        //
        // 3. Parse time (default: now, truncated to the minute)
        //
        let t = match parse_optional_time(at.as_ref())? {
            Some(t) => t,
            None => {
                let now = chrono::Local::now().time();
                chrono::NaiveTime::from_hms_opt(
                    chrono::Timelike::hour(&now),
                    chrono::Timelike::minute(&now),
                    0,
                )
                .expect("current time is always valid")
            }
        };

        //
        // 4. Resolve employee (default from config)
        //
        let emp = employee.clone().unwrap_or_else(|| cfg.employee.clone());

        //
        // 5. Open DB and execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;
        PunchLogic::apply(&mut pool, cfg, &emp, d, t, kind)?;
    }

    Ok(())
}
