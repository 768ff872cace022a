use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        id,
        employee,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
        let emp = employee.clone().unwrap_or_else(|| cfg.employee.clone());

        //
        // Confirmation prompt
        //
        let prompt = if let Some(event_id) = id {
            format!(
                "Delete event #{} of {} for {}? This action is irreversible.",
                event_id, emp, d
            )
        } else {
            format!(
                "Delete ALL events of {} for {}? This action is irreversible.",
                emp, d
            )
        };

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let mut pool = DbPool::new(&cfg.database)?;
        DeleteLogic::apply(&mut pool, &emp, d, *id)?;
    }

    Ok(())
}
