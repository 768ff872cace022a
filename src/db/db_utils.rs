use crate::db::pool::DbPool;
use crate::db::queries::map_row;
use crate::errors::{AppError, AppResult};

/// Sweep every stored event through the typed decoder.
///
/// Returns the number of rows checked; the first malformed row aborts the
/// sweep with the decode error, mirroring what a `list` over that period
/// would hit.
pub fn check_events_decode(pool: &mut DbPool) -> AppResult<usize> {
    let mut stmt = pool.conn.prepare("SELECT * FROM events ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut checked = 0;
    for r in rows {
        r?;
        checked += 1;
    }

    Ok(checked)
}

/// Run SQLite's own integrity check.
pub fn check_integrity(pool: &mut DbPool) -> AppResult<()> {
    let verdict: String = pool
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if verdict == "ok" {
        Ok(())
    } else {
        Err(AppError::Migration(format!(
            "integrity check failed: {}",
            verdict
        )))
    }
}
