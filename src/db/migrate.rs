use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::success;
use rusqlite::{Connection, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `events` table exists.
fn events_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='events'")?;
    let mut rows = stmt.query([])?;
    Ok(rows.next()?.is_some())
}

/// Check if the `events` table has a `status` column.
fn events_has_status_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('events')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "status" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `events` table with the modern schema (including `status`).
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            employee   TEXT NOT NULL,
            date       TEXT NOT NULL,
            time       TEXT NOT NULL,
            kind       TEXT NOT NULL CHECK(kind IN ('in','out')),
            status     TEXT CHECK(status IN ('ontime','late')),
            source     TEXT NOT NULL DEFAULT 'cli',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_employee_date ON events(employee, date);
        CREATE INDEX IF NOT EXISTS idx_events_date_kind ON events(date, kind);
        "#,
    )?;
    Ok(())
}

/// Migrate an old `events` table to include the `status` column.
/// Early schemas stored punches without the stamped on-time/late status;
/// those rows keep a NULL status and aggregate as on-time.
fn migrate_add_status_to_events(conn: &Connection) -> AppResult<()> {
    if !events_table_exists(conn)? {
        return Ok(());
    }

    if events_has_status_column(conn)? {
        return Ok(());
    }

    conn.execute_batch("ALTER TABLE events ADD COLUMN status TEXT;")?;

    ttlog(
        conn,
        "migration_applied",
        "events",
        "added status column to events table",
    )?;

    success("Migration applied: events.status column added.");
    Ok(())
}

/// Run all pending migrations, oldest first. Safe to call repeatedly.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    if !events_table_exists(conn)? {
        create_events_table(conn)?;
    } else {
        migrate_add_status_to_events(conn)?;
    }

    Ok(())
}
