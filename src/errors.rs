//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid punch kind: {0}")]
    InvalidPunchKind(String),

    #[error("Invalid employee id: {0}")]
    InvalidEmployee(String),

    // ---------------------------
    // Contract violations
    // ---------------------------
    #[error("Malformed event record: {0}")]
    MalformedEvent(String),

    #[error("Invalid lateness rule: {0}")]
    InvalidRule(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No events found for date {0}")]
    NoEventsForDate(String),

    #[error("No event with id {0}")]
    UnknownEvent(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
