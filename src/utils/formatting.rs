//! Formatting utilities for CLI output.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // es: +02:25
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: +02h 25m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Textual description and ANSI color for a stored status code.
/// Used by tests and human-readable output.
pub fn describe_status(code: &str) -> (String, &'static str) {
    match code.to_lowercase().as_str() {
        "ontime" => ("On time".into(), "\x1b[32m"),
        "late" => ("Late".into(), "\x1b[31m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}
