use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Expand a period expression into the dates it covers.
/// Accepted forms: `YYYY-MM-DD`, `YYYY-MM`, `YYYY`.
pub fn generate_from_period(p: &str) -> AppResult<Vec<NaiveDate>> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok(all_days_of_month(dm.year(), dm.month()));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>() {
        return Ok(all_days_of_year(year));
    }

    Err(AppError::InvalidDate(format!("invalid period: {}", p)))
}

/// Expand `A:B` where A and B are themselves period expressions; the range
/// runs from the first day of A to the last day of B inclusive.
pub fn generate_range(start: &str, end: &str) -> AppResult<Vec<NaiveDate>> {
    let s = generate_from_period(start)?;
    let e = generate_from_period(end)?;

    let start_date = *s.first().expect("period expansion is never empty");
    let end_date = *e.last().expect("period expansion is never empty");

    if end_date < start_date {
        return Err(AppError::InvalidDate(format!(
            "range end {} precedes start {}",
            end, start
        )));
    }

    let mut out = Vec::new();
    let mut d = start_date;

    while d <= end_date {
        out.push(d);
        d = d.succ_opt().expect("date within supported range");
    }

    Ok(out)
}

pub fn current_month_dates() -> AppResult<Vec<NaiveDate>> {
    let today = today();
    Ok(all_days_of_month(today.year(), today.month()))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month start");

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().expect("date within supported range");
    }

    out
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    let mut v = Vec::new();

    let mut d = NaiveDate::from_ymd_opt(year, 1, 1).expect("valid year start");
    while d.year() == year {
        v.push(d);
        d = d.succ_opt().expect("date within supported range");
    }

    v
}

pub fn current_year_dates() -> AppResult<Vec<NaiveDate>> {
    Ok(all_days_of_year(today().year()))
}
