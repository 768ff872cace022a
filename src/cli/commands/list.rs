use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::aggregate;
use crate::core::policy;
use crate::core::stats::summarize;
use crate::db::pool::DbPool;
use crate::db::queries::load_events_for_range;
use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use crate::models::event::Event;
use crate::models::status::DayStatus;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_deduction, color_for_status, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};
use chrono::{Datelike, NaiveDate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        now: l_now,
        employee,
        events: events_only,
        json,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let emp = employee.clone().unwrap_or_else(|| cfg.employee.clone());

        let dates = if *l_now {
            vec![date::today()]
        } else {
            resolve_period(period)?
        };

        // resolve_period always yields at least one date, in ascending order
        let from = dates[0];
        let to = dates[dates.len() - 1];

        let events = load_events_for_range(&mut pool, &emp, &from, &to)?;

        if events.is_empty() {
            println!("No events for {} between {} and {}.", emp, from, to);
            return Ok(());
        }

        if *events_only {
            print_events(&events);
            return Ok(());
        }

        let days = aggregate(&events);
        let stats = summarize(days.values());
        let start = cfg.scheduled_start_time()?;

        if *json {
            print_json(&emp, &days, cfg, start)?;
            return Ok(());
        }

        header(format!("Attendance for {} ({} → {})", emp, from, to));

        let show_weekday = !cfg.show_weekday.eq_ignore_ascii_case("none");
        let date_w = if show_weekday { 14 } else { 10 };

        let mut table = Table::new(
            vec![
                Column {
                    header: "Date".into(),
                    width: date_w,
                },
                Column {
                    header: "In".into(),
                    width: 5,
                },
                Column {
                    header: "Out".into(),
                    width: 5,
                },
                Column {
                    header: "Status".into(),
                    width: 8,
                },
                Column {
                    header: "Late".into(),
                    width: 5,
                },
                Column {
                    header: "Deduction".into(),
                    width: 9,
                },
            ],
            &cfg.separator_char,
        );

        let mut total_deduction: u64 = 0;

        for (d, day) in &days {
            let late_min = late_minutes_of(day, start);
            let deduction = policy::deduction_for(late_min, &cfg.deduction_rules);
            total_deduction += deduction;

            table.add_row(vec![
                format_date(d, show_weekday),
                day.check_in_str(),
                day.check_out_str(),
                day.status.label().to_string(),
                mins2readable(late_min as i64, false, true),
                deduction.to_string(),
            ]);
        }

        print!("{}", table.render());

        println!(
            "\nDays: {} | On time: {}{}{} | Late: {}{}{}",
            stats.total,
            color_for_status(DayStatus::OnTime),
            stats.on_time,
            RESET,
            color_for_status(DayStatus::Late),
            stats.late,
            RESET,
        );
        println!(
            "Total deduction: {}{}{}",
            color_for_deduction(total_deduction),
            total_deduction,
            RESET
        );
    }

    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Vec<NaiveDate>> {
    if let Some(p) = period {
        if p == "all" {
            return date::current_year_dates();
        }

        if p.contains(':') {
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                return date::generate_range(parts[0], parts[1]);
            }
        }

        return date::generate_from_period(p);
    }

    date::current_month_dates()
}

fn late_minutes_of(day: &DaySummary, start: chrono::NaiveTime) -> u32 {
    match day.check_in {
        Some(t) => policy::late_minutes(t, start).max(0) as u32,
        None => 0,
    }
}

fn format_date(d: &NaiveDate, show_weekday: bool) -> String {
    if show_weekday {
        format!("{} {}", d.weekday(), d)
    } else {
        d.to_string()
    }
}

fn print_events(events: &[Event]) {
    println!("EVENTS:");
    for ev in events {
        let status = match ev.status {
            Some(s) => s.label().to_string(),
            None => "--".to_string(),
        };
        println!(
            "- #{} | {} {} | {} | {}",
            ev.id,
            ev.date_str(),
            ev.time_str(),
            ev.kind.as_str(),
            colorize_optional(&status),
        );
    }
}

fn print_json(
    emp: &str,
    days: &std::collections::BTreeMap<NaiveDate, DaySummary>,
    cfg: &Config,
    start: chrono::NaiveTime,
) -> AppResult<()> {
    let mut rows = Vec::new();
    let mut total_deduction: u64 = 0;

    for day in days.values() {
        let late_min = late_minutes_of(day, start);
        let deduction = policy::deduction_for(late_min, &cfg.deduction_rules);
        total_deduction += deduction;

        rows.push(serde_json::json!({
            "date": day.date,
            "check_in": day.check_in,
            "check_out": day.check_out,
            "status": day.status.to_db_str(),
            "late_minutes": late_min,
            "deduction": deduction,
        }));
    }

    let stats = summarize(days.values());
    let out = serde_json::json!({
        "employee": emp,
        "days": rows,
        "stats": stats,
        "total_deduction": total_deduction,
    });

    println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    Ok(())
}
