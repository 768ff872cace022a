//! Daily aggregation: reduce a flat, unordered set of punch events into
//! one summary per calendar date.

use crate::models::day_summary::DaySummary;
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::models::status::DayStatus;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Fold events into per-day summaries.
///
/// The fold is commutative and associative: earliest check-in wins, latest
/// check-out wins, and `status` only ever moves toward `Late`. Feeding the
/// same multiset of events in any order yields an identical map, so callers
/// are free to recompute as often as they like.
///
/// The caller scopes the event set to one employee; no filtering happens
/// here. An empty slice yields an empty map.
pub fn aggregate(events: &[Event]) -> BTreeMap<NaiveDate, DaySummary> {
    let mut days: BTreeMap<NaiveDate, DaySummary> = BTreeMap::new();

    for ev in events {
        let day = days
            .entry(ev.date)
            .or_insert_with(|| DaySummary::empty(ev.date));

        match ev.kind {
            EventType::CheckIn => {
                let earlier = match day.check_in {
                    Some(current) => ev.time < current,
                    None => true,
                };
                if earlier {
                    day.check_in = Some(ev.time);
                }

                // Once any check-in of the day carries `late`, the day stays
                // late regardless of later on-time punches.
                if ev.status == Some(DayStatus::Late) {
                    day.status = DayStatus::Late;
                }
            }
            EventType::CheckOut => {
                let later = match day.check_out {
                    Some(current) => ev.time > current,
                    None => true,
                };
                if later {
                    day.check_out = Some(ev.time);
                }
            }
        }
    }

    days
}
