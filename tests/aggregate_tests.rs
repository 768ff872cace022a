use chrono::{NaiveDate, NaiveTime};
use punchlog::core::aggregate::aggregate;
use punchlog::core::stats::summarize;
use punchlog::models::event::Event;
use punchlog::models::event_type::EventType;
use punchlog::models::status::DayStatus;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn check_in(date: NaiveDate, time: NaiveTime, status: DayStatus) -> Event {
    Event::new(0, "emp-7", date, time, EventType::CheckIn, Some(status))
}

fn check_out(date: NaiveDate, time: NaiveTime) -> Event {
    Event::new(0, "emp-7", date, time, EventType::CheckOut, None)
}

#[test]
fn empty_input_yields_empty_map_and_zero_stats() {
    let days = aggregate(&[]);
    assert!(days.is_empty());

    let stats = summarize(days.values());
    assert_eq!(stats.total, 0);
    assert_eq!(stats.on_time, 0);
    assert_eq!(stats.late, 0);
}

#[test]
fn earliest_check_in_wins() {
    let date = d(2024, 3, 11);
    let events = vec![
        check_in(date, t(9, 5), DayStatus::OnTime),
        check_in(date, t(8, 55), DayStatus::OnTime),
    ];

    let days = aggregate(&events);
    assert_eq!(days[&date].check_in, Some(t(8, 55)));
}

#[test]
fn latest_check_out_wins() {
    let date = d(2024, 3, 11);
    let events = vec![check_out(date, t(17, 0)), check_out(date, t(17, 30))];

    let days = aggregate(&events);
    assert_eq!(days[&date].check_out, Some(t(17, 30)));
}

#[test]
fn late_status_is_monotonic() {
    let date = d(2024, 3, 12);
    let late_first = vec![
        check_in(date, t(9, 40), DayStatus::Late),
        check_in(date, t(8, 50), DayStatus::OnTime),
    ];
    let late_last = vec![
        check_in(date, t(8, 50), DayStatus::OnTime),
        check_in(date, t(9, 40), DayStatus::Late),
    ];

    // The late punch sticks no matter which event is folded first,
    // even though the on-time punch provides the earlier check-in.
    for events in [late_first, late_last] {
        let days = aggregate(&events);
        assert_eq!(days[&date].status, DayStatus::Late);
        assert_eq!(days[&date].check_in, Some(t(8, 50)));
    }
}

#[test]
fn result_is_order_independent() {
    let events = vec![
        check_in(d(2024, 1, 1), t(8, 5), DayStatus::OnTime),
        check_out(d(2024, 1, 1), t(17, 30)),
        check_in(d(2024, 1, 2), t(9, 10), DayStatus::Late),
        check_out(d(2024, 1, 2), t(17, 0)),
        check_in(d(2024, 1, 2), t(9, 20), DayStatus::Late),
        check_out(d(2024, 1, 1), t(16, 45)),
    ];

    let expected = aggregate(&events);

    // A handful of fixed permutations of the same multiset
    let mut reversed = events.clone();
    reversed.reverse();

    let mut interleaved: Vec<Event> = Vec::new();
    let half = events.len() / 2;
    for i in 0..half {
        interleaved.push(events[half + i].clone());
        interleaved.push(events[i].clone());
    }

    let mut rotated = events.clone();
    rotated.rotate_left(3);

    for permutation in [reversed, interleaved, rotated] {
        assert_eq!(aggregate(&permutation), expected);
    }
}

#[test]
fn reaggregation_is_idempotent() {
    let events = vec![
        check_in(d(2024, 2, 5), t(8, 59), DayStatus::OnTime),
        check_out(d(2024, 2, 5), t(18, 2)),
    ];

    assert_eq!(aggregate(&events), aggregate(&events));
}

#[test]
fn day_with_only_check_outs_defaults_to_on_time() {
    let date = d(2024, 4, 2);
    let events = vec![check_out(date, t(17, 0))];

    let days = aggregate(&events);
    let day = &days[&date];
    assert_eq!(day.check_in, None);
    assert_eq!(day.check_out, Some(t(17, 0)));
    assert_eq!(day.status, DayStatus::OnTime);
}

#[test]
fn check_in_without_stamped_status_leaves_day_on_time() {
    let date = d(2024, 4, 3);
    let events = vec![Event::new(0, "emp-7", date, t(9, 0), EventType::CheckIn, None)];

    let days = aggregate(&events);
    assert_eq!(days[&date].status, DayStatus::OnTime);
}

#[test]
fn two_day_scenario_end_to_end() {
    let events = vec![
        check_in(d(2024, 1, 1), t(8, 5), DayStatus::OnTime),
        check_out(d(2024, 1, 1), t(17, 30)),
        check_in(d(2024, 1, 2), t(9, 10), DayStatus::Late),
        check_out(d(2024, 1, 2), t(17, 0)),
    ];

    let days = aggregate(&events);
    assert_eq!(days.len(), 2);

    let first = &days[&d(2024, 1, 1)];
    assert_eq!(first.check_in, Some(t(8, 5)));
    assert_eq!(first.check_out, Some(t(17, 30)));
    assert_eq!(first.status, DayStatus::OnTime);

    let second = &days[&d(2024, 1, 2)];
    assert_eq!(second.check_in, Some(t(9, 10)));
    assert_eq!(second.check_out, Some(t(17, 0)));
    assert_eq!(second.status, DayStatus::Late);

    let stats = summarize(days.values());
    assert_eq!(stats.total, 2);
    assert_eq!(stats.on_time, 1);
    assert_eq!(stats.late, 1);
}

#[test]
fn counters_stay_consistent() {
    let events = vec![
        check_in(d(2024, 5, 1), t(9, 50), DayStatus::Late),
        check_in(d(2024, 5, 2), t(8, 58), DayStatus::OnTime),
        check_in(d(2024, 5, 3), t(9, 20), DayStatus::Late),
        check_out(d(2024, 5, 4), t(17, 0)),
    ];

    let days = aggregate(&events);
    let stats = summarize(days.values());

    assert_eq!(stats.on_time + stats.late, stats.total);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.late, 2);
}
