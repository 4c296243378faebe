// tests/schedule_view.rs
use chrono::NaiveDate;

use pl_portal::api::Event;
use pl_portal::views::schedule::{group_by_date, Schedule};

fn ev(id: &str, home: &str, away: &str, date: &str, time: Option<&str>) -> Event {
    Event {
        id_event: id.into(),
        str_home_team: home.into(),
        str_away_team: away.into(),
        date_event: date.into(),
        str_time: time.map(String::from),
        ..Event::default()
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn schedule() -> Schedule {
    let past = vec![
        ev("1", "Arsenal", "Wolves", "2024-08-17", Some("14:00:00")),
        ev("2", "Everton", "Brighton", "2024-08-17", Some("19:00:00")),
    ];
    let season = vec![
        ev("2", "Everton", "Brighton", "2024-08-17", Some("19:00:00")),
        ev("3", "Chelsea", "Arsenal", "2024-08-10", None),
    ];
    let upcoming = vec![ev("4", "Arsenal", "Everton", "2024-08-24", Some("11:30:00"))];
    Schedule::new(past, season, upcoming)
}

#[test]
fn team_filter_applies_to_both_lists() {
    let arsenal = schedule().for_team(Some("Arsenal"));
    let ids: Vec<&str> = arsenal.previous.iter().map(|e| e.id_event.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(arsenal.upcoming.len(), 1);

    assert_eq!(
        schedule().team_names(),
        vec!["Arsenal", "Brighton", "Chelsea", "Everton", "Wolves"]
    );
}

#[test]
fn evening_kickoffs_land_on_the_next_wib_day() {
    let s = schedule();
    let groups = group_by_date(&s.previous);
    let days: Vec<NaiveDate> = groups.iter().map(|(d, _)| *d).collect();
    // 19:00 UTC on the 17th is 02:00 WIB on the 18th
    assert_eq!(days, vec![day(2024, 8, 10), day(2024, 8, 17), day(2024, 8, 18)]);
}

#[test]
fn week_view_spans_sunday_to_saturday() {
    // 2024-08-18 (Sunday) → 18..24
    let ids: Vec<String> = schedule().week(day(2024, 8, 20)).into_iter().map(|e| e.id_event).collect();
    assert_eq!(ids, vec!["2", "4"]);
}
