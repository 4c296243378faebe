// src/views/schedule.rs
use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::NaiveDate;

use crate::api::Event;
use crate::time::{wib_date, week_bounds};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScheduleTab {
    #[default]
    Upcoming,
    Previous,
    Week,
}

/// Both fixture lists of the schedule page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schedule {
    pub previous: Vec<Event>,
    pub upcoming: Vec<Event>,
}

impl Schedule {
    /// Recent league results followed by the season archive. An event that
    /// shows up in both keeps its first (recent-results) copy.
    pub fn new(past: Vec<Event>, season: Vec<Event>, upcoming: Vec<Event>) -> Self {
        Self { previous: merge_unique(past, season), upcoming }
    }

    /// Sorted, de-duplicated home/away names across both lists.
    pub fn team_names(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .previous
            .iter()
            .chain(self.upcoming.iter())
            .flat_map(|e| [e.str_home_team.as_str(), e.str_away_team.as_str()])
            .filter(|n| !n.is_empty())
            .collect();
        names.into_iter().map(String::from).collect()
    }

    /// Copy narrowed to one team; `None` keeps everything.
    pub fn for_team(&self, team: Option<&str>) -> Schedule {
        match team {
            None => self.clone(),
            Some(t) => Schedule {
                previous: filter_by_team(&self.previous, t),
                upcoming: filter_by_team(&self.upcoming, t),
            },
        }
    }

    /// Events (from either list) inside the Sunday-start week of `anchor`.
    pub fn week(&self, anchor: NaiveDate) -> Vec<Event> {
        let all: Vec<Event> = self.previous.iter().chain(self.upcoming.iter()).cloned().collect();
        week_matches(&all, anchor)
    }
}

/// Concatenate, keeping the first event seen for each id.
pub fn merge_unique(first: Vec<Event>, second: Vec<Event>) -> Vec<Event> {
    let mut seen = HashSet::new();
    first
        .into_iter()
        .chain(second)
        .filter(|e| e.id_event.is_empty() || seen.insert(e.id_event.clone()))
        .collect()
}

pub fn filter_by_team(events: &[Event], team: &str) -> Vec<Event> {
    events.iter().filter(|e| e.involves(team)).cloned().collect()
}

/// Group by kickoff day in WIB, oldest day first. Events without a readable
/// date are dropped. Order inside a day follows the input.
pub fn group_by_date(events: &[Event]) -> Vec<(NaiveDate, Vec<&Event>)> {
    let mut groups: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for e in events {
        match wib_date(&e.date_event, e.str_time.as_deref()) {
            Some(day) => groups.entry(day).or_default().push(e),
            None => logd!("Schedule: skipping {} with date {:?}", e.id_event, e.date_event),
        }
    }
    groups.into_iter().collect()
}

pub fn week_matches(events: &[Event], anchor: NaiveDate) -> Vec<Event> {
    let (start, end) = week_bounds(anchor);
    events
        .iter()
        .filter(|e| {
            wib_date(&e.date_event, e.str_time.as_deref())
                .is_some_and(|d| d >= start && d <= end)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(id: &str, home: &str, away: &str, date: &str, time: &str) -> Event {
        Event {
            id_event: s!(id),
            str_home_team: s!(home),
            str_away_team: s!(away),
            date_event: s!(date),
            str_time: Some(s!(time)),
            ..Event::default()
        }
    }

    fn ids(v: &[Event]) -> Vec<&str> {
        v.iter().map(|e| e.id_event.as_str()).collect()
    }

    #[test]
    fn previous_is_past_then_season_without_repeats() {
        let past = vec![ev("3", "A", "B", "2024-08-20", "19:00:00"), ev("2", "C", "D", "2024-08-19", "19:00:00")];
        let season = vec![ev("1", "A", "C", "2024-08-16", "19:00:00"), ev("2", "C", "D", "2024-08-19", "20:00:00")];
        let s = Schedule::new(past, season, vec![]);
        assert_eq!(ids(&s.previous), ["3", "2", "1"]);
        assert_eq!(s.previous[1].str_time.as_deref(), Some("19:00:00"));
    }

    #[test]
    fn names_are_sorted_and_unique() {
        let s = Schedule::new(
            vec![ev("1", "Wolves", "Arsenal", "2024-08-17", "14:00:00")],
            vec![],
            vec![ev("2", "Arsenal", "Chelsea", "2024-08-24", "14:00:00")],
        );
        assert_eq!(s.team_names(), ["Arsenal", "Chelsea", "Wolves"]);
        let only = s.for_team(Some("Chelsea"));
        assert!(only.previous.is_empty());
        assert_eq!(ids(&only.upcoming), ["2"]);
    }

    #[test]
    fn grouping_uses_wib_day() {
        let events = vec![
            ev("late", "A", "B", "2024-08-16", "19:00:00"), // 02:00 WIB on the 17th
            ev("early", "C", "D", "2024-08-17", "11:30:00"),
            ev("prior", "E", "F", "2024-08-16", "12:00:00"),
        ];
        let groups = group_by_date(&events);
        let days: Vec<String> = groups.iter().map(|(d, _)| d.to_string()).collect();
        assert_eq!(days, ["2024-08-16", "2024-08-17"]);
        let on_17: Vec<&str> = groups[1].1.iter().map(|e| e.id_event.as_str()).collect();
        assert_eq!(on_17, ["late", "early"]);
    }

    #[test]
    fn week_filter_is_sunday_to_saturday() {
        let events = vec![
            ev("sat-before", "A", "B", "2024-08-10", "14:00:00"),
            ev("sun", "A", "B", "2024-08-11", "14:00:00"),
            ev("sat", "A", "B", "2024-08-17", "14:00:00"),
            // Saturday 19:00 UTC is Sunday in WIB
            ev("sat-night", "A", "B", "2024-08-17", "19:00:00"),
        ];
        let anchor = NaiveDate::from_ymd_opt(2024, 8, 14).unwrap();
        assert_eq!(ids(&week_matches(&events, anchor)), ["sun", "sat"]);
    }
}
