// src/views/matches.rs
use std::fmt;

use crate::api::{Event, EventStatistic, Present};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchStatus {
    Finished,
    Upcoming,
    Postponed,
    /// Whatever the API reported when it is none of the above.
    Other(String),
    Scheduled,
}

impl MatchStatus {
    pub fn of(event: &Event) -> Self {
        let status = event.str_status.present();
        if status == Some("Match Finished") || event.has_result() {
            return Self::Finished;
        }
        if status == Some("Not Started") {
            return Self::Upcoming;
        }
        if event.str_postponed.present() == Some("yes") {
            return Self::Postponed;
        }
        match status {
            Some(s) => Self::Other(s!(s)),
            None => Self::Scheduled,
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => f.write_str("Finished"),
            Self::Upcoming => f.write_str("Upcoming"),
            Self::Postponed => f.write_str("Postponed"),
            Self::Other(s) => f.write_str(s),
            Self::Scheduled => f.write_str("Scheduled"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    Home,
    Away,
    Draw,
}

/// Only when both scores parse.
pub fn winner(event: &Event) -> Option<Winner> {
    let (h, a) = (event.home_score()?, event.away_score()?);
    Some(match h.cmp(&a) {
        std::cmp::Ordering::Greater => Winner::Home,
        std::cmp::Ordering::Less => Winner::Away,
        std::cmp::Ordering::Equal => Winner::Draw,
    })
}

/// One statistic split into home/away shares of 100. An all-zero stat is 50/50.
#[derive(Clone, Debug, PartialEq)]
pub struct StatShare {
    pub name: String,
    pub home: u32,
    pub away: u32,
    pub home_pct: f32,
    pub away_pct: f32,
}

impl StatShare {
    pub fn total(&self) -> u32 { self.home.saturating_add(self.away) }
}

pub fn stat_share(stat: &EventStatistic) -> StatShare {
    let parse = |s: &str| s.trim().parse::<u32>().unwrap_or(0);
    let (home, away) = (parse(&stat.int_home), parse(&stat.int_away));
    let total = u64::from(home) + u64::from(away);
    let (home_pct, away_pct) = if total > 0 {
        (
            (f64::from(home) * 100.0 / total as f64) as f32,
            (f64::from(away) * 100.0 / total as f64) as f32,
        )
    } else {
        (50.0, 50.0)
    };
    StatShare { name: stat.str_stat.clone(), home, away, home_pct, away_pct }
}

/// Goal detail strings come as `"12':Saka;45':Havertz;"`. Split into entries.
pub fn split_details(details: Option<&str>) -> Vec<String> {
    details
        .unwrap_or_default()
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(h: Option<&str>, a: Option<&str>) -> Event {
        Event {
            int_home_score: h.map(String::from),
            int_away_score: a.map(String::from),
            ..Event::default()
        }
    }

    #[test]
    fn status_precedence() {
        assert_eq!(MatchStatus::of(&scored(Some("1"), Some("0"))), MatchStatus::Finished);

        let mut e = scored(None, None);
        e.str_status = Some(s!("Not Started"));
        e.str_postponed = Some(s!("yes"));
        assert_eq!(MatchStatus::of(&e), MatchStatus::Upcoming);

        e.str_status = None;
        assert_eq!(MatchStatus::of(&e), MatchStatus::Postponed);

        e.str_postponed = Some(s!("no"));
        e.str_status = Some(s!("1H"));
        assert_eq!(MatchStatus::of(&e).to_string(), "1H");

        e.str_status = Some(s!(""));
        assert_eq!(MatchStatus::of(&e), MatchStatus::Scheduled);
    }

    #[test]
    fn winner_needs_both_scores() {
        assert_eq!(winner(&scored(Some("2"), Some("1"))), Some(Winner::Home));
        assert_eq!(winner(&scored(Some("0"), Some("3"))), Some(Winner::Away));
        assert_eq!(winner(&scored(Some("1"), Some("1"))), Some(Winner::Draw));
        assert_eq!(winner(&scored(Some("1"), None)), None);
    }

    #[test]
    fn stat_share_handles_zero_and_garbage() {
        let mut st = EventStatistic { str_stat: s!("Shots"), int_home: s!("6"), int_away: s!("2"), ..EventStatistic::default() };
        let share = stat_share(&st);
        assert_eq!(share.total(), 8);
        assert_eq!(share.home_pct, 75.0);

        st.int_home = s!("n/a");
        st.int_away = s!("");
        let share = stat_share(&st);
        assert_eq!((share.home_pct, share.away_pct), (50.0, 50.0));
    }

    #[test]
    fn huge_counts_do_not_overflow() {
        let max = u32::MAX.to_string();
        let st = EventStatistic { int_home: max.clone(), int_away: max, ..EventStatistic::default() };
        let share = stat_share(&st);
        assert_eq!(share.total(), u32::MAX);
        assert_eq!(share.home_pct, 50.0);
    }

    #[test]
    fn details_split_on_semicolons() {
        assert_eq!(split_details(Some("12':Saka;45':Havertz;")), ["12':Saka", "45':Havertz"]);
        assert!(split_details(None).is_empty());
    }
}
