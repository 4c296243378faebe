// src/views/home.rs
use chrono::NaiveDate;

use crate::api::{Event, League, Present, Team};
use crate::config::consts::{HOME_MATCHES, HOME_TEAMS};
use crate::time::wib_date;

/// Everything the landing page fetched, uncapped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeData {
    pub teams: Vec<Team>,
    pub recent: Vec<Event>,
    pub season: Vec<Event>,
    pub upcoming: Vec<Event>,
    pub league: Option<League>,
}

/// The capped sections plus the stat cards.
#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard<'a> {
    pub teams: &'a [Team],
    pub recent: &'a [Event],
    pub previous_season: &'a [Event],
    pub upcoming: &'a [Event],
    pub league: Option<&'a League>,
    pub stats: HomeStats,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HomeStats {
    pub total_teams: usize,
    pub active_season: String,
    pub favorites: usize,
    pub matches_today: usize,
}

/// Upcoming fixtures kicking off today in WIB.
pub fn matches_today(upcoming: &[Event], today: NaiveDate) -> usize {
    upcoming
        .iter()
        .filter(|e| wib_date(&e.date_event, e.str_time.as_deref()) == Some(today))
        .count()
}

fn head<T>(v: &[T], n: usize) -> &[T] {
    &v[..v.len().min(n)]
}

impl HomeData {
    /// `configured_season` is used when the league record has no current season.
    pub fn dashboard(&self, configured_season: &str, favorites: usize, today: NaiveDate) -> Dashboard<'_> {
        let active_season = self
            .league
            .as_ref()
            .and_then(|l| l.str_current_season.present())
            .unwrap_or(configured_season);

        Dashboard {
            teams: head(&self.teams, HOME_TEAMS),
            recent: head(&self.recent, HOME_MATCHES),
            previous_season: head(&self.season, HOME_MATCHES),
            upcoming: head(&self.upcoming, HOME_MATCHES),
            league: self.league.as_ref(),
            stats: HomeStats {
                total_teams: self.teams.len(),
                active_season: s!(active_season),
                favorites,
                matches_today: matches_today(&self.upcoming, today),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(date: &str, time: &str) -> Event {
        Event { date_event: s!(date), str_time: Some(s!(time)), ..Event::default() }
    }

    #[test]
    fn caps_and_stats() {
        let teams: Vec<Team> = (0..20).map(|i| Team { id_team: i.to_string(), ..Team::default() }).collect();
        let upcoming = vec![
            ev("2024-08-17", "11:30:00"),
            ev("2024-08-16", "19:00:00"), // 02:00 WIB on the 17th
            ev("2024-08-17", "19:00:00"), // already the 18th in WIB
        ];
        let data = HomeData { teams, upcoming, ..HomeData::default() };
        let today = NaiveDate::from_ymd_opt(2024, 8, 17).unwrap();
        let dash = data.dashboard("2024-2025", 3, today);
        assert_eq!(dash.teams.len(), 9);
        assert_eq!(dash.upcoming.len(), 3);
        assert!(dash.recent.is_empty());
        assert_eq!(
            dash.stats,
            HomeStats { total_teams: 20, active_season: s!("2024-2025"), favorites: 3, matches_today: 2 }
        );
    }

    #[test]
    fn league_season_wins_over_config() {
        let league = League { str_current_season: Some(s!("2025-2026")), ..League::default() };
        let data = HomeData { league: Some(league), ..HomeData::default() };
        let dash = data.dashboard("2024-2025", 0, NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
        assert_eq!(dash.stats.active_season, "2025-2026");
    }
}
