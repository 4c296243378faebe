// src/views/standings.rs
//
// The free API key often has no table for the season. Rather than invent
// numbers the page says so and lists the league's teams.

use std::fmt;

use crate::api::{Team, TeamStanding};

#[derive(Clone, Debug, PartialEq)]
pub enum Standings {
    /// Rows sorted by rank.
    Table(Vec<TeamStanding>),
    Unavailable { teams: Vec<Team> },
}

impl Standings {
    pub fn new(mut rows: Vec<TeamStanding>, teams: Vec<Team>) -> Self {
        if rows.is_empty() {
            logf!("Standings: no table from the API, listing {} team(s)", teams.len());
            return Self::Unavailable { teams };
        }
        rows.sort_by_key(|r| r.int_rank);
        Self::Table(rows)
    }

    pub fn leader(&self) -> Option<&TeamStanding> {
        match self {
            Self::Table(rows) => rows.first(),
            Self::Unavailable { .. } => None,
        }
    }
}

/// wins / played to three places; "0.000" before a ball is kicked.
pub fn win_percentage(wins: u32, played: u32) -> String {
    if played == 0 {
        return s!("0.000");
    }
    format!("{:.3}", wins as f64 / played as f64)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormResult {
    Win,
    Draw,
    Loss,
}

impl FormResult {
    pub fn letter(self) -> char {
        match self {
            Self::Win => 'W',
            Self::Draw => 'D',
            Self::Loss => 'L',
        }
    }
}

/// "WWDLW" → markers, most recent first as the API orders them. Unknown letters are skipped.
pub fn form(raw: Option<&str>) -> Vec<FormResult> {
    raw.unwrap_or_default()
        .chars()
        .filter_map(|c| match c.to_ascii_uppercase() {
            'W' => Some(FormResult::Win),
            'D' => Some(FormResult::Draw),
            'L' => Some(FormResult::Loss),
            _ => None,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    ChampionsLeague,
    EuropaLeague,
    ConferenceLeague,
    Relegation,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ChampionsLeague => "Champions League",
            Self::EuropaLeague => "Europa League",
            Self::ConferenceLeague => "Conference League",
            Self::Relegation => "Relegation",
        })
    }
}

pub fn zone(rank: u32) -> Option<Zone> {
    match rank {
        1..=4 => Some(Zone::ChampionsLeague),
        5 => Some(Zone::EuropaLeague),
        6 => Some(Zone::ConferenceLeague),
        r if r >= 18 => Some(Zone::Relegation),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rank: u32, name: &str) -> TeamStanding {
        TeamStanding { int_rank: rank, str_team: s!(name), ..TeamStanding::default() }
    }

    #[test]
    fn rows_are_ranked_and_empty_is_unavailable() {
        let s = Standings::new(vec![row(2, "B"), row(1, "A")], vec![]);
        assert_eq!(s.leader().map(|r| r.str_team.as_str()), Some("A"));

        let teams = vec![Team { str_team: s!("Arsenal"), ..Team::default() }];
        match Standings::new(vec![], teams) {
            Standings::Unavailable { teams } => assert_eq!(teams.len(), 1),
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[test]
    fn win_pct_three_places() {
        assert_eq!(win_percentage(0, 0), "0.000");
        assert_eq!(win_percentage(2, 3), "0.667");
        assert_eq!(win_percentage(38, 38), "1.000");
    }

    #[test]
    fn form_letters() {
        assert_eq!(
            form(Some("WdL?W")),
            [FormResult::Win, FormResult::Draw, FormResult::Loss, FormResult::Win]
        );
        assert!(form(None).is_empty());
    }

    #[test]
    fn zones() {
        assert_eq!(zone(1), Some(Zone::ChampionsLeague));
        assert_eq!(zone(4), Some(Zone::ChampionsLeague));
        assert_eq!(zone(5), Some(Zone::EuropaLeague));
        assert_eq!(zone(6), Some(Zone::ConferenceLeague));
        assert_eq!(zone(7), None);
        assert_eq!(zone(17), None);
        assert_eq!(zone(20).map(|z| z.to_string()).as_deref(), Some("Relegation"));
        assert_eq!(zone(0), None);
    }
}
