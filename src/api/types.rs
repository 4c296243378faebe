// src/api/types.rs
//
// Record shapes returned by TheSportsDB v1. Field names follow the API
// (`idTeam`, `strTeam`, ...) so stored favorites stay interchangeable with
// what the API sends. Only the fields the views use, plus a few obvious
// neighbours, are modelled; unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de;

/// The API uses `null` and `""` interchangeably. Treat both as absent.
pub trait Present {
    fn present(&self) -> Option<&str>;
}

impl Present for Option<String> {
    fn present(&self) -> Option<&str> {
        self.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Envelope shared by every endpoint. Exactly one array is normally set;
/// a missing or `null` array means "no data".
#[derive(Clone, Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub teams: Option<Vec<T>>,
    pub events: Option<Vec<T>>,
    pub leagues: Option<Vec<T>>,
    pub table: Option<Vec<T>>,
    pub event: Option<Vec<T>>,
    pub results: Option<Vec<T>>,
    pub eventstats: Option<Vec<T>>,
    pub player: Option<Vec<T>>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            teams: None,
            events: None,
            leagues: None,
            table: None,
            event: None,
            results: None,
            eventstats: None,
            player: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, deserialize_with = "de::text")]
    pub id_team: String,
    #[serde(default, deserialize_with = "de::text")]
    pub str_team: String,
    pub str_team_short: Option<String>,
    pub str_alternate: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub int_formed_year: Option<String>,
    pub str_sport: Option<String>,
    pub str_league: Option<String>,
    pub str_manager: Option<String>,
    pub str_stadium: Option<String>,
    pub str_stadium_location: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub int_stadium_capacity: Option<String>,
    pub str_country: Option<String>,
    pub str_gender: Option<String>,
    pub str_keywords: Option<String>,
    pub str_website: Option<String>,
    pub str_facebook: Option<String>,
    pub str_twitter: Option<String>,
    pub str_instagram: Option<String>,
    pub str_youtube: Option<String>,
    #[serde(rename = "strRSS")]
    pub str_rss: Option<String>,
    #[serde(rename = "strDescriptionEN")]
    pub str_description_en: Option<String>,
    pub str_badge: Option<String>,
    pub str_logo: Option<String>,
    pub str_banner: Option<String>,
    pub str_team_banner: Option<String>,
    pub str_team_badge: Option<String>,
    pub str_equipment: Option<String>,
}

impl Team {
    /// Founding year as a number; unknown sorts as 0.
    pub fn formed_year(&self) -> i32 {
        self.int_formed_year
            .present()
            .and_then(|y| y.parse().ok())
            .unwrap_or(0)
    }

    /// Best badge URL the record offers.
    pub fn badge(&self) -> Option<&str> {
        self.str_badge.present().or_else(|| self.str_team_badge.present())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, deserialize_with = "de::text")]
    pub id_event: String,
    #[serde(default, deserialize_with = "de::text")]
    pub str_event: String,
    pub str_event_alternate: Option<String>,
    pub str_sport: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub id_league: String,
    #[serde(default, deserialize_with = "de::text")]
    pub str_league: String,
    #[serde(default, deserialize_with = "de::text")]
    pub str_season: String,
    #[serde(rename = "strDescriptionEN")]
    pub str_description_en: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub str_home_team: String,
    #[serde(default, deserialize_with = "de::text")]
    pub str_away_team: String,
    #[serde(default, deserialize_with = "de::text")]
    pub id_home_team: String,
    #[serde(default, deserialize_with = "de::text")]
    pub id_away_team: String,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub int_home_score: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub int_away_score: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub int_round: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub int_spectators: Option<String>,
    pub str_home_goal_details: Option<String>,
    pub str_away_goal_details: Option<String>,
    pub str_home_red_cards: Option<String>,
    pub str_away_red_cards: Option<String>,
    pub str_home_yellow_cards: Option<String>,
    pub str_away_yellow_cards: Option<String>,
    pub str_home_formation: Option<String>,
    pub str_away_formation: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub date_event: String,
    pub date_event_local: Option<String>,
    pub str_time: Option<String>,
    pub str_time_local: Option<String>,
    pub str_timestamp: Option<String>,
    pub str_result: Option<String>,
    pub str_venue: Option<String>,
    pub str_city: Option<String>,
    pub str_country: Option<String>,
    pub str_home_team_badge: Option<String>,
    pub str_away_team_badge: Option<String>,
    pub str_badge: Option<String>,
    pub str_logo: Option<String>,
    pub str_poster: Option<String>,
    pub str_thumb: Option<String>,
    pub str_banner: Option<String>,
    pub str_video: Option<String>,
    pub str_status: Option<String>,
    pub str_postponed: Option<String>,
}

/// `lookupevent` / `eventresults` return the same record as the fixture lists.
pub type EventDetails = Event;

impl Event {
    pub fn home_score(&self) -> Option<u32> {
        self.int_home_score.present().and_then(|s| s.parse().ok())
    }

    pub fn away_score(&self) -> Option<u32> {
        self.int_away_score.present().and_then(|s| s.parse().ok())
    }

    /// Both scores are known.
    pub fn has_result(&self) -> bool {
        self.home_score().is_some() && self.away_score().is_some()
    }

    /// Home or away side is `team` (exact name match, as the API spells it).
    pub fn involves(&self, team: &str) -> bool {
        self.str_home_team == team || self.str_away_team == team
    }

    /// "2 - 1" when both scores are known, otherwise "vs".
    pub fn score_line(&self) -> String {
        match (self.home_score(), self.away_score()) {
            (Some(h), Some(a)) => format!("{h} - {a}"),
            _ => s!("vs"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStatistic {
    #[serde(default, deserialize_with = "de::text")]
    pub id_statistic: String,
    #[serde(default, deserialize_with = "de::text")]
    pub id_event: String,
    pub id_api_football: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub str_event: String,
    #[serde(default, deserialize_with = "de::text")]
    pub str_stat: String,
    #[serde(default, deserialize_with = "de::text")]
    pub int_home: String,
    #[serde(default, deserialize_with = "de::text")]
    pub int_away: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    #[serde(default, deserialize_with = "de::text")]
    pub id_league: String,
    #[serde(default, deserialize_with = "de::text")]
    pub str_league: String,
    pub str_sport: Option<String>,
    pub str_league_alternate: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub int_division: Option<String>,
    pub str_current_season: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub int_formed_year: Option<String>,
    pub date_first_event: Option<String>,
    pub str_gender: Option<String>,
    pub str_country: Option<String>,
    pub str_website: Option<String>,
    pub str_facebook: Option<String>,
    pub str_twitter: Option<String>,
    pub str_instagram: Option<String>,
    pub str_youtube: Option<String>,
    #[serde(rename = "strDescriptionEN")]
    pub str_description_en: Option<String>,
    pub str_tv_rights: Option<String>,
    pub str_badge: Option<String>,
    pub str_logo: Option<String>,
    pub str_banner: Option<String>,
    pub str_trophy: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub id_standing: Option<String>,
    #[serde(default, deserialize_with = "de::num")]
    pub int_rank: u32,
    #[serde(default, deserialize_with = "de::text")]
    pub id_team: String,
    #[serde(default, deserialize_with = "de::text")]
    pub str_team: String,
    pub str_badge: Option<String>,
    pub str_logo: Option<String>,
    pub str_team_badge: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub id_league: String,
    #[serde(default, deserialize_with = "de::text")]
    pub str_league: String,
    #[serde(default, deserialize_with = "de::text")]
    pub str_season: String,
    pub str_form: Option<String>,
    pub str_description: Option<String>,
    #[serde(default, deserialize_with = "de::num")]
    pub int_played: u32,
    #[serde(default, deserialize_with = "de::num")]
    pub int_win: u32,
    #[serde(default, deserialize_with = "de::num")]
    pub int_loss: u32,
    #[serde(default, deserialize_with = "de::opt_num")]
    pub int_draw: Option<u32>,
    #[serde(default, deserialize_with = "de::opt_num")]
    pub int_goals_for: Option<u32>,
    #[serde(default, deserialize_with = "de::opt_num")]
    pub int_goals_against: Option<u32>,
    #[serde(default, deserialize_with = "de::opt_num")]
    pub int_goal_difference: Option<i32>,
    #[serde(default, deserialize_with = "de::num")]
    pub int_points: u32,
    pub date_updated: Option<String>,
}

/// A favorite as stored locally: id, display metadata, and when it was added.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteTeam {
    pub id_team: String,
    pub str_team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub str_team_badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub str_badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub str_logo: Option<String>,
    pub date_added: DateTime<Utc>,
}

impl FavoriteTeam {
    pub fn from_team(team: &Team, now: DateTime<Utc>) -> Self {
        Self {
            id_team: team.id_team.clone(),
            str_team: team.str_team.clone(),
            str_team_badge: team.str_badge.clone(),
            str_badge: None,
            str_logo: None,
            date_added: now,
        }
    }

    pub fn badge(&self) -> Option<&str> {
        self.str_team_badge
            .present()
            .or_else(|| self.str_badge.present())
            .or_else(|| self.str_logo.present())
    }
}
