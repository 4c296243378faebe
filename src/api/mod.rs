// src/api/mod.rs
//
// Fetch wrappers for TheSportsDB v1. Every call is a GET against
// `<base>/<key>/<endpoint>?<query>` returning one JSON envelope.
//
// The strict calls return `Result`; `or_default` turns a failure into the
// empty value the views expect (and logs it), so a page still renders when
// one of its endpoints is down.

pub mod de;
pub mod types;

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;

use crate::config::{consts::USER_AGENT, options::ApiOptions};
use crate::error::ApiError;

pub use types::{
    ApiResponse, Event, EventDetails, EventStatistic, FavoriteTeam, League, Present, Team,
    TeamStanding,
};

/// Raw GET seam. Production uses `HttpTransport`; tests plug in fixtures.
pub trait Transport: Send + Sync {
    /// Fetch `endpoint` (e.g. `lookupteam.php`) with query pairs; return the body.
    fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<String, ApiError>;
}

/// Blocking reqwest client with a request timeout.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    opts: ApiOptions,
}

impl HttpTransport {
    pub fn new(opts: &ApiOptions) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(opts.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| ApiError::Http { endpoint: opts.base_url.clone(), source })?;
        Ok(Self { client, opts: opts.clone() })
    }
}

impl Transport for HttpTransport {
    fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<String, ApiError> {
        let url = self.opts.endpoint_url(endpoint);
        let t = Instant::now();

        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(|source| ApiError::Http { endpoint: s!(endpoint), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), endpoint: s!(endpoint) });
        }

        let body = resp
            .text()
            .map_err(|source| ApiError::Http { endpoint: s!(endpoint), source })?;
        logd!("Net: GET {} {:?} → {} bytes in {:?}", endpoint, query, body.len(), t.elapsed());
        Ok(body)
    }
}

/// Decode one envelope. An empty body (the free tier sends those for
/// unknown ids) is an empty envelope, not an error.
pub fn parse<R: DeserializeOwned>(endpoint: &str, body: &str) -> Result<ApiResponse<R>, ApiError> {
    if body.trim().is_empty() {
        return Ok(ApiResponse::default());
    }
    serde_json::from_str(body).map_err(|source| ApiError::Json { endpoint: s!(endpoint), source })
}

/// Log the failure and fall back to the empty value.
pub fn or_default<T: Default>(what: &str, res: Result<T, ApiError>) -> T {
    res.unwrap_or_else(|e| {
        loge!("Api: {} failed: {}", what, e);
        T::default()
    })
}

pub struct Api<T: Transport = HttpTransport> {
    transport: T,
    opts: ApiOptions,
}

impl Api<HttpTransport> {
    pub fn connect(opts: ApiOptions) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(&opts)?;
        Ok(Self { transport, opts })
    }
}

impl<T: Transport> Api<T> {
    pub fn with_transport(transport: T, opts: ApiOptions) -> Self {
        Self { transport, opts }
    }


    fn fetch<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse<R>, ApiError> {
        let body = self.transport.get(endpoint, query)?;
        parse(endpoint, &body)
    }

    /// All teams in the configured league.
    pub fn teams(&self) -> Result<Vec<Team>, ApiError> {
        let r = self.fetch::<Team>("search_all_teams.php", &[("l", self.opts.league_name.as_str())])?;
        Ok(r.teams.unwrap_or_default())
    }

    pub fn team(&self, team_id: &str) -> Result<Option<Team>, ApiError> {
        let r = self.fetch::<Team>("lookupteam.php", &[("id", team_id)])?;
        Ok(r.teams.and_then(|v| v.into_iter().next()))
    }

    /// Most recent league results.
    pub fn league_past_events(&self) -> Result<Vec<Event>, ApiError> {
        let r = self.fetch::<Event>("eventspastleague.php", &[("id", self.opts.league_id.as_str())])?;
        Ok(r.events.unwrap_or_default())
    }

    /// Every fixture of the configured season.
    pub fn season_events(&self) -> Result<Vec<Event>, ApiError> {
        let r = self.fetch::<Event>(
            "eventsseason.php",
            &[("id", self.opts.league_id.as_str()), ("s", self.opts.season.as_str())],
        )?;
        Ok(r.events.unwrap_or_default())
    }

    /// Next scheduled league fixtures.
    pub fn league_next_events(&self) -> Result<Vec<Event>, ApiError> {
        let r = self.fetch::<Event>("eventsnextleague.php", &[("id", self.opts.league_id.as_str())])?;
        Ok(r.events.unwrap_or_default())
    }

    /// A team's last matches. This endpoint answers under `results`.
    pub fn team_last_events(&self, team_id: &str) -> Result<Vec<Event>, ApiError> {
        let r = self.fetch::<Event>("eventslast.php", &[("id", team_id)])?;
        Ok(r.results.unwrap_or_default())
    }

    pub fn team_next_events(&self, team_id: &str) -> Result<Vec<Event>, ApiError> {
        let r = self.fetch::<Event>("eventsnext.php", &[("id", team_id)])?;
        Ok(r.events.unwrap_or_default())
    }

    pub fn event(&self, event_id: &str) -> Result<Option<EventDetails>, ApiError> {
        let r = self.fetch::<EventDetails>("lookupevent.php", &[("id", event_id)])?;
        Ok(r.events.and_then(|v| v.into_iter().next()))
    }

    pub fn event_results(&self, event_id: &str) -> Result<Option<EventDetails>, ApiError> {
        let r = self.fetch::<EventDetails>("eventresults.php", &[("id", event_id)])?;
        Ok(r.events.and_then(|v| v.into_iter().next()))
    }

    pub fn event_stats(&self, event_id: &str) -> Result<Vec<EventStatistic>, ApiError> {
        let r = self.fetch::<EventStatistic>("lookupeventstats.php", &[("id", event_id)])?;
        Ok(r.eventstats.unwrap_or_default())
    }

    /// League table for the configured season.
    pub fn standings(&self) -> Result<Vec<TeamStanding>, ApiError> {
        let r = self.fetch::<TeamStanding>(
            "lookuptable.php",
            &[("l", self.opts.league_id.as_str()), ("s", self.opts.season.as_str())],
        )?;
        Ok(r.table.unwrap_or_default())
    }

    pub fn league(&self) -> Result<Option<League>, ApiError> {
        let r = self.fetch::<League>("lookupleague.php", &[("id", self.opts.league_id.as_str())])?;
        Ok(r.leagues.and_then(|v| v.into_iter().next()))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    /// Deliberately not `Default`: the envelope must not require it.
    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u32,
    }

    #[test]
    fn envelope_decodes_records_without_default() {
        let r: ApiResponse<Row> = parse("x.php", r#"{"teams":[{"id":7}]}"#).unwrap();
        assert_eq!(r.teams, Some(vec![Row { id: 7 }]));
        assert!(r.events.is_none() && r.table.is_none());

        let r: ApiResponse<Row> = parse("x.php", r#"{"events":null}"#).unwrap();
        assert!(r.events.is_none());
        assert!(parse::<Row>("x.php", "  ").unwrap().teams.is_none());
    }
}
