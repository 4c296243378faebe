// src/loader.rs
//
// One loader per page. Each runs its requests side by side on scoped
// threads, settles every result through `api::or_default`, and hands back
// the page data together with a line per failed request so the front end
// can tell the user.

use std::thread;

use serde::Serialize;

use crate::api::{self, Api, Event, EventDetails, EventStatistic, Team, Transport};
use crate::error::ApiError;
use crate::config::consts::TEAM_MATCHES;
use crate::config::options::Route;
use crate::progress::Progress;
use crate::views::{home::HomeData, schedule::Schedule, standings::Standings};

/// Page data plus what went wrong fetching it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Loaded<T> {
    pub data: T,
    pub errors: Vec<String>,
}

impl<T> Loaded<T> {
    pub fn is_clean(&self) -> bool { self.errors.is_empty() }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loaded<U> {
        Loaded { data: f(self.data), errors: self.errors }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TeamDetail {
    pub team: Option<Team>,
    pub last: Vec<Event>,
    pub next: Vec<Event>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MatchDetail {
    pub event: Option<EventDetails>,
    pub stats: Vec<EventStatistic>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageData {
    Home(HomeData),
    Teams(Vec<Team>),
    Team(TeamDetail),
    Schedule(Schedule),
    Match(MatchDetail),
    Standings(Standings),
    /// All teams; the favorites themselves come from the store.
    Favorites(Vec<Team>),
}

/// Collects failures and ticks progress while a page's requests settle.
struct Batch<'p> {
    progress: &'p mut dyn Progress,
    errors: Vec<String>,
}

impl<'p> Batch<'p> {
    fn begin(progress: &'p mut dyn Progress, page: &str, total: usize) -> Self {
        progress.begin(total);
        progress.log(&format!("Loading {page}…"));
        logd!("Load: {} ({} request(s))", page, total);
        Self { progress, errors: Vec::new() }
    }

    fn settle<T: Default>(&mut self, what: &str, joined: thread::Result<Result<T, ApiError>>) -> T {
        let res = joined.unwrap_or_else(|_| Err(ApiError::Other(format!("{what} worker panicked"))));
        if let Err(e) = &res {
            self.errors.push(format!("{what}: {e}"));
        }
        self.progress.item_done(what);
        api::or_default(what, res)
    }

    fn finish<T>(self, page: &str, data: T) -> Loaded<T> {
        if self.errors.is_empty() {
            logf!("Load: {} ok", page);
            self.progress.log(&format!("{page} loaded"));
        } else {
            logf!("Load: {} with {} failure(s)", page, self.errors.len());
            self.progress.log(&format!("{page} loaded with {} failure(s)", self.errors.len()));
        }
        self.progress.finish();
        Loaded { data, errors: self.errors }
    }
}

fn capped(mut v: Vec<Event>) -> Vec<Event> {
    v.truncate(TEAM_MATCHES);
    v
}

pub fn load_home<T: Transport>(api: &Api<T>, progress: &mut dyn Progress) -> Loaded<HomeData> {
    let mut batch = Batch::begin(progress, "Home", 5);
    let data = thread::scope(|s| {
        let teams = s.spawn(|| api.teams());
        let recent = s.spawn(|| api.league_past_events());
        let season = s.spawn(|| api.season_events());
        let upcoming = s.spawn(|| api.league_next_events());
        let league = s.spawn(|| api.league());
        HomeData {
            teams: batch.settle("teams", teams.join()),
            recent: batch.settle("recent matches", recent.join()),
            season: batch.settle("season matches", season.join()),
            upcoming: batch.settle("upcoming matches", upcoming.join()),
            league: batch.settle("league", league.join()),
        }
    });
    batch.finish("Home", data)
}

pub fn load_teams<T: Transport>(api: &Api<T>, progress: &mut dyn Progress) -> Loaded<Vec<Team>> {
    let mut batch = Batch::begin(progress, "Teams", 1);
    let teams = batch.settle("teams", Ok(api.teams()));
    batch.finish("Teams", teams)
}

/// Team record plus its last and next fixtures (at most ten each).
pub fn load_team<T: Transport>(api: &Api<T>, team_id: &str, progress: &mut dyn Progress) -> Loaded<TeamDetail> {
    let mut batch = Batch::begin(progress, "Team", 3);
    let data = thread::scope(|s| {
        let team = s.spawn(|| api.team(team_id));
        let last = s.spawn(|| api.team_last_events(team_id));
        let next = s.spawn(|| api.team_next_events(team_id));
        TeamDetail {
            team: batch.settle("team", team.join()),
            last: capped(batch.settle("last matches", last.join())),
            next: capped(batch.settle("next matches", next.join())),
        }
    });
    batch.finish("Team", data)
}

pub fn load_schedule<T: Transport>(api: &Api<T>, progress: &mut dyn Progress) -> Loaded<Schedule> {
    let mut batch = Batch::begin(progress, "Schedule", 3);
    let data = thread::scope(|s| {
        let past = s.spawn(|| api.league_past_events());
        let next = s.spawn(|| api.league_next_events());
        let season = s.spawn(|| api.season_events());
        let past = batch.settle("recent matches", past.join());
        let next = batch.settle("upcoming matches", next.join());
        let season = batch.settle("season matches", season.join());
        Schedule::new(past, season, next)
    });
    batch.finish("Schedule", data)
}

/// `lookupevent` first; `eventresults` when it has nothing for the id.
pub fn load_match<T: Transport>(api: &Api<T>, event_id: &str, progress: &mut dyn Progress) -> Loaded<MatchDetail> {
    let mut batch = Batch::begin(progress, "Match", 2);
    let data = thread::scope(|s| {
        let event = s.spawn(|| match api.event(event_id) {
            Ok(None) => {
                logd!("Load: lookupevent empty for {}, trying eventresults", event_id);
                api.event_results(event_id)
            }
            other => other,
        });
        let stats = s.spawn(|| api.event_stats(event_id));
        MatchDetail {
            event: batch.settle("match", event.join()),
            stats: batch.settle("statistics", stats.join()),
        }
    });
    batch.finish("Match", data)
}

pub fn load_standings<T: Transport>(api: &Api<T>, progress: &mut dyn Progress) -> Loaded<Standings> {
    let mut batch = Batch::begin(progress, "Standings", 2);
    let data = thread::scope(|s| {
        let teams = s.spawn(|| api.teams());
        let table = s.spawn(|| api.standings());
        let teams = batch.settle("teams", teams.join());
        let table = batch.settle("standings", table.join());
        Standings::new(table, teams)
    });
    batch.finish("Standings", data)
}

pub fn load_favorites<T: Transport>(api: &Api<T>, progress: &mut dyn Progress) -> Loaded<Vec<Team>> {
    let mut batch = Batch::begin(progress, "Favorites", 1);
    let teams = batch.settle("teams", Ok(api.teams()));
    batch.finish("Favorites", teams)
}

/// Whatever `route` shows.
pub fn load<T: Transport>(api: &Api<T>, route: &Route, progress: &mut dyn Progress) -> Loaded<PageData> {
    match route {
        Route::Home => load_home(api, progress).map(PageData::Home),
        Route::Teams => load_teams(api, progress).map(PageData::Teams),
        Route::Team(id) => load_team(api, id, progress).map(PageData::Team),
        Route::Schedule => load_schedule(api, progress).map(PageData::Schedule),
        Route::Match(id) => load_match(api, id, progress).map(PageData::Match),
        Route::Standings => load_standings(api, progress).map(PageData::Standings),
        Route::Favorites => load_favorites(api, progress).map(PageData::Favorites),
    }
}
