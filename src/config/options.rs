// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub api: ApiOptions,
    pub store_dir: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            api: ApiOptions::default(),
            store_dir: PathBuf::from(STORE_DIR),
        }
    }
}

impl AppOptions {
    /// Defaults, overridden by `PL_PORTAL_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();
        let get = |k: &str| get(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(v) = get(ENV_BASE_URL)    { opts.api.base_url = v; }
        if let Some(v) = get(ENV_API_KEY)     { opts.api.api_key = v; }
        if let Some(v) = get(ENV_LEAGUE_ID)   { opts.api.league_id = v; }
        if let Some(v) = get(ENV_LEAGUE_NAME) { opts.api.league_name = v; }
        if let Some(v) = get(ENV_SEASON)      { opts.api.season = v; }
        if let Some(v) = get(ENV_STORE_DIR)   { opts.store_dir = PathBuf::from(v); }
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    pub base_url: String,
    pub api_key: String,
    pub league_id: String,
    pub league_name: String,
    pub season: String,
    pub timeout_secs: u64,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            api_key: s!(API_KEY),
            league_id: s!(PREMIER_LEAGUE_ID),
            league_name: s!(LEAGUE_NAME),
            season: s!(SEASON),
            timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

impl ApiOptions {
    /// `<base>/<key>/<endpoint>`, tolerant of a trailing slash on the base.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/{}/{endpoint}", self.api_key)
    }
}

/// Top-level navigation entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Teams,
    TeamDetail,
    Schedule,
    MatchDetail,
    Standings,
    Favorites,
}

/// A concrete place in the app: a page plus its parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Teams,
    Team(String),
    Schedule,
    Match(String),
    Standings,
    Favorites,
}

impl Route {
    pub fn kind(&self) -> PageKind {
        match self {
            Route::Home      => PageKind::Home,
            Route::Teams     => PageKind::Teams,
            Route::Team(_)   => PageKind::TeamDetail,
            Route::Schedule  => PageKind::Schedule,
            Route::Match(_)  => PageKind::MatchDetail,
            Route::Standings => PageKind::Standings,
            Route::Favorites => PageKind::Favorites,
        }
    }
}

impl Default for Route {
    fn default() -> Self { Route::Home }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_replace_defaults() {
        let opts = AppOptions::from_lookup(|k| match k {
            ENV_BASE_URL => Some(s!("http://localhost:9000/api/")),
            ENV_SEASON => Some(s!("2025-2026")),
            ENV_API_KEY => Some(s!("   ")), // blank is ignored
            _ => None,
        });
        assert_eq!(opts.api.base_url, "http://localhost:9000/api/");
        assert_eq!(opts.api.season, "2025-2026");
        assert_eq!(opts.api.api_key, API_KEY);
        assert_eq!(
            opts.api.endpoint_url("lookupteam.php"),
            "http://localhost:9000/api/123/lookupteam.php"
        );
    }

    #[test]
    fn detail_routes_map_to_detail_pages() {
        assert_eq!(Route::Team(s!("133604")).kind(), PageKind::TeamDetail);
        assert_eq!(Route::Match(s!("1")).kind(), PageKind::MatchDetail);
        assert_eq!(Route::default().kind(), PageKind::Home);
    }
}
