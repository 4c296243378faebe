// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.thesportsdb.com/api/v1/json";
pub const API_KEY: &str = "123"; // public test key
pub const USER_AGENT: &str = concat!("pl_portal/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// League
pub const PREMIER_LEAGUE_ID: &str = "4328";
pub const LEAGUE_NAME: &str = "English_Premier_League";
pub const SEASON: &str = "2024-2025";

// Local store
pub const STORE_DIR: &str = ".store";
pub const STORAGE_FILE: &str = "storage.json";
pub const LOG_FILE: &str = "debug.log";
pub const FAVORITES_KEY: &str = "premier_league_favorite_teams";

// Display
pub const WIB_OFFSET_HOURS: i32 = 7; // Asia/Jakarta, no DST
pub const HOME_TEAMS: usize = 9;
pub const HOME_MATCHES: usize = 6;
pub const TEAM_MATCHES: usize = 10;
pub const TEAM_MATCHES_SHOWN: usize = 5;

// Env overrides
pub const ENV_BASE_URL: &str = "PL_PORTAL_BASE_URL";
pub const ENV_API_KEY: &str = "PL_PORTAL_API_KEY";
pub const ENV_LEAGUE_ID: &str = "PL_PORTAL_LEAGUE_ID";
pub const ENV_LEAGUE_NAME: &str = "PL_PORTAL_LEAGUE_NAME";
pub const ENV_SEASON: &str = "PL_PORTAL_SEASON";
pub const ENV_STORE_DIR: &str = "PL_PORTAL_STORE_DIR";
