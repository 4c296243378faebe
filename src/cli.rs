// src/cli.rs
//
// Command-line front end. Same loaders, views and favorites store as the
// GUI; output goes through `table` so every listing can be a grid, CSV,
// TSV or JSON.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{bail, eyre, Result, WrapErr};
use log::LevelFilter;

use crate::{
    api::{Api, Present, Team},
    config::options::AppOptions,
    favorites::{FavoritesStore, FileStorage},
    loader::{self, Loaded},
    logging,
    progress::Progress,
    table::{self, OutputFormat, TableData},
    time::{date_display, to_wib_display, today_wib, week_bounds},
    views::{
        matches::{stat_share, MatchStatus},
        standings::Standings,
        team::{format_capacity, social_links},
        teams::{filter_and_sort, TeamFilter, TeamSort, TeamsQuery},
    },
};

#[derive(Parser, Debug)]
#[command(name = "pl_portal", version, about = "Premier League teams, fixtures and standings from TheSportsDB")]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,

    /// API base URL (without the key)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// API key
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Directory holding favorites and the debug log
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Print fetch progress and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Csv,
    Tsv,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Table => OutputFormat::Table,
            Format::Csv => OutputFormat::Csv,
            Format::Tsv => OutputFormat::Tsv,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Name,
    Founded,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List league teams
    Teams {
        /// Case-insensitive match on name, short name or alternate name
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_enum, default_value_t = SortArg::Name)]
        sort: SortArg,
        /// Only favorite teams
        #[arg(long)]
        favorites: bool,
    },
    /// One team with its recent and upcoming matches
    Team { id: String },
    /// Fixtures and results (times in WIB)
    Schedule(ScheduleArgs),
    /// One match with statistics
    Match { id: String },
    /// League table
    Standings,
    /// League details
    League,
    /// Manage favorite teams
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },
}

#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Only matches involving this team (exact name, e.g. "Arsenal")
    #[arg(long)]
    pub team: Option<String>,
    /// Sunday-start week containing DATE (YYYY-MM-DD, or "today")
    #[arg(long, value_name = "DATE", conflicts_with_all = ["upcoming", "previous"])]
    pub week: Option<String>,
    #[arg(long, conflicts_with = "previous")]
    pub upcoming: bool,
    #[arg(long)]
    pub previous: bool,
}

#[derive(Subcommand, Debug)]
pub enum FavoritesCommand {
    List,
    Add { id: String },
    Remove { id: String },
    Clear,
}

/// Progress on stderr, only with --verbose.
struct StderrProgress {
    verbose: bool,
}

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        if self.verbose { eprintln!("{msg}"); }
    }
    fn item_done(&mut self, what: &str) {
        if self.verbose { eprintln!("  fetched {what}"); }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut opts = AppOptions::from_env();
    if let Some(v) = &cli.base_url { opts.api.base_url = v.clone(); }
    if let Some(v) = &cli.api_key { opts.api.api_key = v.clone(); }
    if let Some(v) = &cli.store_dir { opts.store_dir = v.clone(); }

    logging::init(&opts.store_dir, if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info });
    logf!("CLI: {:?}", cli.command);

    let ctx = Ctx {
        api: Api::connect(opts.api.clone()).wrap_err("could not create HTTP client")?,
        opts,
        format: cli.format.into(),
        progress: StderrProgress { verbose: cli.verbose },
    };
    ctx.dispatch(cli.command)
}

struct Ctx {
    api: Api,
    opts: AppOptions,
    format: OutputFormat,
    progress: StderrProgress,
}

impl Ctx {
    fn dispatch(mut self, command: Command) -> Result<()> {
        match command {
            Command::Teams { search, sort, favorites } => self.teams(search, sort, favorites),
            Command::Team { id } => self.team(&id),
            Command::Schedule(args) => self.schedule(args),
            Command::Match { id } => self.match_detail(&id),
            Command::Standings => self.standings(),
            Command::League => self.league(),
            Command::Favorites { command } => self.favorites(command),
        }
    }

    fn store(&self) -> FavoritesStore<FileStorage> {
        FavoritesStore::open(FileStorage::in_dir(&self.opts.store_dir))
    }

    fn print(&self, t: &TableData) -> Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(table::render(t, self.format).as_bytes())?;
        Ok(())
    }

    /// Several titled tables. JSON output should use `print_json` instead.
    fn print_sections(&self, sections: &[(&str, TableData)]) -> Result<()> {
        let mut out = io::stdout().lock();
        for (i, (title, t)) in sections.iter().enumerate() {
            if i > 0 { writeln!(out)?; }
            if self.format == OutputFormat::Table {
                writeln!(out, "== {title} ==")?;
            }
            if t.is_empty() && self.format == OutputFormat::Table {
                writeln!(out, "(none)")?;
                continue;
            }
            out.write_all(table::render(t, self.format).as_bytes())?;
        }
        Ok(())
    }

    fn print_json<T: serde::Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    fn teams(&mut self, search: Option<String>, sort: SortArg, favorites: bool) -> Result<()> {
        let teams = settle(loader::load_teams(&self.api, &mut self.progress));
        let store = self.store();
        let query = TeamsQuery {
            search: search.unwrap_or_default(),
            sort: match sort { SortArg::Name => TeamSort::Name, SortArg::Founded => TeamSort::Founded },
            filter: if favorites { TeamFilter::Favorites } else { TeamFilter::All },
        };
        let shown = filter_and_sort(&teams, &query, store.teams());
        self.print(&table::teams_table(shown))
    }

    fn team(&mut self, id: &str) -> Result<()> {
        let detail = settle(loader::load_team(&self.api, id, &mut self.progress));
        let Some(team) = detail.team.as_ref() else {
            bail!("no team with id {id}");
        };
        if self.format == OutputFormat::Json {
            return self.print_json(&detail);
        }

        let store = self.store();
        let mut fields = vec![
            ("Name", team.str_team.clone()),
            ("Short", s!(team.str_team_short.present().unwrap_or(""))),
            ("Founded", s!(team.int_formed_year.present().unwrap_or(""))),
            ("Stadium", s!(team.str_stadium.present().unwrap_or(""))),
            ("Location", s!(team.str_stadium_location.present().unwrap_or(""))),
            ("Capacity", format_capacity(team.int_stadium_capacity.present()).unwrap_or_default()),
            ("Manager", s!(team.str_manager.present().unwrap_or(""))),
            ("Favorite", s!(if store.is_favorite(&team.id_team) { "yes" } else { "no" })),
        ];
        let links = social_links(team);
        fields.extend(links.iter().map(|l| (l.name, l.url.clone())));

        self.print_sections(&[
            ("Team", table::fields_table(&fields)),
            ("Recent matches", table::events_table(&detail.last)),
            ("Upcoming matches", table::events_table(&detail.next)),
        ])
    }

    fn schedule(&mut self, args: ScheduleArgs) -> Result<()> {
        let schedule = settle(loader::load_schedule(&self.api, &mut self.progress));
        let view = schedule.for_team(args.team.as_deref());

        let events = match args.week.as_deref() {
            Some(w) => {
                let anchor = parse_week(w)?;
                let (start, end) = week_bounds(anchor);
                if self.format == OutputFormat::Table {
                    println!("Week {} – {}", date_display(start), date_display(end));
                }
                view.week(anchor)
            }
            None if args.previous => view.previous,
            None => view.upcoming,
        };
        self.print(&table::events_table(&events))
    }

    fn match_detail(&mut self, id: &str) -> Result<()> {
        let detail = settle(loader::load_match(&self.api, id, &mut self.progress));
        let Some(ev) = detail.event.as_ref() else {
            bail!("no match with id {id}");
        };
        if self.format == OutputFormat::Json {
            return self.print_json(&detail);
        }

        let fields = vec![
            ("Match", format!("{} {} {}", ev.str_home_team, ev.score_line(), ev.str_away_team)),
            ("Status", MatchStatus::of(ev).to_string()),
            ("Kickoff (WIB)", to_wib_display(&ev.date_event, ev.str_time.as_deref())),
            ("League", ev.str_league.clone()),
            ("Season", ev.str_season.clone()),
            ("Round", s!(ev.int_round.present().unwrap_or(""))),
            ("Venue", s!(ev.str_venue.present().unwrap_or(""))),
            ("Home goals", s!(ev.str_home_goal_details.present().unwrap_or(""))),
            ("Away goals", s!(ev.str_away_goal_details.present().unwrap_or(""))),
        ];

        let mut stats = TableData::new(&["Stat", "Home", "Away", "Home %"]);
        for st in &detail.stats {
            let share = stat_share(st);
            stats.push(&st.id_statistic, vec![
                share.name.clone(),
                share.home.to_string(),
                share.away.to_string(),
                format!("{:.0}", share.home_pct),
            ]);
        }

        self.print_sections(&[("Match", table::fields_table(&fields)), ("Statistics", stats)])
    }

    fn standings(&mut self) -> Result<()> {
        match settle(loader::load_standings(&self.api, &mut self.progress)) {
            Standings::Table(rows) => self.print(&table::standings_table(&rows)),
            Standings::Unavailable { teams } => {
                eprintln!("Standings data is not available for {}; listing teams instead.", self.opts.api.season);
                self.print(&table::teams_table(&teams))
            }
        }
    }

    fn league(&mut self) -> Result<()> {
        let league = self
            .api
            .league()
            .wrap_err("could not fetch league")?
            .ok_or_else(|| eyre!("no league with id {}", self.opts.api.league_id))?;
        if self.format == OutputFormat::Json {
            return self.print_json(&league);
        }
        let fields = vec![
            ("Name", league.str_league.clone()),
            ("Country", s!(league.str_country.present().unwrap_or(""))),
            ("Founded", s!(league.int_formed_year.present().unwrap_or(""))),
            ("Current season", s!(league.str_current_season.present().unwrap_or(""))),
            ("Website", s!(league.str_website.present().unwrap_or(""))),
        ];
        self.print(&table::fields_table(&fields))
    }

    fn favorites(&mut self, command: FavoritesCommand) -> Result<()> {
        let mut store = self.store();
        match command {
            FavoritesCommand::List => self.print(&table::favorites_table(store.teams())),
            FavoritesCommand::Add { id } => {
                let team: Team = self
                    .api
                    .team(&id)
                    .wrap_err_with(|| format!("could not look up team {id}"))?
                    .ok_or_else(|| eyre!("no team with id {id}"))?;
                if store.add(&team)? {
                    println!("Added {} to favorites", team.str_team);
                } else {
                    println!("{} is already a favorite", team.str_team);
                }
                Ok(())
            }
            FavoritesCommand::Remove { id } => {
                if store.remove(&id)? {
                    println!("Removed {id} from favorites");
                } else {
                    println!("{id} is not a favorite");
                }
                Ok(())
            }
            FavoritesCommand::Clear => {
                let n = store.len();
                store.clear()?;
                println!("Cleared {n} favorite(s)");
                Ok(())
            }
        }
    }
}

/// Report failed requests on stderr and hand back the data.
fn settle<T>(loaded: Loaded<T>) -> T {
    for e in &loaded.errors {
        eprintln!("warning: failed to load {e}");
    }
    loaded.data
}

fn parse_week(raw: &str) -> Result<NaiveDate> {
    if raw.eq_ignore_ascii_case("today") {
        return Ok(today_wib());
    }
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").wrap_err_with(|| format!("invalid --week date {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_favorites_and_global_format() {
        let cli = Cli::try_parse_from(["pl_portal", "favorites", "add", "133604", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Format::Json);
        assert!(matches!(cli.command, Command::Favorites { command: FavoritesCommand::Add { ref id } } if id == "133604"));
    }

    #[test]
    fn upcoming_and_previous_conflict() {
        assert!(Cli::try_parse_from(["pl_portal", "schedule", "--upcoming", "--previous"]).is_err());
        let cli = Cli::try_parse_from(["pl_portal", "schedule", "--team", "Arsenal", "--week", "2024-08-17"]).unwrap();
        match cli.command {
            Command::Schedule(a) => {
                assert_eq!(a.team.as_deref(), Some("Arsenal"));
                assert_eq!(parse_week(a.week.as_deref().unwrap()).unwrap(), NaiveDate::from_ymd_opt(2024, 8, 17).unwrap());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn week_excludes_list_selectors() {
        assert!(Cli::try_parse_from(["pl_portal", "schedule", "--week", "today", "--upcoming"]).is_err());
        assert!(Cli::try_parse_from(["pl_portal", "schedule", "--previous", "--week", "2024-08-17"]).is_err());
        assert!(Cli::try_parse_from(["pl_portal", "schedule", "--week", "today"]).is_ok());
    }

    #[test]
    fn bad_week_is_an_error() {
        assert!(parse_week("next tuesday").is_err());
    }
}
