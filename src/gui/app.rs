// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    api::Api,
    config::{
        options::{AppOptions, Route},
        state::AppState,
    },
    favorites::{FavoritesStore, FileStorage},
    loader::{Loaded, PageData},
    time::today_wib,
};

use super::{
    actions,
    components::{favorites_panel, nav, status_bar, toasts::Toasts},
    pages::Page,
    router,
};

/// How often favorites are re-read from disk (CLI edits show up here).
const FAVORITES_POLL: Duration = Duration::from_secs(2);

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), Box<dyn Error>> {
    let api = Api::connect(app_options.api.clone())?;
    eframe::run_native(
        "Premier League Portal",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, AppState::new(app_options, today_wib()), api)))),
    )?;
    Ok(())
}

/// One finished page load coming back from the worker.
pub type LoadResult = (Route, Loaded<PageData>);

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub api: Arc<Api>,
    pub favorites: FavoritesStore<FileStorage>,

    // per-route page data; Arc so a page can draw while mutating App
    pub cache: HashMap<Route, Arc<PageData>>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub loading: Option<Route>,
    pub inbox: Option<Receiver<LoadResult>>,

    pub toasts: Toasts,
    last_favorites_poll: Instant,
}

impl App {
    pub fn new(ctx: &egui::Context, state: AppState, api: Api) -> Self {
        let status = Arc::new(Mutex::new(s!("Idle")));

        let mut favorites = FavoritesStore::open(FileStorage::in_dir(&state.options.store_dir));
        {
            let status = status.clone();
            let ctx = ctx.clone();
            favorites.subscribe(move |teams| {
                if let Ok(mut s) = status.lock() {
                    *s = format!("Favorites updated ({} team(s))", teams.len());
                }
                ctx.request_repaint();
            });
        }

        logf!(
            "Init: store={}, favorites={}, league={} season={}",
            state.options.store_dir.display(),
            favorites.len(),
            state.options.api.league_id,
            state.options.api.season
        );

        Self {
            state,
            api: Arc::new(api),
            favorites,
            cache: HashMap::new(),
            status,
            loading: None,
            inbox: None,
            toasts: Toasts::default(),
            last_favorites_poll: Instant::now(),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn route(&self) -> &Route { &self.state.gui.route }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_for(self.route().kind()) }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn is_loading(&self) -> bool { self.loading.is_some() }

    pub fn navigate(&mut self, to: Route) {
        if &to != self.route() {
            logf!("UI: {:?} → {:?}", self.route(), to);
        }
        self.state.gui.navigate(to);
    }

    /// Drop cached data for `route` so the next frame fetches it again.
    pub fn invalidate(&mut self, route: &Route) {
        self.cache.remove(route);
    }

    fn poll_favorites(&mut self) {
        if self.last_favorites_poll.elapsed() < FAVORITES_POLL { return; }
        self.last_favorites_poll = Instant::now();
        self.favorites.reload();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::load::receive(self);
        self.poll_favorites();

        let route = self.route().clone();
        if !self.cache.contains_key(&route) {
            actions::load::request(self, ctx, route.clone());
        }

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            nav::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status_bar::draw(ui, self);
        });

        egui::SidePanel::right("favorites")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                favorites_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            match self.cache.get(&route).cloned() {
                Some(data) => page.draw(ui, self, &data),
                None => {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.spinner();
                        ui.label(format!("Loading {}…", page.title()));
                    });
                }
            }
        });

        self.toasts.draw(ctx);

        // keep polling favorites and ageing toasts while idle
        ctx.request_repaint_after(if self.is_loading() { Duration::from_millis(100) } else { FAVORITES_POLL });
    }
}
