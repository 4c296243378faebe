// src/gui/actions/load.rs
use std::{sync::mpsc, sync::Arc, thread};

use eframe::egui;

use crate::{
    config::options::Route,
    gui::{app::App, progress::GuiProgress},
    loader,
};

/// Start loading `route` on a worker unless something is already in flight.
/// The next frame after the current load lands asks again.
pub fn request(app: &mut App, ctx: &egui::Context, route: Route) {
    if app.is_loading() { return; }

    logf!("Load: begin {:?}", route);
    let (tx, rx) = mpsc::channel();
    let api = Arc::clone(&app.api);
    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone());
    let ctx2 = ctx.clone();
    let r = route.clone();

    // → This is where the fetch happens ←
    let spawned = thread::Builder::new()
        .name(s!("page-loader"))
        .spawn(move || {
            let loaded = loader::load(&*api, &r, &mut prog);
            let _ = tx.send((r, loaded));
            ctx2.request_repaint();
        });

    match spawned {
        Ok(_) => {
            app.loading = Some(route);
            app.inbox = Some(rx);
        }
        Err(e) => {
            loge!("Load: could not start worker: {}", e);
            app.toasts.error(format!("Could not start loading: {e}"));
        }
    }
}

/// Pick up a finished load, cache it, and raise a toast per failed request.
pub fn receive(app: &mut App) {
    let Some(rx) = app.inbox.as_ref() else { return };
    let (route, loaded) = match rx.try_recv() {
        Ok(msg) => msg,
        Err(mpsc::TryRecvError::Empty) => return,
        Err(mpsc::TryRecvError::Disconnected) => {
            loge!("Load: worker for {:?} went away", app.loading);
            app.toasts.error("Loading stopped unexpectedly");
            app.loading = None;
            app.inbox = None;
            return;
        }
    };
    app.loading = None;
    app.inbox = None;

    for err in &loaded.errors {
        app.toasts.error(format!("Failed to load {err}"));
    }
    if loaded.is_clean() {
        app.status("Ready");
    }
    logd!("Load: cached {:?}", route);
    app.cache.insert(route, Arc::new(loaded.data));
}

/// Forget the current page's data and fetch it again.
pub fn refresh(app: &mut App) {
    let route = app.route().clone();
    app.invalidate(&route);
    app.status(format!("Refreshing {}…", app.current_page().title()));
}
