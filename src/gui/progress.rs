// src/gui/progress.rs
use std::sync::{ Arc, Mutex };

use eframe::egui;

use crate::progress::Progress;

/// Mirrors loader progress into the status bar from the worker thread.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        if let Ok(mut s) = self.status.lock() {
            *s = text;
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_done(&mut self, what: &str) {
        self.done += 1;
        self.set_status(format!("Fetched {} ({}/{})", what, self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status("Ready");
        }
    }
}
