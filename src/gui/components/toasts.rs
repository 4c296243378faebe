// src/gui/components/toasts.rs
//
// Short-lived notices stacked in the top-right corner.

use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, RichText};

const TOAST_TTL: Duration = Duration::from_secs(4);
const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    born: Instant,
}

#[derive(Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) {
        let text = text.into();
        logd!("Toast: {:?} {}", kind, text);
        self.items.push(Toast { kind, text, born: Instant::now() });
        if self.items.len() > MAX_TOASTS {
            self.items.remove(0);
        }
    }

    pub fn success(&mut self, text: impl Into<String>) { self.push(ToastKind::Success, text); }
    pub fn error(&mut self, text: impl Into<String>) { self.push(ToastKind::Error, text); }

    pub fn draw(&mut self, ctx: &egui::Context) {
        self.items.retain(|t| t.born.elapsed() < TOAST_TTL);
        if self.items.is_empty() { return; }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_TOP, [-12.0, 48.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for t in &self.items {
                    let (icon, color) = match t.kind {
                        ToastKind::Success => ("✔", Color32::from_rgb(0x3C, 0xB3, 0x71)),
                        ToastKind::Error   => ("✖", Color32::from_rgb(0xDC, 0x61, 0x49)),
                    };
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(icon).color(color).strong());
                            ui.label(&t.text);
                        });
                    });
                    ui.add_space(4.0);
                }
            });

        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
