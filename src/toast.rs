use crate::theme;
use eframe::egui::{self, Align2, RichText};
use std::time::{Duration, Instant};

pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    expires_at: Instant,
}

/// Transient notification queue. Pruned with the injected clock, rendered as
/// an anchored overlay so toasts survive tab switches.
#[derive(Debug, Default)]
pub struct Toasts {
    queue: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, now: Instant, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastKind::Success, now, title.into(), body.into());
    }

    pub fn warning(&mut self, now: Instant, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastKind::Warning, now, title.into(), body.into());
    }

    fn push(&mut self, kind: ToastKind, now: Instant, title: String, description: String) {
        self.queue.push(Toast {
            title,
            description,
            kind,
            expires_at: now + TOAST_TTL,
        });
    }

    pub fn prune(&mut self, now: Instant) {
        self.queue.retain(|toast| toast.expires_at > now);
    }

    pub fn next_expiry(&self) -> Option<Instant> {
        self.queue.iter().map(|toast| toast.expires_at).min()
    }

    pub fn active(&self) -> &[Toast] {
        &self.queue
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn render(&self, ctx: &egui::Context) {
        if self.queue.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast_overlay"))
            .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.queue {
                    let (icon, accent) = match toast.kind {
                        ToastKind::Success => ("✅", theme::SUCCESS),
                        ToastKind::Warning => ("⚠", theme::DESTRUCTIVE),
                    };

                    egui::Frame::popup(&ctx.style()).show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.horizontal(|ui| {
                            ui.colored_label(accent, icon);
                            ui.label(RichText::new(&toast.title).strong());
                        });
                        ui.label(RichText::new(&toast.description).color(theme::MUTED));
                    });
                    ui.add_space(8.0);
                }
            });
    }
}
