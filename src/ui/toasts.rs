use egui::{Context, RichText};

use crate::model::Notification;
use crate::ui::theme;

struct Toast {
    notification: Notification,
    expires_at: f64,
}

/// Transient notifications stacked in the bottom-right corner.
///
/// Purely cosmetic: expiry is driven by the egui clock and never touches goals.
pub struct Toasts {
    items: Vec<Toast>,
    lifetime: f64,
}

impl Toasts {
    pub fn new(lifetime_secs: f64) -> Self {
        Self {
            items: Vec::new(),
            lifetime: lifetime_secs,
        }
    }

    pub fn push(&mut self, notification: Notification, now: f64) {
        self.items.push(Toast {
            notification,
            expires_at: now + self.lifetime,
        });
    }

    /// Drop expired toasts.
    pub fn prune(&mut self, now: f64) {
        self.items.retain(|t| t.expires_at > now);
    }

    pub fn show(&mut self, ctx: &Context) {
        let now = ctx.input(|i| i.time);
        self.prune(now);
        if self.items.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -(theme::STATUS_BAR_HEIGHT + 12.0)])
            .show(ctx, |ui| {
                for toast in &self.items {
                    let color = theme::notification_color(toast.notification.kind);
                    theme::card_frame()
                        .stroke(egui::Stroke::new(1.0, color))
                        .show(ui, |ui| {
                            ui.set_width(280.0);
                            ui.label(RichText::new(&toast.notification.title).strong().color(color));
                            ui.label(
                                RichText::new(&toast.notification.message)
                                    .size(12.0)
                                    .color(theme::TEXT_SECONDARY),
                            );
                        });
                    ui.add_space(6.0);
                }
            });

        // Wake up again when the next toast should disappear.
        if let Some(next) = self.items.iter().map(|t| t.expires_at).reduce(f64::min) {
            let wait = (next - now).max(0.0);
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(wait));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_lifetime() {
        let mut toasts = Toasts::new(4.0);
        toasts.push(Notification::success("Goal Added", "ok"), 10.0);
        toasts.push(Notification::error("Error", "missing"), 12.0);

        toasts.prune(13.9);
        assert_eq!(toasts.items.len(), 2);
        toasts.prune(14.0);
        assert_eq!(toasts.items.len(), 1);
        toasts.prune(16.5);
        assert_eq!(toasts.items.len(), 0);
    }
}
