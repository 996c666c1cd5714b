use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use crate::model::stats::DeadlineStatus;
use crate::model::{NotificationKind, Priority};
use crate::view::Tone;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(24, 24, 32);
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 40);
pub const BG_CARD: Color32 = Color32::from_rgb(36, 38, 50);
pub const BG_FIELD: Color32 = Color32::from_rgb(20, 20, 28);
pub const BG_SELECTED: Color32 = Color32::from_rgba_premultiplied(80, 140, 220, 45);
pub const STATUS_BAR_BG: Color32 = Color32::from_rgb(22, 22, 30);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(50, 52, 64);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);

pub const ACCENT: Color32 = Color32::from_rgb(80, 140, 220);
pub const SUCCESS: Color32 = Color32::from_rgb(52, 168, 83);
pub const WARNING: Color32 = Color32::from_rgb(251, 160, 0);
pub const DESTRUCTIVE: Color32 = Color32::from_rgb(229, 57, 53);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const CARD_ROUNDING: f32 = 8.0;
pub const CARD_MARGIN: f32 = 12.0;
pub const STATUS_BAR_HEIGHT: f32 = 24.0;
pub const FORM_LABEL_WIDTH: f32 = 90.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_heading() -> FontId {
    FontId::proportional(20.0)
}

pub fn font_stat_value() -> FontId {
    FontId::proportional(24.0)
}

pub fn font_menu() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

// ── Semantic colors ──────────────────────────────────────────────────────────

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Primary => ACCENT,
        Tone::Success => SUCCESS,
        Tone::Warning => WARNING,
        Tone::Destructive => DESTRUCTIVE,
    }
}

pub fn priority_color(priority: Priority) -> Color32 {
    match priority {
        Priority::Low => SUCCESS,
        Priority::Medium => WARNING,
        Priority::High => DESTRUCTIVE,
    }
}

pub fn deadline_color(status: DeadlineStatus) -> Color32 {
    match status {
        DeadlineStatus::Overdue(_) => DESTRUCTIVE,
        DeadlineStatus::DueToday | DeadlineStatus::DueSoon(_) => WARNING,
        DeadlineStatus::Upcoming(_) => TEXT_SECONDARY,
    }
}

pub fn notification_color(kind: NotificationKind) -> Color32 {
    match kind {
        NotificationKind::Success => SUCCESS,
        NotificationKind::Error => DESTRUCTIVE,
    }
}

/// Frame used for dashboard and goal cards.
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(BG_CARD)
        .rounding(Rounding::same(CARD_ROUNDING))
        .inner_margin(egui::Margin::same(CARD_MARGIN))
        .stroke(Stroke::new(1.0, BORDER_SUBTLE))
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_FIELD;
    visuals.faint_bg_color = BG_DARK;

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(42, 44, 56);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(52, 54, 68);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = Color32::from_rgb(60, 62, 76);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    ctx.set_style(style);
}
