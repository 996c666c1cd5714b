use egui::{RichText, Ui};
use egui_phosphor::regular as icons;

use crate::ui::theme;
use crate::view::{DashboardView, StatCard, Tone};

fn tone_icon(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => icons::TARGET,
        Tone::Success => icons::CHECK_CIRCLE,
        Tone::Warning => icons::CLOCK,
        Tone::Destructive => icons::WARNING_CIRCLE,
    }
}

fn show_stat_card(card: &StatCard, width: f32, ui: &mut Ui) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(width);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(card.title).size(12.0).color(theme::TEXT_SECONDARY));
                ui.label(RichText::new(&card.value).font(theme::font_stat_value()).strong());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(tone_icon(card.tone))
                        .size(26.0)
                        .color(theme::tone_color(card.tone)),
                );
            });
        });
    });
}

/// Render the dashboard tab: four stat cards and, when there are goals, the overview.
pub fn show_dashboard(view: &DashboardView, ui: &mut Ui) {
    let spacing = ui.spacing().item_spacing.x;
    let columns = view.cards.len().max(1) as f32;
    let card_width =
        ((ui.available_width() - spacing * (columns - 1.0)) / columns - 2.0 * theme::CARD_MARGIN).max(80.0);

    ui.horizontal(|ui| {
        for card in &view.cards {
            show_stat_card(card, card_width, ui);
        }
    });

    let Some(overview) = &view.overview else {
        return;
    };

    ui.add_space(12.0);
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Progress Overview").strong().size(15.0));
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Average progress").color(theme::TEXT_SECONDARY));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("{}%", overview.average_progress)).strong());
            });
        });
        ui.add(
            egui::ProgressBar::new(overview.average_progress as f32 / 100.0)
                .desired_width(ui.available_width())
                .fill(theme::ACCENT)
                .rounding(egui::Rounding::same(3.0)),
        );
        ui.horizontal(|ui| {
            ui.label(RichText::new(&overview.completed_label).size(12.0).color(theme::SUCCESS));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(&overview.remaining_label)
                        .size(12.0)
                        .color(theme::TEXT_SECONDARY),
                );
            });
        });
    });
}
