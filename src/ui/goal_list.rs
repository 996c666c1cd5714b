use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;

use crate::ui::theme;
use crate::view::{GoalCard, GoalListView};

/// Actions a goal card can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalListAction {
    None,
    Toggle(String),
    Edit(String),
    Delete(String),
    Progress(String, u8),
    AddFirst,
}

/// Render a heading, a count, and one card per goal (or an empty state).
pub fn show_goal_list(
    heading: &str,
    empty_hint: &str,
    view: &GoalListView,
    ui: &mut Ui,
) -> GoalListAction {
    let mut action = GoalListAction::None;

    ui.horizontal(|ui| {
        ui.label(RichText::new(heading).strong().size(16.0));
        ui.label(RichText::new(&view.count_label).size(11.0).color(theme::TEXT_DIM));
    });
    ui.add_space(6.0);

    if view.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new(icons::BOOK_OPEN).size(36.0).color(theme::TEXT_DIM));
            ui.label(RichText::new(empty_hint).color(theme::TEXT_SECONDARY));
            ui.add_space(6.0);
            if ui.button(format!("{} Add a goal", icons::PLUS)).clicked() {
                action = GoalListAction::AddFirst;
            }
        });
        return action;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for card in &view.cards {
                let card_action = show_goal_card(card, ui);
                if card_action != GoalListAction::None {
                    action = card_action;
                }
                ui.add_space(8.0);
            }
        });

    action
}

fn show_goal_card(card: &GoalCard, ui: &mut Ui) -> GoalListAction {
    let mut action = GoalListAction::None;

    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        // Header: checkbox, title/subject, priority badge, edit/delete
        ui.horizontal(|ui| {
            let check = if card.completed { icons::CHECK_SQUARE } else { icons::SQUARE };
            let check_color = if card.completed { theme::SUCCESS } else { theme::TEXT_SECONDARY };
            let toggle = ui.add(
                egui::Button::new(RichText::new(check).size(18.0).color(check_color)).frame(false),
            );
            let hint = if card.completed { "Reopen goal" } else { "Mark as completed" };
            if toggle.on_hover_text(hint).clicked() {
                action = GoalListAction::Toggle(card.id.clone());
            }

            ui.vertical(|ui| {
                let mut title = RichText::new(&card.title).strong().size(14.0);
                if card.completed {
                    title = title.strikethrough().color(theme::TEXT_DIM);
                }
                ui.add(egui::Label::new(title).truncate());
                ui.label(RichText::new(&card.subject).size(12.0).color(theme::TEXT_SECONDARY));
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let delete = ui.add(
                    egui::Button::new(RichText::new(icons::TRASH).color(theme::TEXT_DIM)).frame(false),
                );
                if delete.on_hover_text("Delete goal").clicked() {
                    action = GoalListAction::Delete(card.id.clone());
                }
                let edit = ui.add(
                    egui::Button::new(RichText::new(icons::PENCIL_SIMPLE).color(theme::TEXT_DIM))
                        .frame(false),
                );
                if edit.on_hover_text("Edit goal").clicked() {
                    action = GoalListAction::Edit(card.id.clone());
                }
                priority_badge(card, ui);
            });
        });

        if !card.description.is_empty() {
            ui.label(RichText::new(&card.description).size(12.0).color(theme::TEXT_SECONDARY));
        }

        // Progress: draggable while the goal is open, a plain bar once completed
        if card.completed {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Progress").size(11.0).color(theme::TEXT_DIM));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format!("{}%", card.progress)).size(11.0));
                });
            });
            ui.add(
                egui::ProgressBar::new(f32::from(card.progress) / 100.0)
                    .desired_width(ui.available_width())
                    .fill(theme::SUCCESS)
                    .rounding(egui::Rounding::same(3.0)),
            );
        } else {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Progress").size(11.0).color(theme::TEXT_DIM));
                ui.spacing_mut().slider_width = (ui.available_width() - 60.0).max(80.0);
                let mut progress = card.progress;
                let slider = ui.add(
                    egui::Slider::new(&mut progress, 0..=100)
                        .step_by(5.0)
                        .suffix("%"),
                );
                if slider.on_hover_text("Drag to update progress").changed() {
                    action = GoalListAction::Progress(card.id.clone(), progress);
                }
            });
        }

        // Footer: deadline date and annotation
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{} {}", icons::CALENDAR_BLANK, card.deadline.format("%d %b %Y")))
                    .size(11.0)
                    .color(theme::TEXT_SECONDARY),
            );
            ui.add_space(12.0);
            let (icon, color) = if card.completed {
                (icons::CLOCK, theme::TEXT_DIM)
            } else if card.deadline_status.is_urgent() {
                (icons::WARNING, theme::deadline_color(card.deadline_status))
            } else {
                (icons::CLOCK, theme::deadline_color(card.deadline_status))
            };
            ui.label(
                RichText::new(format!("{} {}", icon, card.deadline_label))
                    .size(11.0)
                    .color(color),
            );
        });
    });

    action
}

fn priority_badge(card: &GoalCard, ui: &mut Ui) {
    let color = theme::priority_color(card.priority);
    egui::Frame::none()
        .fill(color.gamma_multiply(0.25))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(
                RichText::new(card.priority.label())
                    .size(10.5)
                    .color(Color32::WHITE),
            );
        });
}
