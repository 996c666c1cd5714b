use chrono::NaiveDate;
use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;

use crate::model::{GoalDraft, Priority};
use crate::ui::theme;

/// What the add-goal form wants to happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    Cancel,
}

fn field_label(ui: &mut Ui, text: &str, required: bool) {
    let text = if required { format!("{text} *") } else { text.to_string() };
    ui.add_sized(
        [theme::FORM_LABEL_WIDTH, 20.0],
        egui::Label::new(RichText::new(text).color(theme::TEXT_SECONDARY)),
    );
}

/// Shown next to a deadline that has already passed.
fn past_deadline_hint(deadline: Option<NaiveDate>, today: NaiveDate) -> Option<&'static str> {
    match deadline {
        Some(date) if date < today => Some("This date is already in the past"),
        _ => None,
    }
}

/// The editable fields shared by the add form and the edit dialog.
pub fn show_goal_fields(draft: &mut GoalDraft, id_salt: &str, today: NaiveDate, ui: &mut Ui) {
    ui.visuals_mut().extreme_bg_color = theme::BG_FIELD;

    egui::Grid::new((id_salt, "grid"))
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            field_label(ui, "Title", true);
            ui.add(
                egui::TextEdit::singleline(&mut draft.title)
                    .hint_text("e.g. Finish calculus chapter 4")
                    .desired_width(f32::INFINITY),
            );
            ui.end_row();

            field_label(ui, "Subject", true);
            ui.add(
                egui::TextEdit::singleline(&mut draft.subject)
                    .hint_text("e.g. Mathematics")
                    .desired_width(f32::INFINITY),
            );
            ui.end_row();

            field_label(ui, "Description", false);
            ui.add(
                egui::TextEdit::multiline(&mut draft.description)
                    .hint_text("Optional notes...")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            ui.end_row();

            field_label(ui, "Deadline", true);
            ui.horizontal(|ui| match draft.deadline.as_mut() {
                Some(date) => {
                    ui.add(egui_extras::DatePickerButton::new(date).id_salt(id_salt));
                    if ui
                        .add(egui::Button::new(icons::X).frame(false))
                        .on_hover_text("Clear deadline")
                        .clicked()
                    {
                        draft.deadline = None;
                    }
                }
                None => {
                    if ui.button(format!("{} Pick a date", icons::CALENDAR_BLANK)).clicked() {
                        draft.deadline = Some(today);
                    }
                }
            });
            ui.end_row();

            if let Some(hint) = past_deadline_hint(draft.deadline, today) {
                ui.label("");
                ui.label(
                    RichText::new(format!("{} {}", icons::WARNING, hint))
                        .size(11.0)
                        .color(theme::WARNING),
                );
                ui.end_row();
            }

            field_label(ui, "Priority", false);
            egui::ComboBox::from_id_salt((id_salt, "priority"))
                .selected_text(draft.priority.label())
                .show_ui(ui, |ui| {
                    for p in Priority::all() {
                        ui.selectable_value(&mut draft.priority, *p, p.label());
                    }
                });
            ui.end_row();
        });
}

/// Render the inline "New Study Goal" form.
pub fn show_add_goal_form(draft: &mut GoalDraft, today: NaiveDate, ui: &mut Ui) -> FormAction {
    let mut action = FormAction::None;

    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new("New Study Goal").strong().size(15.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(egui::Button::new(icons::X).frame(false)).clicked() {
                    action = FormAction::Cancel;
                }
            });
        });
        ui.add_space(6.0);

        show_goal_fields(draft, "add_goal", today, ui);

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let create = egui::Button::new(
                RichText::new(format!("{} Add Goal", icons::PLUS)).color(Color32::WHITE),
            )
            .fill(theme::ACCENT)
            .rounding(egui::Rounding::same(4.0));
            if ui.add_sized([110.0, 28.0], create).clicked() {
                action = FormAction::Submit;
            }
            if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                action = FormAction::Cancel;
            }
        });
    });

    action
}
