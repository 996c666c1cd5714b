use chrono::NaiveDate;
use egui::{Color32, Context, RichText, Window};

use crate::model::{Goal, GoalDraft};
use crate::ui::goal_form::show_goal_fields;
use crate::ui::theme;

/// State of the open "Edit Goal" dialog.
#[derive(Debug, Clone)]
pub struct GoalEditor {
    pub id: String,
    pub draft: GoalDraft,
    pub progress: u8,
    pub completed: bool,
}

impl GoalEditor {
    pub fn for_goal(goal: &Goal) -> Self {
        Self {
            id: goal.id.clone(),
            draft: GoalDraft::from_goal(goal),
            progress: goal.progress,
            completed: goal.completed,
        }
    }
}

/// Actions the editor can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    Save,
    Cancel,
}

/// Render the edit dialog for one goal.
pub fn show_goal_editor(editor: &mut GoalEditor, today: NaiveDate, ctx: &Context) -> EditorAction {
    let mut action = EditorAction::None;

    Window::new(RichText::new("Edit Goal").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([440.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            show_goal_fields(&mut editor.draft, "edit_goal", today, ui);

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.add_sized(
                    [theme::FORM_LABEL_WIDTH, 20.0],
                    egui::Label::new(RichText::new("Progress").color(theme::TEXT_SECONDARY)),
                );
                ui.add_enabled(
                    !editor.completed,
                    egui::Slider::new(&mut editor.progress, 0..=100).suffix("%"),
                );
            });
            if editor.completed {
                ui.label(
                    RichText::new("Reopen the goal to change its progress.")
                        .size(11.0)
                        .color(theme::TEXT_DIM),
                );
            }

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let save = egui::Button::new(RichText::new("Save").color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 28.0], save).clicked() {
                    action = EditorAction::Save;
                }
                if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                    action = EditorAction::Cancel;
                }
            });
            ui.add_space(2.0);
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = EditorAction::Cancel;
    }
    action
}
