use std::path::PathBuf;

use chrono::{Local, NaiveDate, Utc};
use egui::RichText;
use egui_phosphor::regular as icons;
use tracing::{info, warn};

use crate::config::AppSettings;
use crate::io::{csv_export, FileStore};
use crate::model::{Command, GoalDraft, Planner, Tab};
use crate::ui;
use crate::ui::goal_editor::{EditorAction, GoalEditor};
use crate::ui::goal_form::FormAction;
use crate::ui::goal_list::GoalListAction;
use crate::ui::toasts::Toasts;

/// Main application state.
pub struct StudyPlannerApp {
    pub planner: Planner<FileStore>,
    pub data_dir: PathBuf,

    // Add form
    pub show_add_form: bool,
    pub new_goal: GoalDraft,

    // Dialog state
    pub editor: Option<GoalEditor>,
    pub show_about: bool,

    pub toasts: Toasts,
    pub status_message: String,
}

impl StudyPlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &AppSettings, planner: Planner<FileStore>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self {
            data_dir: planner.store().backend().dir().to_path_buf(),
            planner,
            show_add_form: false,
            new_goal: GoalDraft::default(),
            editor: None,
            show_about: false,
            toasts: Toasts::new(settings.notification_secs),
            status_message: "Ready".to_string(),
        }
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Run a command through the planner and surface its notification.
    pub fn apply(&mut self, command: Command, ctx: &egui::Context) -> bool {
        let outcome = self.planner.dispatch(command, Utc::now());
        if let Some(notification) = outcome.notification {
            self.status_message = format!("{}: {}", notification.title, notification.message);
            self.toasts.push(notification, ctx.input(|i| i.time));
        }
        if outcome.changed {
            ctx.request_repaint();
        }
        outcome.changed
    }

    // --- Form ---

    pub fn open_add_form(&mut self) {
        self.show_add_form = true;
    }

    pub fn hide_add_form(&mut self) {
        self.show_add_form = false;
        self.new_goal = GoalDraft::default();
    }

    fn submit_add_form(&mut self, ctx: &egui::Context) {
        let draft = self.new_goal.clone();
        if self.apply(Command::AddGoal(draft), ctx) {
            self.hide_add_form();
        }
    }

    fn open_editor(&mut self, id: &str) {
        match self.planner.goal(id) {
            Some(goal) => self.editor = Some(GoalEditor::for_goal(goal)),
            None => warn!(id, "edit requested for unknown goal"),
        }
    }

    // --- File operations ---

    pub fn export_csv(&mut self) {
        if self.planner.goals().is_empty() {
            self.status_message = "Nothing to export, there are no goals yet".to_string();
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("study-goals.csv")
            .save_file()
        {
            match csv_export::export_csv_file(self.planner.goals(), &path) {
                Ok(count) => {
                    info!(count, file = %path.display(), "exported goals");
                    self.status_message = format!("Exported {} goals to CSV", count);
                }
                Err(e) => {
                    warn!(error = %e, file = %path.display(), "csv export failed");
                    self.status_message = format!("CSV export failed: {}", e);
                }
            }
        }
    }

    pub fn open_data_folder(&mut self) {
        if let Err(e) = std::fs::create_dir_all(&self.data_dir).and_then(|_| open::that(&self.data_dir)) {
            warn!(error = %e, dir = %self.data_dir.display(), "could not open data folder");
            self.status_message = format!("Could not open data folder: {}", e);
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (new_goal, tab, escape) = ctx.input(|i| {
            let tab = if i.modifiers.ctrl && i.key_pressed(egui::Key::Num1) {
                Some(Tab::Dashboard)
            } else if i.modifiers.ctrl && i.key_pressed(egui::Key::Num2) {
                Some(Tab::Active)
            } else if i.modifiers.ctrl && i.key_pressed(egui::Key::Num3) {
                Some(Tab::Completed)
            } else {
                None
            };
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::N),
                tab,
                i.key_pressed(egui::Key::Escape),
            )
        });

        if new_goal {
            self.open_add_form();
        }
        if let Some(tab) = tab {
            self.apply(Command::SwitchTab(tab), ctx);
        }
        if escape && self.show_add_form && self.editor.is_none() {
            self.hide_add_form();
        }
    }

    fn handle_list_action(&mut self, action: GoalListAction, ctx: &egui::Context) {
        match action {
            GoalListAction::Toggle(id) => {
                self.apply(Command::ToggleGoal(id), ctx);
            }
            GoalListAction::Delete(id) => {
                self.apply(Command::DeleteGoal(id), ctx);
            }
            GoalListAction::Progress(id, progress) => {
                self.apply(Command::SetProgress { id, progress }, ctx);
            }
            GoalListAction::Edit(id) => self.open_editor(&id),
            GoalListAction::AddFirst => self.open_add_form(),
            GoalListAction::None => {}
        }
    }
}

impl eframe::App for StudyPlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);
        self.handle_shortcuts(ctx);

        let today = Self::today();
        let view = self.planner.view(today);

        // Top panel: menu bar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::STATUS_BAR_BG)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let stats = &view.dashboard.stats;
                        ui.label(
                            RichText::new(format!(
                                "Goals: {}  ·  Active: {}  ·  Completed: {}",
                                stats.total,
                                stats.remaining(),
                                stats.completed
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Central panel: header, add form, tabs, tab content
        let mut form_action = FormAction::None;
        let mut list_action = GoalListAction::None;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_DARK)
                    .inner_margin(egui::Margin::same(16.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("{} Smart Study Planner", icons::GRADUATION_CAP))
                            .font(ui::theme::font_heading())
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if !self.show_add_form {
                            let btn = egui::Button::new(
                                RichText::new(format!("{} Add Goal", icons::PLUS))
                                    .color(egui::Color32::WHITE),
                            )
                            .fill(ui::theme::ACCENT)
                            .rounding(egui::Rounding::same(5.0));
                            if ui.add_sized([110.0, 30.0], btn).clicked() {
                                self.open_add_form();
                            }
                        }
                    });
                });
                ui.add_space(10.0);

                if self.show_add_form {
                    form_action = ui::goal_form::show_add_goal_form(&mut self.new_goal, today, ui);
                    ui.add_space(10.0);
                }

                // Tab bar
                let active_tab = self.planner.active_tab();
                let mut clicked_tab = None;
                ui.horizontal(|ui| {
                    for tab in Tab::all() {
                        let text = RichText::new(tab.label()).size(13.0);
                        if ui.selectable_label(active_tab == *tab, text).clicked() {
                            clicked_tab = Some(*tab);
                        }
                    }
                });
                ui.separator();
                ui.add_space(6.0);
                if let Some(tab) = clicked_tab {
                    self.apply(Command::SwitchTab(tab), ctx);
                }

                match self.planner.active_tab() {
                    Tab::Dashboard => ui::dashboard::show_dashboard(&view.dashboard, ui),
                    Tab::Active => {
                        list_action = ui::goal_list::show_goal_list(
                            "Active Goals",
                            "No active goals. Add one to get started!",
                            &view.active,
                            ui,
                        );
                    }
                    Tab::Completed => {
                        list_action = ui::goal_list::show_goal_list(
                            "Completed Goals",
                            "No completed goals yet. Keep going!",
                            &view.completed,
                            ui,
                        );
                    }
                }
            });

        match form_action {
            FormAction::Submit => self.submit_add_form(ctx),
            FormAction::Cancel => self.hide_add_form(),
            FormAction::None => {}
        }
        self.handle_list_action(list_action, ctx);

        // Dialogs
        if let Some(id) = self.editor.as_ref().map(|e| e.id.clone()) {
            if self.planner.goal(&id).is_none() {
                info!(id = %id, "closing editor for a goal that was removed");
                self.editor = None;
            }
        }
        if let Some(editor) = self.editor.as_mut() {
            match ui::goal_editor::show_goal_editor(editor, today, ctx) {
                EditorAction::Save => {
                    let command = Command::EditGoal {
                        id: editor.id.clone(),
                        draft: editor.draft.clone(),
                        progress: editor.progress,
                    };
                    if self.apply(command, ctx) {
                        self.editor = None;
                    }
                }
                EditorAction::Cancel => self.editor = None,
                EditorAction::None => {}
            }
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }

        self.toasts.show(ctx);
    }
}
