use crate::app::StudyPlannerApp;
use crate::model::{Command, Tab};
use crate::ui::theme;
use egui::{menu, RichText, Ui};

/// Render the top menu bar.
pub fn show_toolbar(app: &mut StudyPlannerApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui.button("  New Goal          Ctrl+N").clicked() {
                app.open_add_form();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Export CSV...").clicked() {
                app.export_csv();
                ui.close_menu();
            }
            if ui.button("  Open Data Folder").clicked() {
                app.open_data_folder();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            let active = app.planner.active_tab();
            for (i, tab) in Tab::all().iter().enumerate() {
                let label = format!("{}    Ctrl+{}", tab.label(), i + 1);
                if ui.radio(active == *tab, label).clicked() {
                    app.apply(Command::SwitchTab(*tab), ui.ctx());
                    ui.close_menu();
                }
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(app.data_dir.display().to_string())
                    .size(11.0)
                    .weak(),
            );
        });
    });
}
