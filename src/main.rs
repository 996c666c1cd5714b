#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod io;
mod model;
mod ui;
mod view;

use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result<()> {
    init_tracing();

    let settings = config::AppSettings::load();
    let data_dir = settings.resolved_data_dir();
    tracing::info!(data_dir = %data_dir.display(), "starting study planner");

    let store = io::GoalStore::new(io::FileStore::new(data_dir));
    let mut planner = model::Planner::open(store);
    planner.dispatch(model::Command::SwitchTab(settings.start_tab()), chrono::Utc::now());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([640.0, 420.0])
            .with_title("Smart Study Planner"),
        ..Default::default()
    };

    eframe::run_native(
        "Smart Study Planner",
        options,
        Box::new(move |cc| Ok(Box::new(app::StudyPlannerApp::new(cc, &settings, planner)))),
    )
}
