//! User settings, persisted as JSON in the OS config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::model::Tab;

const APP_NAME: &str = "StudyPlanner";

/// Persisted user settings. Missing keys fall back to defaults, so a partial
/// file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Where goals are stored. `None` uses the OS data directory.
    pub data_dir: Option<PathBuf>,
    /// How long toasts stay on screen.
    pub notification_secs: f64,
    /// Tab shown on launch: "dashboard", "active" or "completed".
    pub start_tab: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            notification_secs: 4.0,
            start_tab: Tab::Dashboard.name().to_string(),
            window_width: 1100.0,
            window_height: 760.0,
        }
    }
}

impl AppSettings {
    /// Load from the standard location, writing a default file on first run.
    pub fn load() -> Self {
        let path = settings_path();
        if !path.exists() {
            let defaults = Self::default();
            defaults.save_to(&path);
            return defaults;
        }
        Self::load_from(&path)
    }

    /// Load from `path`. Unreadable or invalid files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "could not read settings, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str::<AppSettings>(&contents) {
            Ok(settings) => {
                info!(file = %path.display(), "loaded settings");
                settings.sanitized()
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "invalid settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) {
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "could not serialize settings");
                return;
            }
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(dir = %parent.display(), error = %e, "could not create settings directory");
                return;
            }
        }
        if let Err(e) = std::fs::write(path, json) {
            warn!(file = %path.display(), error = %e, "could not write settings");
        }
    }

    /// Directory holding the goal store.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    /// The launch tab, falling back to the dashboard for unknown names.
    pub fn start_tab(&self) -> Tab {
        Tab::from_name(&self.start_tab).unwrap_or_else(|| {
            warn!(name = %self.start_tab, "unknown start tab, using dashboard");
            Tab::default()
        })
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.notification_secs.is_finite() || self.notification_secs <= 0.0 {
            self.notification_secs = defaults.notification_secs;
        }
        if self.window_width < 400.0 {
            self.window_width = defaults.window_width;
        }
        if self.window_height < 300.0 {
            self.window_height = defaults.window_height;
        }
        self
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

fn settings_path() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.config_dir().join("settings.json"),
        None => PathBuf::from(".").join("settings.json"),
    }
}

fn default_data_dir() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => PathBuf::from(".").join("data"),
    }
}
