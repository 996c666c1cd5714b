use tracing::{debug, error, warn};
use uuid::Uuid;

use super::store::{KeyValueStore, StorageError};
use crate::model::Goal;

/// Key under which the whole goal list is stored as one JSON array.
pub const GOALS_KEY: &str = "smart-study-planner-goals";

/// Loads and saves the goal list. Storage problems are logged and absorbed:
/// callers always get a usable list and never see an error.
#[derive(Debug)]
pub struct GoalStore<S> {
    backend: S,
}

impl<S: KeyValueStore> GoalStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the stored list. Absent, blank, corrupt or unreadable → empty.
    /// Individual records that cannot be decoded are skipped, the rest are kept.
    pub fn load(&self) -> Vec<Goal> {
        match self.try_load() {
            Ok(goals) => {
                debug!(count = goals.len(), "loaded goals");
                goals
            }
            Err(e) => {
                error!(error = %e, key = GOALS_KEY, "failed to load goals, starting empty");
                Vec::new()
            }
        }
    }

    /// Write the full list, replacing whatever was stored.
    pub fn save(&mut self, goals: &[Goal]) {
        if let Err(e) = self.try_save(goals) {
            error!(error = %e, key = GOALS_KEY, count = goals.len(), "failed to save goals");
        }
    }

    fn try_load(&self) -> Result<Vec<Goal>, StorageError> {
        let Some(raw) = self.backend.get(GOALS_KEY)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<serde_json::Value> = serde_json::from_str(&raw)?;
        let total = records.len();
        let goals: Vec<Goal> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(goal) => Some(goal),
                Err(e) => {
                    warn!(index, error = %e, "skipping unreadable goal record");
                    None
                }
            })
            .collect();
        if goals.len() < total {
            warn!(kept = goals.len(), total, "some stored goals could not be read");
        }
        Ok(goals)
    }

    fn try_save(&mut self, goals: &[Goal]) -> Result<(), StorageError> {
        let json = serde_json::to_string(goals)?;
        self.backend.set(GOALS_KEY, &json)
    }
}

/// A new opaque goal id: millisecond timestamp prefix followed by random bits.
pub fn generate_id() -> String {
    Uuid::now_v7().simple().to_string()
}
