use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// How urgent a goal is. Stored as a lowercase string; read back
/// case-insensitively, with anything unrecognised treated as medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn all() -> &'static [Priority] {
        &[Priority::Low, Priority::Medium, Priority::High]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

/// Accepts any JSON number (or null) and clamps it into 0..=100.
fn deserialize_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    if value.is_nan() {
        return Ok(0);
    }
    Ok(value.round().clamp(0.0, 100.0) as u8)
}

/// A single study goal.
///
/// Field names are persisted in camelCase so the stored document reads
/// `{id, title, subject, description, deadline, priority, progress, completed, createdAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub subject: String,
    #[serde(default)]
    pub description: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub priority: Priority,
    /// Percentage, 0 to 100.
    #[serde(default, deserialize_with = "deserialize_progress")]
    pub progress: u8,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Build a fresh, incomplete goal from a validated draft.
    pub fn new(id: String, draft: ValidDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            subject: draft.subject,
            description: draft.description,
            deadline: draft.deadline,
            priority: draft.priority,
            progress: 0,
            completed: false,
            created_at,
        }
    }

    /// Flip completion. Completing forces progress to 100; reopening keeps it.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
        if self.completed {
            self.progress = 100;
        }
    }

    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(100);
    }

    /// Overwrite the user-editable fields, keeping id, creation time and completion.
    pub fn apply(&mut self, draft: ValidDraft) {
        self.title = draft.title;
        self.subject = draft.subject;
        self.description = draft.description;
        self.deadline = draft.deadline;
        self.priority = draft.priority;
    }
}

/// Why a draft was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("title is required")]
    MissingTitle,
    #[error("subject is required")]
    MissingSubject,
    #[error("deadline is required")]
    MissingDeadline,
}

/// Raw form input for creating or editing a goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalDraft {
    pub title: String,
    pub subject: String,
    pub description: String,
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub title: String,
    pub subject: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub priority: Priority,
}

impl GoalDraft {
    /// Seed a draft from an existing goal (used by the edit dialog).
    pub fn from_goal(goal: &Goal) -> Self {
        Self {
            title: goal.title.clone(),
            subject: goal.subject.clone(),
            description: goal.description.clone(),
            deadline: Some(goal.deadline),
            priority: goal.priority,
        }
    }

    pub fn validate(self) -> Result<ValidDraft, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        let subject = self.subject.trim();
        if subject.is_empty() {
            return Err(DraftError::MissingSubject);
        }
        let deadline = self.deadline.ok_or(DraftError::MissingDeadline)?;

        Ok(ValidDraft {
            title: title.to_string(),
            subject: subject.to_string(),
            description: self.description.trim().to_string(),
            deadline,
            priority: self.priority,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft() -> GoalDraft {
        GoalDraft {
            title: "  Linear algebra  ".into(),
            subject: "Math".into(),
            description: "Chapters 1-3".into(),
            deadline: Some(date(2026, 3, 1)),
            priority: Priority::High,
        }
    }

    #[test]
    fn validate_trims_text_fields() {
        let valid = draft().validate().unwrap();
        assert_eq!(valid.title, "Linear algebra");
        assert_eq!(valid.subject, "Math");
        assert_eq!(valid.priority, Priority::High);
    }

    #[test]
    fn validate_rejects_missing_required_fields() {
        let mut d = draft();
        d.title = "   ".into();
        assert_eq!(d.validate(), Err(DraftError::MissingTitle));

        let mut d = draft();
        d.subject.clear();
        assert_eq!(d.validate(), Err(DraftError::MissingSubject));

        let mut d = draft();
        d.deadline = None;
        assert_eq!(d.validate(), Err(DraftError::MissingDeadline));
    }

    #[test]
    fn toggle_forces_full_progress_only_when_completing() {
        let created = Utc::now();
        let mut goal = Goal::new("a".into(), draft().validate().unwrap(), created);
        goal.set_progress(40);

        goal.toggle();
        assert!(goal.completed);
        assert_eq!(goal.progress, 100);

        goal.toggle();
        assert!(!goal.completed);
        assert_eq!(goal.progress, 100);
    }

    #[test]
    fn progress_is_clamped() {
        let mut goal = Goal::new("a".into(), draft().validate().unwrap(), Utc::now());
        goal.set_progress(250);
        assert_eq!(goal.progress, 100);
    }

    #[test]
    fn serializes_with_camel_case_layout() {
        let created = "2026-01-05T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let goal = Goal::new("id1".into(), draft().validate().unwrap(), created);
        let value = serde_json::to_value(&goal).unwrap();

        assert_eq!(value["id"], "id1");
        assert_eq!(value["deadline"], "2026-03-01");
        assert_eq!(value["priority"], "high");
        assert_eq!(value["progress"], 0);
        assert_eq!(value["completed"], false);
        assert!(value.get("createdAt").is_some());
    }

    fn parse(priority: &str, progress: &str) -> Goal {
        let json = format!(
            r#"{{"id":"x","title":"Essay","subject":"English","deadline":"2026-02-01",
                "priority":{priority},"progress":{progress},"completed":false,
                "createdAt":"2026-01-01T08:30:00.000Z"}}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn priority_is_read_leniently() {
        assert_eq!(parse(r#""High""#, "0").priority, Priority::High);
        assert_eq!(parse(r#"" low ""#, "0").priority, Priority::Low);
        assert_eq!(parse(r#""urgent""#, "0").priority, Priority::Medium);
        assert_eq!(parse(r#""""#, "0").priority, Priority::Medium);
    }

    #[test]
    fn stored_progress_is_rounded_and_clamped() {
        assert_eq!(parse(r#""low""#, "33.5").progress, 34);
        assert_eq!(parse(r#""low""#, "150").progress, 100);
        assert_eq!(parse(r#""low""#, "-5").progress, 0);
        assert_eq!(parse(r#""low""#, "null").progress, 0);
    }
}
