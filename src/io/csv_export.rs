use std::path::Path;

use crate::model::Goal;

fn status(goal: &Goal) -> &'static str {
    if goal.completed {
        "Completed"
    } else if goal.progress > 0 {
        "In Progress"
    } else {
        "Not Started"
    }
}

/// Write goals as semicolon-delimited CSV.
///
/// Columns: Title ; Subject ; Description ; Deadline ; Priority ; Progress ; Status ; Created
/// Dates are formatted as YYYY-MM-DD. Returns the number of goals written.
pub fn export_csv<W: std::io::Write>(goals: &[Goal], writer: W) -> Result<usize, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(writer);

    wtr.write_record([
        "Title",
        "Subject",
        "Description",
        "Deadline",
        "Priority",
        "Progress",
        "Status",
        "Created",
    ])?;

    for goal in goals {
        let deadline = goal.deadline.format("%Y-%m-%d").to_string();
        let progress = format!("{}%", goal.progress);
        let created = goal.created_at.format("%Y-%m-%d").to_string();
        wtr.write_record([
            goal.title.as_str(),
            goal.subject.as_str(),
            goal.description.as_str(),
            deadline.as_str(),
            goal.priority.label(),
            progress.as_str(),
            status(goal),
            created.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(goals.len())
}

/// Export to a file on disk.
pub fn export_csv_file(goals: &[Goal], path: &Path) -> Result<usize, csv::Error> {
    let file = std::fs::File::create(path)?;
    export_csv(goals, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GoalDraft, Priority};
    use chrono::{NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn goal(title: &str, progress: u8, completed: bool) -> Goal {
        let draft = GoalDraft {
            title: title.into(),
            subject: "Chemistry".into(),
            description: "acids; bases".into(),
            deadline: NaiveDate::from_ymd_opt(2026, 4, 9),
            priority: Priority::High,
        };
        let created = Utc.with_ymd_and_hms(2026, 1, 2, 9, 0, 0).unwrap();
        let mut g = Goal::new(title.into(), draft.validate().unwrap(), created);
        g.progress = progress;
        g.completed = completed;
        g
    }

    #[test]
    fn writes_header_and_rows() {
        let mut out = Vec::new();
        let count = export_csv(&[goal("Titration", 20, false), goal("Moles", 100, true)], &mut out).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Title;Subject;Description;Deadline;Priority;Progress;Status;Created",
                "Titration;Chemistry;\"acids; bases\";2026-04-09;high;20%;In Progress;2026-01-02",
                "Moles;Chemistry;\"acids; bases\";2026-04-09;high;100%;Completed;2026-01-02",
            ]
        );
    }

    #[test]
    fn exports_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("goals.csv");
        let count = export_csv_file(&[goal("Stoichiometry", 0, false)], &path).unwrap();
        assert_eq!(count, 1);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Stoichiometry;Chemistry"));
        assert!(text.contains("Not Started"));
    }
}
