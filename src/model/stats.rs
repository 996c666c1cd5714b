use chrono::NaiveDate;

use super::goal::Goal;

/// Goals due within this many days (inclusive) count as "due soon".
pub const DUE_SOON_DAYS: i64 = 3;

/// Whole calendar days from `today` until `deadline` (negative once past).
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

/// Where a deadline sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    Overdue(i64),
    DueToday,
    DueSoon(i64),
    Upcoming(i64),
}

impl DeadlineStatus {
    pub fn classify(deadline: NaiveDate, today: NaiveDate) -> Self {
        let days = days_until(deadline, today);
        if days < 0 {
            DeadlineStatus::Overdue(-days)
        } else if days == 0 {
            DeadlineStatus::DueToday
        } else if days <= DUE_SOON_DAYS {
            DeadlineStatus::DueSoon(days)
        } else {
            DeadlineStatus::Upcoming(days)
        }
    }

    /// Card annotation, e.g. "2 days overdue", "Due today", "5 days left".
    pub fn label(&self) -> String {
        match *self {
            DeadlineStatus::Overdue(days) => format!("{} overdue", day_count(days)),
            DeadlineStatus::DueToday => "Due today".to_string(),
            DeadlineStatus::DueSoon(days) | DeadlineStatus::Upcoming(days) => {
                format!("{} left", day_count(days))
            }
        }
    }

    /// True for anything that should draw the eye (overdue or within the due-soon window).
    pub fn is_urgent(&self) -> bool {
        !matches!(self, DeadlineStatus::Upcoming(_))
    }
}

fn day_count(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

/// Aggregate numbers shown on the dashboard. Recomputed on every draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total: usize,
    pub completed: usize,
    /// Rounded percentage of completed goals; 0 when there are none.
    pub completion_rate: u32,
    pub due_soon: usize,
    pub overdue: usize,
    /// Rounded mean progress; 0 when there are no goals.
    pub average_progress: u32,
}

impl DashboardStats {
    pub fn compute(goals: &[Goal], today: NaiveDate) -> Self {
        let total = goals.len();
        let completed = goals.iter().filter(|g| g.completed).count();

        let mut due_soon = 0;
        let mut overdue = 0;
        // A deadline is the start of its day, so by any moment today it has passed.
        for goal in goals.iter().filter(|g| !g.completed) {
            let days = days_until(goal.deadline, today);
            if days <= 0 {
                overdue += 1;
            } else if days <= DUE_SOON_DAYS {
                due_soon += 1;
            }
        }

        let progress_sum: u64 = goals.iter().map(|g| u64::from(g.progress)).sum();

        Self {
            total,
            completed,
            completion_rate: rounded_ratio(completed as u64 * 100, total as u64),
            due_soon,
            overdue,
            average_progress: rounded_ratio(progress_sum, total as u64),
        }
    }

    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }
}

fn rounded_ratio(numerator: u64, denominator: u64) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 / denominator as f64).round() as u32
}
