//! View models built from the goal list.
//!
//! Everything the UI draws is derived here from scratch on every frame, so the
//! numbers on screen are always a pure function of the current list.

use chrono::NaiveDate;

use crate::model::stats::{DashboardStats, DeadlineStatus};
use crate::model::{Goal, Priority};

/// Visual tone of a dashboard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Success,
    Warning,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub tone: Tone,
}

/// Summary card, present only when at least one goal exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub average_progress: u32,
    pub completed_label: String,
    pub remaining_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub cards: Vec<StatCard>,
    pub overview: Option<Overview>,
}

impl DashboardView {
    pub fn build(goals: &[Goal], today: NaiveDate) -> Self {
        let stats = DashboardStats::compute(goals, today);
        let cards = vec![
            StatCard {
                title: "Total Goals",
                value: stats.total.to_string(),
                tone: Tone::Primary,
            },
            StatCard {
                title: "Completion Rate",
                value: format!("{}%", stats.completion_rate),
                tone: Tone::Success,
            },
            StatCard {
                title: "Due Soon",
                value: stats.due_soon.to_string(),
                tone: Tone::Warning,
            },
            StatCard {
                title: "Overdue",
                value: stats.overdue.to_string(),
                tone: Tone::Destructive,
            },
        ];
        let overview = (stats.total > 0).then(|| Overview {
            average_progress: stats.average_progress,
            completed_label: format!("{} completed", stats.completed),
            remaining_label: format!("{} remaining", stats.remaining()),
        });

        Self {
            stats,
            cards,
            overview,
        }
    }
}

/// Everything needed to draw one goal card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalCard {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub description: String,
    pub priority: Priority,
    pub progress: u8,
    pub completed: bool,
    pub deadline: NaiveDate,
    pub deadline_status: DeadlineStatus,
    pub deadline_label: String,
}

impl GoalCard {
    pub fn build(goal: &Goal, today: NaiveDate) -> Self {
        let deadline_status = DeadlineStatus::classify(goal.deadline, today);
        Self {
            id: goal.id.clone(),
            title: goal.title.clone(),
            subject: goal.subject.clone(),
            description: goal.description.clone(),
            priority: goal.priority,
            progress: goal.progress,
            completed: goal.completed,
            deadline: goal.deadline,
            deadline_status,
            deadline_label: deadline_status.label(),
        }
    }
}

/// A filtered list of cards, in list order (newest first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalListView {
    pub cards: Vec<GoalCard>,
    pub count_label: String,
}

impl GoalListView {
    pub fn build(goals: &[Goal], today: NaiveDate, completed: bool) -> Self {
        let cards: Vec<GoalCard> = goals
            .iter()
            .filter(|g| g.completed == completed)
            .map(|g| GoalCard::build(g, today))
            .collect();
        let count_label = format!("{} goals", cards.len());
        Self { cards, count_label }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// All three tab views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerView {
    pub dashboard: DashboardView,
    pub active: GoalListView,
    pub completed: GoalListView,
}

impl PlannerView {
    pub fn build(goals: &[Goal], today: NaiveDate) -> Self {
        Self {
            dashboard: DashboardView::build(goals, today),
            active: GoalListView::build(goals, today, false),
            completed: GoalListView::build(goals, today, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GoalDraft;
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn goal(title: &str, offset: i64, completed: bool) -> Goal {
        let draft = GoalDraft {
            title: title.into(),
            subject: "Geography".into(),
            description: String::new(),
            deadline: Some(today() + Duration::days(offset)),
            priority: Priority::Medium,
        };
        let mut g = Goal::new(title.into(), draft.validate().unwrap(), Utc::now());
        if completed {
            g.toggle();
        }
        g
    }

    #[test]
    fn empty_list_has_no_overview() {
        let view = PlannerView::build(&[], today());
        assert_eq!(view.dashboard.overview, None);
        assert_eq!(view.dashboard.cards[0].value, "0");
        assert_eq!(view.dashboard.cards[1].value, "0%");
        assert!(view.active.is_empty());
        assert_eq!(view.completed.count_label, "0 goals");
    }

    #[test]
    fn lists_are_filters_over_list_order() {
        let goals = vec![
            goal("Rivers", 2, false),
            goal("Maps", -1, true),
            goal("Climate", 0, false),
            goal("Plates", 7, true),
        ];
        let view = PlannerView::build(&goals, today());

        let active: Vec<&str> = view.active.cards.iter().map(|c| c.title.as_str()).collect();
        let done: Vec<&str> = view.completed.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(active, vec!["Rivers", "Climate"]);
        assert_eq!(done, vec!["Maps", "Plates"]);
        assert_eq!(view.active.count_label, "2 goals");

        assert_eq!(view.active.cards[0].deadline_label, "2 days left");
        assert_eq!(view.active.cards[1].deadline_label, "Due today");
        assert_eq!(view.completed.cards[0].deadline_label, "1 day overdue");
    }

    #[test]
    fn dashboard_cards_and_overview() {
        let goals = vec![goal("A", 1, false), goal("B", -3, false), goal("C", 1, true)];
        let view = DashboardView::build(&goals, today());

        let values: Vec<(&str, &str)> =
            view.cards.iter().map(|c| (c.title, c.value.as_str())).collect();
        assert_eq!(
            values,
            vec![
                ("Total Goals", "3"),
                ("Completion Rate", "33%"),
                ("Due Soon", "1"),
                ("Overdue", "1"),
            ]
        );

        let overview = view.overview.unwrap();
        assert_eq!(overview.average_progress, 33);
        assert_eq!(overview.completed_label, "1 completed");
        assert_eq!(overview.remaining_label, "2 remaining");
    }
}
