use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};

use super::goal::{Goal, GoalDraft};
use crate::io::{generate_id, GoalStore, KeyValueStore};
use crate::view::PlannerView;

/// The three views of the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Active,
    Completed,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Dashboard, Tab::Active, Tab::Completed]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Active => "active",
            Tab::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Active => "Active Goals",
            Tab::Completed => "Completed",
        }
    }

    pub fn from_name(name: &str) -> Option<Tab> {
        Tab::all().iter().copied().find(|t| t.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Every user action the planner understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddGoal(GoalDraft),
    ToggleGoal(String),
    DeleteGoal(String),
    EditGoal {
        id: String,
        draft: GoalDraft,
        progress: u8,
    },
    SetProgress {
        id: String,
        progress: u8,
    },
    SwitchTab(Tab),
}

/// What happened as a result of a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// The goal list changed and was persisted; views must be rebuilt.
    pub changed: bool,
    pub notification: Option<Notification>,
}

impl Outcome {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(notification: Option<Notification>) -> Self {
        Self {
            changed: true,
            notification,
        }
    }

    fn rejected(notification: Notification) -> Self {
        Self {
            changed: false,
            notification: Some(notification),
        }
    }
}

fn missing_fields() -> Notification {
    Notification::error("Error", "Please fill in all required fields")
}

/// Owns the goal list and the active tab. The only writer of the list.
#[derive(Debug)]
pub struct Planner<S> {
    goals: Vec<Goal>,
    active_tab: Tab,
    store: GoalStore<S>,
}

impl<S: KeyValueStore> Planner<S> {
    /// Load the persisted goals and start on the dashboard.
    pub fn open(store: GoalStore<S>) -> Self {
        let goals = store.load();
        info!(count = goals.len(), "planner opened");
        Self {
            goals,
            active_tab: Tab::default(),
            store,
        }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn store(&self) -> &GoalStore<S> {
        &self.store
    }

    /// Rebuild every view from the current list.
    pub fn view(&self, today: NaiveDate) -> PlannerView {
        PlannerView::build(&self.goals, today)
    }

    /// Apply one command. Mutations are persisted before returning.
    pub fn dispatch(&mut self, command: Command, now: DateTime<Utc>) -> Outcome {
        debug!(?command, "dispatch");
        match command {
            Command::AddGoal(draft) => self.add_goal(draft, now),
            Command::ToggleGoal(id) => self.toggle_goal(&id),
            Command::DeleteGoal(id) => self.delete_goal(&id),
            Command::EditGoal { id, draft, progress } => self.edit_goal(&id, draft, progress),
            Command::SetProgress { id, progress } => self.set_progress(&id, progress),
            Command::SwitchTab(tab) => {
                self.active_tab = tab;
                Outcome::unchanged()
            }
        }
    }

    fn add_goal(&mut self, draft: GoalDraft, now: DateTime<Utc>) -> Outcome {
        let valid = match draft.validate() {
            Ok(valid) => valid,
            Err(e) => {
                debug!(reason = %e, "rejected new goal");
                return Outcome::rejected(missing_fields());
            }
        };

        let id = self.unique_id();
        let goal = Goal::new(id, valid, now);
        info!(id = %goal.id, title = %goal.title, "goal added");
        self.goals.insert(0, goal);
        self.persist();

        Outcome::changed(Some(Notification::success(
            "Goal Added",
            "Your new study goal has been created successfully!",
        )))
    }

    fn toggle_goal(&mut self, id: &str) -> Outcome {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            return Outcome::unchanged();
        };
        goal.toggle();
        let completed = goal.completed;
        info!(id, completed, "goal toggled");
        self.persist();

        let notification = if completed {
            Notification::success("Goal Completed", "Congratulations on your achievement!")
        } else {
            Notification::success("Goal Reopened", "Keep working on it!")
        };
        Outcome::changed(Some(notification))
    }

    fn delete_goal(&mut self, id: &str) -> Outcome {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        if self.goals.len() == before {
            debug!(id, "delete requested for unknown goal");
        } else {
            info!(id, "goal deleted");
        }
        self.persist();

        Outcome::changed(Some(Notification::error(
            "Goal Deleted",
            "The study goal has been removed.",
        )))
    }

    fn edit_goal(&mut self, id: &str, draft: GoalDraft, progress: u8) -> Outcome {
        let valid = match draft.validate() {
            Ok(valid) => valid,
            Err(_) => return Outcome::rejected(missing_fields()),
        };
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            warn!(id, "edit targets a goal that no longer exists");
            return Outcome::rejected(Notification::error(
                "Goal Not Found",
                "This goal no longer exists.",
            ));
        };
        goal.apply(valid);
        goal.set_progress(progress);
        info!(id, "goal edited");
        self.persist();

        Outcome::changed(Some(Notification::success(
            "Goal Updated",
            "Your changes have been saved.",
        )))
    }

    fn set_progress(&mut self, id: &str, progress: u8) -> Outcome {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            return Outcome::unchanged();
        };
        if goal.progress == progress.min(100) {
            return Outcome::unchanged();
        }
        goal.set_progress(progress);
        self.persist();
        Outcome::changed(None)
    }

    fn unique_id(&self) -> String {
        loop {
            let id = generate_id();
            if self.goal(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&mut self) {
        self.store.save(&self.goals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use crate::model::Priority;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap()
    }

    fn draft(title: &str) -> GoalDraft {
        GoalDraft {
            title: title.into(),
            subject: "Physics".into(),
            description: "Revise".into(),
            deadline: NaiveDate::from_ymd_opt(2026, 9, 20),
            priority: Priority::High,
        }
    }

    fn planner() -> Planner<MemoryStore> {
        Planner::open(GoalStore::new(MemoryStore::default()))
    }

    fn add(p: &mut Planner<MemoryStore>, title: &str) -> String {
        let outcome = p.dispatch(Command::AddGoal(draft(title)), now());
        assert!(outcome.changed);
        p.goals()[0].id.clone()
    }

    fn titles(p: &Planner<MemoryStore>) -> Vec<&str> {
        p.goals().iter().map(|g| g.title.as_str()).collect()
    }

    #[test]
    fn add_prepends_fresh_goal_with_unique_id() {
        let mut p = planner();
        let first = add(&mut p, "Optics");
        let second = add(&mut p, "Mechanics");

        assert_eq!(titles(&p), vec!["Mechanics", "Optics"]);
        assert_ne!(first, second);
        let goal = &p.goals()[0];
        assert_eq!(goal.progress, 0);
        assert!(!goal.completed);
        assert_eq!(goal.created_at, now());
        assert_eq!(p.store().backend().writes, 2);
    }

    #[test]
    fn add_reports_success() {
        let mut p = planner();
        let outcome = p.dispatch(Command::AddGoal(draft("Waves")), now());
        let note = outcome.notification.unwrap();
        assert_eq!(note.title, "Goal Added");
        assert_eq!(note.kind, NotificationKind::Success);
    }

    #[test]
    fn invalid_add_does_not_mutate_or_persist() {
        let mut p = planner();
        for bad in [
            GoalDraft { title: String::new(), ..draft("x") },
            GoalDraft { subject: "  ".into(), ..draft("x") },
            GoalDraft { deadline: None, ..draft("x") },
        ] {
            let outcome = p.dispatch(Command::AddGoal(bad), now());
            assert!(!outcome.changed);
            assert_eq!(outcome.notification.unwrap().kind, NotificationKind::Error);
        }
        assert!(p.goals().is_empty());
        assert_eq!(p.store().backend().writes, 0);
    }

    #[test]
    fn toggle_completes_then_reopens() {
        let mut p = planner();
        let id = add(&mut p, "Thermo");
        p.dispatch(Command::SetProgress { id: id.clone(), progress: 35 }, now());

        let outcome = p.dispatch(Command::ToggleGoal(id.clone()), now());
        assert_eq!(outcome.notification.unwrap().title, "Goal Completed");
        assert!(p.goal(&id).unwrap().completed);
        assert_eq!(p.goal(&id).unwrap().progress, 100);

        let outcome = p.dispatch(Command::ToggleGoal(id.clone()), now());
        assert_eq!(outcome.notification.unwrap().title, "Goal Reopened");
        assert!(!p.goal(&id).unwrap().completed);
        assert_eq!(p.goal(&id).unwrap().progress, 100);
    }

    #[test]
    fn toggle_unknown_id_is_ignored() {
        let mut p = planner();
        add(&mut p, "Optics");
        assert_eq!(p.dispatch(Command::ToggleGoal("nope".into()), now()), Outcome::default());
        assert_eq!(p.store().backend().writes, 1);
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let mut p = planner();
        add(&mut p, "A");
        let b = add(&mut p, "B");
        add(&mut p, "C");

        let outcome = p.dispatch(Command::DeleteGoal(b), now());
        assert!(outcome.changed);
        assert_eq!(outcome.notification.unwrap().title, "Goal Deleted");
        assert_eq!(titles(&p), vec!["C", "A"]);

        let writes = p.store().backend().writes;
        let outcome = p.dispatch(Command::DeleteGoal("missing".into()), now());
        assert_eq!(outcome.notification.unwrap().title, "Goal Deleted");
        assert_eq!(titles(&p), vec!["C", "A"]);
        assert_eq!(p.store().backend().writes, writes + 1);
    }

    #[test]
    fn edit_replaces_fields_but_keeps_identity() {
        let mut p = planner();
        let id = add(&mut p, "Draft");
        let created = p.goal(&id).unwrap().created_at;

        let edited = GoalDraft {
            title: "Final".into(),
            priority: Priority::Low,
            ..draft("ignored")
        };
        let outcome = p.dispatch(
            Command::EditGoal { id: id.clone(), draft: edited, progress: 60 },
            now(),
        );
        assert!(outcome.changed);

        let goal = p.goal(&id).unwrap();
        assert_eq!(goal.title, "Final");
        assert_eq!(goal.priority, Priority::Low);
        assert_eq!(goal.progress, 60);
        assert_eq!(goal.created_at, created);
        assert!(!goal.completed);
    }

    #[test]
    fn invalid_edit_is_rejected() {
        let mut p = planner();
        let id = add(&mut p, "Keep");
        let outcome = p.dispatch(
            Command::EditGoal { id: id.clone(), draft: GoalDraft::default(), progress: 10 },
            now(),
        );
        assert!(!outcome.changed);
        assert_eq!(p.goal(&id).unwrap().title, "Keep");
    }

    #[test]
    fn edit_of_deleted_goal_reports_error() {
        let mut p = planner();
        let id = add(&mut p, "Gone");
        p.dispatch(Command::DeleteGoal(id.clone()), now());
        let writes = p.store().backend().writes;

        let outcome = p.dispatch(
            Command::EditGoal { id, draft: draft("Back"), progress: 20 },
            now(),
        );
        assert!(!outcome.changed);
        let note = outcome.notification.unwrap();
        assert_eq!(note.title, "Goal Not Found");
        assert_eq!(note.kind, NotificationKind::Error);
        assert!(p.goals().is_empty());
        assert_eq!(p.store().backend().writes, writes);
    }

    #[test]
    fn set_progress_persists_quietly_and_skips_repeats() {
        let mut p = planner();
        let id = add(&mut p, "Calculus");

        let outcome = p.dispatch(Command::SetProgress { id: id.clone(), progress: 45 }, now());
        assert!(outcome.changed);
        assert_eq!(outcome.notification, None);
        assert_eq!(p.goal(&id).unwrap().progress, 45);
        assert_eq!(p.store().backend().writes, 2);

        let outcome = p.dispatch(Command::SetProgress { id: id.clone(), progress: 45 }, now());
        assert!(!outcome.changed);
        assert_eq!(p.store().backend().writes, 2);

        p.dispatch(Command::SetProgress { id: id.clone(), progress: 180 }, now());
        assert_eq!(p.goal(&id).unwrap().progress, 100);
        assert!(!p.goal(&id).unwrap().completed);
    }

    #[test]
    fn switch_tab_leaves_goals_alone() {
        let mut p = planner();
        add(&mut p, "A");
        assert_eq!(p.active_tab(), Tab::Dashboard);

        let outcome = p.dispatch(Command::SwitchTab(Tab::Completed), now());
        assert!(!outcome.changed);
        assert_eq!(p.active_tab(), Tab::Completed);
        assert_eq!(p.store().backend().writes, 1);
    }

    #[test]
    fn tab_names_round_trip() {
        for tab in Tab::all() {
            assert_eq!(Tab::from_name(tab.name()), Some(*tab));
        }
        assert_eq!(Tab::from_name("settings"), None);
    }

    #[test]
    fn reopening_reloads_persisted_list() {
        let mut p = planner();
        add(&mut p, "A");
        add(&mut p, "B");
        let goals = p.goals().to_vec();

        let Planner { store, .. } = p;
        let reopened = Planner::open(store);
        assert_eq!(reopened.goals(), goals.as_slice());
    }
}
