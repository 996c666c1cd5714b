pub mod goal;
pub mod planner;
pub mod stats;

pub use goal::{Goal, GoalDraft, Priority};
pub use planner::{Command, Notification, NotificationKind, Planner, Tab};
