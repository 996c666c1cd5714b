pub mod csv_export;
pub mod goal_store;
pub mod store;

pub use goal_store::{generate_id, GoalStore};
pub use store::{FileStore, KeyValueStore};
