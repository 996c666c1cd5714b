pub mod dashboard;
pub mod dialogs;
pub mod goal_editor;
pub mod goal_form;
pub mod goal_list;
pub mod theme;
pub mod toasts;
pub mod toolbar;
