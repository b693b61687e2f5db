pub mod add_task;
pub mod ui;

pub use add_task::AddTaskModal;
