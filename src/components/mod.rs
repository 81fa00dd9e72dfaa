//! UI Components

mod filter_bar;
mod task_list;

pub use filter_bar::FilterBar;
pub use task_list::TaskListView;
