//! Gantt View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskId};

/// Reactive state owned by the gantt view.
///
/// `tasks` is insertion-ordered and holds at most one entry per id; all
/// writes go through the helpers below, which keep that invariant.
#[derive(Clone, Debug, Default, Store)]
pub struct GanttState {
    pub tasks: Vec<Task>,
}

/// Type alias for the store
pub type GanttStore = Store<GanttState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the whole collection with a freshly loaded batch, in fetch order.
pub fn store_replace_tasks(store: &GanttStore, tasks: Vec<Task>) {
    let mut deduped: Vec<Task> = Vec::with_capacity(tasks.len());
    for task in tasks {
        match deduped.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => deduped.push(task),
        }
    }
    store.tasks().set(deduped);
}

/// Insert a task, or replace the entry with the same id in place.
pub fn store_upsert_task(store: &GanttStore, task: Task) {
    let field = store.tasks();
    let mut tasks = field.write();
    match tasks.iter_mut().find(|t| t.id == task.id) {
        Some(existing) => *existing = task,
        None => tasks.push(task),
    }
}

/// Untracked snapshot of the whole collection, in insertion order.
pub fn store_tasks(store: &GanttStore) -> Vec<Task> {
    store.tasks().read_untracked().clone()
}

/// Current value of a task by id, without subscribing.
pub fn store_task(store: &GanttStore, id: TaskId) -> Option<Task> {
    store
        .tasks()
        .read_untracked()
        .iter()
        .find(|t| t.id == id)
        .cloned()
}
