//! Frontend Models
//!
//! Data structures matching backend entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Backend-assigned task identifier. `0` means "not yet persisted".
pub type TaskId = i64;
/// Identifier of the list a task belongs to.
pub type ListId = i64;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub list_id: ListId,
    pub title: String,
    pub done: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Task {
    /// Draft for creation: the backend assigns the real id.
    pub fn new(list_id: ListId, title: impl Into<String>) -> Self {
        Self {
            id: 0,
            list_id,
            title: title.into(),
            done: false,
            start_date: None,
            end_date: None,
        }
    }

    /// Overlay the fields present in `patch` onto a copy of this task.
    pub fn patched(&self, patch: &TaskPatch) -> Task {
        Task {
            id: self.id,
            list_id: self.list_id,
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            done: patch.done.unwrap_or(self.done),
            start_date: patch.start_date.or(self.start_date),
            end_date: patch.end_date.or(self.end_date),
        }
    }
}

/// Partial task update: `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub id: TaskId,
    pub title: Option<String>,
    pub done: Option<bool>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
