//! Synchronized Task Collection
//!
//! Keeps the task store in sync with the backend for the current filter and
//! layers optimistic updates on top. Reloads run whenever the filter signal
//! notifies; a stale reload that finishes after a newer one is discarded via
//! a generation counter instead of overwriting fresher data.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::TaskApi;
use crate::filter::GanttFilter;
use crate::message::Notifier;
use crate::models::{ListId, Task, TaskId, TaskPatch};
use crate::query::{filter_to_query_params, TaskQueryParams};
use crate::store::{store_replace_tasks, store_task, store_upsert_task, GanttState, GanttStore};

/// Fetch every page of the collection in page order.
///
/// The backend-reported `total_pages` is the sole termination authority.
/// With `load_all` false only the first page is fetched. Any page failure
/// aborts the whole call; no partial result is returned.
pub async fn fetch_all(
    api: &dyn TaskApi,
    list_id: ListId,
    params: &TaskQueryParams,
    load_all: bool,
) -> Result<Vec<Task>, String> {
    let mut all = Vec::new();
    let mut page = 1;
    loop {
        let fetched = api.fetch_page(list_id, params, page).await?;
        let total_pages = fetched.total_pages;
        all.extend(fetched.tasks);
        if !load_all || page >= total_pages {
            return Ok(all);
        }
        page += 1;
    }
}

/// Handle over the filter-driven task collection.
///
/// Cheap to clone; all clones share the same store and in-flight bookkeeping.
#[derive(Clone)]
pub struct GanttTaskList {
    pub store: GanttStore,
    /// Reload failures, for the UI layer to surface.
    pub load_error: RwSignal<Option<String>>,
    loading: RwSignal<u32>,
    /// Issue tag of the most recent reload; stale results are dropped.
    generation: Rc<Cell<u64>>,
    /// Ids with an unresolved update; a second update on one of these is
    /// rejected so rollback snapshots never chain.
    in_flight: Rc<RefCell<HashSet<TaskId>>>,
    api: Rc<dyn TaskApi>,
    notifier: Rc<dyn Notifier>,
    load_all: bool,
}

impl GanttTaskList {
    pub fn new(api: Rc<dyn TaskApi>, notifier: Rc<dyn Notifier>, load_all: bool) -> Self {
        Self {
            store: GanttStore::new(GanttState::default()),
            load_error: RwSignal::new(None),
            loading: RwSignal::new(0),
            generation: Rc::new(Cell::new(0)),
            in_flight: Rc::new(RefCell::new(HashSet::new())),
            api,
            notifier,
            load_all,
        }
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let loading = self.loading;
        Signal::derive(move || loading.get() > 0)
    }

    /// Load and assign new tasks for `filter`.
    ///
    /// On success the whole collection is replaced with the fetched tasks in
    /// fetch order, unless a newer load was issued in the meantime. On
    /// failure the collection is left untouched and the error returned.
    pub async fn load_tasks(&self, filter: &GanttFilter) -> Result<(), String> {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let params = filter_to_query_params(filter);
        self.loading.update(|n| *n += 1);
        let fetched = fetch_all(&*self.api, filter.list_id, &params, self.load_all).await;
        self.loading.update(|n| *n -= 1);

        let tasks = fetched?;
        if self.generation.get() == generation {
            store_replace_tasks(&self.store, tasks);
        }
        Ok(())
    }

    /// Create a task and insert the backend-returned entity.
    ///
    /// No optimism here: the id only exists after the backend answers, so
    /// there is nothing to show early. Failure propagates with the
    /// collection unmodified.
    pub async fn add_task(&self, draft: Task) -> Result<Task, String> {
        let created = self.api.create(draft).await?;
        store_upsert_task(&self.store, created.clone());
        Ok(created)
    }

    /// Apply `patch` optimistically and confirm it with the backend.
    ///
    /// A no-op when the id is not in the collection, or while a previous
    /// update on the same id is unresolved. The merged value is written
    /// before the network call; on failure the pre-update snapshot is
    /// restored in full and the notifier is the only failure channel.
    pub async fn update_task(&self, patch: TaskPatch) {
        if self.in_flight.borrow().contains(&patch.id) {
            return;
        }
        let Some(old_task) = store_task(&self.store, patch.id) else {
            return;
        };
        self.in_flight.borrow_mut().insert(patch.id);

        // set in expectation that the server update works
        let merged = old_task.patched(&patch);
        store_upsert_task(&self.store, merged.clone());

        match self.api.update(merged).await {
            Ok(saved) => {
                // pick up possible changes from the server
                store_upsert_task(&self.store, saved);
                self.notifier.success("Saved");
            }
            Err(_) => {
                self.notifier.error("Something went wrong saving the task");
                store_upsert_task(&self.store, old_task);
            }
        }
        self.in_flight.borrow_mut().remove(&patch.id);
    }
}

/// Build a task list that reloads on every filter-signal notification,
/// including the initial one. Reload errors land in `load_error`.
pub fn use_gantt_task_list(
    filters: Signal<GanttFilter>,
    api: Rc<dyn TaskApi>,
    notifier: Rc<dyn Notifier>,
    load_all: bool,
) -> GanttTaskList {
    let list = GanttTaskList::new(api, notifier, load_all);
    let handle = list.clone();
    Effect::new(move |_| {
        let filter = filters.get();
        let list = handle.clone();
        spawn_local(async move {
            match list.load_tasks(&filter).await {
                Ok(()) => list.load_error.set(None),
                Err(e) => list.load_error.set(Some(e)),
            }
        });
    });
    list
}
