//! Task List Component
//!
//! Renders the synchronized collection and feeds edits back through the
//! optimistic update path.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::collection::GanttTaskList;
use crate::filter::GanttFilter;
use crate::models::{Task, TaskPatch};
use crate::store::GanttStateStoreFields;

#[component]
pub fn TaskListView(list: GanttTaskList, filters: Signal<GanttFilter>) -> impl IntoView {
    let store = list.store;
    // The handle holds Rc internals, so it cannot cross into the Send
    // reactive closures below. Park it in the local arena and pull a clone
    // out inside the event handlers only.
    let list = StoredValue::new_local(list);
    let (new_title, set_new_title) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.is_empty() {
            return;
        }
        let Some(list) = list.try_get_value() else {
            return;
        };
        let filter = filters.get_untracked();
        spawn_local(async move {
            let mut draft = Task::new(filter.list_id, title);
            draft.start_date = Some(filter.date_from);
            if list.add_task(draft).await.is_ok() {
                set_new_title.set(String::new());
            }
        });
    };

    let toggle_done = move |task: &Task, done: bool| {
        let Some(list) = list.try_get_value() else {
            return;
        };
        let patch = TaskPatch {
            id: task.id,
            done: Some(done),
            ..Default::default()
        };
        spawn_local(async move {
            list.update_task(patch).await;
        });
    };

    view! {
        <div class="task-list">
            <form class="new-task-form" on:submit=add_task>
                <input
                    type="text"
                    placeholder="Add new task..."
                    prop:value=move || new_title.get()
                    on:input=move |ev| {
                        if let Some(target) = ev.target() {
                            if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
                                set_new_title.set(input.value());
                            }
                        }
                    }
                />
                <button type="submit">"Add"</button>
            </form>

            <ul>
                {move || store.tasks().get().into_iter().map(|task| {
                    let toggle = toggle_done.clone();
                    let row = task.clone();
                    view! {
                        <li class:done=task.done>
                            <input
                                type="checkbox"
                                prop:checked=task.done
                                on:change=move |ev| {
                                    let Some(target) = ev.target() else { return };
                                    let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else { return };
                                    toggle(&row, input.checked());
                                }
                            />
                            <span class="task-title">{task.title.clone()}</span>
                            <span class="task-dates">
                                {task.start_date.map(|d| d.to_string()).unwrap_or_default()}
                                " to "
                                {task.end_date.map(|d| d.to_string()).unwrap_or_default()}
                            </span>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <p class="task-count">
                {move || format!("{} tasks", store.tasks().get().len())}
            </p>
        </div>
    }
}
