//! Gantt View App
//!
//! Wires the route-bound filter to the synchronized task list and renders
//! the shell around them.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::api::BackendApi;
use crate::collection::use_gantt_task_list;
use crate::components::{FilterBar, TaskListView};
use crate::filter::use_gantt_filter;
use crate::message::ConsoleNotifier;
use crate::route::GanttRoute;

#[component]
pub fn App() -> impl IntoView {
    let route_filter = use_gantt_filter(
        &GanttRoute::from_location(),
        Rc::new(|route: &GanttRoute| route.replace_in_history()),
    );

    let list = use_gantt_task_list(
        route_filter.filters.into(),
        Rc::new(BackendApi),
        Rc::new(ConsoleNotifier),
        true,
    );

    // Re-decode the filter when the user moves through browser history.
    {
        let binding = route_filter.clone();
        let on_popstate = Closure::<dyn FnMut()>::new(move || {
            binding.sync_from_route(&GanttRoute::from_location());
        });
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
        }
        on_popstate.forget();
    }

    let is_loading = list.is_loading();
    let load_error = list.load_error;

    view! {
        <div class="gantt-view">
            <h1>"Gantt"</h1>

            <FilterBar route_filter=route_filter.clone() />

            {move || is_loading.get().then(|| view! {
                <p class="loading-indicator">"Loading tasks..."</p>
            })}

            {move || load_error.get().map(|message| view! {
                <p class="load-error">{format!("Could not load tasks: {message}")}</p>
            })}

            <TaskListView list=list.clone() filters=route_filter.filters.into() />
        </div>
    }
}
