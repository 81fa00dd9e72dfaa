//! Filter Bar Component
//!
//! Date-range inputs and the "show tasks without dates" toggle. Every change
//! goes through the route binding, so the URL always matches what is shown.

use chrono::NaiveDate;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::filter::GanttFilter;
use crate::route::RouteFilter;

fn target_input(ev: &web_sys::Event) -> Option<web_sys::HtmlInputElement> {
    ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()
}

#[component]
pub fn FilterBar(route_filter: RouteFilter<GanttFilter>) -> impl IntoView {
    let filters = route_filter.filters;

    let set_date_from = {
        let binding = route_filter.clone();
        move |ev: web_sys::Event| {
            let Some(input) = target_input(&ev) else { return };
            if let Ok(date) = NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d") {
                let mut filter = filters.get_untracked();
                filter.date_from = date;
                binding.set(filter);
            }
        }
    };

    let set_date_to = {
        let binding = route_filter.clone();
        move |ev: web_sys::Event| {
            let Some(input) = target_input(&ev) else { return };
            if let Ok(date) = NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d") {
                let mut filter = filters.get_untracked();
                filter.date_to = date;
                binding.set(filter);
            }
        }
    };

    let toggle_undated = {
        let binding = route_filter.clone();
        move |ev: web_sys::Event| {
            let Some(input) = target_input(&ev) else { return };
            let mut filter = filters.get_untracked();
            filter.show_tasks_without_dates = input.checked();
            binding.set(filter);
        }
    };

    view! {
        <div class="filter-bar">
            <label>
                "From"
                <input
                    type="date"
                    prop:value=move || filters.get().date_from.format("%Y-%m-%d").to_string()
                    on:change=set_date_from
                />
            </label>
            <label>
                "To"
                <input
                    type="date"
                    prop:value=move || filters.get().date_to.format("%Y-%m-%d").to_string()
                    on:change=set_date_to
                />
            </label>
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || filters.get().show_tasks_without_dates
                    on:change=toggle_undated
                />
                "Show tasks without dates"
            </label>
        </div>
    }
}
