//! Route Representation & Filter Binding
//!
//! The route is the external, shareable form of the current filter: a
//! path-embedded list id plus a query string. `RouteFilter` keeps a typed
//! filter signal in sync with it.

use std::collections::BTreeMap;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// External representation of the gantt view location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GanttRoute {
    /// Path parameter, kept as the raw string the location carries.
    pub list_id: String,
    pub query: BTreeMap<String, String>,
}

impl GanttRoute {
    pub fn new(list_id: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            query: BTreeMap::new(),
        }
    }

    /// Read the current browser location. Falls back to an empty route
    /// outside a browser context.
    pub fn from_location() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let location = window.location();
        let pathname = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        Self {
            list_id: parse_list_id(&pathname),
            query: parse_query(&search),
        }
    }

    /// The href this route encodes to, e.g. `/lists/7/gantt?dateFrom=...`.
    pub fn to_href(&self) -> String {
        format!("/lists/{}/gantt{}", self.list_id, format_query(&self.query))
    }

    /// Replace the current history entry without a page transition.
    pub fn replace_in_history(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&self.to_href()));
        }
    }
}

/// Extract the segment following `lists` from a pathname.
fn parse_list_id(pathname: &str) -> String {
    let mut segments = pathname.split('/').filter(|s| !s.is_empty());
    segments
        .by_ref()
        .find(|s| *s == "lists")
        .and_then(|_| segments.next())
        .unwrap_or_default()
        .to_string()
}

// No percent encoding on either side: the values carried here are dates,
// numeric ids and booleans. Revisit before adding free-text query values.
fn parse_query(search: &str) -> BTreeMap<String, String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

fn format_query(query: &BTreeMap<String, String>) -> String {
    if query.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("?{}", pairs.join("&"))
}

/// Reactive binding between a route and its typed filter.
///
/// The filter signal is written on every `set`/`sync_from_route`, without an
/// equality gate: assigning a value deep-equal to the current one still
/// notifies subscribers, so a reload is triggered per assignment.
pub struct RouteFilter<F>
where
    F: Clone + Send + Sync + 'static,
{
    pub filters: RwSignal<F>,
    from_route: fn(&GanttRoute) -> F,
    to_route: fn(&F) -> GanttRoute,
    navigate: Rc<dyn Fn(&GanttRoute)>,
}

impl<F> Clone for RouteFilter<F>
where
    F: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            filters: self.filters,
            from_route: self.from_route,
            to_route: self.to_route,
            navigate: Rc::clone(&self.navigate),
        }
    }
}

impl<F> RouteFilter<F>
where
    F: Clone + Send + Sync + 'static,
{
    pub fn new(
        route: &GanttRoute,
        from_route: fn(&GanttRoute) -> F,
        to_route: fn(&F) -> GanttRoute,
        navigate: Rc<dyn Fn(&GanttRoute)>,
    ) -> Self {
        Self {
            filters: RwSignal::new(from_route(route)),
            from_route,
            to_route,
            navigate,
        }
    }

    /// Re-encode `filter` into the location (replace, not a transition) and
    /// publish it to subscribers. Does not fetch anything itself.
    pub fn set(&self, filter: F) {
        (self.navigate)(&(self.to_route)(&filter));
        self.filters.set(filter);
    }

    /// Decode an externally changed route (e.g. popstate) into the signal.
    pub fn sync_from_route(&self, route: &GanttRoute) {
        self.filters.set((self.from_route)(route));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn parses_query_pairs() {
        let query = parse_query("?dateFrom=2024-01-01&dateTo=2024-02-01&showTasksWithoutDates=true");
        assert_eq!(query.get("dateFrom").map(String::as_str), Some("2024-01-01"));
        assert_eq!(query.get("dateTo").map(String::as_str), Some("2024-02-01"));
        assert_eq!(
            query.get("showTasksWithoutDates").map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn empty_search_parses_to_empty_query() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
    }

    #[test]
    fn formats_query_back_to_search() {
        let mut route = GanttRoute::new("7");
        route
            .query
            .insert("dateFrom".to_string(), "2024-01-01".to_string());
        route
            .query
            .insert("dateTo".to_string(), "2024-02-01".to_string());
        assert_eq!(
            route.to_href(),
            "/lists/7/gantt?dateFrom=2024-01-01&dateTo=2024-02-01"
        );
    }

    #[test]
    fn href_without_query_has_no_question_mark() {
        assert_eq!(GanttRoute::new("12").to_href(), "/lists/12/gantt");
    }

    #[test]
    fn extracts_list_id_from_pathname() {
        assert_eq!(parse_list_id("/lists/42/gantt"), "42");
        assert_eq!(parse_list_id("/somewhere/else"), "");
        assert_eq!(parse_list_id(""), "");
    }

    fn upper(route: &GanttRoute) -> String {
        route.list_id.to_uppercase()
    }

    fn lower(s: &String) -> GanttRoute {
        GanttRoute::new(s.to_lowercase())
    }

    #[test]
    fn set_navigates_with_encoded_route_and_updates_signal() {
        let owner = Owner::new();
        owner.set();

        let navigated: Rc<RefCell<Vec<GanttRoute>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&navigated);
        let binding = RouteFilter::new(
            &GanttRoute::new("abc"),
            upper,
            lower,
            Rc::new(move |route: &GanttRoute| sink.borrow_mut().push(route.clone())),
        );
        assert_eq!(binding.filters.get_untracked(), "ABC");

        binding.set("XYZ".to_string());
        assert_eq!(binding.filters.get_untracked(), "XYZ");
        assert_eq!(navigated.borrow().len(), 1);
        assert_eq!(navigated.borrow()[0].list_id, "xyz");
    }

    #[test]
    fn sync_from_route_decodes_into_signal() {
        let owner = Owner::new();
        owner.set();

        let binding = RouteFilter::new(&GanttRoute::new("abc"), upper, lower, Rc::new(|_| {}));
        binding.sync_from_route(&GanttRoute::new("def"));
        assert_eq!(binding.filters.get_untracked(), "DEF");
    }
}
