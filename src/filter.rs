//! Gantt Filter
//!
//! Typed filter for the gantt view and its bidirectional mapping to the
//! route. Decoding never fails: missing or malformed values degrade to
//! defaults.

use std::rc::Rc;
use std::sync::OnceLock;

use chrono::{Duration, Local, NaiveDate};

use crate::models::ListId;
use crate::route::{GanttRoute, RouteFilter};

const DEFAULT_SHOW_TASKS_WITHOUT_DATES: bool = false;

const DEFAULT_DATE_FROM_DAY_OFFSET: i64 = -15;
const DEFAULT_DATE_TO_DAY_OFFSET: i64 = 55;

pub const QUERY_DATE_FROM: &str = "dateFrom";
pub const QUERY_DATE_TO: &str = "dateTo";
pub const QUERY_SHOW_TASKS_WITHOUT_DATES: &str = "showTasksWithoutDates";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// "Today" captured once at first use; the default range stays stable for
/// the lifetime of the app.
fn baseline() -> NaiveDate {
    static BASELINE: OnceLock<NaiveDate> = OnceLock::new();
    *BASELINE.get_or_init(|| Local::now().date_naive())
}

pub fn default_date_from() -> NaiveDate {
    baseline() + Duration::days(DEFAULT_DATE_FROM_DAY_OFFSET)
}

pub fn default_date_to() -> NaiveDate {
    baseline() + Duration::days(DEFAULT_DATE_TO_DAY_OFFSET)
}

/// Immutable query-shaping value for the gantt view. A new value replaces
/// the old one on every change; it is never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct GanttFilter {
    pub list_id: ListId,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub show_tasks_without_dates: bool,
}

impl Default for GanttFilter {
    fn default() -> Self {
        Self {
            list_id: 0,
            date_from: default_date_from(),
            date_to: default_date_to(),
            show_tasks_without_dates: DEFAULT_SHOW_TASKS_WITHOUT_DATES,
        }
    }
}

fn parse_date(value: Option<&String>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value?, DATE_FORMAT).ok()
}

fn parse_bool(value: Option<&String>) -> bool {
    value.map(|v| v == "true").unwrap_or(false)
}

/// Decode a route into a filter, substituting defaults for anything missing
/// or malformed. A non-numeric list id decodes to `0`.
pub fn route_to_filter(route: &GanttRoute) -> GanttFilter {
    GanttFilter {
        list_id: route.list_id.parse().unwrap_or(0),
        date_from: parse_date(route.query.get(QUERY_DATE_FROM)).unwrap_or_else(default_date_from),
        date_to: parse_date(route.query.get(QUERY_DATE_TO)).unwrap_or_else(default_date_to),
        show_tasks_without_dates: parse_bool(route.query.get(QUERY_SHOW_TASKS_WITHOUT_DATES)),
    }
}

/// Encode a filter back into a route. The date keys are omitted entirely
/// while both dates sit on the defaults, and the boolean key is omitted when
/// false, keeping shared URLs minimal.
pub fn filter_to_route(filter: &GanttFilter) -> GanttRoute {
    let mut route = GanttRoute::new(filter.list_id.to_string());

    if filter.date_from != default_date_from() || filter.date_to != default_date_to() {
        route.query.insert(
            QUERY_DATE_FROM.to_string(),
            filter.date_from.format(DATE_FORMAT).to_string(),
        );
        route.query.insert(
            QUERY_DATE_TO.to_string(),
            filter.date_to.format(DATE_FORMAT).to_string(),
        );
    }

    if filter.show_tasks_without_dates {
        route
            .query
            .insert(QUERY_SHOW_TASKS_WITHOUT_DATES.to_string(), "true".to_string());
    }

    route
}

/// Build the route binding for the gantt filter codec.
pub fn use_gantt_filter(
    route: &GanttRoute,
    navigate: Rc<dyn Fn(&GanttRoute)>,
) -> RouteFilter<GanttFilter> {
    RouteFilter::new(route, route_to_filter, filter_to_route, navigate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_route_decodes_to_defaults() {
        let filter = route_to_filter(&GanttRoute::new("7"));
        assert_eq!(filter.list_id, 7);
        assert_eq!(filter.date_from, default_date_from());
        assert_eq!(filter.date_to, default_date_to());
        assert!(!filter.show_tasks_without_dates);
    }

    #[test]
    fn default_range_is_minus_15_plus_55_days() {
        assert_eq!(default_date_from(), baseline() + Duration::days(-15));
        assert_eq!(default_date_to(), baseline() + Duration::days(55));
    }

    #[test]
    fn malformed_values_degrade_to_defaults() {
        let mut route = GanttRoute::new("not-a-number");
        route
            .query
            .insert(QUERY_DATE_FROM.to_string(), "03/05/2024".to_string());
        route
            .query
            .insert(QUERY_DATE_TO.to_string(), "garbage".to_string());
        route
            .query
            .insert(QUERY_SHOW_TASKS_WITHOUT_DATES.to_string(), "yes".to_string());

        let filter = route_to_filter(&route);
        assert_eq!(filter.list_id, 0);
        assert_eq!(filter.date_from, default_date_from());
        assert_eq!(filter.date_to, default_date_to());
        assert!(!filter.show_tasks_without_dates);
    }

    #[test]
    fn explicit_values_decode() {
        let mut route = GanttRoute::new("7");
        route
            .query
            .insert(QUERY_DATE_FROM.to_string(), "2024-01-01".to_string());
        route
            .query
            .insert(QUERY_DATE_TO.to_string(), "2024-02-01".to_string());
        route
            .query
            .insert(QUERY_SHOW_TASKS_WITHOUT_DATES.to_string(), "true".to_string());

        let filter = route_to_filter(&route);
        assert_eq!(filter.date_from, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(filter.date_to, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert!(filter.show_tasks_without_dates);
    }

    #[test]
    fn encode_omits_default_dates_and_false_flag() {
        let route = filter_to_route(&GanttFilter {
            list_id: 7,
            ..Default::default()
        });
        assert_eq!(route.list_id, "7");
        assert!(route.query.is_empty());
    }

    #[test]
    fn encode_keeps_non_default_dates() {
        let filter = GanttFilter {
            list_id: 7,
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            show_tasks_without_dates: true,
        };
        let route = filter_to_route(&filter);
        assert_eq!(
            route.query.get(QUERY_DATE_FROM).map(String::as_str),
            Some("2024-01-01")
        );
        assert_eq!(
            route.query.get(QUERY_DATE_TO).map(String::as_str),
            Some("2024-02-01")
        );
        assert_eq!(
            route.query.get(QUERY_SHOW_TASKS_WITHOUT_DATES).map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn decode_encode_decode_is_stable() {
        let mut route = GanttRoute::new("9");
        route
            .query
            .insert(QUERY_DATE_FROM.to_string(), "2024-03-05".to_string());
        route
            .query
            .insert(QUERY_DATE_TO.to_string(), "2024-04-05".to_string());

        let decoded = route_to_filter(&route);
        let redecoded = route_to_filter(&filter_to_route(&decoded));
        assert_eq!(decoded, redecoded);
    }
}
