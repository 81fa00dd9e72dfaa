//! Backend Query Parameters
//!
//! Translation of a `GanttFilter` into the task collection query the backend
//! understands.

use serde::Serialize;

use crate::filter::GanttFilter;

/// Query parameters for the paginated task collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskQueryParams {
    pub sort_by: Vec<String>,
    pub order_by: Vec<String>,
    pub filter_by: Vec<String>,
    pub filter_comparator: Vec<String>,
    pub filter_value: Vec<String>,
    pub filter_concat: String,
    pub filter_include_nulls: bool,
}

/// Fixed sort chain plus the date-range predicate implied by the filter.
///
/// The tie-break chain (start date, done, id desc) keeps ordering
/// deterministic for undated, incomplete and same-day tasks.
pub fn filter_to_query_params(filter: &GanttFilter) -> TaskQueryParams {
    TaskQueryParams {
        sort_by: to_strings(&["start_date", "done", "id"]),
        order_by: to_strings(&["asc", "asc", "desc"]),
        filter_by: to_strings(&["start_date", "start_date"]),
        filter_comparator: to_strings(&["greater_equals", "less_equals"]),
        filter_value: vec![
            filter.date_from.format("%Y-%m-%d").to_string(),
            filter.date_to.format("%Y-%m-%d").to_string(),
        ],
        filter_concat: "and".to_string(),
        filter_include_nulls: filter.show_tasks_without_dates,
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filter() -> GanttFilter {
        GanttFilter {
            list_id: 7,
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            show_tasks_without_dates: false,
        }
    }

    #[test]
    fn produces_fixed_sort_chain_and_range_predicate() {
        let params = filter_to_query_params(&filter());

        assert_eq!(params.sort_by, ["start_date", "done", "id"]);
        assert_eq!(params.order_by, ["asc", "asc", "desc"]);
        assert_eq!(params.filter_by, ["start_date", "start_date"]);
        assert_eq!(params.filter_comparator, ["greater_equals", "less_equals"]);
        assert_eq!(params.filter_value, ["2024-01-01", "2024-02-01"]);
        assert_eq!(params.filter_concat, "and");
        assert!(!params.filter_include_nulls);
    }

    #[test]
    fn include_nulls_mirrors_the_filter_flag() {
        let mut f = filter();
        f.show_tasks_without_dates = true;
        assert!(filter_to_query_params(&f).filter_include_nulls);
    }

    #[test]
    fn serializes_with_backend_field_names() {
        let json = serde_json::to_value(filter_to_query_params(&filter())).unwrap();
        assert_eq!(json["sort_by"][0], "start_date");
        assert_eq!(json["filter_comparator"][1], "less_equals");
        assert_eq!(json["filter_include_nulls"], false);
    }
}
