use chrono::NaiveDate;

use super::ast::{FieldFilter, FilterExpr, FilterField, FilterOperator};
use crate::models::SavedSearch;

/// Apply filters to saved searches, keeping history order
///
/// Implicit queries are grouped by field (OR within a field, AND across fields).
/// Queries with explicit operators are evaluated left-to-right with no precedence
/// between AND and OR.
pub fn apply_filters(entries: Vec<SavedSearch>, filter: &FilterExpr) -> Vec<SavedSearch> {
    if filter.is_empty() {
        return entries;
    }

    entries.into_iter().filter(|entry| evaluate_filter(entry, filter)).collect()
}

const FIELDS: [FilterField; 3] = [FilterField::Location, FilterField::Segment, FilterField::Since];

fn evaluate_filter(entry: &SavedSearch, filter: &FilterExpr) -> bool {
    if filter.explicit_operators {
        evaluate_in_order(entry, filter)
    } else {
        evaluate_grouped(entry, filter)
    }
}

fn evaluate_grouped(entry: &SavedSearch, filter: &FilterExpr) -> bool {
    FIELDS.iter().all(|field| {
        let mut group = filter.filters.iter().filter(|f| &f.field == field).peekable();
        group.peek().is_none() || group.any(|f| evaluate_field_filter(entry, f))
    })
}

fn evaluate_in_order(entry: &SavedSearch, filter: &FilterExpr) -> bool {
    let Some(first) = filter.filters.first() else {
        return true;
    };

    let mut result = evaluate_field_filter(entry, first);
    for (operator, next) in filter.operators.iter().zip(filter.filters.iter().skip(1)) {
        let next_result = evaluate_field_filter(entry, next);
        result = match operator {
            FilterOperator::And => result && next_result,
            FilterOperator::Or => result || next_result,
        };
    }

    result
}

fn evaluate_field_filter(entry: &SavedSearch, filter: &FieldFilter) -> bool {
    let needle = filter.value.to_lowercase();
    match filter.field {
        FilterField::Location => entry.params.location().to_lowercase().contains(&needle),
        FilterField::Segment => [entry.params.segment(), entry.params.sub_segment()]
            .into_iter()
            .flatten()
            .any(|s| s.to_lowercase().contains(&needle)),
        FilterField::Since => match_since(entry, &filter.value),
    }
}

/// Match searches saved at or after midnight UTC on the given date
fn match_since(entry: &SavedSearch, value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .is_some_and(|start| entry.timestamp >= start.and_utc())
}
