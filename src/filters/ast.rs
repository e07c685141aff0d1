/// Filter fields for saved-search queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterField {
    /// Filter by searched location (partial, case-insensitive)
    Location,
    /// Filter by segment or sub-segment (partial, case-insensitive)
    Segment,
    /// Filter searches on or after date (YYYY-MM-DD format)
    Since,
}

/// Logical operators for combining filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOperator {
    /// Both conditions must match (default between different fields)
    And,
    /// Either condition matches (default within same field)
    Or,
}

/// Single field:value filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: FilterField,
    pub value: String,
}

impl FieldFilter {
    pub fn new(field: FilterField, value: String) -> Self {
        Self { field, value }
    }
}

/// Filter expression combining multiple field filters with operators
///
/// Without explicit operators, filters are grouped by field:
/// - Same-field filters are OR'd together: location:baltimore location:towson
/// - Cross-field groups are AND'd together: location:baltimore segment:hospitals
///
/// Any explicit AND/OR switches to plain left-to-right evaluation (no parentheses).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterExpr {
    pub filters: Vec<FieldFilter>,
    pub operators: Vec<FilterOperator>,
    /// Set when the query spelled out at least one AND/OR
    pub explicit_operators: bool,
}

impl FilterExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_filter(&mut self, filter: FieldFilter) {
        self.filters.push(filter);
    }

    pub fn add_operator(&mut self, operator: FilterOperator) {
        self.operators.push(operator);
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_expr_empty() {
        let expr = FilterExpr::new();
        assert!(expr.is_empty());
        assert_eq!(expr.operators.len(), 0);
    }

    #[test]
    fn test_filter_expr_with_operators() {
        let mut expr = FilterExpr::new();
        expr.add_filter(FieldFilter::new(FilterField::Location, "baltimore".to_string()));
        expr.add_operator(FilterOperator::And);
        expr.add_filter(FieldFilter::new(FilterField::Segment, "hospitals".to_string()));
        assert!(!expr.is_empty());
        assert_eq!(expr.filters.len(), 2);
        assert_eq!(expr.operators, [FilterOperator::And]);
    }
}
