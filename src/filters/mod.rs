//! Querying saved-search history: field filters and fuzzy ranking.

pub mod apply;
pub mod ast;
pub mod fuzzy;
pub mod parser;

pub use apply::apply_filters;
pub use ast::{FieldFilter, FilterExpr, FilterField, FilterOperator};
pub use fuzzy::fuzzy_rank;
pub use parser::parse_filter;
