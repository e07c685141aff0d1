//! Filter query parser for saved-search history.
//!
//! # Syntax
//!
//! ```text
//! filter_expr  := field_filter (operator? field_filter)*
//! field_filter := field_name:value | field_name:"quoted value"
//! operator     := AND | OR (case-insensitive)
//! field_name   := location | segment | since (case-insensitive)
//! ```
//!
//! # Examples
//!
//! ```rust
//! # use prospect_finder::filters::parser::parse_filter;
//! let expr = parse_filter("location:baltimore").unwrap();
//! let expr = parse_filter("location:\"Baltimore, MD\" segment:hospitals").unwrap();
//! let expr = parse_filter("segment:hotels OR segment:grocery since:2025-01-01").unwrap();
//! ```
//!
//! Implicit operators: OR within the same field, AND across fields, regardless of
//! where repeated fields appear. Explicit AND/OR apply left to right.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;

use super::ast::{FieldFilter, FilterExpr, FilterField, FilterOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    FieldValue { field: String, value: String },
    And,
    Or,
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        let word = read_word(&mut chars);

        match word.to_uppercase().as_str() {
            "AND" => tokens.push(Token::And),
            "OR" => tokens.push(Token::Or),
            _ => {
                let Some(colon_pos) = word.find(':') else {
                    return Err(anyhow!(
                        "Invalid token: '{}' (expected field:value or AND/OR)",
                        word
                    ));
                };

                let field = word[..colon_pos].to_string();
                let mut value = word[colon_pos + 1..].to_string();
                if value.starts_with('"') {
                    value = read_quoted_value(&mut chars, &value)?;
                }

                if field.is_empty() || value.trim().is_empty() {
                    return Err(anyhow!("Invalid field:value format: {}", word));
                }

                tokens.push(Token::FieldValue { field, value });
            }
        }
    }

    Ok(tokens)
}

/// Read a word (until whitespace or end)
fn read_word(chars: &mut std::iter::Peekable<std::str::Chars>) -> String {
    let mut word = String::new();
    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            break;
        }
        word.push(ch);
        chars.next();
    }
    word
}

/// Read a quoted value; `initial` already holds the opening quote and the rest of its word
fn read_quoted_value(
    chars: &mut std::iter::Peekable<std::str::Chars>,
    initial: &str,
) -> Result<String> {
    let mut value = initial[1..].to_string();

    if let Some(quote_pos) = value.find('"') {
        return Ok(value[..quote_pos].to_string());
    }

    for ch in chars.by_ref() {
        if ch == '"' {
            return Ok(value);
        }
        value.push(ch);
    }

    Err(anyhow!("Unterminated quoted string"))
}

fn parse_field(field: &str) -> Result<FilterField> {
    match field.to_lowercase().as_str() {
        "location" | "loc" => Ok(FilterField::Location),
        "segment" | "seg" => Ok(FilterField::Segment),
        "since" => Ok(FilterField::Since),
        _ => Err(anyhow!("Unknown field: '{}' (valid fields: location, segment, since)", field)),
    }
}

/// Parse filter string into FilterExpr; an empty string yields an empty expression
pub fn parse_filter(input: &str) -> Result<FilterExpr> {
    let tokens = tokenize(input).context("Failed to tokenize filter")?;

    let mut expr = FilterExpr::new();
    let mut expecting_filter = true;
    let mut last_field: Option<FilterField> = None;

    for token in tokens {
        match token {
            Token::FieldValue { field, value } => {
                let filter_field = parse_field(&field)?;
                validate_value(&filter_field, &value)?;

                if !expecting_filter {
                    let implicit_op = match &last_field {
                        Some(prev) if prev == &filter_field => FilterOperator::Or,
                        _ => FilterOperator::And,
                    };
                    expr.add_operator(implicit_op);
                }

                expr.add_filter(FieldFilter::new(filter_field.clone(), value));
                last_field = Some(filter_field);
                expecting_filter = false;
            }
            Token::And | Token::Or if expecting_filter => {
                return Err(anyhow!("Unexpected operator (expected field:value)"));
            }
            Token::And => {
                expr.add_operator(FilterOperator::And);
                expr.explicit_operators = true;
                expecting_filter = true;
            }
            Token::Or => {
                expr.add_operator(FilterOperator::Or);
                expr.explicit_operators = true;
                expecting_filter = true;
            }
        }
    }

    if expecting_filter && !expr.is_empty() {
        return Err(anyhow!("Filter ended with operator (expected field:value)"));
    }

    Ok(expr)
}

fn validate_value(field: &FilterField, value: &str) -> Result<()> {
    match field {
        FilterField::Since if !is_valid_date_format(value) => {
            Err(anyhow!("Invalid date format: '{}' (expected YYYY-MM-DD)", value))
        }
        _ => Ok(()),
    }
}

/// Check if string is a real YYYY-MM-DD date
pub(crate) fn is_valid_date_format(s: &str) -> bool {
    s.len() == 10 && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_quoted_value() {
        let tokens = tokenize("location:\"Baltimore, MD\"").unwrap();
        assert_eq!(
            tokens,
            [Token::FieldValue { field: "location".to_string(), value: "Baltimore, MD".to_string() }]
        );
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        let err = tokenize("location:\"Baltimore").unwrap_err();
        assert!(err.to_string().contains("Unterminated"));
    }

    #[test]
    fn test_tokenize_invalid_token() {
        let err = tokenize("baltimore").unwrap_err();
        assert!(err.to_string().contains("Invalid token"));
    }

    #[test]
    fn test_tokenize_empty_field_or_value() {
        assert!(tokenize(":value").unwrap_err().to_string().contains("Invalid field:value"));
        assert!(tokenize("location:").unwrap_err().to_string().contains("Invalid field:value"));
    }

    #[test]
    fn test_parse_field_aliases_and_case() {
        assert_eq!(parse_field("LOCATION").unwrap(), FilterField::Location);
        assert_eq!(parse_field("seg").unwrap(), FilterField::Segment);
        assert!(parse_field("project").unwrap_err().to_string().contains("Unknown field"));
    }

    #[test]
    fn test_parse_filter_empty() {
        assert!(parse_filter("").unwrap().is_empty());
        assert!(parse_filter("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_filter_implicit_operators() {
        let expr = parse_filter("location:baltimore segment:hospitals").unwrap();
        assert_eq!(expr.operators, [FilterOperator::And]);

        let expr = parse_filter("segment:hotels segment:grocery").unwrap();
        assert_eq!(expr.operators, [FilterOperator::Or]);
        assert!(!expr.explicit_operators);
    }

    #[test]
    fn test_parse_filter_explicit_operator() {
        let expr = parse_filter("location:towson or segment:hotels").unwrap();
        assert_eq!(expr.filters.len(), 2);
        assert_eq!(expr.operators, [FilterOperator::Or]);
        assert!(expr.explicit_operators);
    }

    #[test]
    fn test_parse_filter_operator_placement() {
        assert!(parse_filter("AND location:towson").is_err());
        let err = parse_filter("location:towson AND").unwrap_err();
        assert!(err.to_string().contains("ended with operator"));
    }

    #[test]
    fn test_parse_filter_invalid_date() {
        let err = parse_filter("since:2025-02-30").unwrap_err();
        assert!(err.to_string().contains("Invalid date"));
        assert!(parse_filter("since:2024-02-29").is_ok());
    }
}
