//! # Order Total Calculator
//!
//! Sums `price × quantity` over a list of line items and rounds once, half
//! to even, to 2 decimal places.
//!
//! ## User Workflow
//! ```text
//! Caller JSON: [{"price": 10.5, "quantity": 2}, {"price": 5.0, "quantity": 1}]
//!      │
//!      ▼
//! calculate_order_total() ← THIS MODULE
//!      │
//!      ├── not a list?           → NotAList         (type)
//!      ├── empty?                → EmptyItems       (domain)
//!      ├── element i invalid?    → InvalidLineItem  (kind of the field error)
//!      │
//!      ▼
//! Σ in exact Decimal ──► round(2, half-even) ──► Money (26.00)
//! ```
//!
//! The first invalid element aborts the whole call. There is no partial
//! total.

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use crate::error::{OrderError, OrderResult, ValidationError};
use crate::money::Money;
use crate::types::LineItem;
use crate::validation::json_type_name;

/// Computes the total of an untyped list of line items.
///
/// ## Example
/// ```rust
/// use fastfood_core::calculate_order_total;
/// use serde_json::json;
///
/// let items = json!([
///     {"price": 10.5, "quantity": 2},
///     {"price": 5.0, "quantity": 1},
///     {"price": 2.25, "quantity": 4},
/// ]);
/// assert_eq!(calculate_order_total(&items).unwrap().to_string(), "35.00");
/// ```
pub fn calculate_order_total(items: &Value) -> OrderResult<Money> {
    let elements = items.as_array().ok_or(OrderError::NotAList {
        found: json_type_name(items),
    })?;

    if elements.is_empty() {
        return Err(OrderError::EmptyItems);
    }

    let line_items = elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            LineItem::from_value(element)
                .map_err(|source| OrderError::InvalidLineItem { index, source })
        })
        .collect::<OrderResult<Vec<_>>>()
        .inspect_err(|err| debug!(kind = %err.kind(), error = %err, "order total rejected"))?;

    sum_line_items(&line_items)
}

/// Computes the total of already-validated line items.
pub fn sum_line_items(items: &[LineItem]) -> OrderResult<Money> {
    if items.is_empty() {
        return Err(OrderError::EmptyItems);
    }

    let mut sum = Decimal::ZERO;
    for (index, item) in items.iter().enumerate() {
        let line = item.line_total().ok_or_else(|| OrderError::InvalidLineItem {
            index,
            source: ValidationError::OutOfRange {
                field: "line total",
                value: format!("{} × {}", item.price(), item.quantity()),
            },
        })?;
        sum = sum.checked_add(line).ok_or(OrderError::TotalOutOfRange)?;
    }

    let total = Money::from_decimal_rounded(sum).ok_or(OrderError::TotalOutOfRange)?;
    debug!(items = items.len(), %total, "order total computed");
    Ok(total)
}

// =============================================================================
// Unit Tests
// =============================================================================
