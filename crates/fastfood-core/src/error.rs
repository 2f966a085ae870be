//! # Error Types
//!
//! Domain-specific error types for fastfood-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fastfood-core errors (this file)                                       │
//! │  ├── OrderError       - Everything the two operations can return       │
//! │  └── ValidationError  - One line item failed a field check             │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                  │
//! │  └── anyhow::Error    - I/O, JSON syntax, configuration                │
//! │                                                                         │
//! │  Flow: ValidationError → OrderError → caller (exit code, JSON body)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Kinds
//! Callers rarely care about the exact variant. They care which of four
//! families it belongs to, because that decides how the failure is reported:
//!
//! | Kind         | Meaning                                              |
//! |--------------|------------------------------------------------------|
//! | `Type`       | Input has the wrong shape (not a list, not a number) |
//! | `Domain`     | Well-typed but invalid (empty, negative, missing)    |
//! | `Value`      | Not one of the known order statuses                  |
//! | `Transition` | Known statuses, but the edge is not allowed          |
//!
//! Every variant maps to exactly one kind through [`OrderError::kind`].

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use crate::types::OrderStatus;

// =============================================================================
// Error Kind
// =============================================================================

/// The family an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed input shape (wrong container, non-numeric or non-string field).
    Type,
    /// Semantically invalid but well-typed input.
    Domain,
    /// Value outside the permitted enumeration.
    Value,
    /// Transition not on the allowed-edge list.
    Transition,
}

impl ErrorKind {
    /// Stable lowercase name, matches the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Type => "type",
            ErrorKind::Domain => "domain",
            ErrorKind::Value => "value",
            ErrorKind::Transition => "transition",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a transition a status argument was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRole {
    Current,
    New,
}

impl fmt::Display for StatusRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusRole::Current => f.write_str("current"),
            StatusRole::New => f.write_str("new"),
        }
    }
}

// =============================================================================
// Order Error
// =============================================================================

/// Errors returned by the order total calculator and the status transition
/// validator.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The argument to the calculator is not a list.
    #[error("line items must be a list, got {found}")]
    NotAList { found: &'static str },

    /// The line item list is empty.
    #[error("line item list cannot be empty")]
    EmptyItems,

    /// One line item failed validation.
    ///
    /// ## When This Occurs
    /// ```text
    /// [{price: 10.5, quantity: 2}, {price: -1, quantity: 1}]
    ///                                      │
    ///                                      ▼
    /// InvalidLineItem { index: 1, source: Negative { field: "price", .. } }
    ///                                      │
    ///                                      ▼
    /// "line item 1: price cannot be negative (got -1)"
    /// ```
    #[error("line item {index}: {source}")]
    InvalidLineItem {
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// The sum does not fit in the money representation.
    #[error("order total is out of range")]
    TotalOutOfRange,

    /// A status argument is not a string.
    #[error("{role} status must be a string, got {found}")]
    StatusNotString {
        role: StatusRole,
        found: &'static str,
    },

    /// A status name is not one of the known statuses.
    #[error(
        "invalid {role} status '{status}'; valid statuses: {}",
        format_statuses(&OrderStatus::ALL)
    )]
    UnknownStatus { role: StatusRole, status: String },

    /// The desired status is the current status.
    #[error("new status must differ from current status '{status}'")]
    SameStatus { status: OrderStatus },

    /// The desired status is not reachable from the current status.
    ///
    /// `allowed` is what the current status can actually move to; it is
    /// empty for terminal statuses.
    #[error(
        "transition from '{from}' to '{to}' is not allowed; valid transitions: {}",
        format_statuses(.allowed)
    )]
    TransitionNotAllowed {
        from: OrderStatus,
        to: OrderStatus,
        allowed: &'static [OrderStatus],
    },
}

impl OrderError {
    /// Maps the error onto its [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::NotAList { .. } | OrderError::StatusNotString { .. } => ErrorKind::Type,
            OrderError::EmptyItems | OrderError::TotalOutOfRange => ErrorKind::Domain,
            OrderError::InvalidLineItem { source, .. } => source.kind(),
            OrderError::UnknownStatus { .. } => ErrorKind::Value,
            OrderError::SameStatus { .. } | OrderError::TransitionNotAllowed { .. } => {
                ErrorKind::Transition
            }
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level failures for a single line item.
///
/// These never reach a caller on their own; [`OrderError::InvalidLineItem`]
/// wraps them with the position of the item.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The element is not an object.
    #[error("must be an object with 'price' and 'quantity', got {found}")]
    NotARecord { found: &'static str },

    /// A required key is absent.
    #[error("must have both 'price' and 'quantity' keys ('{field}' is missing)")]
    MissingField { field: &'static str },

    /// The field holds something other than a number.
    #[error("{field} must be a number, got {found}")]
    NotNumeric {
        field: &'static str,
        found: &'static str,
    },

    /// The field is below zero.
    #[error("{field} cannot be negative (got {value})")]
    Negative { field: &'static str, value: String },

    /// The number cannot be represented exactly, or the product overflows.
    #[error("{field} is out of range (got {value})")]
    OutOfRange { field: &'static str, value: String },
}

impl ValidationError {
    /// Maps the error onto its [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::NotARecord { .. } | ValidationError::NotNumeric { .. } => {
                ErrorKind::Type
            }
            ValidationError::MissingField { .. }
            | ValidationError::Negative { .. }
            | ValidationError::OutOfRange { .. } => ErrorKind::Domain,
        }
    }
}

/// Renders a status list as `[a, b]`, or `[]` when empty.
fn format_statuses(statuses: &[OrderStatus]) -> String {
    let names: Vec<&str> = statuses.iter().map(OrderStatus::as_str).collect();
    format!("[{}]", names.join(", "))
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_error_message_carries_index() {
        let err = OrderError::InvalidLineItem {
            index: 2,
            source: ValidationError::Negative {
                field: "quantity",
                value: "-3".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "line item 2: quantity cannot be negative (got -3)"
        );
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_line_item_kind_follows_source() {
        let err = OrderError::InvalidLineItem {
            index: 0,
            source: ValidationError::NotNumeric {
                field: "price",
                found: "string",
            },
        };
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_unknown_status_lists_valid_statuses() {
        let err = OrderError::UnknownStatus {
            role: StatusRole::Current,
            status: "shipped".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid current status 'shipped'; valid statuses: \
             [pending, confirmed, in_preparation, ready, delivered, cancelled]"
        );
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_transition_error_with_empty_options() {
        let err = OrderError::TransitionNotAllowed {
            from: OrderStatus::Delivered,
            to: OrderStatus::InPreparation,
            allowed: &[],
        };
        assert_eq!(
            err.to_string(),
            "transition from 'delivered' to 'in_preparation' is not allowed; valid transitions: []"
        );
        assert_eq!(err.kind(), ErrorKind::Transition);
    }

    #[test]
    fn test_error_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::Transition).unwrap();
        assert_eq!(json, "\"transition\"");
        assert_eq!(ErrorKind::Type.to_string(), "type");
    }
}
