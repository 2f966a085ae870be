//! # Status Transition Validator
//!
//! Checks a proposed status change against the fixed transition table in
//! [`OrderStatus::allowed_transitions`].
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Kitchen screen: "Mark as ready"                                        │
//! │                                                                         │
//! │  validate_status_transition("in_preparation", "READY ")                │
//! │       │                                                                 │
//! │       ├── normalize both (trim, lowercase)                              │
//! │       ├── unknown status?            → UnknownStatus        (value)    │
//! │       ├── same status?               → SameStatus           (transition)│
//! │       ├── edge not in table?         → TransitionNotAllowed (transition)│
//! │       │                                                                 │
//! │       └── Ok(true) → caller updates its own order record               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here mutates an order. Applying the transition is the caller's job.

use serde_json::Value;
use tracing::debug;

use crate::error::{OrderError, OrderResult, StatusRole};
use crate::types::{normalize, OrderStatus};
use crate::validation::json_type_name;

/// Validates a transition between two status names.
///
/// Both names are trimmed and lower-cased first. Returns `Ok(true)` when the
/// transition is allowed.
///
/// ## Example
/// ```rust
/// use fastfood_core::{validate_status_transition, ErrorKind};
///
/// assert!(validate_status_transition("pending", "confirmed").unwrap());
///
/// let err = validate_status_transition("pending", "ready").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Transition);
/// ```
pub fn validate_status_transition(current: &str, desired: &str) -> OrderResult<bool> {
    let from = resolve(current, StatusRole::Current)?;
    let to = resolve(desired, StatusRole::New)?;

    if from == to {
        debug!(status = %from, "status transition rejected: unchanged");
        return Err(OrderError::SameStatus { status: from });
    }

    if !from.can_transition_to(to) {
        debug!(%from, %to, "status transition rejected");
        return Err(OrderError::TransitionNotAllowed {
            from,
            to,
            allowed: from.allowed_transitions(),
        });
    }

    debug!(%from, %to, "status transition accepted");
    Ok(true)
}

/// Same as [`validate_status_transition`], for arguments that arrive as
/// untyped JSON. Non-string arguments are a type error.
pub fn validate_status_transition_value(current: &Value, desired: &Value) -> OrderResult<bool> {
    let current = expect_str(current, StatusRole::Current)?;
    let desired = expect_str(desired, StatusRole::New)?;
    validate_status_transition(current, desired)
}

/// The whole transition table, in lifecycle order.
pub fn transition_table() -> [(OrderStatus, &'static [OrderStatus]); 6] {
    OrderStatus::ALL.map(|status| (status, status.allowed_transitions()))
}

fn resolve(raw: &str, role: StatusRole) -> OrderResult<OrderStatus> {
    let status = normalize(raw);
    status
        .parse()
        .map_err(|_| OrderError::UnknownStatus { role, status })
}

fn expect_str(value: &Value, role: StatusRole) -> OrderResult<&str> {
    value.as_str().ok_or(OrderError::StatusNotString {
        role,
        found: json_type_name(value),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
