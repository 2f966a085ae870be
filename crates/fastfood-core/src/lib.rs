//! # fastfood-core: Pure Order Rules for FastFood
//!
//! This crate holds the two business rules every FastFood order goes
//! through, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FastFood Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Callers (apps/cli, ordering API, kiosk)            │   │
//! │  │   own the order record, translate errors into responses         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ fastfood-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌─────────┐  │   │
//! │  │   │order_total │  │ transition │  │ validation │  │  types  │  │   │
//! │  │   │  Σ p × q   │  │  state     │  │  JSON →    │  │ Status  │  │   │
//! │  │   │  → Money   │  │  machine   │  │  LineItem  │  │LineItem │  │   │
//! │  │   └────────────┘  └────────────┘  └────────────┘  └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • NO PERSISTENCE • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`order_total`] - Order total calculator
//! - [`transition`] - Status transition validator
//! - [`validation`] - JSON line item validation
//! - [`types`] - `LineItem`, `OrderStatus` and the transition table
//! - [`money`] - Integer-cents result type
//! - [`error`] - Error types and their kinds
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, no side effects
//! 2. **Exact Arithmetic**: prices are `Decimal`, totals are integer cents
//! 3. **Explicit Errors**: every failure is a typed variant with an [`ErrorKind`]
//! 4. **Immutable Rules**: the transition table is a `const` match, safe from any thread
//!
//! ## Example Usage
//!
//! ```rust
//! use fastfood_core::{calculate_order_total, validate_status_transition, ErrorKind};
//! use serde_json::json;
//!
//! let items = json!([{"price": 10.5, "quantity": 2}, {"price": 5.0, "quantity": 1}]);
//! assert_eq!(calculate_order_total(&items).unwrap().cents(), 2600);
//!
//! assert!(validate_status_transition("pending", "confirmed").unwrap());
//!
//! let err = validate_status_transition("delivered", "pending").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Transition);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order_total;
pub mod transition;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ErrorKind, OrderError, OrderResult, StatusRole, ValidationError};
pub use money::Money;
pub use order_total::{calculate_order_total, sum_line_items};
pub use transition::{transition_table, validate_status_transition, validate_status_transition_value};
pub use types::{LineItem, OrderStatus, ParseStatusError};
